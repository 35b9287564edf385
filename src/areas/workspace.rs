use crate::artifacts::errors::RepoError;
use derive_new::new;
use std::path::Path;

/// Working-directory file access
///
/// All reads and writes of tracked files go through here so paths are always
/// resolved against the repository root.
#[derive(Debug, new)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read a working-tree file as text
    ///
    /// An absent file maps to `FileNotFound`, any other read error to
    /// `IoFailure`.
    pub fn read_file(&self, name: &str) -> Result<String, RepoError> {
        let file_path = self.path.join(name);

        std::fs::read_to_string(&file_path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                RepoError::FileNotFound(name.to_string())
            } else {
                RepoError::IoFailure {
                    path: file_path.display().to_string(),
                    source,
                }
            }
        })
    }

    /// Overwrite a working-tree file, creating parent directories as needed
    pub fn write_file(&self, name: &str, content: &str) -> Result<(), RepoError> {
        let file_path = self.path.join(name);

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| RepoError::IoFailure {
                path: parent.display().to_string(),
                source,
            })?;
        }

        std::fs::write(&file_path, content).map_err(|source| RepoError::IoFailure {
            path: file_path.display().to_string(),
            source,
        })
    }
}
