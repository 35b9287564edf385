use crate::areas::repository::Repository;
use crate::artifacts::errors::RepoError;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::object::Object;
use std::io::Write;

impl Repository {
    /// Stage a working-tree file for the next commit
    ///
    /// Reads the file, stores its content as a blob, and records the
    /// filename -> hash entry in the staging index. A missing file is
    /// reported, not a process failure.
    pub fn add(&mut self, name: &str) -> anyhow::Result<()> {
        let content = match self.workspace().read_file(name) {
            Ok(content) => content,
            Err(err @ RepoError::FileNotFound(_)) => {
                writeln!(self.writer(), "{}", err)?;
                return Ok(());
            }
            Err(err) => return Err(err.into()),
        };

        let blob = Blob::new(content);
        let oid = blob.object_id()?;

        self.store_mut().put(oid.clone(), blob.into_content());
        self.index_mut().stage(name, oid);

        self.store().write_updates()?;
        self.index_mut().write_updates()?;

        writeln!(self.writer(), "File added to repository: {}", name)?;

        Ok(())
    }
}
