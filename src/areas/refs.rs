//! HEAD pointer
//!
//! HEAD marks the current checkout position: the hash of the commit the
//! working directory was last committed to or restored from. It is a single
//! line in the `HEAD` record; an absent or empty file means no commits exist.

use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use derive_new::new;
use std::path::{Path, PathBuf};

/// Name of the HEAD record file
pub const HEAD_RECORD: &str = "HEAD";

#[derive(Debug, new)]
pub struct Refs {
    /// Path to the repository state directory
    path: Box<Path>,
}

impl Refs {
    fn head_path(&self) -> PathBuf {
        self.path.join(HEAD_RECORD)
    }

    /// Current HEAD commit hash, or None when no commits exist
    ///
    /// An unreadable or malformed record degrades to None, matching the
    /// load policy of the other persisted structures.
    pub fn read_head(&self) -> Option<ObjectId> {
        let content = std::fs::read_to_string(self.head_path()).ok()?;
        let content = content.trim();

        if content.is_empty() {
            return None;
        }

        ObjectId::try_parse(content.to_string()).ok()
    }

    /// Point HEAD at a commit
    pub fn update_head(&self, oid: &ObjectId) -> anyhow::Result<()> {
        std::fs::create_dir_all(&self.path)
            .with_context(|| format!("Unable to create {}", self.path.display()))?;
        std::fs::write(self.head_path(), format!("{}\n", oid.as_ref()))
            .context("Unable to write HEAD record")
    }
}
