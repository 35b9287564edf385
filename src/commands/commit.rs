use crate::areas::repository::Repository;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object::{Object, tree_digest};
use crate::areas::history::Snapshot;
use crate::artifacts::errors::RepoError;
use std::io::Write;

impl Repository {
    /// Record the staged file set as a new commit
    ///
    /// An empty staging index is reported and nothing changes. Otherwise the
    /// snapshot is taken, missing blob content is backfilled from the working
    /// tree, and the commit is appended with HEAD moved onto it.
    pub fn commit(&mut self, message: &str, author: &str) -> anyhow::Result<()> {
        if self.index().is_empty() {
            writeln!(self.writer(), "{}", RepoError::NothingToCommit)?;
            return Ok(());
        }

        let snapshot = self.index().snapshot();
        self.backfill_contents(&snapshot)?;

        let tree_oid = tree_digest(&snapshot)?;
        let parent = self.refs().read_head();
        let is_root = match parent {
            Some(_) => "",
            None => "(root-commit) ",
        };

        let commit = Commit::new(
            tree_oid,
            parent,
            author.to_string(),
            message.trim().to_string(),
        );
        let commit_oid = commit.object_id()?;
        let short_message = commit.short_message();

        self.history_mut().append(commit, snapshot)?;
        self.refs().update_head(&commit_oid)?;
        self.index_mut().clear();

        self.index_mut().write_updates()?;
        self.history().write_updates()?;
        self.store().write_updates()?;

        writeln!(
            self.writer(),
            "[{}{}] {}",
            is_root,
            commit_oid.to_short_oid(),
            short_message
        )?;

        Ok(())
    }

    /// Re-read working-tree files for staged entries whose blob content never
    /// made it into the store. Per-file failures are reported and skipped so
    /// one unreadable file cannot abort the whole commit.
    fn backfill_contents(&mut self, snapshot: &Snapshot) -> anyhow::Result<()> {
        for (name, oid) in snapshot {
            if self.store().contains(oid) {
                continue;
            }

            match self.workspace().read_file(name) {
                Ok(content) => {
                    let blob = Blob::new(content);
                    self.store_mut().put(blob.object_id()?, blob.into_content());
                }
                Err(err) => {
                    eprintln!("Skipping content backfill for {}: {}", name, err);
                }
            }
        }

        Ok(())
    }
}
