use crate::areas::repository::Repository;
use crate::artifacts::errors::RepoError;
use crate::artifacts::objects::object_id::ObjectId;
use std::io::Write;

impl Repository {
    /// Restore the working directory to a prior commit
    ///
    /// Unknown (or malformed) hashes are reported with no state change. A
    /// snapshot file whose content is missing from the store is logged and
    /// skipped so the rest of the restore still happens. After checkout the
    /// staging index is empty and HEAD points at the target.
    pub fn checkout(&mut self, target: &str) -> anyhow::Result<()> {
        let Ok(oid) = ObjectId::try_parse(target.to_string()) else {
            writeln!(
                self.writer(),
                "{}",
                RepoError::CommitNotFound(target.to_string())
            )?;
            return Ok(());
        };

        let Some(commit) = self.history().find_by_hash(&oid) else {
            writeln!(
                self.writer(),
                "{}",
                RepoError::CommitNotFound(target.to_string())
            )?;
            return Ok(());
        };
        let short_message = commit.short_message();

        let snapshot = self
            .history()
            .snapshot_of(&oid)
            .cloned()
            .unwrap_or_default();

        for (name, content_oid) in &snapshot {
            match self.store().get(content_oid) {
                Ok(content) => self.workspace().write_file(name, content)?,
                Err(err) => {
                    eprintln!("Cannot restore {}: {}", name, err);
                }
            }
        }

        // a fresh checkout has nothing pending
        self.index_mut().clear();

        self.refs().update_head(&oid)?;
        self.index_mut().write_updates()?;

        writeln!(
            self.writer(),
            "HEAD is now at {} {}",
            oid.to_short_oid(),
            short_message
        )?;

        Ok(())
    }
}
