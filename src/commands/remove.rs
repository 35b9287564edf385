use crate::areas::repository::Repository;
use crate::artifacts::errors::RepoError;
use std::io::Write;

impl Repository {
    /// Unstage a file; the working-tree copy is left alone
    ///
    /// A file that was never staged is reported, not an error.
    pub fn remove(&mut self, name: &str) -> anyhow::Result<()> {
        if !self.index_mut().unstage(name) {
            writeln!(
                self.writer(),
                "{}",
                RepoError::NotTracked(name.to_string())
            )?;
            return Ok(());
        }

        self.index_mut().write_updates()?;
        writeln!(self.writer(), "Removed {} from the staging index.", name)?;

        Ok(())
    }
}
