use crate::areas::repository::Repository;
use std::io::Write;

impl Repository {
    /// Report the current HEAD position and the staged file set; read-only
    pub fn status(&self) -> anyhow::Result<()> {
        match self.refs().read_head() {
            Some(oid) => writeln!(self.writer(), "On commit {}", oid)?,
            None => writeln!(self.writer(), "No commits yet")?,
        }

        if self.index().is_empty() {
            writeln!(self.writer(), "Nothing staged for commit.")?;
            return Ok(());
        }

        writeln!(self.writer(), "Staged files:")?;
        for (name, _) in self.index().entries() {
            writeln!(self.writer(), "  {}", name)?;
        }

        Ok(())
    }
}
