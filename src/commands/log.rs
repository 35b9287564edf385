use crate::areas::repository::Repository;
use crate::artifacts::objects::object::Object;
use std::io::Write;

impl Repository {
    /// Print the commit history, oldest first
    pub fn log(&self) -> anyhow::Result<()> {
        if self.history().is_empty() {
            writeln!(self.writer(), "No commits yet.")?;
            return Ok(());
        }

        for commit in self.history().iter() {
            writeln!(self.writer(), "commit {}", commit.object_id()?)?;
            writeln!(self.writer(), "Author: {}", commit.author())?;
            writeln!(self.writer(), "Date:   {}", commit.readable_timestamp())?;
            writeln!(self.writer())?;
            for message_line in commit.message().lines() {
                writeln!(self.writer(), "    {}", message_line)?;
            }
            writeln!(self.writer())?;
        }

        Ok(())
    }
}
