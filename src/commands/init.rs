use crate::areas::repository::Repository;
use anyhow::Context;
use std::fs;
use std::io::Write;

impl Repository {
    /// Create the on-disk repository root
    ///
    /// Idempotent: re-running against an existing repository reports it and
    /// leaves all state untouched.
    pub fn init(&mut self) -> anyhow::Result<()> {
        let repo_dir = self.repo_dir();

        if repo_dir.exists() {
            writeln!(self.writer(), "Repository already exists.")?;
            return Ok(());
        }

        fs::create_dir_all(&repo_dir)
            .with_context(|| format!("Failed to create {}", repo_dir.display()))?;
        // seed an empty index record so a fresh repository has all its files
        fs::write(repo_dir.join("index"), b"").context("Failed to create index record")?;

        writeln!(
            self.writer(),
            "Initialized empty Lit repository in {}",
            repo_dir.display()
        )?;

        Ok(())
    }
}
