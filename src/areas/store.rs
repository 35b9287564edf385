//! Content-addressable store
//!
//! Maps content hashes to raw content. Append-only: entries are never removed
//! or overwritten, and inserting existing content is a no-op, which is how
//! identical content gets deduplicated.
//!
//! ## Record format
//!
//! One line per blob in the `contents` record: `contentHash|content`, with
//! the content escaped to a single line.

use crate::artifacts::errors::RepoError;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::records;
use anyhow::Context;
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Debug)]
pub struct ContentStore {
    /// Path to the contents record
    path: Box<Path>,
    entries: BTreeMap<ObjectId, String>,
}

impl ContentStore {
    pub fn new(path: Box<Path>) -> Self {
        ContentStore {
            path,
            entries: BTreeMap::new(),
        }
    }

    /// Load the store from disk
    ///
    /// A missing or corrupt record degrades to an empty store; startup never
    /// fails on persisted state.
    pub fn rehydrate(&mut self) {
        self.entries = Self::parse_record(&self.path).unwrap_or_default();
    }

    fn parse_record(path: &Path) -> anyhow::Result<BTreeMap<ObjectId, String>> {
        let text = std::fs::read_to_string(path)?;
        let mut entries = BTreeMap::new();

        for line in text.lines() {
            let (hash, content) = line
                .split_once('|')
                .with_context(|| format!("Malformed contents record line: {}", line))?;
            entries.insert(
                ObjectId::try_parse(hash.to_string())?,
                records::unescape(content),
            );
        }

        Ok(entries)
    }

    /// Idempotent insert; a hash that is already present keeps its content
    pub fn put(&mut self, oid: ObjectId, content: String) {
        self.entries.entry(oid).or_insert(content);
    }

    /// Fetch content by hash
    ///
    /// An unknown hash is a data-integrity failure (`ContentMissing`), not a
    /// normal absence.
    pub fn get(&self, oid: &ObjectId) -> Result<&str, RepoError> {
        self.entries
            .get(oid)
            .map(String::as_str)
            .ok_or_else(|| RepoError::ContentMissing(oid.clone()))
    }

    pub fn contains(&self, oid: &ObjectId) -> bool {
        self.entries.contains_key(oid)
    }

    /// Flush the store to its record file
    pub fn write_updates(&self) -> anyhow::Result<()> {
        let mut record = String::new();
        for (oid, content) in &self.entries {
            record.push_str(oid.as_ref());
            record.push('|');
            record.push_str(&records::escape(content));
            record.push('\n');
        }

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Unable to create {}", parent.display()))?;
        }
        std::fs::write(&self.path, record)
            .with_context(|| format!("Unable to write contents record {}", self.path.display()))
    }
}
