//! Staging index
//!
//! The staging index is the pending file set that will become the next
//! commit: a mapping from working-tree filename to the content hash staged
//! for that file. `add` inserts or overwrites, `remove` deletes, a successful
//! commit clears it, and so does checkout.
//!
//! ## Record format
//!
//! One `filename=contentHash` line per staged file in the `index` record.
//! Entries are kept in a `BTreeMap`, so iteration (and therefore the tree
//! hash) is in lexicographic filename order regardless of staging order.

use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Debug)]
pub struct StagingIndex {
    /// Path to the index record
    path: Box<Path>,
    entries: BTreeMap<String, ObjectId>,
    /// Flag indicating if the index has been modified since loading
    changed: bool,
}

impl StagingIndex {
    pub fn new(path: Box<Path>) -> Self {
        StagingIndex {
            path,
            entries: BTreeMap::new(),
            changed: false,
        }
    }

    /// Load the index from disk; missing or corrupt records degrade to empty
    pub fn rehydrate(&mut self) {
        self.entries = Self::parse_record(&self.path).unwrap_or_default();
        self.changed = false;
    }

    fn parse_record(path: &Path) -> anyhow::Result<BTreeMap<String, ObjectId>> {
        let text = std::fs::read_to_string(path)?;
        let mut entries = BTreeMap::new();

        for line in text.lines() {
            let (name, hash) = line
                .rsplit_once('=')
                .with_context(|| format!("Malformed index record line: {}", line))?;
            entries.insert(name.to_string(), ObjectId::try_parse(hash.to_string())?);
        }

        Ok(entries)
    }

    /// Insert or overwrite a staged entry
    pub fn stage(&mut self, name: &str, oid: ObjectId) {
        self.entries.insert(name.to_string(), oid);
        self.changed = true;
    }

    /// Drop a staged entry; false means there was nothing to remove
    pub fn unstage(&mut self, name: &str) -> bool {
        let removed = self.entries.remove(name).is_some();
        self.changed |= removed;
        removed
    }

    /// Copy of the staged filename -> hash set, not a live view
    pub fn snapshot(&self) -> BTreeMap<String, ObjectId> {
        self.entries.clone()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.changed = true;
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = (&String, &ObjectId)> {
        self.entries.iter()
    }

    /// Flush the index to its record file; skipped when nothing changed
    pub fn write_updates(&mut self) -> anyhow::Result<()> {
        if !self.changed {
            return Ok(());
        }

        let mut record = String::new();
        for (name, oid) in &self.entries {
            record.push_str(name);
            record.push('=');
            record.push_str(oid.as_ref());
            record.push('\n');
        }

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Unable to create {}", parent.display()))?;
        }
        std::fs::write(&self.path, record)
            .with_context(|| format!("Unable to write index record {}", self.path.display()))?;

        self.changed = false;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index_at(dir: &assert_fs::TempDir) -> StagingIndex {
        StagingIndex::new(dir.path().join("index").into_boxed_path())
    }

    fn oid(fill: char) -> ObjectId {
        ObjectId::try_parse(fill.to_string().repeat(40)).unwrap()
    }

    #[test]
    fn test_stage_overwrites_existing_entry() {
        let dir = assert_fs::TempDir::new().unwrap();
        let mut index = index_at(&dir);

        index.stage("a.txt", oid('1'));
        index.stage("a.txt", oid('2'));

        assert_eq!(index.snapshot().get("a.txt"), Some(&oid('2')));
    }

    #[test]
    fn test_unstage_reports_presence() {
        let dir = assert_fs::TempDir::new().unwrap();
        let mut index = index_at(&dir);

        index.stage("a.txt", oid('1'));
        assert!(index.unstage("a.txt"));
        assert!(!index.unstage("a.txt"));
    }

    #[test]
    fn test_snapshot_is_a_copy() {
        let dir = assert_fs::TempDir::new().unwrap();
        let mut index = index_at(&dir);

        index.stage("a.txt", oid('1'));
        let snapshot = index.snapshot();
        index.clear();

        assert!(index.is_empty());
        assert_eq!(snapshot.len(), 1);
    }

    #[test]
    fn test_persist_and_rehydrate_round_trips() {
        let dir = assert_fs::TempDir::new().unwrap();
        let mut index = index_at(&dir);
        index.stage("b.txt", oid('2'));
        index.stage("a.txt", oid('1'));
        index.write_updates().unwrap();

        let mut reloaded = index_at(&dir);
        reloaded.rehydrate();
        assert_eq!(reloaded.snapshot(), index.snapshot());
    }

    #[test]
    fn test_missing_record_rehydrates_empty() {
        let dir = assert_fs::TempDir::new().unwrap();
        let mut index = index_at(&dir);
        index.rehydrate();
        assert!(index.is_empty());
    }
}
