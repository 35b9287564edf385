//! Commit graph and snapshot table
//!
//! An append-only, insertion-ordered sequence of commits, each linking to its
//! parent by hash, plus a side table mapping commit hash to the full
//! filename -> content-hash snapshot captured when that commit was created.
//! The repository supplies the parent hash; with a single linear history and
//! no concurrent writers the graph does not re-validate it.
//!
//! ## Record format
//!
//! One line per commit in the `commits` record:
//!
//! ```text
//! hash|treeHash|parentHash("null" if absent)|author|timestamp|message|snapshot
//! ```
//!
//! The timestamp is RFC 3339, the author and message are escaped to single
//! pipe-free lines, and the snapshot is a `;`-separated list of
//! `filename=contentHash` pairs. The five leading fields are split from the
//! left and the snapshot from the right.

use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object::Object;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::records;
use anyhow::Context;
use chrono::{DateTime, Utc};
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

pub type Snapshot = BTreeMap<String, ObjectId>;

#[derive(Debug)]
pub struct History {
    /// Path to the commits record
    path: Box<Path>,
    /// Commits in insertion order (oldest first)
    commits: Vec<Commit>,
    /// Commit hash -> staged file set at commit time
    snapshots: HashMap<ObjectId, Snapshot>,
}

impl History {
    pub fn new(path: Box<Path>) -> Self {
        History {
            path,
            commits: Vec::new(),
            snapshots: HashMap::new(),
        }
    }

    /// Load the graph from disk; missing or corrupt records degrade to empty
    pub fn rehydrate(&mut self) {
        match Self::parse_record(&self.path) {
            Ok((commits, snapshots)) => {
                self.commits = commits;
                self.snapshots = snapshots;
            }
            Err(_) => {
                self.commits = Vec::new();
                self.snapshots = HashMap::new();
            }
        }
    }

    fn parse_record(path: &Path) -> anyhow::Result<(Vec<Commit>, HashMap<ObjectId, Snapshot>)> {
        let text = std::fs::read_to_string(path)?;
        let mut commits = Vec::new();
        let mut snapshots = HashMap::new();

        for line in text.lines() {
            let (commit, snapshot) = Self::parse_line(line)?;
            snapshots.insert(commit.object_id()?, snapshot);
            commits.push(commit);
        }

        Ok((commits, snapshots))
    }

    fn parse_line(line: &str) -> anyhow::Result<(Commit, Snapshot)> {
        let fields: Vec<&str> = line.splitn(6, '|').collect();
        let [hash, tree, parent, author, timestamp, rest] = fields.as_slice() else {
            anyhow::bail!("Malformed commits record line: {}", line);
        };

        // escaped fields carry no raw pipe; the snapshot is everything after
        // the last one
        let (message, snapshot) = rest
            .rsplit_once('|')
            .with_context(|| format!("Missing snapshot field in line: {}", line))?;

        let parent = match *parent {
            records::NULL_FIELD => None,
            hash => Some(ObjectId::try_parse(hash.to_string())?),
        };
        let timestamp: DateTime<Utc> = DateTime::parse_from_rfc3339(timestamp)
            .with_context(|| format!("Invalid commit timestamp: {}", timestamp))?
            .with_timezone(&Utc);

        let commit = Commit::restored(
            ObjectId::try_parse(hash.to_string())?,
            ObjectId::try_parse(tree.to_string())?,
            parent,
            records::unescape(author),
            timestamp,
            records::unescape(message),
        );

        Ok((commit, records::decode_snapshot(snapshot)?))
    }

    /// Record a commit and the staged set it captured
    pub fn append(&mut self, commit: Commit, snapshot: Snapshot) -> anyhow::Result<()> {
        self.snapshots.insert(commit.object_id()?, snapshot);
        self.commits.push(commit);
        Ok(())
    }

    pub fn find_by_hash(&self, oid: &ObjectId) -> Option<&Commit> {
        self.commits
            .iter()
            .find(|commit| commit.object_id().is_ok_and(|id| &id == oid))
    }

    pub fn snapshot_of(&self, oid: &ObjectId) -> Option<&Snapshot> {
        self.snapshots.get(oid)
    }

    /// Commits in insertion order; repeated calls re-enumerate the same order
    pub fn iter(&self) -> impl Iterator<Item = &Commit> {
        self.commits.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.commits.is_empty()
    }

    /// Flush the graph to its record file
    pub fn write_updates(&self) -> anyhow::Result<()> {
        let mut record = String::new();

        for commit in &self.commits {
            let oid = commit.object_id()?;
            let snapshot = self
                .snapshots
                .get(&oid)
                .with_context(|| format!("No snapshot recorded for commit {}", oid))?;

            record.push_str(&format!(
                "{}|{}|{}|{}|{}|{}|{}\n",
                oid.as_ref(),
                commit.tree_oid().as_ref(),
                commit
                    .parent()
                    .map(|p| p.as_ref().to_string())
                    .unwrap_or_else(|| records::NULL_FIELD.to_string()),
                records::escape(commit.author()),
                commit
                    .timestamp()
                    .to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
                records::escape(commit.message()),
                records::encode_snapshot(snapshot),
            ));
        }

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Unable to create {}", parent.display()))?;
        }
        std::fs::write(&self.path, record)
            .with_context(|| format!("Unable to write commits record {}", self.path.display()))
    }
}
