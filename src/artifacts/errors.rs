use crate::artifacts::objects::object_id::ObjectId;
use thiserror::Error;

/// Failure taxonomy for repository operations
///
/// Operation-level failures (`NothingToCommit`, `CommitNotFound`) abort a
/// single command and leave all state unchanged. Per-file failures during
/// multi-file operations (commit backfill, checkout restore) are reported and
/// the operation continues with the remaining files. No variant is fatal to
/// the process.
#[derive(Debug, Error)]
pub enum RepoError {
    /// Working-tree file absent when staging
    #[error("file not found: {0}")]
    FileNotFound(String),

    /// Read/write error on the working tree or a persistence record
    #[error("i/o failure on {path}")]
    IoFailure {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Referenced content hash absent from the content store; a
    /// data-integrity failure, not a normal absence
    #[error("content missing from store: {0}")]
    ContentMissing(ObjectId),

    /// Commit attempted with an empty staging index
    #[error("nothing to commit")]
    NothingToCommit,

    /// Unknown commit hash passed to checkout
    #[error("commit not found: {0}")]
    CommitNotFound(String),

    /// File passed to remove was never staged
    #[error("file not tracked: {0}")]
    NotTracked(String),
}
