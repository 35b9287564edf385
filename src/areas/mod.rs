//! Core repository components
//!
//! The fundamental building blocks of a repository:
//!
//! - `store`: content-addressable store mapping hashes to raw content
//! - `index`: staging area tracking the next commit's file set
//! - `history`: append-only commit graph with per-commit snapshots
//! - `refs`: HEAD pointer management
//! - `repository`: high-level operations and coordination
//! - `workspace`: working directory file system operations

pub mod history;
pub mod index;
pub mod refs;
pub mod repository;
pub mod store;
pub mod workspace;
