//! Object types and hashing
//!
//! All tracked content is stored as objects identified by SHA-1 hashes:
//!
//! - **Blob**: File content captured at staging time
//! - **Commit**: Snapshot with metadata (author, message, parent, tree)
//!
//! Hashing goes through `object::digest`, which covers the object's type tag,
//! content length, and content.

pub mod blob;
pub mod commit;
pub mod object;
pub mod object_id;
pub mod object_type;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;
