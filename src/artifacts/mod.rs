//! Data structures shared across the engine
//!
//! - `errors`: failure taxonomy for repository operations
//! - `objects`: content-addressed object types (blob, commit) and hashing
//! - `records`: encoding helpers for the flat persistence records

pub mod errors;
pub mod objects;
pub mod records;
