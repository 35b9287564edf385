//! User-facing repository operations
//!
//! Each command maps 1:1 to a CLI subcommand and is implemented as an
//! `impl Repository` block:
//!
//! - `init`: create the repository root
//! - `add`: stage a file for commit
//! - `commit`: record the staged set as a new commit
//! - `log`: show commit history, oldest first
//! - `status`: show HEAD and the staged file set
//! - `remove`: unstage a file
//! - `checkout`: restore the working directory to a prior commit

pub mod add;
pub mod checkout;
pub mod commit;
pub mod init;
pub mod log;
pub mod remove;
pub mod status;
