//! # Solution Archive
//!
//! Solutions to individual coding-challenge problems, grouped by the
//! difficulty tier the judge assigned them.
//!
//! ## Layout
//! - [`easy`], [`medium`]: one module per problem. Each is self-contained
//!   and exports a `PROBLEM` describing it.
//! - [`catalog`]: the index of solved problems and the archive's file naming.
//!
//! ## The interesting part
//! Most solutions are a single loop. The subsequence pair is the exception:
//! [`easy::is_subsequence`] is the two-cursor matcher, and
//! [`medium::matching_subsequences`] runs it over a batch of candidates
//! with a per-call memo table so repeated candidates are matched once.

pub mod catalog;
pub mod easy;
pub mod error;
pub mod medium;
pub mod types;

// Public re-exports for the top-level API
pub use catalog::Problem;
pub use easy::is_subsequence::{is_subsequence, is_subsequence_str};
pub use error::{Error, Result};
pub use medium::matching_subsequences::{count_matching_subsequences, MemoTable};
pub use types::Difficulty;
