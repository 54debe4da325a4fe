//! Question pool and derived statistics.
//!
//! [`Question`] is the immutable description of a pool entry;
//! [`QuestionBank`] wraps the pool with the frequency statistics and
//! per-question rarity scores computed once at construction. The pool
//! is never mutated after import, so the statistics are never
//! recomputed.

mod database;
mod question;

pub use database::QuestionBank;
pub use question::{Question, EXCLUSION_GROUP_PREFIX};
