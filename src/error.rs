//! Error types for papergen.
//!
//! Only configuration-level defects are errors. A heuristic run that
//! fails to satisfy the exam rules is a normal outcome, surfaced as
//! data through [`crate::generator::RuleReport`].

use thiserror::Error;

/// Fatal configuration errors.
#[derive(Debug, Error)]
pub enum Error {
    /// The exam declares no total count rule, so paper capacity is
    /// undefined and generation cannot start.
    #[error("exam '{0}' has no total count rule")]
    MissingTotalCountRule(String),

    /// A question references a lesson with no frequency statistics.
    /// Cannot happen for a self-consistent pool; guards against
    /// externally injected data.
    #[error("question '{question_id}' references unknown lesson '{lesson_id}'")]
    UnknownLesson {
        question_id: String,
        lesson_id: String,
    },

    /// A question carries a tag with no frequency statistics.
    #[error("question '{question_id}' carries unknown tag '{tag}'")]
    UnknownTag { question_id: String, tag: String },

    /// Invalid generator or search configuration.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias for papergen operations.
pub type Result<T> = std::result::Result<T, Error>;
