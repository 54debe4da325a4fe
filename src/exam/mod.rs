//! Declarative exam constraints.
//!
//! An [`Exam`] is an ordered list of [`Rule`]s. Each rule bounds how
//! many qualifying questions a paper must contain; the variants differ
//! only in what "qualifying" means (every question, questions with a
//! tag, questions from a lesson cluster).

mod rules;
mod types;

pub use rules::{Bounds, Rule, RuleKind};
pub use types::Exam;
