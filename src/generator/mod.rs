//! Allocation engine.
//!
//! Assigns pool questions to `n` papers under the exam's rules:
//!
//! - **Eligibility** ([`can_place`]): hard filter — capacity, duplicate
//!   ids, exclusion-group conflicts.
//! - **Scoring** ([`placement_score`]): signed per-rule deltas toward
//!   each rule's midpoint, summed unweighted.
//! - **Generation** ([`GeneratorRunner`]): the default strategy orders
//!   questions globally (strictest lesson cluster first, then rarity)
//!   and places each into the best-scoring paper; the alternate
//!   strategy fills papers one at a time from small random samples.
//! - **Validation** ([`check_papers`]): recounts every (rule, paper)
//!   pair and reports structured pass/fail results.
//!
//! Generation is best-effort: it may leave questions unplaced or rules
//! violated, and the caller retries with other seeds when a clean
//! result is required.

mod check;
mod config;
mod runner;
mod scoring;

pub use check::{check_papers, RuleCheck, RuleReport};
pub use config::{GeneratorConfig, Strategy};
pub use runner::{GenerationResult, GeneratorRunner};
pub use scoring::{can_place, placement_score};
