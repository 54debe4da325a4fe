//! Rule-driven exam paper assembly.
//!
//! Assembles multiple exam papers from a pool of tagged questions so
//! that each paper satisfies a declarative set of count constraints
//! (total size, per-tag ranges, per-lesson-cluster ranges), while
//! distributing questions across papers and honoring mutual-exclusion
//! groups:
//!
//! - **Exam**: typed count rules — total size, tag counts, lesson
//!   cluster counts — with inclusive bounds and a midpoint target.
//! - **Bank**: the question pool plus a rarity index derived from tag
//!   and lesson frequency statistics; rare combinations are placed
//!   early, while choice is still flexible.
//! - **Generator**: the greedy allocation engine — hard eligibility
//!   filtering, signed midpoint-delta scoring, and two placement
//!   strategies (global rarity ordering, per-paper random sampling) —
//!   plus structured rule checking.
//! - **Search**: best-of-N seed retry loop over independent
//!   generate-and-check attempts.
//! - **Import/Report**: the attribute→tag mapping for already-parsed
//!   boundary records, and statistics rendering for paper export.
//!
//! # Design
//!
//! Generation is a best-effort greedy heuristic, not a constraint
//! solver: no backtracking, no optimality proof, and a run may end with
//! residual rule violations. Violations are data, never errors; callers
//! retry under different seeds when a clean result is required. All
//! randomness flows through an explicitly passed seedable generator, so
//! a given seed reproduces a run bit-for-bit.

pub mod bank;
pub mod error;
pub mod exam;
pub mod generator;
pub mod import;
pub mod paper;
pub mod random;
pub mod report;
pub mod search;
