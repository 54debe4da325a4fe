//! Best-of-N seed search.
//!
//! Generation is a heuristic and may end with residual violations; the
//! search loop re-runs the whole generate-and-check cycle under fresh
//! seeds and keeps the best outcome. Attempts are fully independent:
//! each owns its papers, and only the read-only bank and exam are
//! shared.

mod runner;

pub use runner::{run_attempt, Attempt, SearchResult, SearchRunner};
