//! Human-readable paper statistics.
//!
//! Pure string/data production for the export boundary; writing the
//! document to disk is a consumer's job.

mod render;

pub use render::{paper_records, render_statistics, PaperQuestionRecord};
