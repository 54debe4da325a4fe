//! Mutable paper accumulator.

mod types;

pub use types::Paper;
