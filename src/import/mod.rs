//! Boundary-record conversion.
//!
//! File parsing lives outside the crate; consumers hand over
//! already-parsed records and this module owns the fixed attribute→tag
//! mapping table, the import-scoped exclusion-group counter, and the
//! blueprint→rule conversion (a `max` of −1 means unbounded). Both
//! sides of the boundary must agree on the mapping table, since it
//! determines which tag rules can ever match.

mod convert;
mod records;

pub use convert::{exam_from_record, questions_from_lessons, rule_tag};
pub use records::{ClusterRecord, ConstraintRecord, ExamRecord, LessonRecord, QuestionRecord};
