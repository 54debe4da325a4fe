//! A single pool entry.

use std::collections::BTreeSet;

/// Tag prefix marking mutual-exclusion group membership.
///
/// At most one question of a given exclusion group may appear in the
/// same paper.
pub const EXCLUSION_GROUP_PREFIX: &str = "group:";

/// A question available for placement.
///
/// Immutable once imported, except for `rarity`, which is written once
/// when the owning [`super::QuestionBank`] is built (0.0 until then).
#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    /// Identifier, unique within the pool.
    pub id: String,

    /// Lesson the question belongs to.
    pub lesson_id: String,

    /// Descriptive tags. Unordered; the set form makes iteration
    /// deterministic.
    pub tags: BTreeSet<String>,

    /// Scarcity score in (0, 1] once computed. Lower means rarer.
    pub rarity: f64,
}

impl Question {
    /// Creates a question with no rarity computed yet.
    pub fn new<I, S>(id: impl Into<String>, lesson_id: impl Into<String>, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            lesson_id: lesson_id.into(),
            tags: tags.into_iter().map(Into::into).collect(),
            rarity: 0.0,
        }
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    /// The first exclusion-group tag on this question, if any.
    pub fn exclusion_group_tag(&self) -> Option<&str> {
        self.tags
            .iter()
            .map(String::as_str)
            .find(|t| t.starts_with(EXCLUSION_GROUP_PREFIX))
    }

    pub fn is_in_exclusion_group(&self) -> bool {
        self.exclusion_group_tag().is_some()
    }
}
