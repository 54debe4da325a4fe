//! Paper state and counting queries.

use std::collections::BTreeSet;

use crate::bank::Question;

/// Questions assigned to one paper so far.
///
/// Insertion order is assignment order and is preserved, so a seeded
/// run reproduces the same sequence. All queries are pure functions of
/// the current question list. The paper itself enforces no invariants;
/// duplicate ids, exclusion-group conflicts, and the total capacity are
/// the allocation engine's responsibility.
#[derive(Debug, Clone, Default)]
pub struct Paper {
    questions: Vec<Question>,
}

impl Paper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn push(&mut self, question: Question) {
        self.questions.push(question);
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Number of distinct question ids.
    pub fn unique_len(&self) -> usize {
        self.questions
            .iter()
            .map(|q| q.id.as_str())
            .collect::<BTreeSet<_>>()
            .len()
    }

    pub fn contains(&self, question_id: &str) -> bool {
        self.questions.iter().any(|q| q.id == question_id)
    }

    pub fn count_in_lessons(&self, lesson_ids: &[String]) -> usize {
        self.questions
            .iter()
            .filter(|q| lesson_ids.iter().any(|l| *l == q.lesson_id))
            .count()
    }

    pub fn count_with_tag(&self, tag: &str) -> usize {
        self.questions.iter().filter(|q| q.has_tag(tag)).count()
    }

    /// Distinct exclusion-group tags present in the paper.
    pub fn exclusion_group_tags(&self) -> BTreeSet<&str> {
        self.questions
            .iter()
            .filter_map(|q| q.exclusion_group_tag())
            .collect()
    }
}
