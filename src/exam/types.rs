//! A single exam's requirements.

use super::rules::{Bounds, Rule};
use crate::error::{Error, Result};

/// An exam: identifier, board label, and an ordered rule list.
#[derive(Debug, Clone, Default)]
pub struct Exam {
    pub id: String,
    pub board: String,
    pub rules: Vec<Rule>,
}

impl Exam {
    pub fn new(id: impl Into<String>, board: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            board: board.into(),
            rules: Vec::new(),
        }
    }

    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Bounds of the first total count rule.
    ///
    /// Without one, paper capacity is undefined and the engine refuses
    /// to run.
    pub fn total_count_rule(&self) -> Result<Bounds> {
        self.rules
            .iter()
            .find_map(|rule| match rule {
                Rule::TotalCount(bounds) => Some(*bounds),
                _ => None,
            })
            .ok_or_else(|| Error::MissingTotalCountRule(self.id.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_count_rule_found() {
        let exam = Exam::new("e1", "board")
            .with_rule(Rule::Tag {
                tag: "bloom:recall".into(),
                bounds: Bounds::new(1, 2),
            })
            .with_rule(Rule::TotalCount(Bounds::exactly(10)));
        assert_eq!(exam.total_count_rule().unwrap(), Bounds::exactly(10));
    }

    #[test]
    fn test_total_count_rule_missing() {
        let exam = Exam::new("e1", "board").with_rule(Rule::Tag {
            tag: "bloom:recall".into(),
            bounds: Bounds::new(1, 2),
        });
        let err = exam.total_count_rule().unwrap_err();
        assert!(err.to_string().contains("e1"));
    }

    #[test]
    fn test_rule_order_preserved() {
        let exam = Exam::new("e1", "board")
            .with_rule(Rule::TotalCount(Bounds::exactly(10)))
            .with_rule(Rule::Tag {
                tag: "a".into(),
                bounds: Bounds::new(0, 1),
            })
            .with_rule(Rule::Tag {
                tag: "b".into(),
                bounds: Bounds::new(0, 1),
            });
        let tags: Vec<String> = exam
            .rules
            .iter()
            .filter_map(|r| match r {
                Rule::Tag { tag, .. } => Some(tag.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(tags, vec!["a".to_string(), "b".to_string()]);
    }
}
