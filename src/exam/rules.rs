//! Count bounds and the rule variants.

use std::fmt;

use crate::bank::Question;
use crate::paper::Paper;

/// Inclusive bounds on a qualifying-question count.
///
/// `maximum: None` means unbounded above. A bounded `maximum` smaller
/// than `minimum` is unsatisfiable: `in_range` is constantly false and
/// nothing panics; the check step reports it as a permanent violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub minimum: u32,
    pub maximum: Option<u32>,
}

impl Bounds {
    /// Bounded range `[minimum, maximum]`.
    pub fn new(minimum: u32, maximum: u32) -> Self {
        Self {
            minimum,
            maximum: Some(maximum),
        }
    }

    /// Lower bound only.
    pub fn at_least(minimum: u32) -> Self {
        Self {
            minimum,
            maximum: None,
        }
    }

    /// Exact count.
    pub fn exactly(n: u32) -> Self {
        Self::new(n, n)
    }

    pub fn in_range(&self, n: usize) -> bool {
        n >= self.minimum as usize
            && match self.maximum {
                Some(maximum) => n <= maximum as usize,
                None => true,
            }
    }

    /// Target count the scoring heuristic steers toward.
    ///
    /// The rounded middle of a bounded range; for an unbounded range
    /// the floor itself, so a deficient count is pulled up to the
    /// minimum and anything above is already in range.
    pub fn midpoint(&self) -> i64 {
        match self.maximum {
            Some(maximum) => ((self.minimum as f64 + maximum as f64) / 2.0).round() as i64,
            None => self.minimum as i64,
        }
    }

    /// Tolerance width, used to rank lesson clusters from strictest to
    /// most permissive. `None` (unbounded) is the most permissive.
    pub fn width(&self) -> Option<i64> {
        self.maximum.map(|maximum| maximum as i64 - self.minimum as i64)
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.maximum {
            Some(maximum) => write!(f, "{} to {}", self.minimum, maximum),
            None => write!(f, "at least {}", self.minimum),
        }
    }
}

/// Discriminant of a [`Rule`], carried by check results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RuleKind {
    TotalCount,
    Tag,
    LessonGroup,
}

/// A declarative constraint on one paper.
#[derive(Debug, Clone, PartialEq)]
pub enum Rule {
    /// Bounds the paper's total size. Qualifies every question.
    /// Expected exactly once per exam.
    TotalCount(Bounds),

    /// Bounds questions carrying a specific tag.
    Tag { tag: String, bounds: Bounds },

    /// Bounds questions whose lesson belongs to a cluster.
    LessonGroup {
        lessons: Vec<String>,
        bounds: Bounds,
    },
}

impl Rule {
    pub fn kind(&self) -> RuleKind {
        match self {
            Rule::TotalCount(_) => RuleKind::TotalCount,
            Rule::Tag { .. } => RuleKind::Tag,
            Rule::LessonGroup { .. } => RuleKind::LessonGroup,
        }
    }

    pub fn bounds(&self) -> Bounds {
        match self {
            Rule::TotalCount(bounds) => *bounds,
            Rule::Tag { bounds, .. } => *bounds,
            Rule::LessonGroup { bounds, .. } => *bounds,
        }
    }

    /// Whether adding `question` would change this rule's count.
    pub fn qualifies(&self, question: &Question) -> bool {
        match self {
            Rule::TotalCount(_) => true,
            Rule::Tag { tag, .. } => question.has_tag(tag),
            Rule::LessonGroup { lessons, .. } => {
                lessons.iter().any(|l| *l == question.lesson_id)
            }
        }
    }

    /// Current qualifying count in `paper`.
    pub fn count_in(&self, paper: &Paper) -> usize {
        match self {
            Rule::TotalCount(_) => paper.len(),
            Rule::Tag { tag, .. } => paper.count_with_tag(tag),
            Rule::LessonGroup { lessons, .. } => paper.count_in_lessons(lessons),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::TotalCount(bounds) => write!(f, "Total Count Rule, {bounds}."),
            Rule::Tag { tag, bounds } => write!(f, "Tag Rule, '{tag}', {bounds}."),
            Rule::LessonGroup { lessons, bounds } => {
                write!(f, "Lesson Group Rule, {}, {bounds}.", lessons.join(", "))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_range_bounded() {
        let bounds = Bounds::new(2, 4);
        assert!(!bounds.in_range(1));
        assert!(bounds.in_range(2));
        assert!(bounds.in_range(4));
        assert!(!bounds.in_range(5));
    }

    #[test]
    fn test_in_range_unbounded() {
        let bounds = Bounds::at_least(2);
        assert!(!bounds.in_range(1));
        assert!(bounds.in_range(2));
        assert!(bounds.in_range(50));
    }

    #[test]
    fn test_in_range_inverted_never_true() {
        let bounds = Bounds::new(4, 2);
        for n in 0..10 {
            assert!(!bounds.in_range(n));
        }
    }

    #[test]
    fn test_midpoint() {
        assert_eq!(Bounds::new(2, 4).midpoint(), 3);
        assert_eq!(Bounds::new(1, 2).midpoint(), 2); // 1.5 rounds up
        assert_eq!(Bounds::exactly(7).midpoint(), 7);
        assert_eq!(Bounds::at_least(3).midpoint(), 3);
    }

    #[test]
    fn test_width() {
        assert_eq!(Bounds::new(2, 5).width(), Some(3));
        assert_eq!(Bounds::new(5, 2).width(), Some(-3));
        assert_eq!(Bounds::at_least(2).width(), None);
    }

    #[test]
    fn test_qualifies() {
        let q = Question::new("q1", "l2", ["bloom:recall"]);
        assert!(Rule::TotalCount(Bounds::exactly(5)).qualifies(&q));
        assert!(Rule::Tag {
            tag: "bloom:recall".into(),
            bounds: Bounds::new(1, 2),
        }
        .qualifies(&q));
        assert!(!Rule::Tag {
            tag: "bloom:apply".into(),
            bounds: Bounds::new(1, 2),
        }
        .qualifies(&q));
        assert!(Rule::LessonGroup {
            lessons: vec!["l1".into(), "l2".into()],
            bounds: Bounds::new(1, 2),
        }
        .qualifies(&q));
        assert!(!Rule::LessonGroup {
            lessons: vec!["l3".into()],
            bounds: Bounds::new(1, 2),
        }
        .qualifies(&q));
    }

    #[test]
    fn test_count_in() {
        let mut paper = Paper::new();
        paper.push(Question::new("q1", "l1", ["bloom:recall"]));
        paper.push(Question::new("q2", "l2", ["bloom:recall"]));

        assert_eq!(Rule::TotalCount(Bounds::exactly(2)).count_in(&paper), 2);
        assert_eq!(
            Rule::Tag {
                tag: "bloom:recall".into(),
                bounds: Bounds::new(0, 9),
            }
            .count_in(&paper),
            2
        );
        assert_eq!(
            Rule::LessonGroup {
                lessons: vec!["l2".into()],
                bounds: Bounds::new(0, 9),
            }
            .count_in(&paper),
            1
        );
    }

    #[test]
    fn test_display() {
        let rule = Rule::Tag {
            tag: "bloom:recall".into(),
            bounds: Bounds::new(1, 3),
        };
        assert_eq!(rule.to_string(), "Tag Rule, 'bloom:recall', 1 to 3.");

        let rule = Rule::LessonGroup {
            lessons: vec!["l1".into(), "l2".into()],
            bounds: Bounds::at_least(2),
        };
        assert_eq!(rule.to_string(), "Lesson Group Rule, l1, l2, at least 2.");
    }
}
