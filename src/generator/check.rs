//! Post-generation rule validation.
//!
//! Validation results are data, never exceptions: failing a rule is a
//! normal outcome of a heuristic search, and the caller decides whether
//! to retry with a different seed.

use crate::exam::{Exam, RuleKind};
use crate::paper::Paper;

/// Outcome of checking one rule against one paper.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RuleCheck {
    /// Index of the rule in the exam's rule list.
    pub rule_index: usize,

    /// Rule variant.
    pub kind: RuleKind,

    /// Human-readable rule description.
    pub rule: String,

    /// Index of the paper in the generated set.
    pub paper_index: usize,

    /// Qualifying count observed in the paper.
    pub observed: usize,

    pub minimum: u32,
    pub maximum: Option<u32>,

    pub passed: bool,
}

/// All check outcomes for a paper set, plus the violation total.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RuleReport {
    pub checks: Vec<RuleCheck>,
    pub violations: usize,
}

impl RuleReport {
    /// True when every (rule, paper) pair passed.
    pub fn is_satisfied(&self) -> bool {
        self.violations == 0
    }
}

/// Recounts every rule against every paper.
///
/// Outcomes are ordered rules-outer, papers-inner. The violation total
/// lies in `[0, rules × papers]`; zero means the run fully satisfies
/// the exam.
pub fn check_papers(papers: &[Paper], exam: &Exam) -> RuleReport {
    let mut report = RuleReport::default();

    for (rule_index, rule) in exam.rules.iter().enumerate() {
        let bounds = rule.bounds();
        for (paper_index, paper) in papers.iter().enumerate() {
            let observed = rule.count_in(paper);
            let passed = bounds.in_range(observed);
            if !passed {
                report.violations += 1;
            }
            report.checks.push(RuleCheck {
                rule_index,
                kind: rule.kind(),
                rule: rule.to_string(),
                paper_index,
                observed,
                minimum: bounds.minimum,
                maximum: bounds.maximum,
                passed,
            });
        }
    }

    report
}
