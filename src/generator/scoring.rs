//! Placement eligibility and scoring.

use crate::bank::Question;
use crate::error::Result;
use crate::exam::Exam;
use crate::paper::Paper;

/// Scores adding `question` to `paper`. Higher is better.
///
/// Sums a signed contribution per rule: with `n1` the current
/// qualifying count and `n2` the count after the addition, a rule
/// contributes 0 when both lie in range, otherwise
/// `-(|n2 - mid| - |n1 - mid|)` — positive when the addition moves the
/// count toward the rule's midpoint, negative when it moves away.
///
/// This is a first-order greedy proxy, not a distance-to-feasibility
/// measure. Contributions are summed unweighted across rule kinds, so a
/// question can score positively overall while harming one rule, and
/// lesson-cluster strictness influences only the placement ordering,
/// never these sums. Known heuristic quirk, kept deliberately.
pub fn placement_score(question: &Question, paper: &Paper, exam: &Exam) -> i64 {
    let mut direction = 0i64;

    for rule in &exam.rules {
        let n1 = rule.count_in(paper);
        let n2 = n1 + usize::from(rule.qualifies(question));

        let bounds = rule.bounds();
        if bounds.in_range(n1) && bounds.in_range(n2) {
            continue;
        }

        let midpoint = bounds.midpoint();
        let d1 = (n1 as i64 - midpoint).abs();
        let d2 = (n2 as i64 - midpoint).abs();
        direction += -(d2 - d1);
    }

    direction
}

/// Hard filter applied before scoring chooses a destination.
///
/// False when the paper is at the total-count maximum, already contains
/// the question id, or already holds a question from the same exclusion
/// group. Monotonic: once false for a paper it stays false as the paper
/// grows. Errs only when the exam has no total count rule.
pub fn can_place(question: &Question, paper: &Paper, exam: &Exam) -> Result<bool> {
    let capacity = exam.total_count_rule()?;
    if let Some(maximum) = capacity.maximum {
        if paper.len() >= maximum as usize {
            return Ok(false);
        }
    }

    if paper.contains(&question.id) {
        return Ok(false);
    }

    if let Some(tag) = question.exclusion_group_tag() {
        if paper.exclusion_group_tags().contains(tag) {
            return Ok(false);
        }
    }

    Ok(true)
}
