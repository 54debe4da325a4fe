//! Statistics block rendering and export records.

use std::fmt::Write;

use crate::exam::{Exam, Rule};
use crate::paper::Paper;

/// One question of an exported paper document.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PaperQuestionRecord {
    pub id: String,
    pub lesson_id: String,
    pub tags: Vec<String>,
}

/// Renders the per-rule pass/fail statistics block for one paper.
///
/// One line per rule in exam order, a unique-question line up front,
/// and a trailing failure total.
pub fn render_statistics(paper: &Paper, exam: &Exam) -> String {
    let mut out = String::new();
    let mut fails = 0usize;

    let _ = writeln!(
        out,
        "- Total number of unique questions in the paper: {}.",
        paper.unique_len()
    );

    for rule in &exam.rules {
        let observed = rule.count_in(paper);
        let bounds = rule.bounds();
        let mark = if bounds.in_range(observed) {
            "\u{2713}"
        } else {
            fails += 1;
            "\u{2717}"
        };

        let subject = match rule {
            Rule::TotalCount(_) => "- Total number of questions in the paper".to_owned(),
            Rule::Tag { tag, .. } => {
                format!("- Number of questions in the paper with the tag '{tag}'")
            }
            Rule::LessonGroup { lessons, .. } => format!(
                "- Number of questions in the paper from the lessons {}",
                lessons.join(", ")
            ),
        };
        let _ = writeln!(out, "{subject}: {observed} (should be {bounds}). {mark}");
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "{fails} fails.");
    out
}

/// The question list of an exported paper, in assignment order.
pub fn paper_records(paper: &Paper) -> Vec<PaperQuestionRecord> {
    paper
        .questions()
        .iter()
        .map(|question| PaperQuestionRecord {
            id: question.id.clone(),
            lesson_id: question.lesson_id.clone(),
            tags: question.tags.iter().cloned().collect(),
        })
        .collect()
}
