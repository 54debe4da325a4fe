//! Attribute→tag mapping and record conversion.

use super::records::{ExamRecord, LessonRecord, QuestionRecord};
use crate::bank::{Question, EXCLUSION_GROUP_PREFIX};
use crate::exam::{Bounds, Exam, Rule};

/// Tags derived from one question record's attributes.
///
/// Figure kinds add both the generic `shallow:has_figure` and the
/// specific kind tag. Unknown attribute values contribute nothing.
fn question_tags(record: &QuestionRecord) -> Vec<String> {
    let mut tags = Vec::new();

    match record.format.as_str() {
        "qm" => tags.push("shallow:has_question_mark"),
        "fib" => tags.push("shallow:has_fillable_space"),
        _ => {}
    }

    match record.figures.as_str() {
        "none" => tags.push("shallow:does_not_have_figure"),
        "diagram" => {
            tags.push("shallow:has_figure");
            tags.push("shallow:has_diagram");
        }
        "plot" => {
            tags.push("shallow:has_figure");
            tags.push("shallow:has_plot");
        }
        "image" => {
            tags.push("shallow:has_figure");
            tags.push("shallow:has_image");
        }
        _ => {}
    }

    match record.concept.as_str() {
        "single" => tags.push("subjective:single_concept"),
        "multiple" => tags.push("subjective:multiple_concept"),
        _ => {}
    }

    match record.skill.as_str() {
        "recall" => tags.push("bloom:recall"),
        "apply" => tags.push("bloom:apply"),
        "analyze" => tags.push("bloom:analyse"),
        _ => {}
    }

    tags.into_iter().map(str::to_owned).collect()
}

/// Converts lesson records into pool questions.
///
/// Members of each exclusion group get a synthetic `group:<n>` tag; the
/// counter increases per group and is scoped to the whole import, not
/// per lesson.
pub fn questions_from_lessons(lessons: &[LessonRecord]) -> Vec<Question> {
    let mut questions = Vec::new();
    let mut group_number = 0usize;

    for lesson in lessons {
        for record in &lesson.questions {
            questions.push(Question::new(
                record.id.clone(),
                lesson.id.clone(),
                question_tags(record),
            ));
        }

        for group in &lesson.groups {
            group_number += 1;
            for record in group {
                let mut tags = question_tags(record);
                tags.push(format!("{EXCLUSION_GROUP_PREFIX}{group_number}"));
                questions.push(Question::new(record.id.clone(), lesson.id.clone(), tags));
            }
        }
    }

    questions
}

/// The fixed (category, value) → tag table for constraint entries.
///
/// Returns `None` for pairs outside the table; such entries produce no
/// rule.
pub fn rule_tag(category: &str, value: &str) -> Option<&'static str> {
    match (category, value) {
        ("figures", "none") => Some("shallow:does_not_have_figure"),
        ("figures", "diagram") => Some("shallow:has_diagram"),
        ("figures", "plot") => Some("shallow:has_plot"),
        ("figures", "image") => Some("shallow:has_image"),
        ("skill", "recall") => Some("bloom:recall"),
        ("skill", "apply") => Some("bloom:apply"),
        ("skill", "analyze") => Some("bloom:analyse"),
        ("concept", "single") => Some("subjective:single_concept"),
        ("concept", "multiple") => Some("subjective:multiple_concept"),
        _ => None,
    }
}

fn bounds_from(min: u32, max: i64) -> Bounds {
    if max < 0 {
        Bounds::at_least(min)
    } else {
        Bounds::new(min, max as u32)
    }
}

/// Converts an exam blueprint into an [`Exam`].
///
/// Rule order: the total count rule first, then one tag rule per known
/// constraint entry, then one lesson-group rule per cluster.
pub fn exam_from_record(record: &ExamRecord) -> Exam {
    let mut exam = Exam::new(record.id.clone(), record.board.clone())
        .with_rule(Rule::TotalCount(Bounds::exactly(record.total_questions)));

    for constraint in &record.constraints {
        if let Some(tag) = rule_tag(&constraint.category, &constraint.value) {
            exam.rules.push(Rule::Tag {
                tag: tag.to_owned(),
                bounds: bounds_from(constraint.min, constraint.max),
            });
        }
    }

    for cluster in &record.clusters {
        exam.rules.push(Rule::LessonGroup {
            lessons: cluster.lessons.clone(),
            bounds: bounds_from(cluster.min, cluster.max),
        });
    }

    exam
}
