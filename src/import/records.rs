//! Already-parsed input records.

/// One question as it appears in the question source document.
///
/// Attribute values are free text; unknown values simply contribute no
/// tag.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuestionRecord {
    pub id: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub format: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub figures: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub concept: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub skill: String,
}

/// One lesson: loose questions plus exclusion groups of questions.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LessonRecord {
    pub id: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub questions: Vec<QuestionRecord>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub groups: Vec<Vec<QuestionRecord>>,
}

/// One question-level constraint entry of the rule source document.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConstraintRecord {
    pub category: String,
    pub value: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub min: u32,
    /// −1 means unbounded above.
    #[cfg_attr(feature = "serde", serde(default = "unbounded_max"))]
    pub max: i64,
}

/// One lesson cluster of the rule source document.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClusterRecord {
    pub lessons: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub min: u32,
    /// −1 means unbounded above.
    #[cfg_attr(feature = "serde", serde(default = "unbounded_max"))]
    pub max: i64,
}

/// A whole exam blueprint.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExamRecord {
    pub id: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub board: String,
    pub total_questions: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub constraints: Vec<ConstraintRecord>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub clusters: Vec<ClusterRecord>,
}

#[cfg(feature = "serde")]
fn unbounded_max() -> i64 {
    -1
}
