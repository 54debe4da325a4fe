//! Pool statistics and the rarity index.

use std::collections::{HashMap, HashSet};

use rand::Rng;

use super::question::{Question, EXCLUSION_GROUP_PREFIX};
use crate::error::{Error, Result};
use crate::random::shuffle;

/// The question pool plus statistics derived once at construction.
///
/// Rarity of a question is the product of the normalized frequencies of
/// all its non-exclusion-group tags, multiplied by its lesson's
/// normalized frequency. A common tag/lesson combination yields a
/// product near 1 (substitutable, save for later); a rare combination
/// yields a small product (place early, while choice is flexible).
///
/// The pool is treated as immutable after import; statistics are never
/// recomputed.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    questions: Vec<Question>,
    tag_frequencies: HashMap<String, usize>,
    normalized_tag_frequencies: HashMap<String, f64>,
    lesson_frequencies: HashMap<String, usize>,
    normalized_lesson_frequencies: HashMap<String, f64>,
    rarities: HashMap<String, f64>,
}

impl QuestionBank {
    /// Builds the bank and computes all statistics.
    ///
    /// Rarity is cached both in the bank and on each question. Fails
    /// only when a question references a lesson or tag absent from the
    /// frequency maps, which a pool built from its own questions cannot
    /// produce.
    pub fn new(mut questions: Vec<Question>) -> Result<Self> {
        let mut tag_frequencies: HashMap<String, usize> = HashMap::new();
        let mut total_tags = 0usize;
        for question in &questions {
            for tag in &question.tags {
                *tag_frequencies.entry(tag.clone()).or_insert(0) += 1;
                total_tags += 1;
            }
        }
        let normalized_tag_frequencies: HashMap<String, f64> = tag_frequencies
            .iter()
            .map(|(tag, &count)| (tag.clone(), count as f64 / total_tags as f64))
            .collect();

        let mut lesson_frequencies: HashMap<String, usize> = HashMap::new();
        for question in &questions {
            *lesson_frequencies.entry(question.lesson_id.clone()).or_insert(0) += 1;
        }
        let normalized_lesson_frequencies: HashMap<String, f64> = lesson_frequencies
            .iter()
            .map(|(lesson, &count)| (lesson.clone(), count as f64 / questions.len() as f64))
            .collect();

        let mut rarities = HashMap::with_capacity(questions.len());
        for question in &mut questions {
            let mut rarity = 1.0;
            for tag in &question.tags {
                if tag.starts_with(EXCLUSION_GROUP_PREFIX) {
                    continue;
                }
                let frequency =
                    normalized_tag_frequencies
                        .get(tag)
                        .ok_or_else(|| Error::UnknownTag {
                            question_id: question.id.clone(),
                            tag: tag.clone(),
                        })?;
                rarity *= frequency;
            }
            let lesson_frequency = normalized_lesson_frequencies
                .get(&question.lesson_id)
                .ok_or_else(|| Error::UnknownLesson {
                    question_id: question.id.clone(),
                    lesson_id: question.lesson_id.clone(),
                })?;
            rarity *= lesson_frequency;

            question.rarity = rarity;
            rarities.insert(question.id.clone(), rarity);
        }

        Ok(Self {
            questions,
            tag_frequencies,
            normalized_tag_frequencies,
            lesson_frequencies,
            normalized_lesson_frequencies,
            rarities,
        })
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Cached rarity for a question id.
    pub fn rarity_of(&self, question_id: &str) -> Option<f64> {
        self.rarities.get(question_id).copied()
    }

    pub fn tag_frequency(&self, tag: &str) -> usize {
        self.tag_frequencies.get(tag).copied().unwrap_or(0)
    }

    pub fn normalized_tag_frequency(&self, tag: &str) -> Option<f64> {
        self.normalized_tag_frequencies.get(tag).copied()
    }

    pub fn lesson_frequency(&self, lesson_id: &str) -> usize {
        self.lesson_frequencies.get(lesson_id).copied().unwrap_or(0)
    }

    pub fn normalized_lesson_frequency(&self, lesson_id: &str) -> Option<f64> {
        self.normalized_lesson_frequencies.get(lesson_id).copied()
    }

    /// Questions ordered rarest first. Stable for equal rarities.
    pub fn questions_by_rarity(&self) -> Vec<&Question> {
        let mut ordered: Vec<&Question> = self.questions.iter().collect();
        ordered.sort_by(|a, b| {
            a.rarity
                .partial_cmp(&b.rarity)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        ordered
    }

    /// Draws up to `n` random questions whose ids are not in `used`.
    pub fn sample_excluding<'a, R: Rng>(
        &'a self,
        n: usize,
        used: &HashSet<&str>,
        rng: &mut R,
    ) -> Vec<&'a Question> {
        let mut unused: Vec<&Question> = self
            .questions
            .iter()
            .filter(|q| !used.contains(q.id.as_str()))
            .collect();
        shuffle(&mut unused, rng);
        unused.truncate(n);
        unused
    }
}
