//! Paper generation loop.

use std::collections::{HashMap, HashSet};

use rand::Rng;
use tracing::debug;

use super::config::{GeneratorConfig, Strategy};
use super::scoring::{can_place, placement_score};
use crate::bank::{Question, QuestionBank};
use crate::error::{Error, Result};
use crate::exam::{Exam, Rule};
use crate::paper::Paper;
use crate::random::{choice, create_rng};

/// Result of one generation run.
///
/// A run is best-effort: `skipped` counts placement decisions that
/// ended without an assignment, which is expected whenever the pool,
/// the capacity, and the exclusion groups do not line up perfectly.
#[derive(Debug, Clone)]
pub struct GenerationResult {
    /// The generated papers, in creation order.
    pub papers: Vec<Paper>,

    /// Questions assigned across all papers.
    pub placed: usize,

    /// Placement decisions that assigned nothing.
    pub skipped: usize,
}

/// Executes paper generation.
///
/// # Usage
///
/// ```ignore
/// let bank = QuestionBank::new(questions)?;
/// let config = GeneratorConfig::default().with_seed(42);
/// let result = GeneratorRunner::run(&bank, &exam, 3, &config)?;
/// ```
pub struct GeneratorRunner;

impl GeneratorRunner {
    /// Runs generation with the config's seed (or a fresh random one).
    pub fn run(
        bank: &QuestionBank,
        exam: &Exam,
        n: usize,
        config: &GeneratorConfig,
    ) -> Result<GenerationResult> {
        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };
        Self::run_with_rng(bank, exam, n, config, &mut rng)
    }

    /// Runs generation with an injected generator.
    ///
    /// Identical pool, exam, config, and generator state reproduce an
    /// identical sequence of assignments.
    pub fn run_with_rng<R: Rng>(
        bank: &QuestionBank,
        exam: &Exam,
        n: usize,
        config: &GeneratorConfig,
        rng: &mut R,
    ) -> Result<GenerationResult> {
        config.validate().map_err(Error::Config)?;
        exam.total_count_rule()?;

        debug!(
            strategy = ?config.strategy,
            papers = n,
            pool = bank.len(),
            "generating papers"
        );

        let result = match config.strategy {
            Strategy::GlobalRarity => global_rarity(bank, exam, n, config, rng)?,
            Strategy::RandomSampling => random_sampling(bank, exam, n, config, rng)?,
        };

        debug!(
            placed = result.placed,
            skipped = result.skipped,
            "generation finished"
        );
        Ok(result)
    }
}

/// Default strategy: iterate the whole pool once, strictest-cluster
/// questions first and rarer questions before common ones, assigning
/// each question to the paper where it scores best.
fn global_rarity<R: Rng>(
    bank: &QuestionBank,
    exam: &Exam,
    n: usize,
    config: &GeneratorConfig,
    rng: &mut R,
) -> Result<GenerationResult> {
    let mut papers = vec![Paper::new(); n];

    let ranks = lesson_strictness_ranks(exam);
    let jitter = 1.0 + jitter_draw(config, rng);

    let mut order: Vec<&Question> = bank.questions().iter().collect();
    order.sort_by(|a, b| {
        let rank_a = ranks.get(a.lesson_id.as_str()).copied().unwrap_or(usize::MAX);
        let rank_b = ranks.get(b.lesson_id.as_str()).copied().unwrap_or(usize::MAX);
        rank_a.cmp(&rank_b).then(
            (a.rarity * jitter)
                .partial_cmp(&(b.rarity * jitter))
                .unwrap_or(std::cmp::Ordering::Equal),
        )
    });

    let mut placed = 0usize;
    let mut skipped = 0usize;

    for question in order {
        let mut best_score = i64::MIN;
        let mut best: Vec<usize> = Vec::new();

        for (index, paper) in papers.iter().enumerate() {
            if !can_place(question, paper, exam)? {
                continue;
            }
            let score = placement_score(question, paper, exam);
            if score > best_score {
                best_score = score;
                best.clear();
                best.push(index);
            } else if score == best_score {
                best.push(index);
            }
        }

        // No eligible paper: the question stays unplaced.
        match choice(&best, rng) {
            Some(&index) => {
                papers[index].push(question.clone());
                placed += 1;
            }
            None => skipped += 1,
        }
    }

    Ok(GenerationResult {
        papers,
        placed,
        skipped,
    })
}

/// Alternate strategy: fill papers one at a time, each placement round
/// taking the best-scoring of a small random sample of questions not
/// yet used in any paper.
fn random_sampling<R: Rng>(
    bank: &QuestionBank,
    exam: &Exam,
    n: usize,
    config: &GeneratorConfig,
    rng: &mut R,
) -> Result<GenerationResult> {
    let mut papers = vec![Paper::new(); n];
    let mut used: HashSet<String> = HashSet::new();

    let mut placed = 0usize;
    let mut skipped = 0usize;

    for index in 0..n {
        for _ in 0..config.attempts_per_paper {
            let used_ids: HashSet<&str> = used.iter().map(String::as_str).collect();
            let sample = bank.sample_excluding(config.sample_size, &used_ids, rng);
            if sample.is_empty() {
                break;
            }

            // Last of the sample wins score ties; the sample itself is
            // already in random order.
            let candidate = sample
                .iter()
                .copied()
                .max_by_key(|&question| placement_score(question, &papers[index], exam));

            match candidate {
                Some(question) => {
                    if can_place(question, &papers[index], exam)? {
                        used.insert(question.id.clone());
                        papers[index].push(question.clone());
                        placed += 1;
                    } else {
                        skipped += 1;
                    }
                }
                None => skipped += 1,
            }
        }
    }

    Ok(GenerationResult {
        papers,
        placed,
        skipped,
    })
}

/// Maps each clustered lesson to the strictness rank of its cluster:
/// 0 for the tightest tolerance, increasing toward the most permissive.
/// A lesson in several clusters keeps the strictest rank. Lessons in no
/// cluster are absent and sort after all ranked ones.
fn lesson_strictness_ranks(exam: &Exam) -> HashMap<&str, usize> {
    let mut clusters: Vec<&Rule> = exam
        .rules
        .iter()
        .filter(|rule| matches!(rule, Rule::LessonGroup { .. }))
        .collect();
    clusters.sort_by_key(|rule| rule.bounds().width().unwrap_or(i64::MAX));

    let mut ranks: HashMap<&str, usize> = HashMap::new();
    for (rank, rule) in clusters.iter().enumerate() {
        if let Rule::LessonGroup { lessons, .. } = rule {
            for lesson in lessons {
                ranks.entry(lesson.as_str()).or_insert(rank);
            }
        }
    }
    ranks
}

/// One multiplier offset for the whole run, uniform in the configured
/// band. A degenerate band skips the draw.
fn jitter_draw<R: Rng>(config: &GeneratorConfig, rng: &mut R) -> f64 {
    if config.jitter_high > config.jitter_low {
        rng.random_range(config.jitter_low..config.jitter_high)
    } else {
        config.jitter_low
    }
}
