//! Seed search loop.

use tracing::{debug, info};

use crate::bank::QuestionBank;
use crate::error::{Error, Result};
use crate::exam::Exam;
use crate::generator::{check_papers, GeneratorConfig, GeneratorRunner, RuleReport};
use crate::paper::Paper;
use crate::random::create_rng;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// One generate-and-check cycle under one seed.
#[derive(Debug, Clone)]
pub struct Attempt {
    /// Seed that produced this attempt.
    pub seed: u64,

    /// The generated papers.
    pub papers: Vec<Paper>,

    /// Check outcomes for every (rule, paper) pair.
    pub report: RuleReport,
}

/// Outcome of a seed search.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Lowest-violation attempt seen.
    pub best: Attempt,

    /// Attempts actually run (early stop on a clean attempt).
    pub attempts_run: usize,
}

impl SearchResult {
    pub fn is_satisfied(&self) -> bool {
        self.best.report.is_satisfied()
    }
}

/// Generates `n` papers under `seed` and checks them. Pure with respect
/// to its inputs: the same arguments always produce the same attempt.
pub fn run_attempt(
    bank: &QuestionBank,
    exam: &Exam,
    n: usize,
    config: &GeneratorConfig,
    seed: u64,
) -> Result<Attempt> {
    let mut rng = create_rng(seed);
    let result = GeneratorRunner::run_with_rng(bank, exam, n, config, &mut rng)?;
    let report = check_papers(&result.papers, exam);
    debug!(seed, violations = report.violations, "attempt checked");
    Ok(Attempt {
        seed,
        papers: result.papers,
        report,
    })
}

/// Drives repeated generation attempts across seeds.
pub struct SearchRunner;

impl SearchRunner {
    /// Runs up to `max_attempts` sequential attempts with seeds
    /// `base_seed, base_seed + 1, ...`, keeping the lowest-violation
    /// outcome and stopping early once an attempt satisfies every rule.
    /// The earliest attempt wins violation ties.
    pub fn run(
        bank: &QuestionBank,
        exam: &Exam,
        n: usize,
        config: &GeneratorConfig,
        base_seed: u64,
        max_attempts: usize,
    ) -> Result<SearchResult> {
        if max_attempts == 0 {
            return Err(Error::Config("max_attempts must be at least 1".into()));
        }

        let mut best = run_attempt(bank, exam, n, config, base_seed)?;
        let mut attempts_run = 1;

        for i in 1..max_attempts {
            if best.report.is_satisfied() {
                break;
            }
            let attempt = run_attempt(bank, exam, n, config, base_seed.wrapping_add(i as u64))?;
            attempts_run += 1;
            if attempt.report.violations < best.report.violations {
                best = attempt;
            }
        }

        info!(
            seed = best.seed,
            violations = best.report.violations,
            attempts_run,
            "search finished"
        );
        Ok(SearchResult { best, attempts_run })
    }

    /// Runs all `max_attempts` attempts in parallel and picks the
    /// winner deterministically: fewest violations, then lowest seed.
    /// No early stop; every seed is evaluated.
    #[cfg(feature = "parallel")]
    pub fn run_parallel(
        bank: &QuestionBank,
        exam: &Exam,
        n: usize,
        config: &GeneratorConfig,
        base_seed: u64,
        max_attempts: usize,
    ) -> Result<SearchResult> {
        if max_attempts == 0 {
            return Err(Error::Config("max_attempts must be at least 1".into()));
        }

        let attempts: Vec<Attempt> = (0..max_attempts)
            .into_par_iter()
            .map(|i| run_attempt(bank, exam, n, config, base_seed.wrapping_add(i as u64)))
            .collect::<Result<Vec<_>>>()?;

        let best = attempts
            .into_iter()
            .min_by_key(|attempt| (attempt.report.violations, attempt.seed))
            .ok_or_else(|| Error::Config("no attempts produced".into()))?;

        info!(
            seed = best.seed,
            violations = best.report.violations,
            attempts_run = max_attempts,
            "parallel search finished"
        );
        Ok(SearchResult {
            best,
            attempts_run: max_attempts,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank::{Question, QuestionBank};
    use crate::exam::{Bounds, Rule};

    fn bank() -> QuestionBank {
        QuestionBank::new(vec![
            Question::new("r1", "L1", ["bloom:recall"]),
            Question::new("r2", "L1", ["bloom:recall"]),
            Question::new("r3", "L1", ["bloom:recall"]),
            Question::new("a1", "L2", ["bloom:apply"]),
        ])
        .unwrap()
    }

    fn exam() -> Exam {
        Exam::new("e1", "board")
            .with_rule(Rule::TotalCount(Bounds::exactly(2)))
            .with_rule(Rule::Tag {
                tag: "bloom:recall".into(),
                bounds: Bounds::exactly(1),
            })
            .with_rule(Rule::Tag {
                tag: "bloom:apply".into(),
                bounds: Bounds::exactly(1),
            })
    }

    #[test]
    fn test_attempt_is_pure() {
        let bank = bank();
        let exam = exam();
        let config = GeneratorConfig::default();
        let a = run_attempt(&bank, &exam, 1, &config, 99).unwrap();
        let b = run_attempt(&bank, &exam, 1, &config, 99).unwrap();
        let ids = |attempt: &Attempt| -> Vec<String> {
            attempt.papers[0]
                .questions()
                .iter()
                .map(|q| q.id.clone())
                .collect()
        };
        assert_eq!(ids(&a), ids(&b));
        assert_eq!(a.report.violations, b.report.violations);
    }

    #[test]
    fn test_search_stops_early_when_satisfied() {
        let bank = bank();
        let exam = exam();
        let config = GeneratorConfig::default();
        // The first seed already yields a clean result for this pool.
        let result = SearchRunner::run(&bank, &exam, 1, &config, 0, 50).unwrap();
        assert!(result.is_satisfied());
        assert_eq!(result.attempts_run, 1);
    }

    #[test]
    fn test_search_keeps_best_of_hopeless_exam() {
        let bank = bank();
        // Unsatisfiable: wants 3 apply questions, the pool has 1.
        let exam = Exam::new("e1", "board")
            .with_rule(Rule::TotalCount(Bounds::exactly(2)))
            .with_rule(Rule::Tag {
                tag: "bloom:apply".into(),
                bounds: Bounds::exactly(3),
            });
        let config = GeneratorConfig::default();
        let result = SearchRunner::run(&bank, &exam, 1, &config, 0, 5).unwrap();
        assert!(!result.is_satisfied());
        assert_eq!(result.attempts_run, 5);
        assert!(result.best.report.violations >= 1);
    }

    #[test]
    fn test_zero_attempts_rejected() {
        let bank = bank();
        let exam = exam();
        let config = GeneratorConfig::default();
        let err = SearchRunner::run(&bank, &exam, 1, &config, 0, 0).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_matches_sequential_winner_quality() {
        let bank = bank();
        let exam = exam();
        let config = GeneratorConfig::default();
        let parallel = SearchRunner::run_parallel(&bank, &exam, 1, &config, 0, 8).unwrap();
        let sequential = SearchRunner::run(&bank, &exam, 1, &config, 0, 8).unwrap();
        assert_eq!(
            parallel.best.report.violations,
            sequential.best.report.violations
        );
    }
}
