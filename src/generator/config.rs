//! Generator configuration.

/// Which placement strategy the runner uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Orders all questions globally (strictest lesson cluster first,
    /// then rarity) and places each into the best-scoring paper.
    #[default]
    GlobalRarity,

    /// Fills papers one at a time, repeatedly picking the best of a
    /// small random sample of unused questions. Simpler and cheaper;
    /// kept for comparing trade-offs.
    RandomSampling,
}

/// Configuration for the paper generator.
///
/// # Examples
///
/// ```
/// use papergen::generator::{GeneratorConfig, Strategy};
///
/// let config = GeneratorConfig::default()
///     .with_strategy(Strategy::RandomSampling)
///     .with_sample_size(20)
///     .with_seed(42);
/// assert_eq!(config.sample_size, 20);
/// ```
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Placement strategy.
    pub strategy: Strategy,

    /// Lower edge of the rarity jitter band.
    pub jitter_low: f64,

    /// Upper edge of the rarity jitter band. One multiplier
    /// `1 + U[jitter_low, jitter_high]` is drawn per run and applied to
    /// every rarity ordering key. With the default 0.3/0.3 band this is
    /// the constant 1.3.
    pub jitter_high: f64,

    /// Candidates drawn per placement round (sampling strategy only).
    pub sample_size: usize,

    /// Placement attempts per paper (sampling strategy only).
    pub attempts_per_paper: usize,

    /// Random seed (None draws one from the thread generator).
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            jitter_low: 0.3,
            jitter_high: 0.3,
            sample_size: 10,
            attempts_per_paper: 1000,
            seed: None,
        }
    }
}

impl GeneratorConfig {
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_jitter_band(mut self, low: f64, high: f64) -> Self {
        self.jitter_low = low;
        self.jitter_high = high;
        self
    }

    pub fn with_sample_size(mut self, n: usize) -> Self {
        self.sample_size = n;
        self
    }

    pub fn with_attempts_per_paper(mut self, n: usize) -> Self {
        self.attempts_per_paper = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if !self.jitter_low.is_finite() || !self.jitter_high.is_finite() {
            return Err("jitter band must be finite".into());
        }
        if self.jitter_low < 0.0 {
            return Err(format!(
                "jitter_low must be non-negative, got {}",
                self.jitter_low
            ));
        }
        if self.jitter_high < self.jitter_low {
            return Err(format!(
                "jitter_high must be >= jitter_low, got {} < {}",
                self.jitter_high, self.jitter_low
            ));
        }
        if self.sample_size == 0 {
            return Err("sample_size must be at least 1".into());
        }
        if self.attempts_per_paper == 0 {
            return Err("attempts_per_paper must be at least 1".into());
        }
        Ok(())
    }
}
