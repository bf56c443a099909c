//! Ratio sweep configuration.

/// Configuration for a ratio sweep.
///
/// The swept ratios are `i / num_ratios` for `i in 0..num_ratios`, so `0.0`
/// is always included and `1.0` never is.
///
/// # Examples
///
/// ```
/// use u_csp::experiment::SweepConfig;
///
/// let config = SweepConfig::default().with_num_ratios(4).with_trials_per_point(3);
/// assert_eq!(config.ratios(), vec![0.0, 0.25, 0.5, 0.75]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SweepConfig {
    /// Number of evenly spaced ratios in `[0, 1)`.
    pub num_ratios: usize,

    /// Repetitions per ratio; times and counts are averaged.
    pub trials_per_point: usize,

    /// Enumerate all solutions in each trial instead of the first.
    pub find_all: bool,

    /// Whether to evaluate ratios in parallel using rayon.
    ///
    /// Only honored with the `parallel` feature. Timings taken in parallel
    /// compete for cores; branch and removal counts are unaffected.
    pub parallel: bool,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            num_ratios: 50,
            trials_per_point: 1,
            find_all: false,
            parallel: false,
        }
    }
}

impl SweepConfig {
    pub fn with_num_ratios(mut self, n: usize) -> Self {
        self.num_ratios = n;
        self
    }

    pub fn with_trials_per_point(mut self, n: usize) -> Self {
        self.trials_per_point = n;
        self
    }

    pub fn with_find_all(mut self, find_all: bool) -> Self {
        self.find_all = find_all;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// The ratios this sweep visits, ascending.
    pub fn ratios(&self) -> Vec<f64> {
        (0..self.num_ratios)
            .map(|i| i as f64 / self.num_ratios as f64)
            .collect()
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.num_ratios == 0 {
            return Err("num_ratios must be at least 1".into());
        }
        if self.trials_per_point == 0 {
            return Err("trials_per_point must be at least 1".into());
        }
        Ok(())
    }
}
