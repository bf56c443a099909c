//! Generator configuration.

/// Configuration for [`random_problem`](super::random_problem).
///
/// # Examples
///
/// ```
/// use u_csp::generators::RandomConfig;
///
/// let config = RandomConfig::default().with_size(20).with_seed(7);
/// assert_eq!(config.size, 20);
/// assert_eq!(config.seed, Some(7));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RandomConfig {
    /// Number of variables; each domain is `0..=size`.
    pub size: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for RandomConfig {
    fn default() -> Self {
        Self {
            size: 10,
            seed: None,
        }
    }
}

impl RandomConfig {
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
