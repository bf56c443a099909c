//! Arc-consistency configuration.

/// Configuration for the budgeted arc-consistency pass.
///
/// The single tunable, `ratio`, interpolates between pure search (`0.0`,
/// no pruning at all) and pruning until fixpoint or a near-complete removal
/// allowance (`1.0`). The pass may remove at most
/// `floor((domain_size_total - variable_count) * ratio)` values.
///
/// # Examples
///
/// ```
/// use u_csp::arc::ArcConfig;
///
/// let config = ArcConfig::default().with_ratio(0.4);
/// assert!(config.validate().is_ok());
/// assert!(ArcConfig::default().with_ratio(1.5).validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArcConfig {
    /// Fraction of the removable values the pass may spend, in `[0, 1]`.
    pub ratio: f64,
}

impl Default for ArcConfig {
    fn default() -> Self {
        Self { ratio: 1.0 }
    }
}

impl ArcConfig {
    pub fn with_ratio(mut self, ratio: f64) -> Self {
        self.ratio = ratio;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.ratio) {
            return Err(format!("ratio must be in [0, 1], got {}", self.ratio));
        }
        Ok(())
    }
}
