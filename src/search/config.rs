//! Search configuration.

/// Configuration for backtracking search.
///
/// # Examples
///
/// ```
/// use u_csp::search::SearchConfig;
///
/// let config = SearchConfig::default();
/// assert!(!config.find_all);
///
/// let exhaustive = SearchConfig::default().with_find_all(true);
/// assert!(exhaustive.find_all);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    /// Enumerate every solution instead of stopping at the first one.
    pub find_all: bool,
}

impl SearchConfig {
    pub fn with_find_all(mut self, find_all: bool) -> Self {
        self.find_all = find_all;
        self
    }
}
