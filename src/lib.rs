//! Finite-domain constraint satisfaction with a tunable inference/search
//! tradeoff.
//!
//! - **Network**: variables with ordered integer domains and binary
//!   relational constraints (`<`, `>`, `<=`, `>=`, `=`, `!=`) between
//!   variables or against constants.
//! - **Arc-consistency**: a budgeted pruning pass whose budget is a fraction
//!   (`ratio`) of the removable domain values.
//! - **Search**: static-order backtracking that finds one or all solutions
//!   and counts explored branches.
//! - **Loader / generators / experiment**: the text problem format, random
//!   and Latin-grid instances, and ratio sweeps over time and cost.
//!
//! All cost metrics (values removed, branches expanded) are deterministic
//! for a given network and ratio.
//!
//! # Examples
//!
//! ```
//! use u_csp::network::{Constraint, Operator, Variable};
//!
//! let mut network = u_csp::build_network(
//!     vec![Variable::new("A", [1, 2, 3]), Variable::new("B", [1, 2, 3])],
//!     vec![Constraint::vars("A", Operator::Gt, "B")],
//! )
//! .unwrap();
//!
//! let removed = u_csp::apply_arc_consistency(&mut network, 1.0).unwrap();
//! assert_eq!(removed, 2);
//!
//! let result = u_csp::search(&network, true);
//! assert_eq!(result.solutions.len(), 3);
//! ```

pub mod arc;
pub mod error;
pub mod experiment;
pub mod generators;
pub mod loader;
pub mod network;
pub mod search;

#[cfg(test)]
pub(crate) mod testing;

pub use error::{CspError, LoadError};

use arc::{ArcConfig, ArcConsistency};
use network::{Constraint, ConstraintNetwork, Variable};
use search::{BacktrackingSearch, SearchConfig, SearchResult};

/// Builds and validates a constraint network.
pub fn build_network(
    variables: Vec<Variable>,
    constraints: Vec<Constraint>,
) -> error::Result<ConstraintNetwork> {
    ConstraintNetwork::new(variables, constraints)
}

/// Runs arc-consistency with the given ratio and returns the number of
/// values removed.
pub fn apply_arc_consistency(network: &mut ConstraintNetwork, ratio: f64) -> error::Result<usize> {
    let result = ArcConsistency::run(network, &ArcConfig::default().with_ratio(ratio))?;
    Ok(result.checked)
}

/// Searches for the first solution, or all of them when `find_all` is set.
pub fn search(network: &ConstraintNetwork, find_all: bool) -> SearchResult {
    BacktrackingSearch::run(network, &SearchConfig::default().with_find_all(find_all))
}
