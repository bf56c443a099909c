//! Budgeted arc-consistency pass.

use super::config::ArcConfig;
use crate::error::{CspError, Result};
use crate::network::{ConstraintNetwork, Endpoint, Side};
use log::{debug, trace};

/// Outcome of one arc-consistency run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArcResult {
    /// Number of values removed (the "checked values" cost metric).
    pub checked: usize,

    /// Maximum number of removals this run was allowed.
    pub budget: usize,

    /// Number of outer passes started over the variables.
    pub passes: usize,

    /// Whether the run stopped because `checked` reached `budget`.
    pub exhausted: bool,

    /// Whether the last full pass removed nothing.
    pub fixpoint: bool,
}

/// Executes the budgeted arc-consistency pass.
///
/// Each outer pass visits variables in declaration order, each variable's
/// incident constraints in insertion order, and each value in domain order.
/// A value with no support in the opposite endpoint's current domain (a
/// literal counts as a singleton domain) is removed. Passes repeat until one
/// removes nothing, or stop mid-scan as soon as the budget is spent.
///
/// Removal is only ever justified by an exhaustive scan for support, so the
/// set of complete solutions is never changed.
pub struct ArcConsistency;

impl ArcConsistency {
    /// Runs arc-consistency, mutating domains in place.
    ///
    /// # Errors
    ///
    /// [`CspError::InvalidRatio`] if `config.ratio` is outside `[0, 1]`.
    pub fn run(network: &mut ConstraintNetwork, config: &ArcConfig) -> Result<ArcResult> {
        config
            .validate()
            .map_err(|_| CspError::InvalidRatio(config.ratio))?;

        let budget = budget_for(network, config.ratio);
        let mut result = ArcResult {
            budget,
            ..ArcResult::default()
        };
        if budget == 0 {
            debug!("arc-consistency skipped: ratio {} gives no budget", config.ratio);
            return Ok(result);
        }

        loop {
            result.passes += 1;
            let mut changed = false;

            for var in 0..network.variable_count() {
                for k in 0..network.incidence_at(var).len() {
                    let inc = network.incidence_at(var)[k];
                    let values = network.domain_at(var).to_vec();

                    for value in values {
                        if has_support(network, inc.constraint, inc.side, value) {
                            continue;
                        }
                        network.remove_value(var, value);
                        result.checked += 1;
                        changed = true;
                        trace!(
                            "removed {}={} (constraint #{})",
                            network.key_at(var),
                            value,
                            inc.constraint
                        );

                        if result.checked >= budget {
                            result.exhausted = true;
                            debug!(
                                "arc-consistency budget exhausted: {} removals in {} passes",
                                result.checked, result.passes
                            );
                            return Ok(result);
                        }
                    }
                }
            }

            if !changed {
                break;
            }
        }

        result.fixpoint = true;
        debug!(
            "arc-consistency fixpoint: {} removals in {} passes (budget {})",
            result.checked, result.passes, budget
        );
        Ok(result)
    }
}

/// `floor((domain_size_total - variable_count) * ratio)`.
pub(crate) fn budget_for(network: &ConstraintNetwork, ratio: f64) -> usize {
    let removable = network
        .domain_size_total()
        .saturating_sub(network.variable_count());
    let budget = (removable as f64 * ratio).floor();
    if budget < 1.0 {
        0
    } else {
        budget as usize
    }
}

/// Whether `value`, placed at `side` of the constraint, has a consistent
/// partner at the opposite endpoint.
fn has_support(network: &ConstraintNetwork, constraint: usize, side: Side, value: i64) -> bool {
    let edge = network.edge(constraint);
    match edge.other(side) {
        Endpoint::Const(c) => edge.allows(side, value, c),
        Endpoint::Var(other) => network
            .domain_at(other)
            .iter()
            .any(|&w| edge.allows(side, value, w)),
    }
}
