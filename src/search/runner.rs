//! Static-order backtracking search.

use super::config::SearchConfig;
use crate::network::{consistent, Assignment, ConstraintNetwork, Endpoint};
use log::debug;

/// Result of a search run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    /// Complete satisfying assignments in discovery order.
    ///
    /// At most one when the search stops at the first solution.
    pub solutions: Vec<Assignment>,

    /// Number of completed recursive calls (explored branches), counting
    /// both successful and backtracked-over ones.
    pub branches: usize,
}

impl SearchResult {
    /// Whether at least one solution was found.
    pub fn is_satisfiable(&self) -> bool {
        !self.solutions.is_empty()
    }

    /// The first solution found, if any.
    pub fn first(&self) -> Option<&Assignment> {
        self.solutions.first()
    }
}

/// Executes backtracking search over a constraint network.
///
/// Variables are ordered once per call by current domain size (smallest
/// first, ties by declaration order). A candidate value is checked only
/// against constraints whose opposite endpoint is a literal or an already
/// assigned variable; there is no look-ahead propagation.
///
/// Search never mutates the network, so repeated calls return identical
/// results.
///
/// # Examples
///
/// ```
/// use u_csp::network::{Constraint, ConstraintNetwork, Operator, Variable};
/// use u_csp::search::{BacktrackingSearch, SearchConfig};
///
/// let network = ConstraintNetwork::new(
///     vec![Variable::new("A", [1, 2, 3]), Variable::new("B", [1, 2, 3])],
///     vec![Constraint::vars("A", Operator::Gt, "B")],
/// )
/// .unwrap();
///
/// let result = BacktrackingSearch::run(&network, &SearchConfig::default().with_find_all(true));
/// assert_eq!(result.solutions.len(), 3);
/// assert_eq!(result.branches, 6);
/// ```
pub struct BacktrackingSearch;

impl BacktrackingSearch {
    /// Runs the search.
    ///
    /// An empty domain (for example after arc-consistency) simply yields
    /// zero solutions.
    pub fn run(network: &ConstraintNetwork, config: &SearchConfig) -> SearchResult {
        if !literal_constraints_hold(network) {
            debug!("search: a constant-only constraint is false, network unsatisfiable");
            return SearchResult::default();
        }

        let mut state = SearchState {
            network,
            order: static_order(network),
            assigned: vec![None; network.variable_count()],
            find_all: config.find_all,
            solutions: Vec::new(),
            branches: 0,
        };
        state.descend(0);

        debug!(
            "search finished: {} solution(s), {} branches (find_all={})",
            state.solutions.len(),
            state.branches,
            config.find_all
        );
        SearchResult {
            solutions: state.solutions,
            branches: state.branches,
        }
    }
}

/// Variable indices sorted by domain size; the sort is stable, so ties keep
/// declaration order.
pub(crate) fn static_order(network: &ConstraintNetwork) -> Vec<usize> {
    let mut order: Vec<usize> = (0..network.variable_count()).collect();
    order.sort_by_key(|&var| network.domain_at(var).len());
    order
}

/// Constraints between two literals are never indexed, so check them once.
fn literal_constraints_hold(network: &ConstraintNetwork) -> bool {
    network.edges().iter().all(|edge| match (edge.left, edge.right) {
        (Endpoint::Const(a), Endpoint::Const(b)) => consistent(a, b, edge.op),
        _ => true,
    })
}

/// Recursion state. `order` is fixed for the whole call; a frame is just a
/// depth into it, and `assigned` is undone in place on backtrack.
struct SearchState<'a> {
    network: &'a ConstraintNetwork,
    order: Vec<usize>,
    assigned: Vec<Option<i64>>,
    find_all: bool,
    solutions: Vec<Assignment>,
    branches: usize,
}

impl SearchState<'_> {
    /// Returns `true` if a solution was found at or below this depth.
    fn descend(&mut self, depth: usize) -> bool {
        if depth == self.order.len() {
            self.record();
            return true;
        }

        let network = self.network;
        let var = self.order[depth];
        let mut found = false;

        for &value in network.domain_at(var) {
            if !self.is_valid(var, value) {
                continue;
            }

            self.assigned[var] = Some(value);
            let below = self.descend(depth + 1);
            self.assigned[var] = None;
            self.branches += 1;

            if below {
                found = true;
                if !self.find_all {
                    return true;
                }
            }
        }
        found
    }

    /// Checks `var = value` against every incident constraint whose opposite
    /// endpoint is already known.
    ///
    /// A constraint from `var` to itself counts as known: both sides take the
    /// candidate value.
    fn is_valid(&self, var: usize, value: i64) -> bool {
        self.network.incidence_at(var).iter().all(|inc| {
            let edge = self.network.edge(inc.constraint);
            match edge.other(inc.side) {
                Endpoint::Const(c) => edge.allows(inc.side, value, c),
                Endpoint::Var(other) if other == var => edge.allows(inc.side, value, value),
                Endpoint::Var(other) => match self.assigned[other] {
                    Some(w) => edge.allows(inc.side, value, w),
                    None => true,
                },
            }
        })
    }

    fn record(&mut self) {
        let network = self.network;
        let solution = self
            .assigned
            .iter()
            .enumerate()
            .filter_map(|(var, v)| v.map(|v| (network.key_at(var).to_string(), v)))
            .collect();
        self.solutions.push(solution);
    }
}
