//! Shared helpers for unit and property tests.

use crate::network::{Assignment, Constraint, ConstraintNetwork, Operator, Term, Variable};
use proptest::prelude::*;

/// Builds a network from `(key, domain)` pairs and `(left, op, right)` triples
/// where numeric tokens become constants.
pub(crate) fn network(
    vars: &[(&str, &[i64])],
    constraints: &[(&str, &str, &str)],
) -> ConstraintNetwork {
    let variables = vars
        .iter()
        .map(|(k, d)| Variable::new(*k, d.iter().copied()))
        .collect();
    let constraints = constraints
        .iter()
        .map(|(l, op, r)| {
            Constraint::new(
                Term::parse_token(l),
                op.parse::<Operator>().unwrap(),
                Term::parse_token(r),
            )
        })
        .collect();
    ConstraintNetwork::new(variables, constraints).unwrap()
}

/// Every complete assignment satisfying the network, by exhaustive
/// enumeration over the current domains (declaration order, odometer style).
pub(crate) fn brute_force(network: &ConstraintNetwork) -> Vec<Assignment> {
    let vars = network.variables();
    if vars.iter().any(|v| v.domain.is_empty()) {
        return Vec::new();
    }
    let mut found = Vec::new();
    let mut digits = vec![0usize; vars.len()];
    loop {
        let candidate: Assignment = vars
            .iter()
            .zip(&digits)
            .map(|(v, &d)| (v.key.clone(), v.domain[d]))
            .collect();
        if network.is_satisfied_by(&candidate) {
            found.push(candidate);
        }

        let mut i = 0;
        loop {
            if i == vars.len() {
                return found;
            }
            digits[i] += 1;
            if digits[i] < vars[i].domain.len() {
                break;
            }
            digits[i] = 0;
            i += 1;
        }
    }
}

/// Sorts assignments so result sets can be compared regardless of order.
pub(crate) fn sorted(mut solutions: Vec<Assignment>) -> Vec<Assignment> {
    solutions.sort();
    solutions
}

fn operator() -> impl Strategy<Value = Operator> {
    prop::sample::select(Operator::ALL.to_vec())
}

/// Small random networks: up to 4 variables over values `0..5`, with
/// variable/variable and variable/constant constraints.
pub(crate) fn arb_network() -> impl Strategy<Value = ConstraintNetwork> {
    (1usize..=4)
        .prop_flat_map(|n| {
            let domains = prop::collection::vec(prop::collection::btree_set(0i64..5, 1..=4), n);
            let constraint = (0..n, operator(), 0..n + 1, 0i64..5);
            (domains, prop::collection::vec(constraint, 0..=6))
        })
        .prop_map(|(domains, raw)| {
            let n = domains.len();
            let variables = domains
                .into_iter()
                .enumerate()
                .map(|(i, d)| Variable::new(format!("v{i}"), d))
                .collect();
            let constraints = raw
                .into_iter()
                .map(|(l, op, r, c)| {
                    let right = if r == n {
                        Term::Const(c)
                    } else {
                        Term::Var(format!("v{r}"))
                    };
                    Constraint::new(Term::Var(format!("v{l}")), op, right)
                })
                .collect();
            ConstraintNetwork::new(variables, constraints).unwrap()
        })
}
