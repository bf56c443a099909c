//! Random chained-order instances.

use super::config::RandomConfig;
use crate::loader::Problem;
use crate::network::{Assignment, Constraint, Operator, Variable};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::cmp::Ordering;

/// Generates a random instance that is satisfiable by construction.
///
/// Variables `node0..node{size-1}` share the domain `0..=size`. Each new
/// variable draws a hidden value and is related to every earlier variable
/// by `=`, `<` or `>` according to the hidden values, so the hidden
/// assignment satisfies every constraint.
///
/// ```
/// use u_csp::generators::{random_problem, RandomConfig};
///
/// let problem = random_problem(&RandomConfig::default().with_size(5).with_seed(1));
/// assert_eq!(problem.variables.len(), 5);
/// assert_eq!(problem.constraints.len(), 10);
/// ```
pub fn random_problem(config: &RandomConfig) -> Problem {
    random_problem_with_witness(config).0
}

/// Like [`random_problem`], also returning the hidden assignment.
pub fn random_problem_with_witness(config: &RandomConfig) -> (Problem, Assignment) {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::seed_from_u64(rand::random()),
    };

    let max = config.size as i64;
    let mut problem = Problem::default();
    let mut hidden: Vec<i64> = Vec::with_capacity(config.size);
    let mut witness = Assignment::new();

    for i in 0..config.size {
        let key = format!("node{i}");
        let value = rng.random_range(0..=max);
        problem.variables.push(Variable::new(key.clone(), 0..=max));

        for (j, &existing) in hidden.iter().enumerate() {
            let op = match value.cmp(&existing) {
                Ordering::Equal => Operator::Eq,
                Ordering::Less => Operator::Lt,
                Ordering::Greater => Operator::Gt,
            };
            problem
                .constraints
                .push(Constraint::vars(key.clone(), op, format!("node{j}")));
        }

        hidden.push(value);
        witness.insert(key, value);
    }

    (problem, witness)
}
