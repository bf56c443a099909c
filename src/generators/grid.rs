//! All-different grid instances.

use crate::loader::Problem;
use crate::network::{Constraint, Operator, Variable};

/// Generates the `n x n` Latin square problem.
///
/// Cells are keyed `"{row}-{col}"` with domain `1..=n`. Every pair of
/// cells sharing a row or a column gets exactly one `!=` constraint, from
/// the earlier cell to the later one.
///
/// ```
/// use u_csp::generators::latin_grid;
///
/// let problem = latin_grid(3);
/// assert_eq!(problem.variables.len(), 9);
/// // 3 rows * 3 pairs + 3 columns * 3 pairs
/// assert_eq!(problem.constraints.len(), 18);
/// ```
pub fn latin_grid(n: usize) -> Problem {
    let mut problem = Problem::default();
    let cell = |i: usize, j: usize| format!("{i}-{j}");

    for i in 0..n {
        for j in 0..n {
            problem
                .variables
                .push(Variable::new(cell(i, j), 1..=n as i64));

            for s in i + 1..n {
                problem
                    .constraints
                    .push(Constraint::vars(cell(i, j), Operator::Ne, cell(s, j)));
            }
            for t in j + 1..n {
                problem
                    .constraints
                    .push(Constraint::vars(cell(i, j), Operator::Ne, cell(i, t)));
            }
        }
    }
    problem
}
