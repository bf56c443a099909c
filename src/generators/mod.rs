//! Problem instance generators.
//!
//! - [`random_problem`]: a chain of order constraints over a hidden
//!   assignment, satisfiable by construction.
//! - [`latin_grid`]: the all-different row/column constraints of an
//!   `n x n` Latin square.
//!
//! Both return a [`Problem`](crate::loader::Problem), which can be written
//! out with [`Problem::to_text`](crate::loader::Problem::to_text) or built
//! into a network directly.

mod config;
mod grid;
mod random;

pub use config::RandomConfig;
pub use grid::latin_grid;
pub use random::{random_problem, random_problem_with_witness};
