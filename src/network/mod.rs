//! Constraint network representation.
//!
//! A network is a set of variables with ordered finite domains plus a list
//! of binary relational constraints between variables or between a variable
//! and a constant.
//!
//! # Key Components
//!
//! - **Terms**: [`Term`] — a constraint endpoint (variable key or literal)
//! - **Operators**: [`Operator`] and the shared predicate [`consistent`]
//! - **Network**: [`ConstraintNetwork`] — variables, constraints, incidence index
//!
//! # References
//!
//! Dechter (2003), "Constraint Processing", ch. 2–3

mod model;
mod term;

pub use model::{Assignment, Constraint, ConstraintNetwork, Variable};
pub use term::{consistent, Operator, Term};

pub(crate) use model::{Endpoint, Side};
