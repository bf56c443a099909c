//! Problem descriptions in the two-section text format.
//!
//! ```text
//! Nodes
//! <key>,<value>,<value>,...
//! Constraints
//! <left>,<op>,<right>
//! ```
//!
//! Parsing yields a [`Problem`]; building the
//! [`ConstraintNetwork`](crate::network::ConstraintNetwork) from it is where
//! undeclared keys and empty domains are rejected.

mod parser;
mod types;

pub use parser::{load_file, parse, read_problem};
pub use types::Problem;
