//! Unvalidated problem description.

use crate::error::Result;
use crate::network::{Constraint, ConstraintNetwork, Variable};
use std::fmt;

/// Variables and constraints as read from (or written to) a problem file.
///
/// A `Problem` is not checked for consistency; [`Problem::into_network`]
/// performs the validation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Problem {
    /// Variables in declaration order.
    pub variables: Vec<Variable>,
    /// Constraints in file order.
    pub constraints: Vec<Constraint>,
}

impl Problem {
    pub fn new(variables: Vec<Variable>, constraints: Vec<Constraint>) -> Self {
        Self {
            variables,
            constraints,
        }
    }

    /// Validates and builds the constraint network.
    pub fn into_network(self) -> Result<ConstraintNetwork> {
        ConstraintNetwork::new(self.variables, self.constraints)
    }

    /// Renders the two-section text format.
    ///
    /// ```
    /// use u_csp::loader::Problem;
    /// use u_csp::network::{Constraint, Operator, Variable};
    ///
    /// let problem = Problem::new(
    ///     vec![Variable::new("A", [1, 2]), Variable::new("B", [1, 2])],
    ///     vec![Constraint::vars("A", Operator::Ne, "B")],
    /// );
    /// assert_eq!(problem.to_text(), "Nodes\nA,1,2\nB,1,2\nConstraints\nA,!=,B\n");
    /// ```
    pub fn to_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Nodes")?;
        for var in &self.variables {
            write!(f, "{}", var.key)?;
            for v in &var.domain {
                write!(f, ",{v}")?;
            }
            writeln!(f)?;
        }
        writeln!(f, "Constraints")?;
        for c in &self.constraints {
            writeln!(f, "{},{},{}", c.left, c.op, c.right)?;
        }
        Ok(())
    }
}
