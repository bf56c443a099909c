//! Constraint endpoints and the relational operators between them.

use std::fmt;
use std::str::FromStr;

/// One side of a binary constraint.
///
/// Either a reference to a declared variable or a literal constant.
/// The distinction is made once, when the constraint is written (or parsed),
/// and never re-inferred later.
///
/// # Examples
///
/// ```
/// use u_csp::network::Term;
///
/// let x = Term::var("x");
/// assert_eq!(x.key(), Some("x"));
///
/// let five = Term::constant(5);
/// assert_eq!(five.key(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Term {
    /// Reference to a variable by key.
    Var(String),
    /// Fixed numeric literal.
    Const(i64),
}

impl Term {
    /// Creates a variable reference.
    pub fn var(key: impl Into<String>) -> Self {
        Term::Var(key.into())
    }

    /// Creates a literal term.
    pub fn constant(value: i64) -> Self {
        Term::Const(value)
    }

    /// The referenced key, if this is a variable.
    pub fn key(&self) -> Option<&str> {
        match self {
            Term::Var(key) => Some(key),
            Term::Const(_) => None,
        }
    }

    /// Parses a token: a decimal integer becomes a constant, anything else a key.
    pub fn parse_token(token: &str) -> Self {
        match token.parse::<i64>() {
            Ok(value) => Term::Const(value),
            Err(_) => Term::Var(token.to_string()),
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Var(key) => f.write_str(key),
            Term::Const(value) => write!(f, "{value}"),
        }
    }
}

/// Relational operator of a binary constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Operator {
    /// `<`
    Lt,
    /// `>`
    Gt,
    /// `<=`
    Le,
    /// `>=`
    Ge,
    /// `=`
    Eq,
    /// `!=`
    Ne,
}

impl Operator {
    /// All six operators.
    pub const ALL: [Operator; 6] = [
        Operator::Lt,
        Operator::Gt,
        Operator::Le,
        Operator::Ge,
        Operator::Eq,
        Operator::Ne,
    ];

    /// The textual symbol used in problem files.
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Lt => "<",
            Operator::Gt => ">",
            Operator::Le => "<=",
            Operator::Ge => ">=",
            Operator::Eq => "=",
            Operator::Ne => "!=",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operator::ALL
            .into_iter()
            .find(|op| op.symbol() == s)
            .ok_or_else(|| format!("unknown operator: {s}"))
    }
}

/// Evaluates `a op b`.
///
/// Shared by arc-consistency and search so the two never disagree on
/// what "consistent" means.
///
/// ```
/// use u_csp::network::{consistent, Operator};
///
/// assert!(consistent(1, 2, Operator::Lt));
/// assert!(!consistent(2, 2, Operator::Ne));
/// ```
#[inline]
pub fn consistent(a: i64, b: i64, op: Operator) -> bool {
    match op {
        Operator::Lt => a < b,
        Operator::Gt => a > b,
        Operator::Le => a <= b,
        Operator::Ge => a >= b,
        Operator::Eq => a == b,
        Operator::Ne => a != b,
    }
}
