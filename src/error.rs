//! Error types for network construction and problem loading.
//!
//! Unsatisfiability is never an error: an empty domain after pruning or an
//! exhausted search is reported as a result with zero solutions.

use thiserror::Error;

/// Errors raised while building a constraint network or running its engines.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CspError {
    /// A constraint references a variable key that was never declared.
    #[error("constraint #{index} references undeclared variable `{key}`")]
    InvalidConstraint {
        /// Position of the offending constraint in the input list.
        index: usize,
        /// The unknown key.
        key: String,
    },

    /// A variable was declared with no domain values.
    #[error("variable `{key}` has an empty domain")]
    EmptyDomain { key: String },

    /// The same variable key was declared twice.
    #[error("variable `{key}` is declared more than once")]
    DuplicateVariable { key: String },

    /// Arc-consistency ratio outside `[0, 1]` (or NaN).
    #[error("arc-consistency ratio must be in [0, 1], got {0}")]
    InvalidRatio(f64),

    /// A configuration struct failed validation.
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Errors raised while reading a problem description.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("failed to read problem: {0}")]
    Io(#[from] std::io::Error),

    /// The text does not follow the Nodes/Constraints format.
    #[error("line {line}: {message}")]
    Syntax { line: usize, message: String },

    /// The text parsed but describes an invalid network.
    #[error(transparent)]
    Network(#[from] CspError),
}

/// Result alias for network operations.
pub type Result<T> = std::result::Result<T, CspError>;
