//! Budgeted arc-consistency.
//!
//! Removes domain values that have no supporting value in the opposite
//! endpoint of some incident constraint, repeating full passes until a
//! fixpoint or until a removal budget is spent.
//!
//! The budget is `floor((domain_size_total - variable_count) * ratio)`, so
//! `ratio` trades inference against search: `0.0` leaves every domain
//! untouched, `1.0` prunes until fixpoint unless nearly every removable
//! value is gone first.
//!
//! # References
//!
//! Mackworth (1977), "Consistency in Networks of Relations"

mod config;
mod runner;

pub use config::ArcConfig;
pub use runner::{ArcConsistency, ArcResult};
