//! Backtracking search.
//!
//! Static smallest-domain-first ordering, forward-only consistency checks
//! and a branch counter that counts every completed recursive call, so cost
//! numbers are exactly reproducible for a given network.
//!
//! # References
//!
//! Russell & Norvig (2021), "Artificial Intelligence: A Modern Approach", §6.3

mod config;
mod runner;

pub use config::SearchConfig;
pub use runner::{BacktrackingSearch, SearchResult};
