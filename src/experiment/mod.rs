//! Search/inference tradeoff experiments.
//!
//! Sweeps the arc-consistency ratio over a fixed problem and records, per
//! ratio, the wall time of arc-consistency plus search, the branches
//! expanded and the values removed. Plotting is left to the caller.

mod config;
mod runner;

pub use config::SweepConfig;
pub use runner::{RatioSweep, SweepPoint, SweepReport, Trial};
