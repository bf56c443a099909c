//! Ratio sweep execution.

use super::config::SweepConfig;
use crate::arc::{ArcConfig, ArcConsistency};
use crate::error::{CspError, Result};
use crate::network::ConstraintNetwork;
use crate::search::{BacktrackingSearch, SearchConfig};
use log::debug;
use std::time::{Duration, Instant};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Measurements of one arc-consistency + search run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trial {
    /// Wall time of arc-consistency plus search.
    pub elapsed: Duration,
    /// Branches expanded by search.
    pub branches: usize,
    /// Values removed by arc-consistency.
    pub checked: usize,
    /// Solutions found.
    pub solutions: usize,
}

/// Averaged measurements at one ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SweepPoint {
    pub ratio: f64,
    /// Mean wall time in seconds.
    pub mean_time: f64,
    pub mean_branches: f64,
    pub mean_checked: f64,
    /// Solutions found by the last trial (identical across trials).
    pub solutions: usize,
}

/// All points of a sweep, in ascending ratio order.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SweepReport {
    pub points: Vec<SweepPoint>,
}

impl SweepReport {
    /// Ratio with the smallest mean time. Ties go to the lower ratio.
    pub fn optimal_by_time(&self) -> Option<f64> {
        self.argmin(|p| p.mean_time)
    }

    /// Ratio with the fewest mean branches. Ties go to the lower ratio.
    pub fn optimal_by_branches(&self) -> Option<f64> {
        self.argmin(|p| p.mean_branches)
    }

    fn argmin(&self, key: impl Fn(&SweepPoint) -> f64) -> Option<f64> {
        let mut best: Option<&SweepPoint> = None;
        for p in &self.points {
            if best.is_none_or(|b| key(p) < key(b)) {
                best = Some(p);
            }
        }
        best.map(|p| p.ratio)
    }
}

/// Runs arc-consistency + search across a range of ratios.
pub struct RatioSweep;

impl RatioSweep {
    /// Runs a sweep. `factory` builds a fresh, unpruned network for every
    /// trial.
    ///
    /// # Errors
    ///
    /// [`CspError::Config`] for an invalid configuration, or whatever the
    /// factory returns.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_csp::experiment::{RatioSweep, SweepConfig};
    /// use u_csp::generators::latin_grid;
    ///
    /// let config = SweepConfig::default().with_num_ratios(5).with_find_all(true);
    /// let report = RatioSweep::run(|| latin_grid(3).into_network(), &config).unwrap();
    ///
    /// assert_eq!(report.points.len(), 5);
    /// assert!(report.points.iter().all(|p| p.solutions == 12));
    /// ```
    pub fn run<F>(factory: F, config: &SweepConfig) -> Result<SweepReport>
    where
        F: Fn() -> Result<ConstraintNetwork> + Sync,
    {
        config.validate().map_err(CspError::Config)?;
        let points = measure_all(&factory, &config.ratios(), config)?;
        Ok(SweepReport { points })
    }

    /// Runs one sweep per problem size. `factory_for_size` builds a fresh,
    /// unpruned network of the given size for every trial.
    ///
    /// Reports come back in the order of `sizes`.
    ///
    /// # Errors
    ///
    /// Same as [`RatioSweep::run`]; the first failing size aborts the run.
    pub fn run_sizes<G>(
        sizes: impl IntoIterator<Item = usize>,
        factory_for_size: G,
        config: &SweepConfig,
    ) -> Result<Vec<(usize, SweepReport)>>
    where
        G: Fn(usize) -> Result<ConstraintNetwork> + Sync,
    {
        let mut reports = Vec::new();
        for size in sizes {
            let report = Self::run(|| factory_for_size(size), config)?;
            debug!(
                "size {size}: optimal ratio {:?} by time, {:?} by branches",
                report.optimal_by_time(),
                report.optimal_by_branches()
            );
            reports.push((size, report));
        }
        Ok(reports)
    }

    /// Times one arc-consistency + search pair on `network`.
    pub fn trial(network: &mut ConstraintNetwork, ratio: f64, find_all: bool) -> Result<Trial> {
        let start = Instant::now();
        let arc = ArcConsistency::run(network, &ArcConfig::default().with_ratio(ratio))?;
        let search = SearchConfig::default().with_find_all(find_all);
        let found = BacktrackingSearch::run(network, &search);
        Ok(Trial {
            elapsed: start.elapsed(),
            branches: found.branches,
            checked: arc.checked,
            solutions: found.solutions.len(),
        })
    }
}

#[cfg(feature = "parallel")]
fn measure_all<F>(factory: &F, ratios: &[f64], config: &SweepConfig) -> Result<Vec<SweepPoint>>
where
    F: Fn() -> Result<ConstraintNetwork> + Sync,
{
    if config.parallel {
        ratios
            .par_iter()
            .map(|&ratio| measure_point(factory, ratio, config))
            .collect()
    } else {
        ratios
            .iter()
            .map(|&ratio| measure_point(factory, ratio, config))
            .collect()
    }
}

#[cfg(not(feature = "parallel"))]
fn measure_all<F>(factory: &F, ratios: &[f64], config: &SweepConfig) -> Result<Vec<SweepPoint>>
where
    F: Fn() -> Result<ConstraintNetwork>,
{
    ratios
        .iter()
        .map(|&ratio| measure_point(factory, ratio, config))
        .collect()
}

fn measure_point<F>(factory: &F, ratio: f64, config: &SweepConfig) -> Result<SweepPoint>
where
    F: Fn() -> Result<ConstraintNetwork>,
{
    let mut time = 0.0;
    let mut branches = 0usize;
    let mut checked = 0usize;
    let mut solutions = 0usize;

    for _ in 0..config.trials_per_point {
        let mut network = factory()?;
        let trial = RatioSweep::trial(&mut network, ratio, config.find_all)?;
        time += trial.elapsed.as_secs_f64();
        branches += trial.branches;
        checked += trial.checked;
        solutions = trial.solutions;
    }

    let n = config.trials_per_point as f64;
    let point = SweepPoint {
        ratio,
        mean_time: time / n,
        mean_branches: branches as f64 / n,
        mean_checked: checked as f64 / n,
        solutions,
    };
    debug!(
        "ratio {:.3}: {:.0} branches, {:.0} removed, {:.6}s",
        point.ratio, point.mean_branches, point.mean_checked, point.mean_time
    );
    Ok(point)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::{latin_grid, random_problem, RandomConfig};
    use test_log::test;

    fn point(ratio: f64, mean_time: f64, mean_branches: f64) -> SweepPoint {
        SweepPoint {
            ratio,
            mean_time,
            mean_branches,
            mean_checked: 0.0,
            solutions: 0,
        }
    }

    #[test]
    fn test_sweep_counts_are_reproducible() {
        let config = SweepConfig::default()
            .with_num_ratios(10)
            .with_trials_per_point(2)
            .with_find_all(true);
        let factory = || latin_grid(3).into_network();

        let a = RatioSweep::run(factory, &config).unwrap();
        let b = RatioSweep::run(factory, &config).unwrap();

        assert_eq!(a.points.len(), 10);
        for (p, q) in a.points.iter().zip(&b.points) {
            assert_eq!(p.ratio, q.ratio);
            assert_eq!(p.mean_branches, q.mean_branches);
            assert_eq!(p.mean_checked, q.mean_checked);
            assert_eq!(p.solutions, 12);
        }
        assert_eq!(a.points[0].mean_checked, 0.0);
    }

    #[test]
    fn test_pruning_never_changes_solution_count() {
        let problem = random_problem(&RandomConfig::default().with_size(5).with_seed(11));
        let config = SweepConfig::default().with_num_ratios(8).with_find_all(true);
        let report = RatioSweep::run(|| problem.clone().into_network(), &config).unwrap();

        let expected = report.points[0].solutions;
        assert!(expected > 0);
        assert!(report.points.iter().all(|p| p.solutions == expected));
    }

    #[test]
    fn test_run_sizes_one_report_per_size() {
        let config = SweepConfig::default().with_num_ratios(3).with_find_all(true);
        let reports =
            RatioSweep::run_sizes([2, 3], |n| latin_grid(n).into_network(), &config).unwrap();

        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].0, 2);
        assert_eq!(reports[1].0, 3);
        assert!(reports[0].1.points.iter().all(|p| p.solutions == 2));
        assert!(reports[1].1.points.iter().all(|p| p.solutions == 12));
        assert!(reports.iter().all(|(_, r)| r.points.len() == 3));
    }

    #[test]
    fn test_run_sizes_propagates_config_error() {
        let config = SweepConfig::default().with_num_ratios(0);
        let err = RatioSweep::run_sizes([2], |n| latin_grid(n).into_network(), &config)
            .unwrap_err();
        assert!(matches!(err, CspError::Config(_)));
    }

    #[test]
    fn test_invalid_config() {
        let config = SweepConfig::default().with_num_ratios(0);
        let err = RatioSweep::run(|| latin_grid(2).into_network(), &config).unwrap_err();
        assert!(matches!(err, CspError::Config(_)));
    }

    #[test]
    fn test_factory_error_propagates() {
        let problem = crate::loader::parse("Nodes\nA,1\nConstraints\nA,<,B\n").unwrap();
        let config = SweepConfig::default().with_num_ratios(2);
        let err = RatioSweep::run(|| problem.clone().into_network(), &config).unwrap_err();
        assert!(matches!(err, CspError::InvalidConstraint { .. }));
    }

    #[test]
    fn test_optimal_ratios() {
        let report = SweepReport {
            points: vec![
                point(0.0, 3.0, 40.0),
                point(0.25, 1.0, 30.0),
                point(0.5, 2.0, 10.0),
                point(0.75, 1.0, 10.0),
            ],
        };
        assert_eq!(report.optimal_by_time(), Some(0.25));
        assert_eq!(report.optimal_by_branches(), Some(0.5));
        assert_eq!(SweepReport::default().optimal_by_time(), None);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_matches_sequential_counts() {
        let factory = || latin_grid(3).into_network();
        let base = SweepConfig::default().with_num_ratios(6).with_find_all(true);
        let seq = RatioSweep::run(factory, &base).unwrap();
        let par = RatioSweep::run(factory, &base.with_parallel(true)).unwrap();

        for (p, q) in seq.points.iter().zip(&par.points) {
            assert_eq!(p.ratio, q.ratio);
            assert_eq!(p.mean_branches, q.mean_branches);
            assert_eq!(p.mean_checked, q.mean_checked);
        }
    }
}
