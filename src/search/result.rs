//! Uniform search result record and aggregate statistics helpers.

use serde::{Deserialize, Serialize};

use crate::models::Solution;

/// Per-iteration cost time series recorded during a search run.
///
/// The `best` and `worst` tracks always hold the running best and worst
/// values. The `average` track holds the running average for the sampling
/// strategies (greedy, random) and the per-generation population average
/// for the genetic algorithm; the trajectory strategies (simulated
/// annealing, tabu) record the post-acceptance current cost there instead.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CostHistory {
    /// Best cost per iteration/generation/restart.
    pub best: Vec<f64>,
    /// Average (or current, for trajectory searches) cost per entry.
    pub average: Vec<f64>,
    /// Worst cost per entry.
    pub worst: Vec<f64>,
}

impl CostHistory {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one entry to all three tracks.
    pub fn push(&mut self, best: f64, average: f64, worst: f64) {
        self.best.push(best);
        self.average.push(average);
        self.worst.push(worst);
    }

    /// Number of recorded entries.
    pub fn len(&self) -> usize {
        self.best.len()
    }

    /// Returns `true` if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.best.is_empty()
    }
}

/// The uniform result record returned by every search strategy.
///
/// Aggregates describe the costs sampled during the run (all restarts or
/// iterations for greedy/random, the final population for the genetic
/// algorithm, the accepted trajectory for simulated annealing and tabu).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunResult {
    /// Best feasible solution found.
    pub best_solution: Solution,
    /// Total distance of the best solution.
    pub best_distance: f64,
    /// Average of the sampled costs.
    pub average_distance: f64,
    /// Worst of the sampled costs.
    pub worst_distance: f64,
    /// Population standard deviation of the sampled costs.
    pub std_dev: f64,
    /// Raw per-iteration statistics time series.
    pub history: CostHistory,
}

impl RunResult {
    /// A degenerate result for runs that sampled nothing: an empty
    /// solution with an infinite-cost sentinel and zeroed aggregates.
    pub(crate) fn empty(history: CostHistory) -> Self {
        Self {
            best_solution: Solution::new(),
            best_distance: f64::INFINITY,
            average_distance: 0.0,
            worst_distance: 0.0,
            std_dev: 0.0,
            history,
        }
    }
}

/// Arithmetic mean; 0.0 for an empty slice.
pub(crate) fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation.
///
/// Defined as 0.0 for fewer than two samples and for non-finite inputs
/// (an empty-problem run reports infinite-cost sentinels whose spread is
/// meaningless).
pub(crate) fn std_dev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let m = mean(values);
    if !m.is_finite() {
        return 0.0;
    }
    let variance = values.iter().map(|v| (v - m) * (v - m)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

/// Minimum of a non-empty cost slice.
pub(crate) fn min_cost(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::INFINITY, f64::min)
}

/// Maximum of a cost slice; 0.0 when empty.
pub(crate) fn max_cost(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}
