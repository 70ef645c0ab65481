//! Multi-restart nearest-neighbor construction.
//!
//! Each restart builds a solution greedily: starting from the depot, visit
//! the nearest unrouted customer whose demand still fits the current
//! vehicle; open a fresh route when nothing fits. The unrouted set is
//! shuffled once per restart so that equidistant candidates are scanned in
//! a different order, which is the only source of variation between
//! restarts.

use rand::seq::SliceRandom;
use rand::{Rng, RngCore};
use tracing::debug;

use crate::models::{CvrpProblem, Route, Solution};

use super::result::{max_cost, mean, min_cost, std_dev, CostHistory};
use super::{RunResult, SearchStrategy};

/// Nearest-neighbor construction heuristic with independent restarts.
///
/// # Examples
///
/// ```
/// use cvrp_search::models::{CvrpProblem, Location};
/// use cvrp_search::search::GreedySearch;
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let problem = CvrpProblem::new(
///     Location::new(0.0, 0.0),
///     vec![
///         Location::new(1.0, 0.0),
///         Location::new(2.0, 0.0),
///         Location::new(3.0, 0.0),
///     ],
///     vec![10, 10, 10],
///     30,
/// )
/// .expect("matching lists");
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let result = GreedySearch::new().with_restarts(5).run(&problem, &mut rng);
/// assert!(problem.validate(&result.best_solution));
/// // Everything fits one vehicle: 0→1→2→3→0.
/// assert!((result.best_distance - 6.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct GreedySearch {
    restarts: usize,
}

impl GreedySearch {
    /// Creates a greedy search with the default restart count.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of independent restarts.
    pub fn with_restarts(mut self, restarts: usize) -> Self {
        self.restarts = restarts;
        self
    }

    /// Runs all restarts and returns the best construction found.
    ///
    /// A restart that routes no customers (zero-customer problem) reports
    /// the `f64::INFINITY` sentinel as its cost.
    pub fn run<R: Rng + ?Sized>(&self, problem: &CvrpProblem, rng: &mut R) -> RunResult {
        debug!(restarts = self.restarts, "starting greedy search");

        let mut history = CostHistory::new();
        let mut costs: Vec<f64> = Vec::with_capacity(self.restarts);
        let mut best: Option<(Solution, f64)> = None;

        for _ in 0..self.restarts {
            let solution = construct(problem, rng);
            let cost = if solution.is_empty() {
                f64::INFINITY
            } else {
                problem.solution_distance(&solution)
            };

            costs.push(cost);
            history.push(min_cost(&costs), mean(&costs), max_cost(&costs));

            let improved = best.as_ref().map_or(true, |(_, c)| cost < *c);
            if improved {
                best = Some((solution, cost));
            }
        }

        let Some((best_solution, best_distance)) = best else {
            return RunResult::empty(history);
        };

        debug!(best_distance, "greedy search finished");

        RunResult {
            best_solution,
            best_distance,
            average_distance: mean(&costs),
            worst_distance: max_cost(&costs),
            std_dev: std_dev(&costs),
            history,
        }
    }
}

impl Default for GreedySearch {
    fn default() -> Self {
        Self { restarts: 10 }
    }
}

impl SearchStrategy for GreedySearch {
    fn name(&self) -> &'static str {
        "greedy"
    }

    fn run(&self, problem: &CvrpProblem, rng: &mut dyn RngCore) -> RunResult {
        GreedySearch::run(self, problem, rng)
    }
}

/// One nearest-feasible-neighbor construction pass.
fn construct<R: Rng + ?Sized>(problem: &CvrpProblem, rng: &mut R) -> Solution {
    let mut unrouted: Vec<usize> = (1..=problem.num_customers()).collect();
    unrouted.shuffle(rng);

    let mut solution = Solution::new();
    let mut current: Vec<usize> = Vec::new();
    let mut last = 0usize;
    let mut load = 0i32;

    while !unrouted.is_empty() {
        // Nearest unrouted customer that still fits the vehicle; strict `<`
        // keeps the first minimal candidate in scan order, so the per-restart
        // shuffle is what varies tie-breaking.
        let mut nearest: Option<(usize, f64)> = None;
        for (pos, &customer) in unrouted.iter().enumerate() {
            if load + problem.demand(customer) > problem.capacity() {
                continue;
            }
            let d = problem.distance(last, customer);
            if nearest.map_or(true, |(_, best)| d < best) {
                nearest = Some((pos, d));
            }
        }

        match nearest {
            Some((pos, _)) => {
                let customer = unrouted.remove(pos);
                load += problem.demand(customer);
                last = customer;
                current.push(customer);
            }
            None => {
                solution.add_route(Route::from_customers(&current));
                current.clear();
                last = 0;
                load = 0;
            }
        }
    }

    if !current.is_empty() {
        solution.add_route(Route::from_customers(&current));
    }

    solution
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Location;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn line_problem(capacity: i32) -> CvrpProblem {
        CvrpProblem::new(
            Location::new(0.0, 0.0),
            vec![
                Location::new(1.0, 0.0),
                Location::new(2.0, 0.0),
                Location::new(3.0, 0.0),
            ],
            vec![10, 10, 10],
            capacity,
        )
        .expect("matching lists")
    }

    #[test]
    fn test_greedy_visits_nearest_first() {
        let problem = line_problem(100);
        let mut rng = StdRng::seed_from_u64(42);
        let result = GreedySearch::new().with_restarts(1).run(&problem, &mut rng);
        // Nearest-neighbor from the depot walks the line in order.
        assert_eq!(result.best_solution.flatten(), vec![1, 2, 3]);
        assert!((result.best_distance - 6.0).abs() < 1e-10);
    }

    #[test]
    fn test_greedy_splits_on_capacity() {
        let problem = line_problem(20);
        let mut rng = StdRng::seed_from_u64(42);
        let result = GreedySearch::new().with_restarts(4).run(&problem, &mut rng);
        assert!(problem.validate(&result.best_solution));
        assert_eq!(result.best_solution.num_routes(), 2);
    }

    #[test]
    fn test_greedy_history_is_cumulative() {
        let problem = line_problem(20);
        let mut rng = StdRng::seed_from_u64(42);
        let result = GreedySearch::new().with_restarts(6).run(&problem, &mut rng);
        assert_eq!(result.history.len(), 6);
        for window in result.history.best.windows(2) {
            assert!(window[1] <= window[0]);
        }
        for window in result.history.worst.windows(2) {
            assert!(window[1] >= window[0]);
        }
    }

    #[test]
    fn test_greedy_best_not_above_average() {
        let problem = line_problem(20);
        let mut rng = StdRng::seed_from_u64(7);
        let result = GreedySearch::new().with_restarts(8).run(&problem, &mut rng);
        assert!(result.best_distance <= result.average_distance + 1e-10);
        assert!(result.average_distance <= result.worst_distance + 1e-10);
    }

    #[test]
    fn test_greedy_zero_customers_sentinel() {
        let problem = CvrpProblem::new(Location::new(0.0, 0.0), vec![], vec![], 10)
            .expect("empty lists match");
        let mut rng = StdRng::seed_from_u64(42);
        let result = GreedySearch::new().with_restarts(3).run(&problem, &mut rng);
        assert!(result.best_solution.is_empty());
        assert!(result.best_distance.is_infinite());
        assert_eq!(result.std_dev, 0.0);
        assert_eq!(result.history.len(), 3);
    }

    #[test]
    fn test_greedy_zero_restarts() {
        let problem = line_problem(20);
        let mut rng = StdRng::seed_from_u64(42);
        let result = GreedySearch::new().with_restarts(0).run(&problem, &mut rng);
        assert!(result.best_solution.is_empty());
        assert!(result.best_distance.is_infinite());
        assert!(result.history.is_empty());
    }
}
