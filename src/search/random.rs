//! Repeated uniform-random sampling.
//!
//! The simplest baseline: draw a uniformly random customer permutation,
//! split it into routes, and keep the cheapest solution seen. Useful as a
//! floor when judging the other strategies.

use rand::{Rng, RngCore};
use tracing::debug;

use crate::models::{CvrpProblem, Solution};
use crate::split::split_routes;

use super::result::{max_cost, mean, min_cost, std_dev, CostHistory};
use super::{random_ordering, RunResult, SearchStrategy};

/// Uniform-random permutation sampling.
///
/// # Examples
///
/// ```
/// use cvrp_search::models::{CvrpProblem, Location};
/// use cvrp_search::search::RandomSearch;
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let problem = CvrpProblem::new(
///     Location::new(0.0, 0.0),
///     vec![Location::new(1.0, 0.0), Location::new(0.0, 1.0)],
///     vec![5, 5],
///     10,
/// )
/// .expect("matching lists");
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let result = RandomSearch::new().with_iterations(20).run(&problem, &mut rng);
/// assert!(problem.validate(&result.best_solution));
/// assert_eq!(result.history.len(), 20);
/// ```
#[derive(Debug, Clone)]
pub struct RandomSearch {
    iterations: usize,
}

impl RandomSearch {
    /// Creates a random search with the default iteration count.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of sampling iterations.
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Samples the configured number of permutations and returns the best.
    ///
    /// The running best/average/worst series grows by one entry every
    /// iteration regardless of improvement.
    pub fn run<R: Rng + ?Sized>(&self, problem: &CvrpProblem, rng: &mut R) -> RunResult {
        debug!(iterations = self.iterations, "starting random search");

        let mut history = CostHistory::new();
        let mut costs: Vec<f64> = Vec::with_capacity(self.iterations);
        let mut best: Option<(Solution, f64)> = None;

        for _ in 0..self.iterations {
            let solution = split_routes(&random_ordering(problem, rng), problem);
            let cost = problem.solution_distance(&solution);

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

        debug!(best_distance, "random search finished");

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

impl Default for RandomSearch {
    fn default() -> Self {
        Self { iterations: 1000 }
    }
}

impl SearchStrategy for RandomSearch {
    fn name(&self) -> &'static str {
        "random"
    }

    fn run(&self, problem: &CvrpProblem, rng: &mut dyn RngCore) -> RunResult {
        RandomSearch::run(self, problem, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Location;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn square_problem() -> CvrpProblem {
        CvrpProblem::new(
            Location::new(0.0, 0.0),
            vec![
                Location::new(1.0, 0.0),
                Location::new(1.0, 1.0),
                Location::new(0.0, 1.0),
                Location::new(2.0, 2.0),
            ],
            vec![3, 3, 3, 3],
            6,
        )
        .expect("matching lists")
    }

    #[test]
    fn test_random_best_is_global_minimum() {
        let problem = square_problem();
        let mut rng = StdRng::seed_from_u64(42);
        let result = RandomSearch::new().with_iterations(50).run(&problem, &mut rng);
        assert!(problem.validate(&result.best_solution));
        assert!((result.best_distance - min_cost(&result.history.best)).abs() < 1e-10);
        assert!(result.best_distance <= result.average_distance + 1e-10);
    }

    #[test]
    fn test_random_history_grows_every_iteration() {
        let problem = square_problem();
        let mut rng = StdRng::seed_from_u64(42);
        let result = RandomSearch::new().with_iterations(25).run(&problem, &mut rng);
        assert_eq!(result.history.len(), 25);
        for window in result.history.best.windows(2) {
            assert!(window[1] <= window[0]);
        }
    }

    #[test]
    fn test_random_seeded_reproducibility() {
        let problem = square_problem();
        let search = RandomSearch::new().with_iterations(30);

        let mut rng_a = StdRng::seed_from_u64(7);
        let mut rng_b = StdRng::seed_from_u64(7);
        let a = search.run(&problem, &mut rng_a);
        let b = search.run(&problem, &mut rng_b);

        assert_eq!(a.best_solution, b.best_solution);
        assert_eq!(a.history, b.history);
    }

    #[test]
    fn test_random_zero_customers() {
        let problem = CvrpProblem::new(Location::new(0.0, 0.0), vec![], vec![], 10)
            .expect("empty lists match");
        let mut rng = StdRng::seed_from_u64(42);
        let result = RandomSearch::new().with_iterations(5).run(&problem, &mut rng);
        assert!(result.best_solution.is_empty());
        assert_eq!(result.best_distance, 0.0);
        assert_eq!(result.worst_distance, 0.0);
    }

    #[test]
    fn test_random_zero_iterations() {
        let problem = square_problem();
        let mut rng = StdRng::seed_from_u64(42);
        let result = RandomSearch::new().with_iterations(0).run(&problem, &mut rng);
        assert!(result.best_solution.is_empty());
        assert!(result.best_distance.is_infinite());
    }
}
