//! Simulated annealing.
//!
//! Single-trajectory search: a random neighbor is drawn each iteration by
//! the shared swap operator, improving moves are always accepted, and
//! worsening moves are accepted with the Metropolis probability
//! `exp(-delta / T)`. The temperature decays geometrically every iteration
//! regardless of acceptance.

use rand::{Rng, RngCore};
use tracing::debug;

use crate::models::CvrpProblem;
use crate::split::split_routes;

use super::result::{max_cost, mean, std_dev, CostHistory};
use super::{random_ordering, swap_neighbor, RunResult, SearchStrategy};

/// Metropolis-acceptance trajectory search with geometric cooling.
///
/// # Examples
///
/// ```
/// use cvrp_search::models::{CvrpProblem, Location};
/// use cvrp_search::search::SimulatedAnnealing;
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let problem = CvrpProblem::new(
///     Location::new(0.0, 0.0),
///     vec![
///         Location::new(1.0, 0.0),
///         Location::new(2.0, 0.0),
///         Location::new(0.0, 2.0),
///     ],
///     vec![5, 5, 5],
///     10,
/// )
/// .expect("matching lists");
///
/// let search = SimulatedAnnealing::new()
///     .with_initial_temp(100.0)
///     .with_iterations(200);
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let result = search.run(&problem, &mut rng);
/// assert!(problem.validate(&result.best_solution));
/// assert_eq!(result.history.len(), 200);
/// ```
#[derive(Debug, Clone)]
pub struct SimulatedAnnealing {
    initial_temp: f64,
    cooling_rate: f64,
    iterations: usize,
}

impl SimulatedAnnealing {
    /// Creates a simulated annealing search with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the initial temperature.
    pub fn with_initial_temp(mut self, initial_temp: f64) -> Self {
        self.initial_temp = initial_temp;
        self
    }

    /// Sets the geometric cooling rate, expected in `(0, 1)`.
    pub fn with_cooling_rate(mut self, cooling_rate: f64) -> Self {
        self.cooling_rate = cooling_rate;
        self
    }

    /// Sets the iteration count.
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Runs the trajectory for the configured number of iterations.
    ///
    /// The history's `average` track records the post-acceptance current
    /// cost; the `worst` track records the maximum over the best-cost
    /// history and the latest current cost, a conservative running bound
    /// rather than the worst cost ever sampled.
    pub fn run<R: Rng + ?Sized>(&self, problem: &CvrpProblem, rng: &mut R) -> RunResult {
        debug!(
            initial_temp = self.initial_temp,
            cooling_rate = self.cooling_rate,
            iterations = self.iterations,
            "starting simulated annealing"
        );

        let mut current = split_routes(&random_ordering(problem, rng), problem);
        let mut current_cost = problem.solution_distance(&current);
        let mut best = current.clone();
        let mut best_cost = current_cost;
        let mut temp = self.initial_temp;

        let mut history = CostHistory::new();

        for _ in 0..self.iterations {
            let neighbor = swap_neighbor(&current, problem, rng);
            let neighbor_cost = problem.solution_distance(&neighbor);
            let delta = neighbor_cost - current_cost;

            if delta < 0.0 || rng.random::<f64>() < (-delta / temp).exp() {
                current = neighbor;
                current_cost = neighbor_cost;

                if current_cost < best_cost {
                    best = current.clone();
                    best_cost = current_cost;
                }
            }

            temp *= self.cooling_rate;

            history.best.push(best_cost);
            history.average.push(current_cost);
            let bound = history.best.iter().copied().fold(current_cost, f64::max);
            history.worst.push(bound);
        }

        debug!(best_distance = best_cost, "simulated annealing finished");

        RunResult {
            best_solution: best,
            best_distance: best_cost,
            average_distance: mean(&history.average),
            worst_distance: max_cost(&history.worst),
            std_dev: std_dev(&history.average),
            history,
        }
    }
}

impl Default for SimulatedAnnealing {
    fn default() -> Self {
        Self {
            initial_temp: 1000.0,
            cooling_rate: 0.99,
            iterations: 1000,
        }
    }
}

impl SearchStrategy for SimulatedAnnealing {
    fn name(&self) -> &'static str {
        "simulated-annealing"
    }

    fn run(&self, problem: &CvrpProblem, rng: &mut dyn RngCore) -> RunResult {
        SimulatedAnnealing::run(self, problem, rng)
    }
}
