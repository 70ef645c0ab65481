//! Tabu search.
//!
//! Neighborhood search with short-term memory: each iteration evaluates a
//! batch of swap neighbors and moves to the cheapest one whose signature is
//! not tabu, even when that move worsens the current cost. Visited
//! signatures enter a FIFO list of bounded size, blocking immediate
//! revisits and forcing the trajectory away from recent solutions.

use std::collections::VecDeque;
use std::hash::{Hash, Hasher};

use rand::{Rng, RngCore};
use rustc_hash::{FxHashSet, FxHasher};
use tracing::debug;

use crate::models::{CvrpProblem, Solution};
use crate::split::split_routes;

use super::result::{max_cost, mean, std_dev, CostHistory};
use super::{random_ordering, swap_neighbor, RunResult, SearchStrategy};

/// Best-non-tabu neighborhood search with FIFO signature memory.
///
/// # Examples
///
/// ```
/// use cvrp_search::models::{CvrpProblem, Location};
/// use cvrp_search::search::TabuSearch;
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
/// let search = TabuSearch::new().with_iterations(100).with_neighborhood_size(8);
/// let mut rng = StdRng::seed_from_u64(42);
/// let result = search.run(&problem, &mut rng);
/// assert!(problem.validate(&result.best_solution));
/// ```
#[derive(Debug, Clone)]
pub struct TabuSearch {
    iterations: usize,
    tabu_size: usize,
    neighborhood_size: usize,
}

impl TabuSearch {
    /// Creates a tabu search with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the iteration count.
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Sets the maximum tabu-list size. Size 0 disables the memory
    /// entirely, reducing the search to hill climbing with revisits.
    pub fn with_tabu_size(mut self, tabu_size: usize) -> Self {
        self.tabu_size = tabu_size;
        self
    }

    /// Sets the number of neighbors sampled per iteration.
    pub fn with_neighborhood_size(mut self, neighborhood_size: usize) -> Self {
        self.neighborhood_size = neighborhood_size;
        self
    }

    /// Runs the search for the configured number of iterations.
    ///
    /// When every sampled neighbor is tabu the current solution is left
    /// unchanged for that iteration; that is a valid steady state, not an
    /// error. Statistics follow the same best/current/worst convention as
    /// simulated annealing.
    pub fn run<R: Rng + ?Sized>(&self, problem: &CvrpProblem, rng: &mut R) -> RunResult {
        debug!(
            iterations = self.iterations,
            tabu_size = self.tabu_size,
            neighborhood_size = self.neighborhood_size,
            "starting tabu search"
        );

        let mut current = split_routes(&random_ordering(problem, rng), problem);
        let mut current_cost = problem.solution_distance(&current);
        let mut best = current.clone();
        let mut best_cost = current_cost;

        let mut tabu: VecDeque<u64> = VecDeque::with_capacity(self.tabu_size + 1);
        let mut tabu_set: FxHashSet<u64> = FxHashSet::default();

        let mut history = CostHistory::new();

        for _ in 0..self.iterations {
            let mut neighbors = self.neighborhood(&current, problem, rng);

            let mut candidate: Option<(usize, f64)> = None;
            for (index, neighbor) in neighbors.iter().enumerate() {
                let cost = problem.solution_distance(neighbor);
                let cheaper = candidate.map_or(true, |(_, c)| cost < c);
                if cheaper && !tabu_set.contains(&signature(neighbor)) {
                    candidate = Some((index, cost));
                }
            }

            if let Some((index, cost)) = candidate {
                let chosen = neighbors.swap_remove(index);

                if cost < best_cost {
                    best = chosen.clone();
                    best_cost = cost;
                }

                let sig = signature(&chosen);
                tabu.push_back(sig);
                tabu_set.insert(sig);
                if tabu.len() > self.tabu_size {
                    if let Some(evicted) = tabu.pop_front() {
                        tabu_set.remove(&evicted);
                    }
                }

                current = chosen;
                current_cost = cost;
            }

            history.best.push(best_cost);
            history.average.push(current_cost);
            let bound = history.best.iter().copied().fold(current_cost, f64::max);
            history.worst.push(bound);
        }

        debug!(best_distance = best_cost, "tabu search finished");

        RunResult {
            best_solution: best,
            best_distance: best_cost,
            average_distance: mean(&history.average),
            worst_distance: max_cost(&history.worst),
            std_dev: std_dev(&history.average),
            history,
        }
    }

    /// Samples the swap neighborhood of the current solution. Falls back to
    /// the solution itself when no swap is possible (or the neighborhood
    /// size is zero), so an iteration always has at least one candidate.
    fn neighborhood<R: Rng + ?Sized>(
        &self,
        current: &Solution,
        problem: &CvrpProblem,
        rng: &mut R,
    ) -> Vec<Solution> {
        let mut neighbors = Vec::with_capacity(self.neighborhood_size.max(1));
        if current.num_served() >= 2 {
            for _ in 0..self.neighborhood_size {
                neighbors.push(swap_neighbor(current, problem, rng));
            }
        }
        if neighbors.is_empty() {
            neighbors.push(current.clone());
        }
        neighbors
    }
}

impl Default for TabuSearch {
    fn default() -> Self {
        Self {
            iterations: 500,
            tabu_size: 50,
            neighborhood_size: 20,
        }
    }
}

impl SearchStrategy for TabuSearch {
    fn name(&self) -> &'static str {
        "tabu"
    }

    fn run(&self, problem: &CvrpProblem, rng: &mut dyn RngCore) -> RunResult {
        TabuSearch::run(self, problem, rng)
    }
}

/// Canonical structural signature of a solution's route lists.
///
/// Two solutions hash equal iff their route order and within-route stop
/// order match.
fn signature(solution: &Solution) -> u64 {
    let mut hasher = FxHasher::default();
    solution.num_routes().hash(&mut hasher);
    for route in solution.routes() {
        route.stops().hash(&mut hasher);
    }
    hasher.finish()
}
