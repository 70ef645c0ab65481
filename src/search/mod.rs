//! Search strategies for the capacitated vehicle routing problem.
//!
//! Five independent strategies share the problem model, the
//! [`split_routes`](crate::split::split_routes) route builder, and the
//! [`RunResult`] contract:
//!
//! - [`GreedySearch`] — multi-restart nearest-neighbor construction
//! - [`RandomSearch`] — repeated uniform-random sampling
//! - [`GeneticSearch`] — tournament selection, ordered crossover, elitism
//! - [`SimulatedAnnealing`] — Metropolis acceptance with geometric cooling
//! - [`TabuSearch`] — best-non-tabu neighborhood moves with FIFO memory
//!
//! Every run draws randomness from an explicit caller-supplied generator,
//! so runs are reproducible under a seeded RNG and safe to execute in
//! parallel over a shared problem reference.

mod annealing;
mod genetic;
mod greedy;
mod random;
mod result;
mod tabu;

pub use annealing::SimulatedAnnealing;
pub use genetic::GeneticSearch;
pub use greedy::GreedySearch;
pub use random::RandomSearch;
pub use result::{CostHistory, RunResult};
pub use tabu::TabuSearch;

use rand::seq::SliceRandom;
use rand::{Rng, RngCore};

use crate::models::{CvrpProblem, Solution};
use crate::split::split_routes;

/// Common interface over the five search strategies.
///
/// Object-safe so callers can run a heterogeneous collection of
/// strategies against one problem and report their results uniformly.
///
/// # Examples
///
/// ```
/// use cvrp_search::models::{CvrpProblem, Location};
/// use cvrp_search::search::{GreedySearch, RandomSearch, SearchStrategy};
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let problem = CvrpProblem::new(
///     Location::new(0.0, 0.0),
///     vec![Location::new(1.0, 0.0), Location::new(2.0, 0.0)],
///     vec![5, 5],
///     10,
/// )
/// .expect("matching lists");
///
/// let strategies: Vec<Box<dyn SearchStrategy>> = vec![
///     Box::new(GreedySearch::new().with_restarts(3)),
///     Box::new(RandomSearch::new().with_iterations(10)),
/// ];
///
/// let mut rng = StdRng::seed_from_u64(42);
/// for strategy in &strategies {
///     let result = strategy.run(&problem, &mut rng);
///     assert!(problem.validate(&result.best_solution));
/// }
/// ```
pub trait SearchStrategy {
    /// Short identifier used by reporting collaborators.
    fn name(&self) -> &'static str;

    /// Executes the search to its configured iteration count and returns
    /// the uniform result record.
    fn run(&self, problem: &CvrpProblem, rng: &mut dyn RngCore) -> RunResult;
}

/// A uniformly random customer ordering for the given problem.
pub(crate) fn random_ordering<R: Rng + ?Sized>(
    problem: &CvrpProblem,
    rng: &mut R,
) -> Vec<usize> {
    let mut ordering: Vec<usize> = (1..=problem.num_customers()).collect();
    ordering.shuffle(rng);
    ordering
}

/// The single-swap neighborhood operator shared by simulated annealing and
/// tabu search: swap two positions in the flattened customer ordering and
/// re-split. A solution with fewer than two customers is its own neighbor.
pub(crate) fn swap_neighbor<R: Rng + ?Sized>(
    current: &Solution,
    problem: &CvrpProblem,
    rng: &mut R,
) -> Solution {
    let mut ordering = current.flatten();
    if ordering.len() < 2 {
        return current.clone();
    }
    let picks = rand::seq::index::sample(rng, ordering.len(), 2);
    ordering.swap(picks.index(0), picks.index(1));
    split_routes(&ordering, problem)
}
