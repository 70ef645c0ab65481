//! Genetic algorithm over flattened customer orderings.
//!
//! Individuals are feasible solutions; the genetic operators act on the
//! flattened customer ordering and re-split through the shared route
//! builder, so every offspring is capacity-feasible by construction.
//!
//! # Operators
//!
//! - **Selection**: tournament of `tournament_size` draws with replacement,
//!   lowest total distance wins
//! - **Crossover**: order crossover (OX) on the flattened orderings
//! - **Mutation**: swap of two positions in the flattened ordering
//! - **Elitism**: the best `floor(elitism × population)` individuals carry
//!   over unchanged

use rand::{Rng, RngCore};
use tracing::{debug, trace};

use crate::models::{CvrpProblem, Solution};
use crate::split::split_routes;

use super::result::{max_cost, mean, min_cost, std_dev, CostHistory};
use super::{random_ordering, swap_neighbor, RunResult, SearchStrategy};

/// Generational genetic algorithm.
///
/// # Examples
///
/// ```
/// use cvrp_search::models::{CvrpProblem, Location};
/// use cvrp_search::search::GeneticSearch;
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
/// let search = GeneticSearch::new()
///     .with_population_size(20)
///     .with_generations(30);
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let result = search.run(&problem, &mut rng);
/// assert!(problem.validate(&result.best_solution));
/// assert_eq!(result.history.len(), 30);
/// ```
#[derive(Debug, Clone)]
pub struct GeneticSearch {
    population_size: usize,
    generations: usize,
    mutation_rate: f64,
    crossover_rate: f64,
    tournament_size: usize,
    elitism: f64,
}

impl GeneticSearch {
    /// Creates a genetic search with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, population_size: usize) -> Self {
        self.population_size = population_size;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, generations: usize) -> Self {
        self.generations = generations;
        self
    }

    /// Sets the per-offspring mutation probability.
    pub fn with_mutation_rate(mut self, mutation_rate: f64) -> Self {
        self.mutation_rate = mutation_rate;
        self
    }

    /// Sets the per-offspring crossover probability.
    pub fn with_crossover_rate(mut self, crossover_rate: f64) -> Self {
        self.crossover_rate = crossover_rate;
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, tournament_size: usize) -> Self {
        self.tournament_size = tournament_size;
        self
    }

    /// Sets the elite fraction carried over unchanged each generation.
    pub fn with_elitism(mut self, elitism: f64) -> Self {
        self.elitism = elitism;
        self
    }

    /// Evolves the population for the configured number of generations and
    /// returns the best individual of the final population.
    ///
    /// # Panics
    ///
    /// Panics if `population_size` or `tournament_size` is zero; both are
    /// configuration preconditions, not runtime conditions.
    pub fn run<R: Rng + ?Sized>(&self, problem: &CvrpProblem, rng: &mut R) -> RunResult {
        assert!(self.population_size >= 1, "population size must be at least 1");
        assert!(self.tournament_size >= 1, "tournament size must be at least 1");

        debug!(
            population = self.population_size,
            generations = self.generations,
            "starting genetic search"
        );

        let elite_count = (self.elitism * self.population_size as f64).floor() as usize;
        let mut history = CostHistory::new();

        let mut population = self.initial_population(problem, rng);

        for generation in 0..self.generations {
            let mut scored = score(population, problem);
            let costs: Vec<f64> = scored.iter().map(|(_, cost)| *cost).collect();
            history.push(min_cost(&costs), mean(&costs), max_cost(&costs));
            trace!(generation, best = min_cost(&costs), "generation evaluated");

            scored.sort_by(|a, b| a.1.total_cmp(&b.1));

            let mut next: Vec<Solution> = scored
                .iter()
                .take(elite_count)
                .map(|(solution, _)| solution.clone())
                .collect();

            while next.len() < self.population_size {
                let parent1 = self.tournament(&scored, rng);
                let parent2 = self.tournament(&scored, rng);

                let mut child = if rng.random::<f64>() < self.crossover_rate {
                    let ordering =
                        ordered_crossover(&parent1.flatten(), &parent2.flatten(), rng);
                    split_routes(&ordering, problem)
                } else {
                    parent1.clone()
                };

                if rng.random::<f64>() < self.mutation_rate {
                    child = swap_neighbor(&child, problem, rng);
                }

                // Split output is capacity-feasible by construction, so
                // the gate only re-checks coverage.
                if problem.validate(&child) {
                    next.push(child);
                }
            }

            population = next;
        }

        let scored = score(population, problem);
        let costs: Vec<f64> = scored.iter().map(|(_, cost)| *cost).collect();

        let (best_solution, best_distance) = scored
            .into_iter()
            .reduce(|best, candidate| if candidate.1 < best.1 { candidate } else { best })
            .expect("population is non-empty");

        debug!(best_distance, "genetic search finished");

        RunResult {
            best_solution,
            best_distance,
            average_distance: mean(&costs),
            worst_distance: max_cost(&costs),
            std_dev: std_dev(&costs),
            history,
        }
    }

    fn initial_population<R: Rng + ?Sized>(
        &self,
        problem: &CvrpProblem,
        rng: &mut R,
    ) -> Vec<Solution> {
        let mut population = Vec::with_capacity(self.population_size);
        while population.len() < self.population_size {
            let candidate = split_routes(&random_ordering(problem, rng), problem);
            if problem.validate(&candidate) {
                population.push(candidate);
            }
        }
        population
    }

    /// Tournament selection: `tournament_size` uniform draws with
    /// replacement, lowest cost wins.
    fn tournament<'a, R: Rng + ?Sized>(
        &self,
        scored: &'a [(Solution, f64)],
        rng: &mut R,
    ) -> &'a Solution {
        let mut winner = &scored[rng.random_range(0..scored.len())];
        for _ in 1..self.tournament_size {
            let challenger = &scored[rng.random_range(0..scored.len())];
            if challenger.1 < winner.1 {
                winner = challenger;
            }
        }
        &winner.0
    }
}

impl Default for GeneticSearch {
    fn default() -> Self {
        Self {
            population_size: 100,
            generations: 500,
            mutation_rate: 0.1,
            crossover_rate: 0.8,
            tournament_size: 5,
            elitism: 0.1,
        }
    }
}

impl SearchStrategy for GeneticSearch {
    fn name(&self) -> &'static str {
        "genetic"
    }

    fn run(&self, problem: &CvrpProblem, rng: &mut dyn RngCore) -> RunResult {
        GeneticSearch::run(self, problem, rng)
    }
}

fn score(population: Vec<Solution>, problem: &CvrpProblem) -> Vec<(Solution, f64)> {
    population
        .into_iter()
        .map(|solution| {
            let cost = problem.solution_distance(&solution);
            (solution, cost)
        })
        .collect()
}

/// Order crossover (OX): the child copies `parent1`'s window `[start, end)`
/// verbatim, then fills the remaining positions with `parent2`'s customers
/// in `parent2`'s order, the fill pointer skipping over the window.
///
/// Parents with fewer than two customers are returned as a copy of
/// `parent1`.
fn ordered_crossover<R: Rng + ?Sized>(
    parent1: &[usize],
    parent2: &[usize],
    rng: &mut R,
) -> Vec<usize> {
    let size = parent1.len();
    if size < 2 {
        return parent1.to_vec();
    }

    let cuts = rand::seq::index::sample(rng, size, 2);
    let (start, end) = {
        let (a, b) = (cuts.index(0), cuts.index(1));
        if a < b {
            (a, b)
        } else {
            (b, a)
        }
    };

    let mut child = vec![0usize; size];
    child[start..end].copy_from_slice(&parent1[start..end]);

    let max_id = parent1.iter().copied().max().unwrap_or(0);
    let mut in_window = vec![false; max_id + 1];
    for &customer in &parent1[start..end] {
        in_window[customer] = true;
    }

    let mut fill = 0usize;
    for &customer in parent2 {
        if fill == start {
            fill = end;
        }
        if fill >= size {
            break;
        }
        if !in_window[customer] {
            child[fill] = customer;
            fill += 1;
        }
    }

    child
}
