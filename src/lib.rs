//! # cvrp-search
//!
//! Metaheuristics for the Capacitated Vehicle Routing Problem: given a
//! depot, customers with demands, and a per-vehicle capacity, find a
//! low-distance set of depot-anchored routes covering every customer
//! exactly once.
//!
//! ## Modules
//!
//! - [`models`] — Problem instance, locations, routes, solutions, and the
//!   feasibility contract
//! - [`distance`] — Dense symmetric distance matrix
//! - [`split`] — Shared capacity-aware splitting of customer orderings
//!   into routes
//! - [`search`] — The five search strategies (greedy, random, genetic,
//!   simulated annealing, tabu) and the uniform result record
//! - [`io`] — Parser for the standard VRP problem-file format
//! - [`error`] — Crate error type
//!
//! ## Example
//!
//! ```
//! use cvrp_search::models::{CvrpProblem, Location};
//! use cvrp_search::search::SimulatedAnnealing;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let problem = CvrpProblem::new(
//!     Location::new(0.0, 0.0),
//!     vec![
//!         Location::new(2.0, 0.0),
//!         Location::new(2.0, 2.0),
//!         Location::new(0.0, 2.0),
//!     ],
//!     vec![4, 4, 4],
//!     8,
//! )
//! .expect("matching lists");
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let result = SimulatedAnnealing::new()
//!     .with_iterations(500)
//!     .run(&problem, &mut rng);
//!
//! assert!(problem.validate(&result.best_solution));
//! ```

pub mod distance;
pub mod error;
pub mod io;
pub mod models;
pub mod search;
pub mod split;
