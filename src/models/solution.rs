//! Solution type.

use serde::{Deserialize, Serialize};

use super::Route;

/// A complete candidate solution: an ordered collection of routes.
///
/// A feasible solution covers every customer index exactly once across the
/// route interiors, with every route depot-anchored and within capacity;
/// feasibility is checked by
/// [`CvrpProblem::validate`](crate::models::CvrpProblem::validate).
///
/// # Examples
///
/// ```
/// use cvrp_search::models::{Route, Solution};
///
/// let mut sol = Solution::new();
/// sol.add_route(Route::from_customers(&[1, 2]));
/// sol.add_route(Route::from_customers(&[3]));
/// assert_eq!(sol.num_routes(), 2);
/// assert_eq!(sol.num_served(), 3);
/// assert_eq!(sol.flatten(), vec![1, 2, 3]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    routes: Vec<Route>,
}

impl Solution {
    /// Creates an empty solution.
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    /// Appends a route to this solution.
    pub fn add_route(&mut self, route: Route) {
        self.routes.push(route);
    }

    /// The routes in this solution.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Number of routes (vehicles used).
    pub fn num_routes(&self) -> usize {
        self.routes.len()
    }

    /// Total number of customers served across all routes.
    pub fn num_served(&self) -> usize {
        self.routes.iter().map(|r| r.len()).sum()
    }

    /// Returns `true` if this solution contains no routes.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// The interior customer ordering across all routes, depot markers
    /// dropped.
    ///
    /// This is the shared flat representation consumed by the swap
    /// neighborhood operator and by ordered crossover.
    pub fn flatten(&self) -> Vec<usize> {
        self.routes
            .iter()
            .flat_map(|r| r.customers().iter().copied())
            .collect()
    }
}
