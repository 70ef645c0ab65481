//! Capacitated vehicle routing problem instance.

use crate::distance::DistanceMatrix;
use crate::error::DataError;

use super::{Location, Route, Solution};

/// An immutable CVRP instance: locations, demands, vehicle capacity, and
/// the precomputed distance matrix.
///
/// Location 0 is the depot (demand 0); locations `1..=N` are customers.
/// The instance is never mutated after construction and is `Send + Sync`,
/// so one instance can be shared by reference across any number of
/// concurrent search runs.
///
/// # Examples
///
/// ```
/// use cvrp_search::models::{CvrpProblem, Location, Route};
///
/// let problem = CvrpProblem::new(
///     Location::new(0.0, 0.0),
///     vec![Location::new(3.0, 4.0), Location::new(0.0, 5.0)],
///     vec![10, 20],
///     30,
/// )
/// .expect("matching lists");
///
/// assert_eq!(problem.num_customers(), 2);
/// assert_eq!(problem.demand(1), 10);
///
/// let route = Route::from_customers(&[1, 2]);
/// // 0→1 (5) + 1→2 (sqrt(10)) + 2→0 (5)
/// assert!((problem.route_distance(&route) - (10.0 + 10f64.sqrt())).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct CvrpProblem {
    locations: Vec<Location>,
    demands: Vec<i32>,
    capacity: i32,
    distances: DistanceMatrix,
}

impl CvrpProblem {
    /// Builds a problem instance from a depot, customer locations, customer
    /// demands, and a per-vehicle capacity.
    ///
    /// The depot is prepended as location 0 with demand 0 and the full
    /// distance matrix is computed up front (O(n²) time and space).
    ///
    /// # Errors
    ///
    /// Returns [`DataError::DemandMismatch`] when the demand list length
    /// differs from the customer list length. A zero-customer instance is
    /// valid and yields empty solutions from every search strategy.
    pub fn new(
        depot: Location,
        customers: Vec<Location>,
        demands: Vec<i32>,
        capacity: i32,
    ) -> Result<Self, DataError> {
        if customers.len() != demands.len() {
            return Err(DataError::DemandMismatch {
                customers: customers.len(),
                demands: demands.len(),
            });
        }

        let mut locations = Vec::with_capacity(customers.len() + 1);
        locations.push(depot);
        locations.extend(customers);

        let mut all_demands = Vec::with_capacity(demands.len() + 1);
        all_demands.push(0);
        all_demands.extend(demands);

        let distances = DistanceMatrix::from_points(&locations);

        Ok(Self {
            locations,
            demands: all_demands,
            capacity,
            distances,
        })
    }

    /// All locations, depot first.
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// The depot location.
    pub fn depot(&self) -> Location {
        self.locations[0]
    }

    /// Number of customers (excluding the depot).
    pub fn num_customers(&self) -> usize {
        self.locations.len() - 1
    }

    /// Vehicle capacity.
    pub fn capacity(&self) -> i32 {
        self.capacity
    }

    /// Demand at the given location index (0 for the depot).
    ///
    /// # Panics
    ///
    /// Panics if the index is out of range.
    pub fn demand(&self, index: usize) -> i32 {
        self.demands[index]
    }

    /// Distance between two location indices.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    pub fn distance(&self, from: usize, to: usize) -> f64 {
        self.distances.get(from, to)
    }

    /// The precomputed distance matrix.
    pub fn distances(&self) -> &DistanceMatrix {
        &self.distances
    }

    /// Sums the consecutive edge lengths along a route.
    ///
    /// # Panics
    ///
    /// Panics if any stop index is out of range; generating an in-range
    /// route is the caller's responsibility.
    pub fn route_distance(&self, route: &Route) -> f64 {
        route
            .stops()
            .windows(2)
            .map(|edge| self.distances.get(edge[0], edge[1]))
            .sum()
    }

    /// Total demand carried on a route.
    ///
    /// # Panics
    ///
    /// Panics if any stop index is out of range.
    pub fn route_demand(&self, route: &Route) -> i32 {
        route.stops().iter().map(|&stop| self.demands[stop]).sum()
    }

    /// Total distance of a solution across all its routes.
    pub fn solution_distance(&self, solution: &Solution) -> f64 {
        solution
            .routes()
            .iter()
            .map(|route| self.route_distance(route))
            .sum()
    }

    /// Checks whether a candidate solution is feasible.
    ///
    /// Returns `true` iff every customer index appears in the interior of
    /// exactly one route, no index is out of range or repeated, every
    /// route's total demand is within capacity, and every route starts and
    /// ends at the depot. Never panics: an out-of-range index makes the
    /// candidate invalid rather than aborting.
    pub fn validate(&self, solution: &Solution) -> bool {
        let n = self.locations.len();
        let mut seen = vec![false; n];
        let mut served = 0usize;

        for route in solution.routes() {
            let stops = route.stops();
            if stops.first() != Some(&0) || stops.last() != Some(&0) {
                return false;
            }

            let mut load = 0i32;
            for &stop in route.customers() {
                if stop == 0 || stop >= n {
                    return false;
                }
                if seen[stop] {
                    return false;
                }
                seen[stop] = true;
                served += 1;
                load += self.demands[stop];
            }

            if load > self.capacity {
                return false;
            }
        }

        served == self.num_customers()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_problem() -> CvrpProblem {
        CvrpProblem::new(
            Location::new(0.0, 0.0),
            vec![
                Location::new(1.0, 0.0),
                Location::new(2.0, 0.0),
                Location::new(3.0, 0.0),
            ],
            vec![10, 10, 10],
            20,
        )
        .expect("matching lists")
    }

    #[test]
    fn test_problem_shared_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CvrpProblem>();
    }

    #[test]
    fn test_new_builds_depot_first() {
        let p = line_problem();
        assert_eq!(p.num_customers(), 3);
        assert_eq!(p.demand(0), 0);
        assert_eq!(p.demand(1), 10);
        assert_eq!(p.depot(), Location::new(0.0, 0.0));
        assert!(p.distances().is_symmetric(1e-10));
    }

    #[test]
    fn test_new_demand_mismatch() {
        let result = CvrpProblem::new(
            Location::new(0.0, 0.0),
            vec![Location::new(1.0, 0.0)],
            vec![10, 20],
            30,
        );
        assert!(matches!(
            result,
            Err(DataError::DemandMismatch {
                customers: 1,
                demands: 2,
            })
        ));
    }

    #[test]
    fn test_new_zero_customers() {
        let p = CvrpProblem::new(Location::new(0.0, 0.0), vec![], vec![], 100)
            .expect("empty lists match");
        assert_eq!(p.num_customers(), 0);
        assert!(p.validate(&Solution::new()));
    }

    #[test]
    fn test_route_distance() {
        let p = line_problem();
        let route = Route::from_customers(&[1, 2, 3]);
        // 0→1→2→3→0 = 1 + 1 + 1 + 3
        assert!((p.route_distance(&route) - 6.0).abs() < 1e-10);
    }

    #[test]
    fn test_route_distance_reversal_symmetric() {
        let p = line_problem();
        let forward = Route::from_customers(&[1, 3, 2]);
        let backward = Route::from_customers(&[2, 3, 1]);
        assert!((p.route_distance(&forward) - p.route_distance(&backward)).abs() < 1e-10);
    }

    #[test]
    fn test_route_demand() {
        let p = line_problem();
        assert_eq!(p.route_demand(&Route::from_customers(&[1, 3])), 20);
        assert_eq!(p.route_demand(&Route::from_customers(&[])), 0);
    }

    #[test]
    fn test_solution_distance() {
        let p = line_problem();
        let mut sol = Solution::new();
        sol.add_route(Route::from_customers(&[1, 2]));
        sol.add_route(Route::from_customers(&[3]));
        // (1 + 1 + 2) + (3 + 3)
        assert!((p.solution_distance(&sol) - 10.0).abs() < 1e-10);
    }

    #[test]
    fn test_validate_feasible() {
        let p = line_problem();
        let mut sol = Solution::new();
        sol.add_route(Route::from_customers(&[1, 2]));
        sol.add_route(Route::from_customers(&[3]));
        assert!(p.validate(&sol));
    }

    #[test]
    fn test_validate_missing_customer() {
        let p = line_problem();
        let mut sol = Solution::new();
        sol.add_route(Route::from_customers(&[1, 2]));
        assert!(!p.validate(&sol));
    }

    #[test]
    fn test_validate_duplicate_customer() {
        let p = line_problem();
        let mut sol = Solution::new();
        sol.add_route(Route::from_customers(&[1, 2]));
        sol.add_route(Route::from_customers(&[2, 3]));
        assert!(!p.validate(&sol));
    }

    #[test]
    fn test_validate_out_of_range() {
        let p = line_problem();
        let mut sol = Solution::new();
        sol.add_route(Route::from_customers(&[1, 2, 7]));
        assert!(!p.validate(&sol));
    }

    #[test]
    fn test_validate_over_capacity() {
        let p = line_problem();
        let mut sol = Solution::new();
        // 30 > 20
        sol.add_route(Route::from_customers(&[1, 2, 3]));
        assert!(!p.validate(&sol));
    }

    #[test]
    fn test_validate_not_depot_anchored() {
        let p = line_problem();
        let mut sol = Solution::new();
        sol.add_route(Route::new(vec![1, 2, 0]));
        sol.add_route(Route::from_customers(&[3]));
        assert!(!p.validate(&sol));
    }

    #[test]
    fn test_validate_depot_in_interior() {
        let p = line_problem();
        let mut sol = Solution::new();
        sol.add_route(Route::new(vec![0, 1, 0, 2, 0]));
        sol.add_route(Route::from_customers(&[3]));
        assert!(!p.validate(&sol));
    }
}
