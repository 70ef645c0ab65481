//! Capacity-aware splitting of a customer ordering into routes.
//!
//! Every search strategy represents candidates as a flat customer ordering
//! and relies on [`split_routes`] to turn that ordering into a feasible
//! depot-anchored solution. The routine packs greedily on capacity alone
//! and is distance-agnostic: solution quality comes entirely from the
//! ordering fed in.

use crate::models::{CvrpProblem, Route, Solution};

/// Greedily bin-packs a customer ordering into capacity-feasible routes.
///
/// Customers are accumulated into the current route while the running
/// demand stays within capacity; a customer that would overflow closes the
/// current route and opens a new one seeded with that customer. The final
/// route is closed if non-empty. Deterministic: identical orderings always
/// produce identical route partitions.
///
/// Assumes every individual demand is within the vehicle capacity; an
/// instance violating that admits no feasible solution at all.
///
/// # Panics
///
/// Panics if an ordering index is out of the problem's location range.
///
/// # Examples
///
/// ```
/// use cvrp_search::models::{CvrpProblem, Location};
/// use cvrp_search::split::split_routes;
///
/// let problem = CvrpProblem::new(
///     Location::new(0.0, 0.0),
///     vec![
///         Location::new(1.0, 0.0),
///         Location::new(2.0, 0.0),
///         Location::new(0.0, 1.0),
///         Location::new(0.0, 2.0),
///     ],
///     vec![1, 1, 1, 1],
///     2,
/// )
/// .expect("matching lists");
///
/// let solution = split_routes(&[1, 2, 3, 4], &problem);
/// assert_eq!(solution.routes()[0].stops(), &[0, 1, 2, 0]);
/// assert_eq!(solution.routes()[1].stops(), &[0, 3, 4, 0]);
/// assert!((problem.solution_distance(&solution) - 8.0).abs() < 1e-10);
/// ```
pub fn split_routes(ordering: &[usize], problem: &CvrpProblem) -> Solution {
    let mut solution = Solution::new();
    let mut current: Vec<usize> = Vec::new();
    let mut load = 0i32;

    for &customer in ordering {
        let demand = problem.demand(customer);
        if load + demand > problem.capacity() {
            solution.add_route(Route::from_customers(&current));
            current.clear();
            current.push(customer);
            load = demand;
        } else {
            current.push(customer);
            load += demand;
        }
    }

    if !current.is_empty() {
        solution.add_route(Route::from_customers(&current));
    }

    solution
}
