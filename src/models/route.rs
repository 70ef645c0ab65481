//! Depot-anchored route type.

use serde::{Deserialize, Serialize};

/// An ordered sequence of location indices visited by a single vehicle.
///
/// Routes are stored depot-anchored: the first and last stop are always
/// index 0 and the interior stops are customer indices. Capacity
/// feasibility is a solution-level property checked by
/// [`CvrpProblem::validate`](crate::models::CvrpProblem::validate).
///
/// # Examples
///
/// ```
/// use cvrp_search::models::Route;
///
/// let route = Route::from_customers(&[3, 1]);
/// assert_eq!(route.stops(), &[0, 3, 1, 0]);
/// assert_eq!(route.customers(), &[3, 1]);
/// assert_eq!(route.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    stops: Vec<usize>,
}

impl Route {
    /// Creates a route from raw stops.
    ///
    /// Callers are expected to provide a depot-anchored sequence; anchoring
    /// is not enforced here so that candidate solutions can be checked by
    /// `validate` rather than rejected at construction.
    pub fn new(stops: Vec<usize>) -> Self {
        Self { stops }
    }

    /// Creates a depot-anchored route visiting the given customers in order.
    pub fn from_customers(customers: &[usize]) -> Self {
        let mut stops = Vec::with_capacity(customers.len() + 2);
        stops.push(0);
        stops.extend_from_slice(customers);
        stops.push(0);
        Self { stops }
    }

    /// All stops including the depot anchors.
    pub fn stops(&self) -> &[usize] {
        &self.stops
    }

    /// The interior customer stops, without the depot anchors.
    pub fn customers(&self) -> &[usize] {
        if self.stops.len() < 2 {
            &[]
        } else {
            &self.stops[1..self.stops.len() - 1]
        }
    }

    /// Number of customers visited.
    pub fn len(&self) -> usize {
        self.customers().len()
    }

    /// Returns `true` if this route visits no customers.
    pub fn is_empty(&self) -> bool {
        self.customers().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_customers_anchors_depot() {
        let r = Route::from_customers(&[2, 5, 1]);
        assert_eq!(r.stops(), &[0, 2, 5, 1, 0]);
        assert_eq!(r.customers(), &[2, 5, 1]);
        assert_eq!(r.len(), 3);
        assert!(!r.is_empty());
    }

    #[test]
    fn test_from_customers_empty() {
        let r = Route::from_customers(&[]);
        assert_eq!(r.stops(), &[0, 0]);
        assert!(r.is_empty());
        assert_eq!(r.len(), 0);
    }

    #[test]
    fn test_new_raw_stops() {
        let r = Route::new(vec![0, 1, 0]);
        assert_eq!(r.customers(), &[1]);
    }
}
