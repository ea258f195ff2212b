//! Tour chromosome for the travelling-salesman GA.

use serde::{Deserialize, Serialize};

use crate::distance::{DistanceMatrix, INFINITY};

/// A closed tour: a permutation of every node index, returning to its
/// first node.
///
/// The cost is cached by [`Tour::evaluate`]; an unevaluated tour costs
/// [`INFINITY`].
///
/// # Examples
///
/// ```
/// use u_logistics::ga::Tour;
///
/// let tour = Tour::new(vec![2, 0, 1]);
/// assert_eq!(tour.order(), &[2, 0, 1]);
/// assert_eq!(tour.cost(), f64::INFINITY);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tour {
    order: Vec<usize>,
    cost: f64,
}

impl Tour {
    /// Wraps a visiting order without evaluating it.
    pub fn new(order: Vec<usize>) -> Self {
        Self {
            order,
            cost: INFINITY,
        }
    }

    /// Visiting order.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    pub(crate) fn order_mut(&mut self) -> &mut Vec<usize> {
        &mut self.order
    }

    /// Cached closed-tour cost.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Number of nodes visited.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns true if the tour visits nothing.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Recomputes the cached cost against `matrix`.
    pub fn evaluate(&mut self, matrix: &DistanceMatrix) {
        self.cost = tour_cost(matrix, &self.order);
    }

    /// Consumes the tour, returning its order.
    pub fn into_order(self) -> Vec<usize> {
        self.order
    }
}

/// Closed-tour cost: consecutive legs plus the leg back to the start.
///
/// Any missing leg makes the whole tour [`INFINITY`]. The empty tour costs
/// zero.
///
/// # Examples
///
/// ```
/// use u_logistics::distance::DistanceMatrix;
/// use u_logistics::ga::tour_cost;
///
/// let dm = DistanceMatrix::from_data(3, vec![
///     0.0, 1.0, 9.0,
///     9.0, 0.0, 2.0,
///     3.0, 9.0, 0.0,
/// ]).unwrap();
/// assert_eq!(tour_cost(&dm, &[0, 1, 2]), 6.0);
/// ```
pub fn tour_cost(matrix: &DistanceMatrix, order: &[usize]) -> f64 {
    let (Some(&first), Some(&last)) = (order.first(), order.last()) else {
        return 0.0;
    };
    let legs: f64 = order.windows(2).map(|w| matrix.get(w[0], w[1])).sum();
    legs + matrix.get(last, first)
}
