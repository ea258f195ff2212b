//! Vehicle type with capacity, availability, and cost parameters.

use serde::{Deserialize, Serialize};

/// A delivery vehicle.
///
/// `capacity` is the *remaining* capacity: schedulers consume it in place as
/// they commit deliveries. The availability window is expressed in minutes
/// since midnight.
///
/// # Examples
///
/// ```
/// use u_logistics::models::Vehicle;
///
/// let v = Vehicle::new(100)
///     .with_availability(480.0, 1080.0)
///     .with_cost_per_distance(0.8)
///     .with_position(2);
/// assert_eq!(v.capacity(), 100);
/// assert_eq!(v.available_from(), 480.0);
/// assert_eq!(v.position(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    capacity: u32,
    available_from: f64,
    available_until: f64,
    cost_per_distance: f64,
    position: usize,
}

impl Vehicle {
    /// Creates a vehicle with the given capacity.
    ///
    /// Default: available all day (`[0, 1440]`), cost_per_distance = 1.0,
    /// parked at node 0.
    pub fn new(capacity: u32) -> Self {
        Self {
            capacity,
            available_from: 0.0,
            available_until: 1440.0,
            cost_per_distance: 1.0,
            position: 0,
        }
    }

    /// Sets the availability window.
    pub fn with_availability(mut self, from: f64, until: f64) -> Self {
        self.available_from = from;
        self.available_until = until;
        self
    }

    /// Sets cost per unit distance.
    pub fn with_cost_per_distance(mut self, cost: f64) -> Self {
        self.cost_per_distance = cost;
        self
    }

    /// Sets the starting node.
    pub fn with_position(mut self, node: usize) -> Self {
        self.position = node;
        self
    }

    /// Remaining load capacity.
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Start of the availability window.
    pub fn available_from(&self) -> f64 {
        self.available_from
    }

    /// End of the availability window.
    pub fn available_until(&self) -> f64 {
        self.available_until
    }

    /// Cost per unit distance traveled.
    pub fn cost_per_distance(&self) -> f64 {
        self.cost_per_distance
    }

    /// Node where the vehicle starts its tour.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns `true` if `volume` fits in the remaining capacity.
    pub fn fits(&self, volume: u32) -> bool {
        volume <= self.capacity
    }

    pub(crate) fn consume(&mut self, volume: u32) {
        self.capacity = self.capacity.saturating_sub(volume);
    }

    pub(crate) fn relocate(&mut self, node: usize) {
        self.position = node;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vehicle_new() {
        let v = Vehicle::new(200);
        assert_eq!(v.capacity(), 200);
        assert_eq!(v.available_from(), 0.0);
        assert_eq!(v.available_until(), 1440.0);
        assert_eq!(v.cost_per_distance(), 1.0);
        assert_eq!(v.position(), 0);
    }

    #[test]
    fn test_vehicle_builder() {
        let v = Vehicle::new(100)
            .with_availability(360.0, 900.0)
            .with_cost_per_distance(1.5)
            .with_position(4);
        assert_eq!(v.available_from(), 360.0);
        assert_eq!(v.available_until(), 900.0);
        assert_eq!(v.cost_per_distance(), 1.5);
        assert_eq!(v.position(), 4);
    }

    #[test]
    fn test_vehicle_consume() {
        let mut v = Vehicle::new(30);
        assert!(v.fits(30));
        v.consume(20);
        assert_eq!(v.capacity(), 10);
        assert!(!v.fits(11));
        v.consume(50);
        assert_eq!(v.capacity(), 0);
    }
}
