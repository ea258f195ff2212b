//! Delivery request type.

use serde::{Deserialize, Serialize};

/// A parcel to carry from `origin` to `destination` before `deadline`.
///
/// Times are minutes since midnight. `day` is the earliest day index on which
/// the delivery may be scheduled by the multi-day planner.
///
/// # Examples
///
/// ```
/// use u_logistics::models::Delivery;
///
/// let d = Delivery::new(7, 0, 3, 25, 1080.0).with_day(2);
/// assert_eq!(d.id(), 7);
/// assert_eq!(d.destination(), 3);
/// assert_eq!(d.day(), 2);
/// assert!(!d.is_delivered());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Delivery {
    id: u32,
    origin: usize,
    destination: usize,
    volume: u32,
    deadline: f64,
    day: usize,
    delivered: bool,
}

impl Delivery {
    /// Creates an undelivered request eligible from day 0.
    pub fn new(id: u32, origin: usize, destination: usize, volume: u32, deadline: f64) -> Self {
        Self {
            id,
            origin,
            destination,
            volume,
            deadline,
            day: 0,
            delivered: false,
        }
    }

    /// Sets the earliest eligible day.
    pub fn with_day(mut self, day: usize) -> Self {
        self.day = day;
        self
    }

    /// Caller-assigned identifier.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Pickup node.
    pub fn origin(&self) -> usize {
        self.origin
    }

    /// Drop-off node.
    pub fn destination(&self) -> usize {
        self.destination
    }

    /// Volume consumed from a vehicle's capacity.
    pub fn volume(&self) -> u32 {
        self.volume
    }

    /// Latest acceptable arrival, in minutes since midnight.
    pub fn deadline(&self) -> f64 {
        self.deadline
    }

    /// Earliest eligible day index.
    pub fn day(&self) -> usize {
        self.day
    }

    /// Whether a scheduling run has committed this delivery.
    pub fn is_delivered(&self) -> bool {
        self.delivered
    }

    /// Sets or clears the delivered flag.
    pub fn set_delivered(&mut self, delivered: bool) {
        self.delivered = delivered;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delivery_new() {
        let d = Delivery::new(1, 0, 4, 10, 720.0);
        assert_eq!(d.id(), 1);
        assert_eq!(d.origin(), 0);
        assert_eq!(d.destination(), 4);
        assert_eq!(d.volume(), 10);
        assert_eq!(d.deadline(), 720.0);
        assert_eq!(d.day(), 0);
        assert!(!d.is_delivered());
    }

    #[test]
    fn test_delivery_flag() {
        let mut d = Delivery::new(1, 0, 4, 10, 720.0);
        d.set_delivered(true);
        assert!(d.is_delivered());
        d.set_delivered(false);
        assert!(!d.is_delivered());
    }
}
