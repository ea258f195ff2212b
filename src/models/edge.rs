//! Directed edge attributes.

use serde::{Deserialize, Serialize};

/// Attributes of a directed road segment `u → v`.
///
/// Path algorithms weigh edges by `base_time`; `distance` and `cost` feed the
/// schedulers' cost accounting. The categorical codes are carried through
/// untouched for the reporting layer.
///
/// # Examples
///
/// ```
/// use u_logistics::models::EdgeAttr;
///
/// let e = EdgeAttr::new(12.5, 18.0)
///     .with_cost(4.2)
///     .with_reliability(0.9)
///     .with_road_type(1)
///     .with_restrictions(0b0010)
///     .with_weather(2);
/// assert_eq!(e.base_time, 18.0);
/// assert_eq!(e.restrictions, 0b0010);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgeAttr {
    /// Length of the segment.
    pub distance: f64,
    /// Free-flow travel time in minutes.
    pub base_time: f64,
    /// Monetary cost (fuel, tolls...).
    pub cost: f64,
    /// Probability-like reliability score in `[0, 1]`.
    pub reliability: f64,
    /// Road surface/category code.
    pub road_type: i32,
    /// Restriction bitmask (weight, height...).
    pub restrictions: u32,
    /// Weather condition code (0 = normal).
    pub weather: i32,
}

impl EdgeAttr {
    /// Creates an edge with the given distance and base travel time.
    ///
    /// Cost defaults to zero, reliability to `1.0`, and all codes to zero.
    pub fn new(distance: f64, base_time: f64) -> Self {
        Self {
            distance,
            base_time,
            cost: 0.0,
            reliability: 1.0,
            road_type: 0,
            restrictions: 0,
            weather: 0,
        }
    }

    /// Sets the monetary cost.
    pub fn with_cost(mut self, cost: f64) -> Self {
        self.cost = cost;
        self
    }

    /// Sets the reliability, clamped into `[0, 1]`.
    pub fn with_reliability(mut self, reliability: f64) -> Self {
        self.reliability = reliability.clamp(0.0, 1.0);
        self
    }

    /// Sets the road-type code.
    pub fn with_road_type(mut self, road_type: i32) -> Self {
        self.road_type = road_type;
        self
    }

    /// Sets the restriction bitmask.
    pub fn with_restrictions(mut self, restrictions: u32) -> Self {
        self.restrictions = restrictions;
        self
    }

    /// Sets the weather-type code.
    pub fn with_weather(mut self, weather: i32) -> Self {
        self.weather = weather;
        self
    }
}
