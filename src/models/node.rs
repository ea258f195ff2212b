//! Network node and its time-of-day congestion profile.

use serde::{Deserialize, Serialize};

/// Travel-time multipliers applied when departing a node in each time band.
///
/// A multiplier of `1.0` means free-flowing traffic; `1.5` makes every
/// departure in that band take 50% longer than the edge's base time.
///
/// # Examples
///
/// ```
/// use u_logistics::models::Congestion;
///
/// let c = Congestion::new(1.4, 1.1, 0.9);
/// assert_eq!(c.morning, 1.4);
/// assert_eq!(Congestion::default().night, 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Congestion {
    /// Multiplier for departures in `[0, 720)` minutes.
    pub morning: f64,
    /// Multiplier for departures in `[720, 1080)` minutes.
    pub afternoon: f64,
    /// Multiplier for departures in `[1080, 1440)` minutes.
    pub night: f64,
}

impl Congestion {
    /// Creates a congestion profile from the three band multipliers.
    pub fn new(morning: f64, afternoon: f64, night: f64) -> Self {
        Self {
            morning,
            afternoon,
            night,
        }
    }
}

impl Default for Congestion {
    fn default() -> Self {
        Self::new(1.0, 1.0, 1.0)
    }
}

/// A location in the logistics network (hub, relay, delivery point...).
///
/// The node's `id` is its index in the owning [`Graph`](crate::graph::Graph)
/// and never changes. Removing a node tombstones it: the name is cleared and
/// the node is skipped by every traversal, but the slot stays in place so the
/// indices of other nodes are unaffected.
///
/// # Examples
///
/// ```
/// use u_logistics::models::{Congestion, Node};
///
/// let hub = Node::new(0, "Hub Abidjan")
///     .with_kind("hub")
///     .with_coordinates(5.36, -4.01)
///     .with_capacity(500)
///     .with_congestion(Congestion::new(1.5, 1.2, 1.0));
/// assert_eq!(hub.name(), "Hub Abidjan");
/// assert_eq!(hub.kind(), "hub");
/// assert!(hub.is_active());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    id: usize,
    name: String,
    kind: String,
    x: f64,
    y: f64,
    capacity: u32,
    congestion: Congestion,
    tombstoned: bool,
}

impl Node {
    /// Creates an active node with default attributes: type tag
    /// `"undefined"`, origin coordinates, zero capacity, neutral congestion.
    pub fn new(id: usize, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            kind: "undefined".to_string(),
            x: 0.0,
            y: 0.0,
            capacity: 0,
            congestion: Congestion::default(),
            tombstoned: false,
        }
    }

    /// Sets the type tag.
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    /// Sets the 2D coordinates.
    pub fn with_coordinates(mut self, x: f64, y: f64) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Sets the handling capacity.
    pub fn with_capacity(mut self, capacity: u32) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the congestion profile.
    pub fn with_congestion(mut self, congestion: Congestion) -> Self {
        self.congestion = congestion;
        self
    }

    /// Stable index of this node in its graph.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Display name (empty once tombstoned).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Type tag.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// X-coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y-coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Handling capacity.
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Congestion multipliers applied to departures from this node.
    pub fn congestion(&self) -> &Congestion {
        &self.congestion
    }

    /// `false` once the node has been removed from its graph.
    pub fn is_active(&self) -> bool {
        !self.tombstoned
    }

    pub(crate) fn set_id(&mut self, id: usize) {
        self.id = id;
    }

    pub(crate) fn tombstone(&mut self) {
        self.name.clear();
        self.tombstoned = true;
    }
}
