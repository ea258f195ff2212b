//! Time-first greedy daily scheduler.
//!
//! # Algorithm
//!
//! The vehicle starts at its position at the start of its availability
//! window. At each step every undelivered request that fits the remaining
//! capacity is priced with [`effective_time`] from the current position to
//! the request's destination at the current clock. Requests whose arrival
//! would fall after the vehicle's availability end or the request's own
//! deadline are discarded; the one with the smallest travel time is
//! committed (lowest index on ties). The run stops when no request is
//! feasible.
//!
//! Selection is by travel time only; monetary cost and distance play no
//! part.
//!
//! # Complexity
//!
//! O(n²) effective-time evaluations for n requests.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::congestion::effective_time;
use crate::graph::Graph;
use crate::models::{Delivery, Vehicle};

/// One committed delivery in a schedule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScheduledStop {
    /// Index of the vehicle in the caller's fleet.
    pub vehicle: usize,
    /// Id of the delivered request.
    pub delivery_id: u32,
    /// Arrival clock at the destination, minutes since midnight.
    pub arrival: f64,
}

/// Runs the greedy scheduler for one vehicle.
///
/// `deliveries` and `vehicle` are updated in place: committed requests are
/// flagged delivered, the vehicle's remaining capacity shrinks by their
/// volume and its position moves to the last destination. Requests
/// already flagged delivered are ignored.
///
/// Returns the committed stops in visiting order, tagged with
/// `vehicle_index`.
///
/// # Examples
///
/// ```
/// use u_logistics::graph::Graph;
/// use u_logistics::models::{Delivery, EdgeAttr, Vehicle};
/// use u_logistics::scheduling::schedule_day;
///
/// let mut g = Graph::new(3);
/// g.upsert_edge(0, 1, EdgeAttr::new(5.0, 30.0)).unwrap();
/// g.upsert_edge(1, 2, EdgeAttr::new(5.0, 20.0)).unwrap();
///
/// let mut deliveries = vec![
///     Delivery::new(10, 0, 2, 5, 1440.0),
///     Delivery::new(11, 0, 1, 5, 1440.0),
/// ];
/// let mut truck = Vehicle::new(20).with_availability(480.0, 1080.0);
///
/// let stops = schedule_day(&g, &mut deliveries, &mut truck, 0);
/// let ids: Vec<u32> = stops.iter().map(|s| s.delivery_id).collect();
/// assert_eq!(ids, vec![11, 10]);
/// assert_eq!(stops[1].arrival, 530.0);
/// assert_eq!(truck.capacity(), 10);
/// ```
pub fn schedule_day(
    graph: &Graph,
    deliveries: &mut [Delivery],
    vehicle: &mut Vehicle,
    vehicle_index: usize,
) -> Vec<ScheduledStop> {
    let mut clock = vehicle.available_from();
    let mut position = vehicle.position();
    let mut stops = Vec::new();

    loop {
        let mut best: Option<(usize, f64)> = None;

        for (i, d) in deliveries.iter().enumerate() {
            if d.is_delivered() || !vehicle.fits(d.volume()) {
                continue;
            }

            let travel = effective_time(graph, position, d.destination(), clock);
            if !travel.is_finite() {
                continue;
            }

            let arrival = clock + travel;
            if arrival > vehicle.available_until() || arrival > d.deadline() {
                continue;
            }

            if best.is_none_or(|(_, best_t)| travel < best_t) {
                best = Some((i, travel));
            }
        }

        let Some((next, travel)) = best else {
            break;
        };

        let delivery = &mut deliveries[next];
        clock += travel;
        position = delivery.destination();
        vehicle.consume(delivery.volume());
        vehicle.relocate(position);
        delivery.set_delivered(true);

        trace!(
            vehicle = vehicle_index,
            delivery = delivery.id(),
            arrival = clock,
            remaining = vehicle.capacity(),
            "delivery committed"
        );
        stops.push(ScheduledStop {
            vehicle: vehicle_index,
            delivery_id: delivery.id(),
            arrival: clock,
        });
    }

    debug!(
        vehicle = vehicle_index,
        committed = stops.len(),
        "daily schedule built"
    );
    stops
}

/// Runs [`schedule_day`] for each vehicle in order over a shared request
/// list.
///
/// Later vehicles only see what earlier vehicles left undelivered. Stops
/// are returned grouped by vehicle, in fleet order.
pub fn schedule_fleet(
    graph: &Graph,
    deliveries: &mut [Delivery],
    vehicles: &mut [Vehicle],
) -> Vec<ScheduledStop> {
    let mut stops = Vec::new();
    for (index, vehicle) in vehicles.iter_mut().enumerate() {
        if deliveries.iter().all(Delivery::is_delivered) {
            break;
        }
        stops.extend(schedule_day(graph, deliveries, vehicle, index));
    }
    stops
}
