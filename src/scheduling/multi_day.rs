//! Multi-day delivery assignment by dynamic programming.
//!
//! # Algorithm
//!
//! Requests are considered in array order. For each vehicle a table
//! indexed by (requests considered, day) keeps the best partial plan
//! reaching that cell: accumulated cost, used capacity, clock of the last
//! arrival, completed count and the assigned ids. From a cell the next
//! request is either skipped, or assigned on any day no earlier than both
//! the cell's day and the request's eligible day. Moving to a later day
//! resets the clock to the start of the vehicle's availability and the
//! used capacity to zero.
//!
//! An assignment travels the request's own `origin → destination` edge at
//! the congestion-aware [`effective_time`] for the current clock and costs
//! `edge.distance × cost_per_distance`. It is feasible only if that edge
//! exists, the arrival is within both the vehicle's availability and the
//! request's deadline, and the volume fits.
//!
//! Cells keep the plan completing more requests, then the cheaper one.
//! The answer is the cheapest plan among those completing the most
//! requests over every (day, vehicle) terminal cell.
//!
//! This is an approximation: each cell keeps a single plan, so an earlier
//! choice is never revisited when it blocks a better continuation. It is
//! not guaranteed optimal.
//!
//! # Complexity
//!
//! O(V · n · D²) transitions for V vehicles, n requests and D days.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::congestion::effective_time;
use crate::error::try_filled;
use crate::graph::Graph;
use crate::models::{Delivery, Vehicle};

/// Best assignment found by [`plan_multi_day`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiDayPlan {
    /// Day on which the plan's last assignment happens.
    pub day: usize,
    /// Index of the vehicle carrying the plan.
    pub vehicle: usize,
    /// Sum of distance-based costs of the assigned requests.
    pub total_cost: f64,
    /// Number of assigned requests.
    pub completed: usize,
    /// Ids of the assigned requests, in assignment order.
    pub deliveries: Vec<u32>,
}

#[derive(Debug, Clone)]
struct Partial {
    cost: f64,
    used: u32,
    clock: f64,
    completed: usize,
    assigned: Vec<u32>,
}

impl Partial {
    fn start(vehicle: &Vehicle) -> Self {
        Self {
            cost: 0.0,
            used: 0,
            clock: vehicle.available_from(),
            completed: 0,
            assigned: Vec::new(),
        }
    }

    /// Ordering where `Greater` means a better plan.
    fn rank(&self, other: &Self) -> Ordering {
        self.completed.cmp(&other.completed).then_with(|| {
            other
                .cost
                .partial_cmp(&self.cost)
                .unwrap_or(Ordering::Equal)
        })
    }

    /// Plan after carrying `delivery` on a day `day_changed` from this one.
    fn assign(
        &self,
        graph: &Graph,
        vehicle: &Vehicle,
        delivery: &Delivery,
        day_changed: bool,
    ) -> Option<Self> {
        let (clock, used) = if day_changed {
            (vehicle.available_from(), 0)
        } else {
            (self.clock, self.used)
        };

        let edge = graph.edge(delivery.origin(), delivery.destination())?;
        let travel = effective_time(graph, delivery.origin(), delivery.destination(), clock);
        if !travel.is_finite() {
            return None;
        }
        let arrival = clock + travel;
        if arrival > vehicle.available_until() || arrival > delivery.deadline() {
            return None;
        }
        let used = used.checked_add(delivery.volume())?;
        if used > vehicle.capacity() {
            return None;
        }

        let mut assigned = self.assigned.clone();
        assigned.push(delivery.id());
        Some(Self {
            cost: self.cost + edge.distance * vehicle.cost_per_distance(),
            used,
            clock: arrival,
            completed: self.completed + 1,
            assigned,
        })
    }
}

/// Keeps the better of `slot` and `candidate`; the incumbent wins ties.
fn offer(slot: &mut Option<Partial>, candidate: Partial) {
    match slot {
        Some(current) if current.rank(&candidate) != Ordering::Less => {}
        _ => *slot = Some(candidate),
    }
}

/// Assigns pending requests to vehicles over `num_days` days.
///
/// Requests already flagged delivered are skipped. Returns `None` when
/// there is no vehicle, no day, or the working table cannot be allocated.
/// With nothing assignable the answer is an empty plan on day 0 for
/// vehicle 0.
///
/// See the [module documentation](self) for the transition rules; the
/// result is a heuristic, not a proven optimum.
///
/// # Examples
///
/// ```
/// use u_logistics::graph::Graph;
/// use u_logistics::models::{Delivery, EdgeAttr, Vehicle};
/// use u_logistics::scheduling::plan_multi_day;
///
/// let mut g = Graph::new(3);
/// g.upsert_edge(0, 1, EdgeAttr::new(4.0, 60.0)).unwrap();
/// g.upsert_edge(0, 2, EdgeAttr::new(6.0, 60.0)).unwrap();
///
/// let deliveries = vec![
///     Delivery::new(1, 0, 1, 10, 1440.0),
///     Delivery::new(2, 0, 2, 10, 1440.0).with_day(1),
/// ];
/// let fleet = vec![Vehicle::new(10).with_cost_per_distance(2.0)];
///
/// let plan = plan_multi_day(&g, &deliveries, &fleet, 2).unwrap();
/// assert_eq!(plan.completed, 2);
/// assert_eq!(plan.day, 1);
/// assert_eq!(plan.total_cost, 20.0);
/// assert_eq!(plan.deliveries, vec![1, 2]);
/// ```
pub fn plan_multi_day(
    graph: &Graph,
    deliveries: &[Delivery],
    vehicles: &[Vehicle],
    num_days: usize,
) -> Option<MultiDayPlan> {
    if vehicles.is_empty() || num_days == 0 {
        return None;
    }
    let n = deliveries.len();
    let cells = match (n + 1).checked_mul(num_days) {
        Some(cells) => cells,
        None => {
            warn!(deliveries = n, num_days, "multi-day table too large");
            return None;
        }
    };

    let mut best: Option<MultiDayPlan> = None;
    let mut best_rank: Option<Partial> = None;

    for (v, vehicle) in vehicles.iter().enumerate() {
        let mut table: Vec<Option<Partial>> = match try_filled(cells, None) {
            Ok(table) => table,
            Err(err) => {
                warn!(%err, "multi-day table allocation failed");
                return None;
            }
        };
        table[0] = Some(Partial::start(vehicle));

        for (k, delivery) in deliveries.iter().enumerate() {
            for day in 0..num_days {
                let Some(state) = table[k * num_days + day].take() else {
                    continue;
                };
                let next_row = (k + 1) * num_days;

                if !delivery.is_delivered() {
                    for target in day.max(delivery.day())..num_days {
                        if let Some(next) = state.assign(graph, vehicle, delivery, target != day) {
                            offer(&mut table[next_row + target], next);
                        }
                    }
                }
                offer(&mut table[next_row + day], state);
            }
        }

        for day in 0..num_days {
            let Some(state) = table[n * num_days + day].take() else {
                continue;
            };
            let better = best_rank
                .as_ref()
                .is_none_or(|b| state.rank(b) == Ordering::Greater);
            if better {
                best = Some(MultiDayPlan {
                    day,
                    vehicle: v,
                    total_cost: state.cost,
                    completed: state.completed,
                    deliveries: state.assigned.clone(),
                });
                best_rank = Some(state);
            }
        }
    }

    if let Some(plan) = &best {
        debug!(
            vehicle = plan.vehicle,
            day = plan.day,
            completed = plan.completed,
            total_cost = plan.total_cost,
            "multi-day plan selected"
        );
    }
    best
}
