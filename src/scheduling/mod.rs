//! Delivery scheduling over a congestion-aware network.
//!
//! - [`schedule_day`] — time-first greedy run for one vehicle
//! - [`schedule_fleet`] — the greedy run repeated vehicle by vehicle
//! - [`plan_multi_day`] — dynamic-programming assignment across days
//!
//! Schedulers never force an infeasible delivery: a request that breaks a
//! capacity, availability, or deadline constraint is simply left out.

mod greedy;
mod multi_day;

pub use greedy::{schedule_day, schedule_fleet, ScheduledStop};
pub use multi_day::{plan_multi_day, MultiDayPlan};
