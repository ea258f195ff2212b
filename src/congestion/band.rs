//! Time-of-day congestion bands.

use serde::{Deserialize, Serialize};

use crate::models::Congestion;

/// Length of a scheduling day in minutes.
pub const MINUTES_PER_DAY: f64 = 1440.0;

const AFTERNOON_START: f64 = 720.0;
const NIGHT_START: f64 = 1080.0;

/// A departure window selecting one of a node's congestion multipliers.
///
/// | Band | Minutes since midnight |
/// |---|---|
/// | `Morning` | `[0, 720)` |
/// | `Afternoon` | `[720, 1080)` |
/// | `Night` | `[1080, 1440)` |
///
/// Clocks past midnight (or negative) wrap onto the same day.
///
/// # Examples
///
/// ```
/// use u_logistics::congestion::TimeBand;
///
/// assert_eq!(TimeBand::of(0.0), TimeBand::Morning);
/// assert_eq!(TimeBand::of(720.0), TimeBand::Afternoon);
/// assert_eq!(TimeBand::of(1080.0), TimeBand::Night);
/// assert_eq!(TimeBand::of(1500.0), TimeBand::Morning);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeBand {
    /// `[0, 720)`.
    Morning,
    /// `[720, 1080)`.
    Afternoon,
    /// `[1080, 1440)`.
    Night,
}

impl TimeBand {
    /// Band containing the given departure clock.
    pub fn of(minute: f64) -> Self {
        let m = minute.rem_euclid(MINUTES_PER_DAY);
        if m < AFTERNOON_START {
            TimeBand::Morning
        } else if m < NIGHT_START {
            TimeBand::Afternoon
        } else {
            TimeBand::Night
        }
    }

    /// The multiplier of `congestion` that applies in this band.
    pub fn multiplier(self, congestion: &Congestion) -> f64 {
        match self {
            TimeBand::Morning => congestion.morning,
            TimeBand::Afternoon => congestion.afternoon,
            TimeBand::Night => congestion.night,
        }
    }
}
