//! Clock/meal state machine.
//!
//! ```text
//! OffClock --ClockIn--> OnClock --StartMeal--> OnMeal
//!    ^                   |   ^                   |
//!    +-----ClockOut------+   +-----EndMeal-------+
//! ```

use crate::errors::{AppError, AppResult};
use crate::models::{PunchKind, TimeStatus};

/// State reached by applying `punch` to `current`, or the reason it is not
/// allowed. Pure: callers mutate nothing until this returns `Ok`.
pub fn transition(current: TimeStatus, punch: PunchKind) -> AppResult<TimeStatus> {
    use PunchKind::*;
    use TimeStatus::*;

    match (punch, current) {
        (ClockIn, OffClock) => Ok(OnClock),
        (ClockIn, OnMeal) => Err(rejected("You are on a meal break, end meal first")),
        (ClockIn, OnClock) => Err(rejected("You are already clocked in")),

        (ClockOut, OnClock) => Ok(OffClock),
        (ClockOut, _) => Err(rejected("You are not clocked in")),

        (StartMeal, OnClock) => Ok(OnMeal),
        (StartMeal, _) => Err(rejected("You are not clocked in")),

        (EndMeal, OnMeal) => Ok(OnClock),
        (EndMeal, _) => Err(rejected("You are not on a meal")),
    }
}

fn rejected(reason: &str) -> AppError {
    AppError::InvalidStateTransition(reason.to_string())
}
