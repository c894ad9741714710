mod calendar;
mod entry;

pub use calendar::{Availability, Interval, WeeklySchedule};
pub use entry::ScheduleEntry;

use chrono::Weekday;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("unknown timezone {0:?}")]
    UnknownTimezone(String),
    #[error("no timezone configured")]
    MissingTimezone,
    #[error("unknown day name {0:?}")]
    UnknownDay(String),
    #[error("unreadable time of day {0:?}")]
    BadTimeOfDay(String),
    #[error("hours on {day} end before they start ({from} to {to})")]
    EmptyInterval {
        day: Weekday,
        from: String,
        to: String,
    },
    #[error("overlapping hours on {day}")]
    OverlappingIntervals { day: Weekday },
}
