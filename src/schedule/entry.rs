use serde::{Deserialize, Serialize};

/// One `{day, from, to}` row of an app's team schedule, as configured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub day: String,
    pub from: String,
    pub to: String,
}
