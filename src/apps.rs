use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::AppResult;
use crate::schedule::{Availability, ConfigurationError, ScheduleEntry};

/// The per-app preferences blob, stored as JSON alongside the app record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppPreferences {
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default)]
    pub reply_time: Option<String>,
    #[serde(default)]
    pub team_schedule: Vec<ScheduleEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct App {
    pub key: String,
    pub name: String,
    #[serde(default)]
    pub preferences: AppPreferences,
}

impl App {
    pub fn from_json(json: Value) -> AppResult<App> {
        Ok(serde_json::from_value(json)?)
    }

    pub fn availability(&self) -> Result<Availability, ConfigurationError> {
        let timezone = self
            .preferences
            .timezone
            .as_deref()
            .ok_or(ConfigurationError::MissingTimezone)?;
        Availability::new(&self.preferences.team_schedule, timezone)
    }

    /// `None` when the team schedule is misconfigured: availability is then
    /// unknown rather than an error.
    pub fn in_business_hours(&self, instant: DateTime<Utc>) -> Option<bool> {
        match self.availability() {
            Ok(availability) => Some(availability.in_hours(instant)),
            Err(err) => {
                tracing::warn!(app = %self.key, "unusable team schedule: {err}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use serde_json::json;

    use super::*;

    fn app(timezone: Option<&str>, schedule: Value) -> App {
        App::from_json(json!({
            "key": "acme",
            "name": "Acme",
            "preferences": {
                "timezone": timezone,
                "reply_time": "in a few hours",
                "team_schedule": schedule,
            }
        }))
        .unwrap()
    }

    #[test]
    fn preferences_load_from_a_json_blob() {
        let app = app(
            Some("Europe/Madrid"),
            json!([{"day": "mon", "from": "09:00", "to": "17:00"}]),
        );
        assert_eq!(app.preferences.timezone.as_deref(), Some("Europe/Madrid"));
        assert_eq!(app.preferences.team_schedule.len(), 1);
        assert_eq!(app.preferences.team_schedule[0].day, "mon");
    }

    #[test]
    fn missing_preferences_default() {
        let app = App::from_json(json!({"key": "bare", "name": "Bare"})).unwrap();
        assert!(app.preferences.timezone.is_none());
        assert!(app.preferences.team_schedule.is_empty());
    }

    #[test]
    fn in_business_hours_follows_the_schedule() {
        let app = app(
            Some("Europe/Madrid"),
            json!([{"day": "mon", "from": "09:00", "to": "17:00"}]),
        );
        // Monday 2019-07-08, 10:00 in Madrid (CEST, UTC+2)
        let open = Utc.with_ymd_and_hms(2019, 7, 8, 8, 0, 0).unwrap();
        // Monday 22:00 in Madrid
        let closed = Utc.with_ymd_and_hms(2019, 7, 8, 20, 0, 0).unwrap();
        assert_eq!(app.in_business_hours(open), Some(true));
        assert_eq!(app.in_business_hours(closed), Some(false));
    }

    #[test]
    fn misconfigured_schedule_reads_as_unknown() {
        let app = app(
            Some("Europe/Madrid"),
            json!([{"day": "mon", "from": "17:00", "to": "09:00"}]),
        );
        let instant = Utc.with_ymd_and_hms(2019, 7, 8, 8, 0, 0).unwrap();
        assert_eq!(app.in_business_hours(instant), None);
    }

    #[test]
    fn missing_timezone_reads_as_unknown() {
        let app = app(None, json!([{"day": "mon", "from": "09:00", "to": "17:00"}]));
        let instant = Utc.with_ymd_and_hms(2019, 7, 8, 8, 0, 0).unwrap();
        assert_eq!(app.in_business_hours(instant), None);
        assert!(matches!(
            app.availability().unwrap_err(),
            ConfigurationError::MissingTimezone
        ));
    }
}
