use chrono::{DateTime, Datelike, NaiveTime, Utc, Weekday};
use chrono_tz::Tz;

use super::{ConfigurationError, ScheduleEntry};

const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    pub from: NaiveTime,
    pub to: NaiveTime,
}

impl Interval {
    // the opening minute counts, the closing one doesn't
    fn contains(&self, time: NaiveTime) -> bool {
        self.from <= time && time < self.to
    }
}

#[derive(Debug, Clone, Default)]
pub struct WeeklySchedule {
    days: [Vec<Interval>; 7],
}

impl WeeklySchedule {
    pub fn from_entries(entries: &[ScheduleEntry]) -> Result<WeeklySchedule, ConfigurationError> {
        let mut days: [Vec<Interval>; 7] = Default::default();

        for entry in entries {
            let day: Weekday = entry
                .day
                .parse()
                .map_err(|_| ConfigurationError::UnknownDay(entry.day.clone()))?;
            let from = parse_time(&entry.from)?;
            let to = parse_time(&entry.to)?;
            if from >= to {
                return Err(ConfigurationError::EmptyInterval {
                    day,
                    from: entry.from.clone(),
                    to: entry.to.clone(),
                });
            }

            days[day.num_days_from_monday() as usize].push(Interval { from, to });
        }

        for day in WEEK {
            let intervals = &mut days[day.num_days_from_monday() as usize];
            intervals.sort_by_key(|interval| interval.from);
            if intervals.windows(2).any(|pair| pair[1].from < pair[0].to) {
                return Err(ConfigurationError::OverlappingIntervals { day });
            }
        }

        Ok(WeeklySchedule { days })
    }

    pub fn day(&self, day: Weekday) -> &[Interval] {
        &self.days[day.num_days_from_monday() as usize]
    }
}

fn parse_time(s: &str) -> Result<NaiveTime, ConfigurationError> {
    NaiveTime::parse_from_str(s, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
        .map_err(|_| ConfigurationError::BadTimeOfDay(s.to_owned()))
}

/// Business-hours calendar: a weekly schedule pinned to one IANA timezone.
/// Immutable once built, so queries never fail and it can be shared freely.
#[derive(Debug, Clone)]
pub struct Availability {
    tz: Tz,
    week: WeeklySchedule,
}

impl Availability {
    pub fn new(
        entries: &[ScheduleEntry],
        timezone: &str,
    ) -> Result<Availability, ConfigurationError> {
        let tz: Tz = timezone
            .parse()
            .map_err(|_| ConfigurationError::UnknownTimezone(timezone.to_owned()))?;
        Ok(Availability {
            tz,
            week: WeeklySchedule::from_entries(entries)?,
        })
    }

    /// Whether `instant` falls inside the configured hours, evaluated as
    /// local wall-clock time in the schedule's timezone. Interval starts
    /// are in hours, interval ends are not.
    pub fn in_hours(&self, instant: DateTime<Utc>) -> bool {
        let local = instant.with_timezone(&self.tz);
        self.week
            .day(local.weekday())
            .iter()
            .any(|interval| interval.contains(local.time()))
    }

    pub fn timezone(&self) -> Tz {
        self.tz
    }
}
