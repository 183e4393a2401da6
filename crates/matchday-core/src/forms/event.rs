use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};

use crate::models::{or_unknown, Event, EventDraft};

use super::{required, ValidationError};

/// Raw add/edit fixture form input. Date and time are collected separately.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventForm {
    pub name: String,
    pub date: String,
    pub time: String,
    pub competition: String,
    pub place: String,
}

impl EventForm {
    pub fn from_event(event: &Event) -> Self {
        Self {
            name: event.name.clone(),
            date: event.date.format("%Y-%m-%d").to_string(),
            time: event.formatted_time(),
            competition: event.competition.clone(),
            place: event.place.clone(),
        }
    }

    /// Name, date and time are required; competition and place fall back to
    /// "Unknown".
    pub fn validate(&self) -> Result<EventDraft, ValidationError> {
        let name = required("name", &self.name)?;
        let date = required("date", &self.date)?;
        let time = required("time", &self.time)?;

        Ok(EventDraft {
            name,
            date: compose_local_datetime(&date, &time)?,
            competition: or_unknown(Some(self.competition.as_str())),
            place: or_unknown(Some(self.place.as_str())),
        })
    }
}

/// Combine a `YYYY-MM-DD` date and an `HH:MM[:SS]` time into one instant in
/// the local timezone. No timezone normalization is applied.
///
/// A wall-clock time that occurs twice (DST fold) resolves to the earlier
/// instant; one that never occurs (DST gap) is rejected.
pub fn compose_local_datetime(date: &str, time: &str) -> Result<DateTime<Local>, ValidationError> {
    let day = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
        .map_err(|_| ValidationError::InvalidDate(date.to_string()))?;
    let clock = NaiveTime::parse_from_str(time.trim(), "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(time.trim(), "%H:%M:%S"))
        .map_err(|_| ValidationError::InvalidTime(time.to_string()))?;

    Local
        .from_local_datetime(&NaiveDateTime::new(day, clock))
        .earliest()
        .ok_or_else(|| ValidationError::NonexistentLocalTime {
            date: date.trim().to_string(),
            time: time.trim().to_string(),
        })
}
