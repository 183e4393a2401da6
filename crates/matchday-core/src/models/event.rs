use chrono::{DateTime, Local, Timelike};
use serde::{Deserialize, Serialize};

use super::{lenient, Record, RecordId};

/// A fixture on the calendar.
///
/// `date` is kept as a local instant. It is sent as an RFC 3339 string with
/// the caller's local offset, so the Remote Store receives local-time instants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct Event {
    #[serde(rename = "_id")]
    pub id: RecordId,
    pub name: String,
    pub date: DateTime<Local>,
    #[serde(default = "lenient::unknown", deserialize_with = "lenient::text_or_unknown")]
    pub competition: String,
    #[serde(default = "lenient::unknown", deserialize_with = "lenient::text_or_unknown")]
    pub place: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct EventDraft {
    pub name: String,
    pub date: DateTime<Local>,
    pub competition: String,
    pub place: String,
}

impl Event {
    /// Kick-off time as "18:30", or "18:30:15" when seconds are set
    pub fn formatted_time(&self) -> String {
        if self.date.second() == 0 {
            self.date.format("%H:%M").to_string()
        } else {
            self.date.format("%H:%M:%S").to_string()
        }
    }

    /// Standard date/time format: "2024-05-01 18:30"
    pub fn formatted_datetime_standard(&self) -> String {
        self.date.format("%Y-%m-%d %H:%M").to_string()
    }

    /// Local hour of day the fixture starts at (0-23)
    pub fn hour(&self) -> usize {
        self.date.hour() as usize
    }

    pub fn to_draft(&self) -> EventDraft {
        EventDraft {
            name: self.name.clone(),
            date: self.date,
            competition: self.competition.clone(),
            place: self.place.clone(),
        }
    }
}

impl Record for Event {
    type Draft = EventDraft;

    const ENDPOINT: &'static str = "event";
    const ENTITY: &'static str = "event";
    const COLLECTION: &'static str = "events";

    fn id(&self) -> &RecordId {
        &self.id
    }
}
