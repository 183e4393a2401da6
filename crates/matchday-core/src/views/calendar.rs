use std::collections::BTreeMap;
use std::str::FromStr;

use chrono::{DateTime, Datelike, Duration, Local, NaiveDate};
use serde::Serialize;

use crate::models::{Event, RecordId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CalendarView {
    #[default]
    Month,
    Week,
    List,
}

impl FromStr for CalendarView {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "month" => Ok(CalendarView::Month),
            "week" => Ok(CalendarView::Week),
            "list" => Ok(CalendarView::List),
            other => Err(format!("unknown calendar view {:?} (month, week, list)", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct CalendarEntry {
    pub id: RecordId,
    pub title: String,
    pub start: DateTime<Local>,
    pub competition: String,
    pub place: String,
}

impl From<&Event> for CalendarEntry {
    fn from(event: &Event) -> Self {
        Self {
            id: event.id.clone(),
            title: event.name.clone(),
            start: event.date,
            competition: event.competition.clone(),
            place: event.place.clone(),
        }
    }
}

/// Local date range `[start, end)` shown by `view` around `anchor`.
/// The list view has no end.
pub fn visible_range(view: CalendarView, anchor: NaiveDate) -> (NaiveDate, Option<NaiveDate>) {
    match view {
        CalendarView::Month => {
            let start = anchor.with_day(1).unwrap_or(anchor);
            let end = if start.month() == 12 {
                NaiveDate::from_ymd_opt(start.year() + 1, 1, 1)
            } else {
                NaiveDate::from_ymd_opt(start.year(), start.month() + 1, 1)
            };
            (start, end)
        }
        CalendarView::Week => {
            let start = anchor - Duration::days(anchor.weekday().num_days_from_monday() as i64);
            (start, Some(start + Duration::days(7)))
        }
        CalendarView::List => (anchor, None),
    }
}

/// Calendar entries visible in `view` around `anchor`, sorted by start.
pub fn entries_in(events: &[Event], view: CalendarView, anchor: NaiveDate) -> Vec<CalendarEntry> {
    let (start, end) = visible_range(view, anchor);
    let mut entries: Vec<CalendarEntry> = events
        .iter()
        .filter(|e| {
            let day = e.date.date_naive();
            day >= start && end.map_or(true, |end| day < end)
        })
        .map(CalendarEntry::from)
        .collect();
    entries.sort_by_key(|e| e.start);
    entries
}

/// Entries grouped by local day, for month and week grids.
pub fn group_by_day(entries: Vec<CalendarEntry>) -> BTreeMap<NaiveDate, Vec<CalendarEntry>> {
    let mut days: BTreeMap<NaiveDate, Vec<CalendarEntry>> = BTreeMap::new();
    for entry in entries {
        days.entry(entry.start.date_naive()).or_default().push(entry);
    }
    days
}
