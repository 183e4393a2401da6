//! Read-only projections of the cached collections.
//!
//! - `map`: stadium markers with capacity/community filters
//! - `calendar`: fixtures by month, week or list
//! - `charts`: events per hour and per competition

pub mod calendar;
pub mod charts;
pub mod map;

pub use calendar::{entries_in, group_by_day, CalendarEntry, CalendarView};
pub use charts::{events_per_competition, events_per_hour, hour_labels};
pub use map::{communities, filter_places, markers, Marker, PlaceFilter, DEFAULT_CENTER, DEFAULT_ZOOM};
