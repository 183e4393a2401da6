//! Data models for the club reference data.
//!
//! This module contains the records exchanged with the Remote Store:
//!
//! - `Player`, `PlayerDraft`: Roster entries with a unique dorsal number
//! - `Place`, `PlaceDraft`: Stadiums shown as map markers
//! - `Event`, `EventDraft`: Fixtures shown on the calendar
//!
//! Every record carries a server-assigned `RecordId` serialized as `_id`.
//! Drafts are the bodies sent on create and update and never carry an id.

pub mod event;
mod lenient;
pub mod place;
pub mod player;

use std::fmt;

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

pub use event::{Event, EventDraft};
pub use place::{Place, PlaceDraft};
pub use player::{Player, PlayerDraft};

/// Placeholder used when an optional text field was left empty.
pub const UNKNOWN: &str = "Unknown";

/// Identifier assigned by the Remote Store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for RecordId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A record type held in one of the cached collections.
///
/// `ENDPOINT` is the collection path on the Remote Store, `ENTITY` and
/// `COLLECTION` are used to build error messages and log fields.
pub trait Record: Clone + fmt::Debug + DeserializeOwned + Send + Sync + 'static {
    type Draft: Serialize + fmt::Debug + Send + Sync;

    const ENDPOINT: &'static str;
    const ENTITY: &'static str;
    const COLLECTION: &'static str;

    fn id(&self) -> &RecordId;
}

/// Map an absent or blank text value to [`UNKNOWN`].
pub(crate) fn or_unknown(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => UNKNOWN.to_string(),
    }
}

/// Decode a fetched collection one record at a time.
///
/// A record that does not decode is skipped with a warning naming its `_id`,
/// so one bad document cannot empty the whole collection.
pub fn decode_list<R: Record>(values: Vec<Value>) -> Vec<R> {
    values
        .into_iter()
        .filter_map(|value| {
            let id = match value.get("_id") {
                Some(Value::String(id)) => id.clone(),
                Some(other) => other.to_string(),
                None => "<missing>".to_string(),
            };
            match serde_json::from_value::<R>(value) {
                Ok(record) => Some(record),
                Err(e) => {
                    warn!(collection = R::COLLECTION, id = %id, error = %e, "Skipping malformed record");
                    None
                }
            }
        })
        .collect()
}
