use serde::Serialize;
use tracing::warn;

use crate::config::Config;
use crate::models::{Place, RecordId};

/// Initial map center (Madrid) as (lat, lng).
pub const DEFAULT_CENTER: (f64, f64) = (40.4168, -3.7038);

pub const DEFAULT_ZOOM: u8 = 6;

/// Client-side stadium filter. Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlaceFilter {
    pub min_capacity: Option<u32>,
    pub community: Option<String>,
}

impl PlaceFilter {
    pub fn from_config(config: &Config) -> Self {
        Self {
            min_capacity: config.default_min_capacity,
            community: config.default_community.clone(),
        }
    }

    pub fn matches(&self, place: &Place) -> bool {
        if let Some(min) = self.min_capacity {
            if place.capacity < min {
                return false;
            }
        }
        match self.community.as_deref().map(str::trim) {
            Some(c) if !c.is_empty() => place.community.to_lowercase() == c.to_lowercase(),
            _ => true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct Marker {
    pub id: RecordId,
    pub lat: f64,
    pub lng: f64,
    pub title: String,
    pub popup: String,
}

impl Marker {
    fn from_place(place: &Place, (lat, lng): (f64, f64)) -> Self {
        Self {
            id: place.id.clone(),
            lat,
            lng,
            title: place.stadium.clone(),
            popup: format!(
                "{}\n{}\nCapacity: {}",
                place.stadium, place.club, place.capacity
            ),
        }
    }
}

/// Places passing the filter, whether or not they can be placed on the map.
pub fn filter_places<'a>(places: &'a [Place], filter: &PlaceFilter) -> Vec<&'a Place> {
    places.iter().filter(|p| filter.matches(p)).collect()
}

/// Markers for every place that passes the filter and has usable
/// coordinates. Places without coordinates are skipped.
pub fn markers(places: &[Place], filter: &PlaceFilter) -> Vec<Marker> {
    filter_places(places, filter)
        .into_iter()
        .filter_map(|place| match place.coordinates() {
            Some(coords) => Some(Marker::from_place(place, coords)),
            None => {
                warn!(stadium = %place.stadium, "Invalid coordinates, skipping marker");
                None
            }
        })
        .collect()
}

/// Distinct community names, sorted, for the filter choices.
///
/// Names differing only in case are one choice, since the filter ignores
/// case. The first spelling seen is kept.
pub fn communities(places: &[Place]) -> Vec<String> {
    let mut names: Vec<String> = places.iter().map(|p| p.community.trim().to_string()).collect();
    names.sort_by_cached_key(|n| n.to_lowercase());
    names.dedup_by(|later, kept| later.to_lowercase() == kept.to_lowercase());
    names
}
