use crate::models::place::{valid_latitude, valid_longitude};
use crate::models::{or_unknown, Place, PlaceDraft};

use super::{required, whole_number, ValidationError};

/// Raw stadium form input. Coordinates may be left blank.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlaceForm {
    pub stadium: String,
    pub club: String,
    pub capacity: String,
    pub community: String,
    pub lat: String,
    pub lng: String,
}

impl PlaceForm {
    pub fn from_place(place: &Place) -> Self {
        Self {
            stadium: place.stadium.clone(),
            club: place.club.clone(),
            capacity: place.capacity.to_string(),
            community: place.community.clone(),
            lat: place.lat.map(|v| v.to_string()).unwrap_or_default(),
            lng: place.lng.map(|v| v.to_string()).unwrap_or_default(),
        }
    }

    pub fn validate(&self) -> Result<PlaceDraft, ValidationError> {
        Ok(PlaceDraft {
            stadium: required("stadium", &self.stadium)?,
            club: required("club", &self.club)?,
            capacity: whole_number("capacity", &self.capacity)?,
            community: or_unknown(Some(self.community.as_str())),
            lat: coordinate("lat", &self.lat, valid_latitude)?,
            lng: coordinate("lng", &self.lng, valid_longitude)?,
        })
    }
}

fn coordinate(
    field: &'static str,
    value: &str,
    in_range: fn(f64) -> bool,
) -> Result<Option<f64>, ValidationError> {
    let raw = value.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    match raw.parse::<f64>() {
        Ok(v) if in_range(v) => Ok(Some(v)),
        _ => Err(ValidationError::InvalidCoordinate {
            field,
            value: raw.to_string(),
        }),
    }
}
