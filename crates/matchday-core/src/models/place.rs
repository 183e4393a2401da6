use serde::{Deserialize, Serialize};

use super::{lenient, Record, RecordId};

/// A stadium shown on the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct Place {
    #[serde(rename = "_id")]
    pub id: RecordId,
    pub stadium: String,
    pub club: String,
    #[serde(deserialize_with = "lenient::whole_number")]
    pub capacity: u32,
    #[serde(default = "lenient::unknown", deserialize_with = "lenient::text_or_unknown")]
    pub community: String,
    #[serde(default, deserialize_with = "lenient::optional_float")]
    pub lat: Option<f64>,
    #[serde(default, deserialize_with = "lenient::optional_float")]
    pub lng: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct PlaceDraft {
    pub stadium: String,
    pub club: String,
    pub capacity: u32,
    pub community: String,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

impl Place {
    /// Latitude/longitude pair, if both are present and usable.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.lat, self.lng) {
            (Some(lat), Some(lng)) if valid_latitude(lat) && valid_longitude(lng) => {
                Some((lat, lng))
            }
            _ => None,
        }
    }

    pub fn to_draft(&self) -> PlaceDraft {
        PlaceDraft {
            stadium: self.stadium.clone(),
            club: self.club.clone(),
            capacity: self.capacity,
            community: self.community.clone(),
            lat: self.lat,
            lng: self.lng,
        }
    }
}

pub(crate) fn valid_latitude(lat: f64) -> bool {
    lat.is_finite() && (-90.0..=90.0).contains(&lat)
}

pub(crate) fn valid_longitude(lng: f64) -> bool {
    lng.is_finite() && (-180.0..=180.0).contains(&lng)
}

impl Record for Place {
    type Draft = PlaceDraft;

    const ENDPOINT: &'static str = "map";
    const ENTITY: &'static str = "place";
    const COLLECTION: &'static str = "places";

    fn id(&self) -> &RecordId {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_place_without_coordinates() {
        let json = r#"{"_id":"p1","stadium":"Estadi Johan Cruyff","club":"FC Barcelona B","capacity":6000}"#;
        let place: Place = serde_json::from_str(json).unwrap();
        assert_eq!(place.community, "Unknown");
        assert_eq!(place.lat, None);
        assert!(place.coordinates().is_none());
    }

    #[test]
    fn test_parse_place_with_string_coordinates() {
        let json = r#"{"_id":"p2","stadium":"Mestalla","club":"Valencia CF","capacity":"49430","community":"Valencia","lat":"39.4746","lng":"-0.3583"}"#;
        let place: Place = serde_json::from_str(json).unwrap();
        assert_eq!(place.capacity, 49430);
        assert_eq!(place.coordinates(), Some((39.4746, -0.3583)));
    }

    #[test]
    fn test_garbage_coordinate_is_treated_as_missing() {
        let json = r#"{"_id":"p3","stadium":"San Mamés","club":"Athletic Club","capacity":53289,"lat":"n/a","lng":-2.9494}"#;
        let place: Place = serde_json::from_str(json).unwrap();
        assert_eq!(place.lat, None);
        assert!(place.coordinates().is_none());
    }

    #[test]
    fn test_out_of_range_coordinates_are_unusable() {
        let place = Place {
            id: RecordId::new("x"),
            stadium: "Nowhere".to_string(),
            club: "None".to_string(),
            capacity: 1,
            community: "Unknown".to_string(),
            lat: Some(123.0),
            lng: Some(2.0),
        };
        assert!(place.coordinates().is_none());
    }
}
