//! Output record and conversion report models

use geo::{Distance, Haversine, Point};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::PathBuf;

use crate::normalize::create_id;

/// A flattened location entry.
///
/// Field order is the serialization order of the output document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationRecord {
    pub id: String,
    pub name: String,
    pub building: String,
    pub lat: f64,
    pub lon: f64,
}

impl LocationRecord {
    /// Build a record from a display name and a `[lon, lat]` pair
    pub fn new(name: impl Into<String>, lon: f64, lat: f64) -> Self {
        let name = name.into();
        Self {
            id: create_id(&name),
            building: name.clone(),
            name,
            lat,
            lon,
        }
    }

    /// Extract a record from a single feature entry.
    ///
    /// Returns `None` unless the feature has a string `properties.name` and a
    /// `geometry.coordinates` array whose first two elements are numbers.
    pub fn from_feature(feature: &Value) -> Option<Self> {
        let name = feature_name(feature)?;
        let (lon, lat) = feature_lon_lat(feature)?;
        Some(Self::new(name, lon, lat))
    }

    /// Great-circle distance to another record in kilometers
    pub fn distance_km(&self, other: &LocationRecord) -> f64 {
        Haversine.distance(self.point(), other.point()) / 1000.0
    }

    fn point(&self) -> Point<f64> {
        Point::new(self.lon, self.lat)
    }
}

pub(crate) fn feature_name(feature: &Value) -> Option<&str> {
    feature.get("properties")?.get("name")?.as_str()
}

pub(crate) fn feature_lon_lat(feature: &Value) -> Option<(f64, f64)> {
    let coords = feature.get("geometry")?.get("coordinates")?.as_array()?;
    match coords.as_slice() {
        [lon, lat, ..] => Some((lon.as_f64()?, lat.as_f64()?)),
        _ => None,
    }
}

/// Summary of a finished (or planned) conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub total: usize,
    pub converted: usize,
    pub skipped: usize,
}
