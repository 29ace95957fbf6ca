//! Feature collection flattening
//!
//! Walks the `features` array of a parsed document and turns every feature
//! carrying a name and a coordinate pair into a [`LocationRecord`]. Features
//! without either are skipped; only a missing or malformed `features` array
//! is an error.

use serde_json::Value;

use crate::error::{FlattenError, Result};
use crate::models::{feature_lon_lat, feature_name, LocationRecord};

/// Records extracted from a document together with the source feature count
#[derive(Debug, Clone)]
pub struct Flattened {
    pub records: Vec<LocationRecord>,
    pub total: usize,
}

impl Flattened {
    pub fn skipped(&self) -> usize {
        self.total - self.records.len()
    }
}

/// Flatten a document, keeping only the records
pub fn flatten_features(document: &Value) -> Result<Vec<LocationRecord>> {
    flatten_document(document).map(|flattened| flattened.records)
}

/// Flatten a document into records and a feature count
pub fn flatten_document(document: &Value) -> Result<Flattened> {
    let features = features_array(document)?;

    let mut records = Vec::with_capacity(features.len());
    for (idx, feature) in features.iter().enumerate() {
        match LocationRecord::from_feature(feature) {
            Some(record) => records.push(record),
            None => tracing::debug!(index = idx, reason = skip_reason(feature), "Skipping feature"),
        }
    }

    Ok(Flattened {
        records,
        total: features.len(),
    })
}

fn features_array(document: &Value) -> Result<&Vec<Value>> {
    let Some(object) = document.as_object() else {
        return Err(FlattenError::Schema {
            reason: format!("top-level value is {}, expected an object", kind(document)),
        });
    };

    match object.get("features") {
        Some(Value::Array(features)) => Ok(features),
        Some(other) => Err(FlattenError::Schema {
            reason: format!("'features' is {}, expected an array", kind(other)),
        }),
        None => Err(FlattenError::Schema {
            reason: "'features' key is missing".to_string(),
        }),
    }
}

/// Reason a feature rejected by `LocationRecord::from_feature` was skipped
fn skip_reason(feature: &Value) -> &'static str {
    if feature_name(feature).is_none() {
        "missing name"
    } else {
        debug_assert!(feature_lon_lat(feature).is_none());
        "missing coordinates"
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
