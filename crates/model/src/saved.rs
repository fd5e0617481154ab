use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::point::GeoPoint;

/// A named polygon persisted by an explicit user save action.
///
/// One record per name; saving under an existing name replaces the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SavedPolygon {
    pub name: String,
    pub points: Vec<GeoPoint>,
}

impl SavedPolygon {
    pub fn new<S: Into<String>>(name: S, points: Vec<GeoPoint>) -> Self {
        Self {
            name: name.into(),
            points,
        }
    }
}
