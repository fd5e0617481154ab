use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::point::GeoPoint;

/// A single position report from the location source.
///
/// Altitude and accuracy are only present when the source provides them;
/// the capture gates treat a missing accuracy as acceptable.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Fix {
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: Option<f64>,
    pub accuracy_meters: Option<f64>,
    pub timestamp: DateTime<Utc>,
}

impl Fix {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            altitude: None,
            accuracy_meters: None,
            timestamp: Utc::now(),
        }
    }

    pub fn with_altitude(mut self, altitude: f64) -> Self {
        self.altitude = Some(altitude);
        self
    }

    pub fn with_accuracy(mut self, accuracy_meters: f64) -> Self {
        self.accuracy_meters = Some(accuracy_meters);
        self
    }

    pub fn position(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }
}
