use model::{AreaResult, Fix, GeoPoint};

use crate::{area, CaptureError, CaptureResult};

/// Gates applied to incoming fixes before they become vertices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaptureConfig {
    /// Fixes reporting an accuracy above this are rejected.
    pub max_accuracy_meters: f64,
    /// Minimum great-circle spacing between consecutive vertices. A fix
    /// at exactly this distance is accepted.
    pub min_separation_meters: f64,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            max_accuracy_meters: 5.0,
            min_separation_meters: 3.0,
        }
    }
}

/// Owns the ordered vertex list of the polygon being captured.
///
/// The builder is the only mutable state of the capture pipeline. Every
/// other component works on a [`snapshot`](Self::snapshot); the cached
/// area is recomputed on every mutation and present only at three or more
/// vertices.
#[derive(Debug, Clone, Default)]
pub struct PolygonBuilder {
    config: CaptureConfig,
    points: Vec<GeoPoint>,
    last_fix: Option<Fix>,
    area: Option<AreaResult>,
}

impl PolygonBuilder {
    pub fn new() -> Self {
        Self::with_config(CaptureConfig::default())
    }

    pub fn with_config(config: CaptureConfig) -> Self {
        Self {
            config,
            points: Vec::new(),
            last_fix: None,
            area: None,
        }
    }

    /// Validates the fix against the accuracy and proximity gates and
    /// appends it as a vertex. On rejection the vertex list is unchanged.
    pub fn capture(&mut self, fix: Fix) -> CaptureResult<()> {
        if let Some(accuracy_meters) = fix.accuracy_meters {
            if accuracy_meters > self.config.max_accuracy_meters {
                log::debug!("fix rejected, accuracy {accuracy_meters}m");
                return Err(CaptureError::AccuracyTooLow {
                    accuracy_meters,
                    limit_meters: self.config.max_accuracy_meters,
                });
            }
        }
        let point = fix.position();
        if let Some(last) = self.points.last() {
            let distance_meters = last.distance_to(&point);
            if distance_meters < self.config.min_separation_meters {
                log::debug!("fix rejected, {distance_meters}m from last vertex");
                return Err(CaptureError::TooCloseToPrevious {
                    distance_meters,
                    limit_meters: self.config.min_separation_meters,
                });
            }
        }
        self.points.push(point);
        self.last_fix = Some(fix);
        self.recompute();
        Ok(())
    }

    /// Removes the last vertex. No-op on an empty polygon.
    pub fn undo(&mut self) {
        if self.points.pop().is_some() {
            self.recompute();
        }
    }

    /// Clears all vertices, the remembered fix, and the cached area.
    pub fn reset(&mut self) {
        self.points.clear();
        self.last_fix = None;
        self.area = None;
    }

    /// Closes the capture: yields the area, or `InsufficientVertices`
    /// below three points.
    pub fn finish(&self) -> CaptureResult<AreaResult> {
        self.area.ok_or(CaptureError::InsufficientVertices {
            count: self.points.len(),
        })
    }

    /// Defensive copy of the vertex list, in capture order.
    pub fn snapshot(&self) -> Vec<GeoPoint> {
        self.points.clone()
    }

    pub fn area(&self) -> Option<AreaResult> {
        self.area
    }

    /// The fix that produced the most recent vertex.
    pub fn last_fix(&self) -> Option<&Fix> {
        self.last_fix.as_ref()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    fn recompute(&mut self) {
        self.area = area::compute_area(&self.points);
    }
}
