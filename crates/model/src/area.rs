use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const ACRES_PER_SQUARE_METER: f64 = 0.00024711;
pub const SQUARE_METERS_PER_HECTARE: f64 = 10_000.0;
pub const SQUARE_FEET_PER_SQUARE_METER: f64 = 10.7639;
pub const SQUARE_YARDS_PER_SQUARE_METER: f64 = 1.19599;

/// The enclosed area of a captured polygon, in every reported unit.
///
/// Only defined for polygons with at least three vertices; below that the
/// area is absent, not zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AreaResult {
    pub square_meters: f64,
    pub acres: f64,
    pub hectares: f64,
    pub square_feet: f64,
    pub square_yards: f64,
}

impl AreaResult {
    pub fn from_square_meters(square_meters: f64) -> Self {
        Self {
            square_meters,
            acres: square_meters * ACRES_PER_SQUARE_METER,
            hectares: square_meters / SQUARE_METERS_PER_HECTARE,
            square_feet: square_meters * SQUARE_FEET_PER_SQUARE_METER,
            square_yards: square_meters * SQUARE_YARDS_PER_SQUARE_METER,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversions_are_exact_multiples() {
        let area = AreaResult::from_square_meters(10_000.0);
        assert_eq!(area.square_meters, 10_000.0);
        assert_eq!(area.hectares, 1.0);
        assert_eq!(area.acres, 10_000.0 * 0.00024711);
        assert_eq!(area.square_feet, 10_000.0 * 10.7639);
        assert_eq!(area.square_yards, 10_000.0 * 1.19599);
    }

    #[test]
    fn zero_area_is_representable() {
        let area = AreaResult::from_square_meters(0.0);
        assert_eq!(area.square_meters, 0.0);
        assert_eq!(area.hectares, 0.0);
    }
}
