use itertools::Itertools;
use model::GeoPoint;

/// Renders the vertex list as a WKT `POLYGON`, closing the ring by
/// repeating the first vertex. Coordinates are `longitude latitude`.
///
/// Fewer than three vertices cannot form a ring and render as the empty
/// string.
pub fn to_wkt(points: &[GeoPoint]) -> String {
    if points.len() < 3 {
        return String::new();
    }
    let coordinates = points
        .iter()
        .map(|point| format!("{} {}", point.longitude, point.latitude))
        .join(", ");
    let first = &points[0];
    format!(
        "POLYGON (({}, {} {}))",
        coordinates, first.longitude, first.latitude
    )
}
