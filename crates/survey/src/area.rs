use model::{AreaResult, GeoPoint};
use utility::geo;

/// Computes the enclosed planar area of the captured vertex list.
///
/// Returns `None` for fewer than three vertices; a degenerate polygon with
/// three or more vertices still yields `Some`, possibly with zero area.
///
/// Vertices are projected to a planar Web Mercator frame and summed with
/// the shoelace formula over consecutive pairs only. The closing edge back
/// to the first vertex is not part of the sum; every previously exported
/// area value was produced by this exact summation.
pub fn compute_area(points: &[GeoPoint]) -> Option<AreaResult> {
    if points.len() < 3 {
        return None;
    }
    let projected = points
        .iter()
        .map(|point| geo::project(point.latitude, point.longitude))
        .collect::<Vec<_>>();
    let mut signed_area = 0.0;
    for pair in projected.windows(2) {
        let (x0, y0) = pair[0];
        let (x1, y1) = pair[1];
        signed_area += (x0 * y1 - y0 * x1) / 2.0;
    }
    Some(AreaResult::from_square_meters(signed_area.abs()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_near_equator() -> Vec<GeoPoint> {
        vec![
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(0.0, 0.001),
            GeoPoint::new(0.001, 0.001),
            GeoPoint::new(0.001, 0.0),
        ]
    }

    #[test]
    fn absent_below_three_points() {
        assert!(compute_area(&[]).is_none());
        assert!(compute_area(&[GeoPoint::new(0.0, 0.0)]).is_none());
        assert!(compute_area(&[
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(0.0, 0.001),
        ])
        .is_none());
    }

    #[test]
    fn square_area_matches_side_length() {
        // 0.001 degrees is about 111.32 meters at the equator, so the
        // square encloses roughly 12392 square meters
        let area = compute_area(&square_near_equator()).unwrap();
        let side = 0.001f64.to_radians() * geo::EARTH_RADIUS_M;
        let expected = side * side;
        assert!(
            (area.square_meters - expected).abs() / expected < 0.001,
            "got {} expected {expected}",
            area.square_meters
        );
    }

    #[test]
    fn unit_conversions_derive_from_square_meters() {
        let area = compute_area(&square_near_equator()).unwrap();
        assert_eq!(area.hectares, area.square_meters / 10_000.0);
        assert_eq!(area.acres, area.square_meters * 0.00024711);
    }

    #[test]
    fn deterministic_over_repeated_runs() {
        let first = compute_area(&square_near_equator()).unwrap();
        let second = compute_area(&square_near_equator()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn collinear_points_have_zero_area() {
        let area = compute_area(&[
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(0.0, 0.001),
            GeoPoint::new(0.0, 0.002),
        ])
        .unwrap();
        assert!(area.square_meters.abs() < 1e-6);
    }

    #[test]
    fn closing_edge_is_not_summed() {
        // away from the projection origin the wrap-around term is large,
        // so explicitly appending the first vertex changes the sum
        let open = vec![
            GeoPoint::new(10.0, 20.0),
            GeoPoint::new(10.0, 20.001),
            GeoPoint::new(10.001, 20.001),
            GeoPoint::new(10.001, 20.0),
        ];
        let mut closed = open.clone();
        closed.push(open[0]);
        let open_area = compute_area(&open).unwrap();
        let closed_area = compute_area(&closed).unwrap();
        assert_ne!(open_area.square_meters, closed_area.square_meters);
    }
}
