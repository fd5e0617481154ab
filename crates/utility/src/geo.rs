/// Equatorial earth radius in meters, shared by the haversine distance and
/// the spherical Web Mercator projection.
pub const EARTH_RADIUS_M: f64 = 6378137.0;

fn to_radians(degrees: f64) -> f64 {
    degrees * std::f64::consts::PI / 180.0
}

/// Great-circle distance between two coordinates, in meters.
///
/// Stays accurate down to the few-meter scale, which the capture proximity
/// gate depends on.
pub fn haversine_distance(
    latitude_1: f64,
    longitude_1: f64,
    latitude_2: f64,
    longitude_2: f64,
) -> f64 {
    let lat1_rad = to_radians(latitude_1);
    let lon1_rad = to_radians(longitude_1);
    let lat2_rad = to_radians(latitude_2);
    let lon2_rad = to_radians(longitude_2);

    let dlat = lat2_rad - lat1_rad;
    let dlon = lon2_rad - lon1_rad;

    let a = (dlat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_M * c
}

/// Projects a geographic coordinate onto a planar Web Mercator frame, in
/// meters.
///
/// The projection is singular at the poles: latitude must stay within
/// (-90, 90) exclusive for a finite result.
pub fn project(latitude: f64, longitude: f64) -> (f64, f64) {
    let x = to_radians(longitude) * EARTH_RADIUS_M;
    let y = (std::f64::consts::FRAC_PI_4 + to_radians(latitude) / 2.0)
        .tan()
        .ln()
        * EARTH_RADIUS_M;
    (x, y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn haversine_one_thousandth_degree_latitude() {
        // 0.001 degrees of latitude is about 111.3 meters on this sphere
        let distance = haversine_distance(0.0, 0.0, 0.001, 0.0);
        assert!((distance - 111.319).abs() < 0.1, "got {distance}");
    }

    #[test]
    fn haversine_zero_for_identical_points() {
        assert_eq!(haversine_distance(54.32, 10.12, 54.32, 10.12), 0.0);
    }

    #[test]
    fn project_origin_maps_to_origin() {
        let (x, y) = project(0.0, 0.0);
        assert_eq!(x, 0.0);
        assert!(y.abs() < 1e-9, "got {y}");
    }

    #[test]
    fn project_x_scales_linearly_with_longitude() {
        let (x, _) = project(0.0, 90.0);
        let expected = std::f64::consts::FRAC_PI_2 * EARTH_RADIUS_M;
        assert!((x - expected).abs() < 1e-6);
    }

    #[test]
    fn project_y_is_antisymmetric_in_latitude() {
        let (_, y_north) = project(45.0, 0.0);
        let (_, y_south) = project(-45.0, 0.0);
        assert!((y_north + y_south).abs() < 1e-6);
    }
}
