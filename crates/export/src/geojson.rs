use itertools::Itertools;
use model::GeoPoint;

use crate::wkt;

/// Renders the vertex list as a GeoJSON `FeatureCollection`: one `Point`
/// feature per vertex in capture order, then one `Polygon` feature whose
/// ring repeats the first vertex. Coordinate order is `[longitude,
/// latitude]`.
///
/// The layout is reproduced line for line from prior exports, including
/// indentation, the trailing space after each point feature, and the
/// unclosed ring below three vertices. The WKT rendering rides along as
/// the `polygonWkt` property.
pub fn to_geo_json(points: &[GeoPoint]) -> String {
    let mut out = String::new();
    out.push_str("{\n");
    out.push_str("  \"type\": \"FeatureCollection\",\n");
    out.push_str("  \"features\": [\n");

    for point in points {
        out.push_str("    {\n");
        out.push_str("      \"type\": \"Feature\",\n");
        out.push_str("      \"geometry\": {\n");
        out.push_str("        \"type\": \"Point\",\n");
        out.push_str(&format!(
            "        \"coordinates\": [{}, {}]\n",
            point.longitude, point.latitude
        ));
        out.push_str("      }\n");
        out.push_str("    }, \n");
    }

    out.push_str("    {\n");
    out.push_str("      \"type\": \"Feature\",\n");
    out.push_str("      \"geometry\": {\n");
    out.push_str("        \"type\": \"Polygon\",\n");
    out.push_str("        \"coordinates\": [\n");

    // the ring only closes once it can form a polygon
    let mut ring = points.to_vec();
    if points.len() >= 3 {
        ring.push(points[0]);
    }
    let coordinates = ring
        .iter()
        .map(|point| format!("[{},{}]", point.longitude, point.latitude))
        .join(",");
    out.push_str(&format!("          [{}]\n", coordinates));
    out.push_str("        ]\n");
    out.push_str("      },\n");

    out.push_str("      \"properties\": {\n");
    out.push_str(&format!(
        "        \"polygonWkt\": \"{}\"\n",
        wkt::to_wkt(points)
    ));
    out.push_str("      }\n");

    out.push_str("    }\n");
    out.push_str("  ]\n");
    out.push_str("}\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<GeoPoint> {
        vec![
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(0.0, 0.001),
            GeoPoint::new(0.001, 0.001),
            GeoPoint::new(0.001, 0.0),
        ]
    }

    #[test]
    fn one_point_feature_per_vertex() {
        let geojson = to_geo_json(&square());
        assert_eq!(geojson.matches("\"type\": \"Point\"").count(), 4);
        assert_eq!(geojson.matches("\"type\": \"Polygon\"").count(), 1);
        assert!(geojson.starts_with("{\n  \"type\": \"FeatureCollection\",\n"));
    }

    #[test]
    fn coordinates_are_longitude_first() {
        let points = vec![
            GeoPoint::new(54.3, 10.1),
            GeoPoint::new(54.4, 10.2),
            GeoPoint::new(54.5, 10.3),
        ];
        let geojson = to_geo_json(&points);
        assert!(geojson.contains("\"coordinates\": [10.1, 54.3]"));
        assert!(geojson.contains("[10.1,54.3],[10.2,54.4],[10.3,54.5],[10.1,54.3]"));
    }

    #[test]
    fn ring_closes_with_the_first_vertex() {
        let geojson = to_geo_json(&square());
        assert!(geojson.contains(
            "          [[0,0],[0.001,0],[0.001,0.001],[0,0.001],[0,0]]\n"
        ));
    }

    #[test]
    fn ring_stays_open_below_three_vertices() {
        let points = vec![GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 0.001)];
        let geojson = to_geo_json(&points);
        assert!(geojson.contains("          [[0,0],[0.001,0]]\n"));
        // no ring, no WKT either
        assert!(geojson.contains("\"polygonWkt\": \"\"\n"));
    }

    #[test]
    fn polygon_feature_carries_the_wkt_property() {
        let geojson = to_geo_json(&square());
        assert!(geojson.contains("\"polygonWkt\": \"POLYGON (("));
    }

    #[test]
    fn point_features_keep_the_trailing_separator() {
        let geojson = to_geo_json(&square());
        assert_eq!(geojson.matches("    }, \n").count(), 4);
    }
}
