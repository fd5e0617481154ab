use model::{AreaResult, Fix, GeoPoint};

use crate::wkt;

/// Renders the export CSV. The layout is a stable external contract:
/// header, one row per vertex, the WKT ring, a blank separator line, then
/// one row per area unit. Values are written verbatim, so the WKT row
/// carries embedded commas and must not be re-quoted.
///
/// Altitude and accuracy come from the single most recent fix, not per
/// vertex, and default to 0 when absent.
pub fn to_csv(points: &[GeoPoint], area: &AreaResult, last_fix: Option<&Fix>) -> String {
    let altitude = last_fix.and_then(|fix| fix.altitude).unwrap_or(0.0);
    let accuracy = last_fix.and_then(|fix| fix.accuracy_meters).unwrap_or(0.0);

    let mut out = String::new();
    out.push_str("Point Type,Lat,Lon,Altitude(m),Accuracy(m)\n");
    for point in points {
        out.push_str(&format!(
            "Point,{},{},{},{}\n",
            point.latitude, point.longitude, altitude, accuracy
        ));
    }
    out.push_str(&format!("Polygon,WKT,{}\n", wkt::to_wkt(points)));
    out.push('\n');
    out.push_str(&format!("Area (m²),{}\n", area.square_meters));
    out.push_str(&format!("Acres,{}\n", area.acres));
    out.push_str(&format!("Hectares,{}\n", area.hectares));
    out.push_str(&format!("Sq Feet,{}\n", area.square_feet));
    out.push_str(&format!("Sq Yards,{}\n", area.square_yards));
    out
}
