use std::{
    fs,
    path::{Path, PathBuf},
};

use chrono::Utc;
use model::{AreaResult, Fix, GeoPoint, SavedPolygon};

use crate::{csv, geojson, ExportError, ExportResult};

/// Filesystem-backed store for exports and named polygons.
///
/// Every write goes to a temporary file first and is renamed into place,
/// so a failed write never leaves a partial file under its final name.
#[derive(Debug, Clone)]
pub struct ExportStore {
    directory: PathBuf,
}

impl ExportStore {
    pub fn new<P: Into<PathBuf>>(directory: P) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Writes the CSV export as `polygon_export_<epoch-millis>.csv` and
    /// returns its path.
    pub fn export_csv(
        &self,
        points: &[GeoPoint],
        area: &AreaResult,
        last_fix: Option<&Fix>,
    ) -> ExportResult<PathBuf> {
        if points.is_empty() {
            return Err(ExportError::NoPolygonData);
        }
        let filename =
            format!("polygon_export_{}.csv", Utc::now().timestamp_millis());
        let contents = csv::to_csv(points, area, last_fix);
        self.write_atomic(&filename, contents.as_bytes())
    }

    /// Writes the GeoJSON export as `polygon_<epoch-millis>.geojson` and
    /// returns its path.
    pub fn export_geo_json(&self, points: &[GeoPoint]) -> ExportResult<PathBuf> {
        if points.is_empty() {
            return Err(ExportError::NoPolygonData);
        }
        let filename = format!("polygon_{}.geojson", Utc::now().timestamp_millis());
        let contents = geojson::to_geo_json(points);
        self.write_atomic(&filename, contents.as_bytes())
    }

    /// Persists a named polygon as `<name>.json`. A record under the same
    /// name is silently replaced.
    pub fn save_named(
        &self,
        name: &str,
        points: &[GeoPoint],
    ) -> ExportResult<PathBuf> {
        Self::validate_name(name)?;
        let record = SavedPolygon::new(name, points.to_vec());
        let contents = serde_json::to_string_pretty(&record)?;
        self.write_atomic(&format!("{name}.json"), contents.as_bytes())
    }

    /// Reads a named polygon back.
    pub fn load_named(&self, name: &str) -> ExportResult<SavedPolygon> {
        Self::validate_name(name)?;
        let path = self.directory.join(format!("{name}.json"));
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    // the name becomes a filename inside the store directory and must not
    // point anywhere else
    fn validate_name(name: &str) -> ExportResult<()> {
        if name.trim().is_empty() {
            return Err(ExportError::EmptyName);
        }
        if name.contains(['/', '\\']) || name == "." || name == ".." {
            return Err(ExportError::InvalidName);
        }
        Ok(())
    }

    fn write_atomic(&self, filename: &str, contents: &[u8]) -> ExportResult<PathBuf> {
        fs::create_dir_all(&self.directory)?;
        let target = self.directory.join(filename);
        let temporary = self.directory.join(format!("{filename}.tmp"));
        fs::write(&temporary, contents)?;
        fs::rename(&temporary, &target)?;
        log::info!("wrote {}", target.display());
        Ok(target)
    }
}
