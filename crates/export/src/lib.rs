use std::{fmt, io};

pub mod csv;
pub mod geojson;
pub mod storage;
pub mod wkt;

#[derive(Debug)]
pub enum ExportError {
    /// Export requested with no captured points.
    NoPolygonData,
    /// A saved polygon needs a non-empty name.
    EmptyName,
    /// The name would escape the store directory.
    InvalidName,
    Json(serde_json::Error),
    Io(io::Error),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::NoPolygonData => write!(f, "no polygon data to export"),
            Self::EmptyName => write!(f, "a saved polygon needs a name"),
            Self::InvalidName => {
                write!(f, "a saved polygon name must not contain path separators")
            }
            Self::Json(why) => write!(f, "serialization failed: {why}"),
            Self::Io(why) => write!(f, "write failed: {why}"),
        }
    }
}

impl std::error::Error for ExportError {}

impl From<io::Error> for ExportError {
    fn from(why: io::Error) -> Self {
        Self::Io(why)
    }
}

impl From<serde_json::Error> for ExportError {
    fn from(why: serde_json::Error) -> Self {
        Self::Json(why)
    }
}

pub type ExportResult<O> = Result<O, ExportError>;
