pub mod area;
pub mod fix;
pub mod point;
pub mod saved;

pub use area::AreaResult;
pub use fix::Fix;
pub use point::GeoPoint;
pub use saved::SavedPolygon;
