pub mod geometry;
pub mod rounding;

pub use geometry::GeometryHelper;
pub use rounding::RoundingHelper;
