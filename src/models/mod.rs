//! Core data model: coordinates, named locations and bounding boxes

pub mod bounding_box;
pub mod location;
pub mod point;

pub use bounding_box::BoundingBox;
pub use location::Location;
pub use point::Point;
