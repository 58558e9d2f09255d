pub mod bounding_box;
pub mod point;
pub mod tile_grid;

pub use bounding_box::{BoundingBox, BoundingBoxBuilder};
pub use point::{Point, PointBuilder};
pub use tile_grid::{TileGrid, TileGridBuilder};
