//! # webmercator-rs
//!
//! Coordinate math for Web Mercator mapping. Converts a location among five
//! representations: geographic degrees, projected meters, pixel coordinates at
//! a zoom level, 256x256 tile indices at a zoom level, and a radius-based
//! geodesic bounding box with its enclosed tile grid.
//!
//! There are three main entry points.
//!
//! ### 1. `Point` - Coordinate Conversion
//!
//! ```
//! use webmercator_rs::Point;
//!
//! let pt = Point::from_geo(35.771834, -78.677972);
//! assert_eq!(pt.tile_x(), Some(4611));
//! assert_eq!(pt.tile_y(), Some(6446));
//!
//! let pt = Point::builder().zoom_level(5).tiles(9, 12).build();
//! assert!(pt.has_coordinates());
//! ```
//!
//! ### 2. `BoundingBox` - Geodesic Envelopes
//!
//! ```
//! use webmercator_rs::{BoundingBox, Point};
//!
//! # fn main() -> Result<(), webmercator_rs::WebMercatorError> {
//! let center = Point::from_geo(35.771834, -78.677972);
//! let bb = BoundingBox::builder(&center).radius(2.5).build()?;
//!
//! for (tile_x, tile_y) in bb.tile_grid() {
//!     println!("{}/{}", tile_x, tile_y);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ### 3. `TileGrid` - Lazy Cell Enumeration
//!
//! ```
//! use webmercator_rs::TileGrid;
//!
//! let cells: Vec<_> = TileGrid::new((100, 100), 4, 4).collect();
//! assert_eq!(cells.len(), 25);
//! ```
//!
//! Unset coordinates are modeled as `Option::None`; a point exactly on the
//! equator or prime meridian converts correctly on every axis. Out-of-range
//! numeric inputs are clamped or wrapped, never rejected.

pub mod api;
pub mod core;
pub mod util;

pub use api::{BoundingBox, BoundingBoxBuilder, Point, PointBuilder, TileGrid, TileGridBuilder};
pub use crate::core::{
    DEFAULT_ZOOM_LEVEL, EARTH_CIRCUMFERENCE_METERS, EARTH_RADIUS_METERS, EARTH_RADIUS_MILES,
    MAX_ZOOM_LEVEL, MERCATOR_MAX_LATITUDE, MIN_ZOOM_LEVEL, TILE_SIZE,
};
pub use util::{Coordinate, WebMercatorError};

pub use geo_types;
