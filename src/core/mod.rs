pub mod constants;
pub mod geodesic;
pub mod mercator;

pub use constants::{
    DEFAULT_ZOOM_LEVEL, EARTH_CIRCUMFERENCE_METERS, EARTH_RADIUS_METERS, EARTH_RADIUS_MILES,
    MAX_ZOOM_LEVEL, MERCATOR_MAX_LATITUDE, MIN_ZOOM_LEVEL, TILE_SIZE,
};
pub use geodesic::destination;
pub use mercator::{
    clamp_latitude, clamp_zoom_level, map_size, meters_per_pixel, meters_per_tile,
    normalize_longitude,
};
