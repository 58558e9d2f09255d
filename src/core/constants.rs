/// Earth radius used by the spherical Mercator projection, in meters
pub const EARTH_RADIUS_METERS: f64 = 6378137.0;

/// Earth circumference at the equator, in meters
pub const EARTH_CIRCUMFERENCE_METERS: f64 = EARTH_RADIUS_METERS * 2.0 * std::f64::consts::PI;

/// Earth radius used by the geodesic destination-point formula, in miles
pub const EARTH_RADIUS_MILES: f64 = 3959.0;

/// Latitude at which the Mercator projection becomes singular
pub const MERCATOR_MAX_LATITUDE: f64 = 85.05112878;

/// Width and height of a map tile, in pixels
pub const TILE_SIZE: i64 = 256;

/// Minimum zoom level
pub const MIN_ZOOM_LEVEL: u8 = 1;

/// Maximum zoom level
pub const MAX_ZOOM_LEVEL: u8 = 23;

/// Zoom level used when none is supplied
pub const DEFAULT_ZOOM_LEVEL: u8 = 14;

/// Decimal places kept on latitude/longitude values (sub-millimeter on the ground)
pub(crate) const DEGREE_DECIMAL_PLACES: i32 = 8;

/// Decimal places kept on projected meter values (nanometer)
pub(crate) const METER_DECIMAL_PLACES: i32 = 9;
