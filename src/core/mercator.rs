use crate::core::constants::{
    DEGREE_DECIMAL_PLACES, EARTH_CIRCUMFERENCE_METERS, EARTH_RADIUS_METERS, MAX_ZOOM_LEVEL,
    MERCATOR_MAX_LATITUDE, METER_DECIMAL_PLACES, MIN_ZOOM_LEVEL, TILE_SIZE,
};
use crate::util::round_to_places;
use std::f64::consts::{FRAC_PI_4, PI};

/// Clamps a latitude to the Mercator-projectable range and rounds it
/// to degree precision. Out-of-range values saturate rather than error.
pub fn clamp_latitude(value: f64) -> f64 {
    round_to_places(
        value.clamp(-MERCATOR_MAX_LATITUDE, MERCATOR_MAX_LATITUDE),
        DEGREE_DECIMAL_PLACES,
    )
}

/// Wraps a longitude into [-180, 180] and rounds it to degree precision.
pub fn normalize_longitude(value: f64) -> f64 {
    let mut value = value;
    while value < -180.0 {
        value += 360.0;
    }
    while value > 180.0 {
        value -= 360.0;
    }
    round_to_places(value, DEGREE_DECIMAL_PLACES)
}

/// Clamps a zoom level into the supported range.
pub fn clamp_zoom_level(value: u8) -> u8 {
    value.clamp(MIN_ZOOM_LEVEL, MAX_ZOOM_LEVEL)
}

/// Side length of the square pixel plane at a zoom level.
pub fn map_size(zoom_level: u8) -> i64 {
    TILE_SIZE * (1i64 << zoom_level)
}

/// Projected meters per pixel at a zoom level (Web Mercator meters, not ground meters).
pub fn meters_per_pixel(zoom_level: u8) -> f64 {
    EARTH_CIRCUMFERENCE_METERS / map_size(zoom_level) as f64
}

/// Projected meters per tile at a zoom level.
pub fn meters_per_tile(zoom_level: u8) -> f64 {
    meters_per_pixel(zoom_level) * TILE_SIZE as f64
}

/// Forward projection of a longitude to meters east of the prime meridian,
/// rounded to the nearest nanometer.
pub fn longitude_to_meter_x(longitude: f64) -> f64 {
    round_to_places(
        (longitude / 360.0) * EARTH_CIRCUMFERENCE_METERS,
        METER_DECIMAL_PLACES,
    )
}

/// Forward projection of a latitude to meters north of the equator,
/// rounded to the nearest nanometer.
pub fn latitude_to_meter_y(latitude: f64) -> f64 {
    let meter_y = (FRAC_PI_4 + latitude.to_radians() / 2.0).tan().ln() * EARTH_RADIUS_METERS;
    round_to_places(meter_y, METER_DECIMAL_PLACES)
}

/// Inverse projection of a meter x value to a longitude.
/// The result is not yet normalized.
pub fn meter_x_to_longitude(meter_x: f64) -> f64 {
    (meter_x * 360.0) / EARTH_CIRCUMFERENCE_METERS
}

/// Inverse projection of a meter y value to a latitude.
/// The result is not yet clamped.
pub fn meter_y_to_latitude(meter_y: f64) -> f64 {
    (2.0 * (meter_y / EARTH_RADIUS_METERS).exp().atan() - PI / 2.0).to_degrees()
}

/// Pixel column of a longitude at a zoom level.
pub fn longitude_to_pixel_x(longitude: f64, zoom_level: u8) -> i64 {
    (((longitude + 180.0) / 360.0) * map_size(zoom_level) as f64).round() as i64
}

/// Pixel row of a latitude at a zoom level.
pub fn latitude_to_pixel_y(latitude: f64, zoom_level: u8) -> i64 {
    let sin_lat = latitude.to_radians().sin();
    let y = 0.5 - ((1.0 + sin_lat) / (1.0 - sin_lat)).ln() / (4.0 * PI);
    (y * map_size(zoom_level) as f64).round() as i64
}

/// Longitude of a pixel column at a zoom level. The result is not yet normalized.
pub fn pixel_x_to_longitude(pixel_x: i64, zoom_level: u8) -> f64 {
    360.0 * (pixel_x as f64 / map_size(zoom_level) as f64 - 0.5)
}

/// Latitude of a pixel row at a zoom level. The result is not yet clamped.
pub fn pixel_y_to_latitude(pixel_y: i64, zoom_level: u8) -> f64 {
    let y = 0.5 - pixel_y as f64 / map_size(zoom_level) as f64;
    90.0 - 360.0 * (-y * 2.0 * PI).exp().atan() / PI
}

/// Tile index of a pixel coordinate.
pub fn pixel_to_tile(pixel: i64) -> i64 {
    pixel.div_euclid(TILE_SIZE)
}

/// Pixel coordinate of a tile's left/top edge.
pub fn tile_to_pixel(tile: i64) -> i64 {
    tile * TILE_SIZE
}
