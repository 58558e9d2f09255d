use crate::core::constants::DEFAULT_ZOOM_LEVEL;
use crate::core::mercator;
use crate::util::coord::Coordinate;
use serde::{Deserialize, Serialize};

/// A single geographic location plus a zoom level, convertible among
/// geographic degrees, projected meters, pixel coordinates and tile indices.
///
/// Latitude and longitude are the single source of truth: every other
/// representation is derived from them on read, and writing a derived
/// representation back-converts into latitude/longitude immediately.
/// Both may be unset; derived getters then return `None`.
///
/// # Example
/// ```
/// use webmercator_rs::Point;
///
/// let pt = Point::from_geo(35.771834, -78.677972);
/// assert_eq!(pt.zoom_level(), 14);
/// assert_eq!(pt.pixel_x(), Some(1180487));
/// assert_eq!(pt.tile_x(), Some(4611));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    latitude: Option<f64>,
    longitude: Option<f64>,
    zoom_level: u8,
}

impl Point {
    /// Creates a point with no coordinates at the default zoom level (14).
    pub fn new() -> Self {
        Self {
            latitude: None,
            longitude: None,
            zoom_level: DEFAULT_ZOOM_LEVEL,
        }
    }

    pub fn builder() -> PointBuilder {
        PointBuilder::new()
    }

    /// Creates a point from geographic degrees at the default zoom level.
    /// Latitude is clamped to the Mercator range, longitude wrapped into [-180, 180].
    pub fn from_geo(latitude: f64, longitude: f64) -> Self {
        let mut point = Self::new();
        point.set_latitude(latitude);
        point.set_longitude(longitude);
        point
    }

    /// Creates a point from any [`Coordinate`] source (lon/lat tuple or
    /// `geo_types::Point`).
    ///
    /// # Example
    /// ```
    /// use webmercator_rs::Point;
    /// use geo_types::point;
    ///
    /// let pt = Point::from_coord(&point! { x: -78.677972, y: 35.771834 });
    /// assert_eq!(pt.longitude(), Some(-78.677972));
    /// ```
    pub fn from_coord<C: Coordinate>(coord: &C) -> Self {
        Self::from_geo(coord.latitude(), coord.longitude())
    }

    /// Creates a point from projected meters at the default zoom level.
    pub fn from_meters(meter_x: f64, meter_y: f64) -> Self {
        let mut point = Self::new();
        point.set_meter_x(meter_x);
        point.set_meter_y(meter_y);
        point
    }

    /// Creates a point from pixel coordinates at the given zoom level.
    pub fn from_pixels(pixel_x: i64, pixel_y: i64, zoom_level: u8) -> Self {
        let mut point = Self::new();
        point.set_zoom_level(zoom_level);
        point.set_pixel_x(pixel_x);
        point.set_pixel_y(pixel_y);
        point
    }

    /// Creates a point from tile indices at the given zoom level.
    pub fn from_tiles(tile_x: i64, tile_y: i64, zoom_level: u8) -> Self {
        let mut point = Self::new();
        point.set_zoom_level(zoom_level);
        point.set_tile_x(tile_x);
        point.set_tile_y(tile_y);
        point
    }

    pub fn latitude(&self) -> Option<f64> {
        self.latitude
    }

    /// Sets the latitude, clamping to the Mercator-projectable range.
    pub fn set_latitude(&mut self, value: f64) {
        self.latitude = Some(mercator::clamp_latitude(value));
    }

    pub fn longitude(&self) -> Option<f64> {
        self.longitude
    }

    /// Sets the longitude, wrapping into [-180, 180].
    pub fn set_longitude(&mut self, value: f64) {
        self.longitude = Some(mercator::normalize_longitude(value));
    }

    pub fn zoom_level(&self) -> u8 {
        self.zoom_level
    }

    /// Sets the zoom level, clamping into [1, 23].
    pub fn set_zoom_level(&mut self, value: u8) {
        self.zoom_level = mercator::clamp_zoom_level(value);
    }

    /// Whether both latitude and longitude are set.
    pub fn has_coordinates(&self) -> bool {
        self.latitude.is_some() && self.longitude.is_some()
    }

    /// Projected meters east of the prime meridian, to the nearest nanometer.
    pub fn meter_x(&self) -> Option<f64> {
        self.longitude.map(mercator::longitude_to_meter_x)
    }

    pub fn set_meter_x(&mut self, value: f64) {
        self.set_longitude(mercator::meter_x_to_longitude(value));
    }

    /// Projected meters north of the equator, to the nearest nanometer.
    pub fn meter_y(&self) -> Option<f64> {
        self.latitude.map(mercator::latitude_to_meter_y)
    }

    pub fn set_meter_y(&mut self, value: f64) {
        self.set_latitude(mercator::meter_y_to_latitude(value));
    }

    /// Pixel column at the current zoom level.
    pub fn pixel_x(&self) -> Option<i64> {
        self.longitude
            .map(|lon| mercator::longitude_to_pixel_x(lon, self.zoom_level))
    }

    /// Sets the longitude from a pixel column at the current zoom level.
    pub fn set_pixel_x(&mut self, value: i64) {
        self.set_longitude(mercator::pixel_x_to_longitude(value, self.zoom_level));
    }

    /// Pixel row at the current zoom level.
    pub fn pixel_y(&self) -> Option<i64> {
        self.latitude
            .map(|lat| mercator::latitude_to_pixel_y(lat, self.zoom_level))
    }

    /// Sets the latitude from a pixel row at the current zoom level.
    pub fn set_pixel_y(&mut self, value: i64) {
        self.set_latitude(mercator::pixel_y_to_latitude(value, self.zoom_level));
    }

    /// Tile column at the current zoom level.
    pub fn tile_x(&self) -> Option<i64> {
        self.pixel_x().map(mercator::pixel_to_tile)
    }

    pub fn set_tile_x(&mut self, value: i64) {
        self.set_pixel_x(mercator::tile_to_pixel(value));
    }

    /// Tile row at the current zoom level.
    pub fn tile_y(&self) -> Option<i64> {
        self.pixel_y().map(mercator::pixel_to_tile)
    }

    pub fn set_tile_y(&mut self, value: i64) {
        self.set_pixel_y(mercator::tile_to_pixel(value));
    }

    /// Side length of the square pixel plane at the current zoom level.
    pub fn map_size(&self) -> i64 {
        mercator::map_size(self.zoom_level)
    }

    /// Projected meters per pixel at the current zoom level.
    pub fn meters_per_pixel(&self) -> f64 {
        mercator::meters_per_pixel(self.zoom_level)
    }

    /// Projected meters per tile at the current zoom level.
    pub fn meters_per_tile(&self) -> f64 {
        mercator::meters_per_tile(self.zoom_level)
    }

    /// The location as a `geo_types::Point` (x = longitude, y = latitude),
    /// or `None` if either coordinate is unset.
    pub fn to_geo_point(&self) -> Option<geo_types::Point<f64>> {
        match (self.longitude, self.latitude) {
            (Some(lon), Some(lat)) => Some(geo_types::Point::new(lon, lat)),
            _ => None,
        }
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds a [`Point`] from any combination of input groups.
///
/// Groups are applied in a fixed order regardless of call order:
/// geo, then meters, then zoom level (default 14), then pixels, then tiles.
/// Later groups overwrite the latitude/longitude derived by earlier ones,
/// and pixel/tile inputs are interpreted at the resolved zoom level.
///
/// # Example
/// ```
/// use webmercator_rs::Point;
///
/// let pt = Point::builder().zoom_level(10).tiles(288, 402).build();
/// assert_eq!(pt.zoom_level(), 10);
/// assert_eq!(pt.tile_x(), Some(288));
/// ```
#[derive(Debug, Clone, Default)]
pub struct PointBuilder {
    geo: Option<(f64, f64)>,
    meters: Option<(f64, f64)>,
    zoom_level: Option<u8>,
    pixels: Option<(i64, i64)>,
    tiles: Option<(i64, i64)>,
}

impl PointBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn geo(mut self, latitude: f64, longitude: f64) -> Self {
        self.geo = Some((latitude, longitude));
        self
    }

    pub fn coord<C: Coordinate>(mut self, coord: &C) -> Self {
        self.geo = Some((coord.latitude(), coord.longitude()));
        self
    }

    pub fn meters(mut self, meter_x: f64, meter_y: f64) -> Self {
        self.meters = Some((meter_x, meter_y));
        self
    }

    pub fn zoom_level(mut self, zoom_level: u8) -> Self {
        self.zoom_level = Some(zoom_level);
        self
    }

    pub fn pixels(mut self, pixel_x: i64, pixel_y: i64) -> Self {
        self.pixels = Some((pixel_x, pixel_y));
        self
    }

    pub fn tiles(mut self, tile_x: i64, tile_y: i64) -> Self {
        self.tiles = Some((tile_x, tile_y));
        self
    }

    pub fn build(self) -> Point {
        let mut point = Point::new();
        if let Some((latitude, longitude)) = self.geo {
            point.set_latitude(latitude);
            point.set_longitude(longitude);
        }
        if let Some((meter_x, meter_y)) = self.meters {
            point.set_meter_x(meter_x);
            point.set_meter_y(meter_y);
        }
        if let Some(zoom_level) = self.zoom_level {
            point.set_zoom_level(zoom_level);
        }
        if let Some((pixel_x, pixel_y)) = self.pixels {
            point.set_pixel_x(pixel_x);
            point.set_pixel_y(pixel_y);
        }
        if let Some((tile_x, tile_y)) = self.tiles {
            point.set_tile_x(tile_x);
            point.set_tile_y(tile_y);
        }
        point
    }
}
