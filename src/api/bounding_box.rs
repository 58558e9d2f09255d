use crate::api::point::Point;
use crate::api::tile_grid::TileGrid;
use crate::core::geodesic;
use crate::util::error::WebMercatorError;
use geo_types::{Rect, coord};
use serde::{Deserialize, Serialize};

/// Number of geodesic vertices placed around the center.
const VERTEX_COUNT: usize = 4;

/// A geodesic region around a center point, realized as an axis-aligned
/// latitude/longitude (and pixel/tile) envelope.
///
/// Four vertices are placed at equal great-circle distance from the center at
/// bearings 90, 180, 270 and 360 degrees; the envelope is the min/max over
/// those vertices. Distances are in miles, the unit of the geodesic Earth
/// radius used internally.
///
/// # Example
/// ```
/// use webmercator_rs::{BoundingBox, Point};
///
/// # fn main() -> Result<(), webmercator_rs::WebMercatorError> {
/// let center = Point::from_geo(35.771834, -78.677972);
/// let bb = BoundingBox::new(&center, 2.5)?;
/// assert_eq!(bb.diameter, 5.0);
/// assert!(bb.min_latitude() <= bb.max_latitude());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Center point, copied from the input point at the box's zoom level.
    /// Fixed at construction; later mutation of `zoom_level` does not cascade here.
    pub pt_center: Point,
    /// Zoom level governing all derived pixel/tile values.
    pub zoom_level: u8,
    /// Half-distance from center to each vertex, in miles.
    pub radius: f64,
    /// Always `2 * radius`.
    pub diameter: f64,
}

impl BoundingBox {
    pub fn builder(center: &Point) -> BoundingBoxBuilder {
        BoundingBoxBuilder::new(center)
    }

    /// Creates a box around `center` with the given radius in miles, at the
    /// center point's zoom level.
    ///
    /// Returns `InvalidArgument` if the center has no coordinates set.
    pub fn new(center: &Point, radius: f64) -> Result<Self, WebMercatorError> {
        Self::builder(center).radius(radius).build()
    }

    /// The four geodesic vertices at bearings 90, 180, 270 and 360 degrees
    /// from the center, each at `radius` miles, as geographic points at the
    /// default zoom level.
    pub fn box_vertices(&self) -> [Point; VERTEX_COUNT] {
        // center coordinates were validated at construction
        let latitude = self.pt_center.latitude().unwrap_or_default();
        let longitude = self.pt_center.longitude().unwrap_or_default();

        std::array::from_fn(|i| {
            let bearing = (360.0 / VERTEX_COUNT as f64) * (i + 1) as f64;
            let (lat, lon) = geodesic::destination(latitude, longitude, self.radius, bearing);
            Point::from_geo(lat, lon)
        })
    }

    pub fn min_longitude(&self) -> f64 {
        self.fold_vertices(Point::longitude, f64::min)
    }

    pub fn max_longitude(&self) -> f64 {
        self.fold_vertices(Point::longitude, f64::max)
    }

    pub fn min_latitude(&self) -> f64 {
        self.fold_vertices(Point::latitude, f64::min)
    }

    pub fn max_latitude(&self) -> f64 {
        self.fold_vertices(Point::latitude, f64::max)
    }

    fn fold_vertices(
        &self,
        axis: fn(&Point) -> Option<f64>,
        pick: fn(f64, f64) -> f64,
    ) -> f64 {
        self.box_vertices()
            .iter()
            .filter_map(axis)
            .reduce(pick)
            .unwrap_or_default()
    }

    /// The upper-left corner of the envelope, at the box's zoom level.
    pub fn vertex_top_left(&self) -> Point {
        Point::builder()
            .geo(self.max_latitude(), self.min_longitude())
            .zoom_level(self.zoom_level)
            .build()
    }

    /// The lower-right corner of the envelope, at the box's zoom level.
    pub fn vertex_bottom_right(&self) -> Point {
        Point::builder()
            .geo(self.min_latitude(), self.max_longitude())
            .zoom_level(self.zoom_level)
            .build()
    }

    pub fn min_pixel_x(&self) -> i64 {
        self.vertex_top_left().pixel_x().unwrap_or_default()
    }

    pub fn max_pixel_x(&self) -> i64 {
        self.vertex_bottom_right().pixel_x().unwrap_or_default()
    }

    pub fn min_pixel_y(&self) -> i64 {
        self.vertex_top_left().pixel_y().unwrap_or_default()
    }

    pub fn max_pixel_y(&self) -> i64 {
        self.vertex_bottom_right().pixel_y().unwrap_or_default()
    }

    pub fn min_tile_x(&self) -> i64 {
        self.vertex_top_left().tile_x().unwrap_or_default()
    }

    pub fn max_tile_x(&self) -> i64 {
        self.vertex_bottom_right().tile_x().unwrap_or_default()
    }

    pub fn min_tile_y(&self) -> i64 {
        self.vertex_top_left().tile_y().unwrap_or_default()
    }

    pub fn max_tile_y(&self) -> i64 {
        self.vertex_bottom_right().tile_y().unwrap_or_default()
    }

    /// Tile-index span covered on the x axis.
    pub fn tile_width(&self) -> i64 {
        self.max_tile_x() - self.min_tile_x()
    }

    /// Tile-index span covered on the y axis.
    pub fn tile_height(&self) -> i64 {
        self.max_tile_y() - self.min_tile_y()
    }

    /// Pixel width of the envelope, at least 1.
    pub fn pixel_width(&self) -> i64 {
        (self.max_pixel_x() - self.min_pixel_x()).max(1)
    }

    /// Pixel height of the envelope, at least 1.
    pub fn pixel_height(&self) -> i64 {
        (self.max_pixel_y() - self.min_pixel_y()).max(1)
    }

    /// A lazy iterator over every tile covered by the envelope,
    /// row-major from the top-left tile.
    pub fn tile_grid(&self) -> TileGrid {
        TileGrid::new(
            (self.min_tile_x(), self.min_tile_y()),
            self.tile_width(),
            self.tile_height(),
        )
    }

    /// Offset of an absolute pixel column into the box's local pixel space.
    pub fn relative_pixel_x(&self, value: i64) -> i64 {
        value - self.min_pixel_x()
    }

    /// Offset of an absolute pixel row into the box's local pixel space.
    pub fn relative_pixel_y(&self, value: i64) -> i64 {
        value - self.min_pixel_y()
    }

    /// The geographic envelope as a `geo_types::Rect` (x = longitude, y = latitude).
    pub fn to_rect(&self) -> Rect<f64> {
        Rect::new(
            coord! { x: self.min_longitude(), y: self.min_latitude() },
            coord! { x: self.max_longitude(), y: self.max_latitude() },
        )
    }
}

/// Builds a [`BoundingBox`] from a center point and a radius or diameter.
///
/// The zoom level defaults to the center point's. When both radius and
/// diameter are given, radius takes priority and the diameter is recomputed
/// from it.
#[derive(Debug, Clone)]
pub struct BoundingBoxBuilder {
    center: Point,
    zoom_level: Option<u8>,
    radius: Option<f64>,
    diameter: Option<f64>,
}

impl BoundingBoxBuilder {
    pub fn new(center: &Point) -> Self {
        Self {
            center: *center,
            zoom_level: None,
            radius: None,
            diameter: None,
        }
    }

    /// Half-distance from center to each vertex, in miles.
    pub fn radius(mut self, radius: f64) -> Self {
        self.radius = Some(radius);
        self
    }

    /// Full span of the box, in miles.
    pub fn diameter(mut self, diameter: f64) -> Self {
        self.diameter = Some(diameter);
        self
    }

    pub fn zoom_level(mut self, zoom_level: u8) -> Self {
        self.zoom_level = Some(zoom_level);
        self
    }

    /// Resolves the distance parameters and builds the box.
    ///
    /// Returns `InvalidArgument` if the center point has no coordinates, and
    /// `MissingArgument` if neither radius nor diameter was supplied.
    pub fn build(self) -> Result<BoundingBox, WebMercatorError> {
        if !self.center.has_coordinates() {
            return Err(WebMercatorError::InvalidArgument(
                "center point has no coordinates set".to_string(),
            ));
        }

        let (radius, diameter) = match (self.radius, self.diameter) {
            (Some(radius), _) => (radius, radius * 2.0),
            (None, Some(diameter)) => {
                let radius = if diameter > 0.0 { diameter / 2.0 } else { 0.0 };
                (radius, diameter)
            }
            (None, None) => {
                return Err(WebMercatorError::MissingArgument(
                    "either radius or diameter is required".to_string(),
                ));
            }
        };

        let zoom_level = self.zoom_level.unwrap_or_else(|| self.center.zoom_level());
        let pt_center = Point::builder()
            .geo(
                self.center.latitude().unwrap_or_default(),
                self.center.longitude().unwrap_or_default(),
            )
            .zoom_level(zoom_level)
            .build();

        Ok(BoundingBox {
            pt_center,
            zoom_level,
            radius,
            diameter,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LATITUDE: f64 = 35.771834;
    const LONGITUDE: f64 = -78.677972;
    const RADIUS: f64 = 2.5;
    const DIAMETER: f64 = 5.0;

    fn center() -> Point {
        Point::from_geo(LATITUDE, LONGITUDE)
    }

    #[test]
    fn test_new_with_radius() -> Result<(), WebMercatorError> {
        let bb = BoundingBox::new(&center(), RADIUS)?;
        assert_eq!(bb.radius, RADIUS);
        assert_eq!(bb.diameter, DIAMETER);
        Ok(())
    }

    #[test]
    fn test_builder_with_diameter() -> Result<(), WebMercatorError> {
        let bb = BoundingBox::builder(&center()).diameter(DIAMETER).build()?;
        assert_eq!(bb.diameter, DIAMETER);
        assert_eq!(bb.radius, RADIUS);
        Ok(())
    }

    #[test]
    fn test_radius_takes_priority_over_diameter() -> Result<(), WebMercatorError> {
        let bb = BoundingBox::builder(&center())
            .diameter(50.0)
            .radius(RADIUS)
            .build()?;
        assert_eq!(bb.radius, RADIUS);
        assert_eq!(bb.diameter, DIAMETER);
        Ok(())
    }

    #[test]
    fn test_non_positive_diameter_forces_zero_radius() -> Result<(), WebMercatorError> {
        let bb = BoundingBox::builder(&center()).diameter(-5.0).build()?;
        assert_eq!(bb.radius, 0.0);
        Ok(())
    }

    #[test]
    fn test_missing_distance_errors() {
        let result = BoundingBox::builder(&center()).build();
        assert!(matches!(result, Err(WebMercatorError::MissingArgument(_))));
    }

    #[test]
    fn test_center_without_coordinates_errors() {
        let result = BoundingBox::new(&Point::new(), RADIUS);
        assert!(matches!(result, Err(WebMercatorError::InvalidArgument(_))));
    }

    #[test]
    fn test_zoom_level_defaults_to_center() -> Result<(), WebMercatorError> {
        let bb = BoundingBox::new(&center(), RADIUS)?;
        assert_eq!(bb.pt_center.zoom_level(), center().zoom_level());
        Ok(())
    }

    #[test]
    fn test_zoom_level_override() -> Result<(), WebMercatorError> {
        let bb = BoundingBox::builder(&center())
            .radius(RADIUS)
            .zoom_level(10)
            .build()?;
        assert_eq!(bb.zoom_level, 10);
        assert_eq!(bb.pt_center.zoom_level(), 10);
        Ok(())
    }

    #[test]
    fn test_four_vertices() -> Result<(), WebMercatorError> {
        let bb = BoundingBox::new(&center(), RADIUS)?;
        let vertices = bb.box_vertices();
        assert_eq!(vertices.len(), 4);
        for vertex in &vertices {
            assert!(vertex.has_coordinates());
            assert_eq!(vertex.zoom_level(), 14);
        }
        Ok(())
    }

    #[test]
    fn test_envelope_ordering() -> Result<(), WebMercatorError> {
        let bb = BoundingBox::new(&center(), RADIUS)?;
        assert!(bb.min_longitude() <= bb.max_longitude());
        assert!(bb.min_latitude() <= bb.max_latitude());
        Ok(())
    }

    #[test]
    fn test_envelope_contains_center() -> Result<(), WebMercatorError> {
        let bb = BoundingBox::new(&center(), RADIUS)?;
        assert!(bb.min_longitude() < LONGITUDE && LONGITUDE < bb.max_longitude());
        assert!(bb.min_latitude() < LATITUDE && LATITUDE < bb.max_latitude());
        Ok(())
    }

    #[test]
    fn test_corner_points() -> Result<(), WebMercatorError> {
        let bb = BoundingBox::new(&center(), RADIUS)?;
        let top_left = bb.vertex_top_left();
        let bottom_right = bb.vertex_bottom_right();

        assert_eq!(top_left.latitude(), Some(bb.max_latitude()));
        assert_eq!(top_left.longitude(), Some(bb.min_longitude()));
        assert_eq!(bottom_right.latitude(), Some(bb.min_latitude()));
        assert_eq!(bottom_right.longitude(), Some(bb.max_longitude()));
        assert_eq!(top_left.zoom_level(), bb.zoom_level);
        Ok(())
    }

    #[test]
    fn test_pixel_envelope_ordering() -> Result<(), WebMercatorError> {
        let bb = BoundingBox::new(&center(), RADIUS)?;
        assert!(bb.min_pixel_x() <= bb.max_pixel_x());
        assert!(bb.min_pixel_y() <= bb.max_pixel_y());
        assert!(bb.min_tile_x() <= bb.max_tile_x());
        assert!(bb.min_tile_y() <= bb.max_tile_y());
        Ok(())
    }

    #[test]
    fn test_pixel_dimensions_at_least_one() -> Result<(), WebMercatorError> {
        let bb = BoundingBox::new(&center(), RADIUS)?;
        assert!(bb.pixel_width() >= 1);
        assert!(bb.pixel_height() >= 1);

        // even a degenerate box reports a 1x1 pixel canvas
        let bb = BoundingBox::new(&center(), 0.0)?;
        assert_eq!(bb.pixel_width(), 1);
        assert_eq!(bb.pixel_height(), 1);
        Ok(())
    }

    #[test]
    fn test_tile_grid_covers_envelope() -> Result<(), WebMercatorError> {
        let bb = BoundingBox::builder(&center()).diameter(DIAMETER).build()?;
        let tiles: Vec<_> = bb.tile_grid().collect();

        let expected = (bb.tile_width() + 1) * (bb.tile_height() + 1);
        assert_eq!(tiles.len() as i64, expected);
        assert_eq!(tiles[0], (bb.min_tile_x(), bb.min_tile_y()));
        assert_eq!(tiles[tiles.len() - 1], (bb.max_tile_x(), bb.max_tile_y()));
        Ok(())
    }

    #[test]
    fn test_relative_pixels() -> Result<(), WebMercatorError> {
        let bb = BoundingBox::new(&center(), RADIUS)?;
        assert_eq!(bb.relative_pixel_x(bb.min_pixel_x()), 0);
        assert_eq!(bb.relative_pixel_y(bb.min_pixel_y()), 0);
        assert_eq!(
            bb.relative_pixel_x(bb.max_pixel_x()),
            bb.max_pixel_x() - bb.min_pixel_x()
        );
        Ok(())
    }

    #[test]
    fn test_to_rect() -> Result<(), WebMercatorError> {
        let bb = BoundingBox::new(&center(), RADIUS)?;
        let rect = bb.to_rect();
        assert_eq!(rect.min().x, bb.min_longitude());
        assert_eq!(rect.max().y, bb.max_latitude());
        Ok(())
    }

    #[test]
    fn test_serde_round_trip() -> Result<(), WebMercatorError> {
        let bb = BoundingBox::new(&center(), RADIUS)?;
        let json = serde_json::to_string(&bb).unwrap();
        let back: BoundingBox = serde_json::from_str(&json).unwrap();
        assert_eq!(bb, back);
        Ok(())
    }
}
