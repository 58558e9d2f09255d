use geo_types::Point;

/// Anything that can supply a longitude/latitude pair in degrees.
///
/// Implemented for `(f64, f64)` tuples ordered `(longitude, latitude)` and for
/// `geo_types::Point<f64>` with `x` as longitude and `y` as latitude.
pub trait Coordinate {
    fn longitude(&self) -> f64;
    fn latitude(&self) -> f64;
}

impl Coordinate for (f64, f64) {
    fn longitude(&self) -> f64 {
        self.0
    }
    fn latitude(&self) -> f64 {
        self.1
    }
}

impl Coordinate for Point<f64> {
    fn longitude(&self) -> f64 {
        self.x()
    }
    fn latitude(&self) -> f64 {
        self.y()
    }
}
