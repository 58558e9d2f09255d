pub mod coord;
pub mod error;
pub mod round;

pub use coord::Coordinate;
pub use error::WebMercatorError;
pub(crate) use round::round_to_places;
