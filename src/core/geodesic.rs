use crate::core::constants::EARTH_RADIUS_MILES;

/// Computes the destination point reached by traveling a great-circle
/// distance at a bearing from a starting location.
///
/// Formula from <https://www.movable-type.co.uk/scripts/latlong.html#destPoint>:
///
/// ```text
/// lat2 = asin( sin(lat1)*cos(d/R) + cos(lat1)*sin(d/R)*cos(bearing) )
/// lon2 = lon1 + atan2( sin(bearing)*sin(d/R)*cos(lat1), cos(d/R) - sin(lat1)*sin(lat2) )
/// ```
///
/// Bearing is clockwise from north, in degrees. Distance is in miles, matching
/// [`EARTH_RADIUS_MILES`]. Returns `(latitude, longitude)` in degrees, not yet
/// clamped or normalized.
pub fn destination(
    latitude: f64,
    longitude: f64,
    distance_miles: f64,
    bearing_degrees: f64,
) -> (f64, f64) {
    let lat1 = latitude.to_radians();
    let lon1 = longitude.to_radians();
    let bearing = bearing_degrees.to_radians();
    let angular = distance_miles / EARTH_RADIUS_MILES;

    let lat2 = (lat1.sin() * angular.cos() + lat1.cos() * angular.sin() * bearing.cos()).asin();
    let lon2 = lon1
        + (bearing.sin() * angular.sin() * lat1.cos())
            .atan2(angular.cos() - lat1.sin() * lat2.sin());

    (lat2.to_degrees(), lon2.to_degrees())
}

#[cfg(test)]
mod tests {
    use super::*;

    const LATITUDE: f64 = 35.771834;
    const LONGITUDE: f64 = -78.677972;

    #[test]
    fn test_zero_distance_is_identity() {
        let (lat, lon) = destination(LATITUDE, LONGITUDE, 0.0, 90.0);
        assert!((lat - LATITUDE).abs() < 1e-9);
        assert!((lon - LONGITUDE).abs() < 1e-9);
    }

    #[test]
    fn test_due_north_preserves_longitude() {
        let (lat, lon) = destination(LATITUDE, LONGITUDE, 2.5, 360.0);
        assert!(lat > LATITUDE);
        assert!((lon - LONGITUDE).abs() < 1e-9);
    }

    #[test]
    fn test_due_south_preserves_longitude() {
        let (lat, lon) = destination(LATITUDE, LONGITUDE, 2.5, 180.0);
        assert!(lat < LATITUDE);
        assert!((lon - LONGITUDE).abs() < 1e-9);
    }

    #[test]
    fn test_due_east_moves_east() {
        let (lat, lon) = destination(LATITUDE, LONGITUDE, 2.5, 90.0);
        assert!(lon > LONGITUDE);
        // a due-east great-circle leg barely changes latitude
        assert!((lat - LATITUDE).abs() < 0.001);
    }

    #[test]
    fn test_distance_scales_offset() {
        let (lat_near, _) = destination(LATITUDE, LONGITUDE, 1.0, 360.0);
        let (lat_far, _) = destination(LATITUDE, LONGITUDE, 10.0, 360.0);
        assert!(lat_far - LATITUDE > (lat_near - LATITUDE) * 9.0);
    }

    #[test]
    fn test_quarter_circumference_from_equator() {
        // From the equator, traveling a quarter of the circumference due north
        // lands on the pole.
        let quarter = EARTH_RADIUS_MILES * std::f64::consts::FRAC_PI_2;
        let (lat, _) = destination(0.0, 0.0, quarter, 360.0);
        assert!((lat - 90.0).abs() < 1e-6);
    }
}
