/// Rounds a value to the given number of decimal places.
pub(crate) fn round_to_places(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_places() {
        assert_eq!(round_to_places(1.234567891234, 8), 1.23456789);
        assert_eq!(round_to_places(-1.234567895, 8), -1.2345679);
        assert_eq!(round_to_places(42.0, 9), 42.0);
    }

    #[test]
    fn test_round_preserves_short_values() {
        assert_eq!(round_to_places(-78.677972, 8), -78.677972);
        assert_eq!(round_to_places(35.771834, 8), 35.771834);
    }
}
