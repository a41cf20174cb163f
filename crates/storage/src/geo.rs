/// Mean Earth radius used by the haversine formula.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A point on the globe, in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Great-circle distance between two coordinates, in kilometres.
pub fn distance_between(from: Coordinate, to: Coordinate) -> f64 {
    if from == to {
        return 0.0;
    }

    let d_lat = (to.latitude - from.latitude).to_radians();
    let d_lon = (to.longitude - from.longitude).to_radians();

    let a = ((d_lat / 2.0).sin().powi(2)
        + from.latitude.to_radians().cos()
            * to.latitude.to_radians().cos()
            * (d_lon / 2.0).sin().powi(2))
    .clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;

    const WARRINGTON: Coordinate = Coordinate {
        latitude: 53.3803913,
        longitude: -2.8861104,
    };
    const WIGAN: Coordinate = Coordinate {
        latitude: 53.5314963,
        longitude: -2.6618745,
    };

    #[test]
    fn test_identical_points_are_zero_apart() {
        assert_eq!(distance_between(WARRINGTON, WARRINGTON), 0.0);
        assert_eq!(distance_between(WIGAN, WIGAN), 0.0);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let there = distance_between(WARRINGTON, WIGAN);
        let back = distance_between(WIGAN, WARRINGTON);
        assert!((there - back).abs() < 1e-9);
    }

    #[test]
    fn test_known_distance_london_paris() {
        let london = Coordinate::new(51.5074, -0.1278);
        let paris = Coordinate::new(48.8566, 2.3522);
        let distance = distance_between(london, paris);
        assert!((distance - 343.5).abs() < 1.0, "got {distance}");
    }

    #[test]
    fn test_nearby_points_are_under_a_hundred_metres() {
        let shifted = Coordinate::new(WARRINGTON.latitude + 0.0005, WARRINGTON.longitude);
        let distance = distance_between(WARRINGTON, shifted);
        assert!(distance > 0.0 && distance < 0.1, "got {distance}");
    }

    #[test]
    fn test_antipodal_points() {
        let north = Coordinate::new(90.0, 0.0);
        let south = Coordinate::new(-90.0, 0.0);
        let distance = distance_between(north, south);
        assert!((distance - std::f64::consts::PI * EARTH_RADIUS_KM).abs() < 1e-6);
    }
}
