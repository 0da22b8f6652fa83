use tracing::trace;

pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// A point in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// `None` unless both values are finite and within ±90 / ±180.
    pub fn new(latitude: f64, longitude: f64) -> Option<Self> {
        let valid = latitude.is_finite()
            && longitude.is_finite()
            && (-90.0..=90.0).contains(&latitude)
            && (-180.0..=180.0).contains(&longitude);

        valid.then_some(Self {
            latitude,
            longitude,
        })
    }

    /// From the string-encoded degrees the source sends
    pub fn parse(latitude: &str, longitude: &str) -> Option<Self> {
        let parsed = latitude
            .trim()
            .parse::<f64>()
            .ok()
            .zip(longitude.trim().parse::<f64>().ok())
            .and_then(|(lat, lng)| Self::new(lat, lng));

        if parsed.is_none() {
            trace!("Invalid coordinates '{}', '{}'", latitude, longitude);
        }

        parsed
    }

    /// Great-circle distance in meters (haversine)
    pub fn distance_to(&self, other: &Coordinates) -> f64 {
        haversine_distance_meters(self, other)
    }
}

/// Great-circle distance between two points, in meters.
pub fn haversine_distance_meters(from: &Coordinates, to: &Coordinates) -> f64 {
    let lat1 = from.latitude.to_radians();
    let lat2 = to.latitude.to_radians();
    let dlat = (to.latitude - from.latitude).to_radians();
    let dlng = (to.longitude - from.longitude).to_radians();

    let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_METERS * c
}
