//! WGS84 positions and per-round drift vectors.

use serde::{Deserialize, Serialize};

/// A WGS84 position in decimal degrees.
///
/// # Examples
/// ```
/// use travelverse_core::Coordinates;
///
/// let taj_mahal = Coordinates::new(27.1738, 78.0421);
/// assert!(taj_mahal.is_valid());
/// assert!(!Coordinates::new(91.0, 0.0).is_valid());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude in degrees, `-90.0..=90.0`.
    pub lat: f64,
    /// Longitude in degrees, `-180.0..=180.0`.
    pub lng: f64,
}

impl Coordinates {
    /// Construct a position without validation.
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Report whether both components are finite and inside WGS84 bounds.
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }

    /// Return the position moved by `velocity` once, kept inside WGS84
    /// bounds by [`Coordinates::normalised`].
    pub fn drifted(self, velocity: Velocity) -> Self {
        Self::new(self.lat + velocity.d_lat, self.lng + velocity.d_lng).normalised()
    }

    /// Clamp latitude to `-90.0..=90.0` and wrap longitude into
    /// `-180.0..=180.0`.
    ///
    /// In-range positions are returned unchanged, so `180.0` stays `180.0`.
    ///
    /// # Examples
    /// ```
    /// use travelverse_core::Coordinates;
    ///
    /// let past_the_pole = Coordinates::new(90.02, 180.5).normalised();
    /// assert_eq!(past_the_pole.lat, 90.0);
    /// assert!((past_the_pole.lng + 179.5).abs() < 1e-9);
    /// ```
    #[must_use]
    pub fn normalised(self) -> Self {
        let lng = if (-180.0..=180.0).contains(&self.lng) {
            self.lng
        } else {
            (self.lng + 180.0).rem_euclid(360.0) - 180.0
        };
        Self {
            lat: self.lat.clamp(-90.0, 90.0),
            lng,
        }
    }
}

/// Change in position applied on every optimisation round.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Velocity {
    /// Latitude change in degrees.
    #[serde(rename = "dLat")]
    pub d_lat: f64,
    /// Longitude change in degrees.
    #[serde(rename = "dLng")]
    pub d_lng: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Coordinates::new(90.0, 180.0), true)]
    #[case(Coordinates::new(-90.0, -180.0), true)]
    #[case(Coordinates::new(90.1, 0.0), false)]
    #[case(Coordinates::new(0.0, -180.5), false)]
    #[case(Coordinates::new(f64::NAN, 0.0), false)]
    #[case(Coordinates::new(0.0, f64::INFINITY), false)]
    fn validates_wgs84_bounds(#[case] position: Coordinates, #[case] expected: bool) {
        assert_eq!(position.is_valid(), expected);
    }

    #[rstest]
    #[case(Coordinates::new(89.9995, 179.9995), Coordinates::new(90.0, -179.9995))]
    #[case(Coordinates::new(-89.9995, -179.9995), Coordinates::new(-90.0, 179.9995))]
    #[case(Coordinates::new(10.0, 20.0), Coordinates::new(10.001, 20.001))]
    fn drift_stays_inside_wgs84(#[case] start: Coordinates, #[case] expected: Coordinates) {
        let step = if start.lat < 0.0 { -0.001 } else { 0.001 };
        let moved = start.drifted(Velocity {
            d_lat: step,
            d_lng: step,
        });
        assert!(moved.is_valid());
        assert!((moved.lat - expected.lat).abs() < 1e-9);
        assert!((moved.lng - expected.lng).abs() < 1e-9);
    }

    #[rstest]
    fn normalising_keeps_in_range_positions() {
        let edge = Coordinates::new(-90.0, 180.0);
        assert_eq!(edge.normalised(), edge);
    }

    #[test]
    fn velocity_uses_delta_field_names() {
        let json = serde_json::to_string(&Velocity {
            d_lat: 0.5,
            d_lng: -0.25,
        })
        .unwrap();
        assert_eq!(json, r#"{"dLat":0.5,"dLng":-0.25}"#);
    }
}
