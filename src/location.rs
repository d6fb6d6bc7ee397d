//! Locations and the keys the forecast cache stores them under.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of decimals coordinates are rounded to when building a cache key.
///
/// Three decimals is roughly 100 m, well below the forecast grid resolution.
pub const KEY_PRECISION: u32 = 3;

/// A named place with coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Display name (city, village, ...).
    pub name: String,
    /// Latitude in decimal degrees.
    #[serde(rename = "lat", alias = "latitude")]
    pub latitude: f64,
    /// Longitude in decimal degrees.
    #[serde(rename = "lon", alias = "longitude")]
    pub longitude: f64,
    /// Country name, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// First-level administrative region (state, county), if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin: Option<String>,
}

impl Location {
    /// Create a location without country information.
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.into(),
            latitude,
            longitude,
            country: None,
            admin: None,
        }
    }

    /// Set the country.
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    /// Set the administrative region.
    pub fn with_admin(mut self, admin: impl Into<String>) -> Self {
        self.admin = Some(admin.into());
        self
    }

    /// The location Zagreb, used when nothing else is configured.
    pub fn zagreb() -> Self {
        Self::new("Zagreb", 45.815, 15.982).with_country("Croatia")
    }

    /// Whether the coordinates are finite and within range.
    pub fn has_valid_coordinates(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }

    /// Coordinates rounded to `precision` decimals.
    pub fn rounded_coordinates(&self, precision: u32) -> (f64, f64) {
        let multiplier = 10_f64.powi(precision as i32);
        let lat = (self.latitude * multiplier).round() / multiplier;
        let lon = (self.longitude * multiplier).round() / multiplier;
        (lat, lon)
    }

    /// Cache key derived from the rounded coordinates.
    pub fn cache_key(&self) -> LocationKey {
        LocationKey::from_coordinates(self.latitude, self.longitude)
    }

    /// "Name, Country" or just the name.
    pub fn display_name(&self) -> String {
        match &self.country {
            Some(country) if !country.is_empty() => format!("{}, {}", self.name, country),
            _ => self.name.clone(),
        }
    }

    /// Coordinates formatted for display.
    pub fn format_coordinates(&self) -> String {
        format!("{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

/// Identity of a cache slot.
///
/// Usually derived from rounded coordinates (`"45.815,15.982"`), so two
/// searches landing on the same place share one entry. An explicit string
/// can be used instead.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocationKey(String);

impl LocationKey {
    /// Use an explicit key string.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Build a key from coordinates rounded to [`KEY_PRECISION`] decimals.
    pub fn from_coordinates(latitude: f64, longitude: f64) -> Self {
        let (lat, lon) =
            Location::new("", latitude, longitude).rounded_coordinates(KEY_PRECISION);
        // Normalise -0.0 so it does not produce a separate key.
        let lat = if lat == 0.0 { 0.0 } else { lat };
        let lon = if lon == 0.0 { 0.0 } else { lon };
        Self(format!("{:.3},{:.3}", lat, lon))
    }

    /// The key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LocationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&Location> for LocationKey {
    fn from(location: &Location) -> Self {
        location.cache_key()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zagreb_key_uses_three_decimals() {
        assert_eq!(Location::zagreb().cache_key().as_str(), "45.815,15.982");
    }

    #[test]
    fn nearby_coordinates_share_a_key() {
        let a = Location::new("A", 45.81512, 15.98201);
        let b = Location::new("B", 45.81498, 15.98249);
        assert_eq!(a.cache_key(), b.cache_key());
    }

    #[test]
    fn distant_coordinates_differ() {
        let a = Location::new("A", 45.815, 15.982);
        let b = Location::new("B", 45.816, 15.982);
        assert_ne!(a.cache_key(), b.cache_key());
    }

    #[test]
    fn negative_zero_is_normalised() {
        let key = LocationKey::from_coordinates(-0.0001, 0.0);
        assert_eq!(key.as_str(), "0.000,0.000");
    }

    #[test]
    fn explicit_key_is_kept_verbatim() {
        let key = LocationKey::new("home");
        assert_eq!(key.to_string(), "home");
    }

    #[test]
    fn coordinate_validation() {
        assert!(Location::zagreb().has_valid_coordinates());
        assert!(!Location::new("x", 90.5, 0.0).has_valid_coordinates());
        assert!(!Location::new("x", 0.0, -180.1).has_valid_coordinates());
        assert!(!Location::new("x", f64::NAN, 0.0).has_valid_coordinates());
    }

    #[test]
    fn display_name_includes_country() {
        assert_eq!(Location::zagreb().display_name(), "Zagreb, Croatia");
        assert_eq!(Location::new("Nowhere", 0.0, 0.0).display_name(), "Nowhere");
    }

    #[test]
    fn serializes_with_short_coordinate_names() {
        let json = serde_json::to_value(Location::zagreb()).unwrap();
        assert_eq!(json["lat"], 45.815);
        assert_eq!(json["lon"], 15.982);
        assert!(json.get("admin").is_none());
    }

    #[test]
    fn deserializes_long_coordinate_names() {
        let loc: Location =
            serde_json::from_str(r#"{"name":"Split","latitude":43.5,"longitude":16.44}"#)
                .unwrap();
        assert_eq!(loc.latitude, 43.5);
        assert!(loc.country.is_none());
    }
}
