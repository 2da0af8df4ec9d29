//! Struct definitions and implementations for [`Location`].
//!
//! Anything that sits somewhere on the map can be ranked by distance.
//! Since Rust doesn't have a built-in way to represent an interface
//! type, we use an [`AsLocation`] trait to achieve the similar effect.
//! A function may take an `AsLocation` parameter and call its
//! [`as_location`](`AsLocation::as_location`) method to get a
//! [`Location`] reference, without caring about the concrete type.

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// A [`Location`] represents a point on the Earth's surface in decimal
/// degrees.
///
/// Latitude is expected in [-90, 90] and longitude in [-180, 180], but
/// neither is enforced. Out-of-range values are carried as-is and only
/// produce meaningless distances.
///
/// Serialized as `{ "lat": .., "lng": .. }`, the shape used by the
/// calendar API.
#[derive(Debug, PartialEq, Hash, Eq, Copy, Clone, Serialize, Deserialize)]
pub struct Location {
    /// The latitude of the location.
    #[serde(rename = "lat")]
    pub latitude: OrderedFloat<f64>,

    /// The longitude of the location.
    #[serde(rename = "lng")]
    pub longitude: OrderedFloat<f64>,
}

impl Location {
    /// Creates a location from a latitude/longitude pair.
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Location {
            latitude: OrderedFloat(latitude),
            longitude: OrderedFloat(longitude),
        }
    }

    pub fn lat(&self) -> f64 {
        self.latitude.into_inner()
    }

    pub fn lng(&self) -> f64 {
        self.longitude.into_inner()
    }
}

/// Since Rust doesn't allow for inheritance, we need to use `trait` as
/// a hack to allow passing "Location-like" objects to functions.
pub trait AsLocation {
    /// Returns the coordinate the object sits at.
    fn as_location(&self) -> &Location;
}

impl AsLocation for Location {
    fn as_location(&self) -> &Location {
        self
    }
}

impl<T: AsLocation + ?Sized> AsLocation for &T {
    fn as_location(&self) -> &Location {
        (**self).as_location()
    }
}

#[cfg(test)]
mod location_tests {
    use super::*;

    #[test]
    fn test_deserialize_api_shape() {
        let location: Location =
            serde_json::from_str(r#"{ "lat": -36.8485, "lng": 174.7633 }"#).unwrap();
        assert_eq!(location, Location::new(-36.8485, 174.7633));
        assert_eq!(location.lat(), -36.8485);
        assert_eq!(location.lng(), 174.7633);
    }

    #[test]
    fn test_location_as_location() {
        let location = Location::new(-41.2865, 174.7762);
        assert_eq!(location.as_location(), &location);
        assert_eq!((&location).as_location(), &location);
    }

    /// Out-of-range values are not rejected.
    #[test]
    fn test_out_of_range_is_kept() {
        let location = Location::new(123.0, -500.0);
        assert_eq!(location.lat(), 123.0);
        assert_eq!(location.lng(), -500.0);
    }
}
