//! Generates random vaccination sites around a point.

use rand::Rng;

use crate::types::location::Location;
use crate::types::site::{Site, SiteSlots, Slot};
use crate::utils::haversine::EARTH_RADIUS_KM;

/// Upper bound of slots given to a generated site.
const MAX_SLOTS_PER_SITE: u32 = 8;

/// Generates `capacity` sites randomly placed within `radius_km` of
/// `location`.
///
/// Each site gets between 0 and [`MAX_SLOTS_PER_SITE`] slots, every 15
/// minutes from 9am.
pub fn generate_sites_near(location: &Location, radius_km: f64, capacity: i32) -> Vec<SiteSlots> {
    let mut rng = rand::thread_rng();
    let mut sites = Vec::new();
    for i in 0..capacity {
        let distance_km = rng.gen_range(0.0..=radius_km.max(0.0));
        let bearing = rng.gen_range(0.0..std::f64::consts::TAU);
        let slot_count = rng.gen_range(0..=MAX_SLOTS_PER_SITE);
        sites.push(SiteSlots {
            location: Site {
                name: format!("Site {}", i),
                display_address: format!("{} Example Street", i + 1),
                location: destination(location, distance_km, bearing),
            },
            slots: (0..slot_count)
                .map(|n| Slot::new(format!("{:02}:{:02}:00", 9 + n / 4, (n % 4) * 15)))
                .collect(),
        });
    }
    sites
}

/// The point reached by travelling `distance_km` from `origin` along the
/// initial `bearing` (radians, clockwise from north) on a great circle.
fn destination(origin: &Location, distance_km: f64, bearing: f64) -> Location {
    let angular = distance_km / EARTH_RADIUS_KM;
    let lat1 = origin.lat().to_radians();
    let lng1 = origin.lng().to_radians();

    let lat2 = (lat1.sin() * angular.cos() + lat1.cos() * angular.sin() * bearing.cos()).asin();
    let lng2 = lng1
        + (bearing.sin() * angular.sin() * lat1.cos()).atan2(angular.cos() - lat1.sin() * lat2.sin());

    Location::new(lat2.to_degrees(), lng2.to_degrees())
}
