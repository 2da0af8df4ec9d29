//! Query state and view logic of the timetable.
//!
//! A [`CalendarSource`] supplies the days with availability around a
//! [`SearchQuery`]. The calendar view shows one [`DaySummary`] per day;
//! opening a day lists its sites that still have slots, nearest first.

use thiserror::Error;

use crate::algorithms::ranking::rank_by_distance;
use crate::types::calendar::DayAvailability;
use crate::types::location::{AsLocation, Location};
use crate::types::site::SiteSlots;
use crate::utils::haversine;

/// Auckland CBD, used until the user shares their position.
pub static AUCKLAND_CBD: Location = Location::new(-36.853610199274385, 174.76054541484535);

/// Radius searched until the user picks another.
pub const DEFAULT_RADIUS_KM: f64 = 30.0;

/// The radii a user can pick from.
pub const RADIUS_OPTIONS_KM: [f64; 3] = [30.0, 60.0, 90.0];

/// Errors raised while reading calendar data.
#[derive(Debug, Error)]
pub enum TimetableError {
    #[error("failed to decode calendar payload: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid date {0:?}, expected yyyy-MM-dd")]
    InvalidDate(String),

    #[error("invalid slot time {0:?}, expected HH:mm:ss")]
    InvalidSlotTime(String),
}

/// Where to look for appointments.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SearchQuery {
    /// The reference point distances are measured from.
    pub location: Location,
    /// Only sites within this many kilometers are returned.
    pub radius_km: f64,
}

impl Default for SearchQuery {
    fn default() -> Self {
        SearchQuery {
            location: AUCKLAND_CBD,
            radius_km: DEFAULT_RADIUS_KM,
        }
    }
}

impl SearchQuery {
    /// Replaces the reference point, e.g. with a geolocation fix.
    pub fn with_location(self, latitude: f64, longitude: f64) -> Self {
        SearchQuery {
            location: Location::new(latitude, longitude),
            ..self
        }
    }

    /// Replaces the search radius.
    pub fn with_radius(self, radius_km: f64) -> Self {
        SearchQuery { radius_km, ..self }
    }
}

/// Supplies calendar data for a query. Implemented by the client of the
/// third-party calendar API.
pub trait CalendarSource {
    fn calendar(&self, query: &SearchQuery) -> Result<Vec<DayAvailability>, TimetableError>;
}

/// A [`CalendarSource`] backed by calendar data held in memory.
#[derive(Debug, Clone, Default)]
pub struct StaticCalendar {
    days: Vec<DayAvailability>,
}

impl StaticCalendar {
    pub fn new(days: Vec<DayAvailability>) -> Self {
        StaticCalendar { days }
    }

    /// Decodes a calendar API response: a JSON array of days.
    pub fn from_json(payload: &str) -> Result<Self, TimetableError> {
        let days: Vec<DayAvailability> = serde_json::from_str(payload)?;
        debug!("decoded {} calendar days", days.len());
        Ok(StaticCalendar::new(days))
    }
}

impl CalendarSource for StaticCalendar {
    /// Returns the days with at least one site within the query radius,
    /// keeping only those sites.
    fn calendar(&self, query: &SearchQuery) -> Result<Vec<DayAvailability>, TimetableError> {
        let days = self
            .days
            .iter()
            .map(|day| DayAvailability {
                date_str: day.date_str.clone(),
                location_slots_pairs: day
                    .location_slots_pairs
                    .iter()
                    .filter(|pair| {
                        haversine::distance(&query.location, pair.as_location()) <= query.radius_km
                    })
                    .cloned()
                    .collect(),
            })
            .filter(|day| !day.location_slots_pairs.is_empty())
            .collect();
        Ok(days)
    }
}

/// One cell of the calendar view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySummary {
    pub date_str: String,
    pub available: usize,
}

/// A site listed in the day view.
#[derive(Debug, Clone, PartialEq)]
pub struct NearbySite<'a> {
    pub site: &'a SiteSlots,
    /// Distance from the reference point in kilometers.
    pub distance_km: f64,
}

impl NearbySite<'_> {
    /// Distance rounded down to whole kilometers, as displayed.
    pub fn whole_km(&self) -> u64 {
        self.distance_km.floor() as u64
    }
}

/// Fetches the calendar for `query` from `source`.
pub fn load_calendar(
    source: &impl CalendarSource,
    query: &SearchQuery,
) -> Result<Vec<DayAvailability>, TimetableError> {
    info!(
        "Loading calendar within {} km of {}, {}",
        query.radius_km,
        query.location.lat(),
        query.location.lng()
    );
    let days = source.calendar(query)?;
    debug!("days: {:?}", days.iter().map(|d| &d.date_str).collect::<Vec<_>>());
    info!("Loaded {} calendar days", days.len());
    Ok(days)
}

/// Summarizes each day as its date and total available slots.
pub fn summarize(days: &[DayAvailability]) -> Vec<DaySummary> {
    days.iter()
        .map(|day| DaySummary {
            date_str: day.date_str.clone(),
            available: day.available_slot_count(),
        })
        .collect()
}

/// Finds the day with the given `yyyy-MM-dd` date.
pub fn find_day<'a>(days: &'a [DayAvailability], date_str: &str) -> Option<&'a DayAvailability> {
    days.iter().find(|day| day.date_str == date_str)
}

/// Lists the sites of `day` that have slots, nearest to `reference`
/// first.
pub fn open_day<'a>(day: &'a DayAvailability, reference: &Location) -> Vec<NearbySite<'a>> {
    debug!("Opening {} from {:?}", day.date_str, reference);
    rank_by_distance(&day.location_slots_pairs, reference)
        .into_iter()
        .filter(|pair| pair.has_slots())
        .map(|site| NearbySite {
            site,
            distance_km: haversine::distance(reference, site.as_location()),
        })
        .collect()
}
