//! Struct definitions and implementations for vaccination sites and the
//! slots they offer.
//!
//! The most generic form of a site is [`Site`]: a named place with an
//! address and a [`Location`]. For a given day, the calendar pairs each
//! site with its open [`Slot`]s as a [`SiteSlots`].
//!
//! Both implement [`AsLocation`], so they can be handed to the ranker
//! directly.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use super::location::{AsLocation, Location};
use crate::utils::timetable::TimetableError;

/// Wire format of [`Slot::local_start_time`].
pub const SLOT_TIME_FORMAT: &str = "%H:%M:%S";

/// Display format of a slot, e.g. `09:30 am`.
pub const SLOT_DISPLAY_FORMAT: &str = "%I:%M %P";

/// A single bookable time on a given day at a given site.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slot {
    /// Local wall-clock time in `HH:mm:ss`.
    pub local_start_time: String,
}

impl Slot {
    pub fn new(local_start_time: impl Into<String>) -> Self {
        Slot {
            local_start_time: local_start_time.into(),
        }
    }

    /// Parses the local start time.
    pub fn start_time(&self) -> Result<NaiveTime, TimetableError> {
        NaiveTime::parse_from_str(&self.local_start_time, SLOT_TIME_FORMAT)
            .map_err(|_| TimetableError::InvalidSlotTime(self.local_start_time.clone()))
    }

    /// Renders the start time as a 12-hour clock time.
    pub fn display_time(&self) -> Result<String, TimetableError> {
        Ok(self.start_time()?.format(SLOT_DISPLAY_FORMAT).to_string())
    }
}

/// A vaccination site.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Site {
    pub name: String,

    /// Human readable street address.
    pub display_address: String,

    /// Denotes the geographical position of the site.
    pub location: Location,
}

impl AsLocation for Site {
    fn as_location(&self) -> &Location {
        &self.location
    }
}

/// A site together with the slots it offers on one day.
///
/// The calendar API omits `slots` for sites that have none, which is
/// read as an empty list.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteSlots {
    pub location: Site,

    #[serde(default)]
    pub slots: Vec<Slot>,
}

impl SiteSlots {
    pub fn has_slots(&self) -> bool {
        !self.slots.is_empty()
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }
}

impl AsLocation for SiteSlots {
    fn as_location(&self) -> &Location {
        self.location.as_location()
    }
}

#[cfg(test)]
mod site_tests {
    use super::*;

    const PAYLOAD: &str = r#"{
        "location": {
            "name": "Murihiku Medical Services",
            "displayAddress": "Level 1, 112 Don Street, Invercargill",
            "location": { "lat": -46.4118, "lng": 168.3538 }
        },
        "slots": [
            { "localStartTime": "09:30:00" },
            { "localStartTime": "13:05:00" }
        ]
    }"#;

    #[test]
    fn test_deserialize_site_slots() {
        let pair: SiteSlots = serde_json::from_str(PAYLOAD).unwrap();
        assert_eq!(pair.location.name, "Murihiku Medical Services");
        assert_eq!(
            pair.location.display_address,
            "Level 1, 112 Don Street, Invercargill"
        );
        assert_eq!(pair.as_location(), &Location::new(-46.4118, 168.3538));
        assert_eq!(pair.slot_count(), 2);
        assert!(pair.has_slots());
    }

    #[test]
    fn test_missing_slots_is_empty() {
        let pair: SiteSlots = serde_json::from_str(
            r#"{ "location": { "name": "A", "displayAddress": "B",
                 "location": { "lat": 0.0, "lng": 0.0 } } }"#,
        )
        .unwrap();
        assert!(!pair.has_slots());
        assert_eq!(pair.slot_count(), 0);
    }

    #[test]
    fn test_slot_display_time() {
        assert_eq!(Slot::new("09:30:00").display_time().unwrap(), "09:30 am");
        assert_eq!(Slot::new("13:05:00").display_time().unwrap(), "01:05 pm");
        assert_eq!(Slot::new("00:00:00").display_time().unwrap(), "12:00 am");
    }

    #[test]
    fn test_invalid_slot_time() {
        let err = Slot::new("half past nine").start_time().unwrap_err();
        assert!(matches!(err, TimetableError::InvalidSlotTime(ref t) if t == "half past nine"));
    }
}
