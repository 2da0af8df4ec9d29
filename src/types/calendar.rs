//! Definition of [`DayAvailability`], one day of the appointment
//! calendar.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::site::SiteSlots;
use crate::utils::timetable::TimetableError;

/// Wire format of [`DayAvailability::date_str`].
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Display format of a day, e.g. `Sep 5`.
pub const DATE_DISPLAY_FORMAT: &str = "%b %-d";

/// The sites offering appointments on one date.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayAvailability {
    /// Date in `yyyy-MM-dd`.
    pub date_str: String,

    #[serde(default)]
    pub location_slots_pairs: Vec<SiteSlots>,
}

impl DayAvailability {
    /// Parses [`date_str`](Self::date_str).
    pub fn date(&self) -> Result<NaiveDate, TimetableError> {
        NaiveDate::parse_from_str(&self.date_str, DATE_FORMAT)
            .map_err(|_| TimetableError::InvalidDate(self.date_str.clone()))
    }

    /// Renders the date as a short month and day.
    pub fn display_date(&self) -> Result<String, TimetableError> {
        Ok(self.date()?.format(DATE_DISPLAY_FORMAT).to_string())
    }

    /// Total number of slots across every site on this day.
    pub fn available_slot_count(&self) -> usize {
        self.location_slots_pairs
            .iter()
            .map(SiteSlots::slot_count)
            .sum()
    }
}

#[cfg(test)]
mod calendar_tests {
    use super::*;
    use crate::types::location::Location;
    use crate::types::site::{Site, Slot};

    fn site_slots(name: &str, slots: &[&str]) -> SiteSlots {
        SiteSlots {
            location: Site {
                name: name.to_string(),
                display_address: format!("{} Street", name),
                location: Location::new(-36.85, 174.76),
            },
            slots: slots.iter().map(|s| Slot::new(*s)).collect(),
        }
    }

    #[test]
    fn test_available_slot_count() {
        let day = DayAvailability {
            date_str: "2021-09-05".to_string(),
            location_slots_pairs: vec![
                site_slots("a", &["09:00:00", "09:15:00"]),
                site_slots("b", &[]),
                site_slots("c", &["10:00:00"]),
            ],
        };
        assert_eq!(day.available_slot_count(), 3);
    }

    #[test]
    fn test_empty_day_has_no_slots() {
        let day = DayAvailability {
            date_str: "2021-09-05".to_string(),
            location_slots_pairs: vec![],
        };
        assert_eq!(day.available_slot_count(), 0);
    }

    #[test]
    fn test_date_parsing_and_display() {
        let day = DayAvailability {
            date_str: "2021-09-05".to_string(),
            location_slots_pairs: vec![],
        };
        assert_eq!(day.date().unwrap(), NaiveDate::from_ymd_opt(2021, 9, 5).unwrap());
        assert_eq!(day.display_date().unwrap(), "Sep 5");
    }

    #[test]
    fn test_invalid_date() {
        let day = DayAvailability {
            date_str: "05/09/2021".to_string(),
            location_slots_pairs: vec![],
        };
        assert!(matches!(day.date(), Err(TimetableError::InvalidDate(_))));
    }
}
