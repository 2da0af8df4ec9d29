//! Vaccine Timetable Library.
//! Ranks vaccination sites by distance and summarizes slot availability
//! per day.

#[macro_use]
extern crate log;

pub mod types {
    pub mod calendar;
    pub mod location;
    pub mod site;
}

pub mod utils {
    pub mod generator;
    pub mod haversine;
    pub mod sort;
    pub mod timetable;
}

pub mod algorithms {
    pub mod ranking;
}

pub use algorithms::ranking;
pub use types::*;
pub use utils::*;
