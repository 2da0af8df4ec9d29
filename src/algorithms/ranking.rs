//! Orders located entities by their distance from a reference point.
//!
//! Distances are never stored: they are recomputed from the entities'
//! coordinates on every call. Keys are wrapped in [`OrderedFloat`] so
//! the ordering stays total when a coordinate is `NaN`; such entities
//! end up last.

use ordered_float::OrderedFloat;

use crate::types::location::{AsLocation, Location};
use crate::utils::{haversine, sort::sort_by};

/// Returns `entities` ordered by ascending distance from `reference`.
///
/// The input is not modified. Entities at the same distance keep their
/// input order.
///
/// # Arguments
/// * `entities` - Anything exposing a [`Location`].
/// * `reference` - The point distances are measured from.
pub fn rank_by_distance<'a, T: AsLocation>(entities: &'a [T], reference: &Location) -> Vec<&'a T> {
    sort_by(entities, |entity| {
        OrderedFloat(haversine::distance(reference, entity.as_location()))
    })
}

/// Like [`rank_by_distance`], with the reference given as raw degrees.
///
/// An absent collection is treated as empty.
pub fn sort_by_distance<'a, T: AsLocation>(
    entities: Option<&'a [T]>,
    lat: f64,
    lng: f64,
) -> Vec<&'a T> {
    rank_by_distance(entities.unwrap_or_default(), &Location::new(lat, lng))
}
