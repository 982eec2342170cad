//! Distance ranking: order candidates by great-circle distance from a search
//! origin and keep the nearest few.
//!
//! Candidate counts are bounded by the CRM dataset, not web-scale, so the
//! ranker does a full stable sort and truncates rather than a partial
//! selection.

use radius_core::{Coordinate, Positioned};

/// Mean Earth radius in meters.
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Maximum number of ranked entries returned to presentation collaborators.
pub const MAX_RESULTS: usize = 25;

/// Great-circle distance between two points in meters, by the haversine
/// formula.
#[must_use]
pub fn haversine_meters(a: Coordinate, b: Coordinate) -> f64 {
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lng = (b.longitude - a.longitude).to_radians();
    let lat_a = a.latitude.to_radians();
    let lat_b = b.latitude.to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat_a.cos() * lat_b.cos() * (d_lng / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_M * h.sqrt().asin()
}

/// Sorts `candidates` ascending by distance from `origin` and returns the
/// nearest [`MAX_RESULTS`].
///
/// The sort is stable, so equidistant candidates keep their input order. No
/// distance value is carried into the output; only order and membership
/// matter downstream.
#[must_use]
pub fn rank_by_distance<T: Positioned>(origin: Coordinate, candidates: Vec<T>) -> Vec<T> {
    let mut ranked: Vec<(f64, T)> = candidates
        .into_iter()
        .map(|candidate| (haversine_meters(origin, candidate.position()), candidate))
        .collect();
    ranked.sort_by(|(a, _), (b, _)| a.total_cmp(b));
    ranked.truncate(MAX_RESULTS);
    ranked.into_iter().map(|(_, candidate)| candidate).collect()
}
