//! Great-circle distance and proximity ranking, independent of the storage
//! engine so the query semantics stay testable without a database.

use crate::entities::{Coordinates, Location};

pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Distance between two coordinates in kilometers, via the spherical law of
/// cosines on a mean-radius Earth.
pub fn distance_km(a: &Coordinates, b: &Coordinates) -> f64 {
    let (lat_a, lon_a) = (a.latitude.to_radians(), a.longitude.to_radians());
    let (lat_b, lon_b) = (b.latitude.to_radians(), b.longitude.to_radians());

    // For coincident points rounding can push this fractionally outside
    // [-1, 1], where acos is undefined.
    let central = lat_a.cos() * lat_b.cos() * (lon_b - lon_a).cos() + lat_a.sin() * lat_b.sin();

    EARTH_RADIUS_KM * central.clamp(-1.0, 1.0).acos()
}

/// Retains locations strictly within `radius_km` of `origin`, ordered by
/// ascending distance with ties broken by ascending id. Filtering and
/// ordering use the unrounded distance; the `distance_km` set on the
/// returned records is rounded to two decimals.
pub fn rank_nearby(
    locations: Vec<Location>,
    origin: &Coordinates,
    radius_km: f64,
) -> Vec<Location> {
    let mut ranked: Vec<(f64, Location)> = locations
        .into_iter()
        .map(|location| (distance_km(origin, &location.coordinates()), location))
        .filter(|(distance, _)| *distance < radius_km)
        .collect();

    ranked.sort_by(|(d_a, a), (d_b, b)| d_a.total_cmp(d_b).then_with(|| a.id.cmp(&b.id)));

    ranked
        .into_iter()
        .map(|(distance, mut location)| {
            location.distance_km = Some((distance * 100.0).round() / 100.0);
            location
        })
        .collect()
}
