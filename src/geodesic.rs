//! Great-circle distance computation on a spherical Earth.
//!
//! Uses the haversine formula, which is numerically stable for the short
//! distances this widget deals with. This is a spherical approximation, not
//! ellipsoidal geodesy; the error is well under the display precision for
//! regional point sets.

use crate::model::Point;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two points in kilometers.
pub fn distance_km(a: &Point, b: &Point) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lng / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_KM * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Total length of a path in kilometers: the sum of [`distance_km`] over
/// every consecutive pair, in sequence order.
///
/// Returns 0 for empty and single-point sequences. Pure function of the
/// sequence given to it.
pub fn path_distance_km<'a, I>(points: I) -> f64
where
    I: IntoIterator<Item = &'a Point>,
{
    let mut total = 0.0;
    let mut prev: Option<&Point> = None;
    for p in points {
        if let Some(q) = prev {
            total += distance_km(q, p);
        }
        prev = Some(p);
    }
    total
}
