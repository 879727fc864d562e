//! Geographic-to-pixel coordinate mapping.
//!
//! A plain equirectangular fit of the dataset's bounding box onto the canvas:
//! linear in both axes, with y inverted so north maps to the top. Not
//! geodesically correct at scale, and deliberately so: the widget shows a
//! handful of points in a bounded region, not a world map.

use serde::{Deserialize, Serialize};

use crate::model::Point;

/// Margin added on each side of the dataset's bounding box, in degrees.
pub const BOUNDS_MARGIN_DEG: f64 = 2.0;

/// Ranges at or below this are treated as degenerate and mapped to the
/// canvas midpoint instead of dividing by (nearly) zero.
pub const MIN_RANGE_DEG: f64 = 1e-9;

/// Geographic bounding box used to fit the full point dataset onto the
/// canvas. Always derived from the whole dataset, never from the selection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

impl Bounds {
    /// Compute bounds over `points` with [`BOUNDS_MARGIN_DEG`] of margin on
    /// each side. Returns `None` for an empty iterator.
    pub fn from_points<'a, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Point>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let (mut min_lat, mut max_lat) = (first.lat, first.lat);
        let (mut min_lng, mut max_lng) = (first.lng, first.lng);
        for p in iter {
            min_lat = min_lat.min(p.lat);
            max_lat = max_lat.max(p.lat);
            min_lng = min_lng.min(p.lng);
            max_lng = max_lng.max(p.lng);
        }
        Some(Self {
            min_lat: min_lat - BOUNDS_MARGIN_DEG,
            max_lat: max_lat + BOUNDS_MARGIN_DEG,
            min_lng: min_lng - BOUNDS_MARGIN_DEG,
            max_lng: max_lng + BOUNDS_MARGIN_DEG,
        })
    }

    pub fn lat_range(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    pub fn lng_range(&self) -> f64 {
        self.max_lng - self.min_lng
    }
}

/// A position on the canvas, in pixels. The origin is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelPos {
    pub x: f64,
    pub y: f64,
}

/// Map a geographic coordinate onto a `map_width` × `map_height` canvas
/// scaled by `zoom`.
///
/// Degenerate bounds (a zero-width range on either axis) place the
/// coordinate at the canvas midpoint on that axis; the result is always
/// finite.
pub fn to_pixel(
    lat: f64,
    lng: f64,
    bounds: &Bounds,
    zoom: f64,
    map_width: f64,
    map_height: f64,
) -> PixelPos {
    let lng_range = bounds.lng_range();
    let x = if lng_range <= MIN_RANGE_DEG {
        0.5 * map_width * zoom
    } else {
        ((lng - bounds.min_lng) / lng_range) * map_width * zoom
    };

    let lat_range = bounds.lat_range();
    let y = if lat_range <= MIN_RANGE_DEG {
        0.5 * map_height * zoom
    } else {
        ((bounds.max_lat - lat) / lat_range) * map_height * zoom
    };

    PixelPos { x, y }
}
