//! Map view controller.
//!
//! Owns the zoom level and composes the dataset, path selection, projection
//! and distance computation into a renderable scene. Bounds are recomputed
//! when a dataset is (re)loaded, never on zoom changes; everything else is
//! derived on demand from current state.

use serde::Serialize;

use crate::geodesic::{distance_km, path_distance_km};
use crate::model::{Dataset, Point};
use crate::projection::{Bounds, PixelPos, to_pixel};
use crate::selection::PathSelection;

/// Zoom floor; zooming out below this is a no-op.
pub const MIN_ZOOM: f64 = 0.5;
/// Multiplier applied per zoom step. There is no upper bound.
pub const ZOOM_STEP: f64 = 1.2;
/// Initial zoom level.
pub const DEFAULT_ZOOM: f64 = 1.0;

/// A point of the scene: pixel position plus selection state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenePoint {
    pub id: u32,
    pub name: String,
    /// Canvas position in pixels (origin top-left, north up).
    pub x: f64,
    pub y: f64,
    pub selected: bool,
    /// 1-based position in the path, if selected.
    pub path_index: Option<usize>,
}

/// One leg of the current path, between consecutive selected points.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathSegment {
    pub from_id: u32,
    pub to_id: u32,
    /// Full-precision great-circle distance; round via [`display_km`] for UI.
    pub distance_km: f64,
}

/// Everything the rendering layer needs for one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapScene {
    pub zoom: f64,
    pub bounds: Option<Bounds>,
    /// Every dataset point, selected or not, in supplier order.
    pub points: Vec<ScenePoint>,
    /// Path legs in path order.
    pub segments: Vec<PathSegment>,
    pub total_distance_km: f64,
}

/// Round a distance to 2 decimals for display. The scene itself keeps full
/// precision.
pub fn display_km(km: f64) -> f64 {
    (km * 100.0).round() / 100.0
}

/// State container for the map widget: dataset, selection, zoom and canvas
/// size. All mutations are synchronous; derived values are recomputed by
/// [`scene`](Self::scene), never cached.
#[derive(Debug, Clone)]
pub struct MapView {
    dataset: Dataset,
    selection: PathSelection,
    /// Recomputed on dataset (re)load only. `None` for an empty dataset.
    bounds: Option<Bounds>,
    zoom: f64,
    map_width: f64,
    map_height: f64,
}

impl MapView {
    /// Create a view over `dataset` targeting a `map_width` × `map_height`
    /// canvas.
    pub fn new(dataset: Dataset, map_width: f64, map_height: f64) -> Self {
        let bounds = Bounds::from_points(dataset.points());
        Self {
            dataset,
            selection: PathSelection::new(),
            bounds,
            zoom: DEFAULT_ZOOM,
            map_width,
            map_height,
        }
    }

    /// Replace the dataset. Bounds are recomputed and the selection is
    /// cleared; selected ids may not exist in the new dataset.
    pub fn load_dataset(&mut self, dataset: Dataset) {
        self.bounds = Bounds::from_points(dataset.points());
        self.dataset = dataset;
        self.selection.reset();
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn selection(&self) -> &PathSelection {
        &self.selection
    }

    pub fn bounds(&self) -> Option<Bounds> {
        self.bounds
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn canvas_size(&self) -> (f64, f64) {
        (self.map_width, self.map_height)
    }

    pub fn zoom_in(&mut self) {
        self.zoom *= ZOOM_STEP;
    }

    pub fn zoom_out(&mut self) {
        self.zoom = (self.zoom / ZOOM_STEP).max(MIN_ZOOM);
    }

    pub fn reset_zoom(&mut self) {
        self.zoom = DEFAULT_ZOOM;
    }

    /// Toggle a point in or out of the path by id. Unknown ids are ignored.
    pub fn toggle_point(&mut self, id: u32) {
        self.selection.toggle(&self.dataset, id);
    }

    /// Clear the current path.
    pub fn reset_path(&mut self) {
        self.selection.reset();
    }

    /// Compute the renderable scene from current state: pixel positions for
    /// every point, the ordered segment list with per-leg distances, and the
    /// path total.
    pub fn scene(&self) -> MapScene {
        let mut points = Vec::with_capacity(self.dataset.len());
        if let Some(bounds) = &self.bounds {
            for p in self.dataset.points() {
                let PixelPos { x, y } =
                    to_pixel(p.lat, p.lng, bounds, self.zoom, self.map_width, self.map_height);
                points.push(ScenePoint {
                    id: p.id,
                    name: p.name.clone(),
                    x,
                    y,
                    selected: self.selection.is_selected(p.id),
                    path_index: self.selection.index_of(p.id),
                });
            }
        }

        // Selection ids always resolve; the invariant is maintained by
        // toggle_point and load_dataset.
        let path_points: Vec<&Point> = self
            .selection
            .ids()
            .iter()
            .filter_map(|id| self.dataset.get(*id))
            .collect();

        let segments = path_points
            .windows(2)
            .map(|pair| PathSegment {
                from_id: pair[0].id,
                to_id: pair[1].id,
                distance_km: distance_km(pair[0], pair[1]),
            })
            .collect();

        MapScene {
            zoom: self.zoom,
            bounds: self.bounds,
            points,
            segments,
            total_distance_km: path_distance_km(path_points.iter().copied()),
        }
    }
}
