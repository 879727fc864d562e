//! Egui-based interactive map viewer (feature = "egui").
//!
//! Renders the scene produced by [`crate::view::MapView`]: grid background,
//! waypoint markers, dashed path segments with distance labels, a locations
//! side panel with the path table, and zoom controls.

#![cfg(feature = "egui")]

mod render;
mod state;
mod ui;

pub use state::{MapApp, run_viewer};
