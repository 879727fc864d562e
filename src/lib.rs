//! Waypoint map core.
//!
//! This crate implements the computation behind a small path-building map
//! widget: a fixed set of named geographic points, an ordered path built by
//! toggling point selection, great-circle distances between consecutive path
//! points, and an equirectangular projection onto a zoomable canvas.
//!
//! The binary `waypath` loads a waypoint dataset and prints the computed
//! scene as JSON.

pub mod geodesic;
pub mod loader;
pub mod model;
pub mod projection;
pub mod selection;
pub mod view;

// Optional GUI/egui functionality lives behind the `egui` feature flag.
// This module provides an interactive viewer for waypoint datasets and is
// launched via the binary's `--viewer` flag.
#[cfg(feature = "egui")]
pub mod egui_app;
