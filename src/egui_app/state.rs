#![cfg(feature = "egui")]

use eframe::egui;

use crate::view::MapView;

/// Interactive egui application that displays a waypoint map and lets the
/// user build a path by clicking points.
pub struct MapApp {
    pub view: MapView,
    /// Draw the grid background behind the canvas.
    pub show_grid: bool,
}

impl MapApp {
    /// Create a new app around an existing view.
    pub fn new(view: MapView) -> Self {
        Self {
            view,
            show_grid: true,
        }
    }
}

impl eframe::App for MapApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        super::ui::update(self, ctx);
    }
}

/// Open a native window running the viewer. Blocks until the window closes.
pub fn run_viewer(view: MapView) -> anyhow::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1100.0, 640.0]),
        ..Default::default()
    };
    eframe::run_native(
        "waypath map viewer",
        options,
        Box::new(|_cc| Ok(Box::new(MapApp::new(view)))),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
}
