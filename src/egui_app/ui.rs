#![cfg(feature = "egui")]

use std::collections::HashMap;

use eframe::egui::{self, Align2, Color32, FontId, Pos2, Rect, RichText, Sense, Vec2};

use super::render::{POINT_RADIUS, draw_grid, draw_marker, draw_segment};
use super::state::MapApp;
use crate::view::display_km;

/// Per-frame UI: top bar (totals, reset, zoom), locations side panel with the
/// path table, and the scrollable map canvas.
pub fn update(app: &mut MapApp, ctx: &egui::Context) {
    let scene = app.view.scene();
    // Staged toggle, applied after all panels have rendered this frame
    let mut toggle_id: Option<u32> = None;

    egui::TopBottomPanel::top("top").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(RichText::new("Interactive Map").strong());
            ui.separator();
            ui.label(format!(
                "Total Distance: {:.2} km",
                display_km(scene.total_distance_km)
            ));
            if ui.button("Reset Path").clicked() {
                app.view.reset_path();
            }
            ui.separator();
            if ui.small_button("+").clicked() {
                app.view.zoom_in();
            }
            if ui.small_button("−").clicked() {
                app.view.zoom_out();
            }
            if ui.small_button("Reset").clicked() {
                app.view.reset_zoom();
            }
            ui.label(format!("{:.0}%", app.view.zoom() * 100.0));
            ui.separator();
            ui.checkbox(&mut app.show_grid, "Grid");
        });
    });

    let names: HashMap<u32, &str> = scene
        .points
        .iter()
        .map(|p| (p.id, p.name.as_str()))
        .collect();

    egui::SidePanel::right("locations")
        .default_width(280.0)
        .show(ctx, |ui| {
            ui.heading("Locations");
            egui::ScrollArea::vertical().show(ui, |ui| {
                for p in &scene.points {
                    let label = match p.path_index {
                        Some(idx) => format!("{}.  {}", idx, p.name),
                        None => p.name.clone(),
                    };
                    if ui.selectable_label(p.selected, label).clicked() {
                        toggle_id = Some(p.id);
                    }
                }

                if !scene.segments.is_empty() {
                    ui.separator();
                    ui.heading("Path Details");
                    egui::Grid::new("path_details").striped(true).show(ui, |ui| {
                        ui.label(RichText::new("From").strong());
                        ui.label(RichText::new("To").strong());
                        ui.label(RichText::new("Distance").strong());
                        ui.end_row();
                        for seg in &scene.segments {
                            ui.label(*names.get(&seg.from_id).unwrap_or(&"?"));
                            ui.label(*names.get(&seg.to_id).unwrap_or(&"?"));
                            ui.label(format!("{:.2} km", display_km(seg.distance_km)));
                            ui.end_row();
                        }
                    });
                }
            });
        });

    egui::CentralPanel::default().show(ctx, |ui| {
        if scene.points.is_empty() {
            ui.colored_label(Color32::YELLOW, "No waypoints to render");
            return;
        }
        let (map_width, map_height) = app.view.canvas_size();
        let canvas_size = Vec2::new(
            (map_width * scene.zoom) as f32,
            (map_height * scene.zoom) as f32,
        );

        // The canvas grows with zoom; scrollbars take over when it no longer fits
        egui::ScrollArea::both().show(ui, |ui| {
            let (canvas, _resp) = ui.allocate_exact_size(canvas_size, Sense::hover());
            let painter = ui.painter_at(canvas);

            if app.show_grid {
                draw_grid(&painter, canvas);
            }
            if let Some(b) = &scene.bounds {
                painter.text(
                    Pos2::new(canvas.left() + 8.0, canvas.top() + 8.0),
                    Align2::LEFT_TOP,
                    format!("Latitude: {:.1} to {:.1}", b.min_lat, b.max_lat),
                    FontId::proportional(11.0),
                    Color32::GRAY,
                );
                painter.text(
                    Pos2::new(canvas.left() + 8.0, canvas.bottom() - 8.0),
                    Align2::LEFT_BOTTOM,
                    format!("Longitude: {:.1} to {:.1}", b.min_lng, b.max_lng),
                    FontId::proportional(11.0),
                    Color32::GRAY,
                );
            }

            let to_screen = |x: f64, y: f64| -> Pos2 {
                Pos2::new(canvas.left() + x as f32, canvas.top() + y as f32)
            };
            let positions: HashMap<u32, Pos2> = scene
                .points
                .iter()
                .map(|p| (p.id, to_screen(p.x, p.y)))
                .collect();

            for seg in &scene.segments {
                let (Some(a), Some(b)) = (positions.get(&seg.from_id), positions.get(&seg.to_id))
                else {
                    continue;
                };
                draw_segment(&painter, *a, *b, &format!("{:.1} km", seg.distance_km));
            }

            for p in &scene.points {
                let pos = positions[&p.id];
                draw_marker(&painter, pos, &p.name, p.path_index);
                let hit = Rect::from_center_size(pos, Vec2::splat(POINT_RADIUS * 2.0));
                let resp = ui.interact(hit, ui.id().with(p.id), Sense::click());
                if resp.clicked() {
                    toggle_id = Some(p.id);
                }
            }
        });
    });

    if let Some(id) = toggle_id {
        app.view.toggle_point(id);
    }
}
