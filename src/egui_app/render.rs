#![cfg(feature = "egui")]

use eframe::egui::epaint::Shape;
use eframe::egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Stroke, Vec2};

/// Marker circle radius in pixels.
pub const POINT_RADIUS: f32 = 12.0;

const GRID_SPACING: f32 = 50.0;
const SEGMENT_COLOR: Color32 = Color32::from_rgb(100, 160, 230);
const SELECTED_FILL: Color32 = Color32::from_rgb(120, 210, 140);
const UNSELECTED_FILL: Color32 = Color32::from_rgb(230, 90, 90);

/// Faint square grid over the canvas, the same backdrop the widget ships
/// behind its map area.
pub fn draw_grid(painter: &Painter, rect: Rect) {
    let stroke = Stroke::new(0.5, Color32::from_gray(90));
    let mut x = rect.left();
    while x <= rect.right() {
        painter.line_segment([Pos2::new(x, rect.top()), Pos2::new(x, rect.bottom())], stroke);
        x += GRID_SPACING;
    }
    let mut y = rect.top();
    while y <= rect.bottom() {
        painter.line_segment([Pos2::new(rect.left(), y), Pos2::new(rect.right(), y)], stroke);
        y += GRID_SPACING;
    }
}

/// Dashed path leg with its distance label above the midpoint.
pub fn draw_segment(painter: &Painter, a: Pos2, b: Pos2, label: &str) {
    let stroke = Stroke::new(2.0, SEGMENT_COLOR);
    painter.extend(Shape::dashed_line(&[a, b], stroke, 5.0, 5.0));
    let mid = Pos2::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0 - 10.0);
    painter.text(
        mid,
        Align2::CENTER_CENTER,
        label,
        FontId::proportional(12.0),
        SEGMENT_COLOR,
    );
}

/// Waypoint marker: filled circle, path index inside when selected, name
/// label underneath.
pub fn draw_marker(painter: &Painter, pos: Pos2, name: &str, path_index: Option<usize>) {
    let fill = if path_index.is_some() {
        SELECTED_FILL
    } else {
        UNSELECTED_FILL
    };
    painter.circle_filled(pos, POINT_RADIUS, fill);
    painter.circle_stroke(pos, POINT_RADIUS, Stroke::new(1.5, Color32::WHITE));
    if let Some(idx) = path_index {
        painter.text(
            pos,
            Align2::CENTER_CENTER,
            idx.to_string(),
            FontId::proportional(12.0),
            Color32::WHITE,
        );
    }
    painter.text(
        pos + Vec2::new(0.0, POINT_RADIUS + 10.0),
        Align2::CENTER_CENTER,
        name,
        FontId::proportional(11.0),
        Color32::from_gray(200),
    );
}
