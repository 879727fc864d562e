use waypath::model::Point;
use waypath::projection::{BOUNDS_MARGIN_DEG, Bounds, to_pixel};

fn pt(id: u32, lat: f64, lng: f64) -> Point {
    Point {
        id,
        name: format!("P{}", id),
        lat,
        lng,
    }
}

#[test]
fn test_bounds_margin() {
    let points = vec![pt(1, 34.0, -118.0), pt(2, 40.0, -74.0), pt(3, 30.0, -96.0)];
    let b = Bounds::from_points(points.iter()).unwrap();
    assert_eq!(b.min_lat, 30.0 - BOUNDS_MARGIN_DEG);
    assert_eq!(b.max_lat, 40.0 + BOUNDS_MARGIN_DEG);
    assert_eq!(b.min_lng, -118.0 - BOUNDS_MARGIN_DEG);
    assert_eq!(b.max_lng, -74.0 + BOUNDS_MARGIN_DEG);
}

#[test]
fn test_bounds_empty() {
    let points: Vec<Point> = Vec::new();
    assert!(Bounds::from_points(points.iter()).is_none());
}

#[test]
fn test_projection_formula() {
    let b = Bounds {
        min_lat: 30.0,
        max_lat: 40.0,
        min_lng: -120.0,
        max_lng: -70.0,
    };
    // Bottom-left geographic corner: x = 0, y = full height
    let p = to_pixel(30.0, -120.0, &b, 1.0, 800.0, 500.0);
    assert_eq!(p.x, 0.0);
    assert_eq!(p.y, 500.0);
    // Top-right corner: x = full width, y = 0 (north is up)
    let p = to_pixel(40.0, -70.0, &b, 1.0, 800.0, 500.0);
    assert_eq!(p.x, 800.0);
    assert_eq!(p.y, 0.0);
    // Midpoint lands at the canvas center
    let p = to_pixel(35.0, -95.0, &b, 1.0, 800.0, 500.0);
    assert_eq!(p.x, 400.0);
    assert_eq!(p.y, 250.0);
}

#[test]
fn test_projection_scales_with_zoom() {
    let b = Bounds {
        min_lat: 30.0,
        max_lat: 40.0,
        min_lng: -120.0,
        max_lng: -70.0,
    };
    let p1 = to_pixel(35.0, -95.0, &b, 1.0, 800.0, 500.0);
    let p2 = to_pixel(35.0, -95.0, &b, 2.0, 800.0, 500.0);
    assert_eq!(p2.x, p1.x * 2.0);
    assert_eq!(p2.y, p1.y * 2.0);
}

#[test]
fn test_projection_monotonic_within_bounds() {
    let b = Bounds {
        min_lat: 28.0,
        max_lat: 42.0,
        min_lng: -124.0,
        max_lng: -72.0,
    };
    let mut last_x = f64::NEG_INFINITY;
    for step in 0..=20 {
        let lng = b.min_lng + (b.max_lng - b.min_lng) * (step as f64) / 20.0;
        let p = to_pixel(35.0, lng, &b, 1.3, 800.0, 500.0);
        assert!(p.x >= last_x, "x must not decrease as lng increases");
        last_x = p.x;
    }
    let mut last_y = f64::INFINITY;
    for step in 0..=20 {
        let lat = b.min_lat + (b.max_lat - b.min_lat) * (step as f64) / 20.0;
        let p = to_pixel(lat, -95.0, &b, 1.3, 800.0, 500.0);
        assert!(p.y <= last_y, "y must not increase as lat increases");
        last_y = p.y;
    }
}

#[test]
fn test_degenerate_bounds_map_to_midpoint() {
    // Hand-built zero-width bounds; Bounds::from_points never produces these
    // because of the margin, but to_pixel must still stay finite.
    let b = Bounds {
        min_lat: 34.0,
        max_lat: 34.0,
        min_lng: -118.0,
        max_lng: -118.0,
    };
    let p = to_pixel(34.0, -118.0, &b, 1.0, 800.0, 500.0);
    assert!(p.x.is_finite() && p.y.is_finite());
    assert_eq!(p.x, 400.0);
    assert_eq!(p.y, 250.0);
}

#[test]
fn test_single_point_dataset_projects_to_center() {
    let single = vec![pt(7, 34.0522, -118.2437)];
    let b = Bounds::from_points(single.iter()).unwrap();
    let p = to_pixel(single[0].lat, single[0].lng, &b, 1.0, 800.0, 500.0);
    assert!(p.x.is_finite() && p.y.is_finite());
    // The margin centers a lone point in its own bounding box
    assert!((p.x - 400.0).abs() < 1e-9);
    assert!((p.y - 250.0).abs() < 1e-9);
}
