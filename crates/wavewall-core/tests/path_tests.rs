// Host-side tests for wave band geometry.

use glam::Vec2;
use wavewall_core::*;

fn approx(a: Vec2, b: Vec2) -> bool {
    (a - b).length() < 1e-3
}

#[test]
fn band_starts_on_baseline_and_closes_at_bottom() {
    let (p, a, y, h) = (500.0, 120.0, 420.0, 900.0);
    let path = wave_band_path(p, a, y, h);

    assert_eq!(path.start(), Some(Vec2::new(0.0, y)));
    assert!(path.is_closed());

    let v = path.vertices();
    assert_eq!(
        v,
        vec![
            Vec2::new(0.0, y),
            Vec2::new(p, y),
            Vec2::new(2.0 * p, y),
            Vec2::new(2.0 * p, h),
            Vec2::new(0.0, h),
        ]
    );
    // last explicit point shares the start's x at the viewport bottom
    assert_eq!(v.last().copied(), Some(Vec2::new(0.0, h)));
}

#[test]
fn control_points_use_lead_and_trail_fractions() {
    let (p, a, y) = (300.0, 80.0, 400.0);
    let path = wave_band_path(p, a, y, 800.0);
    match path.commands[1] {
        PathCommand::CubicTo { ctrl1, ctrl2, to } => {
            assert!(approx(ctrl1, Vec2::new(0.35 * p, y + a)));
            assert!(approx(ctrl2, Vec2::new(0.65 * p, y - a)));
            assert_eq!(to, Vec2::new(p, y));
        }
        other => panic!("expected cubic, got {other:?}"),
    }
    match path.commands[2] {
        PathCommand::CubicTo { ctrl1, ctrl2, to } => {
            assert!(approx(ctrl1, Vec2::new(1.35 * p, y + a)));
            assert!(approx(ctrl2, Vec2::new(1.65 * p, y - a)));
            assert_eq!(to, Vec2::new(2.0 * p, y));
        }
        other => panic!("expected cubic, got {other:?}"),
    }
}

#[test]
fn top_edge_passes_through_period_marks() {
    let path = wave_band_path(400.0, 300.0, 500.0, 1000.0);
    let top = path.top_edge(16);
    assert!(approx(top[0], Vec2::new(0.0, 500.0)));
    assert!(approx(top[16], Vec2::new(400.0, 500.0)));
    assert!(approx(top[32], Vec2::new(800.0, 500.0)));
}

#[test]
fn oscillation_dips_then_rises_within_each_period() {
    // screen y grows downward: the lead control pulls the curve down first
    let y = 500.0;
    let path = wave_band_path(400.0, 200.0, y, 1000.0);
    let top = path.top_edge(20);
    assert!(top[5].y > y);
    assert!(top[15].y < y);
    assert!(top[25].y > y);
    assert!(top[35].y < y);
}

#[test]
fn flatten_appends_bottom_corners() {
    let path = wave_band_path(200.0, 50.0, 300.0, 600.0);
    let poly = path.flatten(8);
    assert_eq!(poly.len(), 1 + 8 * 2 + 2);
    assert_eq!(poly[poly.len() - 2], Vec2::new(400.0, 600.0));
    assert_eq!(poly[poly.len() - 1], Vec2::new(0.0, 600.0));
}

#[test]
fn fill_triangles_cover_band_width_down_to_bottom() {
    let h = 700.0;
    let path = wave_band_path(250.0, 100.0, 350.0, h);
    let tris = path.fill_triangles(10, h);
    assert_eq!(tris.len(), 20 * 2);

    let min_x = tris.iter().flatten().map(|p| p.x).fold(f32::MAX, f32::min);
    let max_x = tris.iter().flatten().map(|p| p.x).fold(f32::MIN, f32::max);
    let max_y = tris.iter().flatten().map(|p| p.y).fold(f32::MIN, f32::max);
    assert!((min_x - 0.0).abs() < 1e-3);
    assert!((max_x - 500.0).abs() < 1e-3);
    assert_eq!(max_y, h);
}

#[test]
fn translation_moves_every_point() {
    let path = wave_band_path(300.0, 90.0, 400.0, 800.0);
    let moved = path.translated(-300.0);
    let before = path.vertices();
    let after = moved.vertices();
    for (b, a) in before.iter().zip(after.iter()) {
        assert_eq!(a.x, b.x - 300.0);
        assert_eq!(a.y, b.y);
    }
    assert!(moved.is_closed());
}
