// Integration tests for the fabric sheet and its displacement field.

use app_core::{displacement, Behavior, FabricWave, FrameContext, FABRIC_COLS, FABRIC_ROWS};
use glam::Vec2;

#[test]
fn displacement_is_pure() {
    let pointer = Vec2::new(0.25, -0.6);
    for &(x, y, t) in &[(0.0, 0.0, 0.0), (3.2, -1.5, 7.75), (-6.0, 4.0, 123.0)] {
        assert_eq!(
            displacement(x, y, t, pointer),
            displacement(x, y, t, pointer)
        );
    }
}

#[test]
fn displacement_matches_the_wave_formula() {
    let (x, y, t) = (1.5f32, -2.0f32, 3.0f32);
    let pointer = Vec2::new(0.4, 0.2);
    let expected = (x * 0.5 + t * 2.0).sin() * 0.3
        + (y * 0.7 + t * 1.5).cos() * 0.2
        + ((x + y) * 0.3 + t).sin() * 0.1
        + pointer.x * 0.5
        + pointer.y * 0.3;
    assert_eq!(displacement(x, y, t, pointer), expected);
}

#[test]
fn sheet_has_the_full_grid() {
    let fabric = FabricWave::new();
    assert_eq!(fabric.positions.len(), FABRIC_COLS * FABRIC_ROWS);
    assert_eq!(fabric.normals.len(), fabric.positions.len());
    // two triangles per cell
    assert_eq!(
        fabric.indices.len(),
        (FABRIC_COLS - 1) * (FABRIC_ROWS - 1) * 6
    );
    let max = *fabric.indices.iter().max().unwrap() as usize;
    assert!(max < fabric.positions.len());
    for v in &fabric.positions {
        assert!(v.x.abs() <= 6.0 && v.y.abs() <= 4.0);
    }
}

#[test]
fn update_is_restart_safe() {
    // State at time t must not depend on the path taken to reach t.
    let ctx_mid = FrameContext::new(1.25, Vec2::new(-0.3, 0.8));
    let ctx = FrameContext::new(5.0, Vec2::new(0.1, 0.9));

    let mut direct = FabricWave::new();
    direct.update(&ctx);

    let mut stepped = FabricWave::new();
    stepped.update(&ctx_mid);
    stepped.update(&ctx);

    assert_eq!(direct.positions, stepped.positions);
    assert_eq!(direct.transform, stepped.transform);
    assert_eq!(direct.opacity, stepped.opacity);
}

#[test]
fn normals_are_unit_and_front_facing() {
    let mut fabric = FabricWave::new();
    fabric.update(&FrameContext::new(2.5, Vec2::new(0.5, -0.5)));
    for n in &fabric.normals {
        assert!((n.length() - 1.0).abs() < 1e-4);
        assert!(n.z > 0.0, "height-field normals always face +z");
    }
}

#[test]
fn sheet_sways_and_shimmers() {
    let mut fabric = FabricWave::new();
    fabric.update(&FrameContext::new(0.0, Vec2::ZERO));
    assert_eq!(fabric.transform.rotation.x, 0.0);
    assert_eq!(fabric.transform.translation.z, -2.0);
    assert_eq!(fabric.opacity, 0.2);

    fabric.update(&FrameContext::new(0.7, Vec2::ZERO));
    assert!(fabric.transform.rotation.x != 0.0);
    assert!(fabric.opacity > 0.2, "sin(1.4) is positive");
}

#[test]
fn pointer_lifts_the_whole_sheet() {
    // The pointer terms are additive constants, so they shift every vertex
    // by the same amount.
    let t = 3.3;
    let a = displacement(1.0, 2.0, t, Vec2::ZERO);
    let b = displacement(1.0, 2.0, t, Vec2::new(1.0, 1.0));
    assert!((b - a - 0.8).abs() < 1e-6);
}
