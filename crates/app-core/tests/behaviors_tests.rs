// Integration tests for the closed-form behaviors and scene composition.

use app_core::{
    frustum_mesh, Behavior, FrameContext, GridFollow, MannequinSway, ParticleDrift, PartShape,
    Scene, BALL_COUNT, FABRIC_COLS, FABRIC_ROWS, GRID_DIVISIONS, GRID_REST_Y, PARTICLE_COLOR,
    PARTICLE_COUNT,
};
use glam::{Vec2, Vec3};

#[test]
fn grid_rests_at_its_defined_offset() {
    let mut grid = GridFollow::new();
    assert_eq!(grid.transform.translation, Vec3::new(0.0, GRID_REST_Y, 0.0));

    // At t=0 with a centered pointer the update must land on the same pose.
    grid.update(&FrameContext::new(0.0, Vec2::ZERO));
    assert_eq!(grid.transform.translation, Vec3::new(0.0, GRID_REST_Y, 0.0));
    assert_eq!(grid.transform.rotation.x, 0.0);
}

#[test]
fn grid_slides_after_the_pointer() {
    let mut grid = GridFollow::new();
    grid.update(&FrameContext::new(0.0, Vec2::new(0.5, -1.0)));
    assert_eq!(grid.transform.translation.x, 1.0);
    assert_eq!(grid.transform.translation.z, -2.0);
}

#[test]
fn grid_geometry_spans_the_floor() {
    let grid = GridFollow::new();
    assert_eq!(grid.lines.len(), (GRID_DIVISIONS + 1) * 4);
    for v in &grid.lines {
        assert!(v.x.abs() <= 10.0 && v.z.abs() <= 10.0);
        assert_eq!(v.y, 0.0);
    }
}

#[test]
fn particles_tumble_and_parallax() {
    let mut drift = ParticleDrift::new(5);
    assert_eq!(drift.positions.len(), PARTICLE_COUNT);
    for p in &drift.positions {
        assert!(p.x.abs() <= 10.0 && p.y.abs() <= 10.0 && p.z.abs() <= 10.0);
    }

    drift.update(&FrameContext::new(2.0, Vec2::new(1.0, -1.0)));
    assert!((drift.transform.rotation.x - 0.1).abs() < 1e-6);
    assert!((drift.transform.rotation.y - 0.2).abs() < 1e-6);
    assert!((drift.transform.translation.x - 0.5).abs() < 1e-6);
    assert!((drift.transform.translation.y + 0.5).abs() < 1e-6);
}

#[test]
fn mannequin_breathes_around_its_anchor() {
    let mut figure = MannequinSway::new();
    figure.update(&FrameContext::new(0.0, Vec2::ZERO));
    assert_eq!(figure.group.rotation.y, 0.0);
    assert_eq!(figure.group.translation, Vec3::new(3.0, 0.0, -1.0));
    assert_eq!(figure.dress_scale.x, 1.0);
    assert!((figure.dress_scale.z - 1.05).abs() < 1e-6);

    figure.update(&FrameContext::new(10.0, Vec2::ZERO));
    assert!(figure.group.rotation.y > 0.0);
    assert!(figure.dress_scale.x > 0.9 && figure.dress_scale.x < 1.1);
}

#[test]
fn mannequin_exposes_all_parts() {
    let figure = MannequinSway::new();
    let parts = figure.parts();
    assert_eq!(parts.len(), 5);
    let beads = parts
        .iter()
        .filter(|p| matches!(p.shape, PartShape::Bead { .. }))
        .count();
    assert_eq!(beads, 1);
    // the dress scales with the breathing state
    let dress = parts
        .iter()
        .find(|p| matches!(p.shape, PartShape::Frustum { top_radius, .. } if top_radius == 0.0))
        .expect("dress part");
    assert_eq!(dress.local.scale, figure.dress_scale);
}

#[test]
fn frustum_mesh_is_well_formed() {
    let (positions, normals, indices) = frustum_mesh(1.0, 1.0, 2.0, 8);
    assert_eq!(positions.len(), normals.len());
    assert_eq!(indices.len() % 3, 0);
    let max = *indices.iter().max().unwrap() as usize;
    assert!(max < positions.len());
    for n in &normals {
        assert!((n.length() - 1.0).abs() < 1e-4);
    }
    // a straight cylinder's wall normals are horizontal
    for n in normals.iter().take((8 + 1) * 2) {
        assert!(n.y.abs() < 1e-6);
    }
}

#[test]
fn cone_has_no_top_cap() {
    let (cone_pos, _, _) = frustum_mesh(0.0, 1.2, 2.0, 8);
    let (cyl_pos, _, _) = frustum_mesh(1.2, 1.2, 2.0, 8);
    assert!(cone_pos.len() < cyl_pos.len());
}

#[test]
fn scene_composes_every_behavior() {
    let mut scene = Scene::new(42);
    scene.update(&FrameContext::new(1.0, Vec2::new(0.2, 0.2)));
    let frame = scene.compose();

    // particles + balls + the mannequin's accent bead
    assert_eq!(frame.sprites.len(), PARTICLE_COUNT + BALL_COUNT + 1);
    assert_eq!(frame.lines.len(), (GRID_DIVISIONS + 1) * 4);
    assert!(frame.mesh_vertices.len() > FABRIC_COLS * FABRIC_ROWS);
    assert_eq!(frame.mesh_indices.len() % 3, 0);
    let max = *frame.mesh_indices.iter().max().unwrap() as usize;
    assert!(max < frame.mesh_vertices.len());

    // particle sprites come first and carry the particle tint
    assert_eq!(frame.sprites[0].color, PARTICLE_COLOR);
}

#[test]
fn scene_runs_are_reproducible() {
    let mut a = Scene::new(9);
    let mut b = Scene::new(9);
    for i in 0..60 {
        let ctx = FrameContext::new(i as f32 / 60.0, Vec2::new(0.1, -0.4));
        a.update(&ctx);
        b.update(&ctx);
    }
    let fa = a.compose();
    let fb = b.compose();
    for (x, y) in fa.sprites.iter().zip(&fb.sprites) {
        assert_eq!(x.position, y.position);
    }
}
