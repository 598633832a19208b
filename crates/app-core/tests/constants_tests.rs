// Sanity checks on the shared tuning constants and their relationships.

use app_core::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn ballpit_constants_are_physical() {
    assert!(BALL_GRAVITY > 0.0);
    assert!(BALL_ATTRACT_GAIN > 0.0);
    assert!(BALL_ATTRACT_REACH > 0.0);
    // inelastic: the bounce keeps some energy but never adds any
    assert!(BALL_BOUNCE_DAMPING > 0.0 && BALL_BOUNCE_DAMPING < 1.0);
    assert!(BALL_BOUND_XZ > 0.0);
    assert!(BALL_FLOOR_Y < 0.0);
    assert!(BALL_MIN_SCALE > 0.0);
    assert!(BALL_SCALE_SPAN > 0.0);
    assert!(BALL_COUNT > 0);
}

#[test]
fn palette_is_displayable() {
    for color in BALL_COLORS {
        for channel in color {
            assert!((0.0..=1.0).contains(&channel));
        }
    }
    for channel in PARTICLE_COLOR {
        assert!((0.0..=1.0).contains(&channel));
    }
    for channel in GRID_COLOR {
        assert!((0.0..=1.0).contains(&channel));
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn fabric_grid_matches_its_subdivisions() {
    // 32x24 subdivisions -> 33x25 vertices
    assert_eq!(FABRIC_COLS, 33);
    assert_eq!(FABRIC_ROWS, 25);
    assert!(FABRIC_WIDTH > 0.0 && FABRIC_HEIGHT > 0.0);
    assert!(FABRIC_POINTER_X_GAIN > FABRIC_POINTER_Y_GAIN);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_is_sensible() {
    assert!(CAMERA_FOV_DEGREES > 0.0 && CAMERA_FOV_DEGREES < 180.0);
    assert!(CAMERA_ZNEAR > 0.0);
    assert!(CAMERA_ZFAR > CAMERA_ZNEAR);
    assert!(CAMERA_EYE[2] > 0.0, "camera sits in front of the scene");
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn grid_and_mannequin_rates_are_positive() {
    assert!(GRID_SIZE > 0.0);
    assert!(GRID_DIVISIONS > 0);
    assert!(GRID_REST_Y < 0.0, "the grid is a floor");
    assert!(GRID_FOLLOW_GAIN > 0.0);
    assert!(MANNEQUIN_TURN_RATE > 0.0);
    assert!(MANNEQUIN_SCALE > 0.0 && MANNEQUIN_SCALE <= 1.0);
    assert!(DRESS_BREATHE_AMPLITUDE < MANNEQUIN_SCALE);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn selection_delay_is_a_real_pause() {
    assert!(ROLE_TRANSITION_DELAY_SEC > 0.0);
    assert!(ROLE_TRANSITION_DELAY_SEC <= 5.0, "flip must feel responsive");
}
