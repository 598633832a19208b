// Integration tests for the role selection state machine.

use app_core::{Phase, Role, SelectionView, ROLE_TRANSITION_DELAY_SEC};

#[test]
fn starts_on_the_cards() {
    let view = SelectionView::new();
    assert_eq!(view.phase(), Phase::Selecting);
    assert_eq!(view.selected_role(), None);
    assert!(view.showing_selection());
}

#[test]
fn select_records_the_role_synchronously() {
    let mut view = SelectionView::new();
    view.select(Role::Tailor, 0.0);
    assert_eq!(view.selected_role(), Some(Role::Tailor));
    assert_eq!(view.phase(), Phase::Transitioning);
    // the screen flip waits for the delay
    assert!(view.showing_selection());
}

#[test]
fn flip_happens_after_the_fixed_delay() {
    let mut view = SelectionView::new();
    view.select(Role::Customer, 2.0);
    assert!(!view.advance(2.0));
    assert!(!view.advance(2.0 + ROLE_TRANSITION_DELAY_SEC * 0.99));
    assert!(view.showing_selection());

    assert!(view.advance(2.0 + ROLE_TRANSITION_DELAY_SEC));
    assert_eq!(view.phase(), Phase::Welcomed);
    assert!(!view.showing_selection());
}

#[test]
fn flip_fires_exactly_once() {
    let mut view = SelectionView::new();
    view.select(Role::Tailor, 0.0);
    let mut flips = 0;
    for step in 0..50 {
        if view.advance(step as f64 * 0.1) {
            flips += 1;
        }
    }
    assert_eq!(flips, 1);
    assert!(!view.showing_selection());
}

#[test]
fn double_select_is_last_write_wins() {
    let mut view = SelectionView::new();
    view.select(Role::Tailor, 0.0);
    view.select(Role::Customer, 0.3);
    assert_eq!(view.selected_role(), Some(Role::Customer));

    // The first pick's deadline still governs the single flip.
    assert!(!view.advance(0.9));
    assert!(view.advance(1.0));
    // ...and the second pick does not produce another one.
    assert!(!view.advance(1.3));
    assert!(!view.advance(10.0));
}

#[test]
fn welcomed_is_irreversible() {
    let mut view = SelectionView::new();
    view.select(Role::Customer, 0.0);
    assert!(view.advance(1.5));

    view.select(Role::Tailor, 5.0);
    assert_eq!(view.selected_role(), Some(Role::Customer));
    assert_eq!(view.phase(), Phase::Welcomed);
    assert!(!view.showing_selection());
    assert!(!view.advance(100.0));
}

#[test]
fn advance_without_a_pick_never_fires() {
    let mut view = SelectionView::new();
    for step in 0..100 {
        assert!(!view.advance(step as f64));
    }
    assert!(view.showing_selection());
}
