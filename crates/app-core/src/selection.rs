//! Role selection state machine: `Selecting -> Transitioning -> Welcomed`.
//!
//! The one-shot delay before the welcome panel is an owned deadline rather
//! than a detached timer callback, so dropping the view cancels the pending
//! transition by construction; there is no callback left to fire into freed
//! state.

use crate::constants::ROLE_TRANSITION_DELAY_SEC;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Tailor,
    Customer,
}

impl Role {
    pub fn label(self) -> &'static str {
        match self {
            Role::Tailor => "tailor",
            Role::Customer => "customer",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Selecting,
    Transitioning,
    Welcomed,
}

#[derive(Clone, Debug)]
pub struct SelectionView {
    selected: Option<Role>,
    phase: Phase,
    /// Armed once, by the first select; absolute time in seconds.
    transition_at: Option<f64>,
}

impl SelectionView {
    pub fn new() -> Self {
        Self {
            selected: None,
            phase: Phase::Selecting,
            transition_at: None,
        }
    }

    /// Record a chosen role. Synchronous: `selected_role` reflects the pick
    /// immediately. The first pick arms the one-shot deadline; a later pick
    /// before it fires only overwrites the role (last write wins), so the
    /// screen transition still happens exactly once. Picks after the
    /// transition are ignored.
    pub fn select(&mut self, role: Role, now_sec: f64) {
        match self.phase {
            Phase::Selecting => {
                self.selected = Some(role);
                self.phase = Phase::Transitioning;
                self.transition_at = Some(now_sec + ROLE_TRANSITION_DELAY_SEC);
                log::info!("[selection] picked {}", role.label());
            }
            Phase::Transitioning => {
                self.selected = Some(role);
                log::info!("[selection] re-picked {}", role.label());
            }
            Phase::Welcomed => {}
        }
    }

    /// Drive the pending transition. Returns true on the single call where
    /// the view flips to `Welcomed`; the flip never reverts.
    pub fn advance(&mut self, now_sec: f64) -> bool {
        if self.phase != Phase::Transitioning {
            return false;
        }
        match self.transition_at {
            Some(at) if now_sec >= at => {
                self.phase = Phase::Welcomed;
                self.transition_at = None;
                log::info!("[selection] welcomed");
                true
            }
            _ => false,
        }
    }

    pub fn selected_role(&self) -> Option<Role> {
        self.selected
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether the role-choice cards are still on screen.
    pub fn showing_selection(&self) -> bool {
        self.phase != Phase::Welcomed
    }
}

impl Default for SelectionView {
    fn default() -> Self {
        Self::new()
    }
}
