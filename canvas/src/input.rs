//! Input model: modifier keys, mouse buttons, and the drag state machine.
//!
//! `Modifiers` and `Button` capture the operator's intent at the time of a
//! pointer event. `InputState` is the gesture tracked between pointer-down and
//! pointer-up (or the pointer leaving the map). At most one waypoint drag is
//! active at a time.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::camera::Point;

/// Modifier keys down at the time of a map click.
#[derive(Debug, Clone, Copy, Default)]
pub struct Modifiers {
    /// Click-to-remove instead of pick-up.
    pub ctrl: bool,
}

/// Which mouse button went down. Only `Primary` picks up waypoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Primary,
    Middle,
    Secondary,
}

impl Button {
    /// Map a DOM `MouseEvent.button` value.
    #[must_use]
    pub fn from_dom(button: i16) -> Self {
        match button {
            1 => Self::Middle,
            2 => Self::Secondary,
            _ => Self::Primary,
        }
    }
}

/// Gesture in progress on the map.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// The operator is dragging a waypoint.
    DraggingWaypoint {
        /// Index of the waypoint when the drag started.
        index: usize,
        /// Current pointer position in world units; not sent until release.
        world: Point,
        /// Waypoint count when the drag started. Any push that changes it
        /// may have shifted `index` onto another waypoint.
        list_len: usize,
    },
}

impl InputState {
    /// The in-progress drag as `(index, world position)`, if any.
    #[must_use]
    pub fn drag(&self) -> Option<(usize, Point)> {
        match *self {
            Self::Idle => None,
            Self::DraggingWaypoint { index, world, .. } => Some((index, world)),
        }
    }
}
