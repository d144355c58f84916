//! Touch input phases and drag notifications.

use serde::Serialize;

/// Phase of a pointer interaction, as delivered by the host toolkit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TouchPhase {
    Down,
    Move,
    Up,
    Cancel,
}

impl TouchPhase {
    /// True for the phases that end a drag.
    pub fn ends_drag(self) -> bool {
        matches!(self, Self::Up | Self::Cancel)
    }
}

/// Notification produced while a control is manipulated.
///
/// `from_user` is false when the change was made programmatically.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum DragEvent<T> {
    StartedDragging,
    Changed { value: T, from_user: bool },
    StoppedDragging,
}
