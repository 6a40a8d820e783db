//! Drag gesture and cursor state definitions.

use serde::{Deserialize, Serialize};

/// Visual phase of the drag gesture.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DragPhase {
    /// No gesture in progress.
    #[default]
    Idle,
    /// A press started a gesture and no release has ended it yet.
    Dragging,
}

/// The cursor glyph the host should display over the widget.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CursorState {
    /// Plain arrow; drag interaction disabled.
    #[default]
    Default,
    /// Open hand; the widget can be grabbed.
    Hand,
    /// Move glyph; a drag gesture is active.
    Dragging,
}

impl CursorState {
    /// Cursor for a surface with the given `movable` flag and phase.
    pub fn derive(movable: bool, phase: DragPhase) -> Self {
        match (movable, phase) {
            (false, _) => Self::Default,
            (true, DragPhase::Idle) => Self::Hand,
            (true, DragPhase::Dragging) => Self::Dragging,
        }
    }
}
