//! The drag surface state machine.

use crate::config::DragSurfaceConfig;
use crate::geometry::PixelPoint;
use crate::input::{PointerButtons, PointerEvent};

use super::state::{CursorState, DragPhase};

/// Observable effects of a single event, reported back to the host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DragResponse {
    /// The widget position changed; the host should reposition it.
    pub moved: bool,
    /// The cursor glyph changed; the host should update it.
    pub cursor_changed: bool,
}

impl DragResponse {
    /// Combine the effects of two events.
    pub fn union(self, other: Self) -> Self {
        Self {
            moved: self.moved || other.moved,
            cursor_changed: self.cursor_changed || other.cursor_changed,
        }
    }

    /// Check if the event had any observable effect.
    pub fn changed(&self) -> bool {
        self.moved || self.cursor_changed
    }
}

/// Drag state for one widget.
///
/// Pointer positions passed to the event entry points are relative to the
/// widget's own origin. Movement deltas are always measured against the
/// anchor captured at the most recent press; moves do not advance the anchor,
/// so each move event adds the full displacement from the press point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSurface {
    movable: bool,
    /// Pointer position at the most recent press while movable.
    anchor: Option<PixelPoint>,
    /// Offset of the widget within its container.
    position: PixelPoint,
    phase: DragPhase,
}

impl Default for DragSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl DragSurface {
    /// Create a movable surface at the container origin.
    pub fn new() -> Self {
        Self::at(PixelPoint::ZERO)
    }

    /// Create a movable surface at `position`.
    pub fn at(position: PixelPoint) -> Self {
        Self {
            movable: true,
            anchor: None,
            position,
            phase: DragPhase::Idle,
        }
    }

    /// Create a surface from host configuration.
    pub fn from_config(config: &DragSurfaceConfig) -> Self {
        Self {
            movable: config.movable,
            ..Self::at(config.initial_position)
        }
    }

    pub fn position(&self) -> PixelPoint {
        self.position
    }

    pub fn is_movable(&self) -> bool {
        self.movable
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    /// Check if a drag gesture is visually active.
    pub fn is_dragging(&self) -> bool {
        self.phase == DragPhase::Dragging
    }

    /// The pointer position captured at the most recent press, if any.
    pub fn anchor(&self) -> Option<PixelPoint> {
        self.anchor
    }

    /// The cursor glyph for the current state.
    pub fn cursor(&self) -> CursorState {
        CursorState::derive(self.movable, self.phase)
    }

    /// Enable or disable drag interaction.
    ///
    /// Always ends the dragging visual state: the cursor becomes
    /// [`CursorState::Hand`] when enabling and [`CursorState::Default`] when
    /// disabling. The anchor of an in-progress gesture is kept.
    pub fn set_movable(&mut self, movable: bool) -> DragResponse {
        let before = self.cursor();
        if self.movable != movable {
            log::debug!("Drag surface movable: {} -> {}", self.movable, movable);
        }
        self.movable = movable;
        self.phase = DragPhase::Idle;
        self.cursor_response(before)
    }

    /// Pointer pressed at `position`.
    ///
    /// Starts a gesture when movable. A press during an active gesture
    /// replaces the anchor.
    pub fn on_pointer_down(&mut self, position: PixelPoint) -> DragResponse {
        if !self.movable {
            return DragResponse::default();
        }
        let before = self.cursor();
        log::debug!("Drag gesture started at ({}, {})", position.x, position.y);
        self.anchor = Some(position);
        self.phase = DragPhase::Dragging;
        self.cursor_response(before)
    }

    /// Pointer moved to `position` with `buttons` held.
    ///
    /// Applies `position - anchor` to the widget offset when movable and the
    /// primary button is held. A move before any press has no anchor and
    /// is ignored.
    pub fn on_pointer_move(
        &mut self,
        position: PixelPoint,
        buttons: PointerButtons,
    ) -> DragResponse {
        if !self.movable || !buttons.primary() {
            return DragResponse::default();
        }
        let Some(anchor) = self.anchor else {
            log::trace!("Pointer move ignored: no press recorded yet");
            return DragResponse::default();
        };

        let delta = position - anchor;
        if delta == PixelPoint::ZERO {
            return DragResponse::default();
        }
        self.position += delta;
        log::trace!(
            "Drag move by ({}, {}) to ({}, {})",
            delta.x,
            delta.y,
            self.position.x,
            self.position.y
        );
        DragResponse {
            moved: true,
            cursor_changed: false,
        }
    }

    /// Pointer released at `position`. Ends the gesture when movable.
    pub fn on_pointer_up(&mut self, position: PixelPoint) -> DragResponse {
        if !self.movable {
            return DragResponse::default();
        }
        let before = self.cursor();
        if self.phase == DragPhase::Dragging {
            log::debug!("Drag gesture ended at ({}, {})", position.x, position.y);
        }
        self.phase = DragPhase::Idle;
        self.cursor_response(before)
    }

    /// Dispatch a host pointer event to the matching entry point.
    pub fn handle_pointer_event(&mut self, event: PointerEvent) -> DragResponse {
        match event {
            PointerEvent::Down { position } => self.on_pointer_down(position),
            PointerEvent::Move { position, buttons } => self.on_pointer_move(position, buttons),
            PointerEvent::Up { position } => self.on_pointer_up(position),
        }
    }

    fn cursor_response(&self, cursor_before: CursorState) -> DragResponse {
        DragResponse {
            moved: false,
            cursor_changed: self.cursor() != cursor_before,
        }
    }
}
