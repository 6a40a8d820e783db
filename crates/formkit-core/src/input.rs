//! Pointer event types delivered by the host toolkit.

use serde::{Deserialize, Serialize};

use crate::geometry::PixelPoint;

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// The set of buttons held while the pointer moves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerButtons {
    pub left: bool,
    pub right: bool,
    pub middle: bool,
}

impl PointerButtons {
    /// No buttons held.
    pub const NONE: Self = Self {
        left: false,
        right: false,
        middle: false,
    };

    /// Only the primary (left) button held.
    pub const PRIMARY: Self = Self {
        left: true,
        right: false,
        middle: false,
    };

    /// Build a set from individual buttons.
    pub fn from_buttons(buttons: &[MouseButton]) -> Self {
        let mut set = Self::NONE;
        for &button in buttons {
            set.insert(button);
        }
        set
    }

    /// Mark `button` as held.
    pub fn insert(&mut self, button: MouseButton) {
        match button {
            MouseButton::Left => self.left = true,
            MouseButton::Right => self.right = true,
            MouseButton::Middle => self.middle = true,
        }
    }

    /// Check if `button` is held.
    pub fn contains(&self, button: MouseButton) -> bool {
        match button {
            MouseButton::Left => self.left,
            MouseButton::Right => self.right,
            MouseButton::Middle => self.middle,
        }
    }

    /// Check if the primary button is held.
    pub fn primary(&self) -> bool {
        self.left
    }

    pub fn is_empty(&self) -> bool {
        !(self.left || self.right || self.middle)
    }
}

/// A pointer callback as dispatched by the host.
///
/// Positions are relative to the receiving widget's own origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerEvent {
    Down {
        position: PixelPoint,
    },
    Move {
        position: PixelPoint,
        buttons: PointerButtons,
    },
    Up {
        position: PixelPoint,
    },
}

impl PointerEvent {
    /// The pointer position carried by the event.
    pub fn position(&self) -> PixelPoint {
        match *self {
            Self::Down { position } | Self::Move { position, .. } | Self::Up { position } => {
                position
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_set() {
        let set = PointerButtons::from_buttons(&[MouseButton::Left, MouseButton::Middle]);
        assert!(set.primary());
        assert!(set.contains(MouseButton::Middle));
        assert!(!set.contains(MouseButton::Right));
        assert!(!set.is_empty());
        assert!(PointerButtons::NONE.is_empty());
        assert!(!PointerButtons::from_buttons(&[MouseButton::Right]).primary());
    }

    #[test]
    fn test_event_position() {
        let event = PointerEvent::Move {
            position: PixelPoint::new(4, 2),
            buttons: PointerButtons::PRIMARY,
        };
        assert_eq!(event.position(), PixelPoint::new(4, 2));
    }
}
