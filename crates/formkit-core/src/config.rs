//! Host-editable options for drag surfaces.

use serde::{Deserialize, Serialize};

use crate::geometry::PixelPoint;

/// Configuration surface of a [`DragSurface`](crate::DragSurface).
///
/// Missing fields fall back to their defaults, so a property editor can
/// persist only what the user changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DragSurfaceConfig {
    /// Whether pointer-driven repositioning is enabled.
    pub movable: bool,
    /// Offset of the widget within its container at creation.
    pub initial_position: PixelPoint,
}

impl Default for DragSurfaceConfig {
    fn default() -> Self {
        Self {
            movable: true,
            initial_position: PixelPoint::ZERO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_movable() {
        let config = DragSurfaceConfig::default();
        assert!(config.movable);
        assert_eq!(config.initial_position, PixelPoint::ZERO);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: DragSurfaceConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, DragSurfaceConfig::default());

        let config: DragSurfaceConfig = serde_json::from_str(r#"{"movable": false}"#).unwrap();
        assert!(!config.movable);
        assert_eq!(config.initial_position, PixelPoint::ZERO);
    }

    #[test]
    fn test_initial_position_from_json() {
        let config: DragSurfaceConfig =
            serde_json::from_str(r#"{"initial_position": {"x": 10, "y": -4}}"#).unwrap();
        assert!(config.movable);
        assert_eq!(config.initial_position, PixelPoint::new(10, -4));
    }
}
