//! FormKit Core Library
//!
//! Platform-agnostic state for FormKit widgets: the drag surface that backs
//! draggable containers, and the registry of visual styles.

pub mod config;
pub mod drag;
pub mod geometry;
pub mod input;
pub mod style;

pub use config::DragSurfaceConfig;
pub use drag::{CursorState, DragPhase, DragResponse, DragSurface};
pub use geometry::PixelPoint;
pub use input::{MouseButton, PointerButtons, PointerEvent};
pub use style::{Style, StyleError, StyleRegistry};

#[cfg(test)]
pub(crate) fn init_test_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
