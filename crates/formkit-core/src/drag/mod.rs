//! Pointer-driven repositioning for container widgets.
//!
//! A [`DragSurface`] holds the drag state of one widget. The host toolkit
//! feeds it pointer-down / move / up callbacks and reads back the new
//! position and cursor glyph. The surface is composed into a concrete
//! widget rather than being a widget itself.

mod state;
mod surface;

pub use state::{CursorState, DragPhase};
pub use surface::{DragResponse, DragSurface};
