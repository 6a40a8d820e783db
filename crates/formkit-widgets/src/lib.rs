//! Reusable egui widget components for FormKit.
//!
//! This crate composes the toolkit-agnostic state from `formkit-core` into
//! egui widgets:
//!
//! - **DragPanel**: a floating container repositioned by pointer drags
//! - **StylePicker**: a combo box listing the registered visual styles
//! - **Palette**: accent colours for each style
//! - **Layout**: section labels, panel frames

pub mod drag_panel;
pub mod layout;
pub mod palette;
pub mod style_picker;

pub use drag_panel::{cursor_icon, DragPanel, DragPanelResponse};
pub use layout::{panel_frame, section_label};
pub use palette::{accent_color, style_swatch};
pub use style_picker::StylePicker;

/// Standard sizing constants used across widgets.
pub mod sizing {
    /// Small swatch / icon size
    pub const SMALL: f32 = 12.0;
    /// Default combo box width
    pub const PICKER_WIDTH: f32 = 140.0;
    /// Standard corner radius
    pub const CORNER_RADIUS: u8 = 4;
    /// Panel corner radius
    pub const PANEL_RADIUS: u8 = 8;
}

/// Standard colors used across widgets.
pub mod theme {
    use egui::Color32;

    /// Muted text color
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 120, 120);
    /// Border color
    pub const BORDER: Color32 = Color32::from_rgb(220, 220, 220);
    /// Selection/active color (blue)
    pub const ACCENT: Color32 = Color32::from_rgb(59, 130, 246);
    /// Panel background
    pub const PANEL_BG: Color32 = Color32::from_rgba_premultiplied(250, 250, 252, 250);
}
