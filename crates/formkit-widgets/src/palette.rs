//! Accent colours for the registered styles.
//!
//! Hues follow the Tailwind CSS palette (mostly the 500 shade).

use egui::{vec2, Color32, CornerRadius, Sense, Stroke, StrokeKind, Ui};
use formkit_core::Style;

use crate::{sizing, theme};

/// Accent colour used for borders and highlights under `style`.
pub fn accent_color(style: Style) -> Color32 {
    match style {
        Style::Default => theme::ACCENT,
        Style::Black => Color32::from_rgb(17, 17, 17),
        Style::White => Color32::from_rgb(255, 255, 255),
        Style::Silver => Color32::from_rgb(148, 163, 184),
        Style::Blue => Color32::from_rgb(37, 99, 235),
        Style::Green => Color32::from_rgb(34, 197, 94),
        Style::Lime => Color32::from_rgb(132, 204, 22),
        Style::Teal => Color32::from_rgb(20, 184, 166),
        Style::Orange => Color32::from_rgb(249, 115, 22),
        Style::Brown => Color32::from_rgb(146, 64, 14),
        Style::Pink => Color32::from_rgb(236, 72, 153),
        Style::Magenta => Color32::from_rgb(217, 70, 239),
        Style::Purple => Color32::from_rgb(168, 85, 247),
        Style::Red => Color32::from_rgb(239, 68, 68),
        Style::Yellow => Color32::from_rgb(234, 179, 8),
    }
}

/// Draw a small square swatch of the style's accent colour.
pub fn style_swatch(ui: &mut Ui, style: Style) {
    let size = vec2(sizing::SMALL, sizing::SMALL);
    let (rect, _response) = ui.allocate_exact_size(size, Sense::hover());
    if ui.is_rect_visible(rect) {
        let radius = CornerRadius::same(sizing::CORNER_RADIUS / 2);
        ui.painter().rect_filled(rect, radius, accent_color(style));
        ui.painter().rect_stroke(
            rect,
            radius,
            Stroke::new(1.0, theme::BORDER),
            StrokeKind::Inside,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_colored_styles_have_distinct_accents() {
        // Default shares the toolkit accent; every other style is unique.
        let accents: HashSet<Color32> = Style::ALL
            .iter()
            .filter(|s| **s != Style::Default)
            .map(|s| accent_color(*s))
            .collect();
        assert_eq!(accents.len(), Style::ALL.len() - 1);
    }

    #[test]
    fn test_default_uses_theme_accent() {
        assert_eq!(accent_color(Style::Default), theme::ACCENT);
    }
}
