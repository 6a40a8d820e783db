//! Theme picker listing the registered styles.

use egui::{ComboBox, Ui};
use formkit_core::{Style, StyleRegistry};

use crate::layout::section_label;
use crate::palette::style_swatch;
use crate::sizing;

/// A labelled combo box for choosing a [`Style`].
pub struct StylePicker<'a> {
    label: &'a str,
    selected: &'a mut Style,
    width: f32,
}

impl<'a> StylePicker<'a> {
    /// Create a picker editing `selected`.
    pub fn new(label: &'a str, selected: &'a mut Style) -> Self {
        Self {
            label,
            selected,
            width: sizing::PICKER_WIDTH,
        }
    }

    /// Set the combo box width.
    pub fn width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    /// Show the picker and return true if the selection changed.
    pub fn show(self, ui: &mut Ui) -> bool {
        let before = *self.selected;
        let selected = self.selected;

        section_label(ui, self.label);
        ComboBox::from_id_salt(self.label)
            .selected_text(before.name())
            .width(self.width)
            .show_ui(ui, |ui| {
                let names = StyleRegistry::list_styles();
                for (style, name) in StyleRegistry::styles().iter().zip(names) {
                    ui.horizontal(|ui| {
                        style_swatch(ui, *style);
                        ui.selectable_value(&mut *selected, *style, name);
                    });
                }
            });

        let changed = *selected != before;
        if changed {
            log::debug!("Style changed: {} -> {}", before, selected);
        }
        changed
    }
}
