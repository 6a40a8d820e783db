//! Floating container that the user can drag around.
//!
//! The panel keeps no drag state itself: the caller owns a
//! [`DragSurface`] and lends it to the panel every frame. The panel turns
//! egui pointer input into surface events and reflects the surface's
//! position and cursor back into egui.

use std::hash::Hash;

use egui::{Area, Context, CursorIcon, Frame, Id, Order, Pos2, Response, Sense, Ui, Vec2};
use formkit_core::{CursorState, DragResponse, DragSurface, PixelPoint, PointerButtons, Style};

use crate::layout::panel_frame;
use crate::palette::accent_color;

/// Map surface cursor feedback to an egui cursor icon.
pub fn cursor_icon(cursor: CursorState) -> CursorIcon {
    match cursor {
        CursorState::Default => CursorIcon::Default,
        CursorState::Hand => CursorIcon::Grab,
        CursorState::Dragging => CursorIcon::Move,
    }
}

/// Result of showing a [`DragPanel`].
pub struct DragPanelResponse<R> {
    /// Value returned by the content closure.
    pub inner: R,
    /// Interaction response of the panel background.
    pub response: Response,
    /// Effects of this frame's pointer events on the surface.
    pub drag: DragResponse,
}

/// A draggable panel backed by a [`DragSurface`].
///
/// Pressing anywhere on the panel that is not an interactive widget starts
/// a drag, including on plain labels.
///
/// # Example
/// ```ignore
/// let mut surface = DragSurface::at(PixelPoint::new(40, 40));
/// // each frame:
/// DragPanel::new("tools", &mut surface)
///     .style(Style::Teal)
///     .show(ctx, |ui| ui.label("Drag me"));
/// ```
pub struct DragPanel<'a> {
    id: Id,
    surface: &'a mut DragSurface,
    style: Style,
    frame: Option<Frame>,
}

impl<'a> DragPanel<'a> {
    /// Create a panel for `surface`. `id_salt` must be unique per panel.
    pub fn new(id_salt: impl Hash, surface: &'a mut DragSurface) -> Self {
        Self {
            id: Id::new(id_salt),
            surface,
            style: Style::Default,
            frame: None,
        }
    }

    /// Style used for the default frame's border.
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Override the panel frame.
    pub fn frame(mut self, frame: Frame) -> Self {
        self.frame = Some(frame);
        self
    }

    /// Show the panel at the surface position and route this frame's input.
    pub fn show<R>(
        self,
        ctx: &Context,
        add_contents: impl FnOnce(&mut Ui) -> R,
    ) -> DragPanelResponse<R> {
        let frame = self
            .frame
            .unwrap_or_else(|| panel_frame(accent_color(self.style)));
        let surface = self.surface;

        // The background senses drags. Labels are made non-selectable so
        // that pressing on text grabs the panel; buttons and other
        // interactive children still take their own input.
        let area = Area::new(self.id)
            .fixed_pos(to_pos(surface.position()))
            .order(Order::Middle)
            .movable(false)
            .sense(Sense::drag())
            .show(ctx, |ui| {
                ui.style_mut().interaction.selectable_labels = false;
                frame.show(ui, add_contents).inner
            });

        let response = area.response;
        let drag = feed_pointer(ctx, surface, &response);

        if response.hovered() || surface.is_dragging() {
            ctx.set_cursor_icon(cursor_icon(surface.cursor()));
        }
        if drag.moved {
            ctx.request_repaint();
        }

        DragPanelResponse {
            inner: area.inner,
            response,
            drag,
        }
    }
}

/// Translate egui drag callbacks into surface events.
///
/// Positions are made relative to the panel's origin for this frame.
fn feed_pointer(
    ctx: &Context,
    surface: &mut DragSurface,
    response: &Response,
) -> DragResponse {
    let origin = response.rect.min;
    let local = |pos: Pos2| to_pixel(pos - origin);
    let (buttons, press_origin, latest) = ctx.input(|i| {
        let buttons = PointerButtons {
            left: i.pointer.primary_down(),
            right: i.pointer.secondary_down(),
            middle: i.pointer.middle_down(),
        };
        (buttons, i.pointer.press_origin(), i.pointer.latest_pos())
    });

    let mut drag = DragResponse::default();
    if response.drag_started() {
        if let Some(pos) = press_origin.or(response.interact_pointer_pos()) {
            drag = drag.union(surface.on_pointer_down(local(pos)));
        }
    }
    if response.dragged() {
        if let Some(pos) = response.interact_pointer_pos() {
            drag = drag.union(surface.on_pointer_move(local(pos), buttons));
        }
    }
    if response.drag_stopped() {
        let pos = response.interact_pointer_pos().or(latest).unwrap_or(origin);
        drag = drag.union(surface.on_pointer_up(local(pos)));
    }
    drag
}

fn to_pos(p: PixelPoint) -> Pos2 {
    Pos2::new(p.x as f32, p.y as f32)
}

fn to_pixel(v: Vec2) -> PixelPoint {
    PixelPoint::round(f64::from(v.x), f64::from(v.y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_icons() {
        assert_eq!(cursor_icon(CursorState::Default), CursorIcon::Default);
        assert_eq!(cursor_icon(CursorState::Hand), CursorIcon::Grab);
        assert_eq!(cursor_icon(CursorState::Dragging), CursorIcon::Move);
    }

    #[test]
    fn test_pixel_conversion_rounds() {
        assert_eq!(to_pixel(Vec2::new(4.6, -1.4)), PixelPoint::new(5, -1));
        assert_eq!(to_pos(PixelPoint::new(3, 7)), Pos2::new(3.0, 7.0));
    }

    const ORIGIN: PixelPoint = PixelPoint::new(100, 100);

    fn run_frame(
        ctx: &Context,
        surface: &mut DragSurface,
        events: Vec<egui::Event>,
    ) -> egui::FullOutput {
        let input = egui::RawInput {
            screen_rect: Some(egui::Rect::from_min_size(Pos2::ZERO, egui::vec2(800.0, 600.0))),
            events,
            ..Default::default()
        };
        ctx.run(input, |ctx| {
            DragPanel::new("panel", &mut *surface).show(ctx, |ui| {
                ui.label("Drag me");
            });
        })
    }

    fn button(pos: Pos2, pressed: bool) -> egui::Event {
        egui::Event::PointerButton {
            pos,
            button: egui::PointerButton::Primary,
            pressed,
            modifiers: egui::Modifiers::default(),
        }
    }

    /// Hover, press at `press`, move 5 px right per frame for ten frames,
    /// then release. Returns the cursor shown on the last move frame.
    fn drag_right(ctx: &Context, surface: &mut DragSurface, press: Pos2) -> CursorIcon {
        for _ in 0..2 {
            run_frame(ctx, surface, vec![egui::Event::PointerMoved(press)]);
        }
        run_frame(ctx, surface, vec![button(press, true)]);

        let mut cursor = CursorIcon::Default;
        let mut pos = press;
        for _ in 0..10 {
            pos.x += 5.0;
            let output = run_frame(ctx, surface, vec![egui::Event::PointerMoved(pos)]);
            cursor = output.platform_output.cursor_icon;
        }
        run_frame(ctx, surface, vec![button(pos, false)]);
        run_frame(ctx, surface, vec![]);
        cursor
    }

    #[test]
    fn test_drag_on_margin_follows_pointer() {
        let ctx = Context::default();
        let mut surface = DragSurface::at(ORIGIN);

        let cursor = drag_right(&ctx, &mut surface, Pos2::new(103.0, 103.0));

        assert_eq!(cursor, CursorIcon::Move);
        assert_eq!(surface.position(), PixelPoint::new(150, 100));
        assert_eq!(surface.cursor(), CursorState::Hand);
    }

    #[test]
    fn test_drag_on_label_follows_pointer() {
        let ctx = Context::default();
        let mut surface = DragSurface::at(ORIGIN);

        let cursor = drag_right(&ctx, &mut surface, Pos2::new(112.0, 112.0));

        assert_eq!(cursor, CursorIcon::Move);
        assert_eq!(surface.position(), PixelPoint::new(150, 100));
        assert!(!surface.is_dragging());
    }

    #[test]
    fn test_not_movable_panel_stays_in_place() {
        let ctx = Context::default();
        let mut surface = DragSurface::at(ORIGIN);
        surface.set_movable(false);

        let cursor = drag_right(&ctx, &mut surface, Pos2::new(103.0, 103.0));

        assert_eq!(cursor, CursorIcon::Default);
        assert_eq!(surface.position(), ORIGIN);
        assert_eq!(surface.cursor(), CursorState::Default);
        assert_eq!(surface.anchor(), None);
    }

    #[test]
    fn test_frame_without_input_leaves_surface_alone() {
        let ctx = Context::default();
        let mut surface = DragSurface::at(PixelPoint::new(20, 30));
        let before = surface.clone();

        let mut drag = None;
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            let shown = DragPanel::new("panel", &mut surface)
                .style(Style::Teal)
                .show(ctx, |ui| {
                    ui.label("content");
                    7
                });
            assert_eq!(shown.inner, 7);
            drag = Some(shown.drag);
        });

        assert_eq!(drag, Some(DragResponse::default()));
        assert_eq!(surface, before);
    }
}
