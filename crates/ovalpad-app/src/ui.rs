//! UI components using egui.

use egui::{
    Align2, Button, Color32, Context, CornerRadius, CursorIcon, Frame, Margin, RichText, Stroke,
    Vec2,
};
use ovalpad_core::mode::{CursorHint, Mode, ModeCommand};

/// Read-only snapshot the UI is drawn from.
#[derive(Debug, Clone, Copy, Default)]
pub struct UiState {
    pub mode: Mode,
    pub shape_count: usize,
    /// A canvas gesture owns the pointer.
    pub pointer_busy: bool,
}

/// Actions requested by the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    SetMode(ModeCommand),
}

/// Render all UI and return any triggered action.
pub fn render_ui(ctx: &Context, ui_state: &UiState) -> Option<UiAction> {
    let action = render_toolbar(ctx, ui_state);

    if ui_state.pointer_busy || !ctx.is_pointer_over_area() {
        ctx.set_cursor_icon(cursor_icon(ui_state.mode.cursor_hint()));
    }

    action
}

/// Canvas cursor for a mode's hint.
pub fn cursor_icon(hint: CursorHint) -> CursorIcon {
    match hint {
        CursorHint::Crosshair => CursorIcon::Crosshair,
        CursorHint::Hand => CursorIcon::PointingHand,
        CursorHint::MoveAll => CursorIcon::Move,
    }
}

/// Render the mode toolbar and return any triggered action.
fn render_toolbar(ctx: &Context, ui_state: &UiState) -> Option<UiAction> {
    let mut action = None;

    egui::Area::new(egui::Id::new("mode_toolbar"))
        .anchor(Align2::LEFT_TOP, Vec2::new(12.0, 12.0))
        .show(ctx, |ui| {
            panel_frame().show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.spacing_mut().item_spacing = Vec2::new(4.0, 0.0);

                    let buttons = [
                        ("Draw", "D", ModeCommand::Draw, ui_state.mode == Mode::Draw),
                        ("Select", "S", ModeCommand::Select, ui_state.mode != Mode::Draw),
                    ];
                    for (label, shortcut, command, selected) in buttons {
                        let response = ui
                            .add(Button::new(label).selected(selected))
                            .on_hover_text(format!("{label} mode ({shortcut})"));
                        if response.clicked() {
                            action = Some(UiAction::SetMode(command));
                        }
                    }
                    if ui
                        .button("Toggle")
                        .on_hover_text("Switch between Draw and Select (Space)")
                        .clicked()
                    {
                        action = Some(UiAction::SetMode(ModeCommand::Toggle));
                    }

                    ui.separator();
                    ui.label(
                        RichText::new(format!(
                            "{} mode, {} shapes",
                            ui_state.mode.name(),
                            ui_state.shape_count
                        ))
                        .color(Color32::from_gray(80)),
                    );
                });
            });
        });

    action
}

fn panel_frame() -> Frame {
    Frame::new()
        .fill(Color32::from_rgba_unmultiplied(250, 250, 252, 250))
        .corner_radius(CornerRadius::same(8))
        .stroke(Stroke::new(1.0, Color32::from_gray(220)))
        .shadow(egui::epaint::Shadow {
            spread: 0,
            blur: 8,
            offset: [0, 2],
            color: Color32::from_black_alpha(15),
        })
        .inner_margin(Margin::same(8))
}
