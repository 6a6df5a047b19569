// src/ui/helpers.rs
use crate::view_models::QuestionChip;
use egui::{Button, Color32, RichText, Ui, Vec2};

pub fn big_button(ui: &mut Ui, label: &str, width: f32, height: f32, enabled: bool) -> bool {
    ui.add_enabled(enabled, Button::new(label).min_size(Vec2::new(width, height)))
        .clicked()
}

/// Mensaje de aviso bajo los botones (validación, errores de carga, envío rechazado)
pub fn message_label(ui: &mut Ui, message: &str) {
    if message.is_empty() {
        return;
    }
    ui.add_space(10.0);
    ui.label(
        RichText::new(message)
            .color(Color32::YELLOW)
            .strong(),
    );
}

/// Tira de números de pregunta. Devuelve el índice pulsado, si hay.
pub fn question_strip(ui: &mut Ui, chips: &[QuestionChip]) -> Option<usize> {
    let mut clicked = None;
    ui.horizontal_wrapped(|ui| {
        for chip in chips {
            let mut text = RichText::new(chip.label());
            if chip.answered {
                text = text.color(Color32::LIGHT_GREEN);
            }
            let response = ui
                .add(Button::new(text).selected(chip.current))
                .on_hover_text(if chip.answered { "Answered" } else { "Not answered yet" });
            if response.clicked() {
                clicked = Some(chip.idx);
            }
        }
    });
    clicked
}
