use crate::QuizApp;
use egui::{Button, CentralPanel, Context, Frame, Ui, Vec2, Visuals};

pub fn top_panel(app: &mut QuizApp, ctx: &Context) {
    egui::TopBottomPanel::top("menu_panel").show(ctx, |ui| {
        ui.horizontal_centered(|ui| {
            if ui.button("🔄 Abandon test").clicked() {
                app.confirm_reset = true;
            }
        });
    });
}

pub fn bottom_panel(ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        // ----------- BOTONES DE TEMA -----------
        ui.with_layout(
            egui::Layout::right_to_left(egui::Align::Center),
            |ui| {
                if ui.button("🌙 Dark mode").clicked() {
                    ctx.set_visuals(Visuals::dark());
                }
                if ui.button("☀ Light mode").clicked() {
                    ctx.set_visuals(Visuals::light());
                }
            }
        );
    });
}

/// Panel centrado tanto vertical como horizontalmente,
/// con un tamaño de contenido máximo y un bloque interior `inner`.
pub fn centered_panel(
    ctx: &Context,
    est_height: f32,
    max_width: f32,
    inner: impl FnOnce(&mut Ui),
) {
    CentralPanel::default().show(ctx, |ui| {
        // Espacio vertical para centrar
        let extra = ((ui.available_height() - est_height) / 2.0).max(0.0);
        ui.add_space(extra);
        ui.vertical_centered(|ui| {
            Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(16, 16))
                .show(ui, |ui| {
                    // Ajusta anchura
                    let w = ui.available_width().min(max_width);
                    ui.set_width(w);
                    inner(ui);
                });
        });
        ui.add_space(extra);
    });
}

/// Fila de botones del mismo tamaño, centrada en el ancho dado.
/// Cada botón es (etiqueta, habilitado); devuelve qué botones se pulsaron.
pub fn button_row(ui: &mut Ui, panel_width: f32, buttons: &[(&str, bool)]) -> Vec<bool> {
    let n = buttons.len().max(1) as f32;
    let btn_w = (panel_width - 8.0 * (n - 1.0)) / n;
    let mut clicked = vec![false; buttons.len()];
    ui.horizontal(|ui| {
        // espacio para centrar la fila en su panel
        ui.add_space(((ui.available_width() - panel_width) / 2.0).max(0.0));
        for (slot, (label, enabled)) in clicked.iter_mut().zip(buttons) {
            *slot = ui
                .add_enabled(*enabled, Button::new(*label).min_size(Vec2::new(btn_w, 36.0)))
                .clicked();
        }
    });
    clicked
}
