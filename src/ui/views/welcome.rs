use crate::QuizApp;
use crate::ui::helpers::{big_button, message_label};
use crate::ui::layout::centered_panel;
use egui::{Context, Key, TextEdit};

pub fn ui_welcome(app: &mut QuizApp, ctx: &Context) {
    centered_panel(ctx, 280.0, 540.0, |ui| {
        let content_width = ui.available_width();

        ui.vertical_centered(|ui| {
            ui.heading(format!("Welcome to the {}", app.config.title));
            ui.add_space(18.0);

            let btn_w = (content_width * 0.9).clamp(120.0, 400.0);

            ui.label("Enter your name:");
            let name_field = ui.add(
                TextEdit::singleline(&mut app.name_input)
                    .hint_text("Your name")
                    .desired_width(btn_w),
            );
            let enter_pressed =
                name_field.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));

            // El selector solo si hay más de un idioma configurado
            if app.config.has_language_choice() {
                ui.add_space(10.0);
                let languages = app.config.languages.clone();
                egui::ComboBox::from_label("Choose the test language")
                    .selected_text(app.selected_language.label())
                    .show_ui(ui, |ui| {
                        for lang in languages {
                            ui.selectable_value(&mut app.selected_language, lang, lang.label());
                        }
                    });
            }

            ui.add_space(18.0);
            let start = big_button(ui, "Start Test", btn_w, 40.0, true);
            if start || enter_pressed {
                // El error ya queda en app.message; el foco vuelve al nombre
                if app.start_test().is_err() {
                    name_field.request_focus();
                }
            }

            message_label(ui, &app.message);
        });
    });
}
