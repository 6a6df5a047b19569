use crate::QuizApp;
use crate::model::{Language, OptionLetter, QuestionRecord};
use crate::ui::helpers::{message_label, question_strip};
use crate::ui::layout::button_row;
use egui::{Align, CentralPanel, Context, RichText, ScrollArea};

/// Lo que la vista necesita de la sesión, copiado para no mantener el préstamo.
struct QuizSnapshot {
    name: String,
    language: Option<Language>,
    index: usize,
    len: usize,
    answered: usize,
    question: QuestionRecord,
    selected: Option<OptionLetter>,
    is_last: bool,
}

fn snapshot(app: &QuizApp) -> Option<QuizSnapshot> {
    let session = app.session.as_ref()?;
    Some(QuizSnapshot {
        name: session.user_name().to_string(),
        language: session.language(),
        index: session.current_index(),
        len: session.len(),
        answered: session.answered_count(),
        question: session.current_question()?.clone(),
        selected: session.answer_for(session.current_index()),
        is_last: session.is_last_question(),
    })
}

pub fn ui_quiz(app: &mut QuizApp, ctx: &Context) {
    let Some(snap) = snapshot(app) else {
        return;
    };
    let chips = app.question_chips();
    let submit_visible = app.submit_visible();

    CentralPanel::default().show(ctx, |ui| {
        let max_width = 650.0;
        let panel_width = (ui.available_width() * 0.97).min(max_width);

        ui.vertical_centered(|ui| {
            ui.set_max_width(panel_width);

            ui.heading(format!("Good Luck, {}!", snap.name));
            if let Some(lang) = snap.language {
                ui.label(RichText::new(format!("Language: {lang}")).strong());
            }
            ui.add_space(6.0);
            ui.label(format!(
                "Question {} of {} · {} answered",
                snap.index + 1,
                snap.len,
                snap.answered
            ));
            ui.add_space(10.0);

            // Enunciado con scroll fijo
            ScrollArea::vertical()
                .id_salt("prompt")
                .max_height(150.0)
                .show(ui, |ui| {
                    ui.label(
                        RichText::new(format!(
                            "Q{}: {}",
                            snap.index + 1,
                            snap.question.question_text
                        ))
                        .size(20.0)
                        .strong(),
                    );
                });

            ui.add_space(10.0);

            // Opciones: ninguna marcada hasta que el usuario elige
            ui.with_layout(egui::Layout::top_down(Align::Min), |ui| {
                ui.label("Choose an answer:");
                for letter in OptionLetter::ALL {
                    let checked = snap.selected == Some(letter);
                    if ui
                        .radio(checked, snap.question.option_label(letter))
                        .clicked()
                    {
                        app.select_answer(letter);
                    }
                }
                if snap.selected.is_some() && ui.small_button("Clear answer").clicked() {
                    app.clear_current_answer();
                }
            });

            ui.add_space(12.0);

            let mut buttons = vec![("Previous", snap.index > 0), ("Next", !snap.is_last)];
            if submit_visible {
                buttons.push(("Submit", true));
            }
            let clicked = button_row(ui, panel_width, &buttons);
            if clicked[0] {
                app.previous_question();
            }
            if clicked[1] {
                app.next_question();
            }
            if clicked.get(2).copied().unwrap_or(false) {
                app.submit_exam();
            }

            ui.add_space(12.0);
            if let Some(idx) = question_strip(ui, &chips) {
                app.jump_to_question(idx);
            }

            message_label(ui, &app.message);
        });
    });
}
