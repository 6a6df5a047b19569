use crate::QuizApp;
use crate::ui::helpers::big_button;
use egui::{CentralPanel, Color32, Context, Grid, RichText, ScrollArea};

pub fn ui_result(app: &mut QuizApp, ctx: &Context) {
    let Some(session) = app.session.as_ref() else {
        return;
    };
    let Some(report) = session.report().cloned() else {
        return;
    };
    let name = session.user_name().to_string();
    let language = session.language();

    CentralPanel::default().show(ctx, |ui| {
        let max_width = 700.0;
        let panel_width = (ui.available_width() * 0.97).min(max_width);

        ui.vertical_centered(|ui| {
            ui.set_max_width(panel_width);

            ui.heading("Your Results");
            ui.add_space(10.0);
            ui.label(RichText::new(format!("Name: {name}")).strong());
            if let Some(lang) = language {
                ui.label(RichText::new(format!("Language: {lang}")).strong());
            }
            ui.label(
                RichText::new(format!("Score: {}/{}", report.score, report.max_score)).strong(),
            );
            ui.label(format!(
                "{} of {} correct · pass mark {}",
                report.correct, report.total, report.pass_threshold
            ));
            ui.add_space(8.0);

            if report.passed {
                ui.label(
                    RichText::new("🎉 Congratulations! You Passed!")
                        .color(Color32::LIGHT_GREEN)
                        .heading(),
                );
            } else {
                ui.label(
                    RichText::new("❌ Better luck next time!")
                        .color(Color32::LIGHT_RED)
                        .heading(),
                );
            }

            ui.add_space(12.0);
            ui.label("Correct answers review:");
            ui.add_space(5.0);

            ScrollArea::vertical()
                .max_height(380.0)
                .max_width(panel_width)
                .show(ui, |ui| {
                    Grid::new("quiz_results_grid")
                        .striped(true)
                        .spacing([12.0, 4.0])
                        .show(ui, |ui| {
                            ui.label("#");
                            ui.label("Question");
                            ui.label("Your answer");
                            ui.label("Correct answer");
                            ui.label("Status");
                            ui.end_row();

                            for r in &report.rows {
                                ui.label(r.number.to_string());
                                ui.label(&r.question_text);
                                ui.label(r.chosen_label());
                                ui.label(r.correct_label());
                                ui.label(r.status());
                                ui.end_row();
                            }
                        });
                });

            ui.add_space(16.0);
            if big_button(ui, "Start a new test", panel_width / 2.0, 36.0, true) {
                app.new_test();
            }
        });
    });
}
