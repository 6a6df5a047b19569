use super::*;

impl QuizApp {
    /// "Start a new test" en la página de resultados: vuelve a la bienvenida
    /// conservando nombre e idioma.
    pub fn new_test(&mut self) {
        self.session = None;
        self.confirm_reset = false;
        self.message.clear();
    }

    /// Descarta el intento en curso (tras confirmar)
    pub fn abandon_attempt(&mut self) {
        if let Some(session) = self.session.take() {
            log::info!(
                "attempt abandoned by '{}' with {}/{} answered",
                session.user_name(),
                session.answered_count(),
                session.len()
            );
        }
        self.new_test();
    }

    pub fn confirm_reset(&mut self, ctx: &egui::Context) {
        egui::Window::new("Abandon test")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label("Are you sure? Your answers for this attempt will be lost.");
                ui.horizontal(|ui| {
                    if ui.button("Yes, abandon").clicked() {
                        self.abandon_attempt();
                    }
                    if ui.button("No").clicked() {
                        self.confirm_reset = false;
                    }
                });
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_support::app_with_bank;
    use crate::model::{OptionLetter, SubmitPolicy};

    #[test]
    fn new_test_after_result_returns_to_welcome_keeping_name() {
        let mut app = app_with_bank(10, QuizConfig {
            sample_size: 2,
            submit_policy: SubmitPolicy::Anytime,
            ..QuizConfig::default()
        });
        app.name_input = "Asha".into();
        app.start_test().expect("started");
        app.submit_exam();
        assert_eq!(app.state(), AppState::Result);

        app.new_test();
        assert_eq!(app.state(), AppState::Welcome);
        assert_eq!(app.name_input, "Asha");

        // Un nuevo intento empieza limpio
        app.start_test().expect("restarted");
        let session = app.session.as_ref().expect("session");
        assert_eq!(session.current_index(), 0);
        assert!(session.answers().is_empty());
        assert!(session.report().is_none());
    }

    #[test]
    fn abandon_discards_attempt() {
        let mut app = app_with_bank(10, QuizConfig {
            sample_size: 3,
            ..QuizConfig::default()
        });
        app.name_input = "Asha".into();
        app.start_test().expect("started");
        app.select_answer(OptionLetter::C);
        app.confirm_reset = true;

        app.abandon_attempt();
        assert_eq!(app.state(), AppState::Welcome);
        assert!(!app.confirm_reset);
        assert!(app.session.is_none());
    }
}
