use super::*;

impl QuizApp {
    pub fn previous_question(&mut self) {
        self.move_by(-1);
    }

    pub fn next_question(&mut self) {
        self.move_by(1);
    }

    /// Salto directo desde la tira de números
    pub fn jump_to_question(&mut self, index: usize) {
        if let Some(session) = self.session.as_mut() {
            session.go_to(index);
            self.message.clear();
        }
    }

    fn move_by(&mut self, delta: isize) {
        if let Some(session) = self.session.as_mut() {
            session.navigate(delta);
            self.message.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_support::app_with_bank;

    fn started(sample_size: usize) -> QuizApp {
        let mut app = app_with_bank(10, QuizConfig {
            sample_size,
            ..QuizConfig::default()
        });
        app.name_input = "Asha".into();
        app.start_test().expect("started");
        app
    }

    fn index(app: &QuizApp) -> usize {
        app.session.as_ref().expect("session").current_index()
    }

    #[test]
    fn previous_on_first_question_stays() {
        let mut app = started(4);
        app.previous_question();
        assert_eq!(index(&app), 0);
    }

    #[test]
    fn next_stops_at_last_question() {
        let mut app = started(4);
        for _ in 0..10 {
            app.next_question();
        }
        assert_eq!(index(&app), 3);
        app.previous_question();
        assert_eq!(index(&app), 2);
    }

    #[test]
    fn jump_is_clamped() {
        let mut app = started(4);
        app.jump_to_question(2);
        assert_eq!(index(&app), 2);
        app.jump_to_question(40);
        assert_eq!(index(&app), 3);
    }

    #[test]
    fn navigation_clears_messages() {
        let mut app = started(4);
        app.message = "2 question(s) still unanswered".into();
        app.next_question();
        assert!(app.message.is_empty());
    }
}
