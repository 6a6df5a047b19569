use crate::config::QuizConfig;
use crate::data::QuestionBank;
use crate::model::{AppState, Language};
use crate::session::{Scoring, SessionState};
use std::collections::HashMap;

// Submódulos
pub mod actions;
pub mod navigation;
pub mod queries;
pub mod resets;

/// Controlador de páginas: bienvenida -> quiz -> resultado.
///
/// Sin sesión estamos en la bienvenida; la sesión decide si estamos en el quiz
/// o en el resultado.
pub struct QuizApp {
    pub config: QuizConfig,
    /// Bancos ya cargados, por idioma. Los errores no se guardan.
    pub banks: HashMap<Language, QuestionBank>,
    pub session: Option<SessionState>,
    pub name_input: String,
    pub selected_language: Language,
    pub message: String,
    pub confirm_reset: bool,
}

impl QuizApp {
    pub fn new(config: QuizConfig) -> Self {
        let selected_language = config.default_language();
        Self {
            config,
            banks: HashMap::new(),
            session: None,
            name_input: String::new(),
            selected_language,
            message: String::new(),
            confirm_reset: false,
        }
    }

    pub fn state(&self) -> AppState {
        self.session
            .as_ref()
            .map(SessionState::page)
            .unwrap_or(AppState::Welcome)
    }

    pub fn scoring(&self) -> Scoring {
        Scoring {
            points_per_correct: self.config.points_per_correct,
            pass_percent: self.config.pass_percent,
        }
    }
}

impl Default for QuizApp {
    fn default() -> Self {
        Self::new(QuizConfig::default())
    }
}
