use super::*;
use crate::error::StartError;
use crate::model::OptionLetter;
use crate::session::validate_name;
use rand::Rng;

impl QuizApp {
    /// Botón "Start Test" de la bienvenida.
    pub fn start_test(&mut self) -> Result<(), StartError> {
        let mut rng = rand::rng();
        self.start_test_with_rng(&mut rng)
    }

    pub fn start_test_with_rng<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), StartError> {
        self.message.clear();
        match self.build_session(rng) {
            Ok(session) => {
                log::info!(
                    "test started for '{}' ({} questions, {:?})",
                    session.user_name(),
                    session.len(),
                    session.language()
                );
                self.session = Some(session);
                Ok(())
            }
            Err(e) => {
                match &e {
                    StartError::Validation(_) => log::warn!("start refused: {e}"),
                    _ => log::error!("cannot start test: {e}"),
                }
                self.message = e.to_string();
                Err(e)
            }
        }
    }

    fn build_session<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<SessionState, StartError> {
        // El nombre se valida antes de tocar el banco
        let name = validate_name(&self.name_input)?;
        let language = self.selected_language;
        let tagged = self.config.has_language_choice().then_some(language);
        let sample_size = self.config.sample_size;

        let bank = self.bank_for(language)?;
        SessionState::start(&name, tagged, bank, sample_size, rng)
    }

    /// Marca la opción para la pregunta actual
    pub fn select_answer(&mut self, option: OptionLetter) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let idx = session.current_index();
        if let Err(e) = session.record_answer(idx, option) {
            log::warn!("{e}");
            self.message = e.to_string();
        }
    }

    pub fn clear_current_answer(&mut self) {
        if let Some(session) = self.session.as_mut() {
            let idx = session.current_index();
            if let Err(e) = session.clear_answer(idx) {
                log::warn!("{e}");
                self.message = e.to_string();
            }
        }
    }

    /// Botón "Submit". Si la política no lo permite se queda en el quiz con un aviso.
    pub fn submit_exam(&mut self) {
        let policy = self.config.submit_policy;
        let scoring = self.scoring();
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let who = session.user_name().to_string();
        match session.submit(policy, scoring) {
            Ok(report) => {
                log::info!(
                    "test submitted by '{who}': {}/{} ({})",
                    report.score,
                    report.max_score,
                    if report.passed { "pass" } else { "fail" }
                );
                self.message.clear();
            }
            Err(e) => {
                log::warn!("submit refused: {e}");
                self.message = e.to_string();
            }
        }
    }
}
