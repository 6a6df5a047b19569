use super::*;
use crate::data::QuestionSource;
use crate::error::LoadError;
use crate::model::SubmitPolicy;
use crate::view_models::QuestionChip;

impl QuizApp {
    pub fn source_for(&self, language: Language) -> QuestionSource {
        self.config
            .sources
            .get(&language)
            .cloned()
            .map(QuestionSource::File)
            .unwrap_or(QuestionSource::Embedded(language))
    }

    /// Carga (una vez) el banco del idioma
    pub fn bank_for(&mut self, language: Language) -> Result<&QuestionBank, LoadError> {
        if !self.banks.contains_key(&language) {
            let source = self.source_for(language);
            let bank = QuestionBank::load(&source, Some(language))?;
            self.banks.insert(language, bank);
        }
        self.banks.get(&language).ok_or(LoadError::Empty)
    }

    pub fn question_chips(&self) -> Vec<QuestionChip> {
        let Some(session) = self.session.as_ref() else {
            return Vec::new();
        };
        (0..session.len())
            .map(|i| QuestionChip {
                idx: i,
                number: i + 1,
                answered: session.answer_for(i).is_some(),
                current: i == session.current_index(),
            })
            .collect()
    }

    /// "Submit" se ve siempre, salvo con la política de última pregunta
    pub fn submit_visible(&self) -> bool {
        match self.session.as_ref() {
            Some(session) => {
                self.config.submit_policy != SubmitPolicy::LastQuestion
                    || session.is_last_question()
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_support::app_with_bank;
    use crate::model::OptionLetter;
    use std::path::PathBuf;

    #[test]
    fn missing_source_falls_back_to_embedded() {
        let app = QuizApp::default();
        assert_eq!(
            app.source_for(Language::Marathi),
            QuestionSource::Embedded(Language::Marathi)
        );
    }

    #[test]
    fn configured_source_is_a_file() {
        let mut config = QuizConfig::default();
        config
            .sources
            .insert(Language::English, PathBuf::from("english.csv"));
        let app = QuizApp::new(config);
        assert_eq!(
            app.source_for(Language::English),
            QuestionSource::File(PathBuf::from("english.csv"))
        );
    }

    #[test]
    fn failed_load_is_not_cached() {
        let mut config = QuizConfig::default();
        config
            .sources
            .insert(Language::English, PathBuf::from("/no/such/english.csv"));
        let mut app = QuizApp::new(config);
        assert!(app.bank_for(Language::English).is_err());
        assert!(!app.banks.contains_key(&Language::English));
    }

    #[test]
    fn chips_follow_answers_and_position() {
        let mut app = app_with_bank(5, QuizConfig {
            sample_size: 3,
            ..QuizConfig::default()
        });
        app.name_input = "Asha".into();
        app.start_test().expect("started");
        app.select_answer(OptionLetter::B);
        app.next_question();

        let chips = app.question_chips();
        assert_eq!(chips.len(), 3);
        assert!(chips[0].answered);
        assert!(!chips[1].answered);
        assert!(chips[1].current);
        assert!(!chips[0].current);
    }

    #[test]
    fn submit_visibility_depends_on_policy() {
        let mut app = app_with_bank(5, QuizConfig {
            sample_size: 2,
            submit_policy: SubmitPolicy::LastQuestion,
            ..QuizConfig::default()
        });
        assert!(!app.submit_visible());
        app.name_input = "Asha".into();
        app.start_test().expect("started");
        assert!(!app.submit_visible());
        app.next_question();
        assert!(app.submit_visible());
    }
}
