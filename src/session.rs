// src/session.rs

use crate::data::QuestionBank;
use crate::error::{SessionError, StartError, ValidationError};
use crate::model::{AppState, Language, OptionLetter, QuestionRecord, SubmitPolicy};
use crate::view_models::ResultRow;
use rand::Rng;
use std::collections::BTreeMap;

/// Reglas de puntuación de un intento.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scoring {
    pub points_per_correct: u32,
    pub pass_percent: u32,
}

impl Default for Scoring {
    fn default() -> Self {
        Self {
            points_per_correct: 2,
            pass_percent: 50,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoreReport {
    pub correct: usize,
    pub total: usize,
    pub score: u64,
    pub max_score: u64,
    pub pass_threshold: u64,
    pub passed: bool,
    pub rows: Vec<ResultRow>,
}

/// Estado de un único intento: preguntas sorteadas, posición y respuestas.
#[derive(Clone, Debug)]
pub struct SessionState {
    user_name: String,
    language: Option<Language>,
    question_set: Vec<QuestionRecord>,
    current_index: usize,
    answers: BTreeMap<usize, OptionLetter>,
    page: AppState,
    report: Option<ScoreReport>,
}

pub fn validate_name(name: &str) -> Result<String, ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::NameRequired);
    }
    Ok(trimmed.to_string())
}

impl SessionState {
    /// Valida el nombre y sortea `sample_size` preguntas del banco.
    pub fn start<R: Rng + ?Sized>(
        name: &str,
        language: Option<Language>,
        bank: &QuestionBank,
        sample_size: usize,
        rng: &mut R,
    ) -> Result<Self, StartError> {
        let user_name = validate_name(name)?;
        let question_set = bank.sample(sample_size, rng)?;
        Ok(Self::with_questions(user_name, language, question_set))
    }

    /// Intento sobre un conjunto ya elegido, sin sorteo.
    pub fn with_questions(
        user_name: String,
        language: Option<Language>,
        question_set: Vec<QuestionRecord>,
    ) -> Self {
        Self {
            user_name,
            language,
            question_set,
            current_index: 0,
            answers: BTreeMap::new(),
            page: AppState::Quiz,
            report: None,
        }
    }

    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    pub fn language(&self) -> Option<Language> {
        self.language
    }

    pub fn page(&self) -> AppState {
        self.page
    }

    pub fn questions(&self) -> &[QuestionRecord] {
        &self.question_set
    }

    pub fn len(&self) -> usize {
        self.question_set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.question_set.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_question(&self) -> Option<&QuestionRecord> {
        self.question_set.get(self.current_index)
    }

    pub fn answers(&self) -> &BTreeMap<usize, OptionLetter> {
        &self.answers
    }

    pub fn answer_for(&self, index: usize) -> Option<OptionLetter> {
        self.answers.get(&index).copied()
    }

    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    pub fn unanswered_indices(&self) -> Vec<usize> {
        (0..self.question_set.len())
            .filter(|i| !self.answers.contains_key(i))
            .collect()
    }

    pub fn is_last_question(&self) -> bool {
        self.current_index + 1 >= self.question_set.len()
    }

    pub fn report(&self) -> Option<&ScoreReport> {
        self.report.as_ref()
    }

    /// Volver a elegir la misma opción no cambia nada; elegir otra la sustituye.
    pub fn record_answer(&mut self, index: usize, option: OptionLetter) -> Result<(), SessionError> {
        self.check_index(index)?;
        self.answers.insert(index, option);
        Ok(())
    }

    pub fn clear_answer(&mut self, index: usize) -> Result<(), SessionError> {
        self.check_index(index)?;
        self.answers.remove(&index);
        Ok(())
    }

    /// Mueve el puntero `delta` posiciones, recortando a [0, len-1]
    pub fn navigate(&mut self, delta: isize) {
        let last = self.question_set.len().saturating_sub(1);
        let target = self.current_index.saturating_add_signed(delta);
        self.current_index = target.min(last);
    }

    pub fn go_to(&mut self, index: usize) {
        let last = self.question_set.len().saturating_sub(1);
        self.current_index = index.min(last);
    }

    pub fn can_submit(&self, policy: SubmitPolicy) -> Result<(), SessionError> {
        match policy {
            SubmitPolicy::Anytime => Ok(()),
            SubmitPolicy::LastQuestion if !self.is_last_question() => {
                Err(SessionError::NotOnLastQuestion)
            }
            SubmitPolicy::LastQuestion => Ok(()),
            SubmitPolicy::AllAnswered => {
                let remaining = self.question_set.len() - self.answers.len();
                if remaining > 0 {
                    Err(SessionError::Unanswered { remaining })
                } else {
                    Ok(())
                }
            }
        }
    }

    /// Pasa a la página de resultados y puntúa una sola vez.
    pub fn submit(
        &mut self,
        policy: SubmitPolicy,
        scoring: Scoring,
    ) -> Result<&ScoreReport, SessionError> {
        let report = match self.report.take() {
            Some(report) => report,
            None => {
                self.can_submit(policy)?;
                self.page = AppState::Result;
                self.score(scoring)
            }
        };
        let stored: &ScoreReport = self.report.insert(report);
        Ok(stored)
    }

    /// Una respuesta que falta cuenta como fallo
    pub fn score(&self, scoring: Scoring) -> ScoreReport {
        let rows: Vec<ResultRow> = self
            .question_set
            .iter()
            .enumerate()
            .map(|(i, q)| ResultRow::new(i, q, self.answer_for(i)))
            .collect();

        let correct = rows.iter().filter(|r| r.is_correct).count();
        let total = self.question_set.len();
        // En u64: ni puntos grandes ni bancos largos desbordan la comparación
        let points = u64::from(scoring.points_per_correct);
        let percent = u64::from(scoring.pass_percent);
        let score = (correct as u64).saturating_mul(points);
        let max_score = (total as u64).saturating_mul(points);
        let pass_threshold = max_score.saturating_mul(percent).div_ceil(100);

        ScoreReport {
            correct,
            total,
            score,
            max_score,
            pass_threshold,
            passed: u128::from(score) * 100 >= u128::from(max_score) * u128::from(percent),
            rows,
        }
    }

    fn check_index(&self, index: usize) -> Result<(), SessionError> {
        if index >= self.question_set.len() {
            return Err(SessionError::QuestionOutOfRange {
                index,
                len: self.question_set.len(),
            });
        }
        Ok(())
    }
}
