// src/view_models.rs

use crate::model::{OptionLetter, QuestionRecord};

/// Fila del desglose de resultados.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultRow {
    pub number: usize, // 1-based
    pub question_text: String,
    pub chosen: Option<OptionLetter>,
    pub chosen_text: Option<String>,
    pub correct: OptionLetter,
    pub correct_text: String,
    pub is_correct: bool,
}

impl ResultRow {
    pub fn new(index: usize, question: &QuestionRecord, chosen: Option<OptionLetter>) -> Self {
        Self {
            number: index + 1,
            question_text: question.question_text.clone(),
            chosen,
            chosen_text: chosen.map(|l| question.option_text(l).to_string()),
            correct: question.correct_option,
            correct_text: question.option_text(question.correct_option).to_string(),
            is_correct: question.is_correct(chosen),
        }
    }

    pub fn chosen_label(&self) -> String {
        match (self.chosen, &self.chosen_text) {
            (Some(letter), Some(text)) => format!("{letter}: {text}"),
            _ => "—".to_string(),
        }
    }

    pub fn correct_label(&self) -> String {
        format!("{}: {}", self.correct, self.correct_text)
    }

    pub fn status(&self) -> &'static str {
        if self.is_correct {
            "✅ Correct"
        } else if self.chosen.is_none() {
            "⏺ Not answered"
        } else {
            "❌ Incorrect"
        }
    }
}

/// Casilla de la tira de navegación por número de pregunta.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionChip {
    pub idx: usize,
    pub number: usize,
    pub answered: bool,
    pub current: bool,
}

impl QuestionChip {
    pub fn label(&self) -> String {
        if self.answered {
            format!("{}✔", self.number)
        } else {
            self.number.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question() -> QuestionRecord {
        QuestionRecord {
            question_text: "Capital of India?".into(),
            options: [
                "Mumbai".into(),
                "New Delhi".into(),
                "Kolkata".into(),
                "Chennai".into(),
            ],
            correct_option: OptionLetter::B,
            language: None,
        }
    }

    #[test]
    fn row_labels_show_letter_and_text() {
        let row = ResultRow::new(0, &question(), Some(OptionLetter::A));
        assert_eq!(row.number, 1);
        assert_eq!(row.chosen_label(), "A: Mumbai");
        assert_eq!(row.correct_label(), "B: New Delhi");
        assert_eq!(row.status(), "❌ Incorrect");
    }

    #[test]
    fn unanswered_row_is_marked() {
        let row = ResultRow::new(4, &question(), None);
        assert_eq!(row.number, 5);
        assert!(!row.is_correct);
        assert_eq!(row.chosen_label(), "—");
        assert_eq!(row.status(), "⏺ Not answered");
    }
}
