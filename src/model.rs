use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum Language {
    English,
    Marathi,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::English, Language::Marathi];

    pub fn label(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Marathi => "Marathi",
        }
    }

    /// Acepta el nombre en inglés o en marathi, sin distinguir mayúsculas
    pub fn parse(value: &str) -> Option<Language> {
        match value.trim().to_lowercase().as_str() {
            "english" | "en" => Some(Language::English),
            "marathi" | "mr" | "मराठी" => Some(Language::Marathi),
            _ => None,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Letra de una opción (A–D).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum OptionLetter {
    A,
    B,
    C,
    D,
}

impl OptionLetter {
    pub const ALL: [OptionLetter; 4] = [
        OptionLetter::A,
        OptionLetter::B,
        OptionLetter::C,
        OptionLetter::D,
    ];

    pub fn index(self) -> usize {
        match self {
            OptionLetter::A => 0,
            OptionLetter::B => 1,
            OptionLetter::C => 2,
            OptionLetter::D => 3,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            OptionLetter::A => 'A',
            OptionLetter::B => 'B',
            OptionLetter::C => 'C',
            OptionLetter::D => 'D',
        }
    }

    /// Normaliza la letra: recorta espacios y no distingue mayúsculas (" b " -> B)
    pub fn parse(value: &str) -> Option<OptionLetter> {
        match value.trim().to_ascii_uppercase().as_str() {
            "A" => Some(OptionLetter::A),
            "B" => Some(OptionLetter::B),
            "C" => Some(OptionLetter::C),
            "D" => Some(OptionLetter::D),
            _ => None,
        }
    }
}

impl fmt::Display for OptionLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct QuestionRecord {
    pub question_text: String,
    pub options: [String; 4],
    pub correct_option: OptionLetter,
    #[serde(default)]
    pub language: Option<Language>,
}

impl QuestionRecord {
    pub fn option_text(&self, letter: OptionLetter) -> &str {
        &self.options[letter.index()]
    }

    /// Etiqueta que se pinta en el radio ("A: texto"); la letra se guarda aparte
    pub fn option_label(&self, letter: OptionLetter) -> String {
        format!("{letter}: {}", self.option_text(letter))
    }

    pub fn is_correct(&self, answer: Option<OptionLetter>) -> bool {
        answer == Some(self.correct_option)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Welcome,
    Quiz,
    Result,
}

impl Default for AppState {
    fn default() -> Self {
        AppState::Welcome
    }
}

/// Cuándo se permite pulsar "Submit".
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SubmitPolicy {
    #[default]
    AllAnswered,
    LastQuestion,
    Anytime,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_letter_parse_is_trimmed_and_case_insensitive() {
        assert_eq!(OptionLetter::parse(" b "), Some(OptionLetter::B));
        assert_eq!(OptionLetter::parse("D"), Some(OptionLetter::D));
        assert_eq!(OptionLetter::parse("E"), None);
        assert_eq!(OptionLetter::parse(""), None);
    }

    #[test]
    fn option_label_keeps_letter_and_text() {
        let q = QuestionRecord {
            question_text: "2 + 2?".into(),
            options: ["3".into(), "4".into(), "5".into(), "6".into()],
            correct_option: OptionLetter::B,
            language: None,
        };
        assert_eq!(q.option_label(OptionLetter::B), "B: 4");
        assert!(q.is_correct(Some(OptionLetter::B)));
        assert!(!q.is_correct(None));
    }

    #[test]
    fn language_parse_accepts_native_name() {
        assert_eq!(Language::parse("मराठी"), Some(Language::Marathi));
        assert_eq!(Language::parse(" English "), Some(Language::English));
        assert_eq!(Language::parse("hindi"), None);
    }
}
