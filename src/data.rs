// src/data.rs

use crate::error::{InsufficientDataError, LoadError};
use crate::model::{Language, OptionLetter, QuestionRecord};
use csv::{ReaderBuilder, StringRecord, Trim};
use rand::Rng;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

const EMBEDDED_ENGLISH: &str = include_str!("data/english.csv");
const EMBEDDED_MARATHI: &str = include_str!("data/marathi.csv");

// Nombres de columna aceptados (las variantes de los bancos no coinciden)
const QUESTION_COLUMNS: &[&str] = &["question"];
const OPTION_COLUMNS: [&[&str]; 4] = [
    &["option a", "choice1"],
    &["option b", "choice2"],
    &["option c", "choice3"],
    &["option d", "choice4"],
];
const ANSWER_COLUMNS: &[&str] = &["answer", "correct_answer"];
const LANGUAGE_COLUMNS: &[&str] = &["language"];

/// De dónde sale el banco de un idioma.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionSource {
    File(PathBuf),
    Embedded(Language),
}

impl QuestionSource {
    pub fn describe(&self) -> String {
        match self {
            QuestionSource::File(path) => path.display().to_string(),
            QuestionSource::Embedded(lang) => format!("built-in {lang} bank"),
        }
    }
}

/// Banco de preguntas ya cargado. Inmutable.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionBank {
    questions: Vec<QuestionRecord>,
}

struct ColumnMap {
    question: usize,
    options: [usize; 4],
    answer: usize,
    language: Option<usize>,
}

impl ColumnMap {
    fn from_headers(headers: &StringRecord) -> Result<Self, LoadError> {
        let find = |aliases: &[&str]| {
            headers.iter().position(|h| {
                let h = h.trim_start_matches('\u{feff}').trim().to_lowercase();
                aliases.iter().any(|a| *a == h)
            })
        };

        let question = find(QUESTION_COLUMNS).ok_or(LoadError::MissingColumn("Question"))?;
        let option_names = ["Option A", "Option B", "Option C", "Option D"];
        let mut options = [0usize; 4];
        for (slot, (aliases, name)) in options
            .iter_mut()
            .zip(OPTION_COLUMNS.iter().zip(option_names))
        {
            *slot = find(*aliases).ok_or(LoadError::MissingColumn(name))?;
        }
        let answer = find(ANSWER_COLUMNS).ok_or(LoadError::MissingColumn("Answer"))?;

        Ok(Self {
            question,
            options,
            answer,
            language: find(LANGUAGE_COLUMNS),
        })
    }
}

impl QuestionBank {
    pub fn new(questions: Vec<QuestionRecord>) -> Self {
        Self { questions }
    }

    /// Carga desde cualquier `Read` con cabecera CSV. Si se pasa `language` y la
    /// fuente tiene columna `Language`, sólo se quedan las filas de ese idioma.
    pub fn from_reader<R: Read>(reader: R, language: Option<Language>) -> Result<Self, LoadError> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .trim(Trim::All)
            .from_reader(reader);

        let columns = ColumnMap::from_headers(rdr.headers()?)?;
        let mut questions = Vec::new();

        for (i, result) in rdr.records().enumerate() {
            let record = result?;
            let row = i + 1;
            if record.iter().all(|cell| cell.trim().is_empty()) {
                continue;
            }

            let row_language = columns
                .language
                .and_then(|c| record.get(c))
                .and_then(Language::parse);
            // Con columna de idioma, solo pasan las filas etiquetadas con el pedido
            if let (Some(_), Some(wanted)) = (columns.language, language) {
                if row_language != Some(wanted) {
                    log::debug!("row {row}: skipped, language tag is not {wanted}");
                    continue;
                }
            }

            questions.push(parse_row(&record, &columns, row, row_language)?);
        }

        if questions.is_empty() {
            return Err(LoadError::Empty);
        }
        Ok(Self { questions })
    }

    pub fn from_path(path: &Path, language: Option<Language>) -> Result<Self, LoadError> {
        let file = File::open(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        // El fichero se cierra al salir de aquí
        Self::from_reader(file, language)
    }

    pub fn embedded(language: Language) -> Result<Self, LoadError> {
        Self::embedded_filtered(language, Some(language))
    }

    /// Banco incluido en el binario; `filter` solo decide qué filas se quedan.
    fn embedded_filtered(bank: Language, filter: Option<Language>) -> Result<Self, LoadError> {
        let text = match bank {
            Language::English => EMBEDDED_ENGLISH,
            Language::Marathi => EMBEDDED_MARATHI,
        };
        Self::from_reader(text.as_bytes(), filter)
    }

    pub fn load(source: &QuestionSource, language: Option<Language>) -> Result<Self, LoadError> {
        let bank = match source {
            QuestionSource::File(path) => Self::from_path(path, language),
            QuestionSource::Embedded(lang) => Self::embedded_filtered(*lang, language),
        }?;
        log::info!(
            "loaded {} questions from {}",
            bank.len(),
            source.describe()
        );
        Ok(bank)
    }

    pub fn questions(&self) -> &[QuestionRecord] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// `n` preguntas al azar, sin repetición. Falla si el banco no da para tantas.
    pub fn sample<R: Rng + ?Sized>(
        &self,
        n: usize,
        rng: &mut R,
    ) -> Result<Vec<QuestionRecord>, InsufficientDataError> {
        if n > self.questions.len() {
            return Err(InsufficientDataError {
                requested: n,
                available: self.questions.len(),
            });
        }
        Ok(rand::seq::index::sample(rng, self.questions.len(), n)
            .into_iter()
            .map(|i| self.questions[i].clone())
            .collect())
    }
}

fn parse_row(
    record: &StringRecord,
    columns: &ColumnMap,
    row: usize,
    language: Option<Language>,
) -> Result<QuestionRecord, LoadError> {
    let cell = |idx: usize| record.get(idx).unwrap_or("").trim().to_string();

    let question_text = cell(columns.question);
    if question_text.is_empty() {
        return Err(LoadError::EmptyQuestion { row });
    }
    let options = columns.options.map(cell);

    let raw_answer = cell(columns.answer);
    let correct_option = resolve_answer(&raw_answer, &options)
        .ok_or_else(|| LoadError::InvalidAnswer {
            row,
            value: raw_answer.clone(),
        })?;

    Ok(QuestionRecord {
        question_text,
        options,
        correct_option,
        language,
    })
}

/// Letra (cualquier caja) o el texto completo de la opción correcta
fn resolve_answer(raw: &str, options: &[String; 4]) -> Option<OptionLetter> {
    OptionLetter::parse(raw).or_else(|| {
        let wanted = raw.trim();
        if wanted.is_empty() {
            return None;
        }
        OptionLetter::ALL
            .into_iter()
            .find(|l| options[l.index()].trim().eq_ignore_ascii_case(wanted))
    })
}
