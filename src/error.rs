// src/error.rs

use std::path::PathBuf;
use thiserror::Error;

/// Fallos al leer un banco de preguntas.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read question file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed question file: {0}")]
    Csv(#[from] csv::Error),
    #[error("question file is missing the '{0}' column")]
    MissingColumn(&'static str),
    #[error("row {row}: '{value}' is not a valid answer (expected A, B, C or D)")]
    InvalidAnswer { row: usize, value: String },
    #[error("row {row}: question text is empty")]
    EmptyQuestion { row: usize },
    #[error("no questions found in the source")]
    Empty,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("not enough questions: {requested} requested but only {available} available")]
pub struct InsufficientDataError {
    pub requested: usize,
    pub available: usize,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter your name!")]
    NameRequired,
}

/// Todo lo que puede impedir que empiece un intento.
#[derive(Debug, Error)]
pub enum StartError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    InsufficientData(#[from] InsufficientDataError),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("question {index} does not exist (the test has {len} questions)")]
    QuestionOutOfRange { index: usize, len: usize },
    #[error("the test can only be submitted from the last question")]
    NotOnLastQuestion,
    #[error("{remaining} question(s) still unanswered")]
    Unanswered { remaining: usize },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}
