// src/config.rs

use crate::error::ConfigError;
use crate::model::{Language, SubmitPolicy};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "quiz_config.yaml";
pub const MAX_SAMPLE_SIZE: usize = 1000;
pub const MAX_POINTS_PER_CORRECT: u32 = 1000;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct QuizConfig {
    pub title: String,
    pub sample_size: usize,
    pub points_per_correct: u32,
    pub pass_percent: u32,
    pub submit_policy: SubmitPolicy,
    pub languages: Vec<Language>,
    /// Fichero CSV por idioma; si falta se usa el banco embebido
    pub sources: HashMap<Language, PathBuf>,
    pub marathi_font: Option<PathBuf>,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            title: "MCQ Test".to_string(),
            sample_size: 25,
            points_per_correct: 2,
            pass_percent: 50,
            submit_policy: SubmitPolicy::default(),
            languages: Language::ALL.to_vec(),
            sources: HashMap::new(),
            marathi_font: None,
        }
    }
}

impl QuizConfig {
    pub fn from_yaml(text: &str) -> Result<Self, ConfigError> {
        let config: QuizConfig = serde_yaml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::from_yaml(&text)?;
        // Rutas relativas al directorio del propio fichero de configuración
        if let Some(base) = path.parent() {
            config.resolve_paths(base);
        }
        Ok(config)
    }

    /// Argumento explícito, luego `quiz_config.yaml` si existe, luego valores por defecto.
    /// Un fichero roto no impide arrancar.
    pub fn discover(explicit: Option<PathBuf>) -> Self {
        let path = match explicit {
            Some(p) => p,
            None => {
                let default = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !default.exists() {
                    log::info!("no {DEFAULT_CONFIG_FILE} found, using built-in defaults");
                    return Self::default();
                }
                default
            }
        };

        match Self::load(&path) {
            Ok(config) => {
                log::info!("loaded config from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("{e}; falling back to built-in defaults");
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_SAMPLE_SIZE).contains(&self.sample_size) {
            return Err(ConfigError::Invalid(format!(
                "sample_size must be between 1 and {MAX_SAMPLE_SIZE}, got {}",
                self.sample_size
            )));
        }
        if !(1..=MAX_POINTS_PER_CORRECT).contains(&self.points_per_correct) {
            return Err(ConfigError::Invalid(format!(
                "points_per_correct must be between 1 and {MAX_POINTS_PER_CORRECT}, got {}",
                self.points_per_correct
            )));
        }
        if self.pass_percent > 100 {
            return Err(ConfigError::Invalid(format!(
                "pass_percent must be between 0 and 100, got {}",
                self.pass_percent
            )));
        }
        if self.languages.is_empty() {
            return Err(ConfigError::Invalid("at least one language is required".into()));
        }
        Ok(())
    }

    pub fn default_language(&self) -> Language {
        self.languages.first().copied().unwrap_or(Language::English)
    }

    /// El selector de idioma sólo aparece si hay más de uno
    pub fn has_language_choice(&self) -> bool {
        self.languages.len() > 1
    }

    fn resolve_paths(&mut self, base: &Path) {
        for path in self.sources.values_mut() {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
        if let Some(font) = self.marathi_font.as_mut() {
            if font.is_relative() {
                *font = base.join(&*font);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_yaml_gives_defaults() {
        let config = QuizConfig::from_yaml("{}").expect("defaults");
        assert_eq!(config, QuizConfig::default());
        assert_eq!(config.sample_size, 25);
        assert_eq!(config.points_per_correct, 2);
        assert_eq!(config.submit_policy, SubmitPolicy::AllAnswered);
    }

    #[test]
    fn partial_yaml_overrides_only_given_keys() {
        let yaml = r#"
sample_size: 10
submit_policy: last_question
languages: [Marathi]
sources:
  Marathi: marathi.csv
"#;
        let config = QuizConfig::from_yaml(yaml).expect("valid config");
        assert_eq!(config.sample_size, 10);
        assert_eq!(config.submit_policy, SubmitPolicy::LastQuestion);
        assert_eq!(config.languages, vec![Language::Marathi]);
        assert!(!config.has_language_choice());
        assert_eq!(config.default_language(), Language::Marathi);
        assert_eq!(
            config.sources.get(&Language::Marathi),
            Some(&PathBuf::from("marathi.csv"))
        );
        assert_eq!(config.pass_percent, 50);
    }

    #[test]
    fn rejects_zero_sample_size() {
        let err = QuizConfig::from_yaml("sample_size: 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn rejects_huge_points_and_sample_size() {
        let err = QuizConfig::from_yaml("points_per_correct: 2000000").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        let err = QuizConfig::from_yaml("sample_size: 5000").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let edge = QuizConfig::from_yaml(&format!(
            "points_per_correct: {MAX_POINTS_PER_CORRECT}\nsample_size: {MAX_SAMPLE_SIZE}"
        ))
        .expect("upper bounds are allowed");
        assert_eq!(edge.points_per_correct, MAX_POINTS_PER_CORRECT);
    }

    #[test]
    fn rejects_pass_percent_over_100() {
        let err = QuizConfig::from_yaml("pass_percent: 120").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn rejects_unknown_policy() {
        let err = QuizConfig::from_yaml("submit_policy: whenever").unwrap_err();
        assert!(matches!(err, ConfigError::Yaml(_)));
    }

    #[test]
    fn load_resolves_relative_sources_against_config_dir() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("quiz_config.yaml");
        std::fs::write(&path, "sources:\n  English: english.csv\n").expect("write config");

        let config = QuizConfig::load(&path).expect("load config");
        assert_eq!(
            config.sources.get(&Language::English),
            Some(&dir.path().join("english.csv"))
        );
    }

    #[test]
    fn discover_falls_back_on_missing_file() {
        let config = QuizConfig::discover(Some(PathBuf::from("/definitely/not/here.yaml")));
        assert_eq!(config, QuizConfig::default());
    }
}
