//! Configuration loading from TOML files

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Global configuration for bibnote
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub output: OutputConfig,
    pub note: NoteConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub default_dir: PathBuf,
    pub max_title_len: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_dir: PathBuf::from("."),
            max_title_len: bibnote_bibtex::config::DEFAULT_MAX_TITLE_LEN,
        }
    }
}

/// Overrides for the fixed note text; unset keys keep the built-in text
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct NoteConfig {
    pub fence_label: Option<String>,
    pub tldr_placeholder: Option<String>,
    pub notes_placeholder: Option<String>,
    pub missing_abstract: Option<String>,
}

impl NoteConfig {
    pub fn template(&self) -> bibnote_bibtex::NoteTemplate {
        let mut template = bibnote_bibtex::NoteTemplate::default();
        if let Some(label) = &self.fence_label {
            template.fence_label = label.clone();
        }
        if let Some(text) = &self.tldr_placeholder {
            template.tldr_placeholder = text.clone();
        }
        if let Some(text) = &self.notes_placeholder {
            template.notes_placeholder = text.clone();
        }
        if let Some(text) = &self.missing_abstract {
            template.missing_abstract = text.clone();
        }
        template
    }
}

impl Config {
    /// Load configuration from default locations
    ///
    /// Search order:
    /// 1. ./bibnote.toml (current directory)
    /// 2. ~/.config/bibnote/config.toml
    ///
    /// If no config file found, returns default config.
    pub fn load() -> Result<Self> {
        let local_config = PathBuf::from("bibnote.toml");
        if local_config.exists() {
            return Self::from_file(&local_config);
        }

        if let Some(config_dir) = directories::ProjectDirs::from("", "", "bibnote") {
            let user_config = config_dir.config_dir().join("config.toml");
            if user_config.exists() {
                return Self::from_file(&user_config);
            }
        }

        log::debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Load configuration from a specific file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Pipeline config; `output_dir` (from `-o`) wins over the file's default
    pub fn pipeline(&self, output_dir: Option<PathBuf>) -> bibnote_bibtex::Config {
        bibnote_bibtex::Config {
            output_dir: output_dir.unwrap_or_else(|| self.output.default_dir.clone()),
            max_title_len: self.output.max_title_len,
            template: self.note.template(),
        }
    }
}
