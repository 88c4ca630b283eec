//! Note pipeline configuration

use std::path::PathBuf;

/// Longest title prefix (in characters) used for a note file name
pub const DEFAULT_MAX_TITLE_LEN: usize = 150;

/// Runtime configuration for the note pipeline
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory receiving the Markdown notes (created if missing)
    pub output_dir: PathBuf,
    /// Maximum number of title characters kept in the file name
    pub max_title_len: usize,
    /// Fixed text of the generated notes
    pub template: NoteTemplate,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            max_title_len: DEFAULT_MAX_TITLE_LEN,
            template: NoteTemplate::default(),
        }
    }
}

/// Fixed text blocks written into every note
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteTemplate {
    /// Language label of the fenced block holding the original entry
    pub fence_label: String,
    /// Quote under the TL;DR heading
    pub tldr_placeholder: String,
    /// Quote under the notes heading
    pub notes_placeholder: String,
    /// Abstract section body when the entry has none
    pub missing_abstract: String,
}

impl Default for NoteTemplate {
    fn default() -> Self {
        Self {
            fence_label: "bibtex".to_string(),
            tldr_placeholder: "Add a one-sentence summary here.".to_string(),
            notes_placeholder: "Add your personal notes and thoughts here.".to_string(),
            missing_abstract: "No abstract available.".to_string(),
        }
    }
}
