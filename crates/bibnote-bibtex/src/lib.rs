//! Bibnote BibTeX - literature notes from BibTeX/BibLaTeX files
//!
//! Turns every entry of one or more `.bib` files into a Markdown note
//! for an Obsidian-style vault: YAML front-matter, a short summary with
//! wiki-links to the authors, placeholder sections, and the original
//! entry embedded as a fenced block.
//!
//! # Pipeline
//!
//! - [`parser`]: `.bib` text to [`Record`]s (parsing via `biblatex`)
//! - [`transform`]: one [`Record`] to [`NoteFields`]
//! - [`render`]: [`NoteFields`] + [`Record`] to the note text
//! - [`writer`]: file name sanitizing and persistence
//! - [`runner`]: batch driver over input files
//!
//! # Example
//!
//! ```ignore
//! use bibnote_bibtex::{Config, run};
//! use bibnote_core::ProgressContext;
//!
//! let config = Config {
//!     output_dir: "vault/literature".into(),
//!     ..Default::default()
//! };
//!
//! let summary = run(&["refs.bib".into()], &config, &ProgressContext::new())?;
//! println!("Wrote {} notes", summary.notes_written);
//! ```

pub mod config;
pub mod parser;
pub mod record;
pub mod render;
pub mod runner;
pub mod transform;
pub mod writer;

// Re-exports
pub use config::{Config, NoteTemplate};
pub use record::Record;
pub use runner::{Summary, run};
pub use transform::{NoteFields, Year};
