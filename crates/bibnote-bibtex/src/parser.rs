//! BibTeX/BibLaTeX parsing into [`Record`]s
//!
//! Tokenizing is handled by `biblatex`'s raw parser. Field values are
//! kept exactly as written between their delimiters (TeX commands,
//! nested braces and line breaks included); only `@string` macros are
//! substituted. Duplicate citation keys are allowed.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Result, anyhow};
use biblatex::{Field, Pair, RawBibliography, RawChunk, RawEntry};
use bibnote_core::NoteError;

use crate::record::Record;

/// `@string` name (lowercase) -> raw replacement text
type Abbreviations = HashMap<String, String>;

/// Parse a whole bibliography, preserving entry order
pub fn parse_bibtex(src: &str) -> Result<Vec<Record>> {
    let raw = RawBibliography::parse(src).map_err(|e| anyhow!("{e}"))?;
    let abbreviations = collect_abbreviations(&raw.abbreviations);
    Ok(raw
        .entries
        .iter()
        .map(|entry| to_record(&entry.v, &abbreviations))
        .collect())
}

/// Read and parse one `.bib` file.
///
/// A missing file is [`NoteError::NotFound`]; unreadable or unparseable
/// content is [`NoteError::Parse`] and yields no records at all.
pub fn read_bibliography(path: &Path) -> Result<Vec<Record>, NoteError> {
    if !path.exists() {
        return Err(NoteError::NotFound(path.to_path_buf()));
    }

    let src = std::fs::read_to_string(path).map_err(|e| NoteError::parse(path, e.to_string()))?;
    parse_bibtex(&src).map_err(|e| NoteError::parse(path, e.to_string()))
}

/// Later `@string` definitions may refer to earlier ones
fn collect_abbreviations(pairs: &[Pair<'_>]) -> Abbreviations {
    let mut abbreviations = Abbreviations::new();
    for pair in pairs {
        let value = flatten_field(&pair.value.v, &abbreviations);
        abbreviations.insert(pair.key.v.to_lowercase(), value);
    }
    abbreviations
}

fn to_record(entry: &RawEntry<'_>, abbreviations: &Abbreviations) -> Record {
    let fields = entry
        .fields
        .iter()
        .map(|pair| {
            (
                pair.key.v.to_lowercase(),
                flatten_field(&pair.value.v, abbreviations),
            )
        })
        .collect();

    Record {
        key: entry.key.v.to_string(),
        entry_type: entry.kind.v.to_lowercase(),
        fields,
    }
}

/// Concatenate the `#`-joined parts of a value. Undefined macros
/// (`month = jan` without a matching `@string`) keep their name.
fn flatten_field(field: &Field<'_>, abbreviations: &Abbreviations) -> String {
    let mut out = String::new();
    for chunk in field {
        match &chunk.v {
            RawChunk::Normal(text) => out.push_str(text),
            RawChunk::Abbreviation(name) => match abbreviations.get(&name.to_lowercase()) {
                Some(value) => out.push_str(value),
                None => out.push_str(name),
            },
        }
    }
    out
}
