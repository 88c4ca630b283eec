//! Field extraction and cleanup for one [`Record`]
//!
//! Every function here is pure and infallible: missing fields degrade
//! to empty values, never to errors.

use crate::record::Record;

/// Title used when the entry has no `title` field
pub const DEFAULT_TITLE: &str = "No Title";
/// Key used when the entry has no citation key
pub const DEFAULT_KEY: &str = "no_id";
/// Rendering of [`Year::Unknown`]
pub const NO_DATE: &str = "n.d.";

/// Publication year, or the "no date" sentinel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Year {
    Known(String),
    Unknown,
}

impl Year {
    /// The year, `None` for the sentinel
    pub fn known(&self) -> Option<&str> {
        match self {
            Self::Known(year) => Some(year),
            Self::Unknown => None,
        }
    }

    pub fn as_str(&self) -> &str {
        self.known().unwrap_or(NO_DATE)
    }
}

/// Cleaned view of a record, ready to render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteFields {
    pub key: String,
    pub title: String,
    pub authors: Vec<String>,
    pub journal: Option<String>,
    pub year: Year,
    pub doi: Option<String>,
    pub url: Option<String>,
    pub tags: Vec<String>,
    pub abstract_text: Option<String>,
}

impl NoteFields {
    pub fn from_record(record: &Record) -> Self {
        let key = if record.key.is_empty() {
            DEFAULT_KEY.to_string()
        } else {
            record.key.clone()
        };

        Self {
            key,
            title: clean_title(record.get("title").unwrap_or(DEFAULT_TITLE)),
            authors: parse_authors(record.get("author").unwrap_or_default()),
            journal: resolve_journal(record),
            year: resolve_year(record),
            doi: record.non_empty("doi").map(String::from),
            url: record.non_empty("url").map(String::from),
            tags: format_tags(record.get("keywords").unwrap_or_default()),
            abstract_text: record
                .get("abstract")
                .map(clean_abstract)
                .filter(|a| !a.is_empty()),
        }
    }
}

/// Drop BibTeX grouping braces
pub fn clean_title(title: &str) -> String {
    title.chars().filter(|c| !matches!(c, '{' | '}')).collect()
}

/// Split an `author` field on the literal `" and "`.
///
/// Whitespace runs containing a line break become one space first.
/// Corporate names containing " and " are split too.
pub fn parse_authors(author: &str) -> Vec<String> {
    if author.trim().is_empty() {
        return Vec::new();
    }
    collapse_line_breaks(author)
        .split(" and ")
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(String::from)
        .collect()
}

/// Keywords (`;` or `,` separated) to nested tags: `machine-learning` -> `Machine/Learning`
pub fn format_tags(keywords: &str) -> Vec<String> {
    keywords
        .split(|c: char| c == ';' || c == ',')
        .map(str::trim)
        .filter(|kw| !kw.is_empty())
        .map(|kw| {
            title_case(kw)
                .split_whitespace()
                .collect::<String>()
                .replace('-', "/")
        })
        .collect()
}

/// `year`, else the part of `date` before the first `-`
pub fn resolve_year(record: &Record) -> Year {
    if let Some(year) = record.non_empty("year") {
        return Year::Known(year.trim().to_string());
    }
    match record.get("date").and_then(|date| date.split('-').next()) {
        Some(year) if !year.trim().is_empty() => Year::Known(year.trim().to_string()),
        _ => Year::Unknown,
    }
}

/// `journaltitle` (BibLaTeX), else `journal` (BibTeX)
pub fn resolve_journal(record: &Record) -> Option<String> {
    record
        .non_empty("journaltitle")
        .or_else(|| record.non_empty("journal"))
        .map(String::from)
}

pub fn clean_abstract(text: &str) -> String {
    collapse_line_breaks(text).trim().to_string()
}

/// Replace every whitespace run that contains a line break with one space.
/// Runs without a line break are kept as they are.
pub fn collapse_line_breaks(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut run = String::new();
    for c in s.chars() {
        if c.is_whitespace() {
            run.push(c);
            continue;
        }
        flush_whitespace(&mut out, &mut run);
        out.push(c);
    }
    flush_whitespace(&mut out, &mut run);
    out
}

fn flush_whitespace(out: &mut String, run: &mut String) {
    if run.contains('\n') {
        out.push(' ');
    } else {
        out.push_str(run);
    }
    run.clear();
}

/// Uppercase the first letter of each alphabetic run, lowercase the rest.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}
