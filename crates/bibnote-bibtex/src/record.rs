//! Bibliography record: one entry as raw field strings

use std::collections::BTreeMap;

/// One bibliography entry as parsed from the source file.
///
/// Field names are lowercase; values are the raw field text with brace
/// groups kept, so the record can be written back out unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    /// Citation key (`doe2020` in `@article{doe2020, ...}`)
    pub key: String,
    /// Entry type (`article`, `book`, ...)
    pub entry_type: String,
    /// Field name -> raw value, ordered by name
    pub fields: BTreeMap<String, String>,
}

impl Record {
    pub fn new(key: impl Into<String>, entry_type: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            entry_type: entry_type.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Builder-style field setter
    pub fn with_field(mut self, name: &str, value: impl Into<String>) -> Self {
        self.fields.insert(name.to_lowercase(), value.into());
        self
    }

    /// Raw value of a field, if present
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Raw value of a field, `None` when missing or blank
    pub fn non_empty(&self, name: &str) -> Option<&str> {
        self.get(name).filter(|v| !v.trim().is_empty())
    }

    /// Re-serialize as a BibTeX entry.
    ///
    /// Fields come out in name order, one per line, brace-delimited:
    ///
    /// ```text
    /// @article{doe2020,
    ///  author = {Jane Doe},
    ///  year = {2020}
    /// }
    /// ```
    pub fn to_bibtex(&self) -> String {
        if self.fields.is_empty() {
            return format!("@{}{{{}}}\n", self.entry_type, self.key);
        }

        let body = self
            .fields
            .iter()
            .map(|(name, value)| format!(" {name} = {{{value}}}"))
            .collect::<Vec<_>>()
            .join(",\n");

        format!("@{}{{{},\n{body}\n}}\n", self.entry_type, self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Record {
        Record::new("doe2020", "article")
            .with_field("title", "A {Study} of X")
            .with_field("year", "2020")
            .with_field("author", "Jane Doe and John Smith")
    }

    #[test]
    fn get_present_and_missing() {
        let record = sample();
        assert_eq!(record.get("year"), Some("2020"));
        assert_eq!(record.get("doi"), None);
    }

    #[test]
    fn field_names_are_lowercased() {
        let record = Record::new("k", "misc").with_field("DOI", "10.1/x");
        assert_eq!(record.get("doi"), Some("10.1/x"));
    }

    #[test]
    fn non_empty_skips_blank_values() {
        let record = Record::new("k", "misc").with_field("url", "  ");
        assert_eq!(record.get("url"), Some("  "));
        assert_eq!(record.non_empty("url"), None);
    }

    #[test]
    fn to_bibtex_sorted_fields() {
        let expected = "@article{doe2020,\n author = {Jane Doe and John Smith},\n title = {A {Study} of X},\n year = {2020}\n}\n";
        assert_eq!(sample().to_bibtex(), expected);
    }

    #[test]
    fn to_bibtex_without_fields() {
        assert_eq!(Record::new("empty", "misc").to_bibtex(), "@misc{empty}\n");
    }

    #[test]
    fn to_bibtex_keeps_unknown_fields() {
        let record = Record::new("k", "book").with_field("x-custom", "kept as is");
        assert!(record.to_bibtex().contains(" x-custom = {kept as is}"));
    }
}
