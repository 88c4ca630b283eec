//! Markdown note rendering
//!
//! Layout: YAML front-matter, title heading, metadata list, TL;DR and
//! abstract sections, a notes section, and the original entry in a
//! fenced block. Values are inserted without YAML escaping.

use crate::config::NoteTemplate;
use crate::record::Record;
use crate::transform::NoteFields;

/// Marker line opening and closing the front-matter block
pub const FRONT_MATTER_DELIMITER: &str = "---";

/// Render the full note for one entry
pub fn render_note(fields: &NoteFields, record: &Record, template: &NoteTemplate) -> String {
    let mut out = String::with_capacity(1024);
    push_front_matter(&mut out, fields);
    push_summary(&mut out, fields);
    push_sections(&mut out, fields, record, template);
    out
}

/// Wiki-links to every author, comma separated: `[[Jane Doe]], [[John Smith]]`
pub fn author_links(authors: &[String]) -> String {
    authors
        .iter()
        .map(|author| format!("[[{author}]]"))
        .collect::<Vec<_>>()
        .join(", ")
}

fn push_front_matter(out: &mut String, fields: &NoteFields) {
    out.push_str(FRONT_MATTER_DELIMITER);
    out.push('\n');
    out.push_str(&format!("title: \"{}\"\n", fields.title));
    push_yaml_list(out, "author", &fields.authors);
    if let Some(journal) = &fields.journal {
        out.push_str(&format!("journal: \"{journal}\"\n"));
    }
    if let Some(year) = fields.year.known() {
        out.push_str(&format!("year: {year}\n"));
    }
    if let Some(doi) = &fields.doi {
        out.push_str(&format!("doi: \"{doi}\"\n"));
    }
    if let Some(url) = &fields.url {
        out.push_str(&format!("url: {url}\n"));
    }
    push_yaml_list(out, "tags", &fields.tags);
    out.push_str(FRONT_MATTER_DELIMITER);
    out.push_str("\n\n");
}

fn push_yaml_list(out: &mut String, key: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    out.push_str(key);
    out.push_str(":\n");
    for item in items {
        out.push_str(&format!("  - {item}\n"));
    }
}

fn push_summary(out: &mut String, fields: &NoteFields) {
    out.push_str(&format!("# {}\n\n", fields.title));
    if !fields.authors.is_empty() {
        out.push_str(&format!("- **Authors**: {}\n", author_links(&fields.authors)));
    }
    if let Some(journal) = &fields.journal {
        out.push_str(&format!("- **Journal**: {journal}\n"));
    }
    if let Some(year) = fields.year.known() {
        out.push_str(&format!("- **Year**: {year}\n"));
    }
}

fn push_sections(out: &mut String, fields: &NoteFields, record: &Record, template: &NoteTemplate) {
    out.push_str(&format!("\n## TL;DR\n\n> {}\n\n", template.tldr_placeholder));

    let abstract_text = fields
        .abstract_text
        .as_deref()
        .unwrap_or(&template.missing_abstract);
    out.push_str(&format!("## Abstract\n{abstract_text}\n\n"));

    out.push_str(&format!(
        "## ✍️ My Notes\n\n> {}\n\n\n",
        template.notes_placeholder
    ));

    out.push_str(&format!("## 📚 BibTeX\n```{}\n", template.fence_label));
    out.push_str(&record.to_bibtex());
    out.push_str("\n```\n");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doe2020() -> Record {
        Record::new("doe2020", "article")
            .with_field("title", "A {Study} of X")
            .with_field("author", "Jane Doe and John Smith")
            .with_field("year", "2020")
            .with_field("keywords", "foo-bar")
    }

    fn render(record: &Record) -> String {
        render_note(
            &NoteFields::from_record(record),
            record,
            &NoteTemplate::default(),
        )
    }

    fn front_matter(note: &str) -> &str {
        let rest = note.strip_prefix("---\n").unwrap();
        let end = rest.find("\n---\n").unwrap();
        &rest[..end]
    }

    #[test]
    fn front_matter_full_entry() {
        let note = render(&doe2020());
        assert_eq!(
            front_matter(&note),
            "title: \"A Study of X\"\nauthor:\n  - Jane Doe\n  - John Smith\nyear: 2020\ntags:\n  - Foo/Bar"
        );
    }

    #[test]
    fn front_matter_optional_fields() {
        let record = doe2020()
            .with_field("journaltitle", "Journal of X")
            .with_field("doi", "10.1000/xyz")
            .with_field("url", "https://example.org/x");
        let note = render(&record);
        let fm = front_matter(&note);
        assert!(fm.contains("journal: \"Journal of X\"\n"));
        assert!(fm.contains("doi: \"10.1000/xyz\"\n"));
        assert!(fm.contains("url: https://example.org/x\n"));
    }

    #[test]
    fn missing_year_omitted_everywhere() {
        let record = Record::new("k", "misc").with_field("title", "Undated");
        let note = render(&record);
        assert!(!note.contains("year:"));
        assert!(!note.contains("**Year**"));
        assert!(!note.contains("n.d."));
    }

    #[test]
    fn summary_links_authors() {
        let note = render(&doe2020());
        assert!(note.contains("\n# A Study of X\n\n"));
        assert!(note.contains("- **Authors**: [[Jane Doe]], [[John Smith]]\n"));
        assert!(note.contains("- **Year**: 2020\n"));
        assert!(!note.contains("**Journal**"));
    }

    #[test]
    fn abstract_fallback() {
        let note = render(&doe2020());
        assert!(note.contains("## Abstract\nNo abstract available.\n"));
    }

    #[test]
    fn abstract_cleaned() {
        let record = doe2020().with_field("abstract", "We study\n   X in depth.");
        let note = render(&record);
        assert!(note.contains("## Abstract\nWe study X in depth.\n"));
    }

    #[test]
    fn placeholders_present() {
        let note = render(&doe2020());
        assert!(note.contains("## TL;DR\n\n> Add a one-sentence summary here.\n"));
        assert!(note.contains("## ✍️ My Notes\n\n> Add your personal notes and thoughts here.\n"));
    }

    #[test]
    fn original_entry_fenced_verbatim() {
        let record = doe2020().with_field("x-unused", "keep me");
        let note = render(&record);
        let fenced = format!("## 📚 BibTeX\n```bibtex\n{}\n```\n", record.to_bibtex());
        assert!(note.ends_with(&fenced));
        assert!(note.contains("title = {A {Study} of X}"));
        assert!(note.contains("x-unused = {keep me}"));
    }

    #[test]
    fn blank_line_before_closing_fence() {
        let note = render(&doe2020());
        assert!(note.ends_with(" year = {2020}\n}\n\n```\n"));
    }

    #[test]
    fn custom_template() {
        let record = doe2020();
        let template = NoteTemplate {
            fence_label: "biblatex".to_string(),
            missing_abstract: "(none)".to_string(),
            ..Default::default()
        };
        let note = render_note(&NoteFields::from_record(&record), &record, &template);
        assert!(note.contains("```biblatex\n"));
        assert!(note.contains("## Abstract\n(none)\n"));
    }

    #[test]
    fn author_links_empty() {
        assert_eq!(author_links(&[]), "");
    }
}
