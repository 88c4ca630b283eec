//! bibnote - Obsidian literature notes from BibTeX files
//!
//! Writes one Markdown note per bibliography entry, with YAML
//! front-matter, author wiki-links and the original entry attached.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use comfy_table::{Cell, Color, Table, modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL};

use bibnote_bibtex::Summary;
use bibnote_core::{ProgressContext, fmt_num};

mod config;

use config::Config;

#[derive(Parser)]
#[command(name = "bibnote")]
#[command(about = "Generates Obsidian literature notes (Markdown) from BibTeX files")]
#[command(version)]
struct Cli {
    /// Path to the source .bib file(s)
    #[arg(value_name = "FILE", required = true, num_args = 1..)]
    files: Vec<PathBuf>,

    /// Output directory for the Markdown files (default: current directory)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,

    /// Config file path (default: ./bibnote.toml or ~/.config/bibnote/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let progress = ProgressContext::new();
    let multi = if progress.is_tty() {
        Some(progress.multi())
    } else {
        None
    };
    bibnote_core::init_logging(cli.debug, multi);

    let config = if let Some(path) = &cli.config {
        Config::from_file(path)?
    } else {
        Config::load()?
    };
    let pipeline = config.pipeline(cli.output_dir);

    let summary = bibnote_bibtex::run(&cli.files, &pipeline, &progress)?;
    print_summary(&summary);

    if summary.has_failures() {
        log::warn!("Some files or notes failed; see errors above");
    }

    Ok(())
}

/// Print the run summary table on stderr
fn print_summary(summary: &Summary) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_header(vec![
            Cell::new("Summary").fg(Color::Cyan),
            Cell::new("Value").fg(Color::Cyan),
        ]);

    let rows = [
        (
            "Files",
            format!(
                "{}/{} processed ({} empty, {} missing, {} failed)",
                summary.processed_files,
                summary.total_files,
                summary.empty_files,
                summary.missing_files,
                summary.failed_files
            ),
        ),
        (
            "Notes",
            format!(
                "{} written from {} entries ({} failed)",
                fmt_num(summary.notes_written),
                fmt_num(summary.total_entries),
                summary.write_failures
            ),
        ),
        ("Time", format!("{:.1}s", summary.elapsed.as_secs_f64())),
    ];
    for (label, value) in rows {
        table.add_row(vec![Cell::new(label), Cell::new(value)]);
    }
    eprintln!("\n{table}");
}
