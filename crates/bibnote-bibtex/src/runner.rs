//! Batch driver: input files -> notes

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use bibnote_core::{NoteError, ProgressContext, fmt_num};

use crate::config::Config;
use crate::parser::read_bibliography;
use crate::record::Record;
use crate::render::render_note;
use crate::transform::NoteFields;
use crate::writer::persist_note;

/// Batch execution summary
#[derive(Debug, Default)]
pub struct Summary {
    pub total_files: usize,
    pub processed_files: usize,
    pub empty_files: usize,
    pub missing_files: usize,
    pub failed_files: usize,
    pub total_entries: usize,
    pub notes_written: usize,
    pub write_failures: usize,
    pub elapsed: Duration,
}

impl Summary {
    /// Whether any file or note failed
    pub fn has_failures(&self) -> bool {
        self.missing_files + self.failed_files + self.write_failures > 0
    }
}

/// Outcome of one input file
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FileStats {
    pub entries: usize,
    pub written: usize,
    pub failed: usize,
}

/// Convert every entry of every input file into a note.
///
/// Files are processed in order, entries in parse order. Missing or
/// unparseable files and failed writes are logged and counted, never
/// fatal. Only an unusable output directory stops the run.
pub fn run(inputs: &[PathBuf], config: &Config, progress: &ProgressContext) -> Result<Summary> {
    let start = Instant::now();

    ensure_output_dir(&config.output_dir)?;

    let mut summary = Summary {
        total_files: inputs.len(),
        ..Default::default()
    };

    for path in inputs {
        match process_file(path, config, progress) {
            Ok(stats) => {
                summary.processed_files += 1;
                if stats.entries == 0 {
                    summary.empty_files += 1;
                }
                summary.total_entries += stats.entries;
                summary.notes_written += stats.written;
                summary.write_failures += stats.failed;
            }
            Err(e @ NoteError::NotFound(_)) => {
                summary.missing_files += 1;
                log::error!("{e}");
            }
            Err(e) => {
                summary.failed_files += 1;
                log::error!("{e}");
            }
        }
    }

    summary.elapsed = start.elapsed();

    log::debug!(
        "Files: {}/{} processed ({} missing, {} failed)",
        summary.processed_files,
        summary.total_files,
        summary.missing_files,
        summary.failed_files
    );
    log::info!(
        "Processing complete: {} notes from {} entries in {:.1}s",
        fmt_num(summary.notes_written),
        fmt_num(summary.total_entries),
        summary.elapsed.as_secs_f64()
    );

    Ok(summary)
}

/// Create the output directory (with parents) if it does not exist
pub fn ensure_output_dir(dir: &Path) -> Result<()> {
    if dir.is_dir() {
        return Ok(());
    }
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory {}", dir.display()))?;
    log::info!("Output directory created: {}", dir.display());
    Ok(())
}

/// Turn one `.bib` file into notes.
///
/// Errors only for a missing or unparseable file; per-note write
/// failures are counted in [`FileStats::failed`].
pub fn process_file(
    path: &Path,
    config: &Config,
    progress: &ProgressContext,
) -> Result<FileStats, NoteError> {
    let records = read_bibliography(path)?;
    log::info!("Processing file: {}", path.display());

    if records.is_empty() {
        log::info!("No BibTeX entries found in '{}'", path.display());
        return Ok(FileStats::default());
    }

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    let pb = progress.file_bar(&name, records.len() as u64);

    let mut stats = FileStats {
        entries: records.len(),
        ..Default::default()
    };

    for record in &records {
        pb.set_message(record.key.clone());
        if convert_record(record, config).is_some() {
            stats.written += 1;
        } else {
            stats.failed += 1;
        }
        pb.inc(1);
    }

    pb.finish_and_clear();
    log::debug!(
        "{}: {}/{} notes written",
        path.display(),
        stats.written,
        stats.entries
    );

    Ok(stats)
}

/// Transform, render and write one record
pub fn convert_record(record: &Record, config: &Config) -> Option<PathBuf> {
    let fields = NoteFields::from_record(record);
    let note = render_note(&fields, record, &config.template);
    persist_note(
        &config.output_dir,
        &fields.title,
        &fields.key,
        &note,
        config.max_title_len,
    )
}
