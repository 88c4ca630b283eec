//! Error type for per-file and per-note failures

use std::path::{Path, PathBuf};

/// Failure while turning one input file (or one of its entries) into notes.
///
/// None of these abort a batch: the driver logs them and moves on.
#[derive(Debug)]
pub enum NoteError {
    /// Input file does not exist
    NotFound(PathBuf),
    /// Input file could not be read or parsed as a bibliography
    Parse { path: PathBuf, message: String },
    /// Note could not be written
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl NoteError {
    pub fn parse(path: &Path, message: impl Into<String>) -> Self {
        Self::Parse {
            path: path.to_path_buf(),
            message: message.into(),
        }
    }

    pub fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Path the failure refers to
    pub fn path(&self) -> &Path {
        match self {
            Self::NotFound(path) => path,
            Self::Parse { path, .. } | Self::Io { path, .. } => path,
        }
    }
}

impl std::fmt::Display for NoteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(path) => write!(f, "File not found: {}", path.display()),
            Self::Parse { path, message } => {
                write!(f, "Failed to process '{}': {message}", path.display())
            }
            Self::Io { path, source } => {
                write!(f, "Failed to write '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for NoteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;
    use std::io::ErrorKind;

    #[test]
    fn display_not_found() {
        let err = NoteError::NotFound(PathBuf::from("missing.bib"));
        assert_eq!(format!("{err}"), "File not found: missing.bib");
    }

    #[test]
    fn display_parse_includes_path_and_cause() {
        let err = NoteError::parse(Path::new("refs.bib"), "unexpected end of file");
        let msg = format!("{err}");
        assert!(msg.contains("refs.bib"));
        assert!(msg.contains("unexpected end of file"));
    }

    #[test]
    fn display_io_includes_path_and_cause() {
        let err = NoteError::io(
            Path::new("out/note.md"),
            std::io::Error::new(ErrorKind::PermissionDenied, "denied"),
        );
        let msg = format!("{err}");
        assert!(msg.contains("out/note.md"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn io_error_exposes_source() {
        let err = NoteError::io(Path::new("x.md"), std::io::Error::other("disk full"));
        assert!(err.source().is_some());
        assert!(NoteError::NotFound(PathBuf::from("x")).source().is_none());
    }

    #[test]
    fn path_accessor() {
        let err = NoteError::parse(Path::new("a.bib"), "bad");
        assert_eq!(err.path(), Path::new("a.bib"));
    }
}
