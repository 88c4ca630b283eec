//! Bibnote Core - shared infrastructure for bibliography-to-note pipelines
//!
//! Logging, progress reporting and the error type used by the
//! conversion crates and the CLI.

pub mod error;
pub mod logging;
pub mod progress;

// Re-exports for convenience
pub use error::NoteError;
pub use logging::{IndicatifLogger, init_logging};
pub use progress::{ProgressContext, SharedProgress, fmt_num};
