//! Logging utilities with indicatif integration

use indicatif::MultiProgress;

/// Fixed-width label so messages line up
fn level_label(level: log::Level) -> &'static str {
    match level {
        log::Level::Error => "ERROR",
        log::Level::Warn => "WARN ",
        log::Level::Info => "INFO ",
        log::Level::Debug => "DEBUG",
        log::Level::Trace => "TRACE",
    }
}

fn level_color(level: log::Level) -> &'static str {
    match level {
        log::Level::Error => "\x1b[31m",
        log::Level::Warn => "\x1b[33m",
        log::Level::Info => "\x1b[32m",
        log::Level::Debug => "\x1b[36m",
        log::Level::Trace => "\x1b[35m",
    }
}

/// `[LEVEL] message`, with the label colored on a terminal
fn format_line(level: log::Level, args: &std::fmt::Arguments<'_>, color: bool) -> String {
    let label = level_label(level);
    if color {
        format!("[{}{label}\x1b[0m] {args}", level_color(level))
    } else {
        format!("[{label}] {args}")
    }
}

fn default_filter(debug: bool) -> &'static str {
    if debug { "debug" } else { "info" }
}

/// Logger that prints above the per-file progress bars instead of through them.
pub struct IndicatifLogger {
    inner: env_logger::Logger,
    multi: MultiProgress,
}

impl IndicatifLogger {
    pub fn new(inner: env_logger::Logger, multi: MultiProgress) -> Self {
        Self { inner, multi }
    }
}

impl log::Log for IndicatifLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        self.inner.enabled(metadata)
    }

    fn log(&self, record: &log::Record) {
        if self.inner.enabled(record.metadata()) {
            let line = format_line(record.level(), record.args(), true);
            self.multi.suspend(|| eprintln!("{line}"));
        }
    }

    fn flush(&self) {
        self.inner.flush();
    }
}

/// Initialize logging.
///
/// `RUST_LOG` overrides the default level (`info`, or `debug` when `debug` is set).
/// With `multi` (TTY), lines are colored and routed around the progress bars;
/// without it, plain `[LEVEL] message` lines go to stderr.
/// Calling this more than once keeps the first logger.
pub fn init_logging(debug: bool, multi: Option<&MultiProgress>) {
    use std::io::Write;

    let env = env_logger::Env::default().default_filter_or(default_filter(debug));

    if let Some(multi) = multi {
        let logger = env_logger::Builder::from_env(env).build();
        let max_level = logger.filter();

        if log::set_boxed_logger(Box::new(IndicatifLogger::new(logger, multi.clone()))).is_ok() {
            log::set_max_level(max_level);
        }
    } else {
        let _ = env_logger::Builder::from_env(env)
            .format(|buf, record| {
                writeln!(buf, "{}", format_line(record.level(), record.args(), false))
            })
            .try_init();
    }
}
