//! Tracing setup for `receipt-form`.
//!
//! Records go to stderr, since stdout carries the summary, and once
//! [`enable_file_logging`] is called to an append-only file as well.

use std::{
    fs::File,
    io::{self, IsTerminal, Write},
    path::Path,
    sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError},
};

use anyhow::Result;
use chrono::Local;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::{
    EnvFilter,
    fmt::{
        FmtContext, MakeWriter,
        format::{FormatEvent, FormatFields, Writer},
    },
    layer::SubscriberExt,
    registry::LookupSpan,
    util::SubscriberInitExt,
};

const DEFAULT_DIRECTIVE: &str = "info";

/// `<local time> <LEVEL> <file:line> <fields>`
struct ReceiptFmt;

impl<S, N> FormatEvent<S, N> for ReceiptFmt
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();
        let ansi = writer.has_ansi_escapes();
        let timestamp = Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z");

        if ansi {
            let colour = match *meta.level() {
                Level::ERROR => "\x1b[1;31m",
                Level::WARN => "\x1b[1;33m",
                Level::INFO => "\x1b[1;32m",
                Level::DEBUG => "\x1b[1;34m",
                Level::TRACE => "\x1b[1;35m",
            };
            write!(writer, "\x1b[2m{timestamp}\x1b[0m {colour}{:>5}\x1b[0m ", meta.level())?;
        } else {
            write!(writer, "{timestamp} {:>5} ", meta.level())?;
        }

        if let (Some(file), Some(line)) = (meta.file(), meta.line()) {
            let file = file.rsplit(|c: char| c == '/' || c == '\\').next().unwrap_or(file);
            write!(writer, "{file}:{line} ")?;
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

// --- Late-bound log file ---

/// Writer target that discards everything until a file is attached.
#[derive(Clone)]
struct LogFile(Arc<Mutex<Option<File>>>);

struct LogFileWriter<'a>(MutexGuard<'a, Option<File>>);

impl Write for LogFileWriter<'_> {
    fn write(
        &mut self,
        buf: &[u8],
    ) -> io::Result<usize> {
        match &mut *self.0 {
            Some(f) => f.write(buf),
            None => Ok(buf.len()),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match &mut *self.0 {
            Some(f) => f.flush(),
            None => Ok(()),
        }
    }
}

impl<'a> MakeWriter<'a> for LogFile {
    type Writer = LogFileWriter<'a>;

    fn make_writer(&'a self) -> Self::Writer {
        LogFileWriter(self.0.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

// --- Statics ---

static LOG_FILE: OnceLock<Arc<Mutex<Option<File>>>> = OnceLock::new();

/// Explicit directive first, then `RUST_LOG`, then [`DEFAULT_DIRECTIVE`].
///
/// An explicit directive that does not parse is an error.
fn make_filter(directive: Option<&str>) -> Result<EnvFilter> {
    match directive {
        Some(d) => {
            EnvFilter::try_new(d).map_err(|e| anyhow::anyhow!("invalid log level '{d}': {e}"))
        }
        None => Ok(EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))),
    }
}

// --- Public API ---

/// Starts appending log output to `path`, replacing any file already open.
/// The directory must already exist.
pub fn enable_file_logging(path: &Path) -> Result<()> {
    let Some(slot) = LOG_FILE.get() else {
        anyhow::bail!("logging not yet initialized");
    };

    let file = File::options()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| anyhow::anyhow!("cannot open log file '{}': {e}", path.display()))?;

    *slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(file);
    Ok(())
}

/// Initializes logging. Call once at startup; later calls are no-ops.
///
/// - Stderr: coloured when attached to a terminal, plain when redirected.
/// - File: inactive until [`enable_file_logging`] is called.
/// - Level: `directive` if given, else `RUST_LOG`, else `info`.
///
/// Fails if `directive` is not a valid filter.
pub fn init_default_logging(directive: Option<&str>) -> Result<()> {
    let file_inner: Arc<Mutex<Option<File>>> = Arc::new(Mutex::new(None));
    let level_filter = make_filter(directive)?;

    let console_layer = tracing_subscriber::fmt::layer()
        .event_format(ReceiptFmt)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal());

    let file_layer = tracing_subscriber::fmt::layer()
        .event_format(ReceiptFmt)
        .with_ansi(false)
        .with_writer(LogFile(file_inner.clone()));

    if tracing_subscriber::registry()
        .with(level_filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .is_ok()
    {
        let _ = LOG_FILE.set(file_inner);
    }
    Ok(())
}
