//! File-backed log sink.
//!
//! One sink per process, created on first use. Lines look like
//! `[info] launched terminal terminal=Kitty`.

use std::fmt;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock, PoisonError};

use anyhow::{Context, Result};
use tracing::{Event, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{prelude::*, EnvFilter};

#[cfg(test)]
mod tests;

static SINK: OnceLock<LogSink> = OnceLock::new();
static INIT: Mutex<()> = Mutex::new(());

/// The process-wide log sink.
#[derive(Debug)]
pub struct LogSink {
    path: PathBuf,
    installed: bool,
}

impl LogSink {
    /// File the sink appends to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the sink became the global subscriber. `false` when another
    /// one was installed first, in which case the file receives nothing.
    pub const fn is_installed(&self) -> bool {
        self.installed
    }
}

/// Return the process-wide sink, creating it on the first call.
///
/// `level` is an `EnvFilter` directive; `RUST_LOG` overrides it. Later calls
/// return the first sink and ignore their arguments.
pub fn get_or_create(path: &Path, level: &str) -> Result<&'static LogSink> {
    if let Some(sink) = SINK.get() {
        return Ok(sink);
    }
    // Concurrent first callers queue here; only one opens a file.
    let _guard = INIT.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(sink) = SINK.get() {
        return Ok(sink);
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log dir {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let installed = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(LevelPrefix)
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .with(filter)
        .try_init();
    if let Err(err) = &installed {
        tracing::debug!(error = %err, path = %path.display(), "log sink not installed");
    }

    Ok(SINK.get_or_init(|| LogSink {
        path: path.to_path_buf(),
        installed: installed.is_ok(),
    }))
}

/// Default sink location: next to the config file.
pub fn default_path() -> Result<PathBuf> {
    Ok(crate::config::Config::dir()?.join("termhere.log"))
}

/// Formats events as `[level] message key=value...`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LevelPrefix;

impl<S, N> FormatEvent<S, N> for LevelPrefix
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let level = event.metadata().level().to_string().to_ascii_lowercase();
        write!(writer, "[{level}] ")?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}
