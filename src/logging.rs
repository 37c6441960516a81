//! # Logging
//!
//! Tracing subscriber setup for console and optional file output.
//!
//! Every record renders as `[timestamp] [LEVEL] [target] [line] message`,
//! one line per event. The layout is part of this tool's contract: RMM-side
//! log scrapers match on it, so both sinks use the same formatter. The
//! filter honors `RUST_LOG` and defaults to `forcelist_deployer=info`.

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Arc;
use tracing::{Event, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Event formatter producing the fixed `[ts] [LEVEL] [target] [line] msg` layout
#[derive(Debug, Clone, Copy, Default)]
struct RecordFormat;

impl<S, N> FormatEvent<S, N> for RecordFormat
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
        write!(
            writer,
            "[{}] [{}] [{}] [{}] ",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
            meta.level(),
            meta.target(),
            meta.line().unwrap_or(0),
        )?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Initialize the global tracing subscriber
///
/// Console output is always on. When `log_file` names a non-empty path,
/// every record is additionally appended to that file; parent directories
/// are created as needed. Returns an error when the file cannot be opened
/// or a subscriber is already installed.
pub fn init(log_file: Option<&Path>) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| "forcelist_deployer=info".into());

    let console = tracing_subscriber::fmt::layer().event_format(RecordFormat);

    let log_file = log_file.filter(|path| !path.as_os_str().is_empty());
    let file_sink = match log_file {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent).with_context(|| {
                        format!("failed to create log directory {}", parent.display())
                    })?;
                }
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open log file {}", path.display()))?;
            Some(
                tracing_subscriber::fmt::layer()
                    .event_format(RecordFormat)
                    .with_ansi(false)
                    .with_writer(Arc::new(file)),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .with(file_sink)
        .try_init()
        .context("failed to initialize tracing subscriber")?;

    Ok(())
}
