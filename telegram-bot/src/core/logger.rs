//! Tracing setup for the two entry points.
//!
//! `run` writes every inline query, lookup outcome and answer to stdout and to the bot log file
//! (`LOG_FILE`), one plain-text line per event. `search` only needs warnings on stderr so its
//! result table stays readable.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::{
    fmt::format::{FmtSpan, Writer},
    fmt::time::FormatTime,
    fmt::writer::MakeWriterExt,
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Registry,
};

/// Level used when `RUST_LOG` is unset while the bot is running.
const DEFAULT_BOT_LEVEL: &str = "info";

/// `YYYY-MM-DD HH:MM:SS` local time.
struct ChronoLocal;

impl FormatTime for ChronoLocal {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        write!(w, "{} ", chrono::Local::now().format("%Y-%m-%d %H:%M:%S"))
    }
}

fn filter_or(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Opens the log file for appending, creating missing parent directories.
fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Installs the bot's global subscriber: `TIME LEVEL target: message key=value ...` on stdout
/// and appended to `log_file_path`, without ANSI codes.
pub fn init_tracing(log_file_path: &str) -> anyhow::Result<()> {
    let file = Arc::new(open_log_file(Path::new(log_file_path))?);

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stdout.and(file))
        .event_format(
            tracing_subscriber::fmt::format()
                .with_timer(ChronoLocal)
                .with_target(true)
                .with_thread_ids(false),
        )
        .with_span_events(FmtSpan::NONE)
        .with_ansi(false);

    Registry::default()
        .with(filter_or(DEFAULT_BOT_LEVEL))
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to set global subscriber: {}", e))
}

/// Installs a stderr-only subscriber for one-shot commands. `RUST_LOG` overrides `default_level`.
pub fn init_console_tracing(default_level: &str) -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(filter_or(default_level))
        .with_writer(io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to set global subscriber: {}", e))
}
