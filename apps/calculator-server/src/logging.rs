//! Logging setup on top of `tracing-subscriber`.

use std::path::PathBuf;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `info` or `calculator=debug,info`.
    /// `RUST_LOG` takes precedence when set.
    pub level: String,
    pub format: LogFormat,
    pub ansi: bool,
    /// Additional JSON log file, rotated daily.
    pub file: Option<FileLogConfig>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            format: LogFormat::Text,
            ansi: true,
            file: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileLogConfig {
    pub dir: PathBuf,
    #[serde(default = "default_file_prefix")]
    pub prefix: String,
}

fn default_file_prefix() -> String {
    "calculator-server.log".to_owned()
}

/// `-v` -> info, `-vv` -> debug, `-vvv` and above -> trace.
#[must_use]
pub fn level_for_verbosity(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}

fn build_filter(cfg: &LoggingConfig) -> anyhow::Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(&cfg.level)
        .with_context(|| format!("invalid logging.level directive '{}'", cfg.level))
}

/// Install the global subscriber.
///
/// The returned guard flushes the file writer on drop and must be held for
/// the lifetime of the process.
///
/// # Errors
/// Returns an error if the level directive is invalid or a global
/// subscriber is already installed.
pub fn init_logging(cfg: &LoggingConfig) -> anyhow::Result<Option<WorkerGuard>> {
    let filter = build_filter(cfg)?;

    let mut layers: Vec<Box<dyn Layer<Registry> + Send + Sync>> = Vec::new();
    match cfg.format {
        LogFormat::Text => layers.push(
            fmt::layer()
                .with_ansi(cfg.ansi)
                .with_target(true)
                .boxed(),
        ),
        LogFormat::Json => layers.push(fmt::layer().json().with_current_span(true).boxed()),
    }

    let guard = match &cfg.file {
        Some(file) => {
            let appender = tracing_appender::rolling::daily(&file.dir, &file.prefix);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            layers.push(
                fmt::layer()
                    .json()
                    .with_ansi(false)
                    .with_writer(writer)
                    .boxed(),
            );
            Some(guard)
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(layers)
        .with(filter)
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(guard)
}
