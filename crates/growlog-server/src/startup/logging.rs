//! Rolling file logging.
//!
//! Events go to the console and to rolling files under one log directory.
//! `growlog.log` receives everything; two narrower files shadow their
//! subsystems so a long import session or an auth incident can be read in
//! isolation:
//!
//! * `persistence.log` <- `growlog_persistence` (store, payloads, query guard)
//! * `auth.log`        <- `growlog_server::middleware` (API key checks)
//!
//! Files land in `~/growlog/logs` unless `logging.dir` says otherwise.

use std::path::{Path, PathBuf};

use tracing::Level;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt};

/// The file every event lands in, regardless of target.
const ROOT_FILE: &str = "growlog.log";

/// Subsystem files split out of the root log, as `(file name, target prefixes)`.
const SUBSYSTEM_FILES: &[(&str, &[&str])] = &[
    ("persistence.log", &["growlog_persistence"]),
    ("auth.log", &["growlog_server::middleware"]),
];

/// Where and how verbosely the server logs.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Directory receiving the rolling files.
    pub dir: PathBuf,
    /// Mirror events to the console.
    pub console: bool,
    /// Write the rolling files at all.
    pub to_files: bool,
    /// Level for the console and root file when `RUST_LOG` is unset.
    pub level: Level,
    /// Rotation policy shared by every file appender.
    pub rotation: Rotation,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            dir: default_log_dir(),
            console: true,
            to_files: true,
            level: Level::INFO,
            rotation: Rotation::DAILY,
        }
    }
}

fn default_log_dir() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
    Path::new(&home).join("growlog").join("logs")
}

impl LoggingConfig {
    /// Build from the `logging.*` section of the application configuration.
    ///
    /// An unparseable level string falls back to `info` rather than failing
    /// startup over a typo.
    pub fn from_config(
        dir: Option<String>,
        console: bool,
        to_files: bool,
        level: String,
    ) -> Self {
        Self {
            dir: dir.map(PathBuf::from).unwrap_or_else(default_log_dir),
            console,
            to_files,
            level: level.parse().unwrap_or(Level::INFO),
            rotation: Rotation::DAILY,
        }
    }
}

/// Keeps the non-blocking file writers alive.
///
/// Dropping the guard flushes whatever the appender threads still buffer,
/// so `main` holds it until shutdown.
pub struct LoggingGuard {
    _writers: Vec<WorkerGuard>,
}

/// Install the global subscriber: console plus rolling files.
///
/// `RUST_LOG`, when set, overrides the configured level for the console and
/// the root file. Subsystem files ignore levels and take every event their
/// target prefixes emit.
pub fn init_logging(config: &LoggingConfig) -> Result<LoggingGuard, Box<dyn std::error::Error>> {
    let mut writers = Vec::new();
    let mut layers: Vec<Box<dyn Layer<Registry> + Send + Sync>> = Vec::new();

    if config.console {
        layers.push(Box::new(
            fmt::layer()
                .with_target(true)
                .with_thread_names(true)
                .with_filter(level_filter(config.level)),
        ));
    }

    if config.to_files {
        std::fs::create_dir_all(&config.dir)?;

        let (root, guard) = file_writer(config, ROOT_FILE);
        writers.push(guard);
        layers.push(Box::new(
            fmt::layer()
                .with_writer(root)
                .with_target(true)
                .with_thread_names(true)
                .with_ansi(false)
                .with_filter(level_filter(config.level)),
        ));

        for (file_name, prefixes) in SUBSYSTEM_FILES {
            let (writer, guard) = file_writer(config, file_name);
            writers.push(guard);

            let mut targets = Targets::new();
            for prefix in *prefixes {
                targets = targets.with_target(*prefix, LevelFilter::TRACE);
            }
            layers.push(Box::new(
                fmt::layer()
                    .with_writer(writer)
                    .with_target(true)
                    .with_thread_names(true)
                    .with_ansi(false)
                    .with_filter(targets),
            ));
        }
    }

    Registry::default()
        .with(layers)
        .try_init()
        .map_err(|e| format!("Failed to initialize logging: {}", e))?;

    if config.to_files {
        tracing::info!(
            dir = %config.dir.display(),
            files = SUBSYSTEM_FILES.len() + 1,
            "Rolling log files initialized"
        );
    }

    Ok(LoggingGuard { _writers: writers })
}

/// `RUST_LOG` wins over the configured default when both are present.
fn level_filter(level: Level) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()))
}

fn file_writer(config: &LoggingConfig, file_name: &str) -> (NonBlocking, WorkerGuard) {
    tracing_appender::non_blocking(RollingFileAppender::new(
        config.rotation.clone(),
        &config.dir,
        file_name,
    ))
}
