//! Logging setup
//!
//! In serve mode stdout carries the MCP protocol, so logs go to a file under
//! `~/.content-mcp/`. Every other command logs to stderr.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tracing_subscriber::EnvFilter;

/// Directory under the home directory holding the server log
pub const CONTENT_MCP_DIR: &str = ".content-mcp";

/// Environment variable overriding the log file name
pub const LOG_FILE_VAR: &str = "CONTENT_MCP_LOG_FILE";

/// Log file name used when [`LOG_FILE_VAR`] is unset
pub const DEFAULT_LOG_FILE: &str = "mcp.log";

/// A thread-safe writer that flushes and syncs every write.
///
/// Log lines written by the MCP server must be on disk even if the client
/// kills the process, so each write flushes and calls `sync_all()`.
///
/// # Example
///
/// ```no_run
/// use std::io::Write;
/// use std::sync::{Arc, Mutex};
/// use std::fs::File;
/// use content_mcp_cli::logging::FileWriterGuard;
///
/// let file = File::create("log.txt").unwrap();
/// let mut guard = FileWriterGuard::new(Arc::new(Mutex::new(file)));
/// guard.write_all(b"Log message\n").unwrap();
/// ```
pub struct FileWriterGuard {
    file: Arc<Mutex<File>>,
}

impl FileWriterGuard {
    /// Creates a new `FileWriterGuard` wrapping the given file.
    pub fn new(file: Arc<Mutex<File>>) -> Self {
        Self { file }
    }

    fn lock(&self) -> io::Result<std::sync::MutexGuard<'_, File>> {
        self.file
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log file mutex poisoned"))
    }
}

impl io::Write for FileWriterGuard {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut file = self.lock()?;
        let written = file.write(buf)?;
        file.flush()?;
        file.sync_all()?;
        Ok(written)
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut file = self.lock()?;
        file.flush()?;
        file.sync_all()
    }
}

/// Directory the server log is written to
pub fn log_directory() -> PathBuf {
    match dirs::home_dir() {
        Some(home) => home.join(CONTENT_MCP_DIR),
        None => PathBuf::from(CONTENT_MCP_DIR),
    }
}

/// Full path of the server log file
pub fn log_file_path() -> PathBuf {
    let name = std::env::var(LOG_FILE_VAR)
        .ok()
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string());
    log_directory().join(name)
}

/// Filter directive from the command-line flags, falling back to `LOG_LEVEL`
///
/// `--quiet` wins over `--debug`, which wins over `--verbose`.
pub fn filter_directive(quiet: bool, debug: bool, verbose: bool, log_level: &str) -> String {
    if quiet {
        "error".to_string()
    } else if debug {
        "debug".to_string()
    } else if verbose {
        "trace".to_string()
    } else {
        match log_level.trim().to_ascii_lowercase().as_str() {
            "warning" => "warn".to_string(),
            "critical" | "fatal" => "error".to_string(),
            "" => "info".to_string(),
            other => other.to_string(),
        }
    }
}

fn env_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("info"))
}

fn open_log_file() -> io::Result<(PathBuf, File)> {
    let path = log_file_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;
    Ok((path, file))
}

/// Install the global subscriber
///
/// With `to_file` set, logs go to [`log_file_path`]; if the file cannot be
/// opened they fall back to stderr.
pub fn init_logging(directive: &str, to_file: bool) {
    if to_file {
        match open_log_file() {
            Ok((path, file)) => {
                let shared = Arc::new(Mutex::new(file));
                tracing_subscriber::fmt()
                    .with_writer(move || FileWriterGuard::new(shared.clone()))
                    .with_env_filter(env_filter(directive))
                    .with_ansi(false)
                    .init();
                tracing::debug!("Logging to {}", path.display());
                return;
            }
            Err(e) => {
                eprintln!("Failed to open log file, using stderr: {e}");
            }
        }
    }
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(env_filter(directive))
        .init();
}
