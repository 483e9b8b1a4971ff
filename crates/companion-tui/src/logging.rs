//! Logging setup.
//!
//! The terminal owns stdout and stderr while the UI runs, so log output only
//! goes to a file given with `--log-file`. Without one no subscriber is
//! installed and events are discarded.
//!
//! Level priority: `RUST_LOG` > `--debug` > [`DEFAULT_LOG_LEVEL`].

use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::TuiError;

/// Filter used when neither `RUST_LOG` nor `--debug` is given.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Pick the filter directive for the given flags.
pub fn filter_directive(debug: bool, rust_log: Option<&str>) -> String {
    match rust_log {
        Some(directive) if !directive.trim().is_empty() => directive.to_string(),
        _ if debug => "debug".to_string(),
        _ => DEFAULT_LOG_LEVEL.to_string(),
    }
}

/// Open `path` for appending, creating it if needed.
pub fn open_log_file(path: &Path) -> Result<File, TuiError> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| TuiError::LogFile {
            path: path.to_path_buf(),
            source,
        })
}

/// Install the global subscriber. Returns `false` when logging stays off.
pub fn init(debug: bool, log_file: Option<&Path>) -> Result<bool, TuiError> {
    let Some(path) = log_file else {
        return Ok(false);
    };
    let file = open_log_file(path)?;

    let rust_log = std::env::var("RUST_LOG").ok();
    let filter = EnvFilter::new(filter_directive(debug, rust_log.as_deref()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true)
        .compact()
        .try_init()
        .map_err(|e| TuiError::Logging(e.to_string()))?;

    tracing::debug!(
        app = env!("CARGO_PKG_NAME"),
        version = env!("CARGO_PKG_VERSION"),
        "logging initialised"
    );
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rust_log_wins() {
        assert_eq!(filter_directive(true, Some("trace")), "trace");
        assert_eq!(
            filter_directive(false, Some("companion_core=debug")),
            "companion_core=debug"
        );
    }

    #[test]
    fn debug_flag_over_default() {
        assert_eq!(filter_directive(true, None), "debug");
        assert_eq!(filter_directive(true, Some("  ")), "debug");
        assert_eq!(filter_directive(false, None), DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn no_log_file_means_no_subscriber() {
        assert!(!init(true, None).unwrap());
    }

    #[test]
    fn open_creates_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("companion.log");
        open_log_file(&path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn open_directory_fails() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = open_log_file(dir.path()).unwrap_err();
        assert!(matches!(err, TuiError::LogFile { .. }));
        assert!(err.to_string().starts_with("cannot open log file"));
    }
}
