use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

use crate::error::AlbError;

/// Environment variable holding an `EnvFilter` directive.
pub const LOG_ENV: &str = "ALEMBIC_LOG";

const DEFAULT_DIRECTIVE: &str = "info";

pub fn env_filter() -> Result<EnvFilter, AlbError> {
    let directive = std::env::var(LOG_ENV).unwrap_or_else(|_| DEFAULT_DIRECTIVE.to_string());
    Ok(EnvFilter::try_new(directive)?)
}

/// Installs the global subscriber, appending to `log_file`.
///
/// The terminal belongs to the TUI, so logs only ever go to the file. If the
/// file cannot be opened, logging is discarded.
pub fn init(log_file: &Path) -> anyhow::Result<()> {
    let writer = match open_log_file(log_file) {
        Ok(file) => BoxMakeWriter::new(Mutex::new(file)),
        Err(_) => BoxMakeWriter::new(std::io::sink),
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter()?)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialise logging: {e}"))
}

fn open_log_file(path: &Path) -> std::io::Result<std::fs::File> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("alembic.log");
        open_log_file(&path).unwrap();
        assert!(path.exists());
    }
}
