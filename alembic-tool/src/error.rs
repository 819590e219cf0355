use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AlbError {
    #[error("Config error in {path}: {source}")]
    Config {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("PotterDB error: {0}")]
    PotterDb(#[from] alembic_potterdb::PotterDbError),

    #[error("Page {page} is out of range (1-{total})")]
    PageOutOfRange { page: usize, total: usize },

    #[error("No potion with id {0}")]
    UnknownItem(String),

    #[error("Invalid log filter: {0}")]
    LogFilter(#[from] tracing_subscriber::filter::ParseError),
}
