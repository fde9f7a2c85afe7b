use thiserror::Error;

use aerogen_core::ConfigError;

/// Errors emitted by the generation pipeline and its sinks.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("invalid quality weights: {0}")]
    Weights(String),
    #[error("precondition violated: {0}")]
    Precondition(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("database error: {0}")]
    Sql(#[from] sqlx::Error),
}
