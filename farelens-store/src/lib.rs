pub mod app_config;
pub mod model_repo;
pub mod route_repo;

pub use model_repo::LinearModel;

/// Startup-time artifact failures. None of these are caught: if an
/// artifact cannot be loaded the process must not serve predictions.
#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("failed to read artifact {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("route table is missing required column {0}")]
    MissingColumn(&'static str),

    #[error("bad route record on line {line}: {reason}")]
    BadRecord { line: u64, reason: String },

    #[error("route table could not be parsed: {0}")]
    Csv(#[from] csv::Error),

    #[error("model artifact could not be parsed: {0}")]
    MalformedModel(#[from] serde_json::Error),

    #[error("model schema mismatch: {0}")]
    SchemaMismatch(String),
}
