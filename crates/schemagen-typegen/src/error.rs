//! Error type shared by the loading, generation and registry layers.

use std::path::PathBuf;

/// Result alias for this crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors raised while turning a schema file into Go source.
///
/// Everything here is fatal. Schema anomalies found after collection
/// (dangling `$ref`s, unknown `type` values, malformed `enum` arrays) are
/// never errors; they fall back to `interface{}` or are skipped.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read schema {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {format} schema: {message}")]
    Parse {
        format: &'static str,
        message: String,
    },

    #[error("unsupported schema format for {}: must be .json, .yaml, or .yml", path.display())]
    UnsupportedFormat { path: PathBuf },

    #[error("schema does not contain any type definitions")]
    EmptySchema,

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} does not appear to be an OpenAPI specification", path.display())]
    NotOpenApi { path: PathBuf },

    #[error("generator name cannot be empty")]
    EmptyGeneratorName,

    #[error("generator with name '{0}' already registered")]
    DuplicateGenerator(String),

    #[error("generator '{0}' not found")]
    UnknownGenerator(String),

    #[error("no generators found that support file format of {}", path.display())]
    NoGeneratorForFormat { path: PathBuf },
}
