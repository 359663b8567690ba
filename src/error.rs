use std::path::PathBuf;
use thiserror::Error;

/// Error type covering configuration, model loading and file processing
#[derive(Debug, Error)]
pub enum PropsError {
    /// Target locale could not be parsed as a valid language code
    #[error("Invalid target locale '{locale}': {reason}")]
    InvalidLocale { locale: String, reason: String },

    /// The source path option contained no usable root directories
    #[error("No source root paths supplied (expected one or more paths joined with ';')")]
    EmptySourcePath,

    /// Mode was neither 'import' nor 'export'
    #[error("Mode must be one of [import|export], got '{given}'")]
    InvalidMode { given: String },

    /// Failed to read the documentation-model snapshot file
    #[error("Failed to read model file '{path}': {source}")]
    ModelRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The documentation-model snapshot was not valid JSON
    #[error("Failed to parse model file '{path}': {source}")]
    ModelParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// A properties file contained a line that is neither a comment nor `key = value`
    #[error("Malformed properties line {line} in '{path}': {reason}")]
    PropertiesParse {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    /// An existing translation file was found but could not be read
    #[error("Failed to read existing translations from '{path}': {source}")]
    ExistingRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Any other IO failure while writing or scanning files
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for all fallible operations in this crate
pub type Result<T> = std::result::Result<T, PropsError>;
