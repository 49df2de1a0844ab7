//! Error handling for the stencil application.
//! Defines the error type and result alias used throughout the render pipeline.

use thiserror::Error;

/// Custom error types for stencil operations.
///
/// Every variant is fatal for the current render; nothing in the pipeline
/// recovers locally or retries.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    /// Represents errors raised while walking a template directory
    #[error("Cannot read template tree: {0}.")]
    WalkError(#[from] walkdir::Error),

    /// Represents errors that occur during configuration loading or lookup
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// The configured template location does not exist.
    #[error("Template does not exist: {template_path}.")]
    TemplateDoesNotExistError { template_path: String },

    /// A planned destination already exists on disk.
    #[error("{path} already exists.")]
    DestinationExistsError { path: String },

    /// A skip pattern or a field name is not a valid regular expression.
    #[error("Invalid pattern '{pattern}': {source}")]
    InvalidPatternError {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Represents a malformed or duplicated field argument
    #[error("Invalid field: {0}.")]
    InvalidFieldError(String),

    /// A template path that cannot be substituted as text.
    #[error("Path is not valid UTF-8: {path}.")]
    NonUtf8PathError { path: String },
}

/// Convenience type alias for Results with stencil's Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(1);
}
