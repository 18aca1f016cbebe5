//! Error handling for the Stencil application.
//! Defines custom error types and results used throughout the application.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Custom error types for Stencil operations.
///
/// This enum represents all possible errors that can occur within the Stencil application.
/// It implements the standard Error trait through thiserror's derive macro.
#[derive(Error, Debug)]
pub enum Error {
    /// The prompt file failed to parse or one of its records is incomplete.
    #[error("Malformed prompt file '{path}': {reason}.")]
    MalformedPromptSpec { path: PathBuf, reason: String },

    /// The override file failed to parse as flat key/value records.
    #[error("Malformed override file '{path}': {reason}.")]
    MalformedOverrides { path: PathBuf, reason: String },

    /// A prompt or override declares a name reserved by Stencil.
    #[error("'{path}' uses the reserved variable name '{name}'.")]
    ReservedVariable { path: PathBuf, name: String },

    /// A required free-text prompt received no usable answer.
    #[error("A value for the required variable '{name}' was not provided.")]
    RequiredValueMissing { name: String },

    /// A path or content template failed to parse or render.
    #[error("Template error in '{path}': {source}.")]
    TemplateError {
        path: String,
        #[source]
        source: minijinja::Error,
    },

    /// A rendered path would escape the output directory or is not a valid relative path.
    #[error("Template path '{path}' renders to the invalid path '{rendered}'.")]
    InvalidOutputPath { path: String, rendered: String },

    /// Represents errors that occur during file system operations
    #[error("IO error on '{path}': {source}.")]
    IoError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Represents validation failures in user input or data
    #[error("Validation error: {0}.")]
    ValidationError(String),

    /// Represents errors in compiling ignore patterns
    #[error("Ignore pattern error: {0}.")]
    IgnorePatternError(String),

    /// Rendering error outside of a template file
    #[error("MiniJinja error: {0}.")]
    MinijinjaError(#[from] minijinja::Error),

    /// Interactive prompt failure
    #[error("Prompt error: {0}.")]
    PromptError(#[from] dialoguer::Error),

    /// Git clone failure
    #[error("Git error: {0}.")]
    Git2Error(#[from] git2::Error),

    #[error("Template directory '{template_dir}' does not exist.")]
    TemplateDoesNotExistError { template_dir: String },

    #[error("Sub path '{sub_path}' does not exist in the template.")]
    SubPathDoesNotExistError { sub_path: String },

    #[error("Output file '{path}' already exists. Use --force to overwrite.")]
    OutputFileExistsError { path: PathBuf },
}

impl Error {
    /// Wraps an `io::Error` together with the path it happened on.
    pub fn io<P: AsRef<Path>>(path: P, source: io::Error) -> Self {
        Error::IoError { path: path.as_ref().to_path_buf(), source }
    }
}

/// Convenience type alias for Results with Error as the error type.
///
/// # Type Parameters
/// * `T` - The type of the success value
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
