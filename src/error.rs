//! Error types and handling for webfold
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for webfold operations
#[derive(Error, Diagnostic, Debug)]
pub enum WebfoldError {
    // Validation errors
    #[error("Invalid technical name: {name}")]
    #[diagnostic(
        code(webfold::validation::invalid_name),
        help("Technical names must contain only lowercase letters, numbers, or hyphens")
    )]
    InvalidAppName { name: String },

    #[error("Invalid URL: {url}")]
    #[diagnostic(
        code(webfold::validation::invalid_url),
        help("The URL must be absolute, e.g. https://example.com")
    )]
    InvalidUrl { url: String },

    // Registry errors
    #[error("Application '{name}' not found")]
    #[diagnostic(
        code(webfold::registry::app_not_found),
        help("Use 'webfold list' to see installed applications")
    )]
    AppNotFound { name: String },

    #[error("Failed to read registry at {path}: {reason}")]
    #[diagnostic(code(webfold::registry::read_failed))]
    RegistryReadFailed { path: String, reason: String },

    #[error("Failed to parse registry at {path}: {reason}")]
    #[diagnostic(
        code(webfold::registry::parse_failed),
        help("The registry file is not valid JSON; fix or delete it to start fresh")
    )]
    RegistryParseFailed { path: String, reason: String },

    #[error("Failed to write registry at {path}: {reason}")]
    #[diagnostic(code(webfold::registry::write_failed))]
    RegistryWriteFailed { path: String, reason: String },

    // Packaging errors
    #[error("Failed to spawn packaging tool: {reason}")]
    #[diagnostic(
        code(webfold::packager::spawn_failed),
        help("Check that npx and nativefier are installed and on PATH")
    )]
    PackagerSpawnFailed { reason: String },

    #[error("nativefier failed with code {code}: {stderr}")]
    #[diagnostic(code(webfold::packager::exit_nonzero))]
    PackagerFailed { code: i32, stderr: String },

    #[error("Unable to find the application folder")]
    #[diagnostic(
        code(webfold::packager::app_dir_not_found),
        help("Inspect the captured output below to see where nativefier put its result")
    )]
    AppDirNotFound {
        listing: Vec<String>,
        stdout: String,
        stderr: String,
    },

    // File system errors
    #[error("Failed to create directory {path}: {reason}")]
    #[diagnostic(code(webfold::fs::create_dir_failed))]
    CreateDirFailed { path: String, reason: String },

    #[error("Failed to write {path}: {reason}")]
    #[diagnostic(code(webfold::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("I/O error: {message}")]
    #[diagnostic(code(webfold::fs::io_error))]
    IoError { message: String },

    #[error("Could not determine home directory")]
    #[diagnostic(
        code(webfold::fs::no_home_dir),
        help("Set WEBFOLD_CONFIG_DIR to choose a config location explicitly")
    )]
    NoHomeDir,
}

/// Result type alias using WebfoldError
pub type Result<T> = std::result::Result<T, WebfoldError>;

/// Creates an I/O error from any displayable reason
pub fn io_error(message: impl Into<String>) -> WebfoldError {
    WebfoldError::IoError {
        message: message.into(),
    }
}
