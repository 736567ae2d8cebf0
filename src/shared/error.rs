use crate::resource_graph::domain::ResourceClass;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// An empty forest is still a success: "no resources found" is a valid
/// answer, not a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// The forest was resolved (possibly empty) and written out
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (config, entity file, output file, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-level errors surfaced by the CLI and its adapters.
#[derive(Debug, Error)]
pub enum XpGraphError {
    #[error("Entity file not found: {path}\n\n💡 Hint: {suggestion}")]
    EntityNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse entity file: {path}\nDetails: {details}\n\n💡 Hint: The entity must be a YAML or JSON catalog entity with metadata.annotations")]
    EntityParseError { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid configuration: {message}\n\n💡 Hint: {hint}")]
    InvalidConfig { message: String, hint: String },

    /// Validation error for builder patterns
    #[error("Validation error: {message}")]
    Validation { message: String },
}

/// Failure of one request made through the Remote Resource Client.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    /// The cluster answered with a non-2xx status
    #[error("request failed with status {status}: {body}")]
    RequestFailed { status: u16, body: String },

    /// The request never produced a response
    #[error("transport error: {0}")]
    Transport(String),

    /// The response body was not a JSON document
    #[error("failed to decode response body: {0}")]
    Decode(String),

    /// No proxy or direct endpoint is configured for the cluster
    #[error("no endpoint configured for cluster '{0}'")]
    UnknownCluster(String),
}

impl FetchError {
    /// Whether repeating the same request may succeed.
    ///
    /// Client errors (4xx) and configuration problems are permanent.
    pub fn is_retryable(&self) -> bool {
        match self {
            FetchError::RequestFailed { status, .. } => *status >= 500,
            FetchError::Transport(_) => true,
            FetchError::Decode(_) | FetchError::UnknownCluster(_) => false,
        }
    }
}

/// Non-fatal conditions met while resolving a resource graph.
///
/// None of these abort a resolution: each one removes a single branch or
/// a single root class from the result and is reported alongside it.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("{class} coordinates are incomplete: missing {field}")]
    CoordinateMissing {
        class: ResourceClass,
        field: &'static str,
    },

    #[error("failed to fetch {path}: {source}")]
    BranchFetchFailed {
        path: String,
        #[source]
        source: FetchError,
    },

    #[error("listing {class} resources is not permitted")]
    PermissionDenied { class: ResourceClass },

    #[error("resource at {path} could not be read: {details}")]
    InvalidResource { path: String, details: String },
}
