//! Error types and exit codes for arbor
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (structural graph errors, unreachable targets)

use std::fmt::Debug;

use thiserror::Error;

/// Exit codes for the arbor command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - rejected graph mutation or query (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during arbor operations
#[derive(Error, Debug)]
pub enum ArborError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("vertex already present: {vertex}")]
    DuplicateVertex { vertex: String },

    #[error("invalid edge {from} -> {to}: {reason}")]
    InvalidEdge {
        from: String,
        to: String,
        reason: String,
    },

    #[error("vertex not in graph: {vertex}")]
    InvalidVertex { vertex: String },

    #[error("no path from {start} to {end}")]
    UnreachableTarget { start: String, end: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl ArborError {
    /// Create an error for a vertex that is already in the graph
    pub fn duplicate_vertex(vertex: &impl Debug) -> Self {
        ArborError::DuplicateVertex {
            vertex: format!("{:?}", vertex),
        }
    }

    /// Create an error for a rejected edge
    pub fn invalid_edge(from: &impl Debug, to: &impl Debug, reason: impl Into<String>) -> Self {
        ArborError::InvalidEdge {
            from: format!("{:?}", from),
            to: format!("{:?}", to),
            reason: reason.into(),
        }
    }

    /// Create an error for a vertex that is not in the graph
    pub fn invalid_vertex(vertex: &impl Debug) -> Self {
        ArborError::InvalidVertex {
            vertex: format!("{:?}", vertex),
        }
    }

    /// Create an error for a shortest-path target with no path from the start
    pub fn unreachable(start: &impl Debug, end: &impl Debug) -> Self {
        ArborError::UnreachableTarget {
            start: format!("{:?}", start),
            end: format!("{:?}", end),
        }
    }

    /// Create an error for an invalid value or argument
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        ArborError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            ArborError::UnknownFormat(_)
            | ArborError::UsageError(_)
            | ArborError::InvalidValue { .. } => ExitCode::Usage,

            ArborError::DuplicateVertex { .. }
            | ArborError::InvalidEdge { .. }
            | ArborError::InvalidVertex { .. }
            | ArborError::UnreachableTarget { .. } => ExitCode::Data,

            ArborError::Io(_)
            | ArborError::Toml(_)
            | ArborError::TomlSer(_)
            | ArborError::Json(_)
            | ArborError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            ArborError::UnknownFormat(_) => "unknown_format",
            ArborError::UsageError(_) => "usage_error",
            ArborError::InvalidValue { .. } => "invalid_value",
            ArborError::DuplicateVertex { .. } => "duplicate_vertex",
            ArborError::InvalidEdge { .. } => "invalid_edge",
            ArborError::InvalidVertex { .. } => "invalid_vertex",
            ArborError::UnreachableTarget { .. } => "unreachable_target",
            ArborError::Io(_) => "io_error",
            ArborError::Toml(_) | ArborError::TomlSer(_) => "toml_error",
            ArborError::Json(_) => "json_error",
            ArborError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for arbor operations
pub type Result<T> = std::result::Result<T, ArborError>;
