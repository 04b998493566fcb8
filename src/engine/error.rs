//! Error types for language-engine invocations.

use std::io;
use std::process::ExitStatus;

use thiserror::Error;

/// Errors that can occur while obtaining a [`Response`](crate::model::Response).
///
/// These are faults of the engine or its transport; "nothing at this position" is
/// never an error and is reported as an empty result instead.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The engine process could not be started.
    #[error("failed to start language engine `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    /// IO error while talking to the engine.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The engine ran but reported failure.
    #[error("language engine exited with {status}: {stderr}")]
    Exit { status: ExitStatus, stderr: String },

    /// Request encoding or response decoding failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The response contained a node we cannot represent.
    #[error("Invalid {kind} node: {message}")]
    InvalidNode { kind: &'static str, message: String },

    /// Engine settings could not be deserialized.
    #[error("Invalid engine configuration: {0}")]
    Config(#[source] serde_json::Error),
}

impl EngineError {
    /// Create an invalid node error.
    pub fn invalid_node(kind: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidNode {
            kind,
            message: message.into(),
        }
    }
}
