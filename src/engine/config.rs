//! Engine configuration.
//!
//! Settings are an explicit value handed to the host and copied into every request;
//! nothing is cached process-wide.

use serde::Deserialize;
use smol_str::SmolStr;

use super::error::EngineError;

/// Stages run for every editor query.
pub const DEFAULT_PROCESS: [&str; 3] = ["preprocessor", "parse-input", "build-model"];

fn default_process() -> Vec<SmolStr> {
    DEFAULT_PROCESS.iter().copied().map(SmolStr::new).collect()
}

/// Settings threaded into each [`EngineRequest`](super::EngineRequest).
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineConfig {
    /// Ordered pipeline stage names.
    #[serde(default = "default_process")]
    pub process: Vec<SmolStr>,
    /// Pass the document path along with its text.
    #[serde(default = "default_true")]
    pub send_input_path: bool,
    /// How to launch an external engine, if one is used.
    #[serde(default)]
    pub command: Option<CommandConfig>,
}

fn default_true() -> bool {
    true
}

/// Program and arguments for [`CommandEngine`](super::CommandEngine).
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CommandConfig {
    pub program: String,
    #[serde(default)]
    pub args: Vec<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            process: default_process(),
            send_input_path: true,
            command: None,
        }
    }
}

impl EngineConfig {
    /// Read settings from an editor configuration payload.
    ///
    /// Missing fields fall back to their defaults.
    pub fn from_settings(settings: serde_json::Value) -> Result<Self, EngineError> {
        serde_json::from_value(settings).map_err(EngineError::Config)
    }

    /// Replace the pipeline stages.
    pub fn with_process<I, S>(mut self, stages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SmolStr>,
    {
        self.process = stages.into_iter().map(Into::into).collect();
        self
    }
}
