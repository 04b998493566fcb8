//! Language engine bridge.
//!
//! Parsing and model building happen outside this crate. The engine receives the
//! document text plus an ordered list of processing stages and answers with a
//! [`Response`]: the CST and the semantic maps the query layer works on.
//!
//! ```text
//! EngineRequest { input, inputPath?, process: [stage…] }
//!        │
//!        ▼
//!   LanguageEngine::run ──► Response { ast, statements, arguments, tags, parserErrors }
//! ```

mod command;
mod config;
mod error;
mod wire;

use std::path::PathBuf;

use serde::Serialize;
use smol_str::SmolStr;
use url::Url;

use crate::model::Response;

pub use command::CommandEngine;
pub use config::{CommandConfig, DEFAULT_PROCESS, EngineConfig};
pub use error::EngineError;
pub use wire::{decode_response, decode_response_slice};

/// One invocation of the language engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineRequest {
    pub input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_path: Option<PathBuf>,
    pub process: Vec<SmolStr>,
}

impl EngineRequest {
    /// Build a request for `input` using the configured pipeline.
    pub fn new(input: impl Into<String>, config: &EngineConfig) -> Self {
        Self {
            input: input.into(),
            input_path: None,
            process: config.process.clone(),
        }
    }

    pub fn with_input_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.input_path = Some(path.into());
        self
    }
}

/// Something that turns source text into a [`Response`].
pub trait LanguageEngine {
    fn run(&self, request: &EngineRequest) -> Result<Response, EngineError>;
}

impl<F> LanguageEngine for F
where
    F: Fn(&EngineRequest) -> Result<Response, EngineError>,
{
    fn run(&self, request: &EngineRequest) -> Result<Response, EngineError> {
        self(request)
    }
}

/// Convert a `file://` URI into a path for the engine; other schemes have none.
pub fn input_path_for_uri(uri: &str) -> Option<PathBuf> {
    Url::parse(uri).ok()?.to_file_path().ok()
}
