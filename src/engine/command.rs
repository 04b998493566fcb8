//! An engine that runs as a separate process.
//!
//! The request is written to the child's stdin as JSON and the response is read
//! from its stdout in the format understood by [`decode_response_slice`].

use std::io::{self, Write};
use std::process::{Command, Stdio};
use std::thread;

use tracing::{debug, warn};

use super::config::CommandConfig;
use super::error::EngineError;
use super::wire::decode_response_slice;
use super::{EngineRequest, LanguageEngine};
use crate::model::Response;

/// Runs an external program once per request.
#[derive(Clone, Debug)]
pub struct CommandEngine {
    program: String,
    args: Vec<String>,
}

impl CommandEngine {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    pub fn from_config(config: &CommandConfig) -> Self {
        Self::new(config.program.clone()).with_args(config.args.iter().cloned())
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl LanguageEngine for CommandEngine {
    fn run(&self, request: &EngineRequest) -> Result<Response, EngineError> {
        debug!(
            program = %self.program,
            stages = ?request.process,
            input_len = request.input.len(),
            "running language engine"
        );

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| EngineError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        let payload = serde_json::to_vec(request)?;
        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| io::Error::new(io::ErrorKind::BrokenPipe, "engine stdin unavailable"))?;
        // The child may fill stdout before it has consumed all of stdin.
        let writer = thread::spawn(move || stdin.write_all(&payload));

        let output = child.wait_with_output()?;

        match writer.join() {
            Ok(Ok(())) => {}
            // An engine is allowed to exit without draining stdin.
            Ok(Err(err)) if err.kind() == io::ErrorKind::BrokenPipe => {}
            Ok(Err(err)) => return Err(err.into()),
            Err(_) => return Err(io::Error::other("engine stdin writer panicked").into()),
        }

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            warn!(program = %self.program, status = %output.status, "language engine failed");
            return Err(EngineError::Exit {
                status: output.status,
                stderr,
            });
        }

        decode_response_slice(&output.stdout)
    }
}
