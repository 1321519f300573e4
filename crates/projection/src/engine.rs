//! Simulation engine contract and in-memory implementation.

use std::sync::{Arc, RwLock};

use crate::error::{ProjectionError, Result};

/// Contract to the external simulation engine.
///
/// The engine is a compiled black box: it receives the family as a JSON
/// string plus a horizon in years, and answers with a JSON document holding
/// the projected output. Its internals are opaque; only this request/response
/// shape is relied upon.
pub trait ProjectionEngine: Send + Sync {
    /// Runs the simulation over the serialized family.
    fn run(&self, family_json: &str, years: u32) -> Result<String>;
}

#[derive(Debug, Default)]
struct FixedResponseState {
    last_request: Option<(String, u32)>,
    failure: Option<String>,
}

/// In-memory engine for testing.
///
/// Answers every run with a fixed payload and records the most recent
/// request so tests can assert on the wire shape the engine was given.
#[derive(Debug, Clone)]
pub struct FixedResponseEngine {
    response: String,
    state: Arc<RwLock<FixedResponseState>>,
}

impl FixedResponseEngine {
    /// Creates an engine that always answers with the given payload.
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
            state: Arc::new(RwLock::new(FixedResponseState::default())),
        }
    }

    /// Configures the engine to fail every run with the given message.
    pub fn set_failure(&self, message: impl Into<String>) {
        self.state.write().unwrap().failure = Some(message.into());
    }

    /// Returns the most recent `(family_json, years)` request.
    pub fn last_request(&self) -> Option<(String, u32)> {
        self.state.read().unwrap().last_request.clone()
    }
}

impl ProjectionEngine for FixedResponseEngine {
    fn run(&self, family_json: &str, years: u32) -> Result<String> {
        let mut state = self.state.write().unwrap();
        state.last_request = Some((family_json.to_string(), years));
        if let Some(message) = &state.failure {
            return Err(ProjectionError::Engine(message.clone()));
        }
        Ok(self.response.clone())
    }
}
