//! Projection of a family through the external simulation engine.
//!
//! This crate owns the boundary to the compiled simulation module:
//! - [`ProjectionEngine`] trait: the `(family_json, years) -> response_json`
//!   contract the engine is reached through
//! - [`project`] and [`project_default`]: serialize a family, run the
//!   engine, and parse the response
//! - [`FixedResponseEngine`]: an in-memory engine for tests

pub mod engine;
pub mod error;
pub mod projector;

pub use engine::{FixedResponseEngine, ProjectionEngine};
pub use error::{ProjectionError, Result};
pub use projector::{DEFAULT_HORIZON_YEARS, project, project_default};
