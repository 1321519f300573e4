//! Runs a family through the simulation engine.

use domain::Family;
use serde_json::Value;

use crate::engine::ProjectionEngine;
use crate::error::Result;

/// Horizon used when the caller does not pick one, in years.
pub const DEFAULT_HORIZON_YEARS: u32 = 50;

/// Projects the family over the given horizon.
///
/// Serializes the family to the engine's JSON wire shape, runs the engine,
/// and parses the response back into a plain JSON value. The response shape
/// is the engine's to define; it is passed through unconstrained.
#[tracing::instrument(skip(engine, family))]
pub fn project(engine: &impl ProjectionEngine, family: &Family, years: u32) -> Result<Value> {
    let family_json = serde_json::to_string(family)?;
    tracing::debug!(
        members = family.members.len(),
        bytes = family_json.len(),
        "dispatching family to engine"
    );
    let response = engine.run(&family_json, years)?;
    let output = serde_json::from_str(&response)?;
    Ok(output)
}

/// Projects the family over the default fifty-year horizon.
pub fn project_default(engine: &impl ProjectionEngine, family: &Family) -> Result<Value> {
    project(engine, family, DEFAULT_HORIZON_YEARS)
}
