//! Where a family lives.

use common::EntityId;
use serde::{Deserialize, Serialize};

/// A place of residence, used to anchor location-dependent assumptions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    /// Unique identifier.
    pub id: EntityId,

    /// Country name.
    pub country: String,

    /// State or province name.
    pub state: String,
}

impl Location {
    /// Creates a location with a generated id.
    pub fn new(country: impl Into<String>, state: impl Into<String>) -> Self {
        Self {
            id: EntityId::generate(),
            country: country.into(),
            state: state.into(),
        }
    }
}

impl Default for Location {
    fn default() -> Self {
        Self {
            id: EntityId::new("thailand"),
            country: "Thailand".to_string(),
            state: "Bangkok".to_string(),
        }
    }
}
