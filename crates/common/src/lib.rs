//! Shared types for the household finance simulation.

mod types;

pub use types::EntityId;
