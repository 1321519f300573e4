//! Domain error types.

use common::EntityId;
use thiserror::Error;

use crate::action::ActionError;

/// Errors that can occur during plan execution.
#[derive(Debug, Error)]
pub enum DomainError {
    /// No family member matches the step's person id.
    #[error("Person not found: {person_id}")]
    PersonNotFound { person_id: EntityId },

    /// An action failed; the message surfaces unchanged.
    #[error(transparent)]
    Action(#[from] ActionError),
}
