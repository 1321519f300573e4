//! Plans, steps, and their execution against a family.

use chrono::{DateTime, Utc};
use common::EntityId;
use serde::{Deserialize, Serialize};

use crate::action::Action;
use crate::error::DomainError;
use crate::household::Family;

/// One timed, targeted state transition inside a plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    /// When the step takes effect. Passed to the action as its time.
    pub time: DateTime<Utc>,

    /// The family member the step targets.
    pub person_id: EntityId,

    /// The state transition to apply.
    pub action: Action,
}

impl Step {
    /// Creates a step.
    pub fn new(time: DateTime<Utc>, person_id: EntityId, action: Action) -> Self {
        Self {
            time,
            person_id,
            action,
        }
    }

    /// Applies the step to the targeted family member.
    ///
    /// Fails with [`DomainError::PersonNotFound`] before the action runs when
    /// no member matches `person_id`.
    pub fn execute(&self, family: &mut Family) -> Result<(), DomainError> {
        let person = family
            .member_mut(&self.person_id)
            .ok_or_else(|| DomainError::PersonNotFound {
                person_id: self.person_id.clone(),
            })?;
        self.action.apply(self.time, person)?;
        Ok(())
    }
}

/// An ordered sequence of steps applied to a family as one unit of intent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    /// Unique identifier.
    pub id: EntityId,

    /// Human-readable label (e.g. "Buy a condo in 2030").
    pub name: String,

    /// Steps in application order. Chronological ordering is the plan
    /// author's job; execution never sorts.
    pub steps: Vec<Step>,
}

impl Plan {
    /// Creates an empty plan with a generated id.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: EntityId::generate(),
            name: name.into(),
            steps: Vec::new(),
        }
    }

    /// Executes every step strictly in array order, mutating the family in
    /// place.
    ///
    /// The first failing step aborts the remainder and its error propagates
    /// unchanged. Execution is not transactional: mutations made by earlier
    /// steps stay in place.
    #[tracing::instrument(skip(self, family), fields(plan_id = %self.id, steps = self.steps.len()))]
    pub fn execute(&self, family: &mut Family) -> Result<(), DomainError> {
        metrics::counter!("plan_executions_total").increment(1);
        let run_start = std::time::Instant::now();

        for (index, step) in self.steps.iter().enumerate() {
            tracing::debug!(
                index,
                action = step.action.kind(),
                person_id = %step.person_id,
                "applying step"
            );
            if let Err(error) = step.execute(family) {
                metrics::counter!("plan_executions_failed").increment(1);
                metrics::histogram!("plan_execution_seconds")
                    .record(run_start.elapsed().as_secs_f64());
                tracing::warn!(index, %error, "plan aborted");
                return Err(error);
            }
        }

        metrics::histogram!("plan_execution_seconds").record(run_start.elapsed().as_secs_f64());
        tracing::debug!("plan executed");
        Ok(())
    }
}

/// A planning session: the set of plans drawn up against one family.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Simulation {
    /// The session's plans.
    pub plans: Vec<Plan>,
}

impl Simulation {
    /// Creates a simulation over the given plans.
    pub fn new(plans: Vec<Plan>) -> Self {
        Self { plans }
    }
}
