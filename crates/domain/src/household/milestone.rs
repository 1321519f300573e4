//! Life milestones and how they are achieved.

use chrono::{DateTime, Utc};
use common::EntityId;
use serde::{Deserialize, Serialize};

/// How a milestone counts as achieved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "camelCase")]
pub enum AchievingMethod {
    /// Achieved once a point in time is reached.
    ByDate { date: DateTime<Utc> },

    /// Achieved once an amount is accumulated.
    ByAmount { amount: f64 },

    /// Achieved through the owner's overall wealth; carries no extra data.
    ByWealth,
}

/// A named life goal attached to a person or a relation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    /// Unique identifier.
    pub id: EntityId,

    /// Human-readable label (e.g. "Retire", "Buy a house").
    pub name: String,

    /// How the milestone is achieved.
    pub achieving_method: AchievingMethod,
}

impl Milestone {
    /// Creates a milestone achieved at a point in time.
    pub fn by_date(name: impl Into<String>, date: DateTime<Utc>) -> Self {
        Self {
            id: EntityId::generate(),
            name: name.into(),
            achieving_method: AchievingMethod::ByDate { date },
        }
    }

    /// Creates a milestone achieved at an accumulated amount.
    pub fn by_amount(name: impl Into<String>, amount: f64) -> Self {
        Self {
            id: EntityId::generate(),
            name: name.into(),
            achieving_method: AchievingMethod::ByAmount { amount },
        }
    }

    /// Creates a milestone achieved through overall wealth.
    pub fn by_wealth(name: impl Into<String>) -> Self {
        Self {
            id: EntityId::generate(),
            name: name.into(),
            achieving_method: AchievingMethod::ByWealth,
        }
    }
}
