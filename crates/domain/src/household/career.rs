//! Careers and their attached income streams.

use chrono::{DateTime, Utc};
use common::EntityId;
use serde::{Deserialize, Serialize};

use super::financial::{Currency, Financial};

/// A period of employment and the cash flows it generates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Career {
    /// Unique identifier.
    pub id: EntityId,

    /// Job title or employer label.
    pub name: String,

    /// When the career starts.
    pub start_date: DateTime<Utc>,

    /// When the career ends. Ending a career sets this; the record stays.
    pub end_date: DateTime<Utc>,

    /// Salary and related flows.
    pub financials: Vec<Financial>,
}

impl Career {
    /// Creates a new career with a generated id and no flows.
    pub fn new(name: impl Into<String>, start_date: DateTime<Utc>, end_date: DateTime<Utc>) -> Self {
        Self {
            id: EntityId::generate(),
            name: name.into(),
            start_date,
            end_date,
            financials: Vec::new(),
        }
    }

    /// Creates a career with a salary flow spanning its whole duration.
    pub fn with_salary(
        name: impl Into<String>,
        salary: f64,
        currency: Currency,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
    ) -> Self {
        let mut career = Self::new(name, start_date, end_date);
        career.financials.push(Financial::new(
            "Salary",
            salary,
            currency,
            start_date,
            end_date,
        ));
        career
    }
}
