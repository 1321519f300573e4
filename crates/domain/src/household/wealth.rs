//! Wealth objects (assets and liabilities) and liquidity classification.

use chrono::{DateTime, Utc};
use common::EntityId;
use serde::{Deserialize, Serialize};

use super::financial::{Financial, net_income};

/// How quickly a wealth object can be turned into cash.
///
/// Tiers order from most to least liquid; comparisons use that order. The
/// serialized form is the tier's rough days-to-liquidate threshold, which is
/// also what external consumers read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u32", try_from = "u32")]
pub enum LiquidityTier {
    Cash,
    ShortTerm,
    LongTerm,
    VeryLongTerm,
    Illiquid,
}

impl LiquidityTier {
    /// Returns the rough number of days needed to liquidate this tier.
    pub fn days_to_liquidate(&self) -> u32 {
        match self {
            LiquidityTier::Cash => 0,
            LiquidityTier::ShortTerm => 7,
            LiquidityTier::LongTerm => 30,
            LiquidityTier::VeryLongTerm => 365,
            LiquidityTier::Illiquid => 99_999,
        }
    }
}

impl From<LiquidityTier> for u32 {
    fn from(tier: LiquidityTier) -> Self {
        tier.days_to_liquidate()
    }
}

impl TryFrom<u32> for LiquidityTier {
    type Error = String;

    fn try_from(days: u32) -> Result<Self, Self::Error> {
        match days {
            0 => Ok(LiquidityTier::Cash),
            7 => Ok(LiquidityTier::ShortTerm),
            30 => Ok(LiquidityTier::LongTerm),
            365 => Ok(LiquidityTier::VeryLongTerm),
            99_999 => Ok(LiquidityTier::Illiquid),
            other => Err(format!("unknown liquidity tier: {other} days")),
        }
    }
}

/// A single asset or liability with its attached cash flows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WealthObject {
    /// Unique identifier.
    pub id: EntityId,

    /// Human-readable label (e.g. "Condo", "Car loan").
    pub name: String,

    /// Purchase-time value. Descriptive only; aggregates ignore it.
    pub initial_value: f64,

    /// Expected value at disposal. Descriptive only; aggregates ignore it.
    pub final_value: f64,

    /// When the object is acquired.
    pub start_date: DateTime<Utc>,

    /// When the object is disposed of.
    pub end_date: DateTime<Utc>,

    /// Recurring flows attributable to holding the object.
    pub financials: Vec<Financial>,

    /// Liquidity classification.
    pub liquidity_tier: LiquidityTier,

    /// One-time flow triggered by acquiring or disposing of the object.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub financial_transaction: Option<Financial>,
}

impl WealthObject {
    /// Creates a new wealth object with a generated id and no flows.
    pub fn new(
        name: impl Into<String>,
        initial_value: f64,
        final_value: f64,
        liquidity_tier: LiquidityTier,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: EntityId::generate(),
            name: name.into(),
            initial_value,
            final_value,
            start_date,
            end_date,
            financials: Vec::new(),
            liquidity_tier,
            financial_transaction: None,
        }
    }

    /// Creates a new wealth object carrying a one-time transaction.
    pub fn with_transaction(
        name: impl Into<String>,
        initial_value: f64,
        final_value: f64,
        liquidity_tier: LiquidityTier,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
        financial_transaction: Financial,
    ) -> Self {
        Self {
            financial_transaction: Some(financial_transaction),
            ..Self::new(
                name,
                initial_value,
                final_value,
                liquidity_tier,
                start_date,
                end_date,
            )
        }
    }

    /// Returns the sum of the object's recurring flow amounts.
    pub fn net_income(&self) -> f64 {
        net_income(&self.financials)
    }

    /// Returns true if the object nets a strictly positive income.
    pub fn is_asset(&self) -> bool {
        self.net_income() > 0.0
    }
}

/// All wealth objects owned by one person.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wealth {
    /// The owned objects.
    pub wealth_objects: Vec<WealthObject>,
}

impl Wealth {
    /// Creates an empty wealth container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the sum of net incomes over all wealth objects.
    pub fn net_worth(&self) -> f64 {
        self.wealth_objects
            .iter()
            .map(WealthObject::net_income)
            .sum()
    }

    /// Returns the sum of net incomes over objects at or below the given
    /// liquidity tier (the value realizable within that tier's horizon).
    pub fn liquidity_value(&self, tier: LiquidityTier) -> f64 {
        self.wealth_objects
            .iter()
            .filter(|object| object.liquidity_tier <= tier)
            .map(WealthObject::net_income)
            .sum()
    }

    /// Looks up a wealth object by id.
    pub fn object(&self, id: &EntityId) -> Option<&WealthObject> {
        self.wealth_objects.iter().find(|object| &object.id == id)
    }

    /// Removes and returns the wealth object with the given id, keeping the
    /// remaining objects in order.
    pub fn remove_object(&mut self, id: &EntityId) -> Option<WealthObject> {
        let index = self
            .wealth_objects
            .iter()
            .position(|object| &object.id == id)?;
        Some(self.wealth_objects.remove(index))
    }
}
