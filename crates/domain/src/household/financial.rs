//! Cash-flow records, currencies, and the exchange-rate table.

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, NaiveDate, Utc};
use common::EntityId;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Currencies the simulation prices flows in.
///
/// `SAT` is the base unit: every exchange rate is stored as a value in SAT.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    THB,
    USD,
    SAT,
}

impl Currency {
    /// Returns the currency code.
    pub fn code(&self) -> &'static str {
        match self {
            Currency::THB => "THB",
            Currency::USD => "USD",
            Currency::SAT => "SAT",
        }
    }

    /// All currencies the table can quote.
    pub fn all() -> [Currency; 3] {
        [Currency::THB, Currency::USD, Currency::SAT]
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Errors that can occur during exchange-rate lookups.
#[derive(Debug, Error)]
pub enum FxError {
    /// The rate table has no value-in-SAT entry for the currency.
    #[error("No exchange rate available for {currency}")]
    RateUnavailable { currency: Currency },
}

/// A signed cash-flow event.
///
/// A positive amount is income, a negative amount is an expense. The sign
/// convention is the whole model: nothing else distinguishes the two.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Financial {
    /// Unique identifier.
    pub id: EntityId,

    /// Human-readable label (e.g. "Salary", "Rent").
    pub name: String,

    /// Signed amount per period, in `currency`.
    pub amount: f64,

    /// Currency the amount is denominated in.
    pub currency: Currency,

    /// When the flow starts.
    pub start_date: DateTime<Utc>,

    /// When the flow ends.
    pub end_date: DateTime<Utc>,
}

impl Financial {
    /// Creates a new financial with a generated id.
    pub fn new(
        name: impl Into<String>,
        amount: f64,
        currency: Currency,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: EntityId::generate(),
            name: name.into(),
            amount,
            currency,
            start_date,
            end_date,
        }
    }

    /// Creates an income flow, forcing the amount positive.
    pub fn income(
        name: impl Into<String>,
        amount: f64,
        currency: Currency,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
    ) -> Self {
        Self::new(name, amount.abs(), currency, start_date, end_date)
    }

    /// Creates an expense flow, forcing the amount negative.
    pub fn expense(
        name: impl Into<String>,
        amount: f64,
        currency: Currency,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
    ) -> Self {
        Self::new(name, -amount.abs(), currency, start_date, end_date)
    }

    /// Returns true if the flow is income (strictly positive amount).
    pub fn is_income(&self) -> bool {
        self.amount > 0.0
    }
}

/// Sums the signed amounts of a list of financials.
///
/// An empty list sums to zero.
pub fn net_income(financials: &[Financial]) -> f64 {
    financials.iter().map(|financial| financial.amount).sum()
}

/// Exchange rates quoted as a value in SAT per unit of each currency.
///
/// Holds a current spot snapshot plus a series of daily closes for
/// historical lookups. A cross rate is `value_in_sat(from) / value_in_sat(to)`.
#[derive(Debug, Clone, PartialEq)]
pub struct RateTable {
    current: HashMap<Currency, f64>,
    closes: BTreeMap<NaiveDate, HashMap<Currency, f64>>,
}

impl RateTable {
    /// Creates a rate table from a spot snapshot.
    pub fn new(current: HashMap<Currency, f64>) -> Self {
        Self {
            current,
            closes: BTreeMap::new(),
        }
    }

    /// Sets the current value in SAT for a currency.
    pub fn set_rate(&mut self, currency: Currency, value_in_sat: f64) {
        self.current.insert(currency, value_in_sat);
    }

    /// Records a daily close for a currency.
    pub fn record_close(&mut self, date: NaiveDate, currency: Currency, value_in_sat: f64) {
        self.closes
            .entry(date)
            .or_default()
            .insert(currency, value_in_sat);
    }

    /// Returns the rate converting one unit of `from` into `to`.
    ///
    /// Identity conversions are always `1.0`, even for currencies the table
    /// does not quote. Any other pair requires both sides to be present.
    pub fn rate(&self, from: Currency, to: Currency) -> Result<f64, FxError> {
        Self::rate_in(&self.current, from, to)
    }

    /// Returns the rate as of `date`, using the most recent daily close at or
    /// before it. Falls back to the current snapshot when no close qualifies.
    pub fn rate_on(&self, date: NaiveDate, from: Currency, to: Currency) -> Result<f64, FxError> {
        let table = self
            .closes
            .range(..=date)
            .next_back()
            .map(|(_, close)| close)
            .unwrap_or(&self.current);
        Self::rate_in(table, from, to)
    }

    /// Converts an amount from one currency into another at the current rate.
    pub fn convert(&self, amount: f64, from: Currency, to: Currency) -> Result<f64, FxError> {
        Ok(amount * self.rate(from, to)?)
    }

    fn rate_in(
        table: &HashMap<Currency, f64>,
        from: Currency,
        to: Currency,
    ) -> Result<f64, FxError> {
        if from == to {
            return Ok(1.0);
        }
        let from_in_sat = table
            .get(&from)
            .copied()
            .ok_or(FxError::RateUnavailable { currency: from })?;
        let to_in_sat = table
            .get(&to)
            .copied()
            .ok_or(FxError::RateUnavailable { currency: to })?;
        Ok(from_in_sat / to_in_sat)
    }
}

impl Default for RateTable {
    fn default() -> Self {
        // Spot values in SAT as of 2025-12-06.
        let mut current = HashMap::new();
        current.insert(Currency::THB, 34.817);
        current.insert(Currency::USD, 1114.505);
        current.insert(Currency::SAT, 1.0);
        Self::new(current)
    }
}
