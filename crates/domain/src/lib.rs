//! Domain layer for the household finance simulation.
//!
//! This crate provides the core model and its behavior:
//! - The household entities: Family, Person, Career, Financial, Wealth,
//!   Milestone, Relation, Location
//! - Pure aggregation over those entities: net income, net worth, tiered
//!   liquidity, exchange rates
//! - The action library: typed state transitions applied to one person
//! - Plans and steps, executed strictly in order against a family

pub mod action;
pub mod error;
pub mod household;
pub mod plan;

pub use action::{
    Action, ActionError, BuyWealthObjectData, ChangeCareerData, EndCareerData, NewCareerData,
    SellWealthObjectData,
};
pub use error::DomainError;
pub use household::{
    AchievingMethod, Career, Currency, Family, Financial, FxError, LiquidityTier, Location,
    Milestone, Person, RateTable, Relation, RelationType, Wealth, WealthObject, net_income,
};
pub use plan::{Plan, Simulation, Step};
