//! The household model: people, careers, cash flows, wealth, and milestones.

mod career;
mod financial;
mod location;
mod milestone;
mod person;
mod wealth;

pub use career::Career;
pub use financial::{Currency, Financial, FxError, RateTable, net_income};
pub use location::Location;
pub use milestone::{AchievingMethod, Milestone};
pub use person::{Family, Person, Relation, RelationType};
pub use wealth::{LiquidityTier, Wealth, WealthObject};
