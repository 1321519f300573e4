//! The action library: typed state transitions applied to one person.

use chrono::{DateTime, Utc};
use common::EntityId;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::household::{Career, Person, WealthObject};

/// Errors that can occur while applying an action.
#[derive(Debug, Error)]
pub enum ActionError {
    /// The career id does not exist in the person's careers.
    #[error("Career not found: {career_id}")]
    CareerNotFound { career_id: EntityId },

    /// The wealth object id does not exist in the person's wealth.
    #[error("Wealth object not found: {wealth_object_id}")]
    WealthObjectNotFound { wealth_object_id: EntityId },
}

/// State transitions a plan step can apply to a person.
///
/// Every action mutates exactly the person it targets, in place. The only
/// validation performed is existence of referenced sub-entities; amounts,
/// dates, and currencies are accepted as given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Action {
    /// Close a career by stamping its end date.
    EndCareer(EndCareerData),

    /// Add a career to the person's history.
    NewCareer(NewCareerData),

    /// End one career and start another in a single step.
    ChangeCareer(ChangeCareerData),

    /// Acquire a wealth object, recording its purchase flow.
    BuyWealthObject(BuyWealthObjectData),

    /// Dispose of a wealth object, recording its proceeds flow.
    SellWealthObject(SellWealthObjectData),
}

impl Action {
    /// Returns the action's kind label.
    pub fn kind(&self) -> &'static str {
        match self {
            Action::EndCareer(_) => "EndCareer",
            Action::NewCareer(_) => "NewCareer",
            Action::ChangeCareer(_) => "ChangeCareer",
            Action::BuyWealthObject(_) => "BuyWealthObject",
            Action::SellWealthObject(_) => "SellWealthObject",
        }
    }

    /// Applies the action to the person at the given point in time.
    pub fn apply(&self, time: DateTime<Utc>, person: &mut Person) -> Result<(), ActionError> {
        match self {
            Action::EndCareer(data) => stamp_career_end(person, &data.career_id, time),
            Action::NewCareer(data) => {
                person.careers.push(data.career.clone());
                Ok(())
            }
            Action::ChangeCareer(data) => {
                // Fail-fast composition: a missing old career means the new
                // one is never appended.
                stamp_career_end(person, &data.from_career_id, time)?;
                person.careers.push(data.to_career.clone());
                Ok(())
            }
            Action::BuyWealthObject(data) => {
                if let Some(transaction) = &data.wealth_object.financial_transaction {
                    person.financials.push(transaction.clone());
                }
                person.wealth.wealth_objects.push(data.wealth_object.clone());
                Ok(())
            }
            Action::SellWealthObject(data) => {
                let object = person
                    .wealth
                    .remove_object(&data.wealth_object_id)
                    .ok_or_else(|| ActionError::WealthObjectNotFound {
                        wealth_object_id: data.wealth_object_id.clone(),
                    })?;
                if let Some(transaction) = object.financial_transaction {
                    person.financials.push(transaction);
                }
                Ok(())
            }
        }
    }
}

/// Stamps the career's end date, keeping the record in the list.
fn stamp_career_end(
    person: &mut Person,
    career_id: &EntityId,
    time: DateTime<Utc>,
) -> Result<(), ActionError> {
    let career = person
        .career_mut(career_id)
        .ok_or_else(|| ActionError::CareerNotFound {
            career_id: career_id.clone(),
        })?;
    career.end_date = time;
    Ok(())
}

/// Data for the EndCareer action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndCareerData {
    /// The career to end.
    pub career_id: EntityId,
}

/// Data for the NewCareer action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCareerData {
    /// The career to append. The caller owns id generation.
    pub career: Career,
}

/// Data for the ChangeCareer action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeCareerData {
    /// The career being left.
    pub from_career_id: EntityId,

    /// The career being started.
    pub to_career: Career,
}

/// Data for the BuyWealthObject action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuyWealthObjectData {
    /// The object being acquired, with its purchase transaction attached.
    pub wealth_object: WealthObject,
}

/// Data for the SellWealthObject action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SellWealthObjectData {
    /// The object being disposed of.
    pub wealth_object_id: EntityId,
}

// Convenience constructors for actions
impl Action {
    /// Creates an EndCareer action.
    pub fn end_career(career_id: EntityId) -> Self {
        Action::EndCareer(EndCareerData { career_id })
    }

    /// Creates a NewCareer action.
    pub fn new_career(career: Career) -> Self {
        Action::NewCareer(NewCareerData { career })
    }

    /// Creates a ChangeCareer action.
    pub fn change_career(from_career_id: EntityId, to_career: Career) -> Self {
        Action::ChangeCareer(ChangeCareerData {
            from_career_id,
            to_career,
        })
    }

    /// Creates a BuyWealthObject action.
    pub fn buy_wealth_object(wealth_object: WealthObject) -> Self {
        Action::BuyWealthObject(BuyWealthObjectData { wealth_object })
    }

    /// Creates a SellWealthObject action.
    pub fn sell_wealth_object(wealth_object_id: EntityId) -> Self {
        Action::SellWealthObject(SellWealthObjectData { wealth_object_id })
    }
}
