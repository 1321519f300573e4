//! People, the relations between them, and the family aggregate.

use chrono::{DateTime, Datelike, Months, TimeZone, Utc};
use common::EntityId;
use serde::{Deserialize, Serialize};

use super::career::Career;
use super::financial::{Financial, net_income};
use super::milestone::Milestone;
use super::wealth::Wealth;

const ASSUMED_LIFESPAN_YEARS: i32 = 90;

/// A family member with their careers, cash flows, wealth, and milestones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    /// Unique identifier.
    pub id: EntityId,

    /// The person's name.
    pub name: String,

    /// Date of birth.
    pub start_date: DateTime<Utc>,

    /// Assumed date of death.
    pub end_date: DateTime<Utc>,

    /// Employment history. Ended careers stay in the list.
    pub careers: Vec<Career>,

    /// Flows not tied to a career or a wealth object.
    pub financials: Vec<Financial>,

    /// Everything the person owns or owes.
    pub wealth: Wealth,

    /// The person's life goals.
    pub milestones: Vec<Milestone>,
}

impl Person {
    /// Creates a person with a generated id and empty collections.
    pub fn new(name: impl Into<String>, start_date: DateTime<Utc>, end_date: DateTime<Utc>) -> Self {
        Self {
            id: EntityId::generate(),
            name: name.into(),
            start_date,
            end_date,
            careers: Vec::new(),
            financials: Vec::new(),
            wealth: Wealth::new(),
            milestones: Vec::new(),
        }
    }

    /// Creates a person who is `age` years old today.
    ///
    /// The birth date is pinned to January 1st of the birth year, and the
    /// assumed death date to January 1st ninety years later.
    pub fn with_age(name: impl Into<String>, age: u8) -> Self {
        let birth_year = Utc::now().year() - i32::from(age);
        let start_date = Utc.with_ymd_and_hms(birth_year, 1, 1, 0, 0, 0).unwrap();
        let end_date = Utc
            .with_ymd_and_hms(birth_year + ASSUMED_LIFESPAN_YEARS, 1, 1, 0, 0, 0)
            .unwrap();
        Self::new(name, start_date, end_date)
    }

    /// Looks up a career by id.
    pub fn career(&self, id: &EntityId) -> Option<&Career> {
        self.careers.iter().find(|career| &career.id == id)
    }

    /// Looks up a career by id for mutation.
    pub fn career_mut(&mut self, id: &EntityId) -> Option<&mut Career> {
        self.careers.iter_mut().find(|career| &career.id == id)
    }

    /// Returns the sum of the person's own flow amounts (careers and wealth
    /// objects keep their flows separately).
    pub fn net_income(&self) -> f64 {
        net_income(&self.financials)
    }

    /// Renders the interval between birth and assumed death as
    /// `"<years> years, <months> months, <days> days"`.
    ///
    /// The interval decomposes calendar-wise: whole years first, then whole
    /// months, then the days left over. A reversed interval yields negated
    /// components.
    pub fn life_span(&self) -> String {
        let (years, months, days) = interval_parts(self.start_date, self.end_date);
        format!("{years} years, {months} months, {days} days")
    }
}

/// Decomposes `start..end` into whole calendar years, months, and days.
fn interval_parts(start: DateTime<Utc>, end: DateTime<Utc>) -> (i64, i64, i64) {
    if end < start {
        let (years, months, days) = interval_parts(end, start);
        return (-years, -months, -days);
    }

    // Whole years come off first and fix the year anchor, which clamps a
    // Feb 29 start to its Feb 28 anniversary. Whole months then count from
    // that anchor, and the leftover days from the month anchor. A candidate
    // borrows one when its addition overshoots the end (month-end days
    // clamp under month addition).
    let mut years = i64::from(end.year() - start.year());
    if years > 0 && months_later(start, years * 12) > end {
        years -= 1;
    }
    let year_anchor = months_later(start, years * 12);

    let mut months = i64::from(end.year() - year_anchor.year()) * 12
        + (i64::from(end.month()) - i64::from(year_anchor.month()));
    if months > 0 && months_later(year_anchor, months) > end {
        months -= 1;
    }
    let month_anchor = months_later(year_anchor, months);

    let days = (end - month_anchor).num_days();
    (years, months, days)
}

fn months_later(start: DateTime<Utc>, months: i64) -> DateTime<Utc> {
    start
        .checked_add_months(Months::new(months as u32))
        .unwrap_or(start)
}

/// How two family members relate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RelationType {
    Spouse,
    Father,
    Mother,
    Children,
}

/// A directed link between two family members.
///
/// Relations reference people by id only; the family owns the people.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Relation {
    /// Id of the person on the left of the link.
    pub left_person_id: EntityId,

    /// Id of the person on the right of the link.
    pub right_person_id: EntityId,

    /// What the link means, read left to right.
    pub kind: RelationType,

    /// Goals attached to the relation itself (e.g. a wedding).
    pub milestones: Vec<Milestone>,
}

impl Relation {
    /// Creates a relation with no milestones.
    pub fn new(left_person_id: EntityId, right_person_id: EntityId, kind: RelationType) -> Self {
        Self {
            left_person_id,
            right_person_id,
            kind,
            milestones: Vec::new(),
        }
    }
}

/// The root aggregate: every person in the household plus their relations.
///
/// Members are owned exclusively; plan execution mutates them in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Family {
    /// The household's members.
    pub members: Vec<Person>,

    /// Links between members.
    pub relations: Vec<Relation>,
}

impl Family {
    /// Creates an empty family.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a member to the family.
    pub fn add_member(&mut self, person: Person) {
        self.members.push(person);
    }

    /// Looks up a member by id.
    pub fn member(&self, id: &EntityId) -> Option<&Person> {
        self.members.iter().find(|person| &person.id == id)
    }

    /// Looks up a member by id for mutation.
    pub fn member_mut(&mut self, id: &EntityId) -> Option<&mut Person> {
        self.members.iter_mut().find(|person| &person.id == id)
    }
}
