//! Integration tests for plan execution against a family.
//!
//! These tests drive whole plans through a populated family and verify the
//! resulting state, the aggregation results derived from it, and the wire
//! shape the external simulation engine consumes.

use chrono::{DateTime, TimeZone, Utc};
use common::EntityId;
use domain::{
    Action, ActionError, Career, Currency, DomainError, Family, Financial, LiquidityTier,
    Milestone, Person, Plan, RateTable, Relation, RelationType, Simulation, Step, WealthObject,
};

fn timestamp(year: i32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0).unwrap()
}

/// Helper to build a two-member family with careers and base expenses.
fn sample_family() -> (Family, EntityId, EntityId) {
    let mut alice = Person::with_age("Alice", 30);
    alice.careers.push(Career::with_salary(
        "Engineer",
        85_000.0,
        Currency::THB,
        timestamp(2020),
        timestamp(2060),
    ));
    alice.financials.push(Financial::expense(
        "Living costs",
        30_000.0,
        Currency::THB,
        timestamp(2020),
        timestamp(2080),
    ));
    alice.milestones.push(Milestone::by_amount(
        "Financial independence",
        25_000_000.0,
    ));

    let mut bob = Person::with_age("Bob", 32);
    bob.careers.push(Career::with_salary(
        "Teacher",
        45_000.0,
        Currency::THB,
        timestamp(2018),
        timestamp(2058),
    ));

    let alice_id = alice.id.clone();
    let bob_id = bob.id.clone();

    let mut family = Family::new();
    let mut spouses = Relation::new(alice_id.clone(), bob_id.clone(), RelationType::Spouse);
    spouses
        .milestones
        .push(Milestone::by_date("Wedding", timestamp(2027)));
    family.add_member(alice);
    family.add_member(bob);
    family.relations.push(spouses);

    (family, alice_id, bob_id)
}

/// Helper to build a condo that nets positive income and carries a purchase
/// transaction.
fn condo() -> WealthObject {
    let purchase = Financial::expense(
        "Condo purchase",
        3_000_000.0,
        Currency::THB,
        timestamp(2026),
        timestamp(2026),
    );
    let mut object = WealthObject::with_transaction(
        "Condo",
        3_000_000.0,
        3_500_000.0,
        LiquidityTier::Illiquid,
        timestamp(2026),
        timestamp(2060),
        purchase,
    );
    object.financials.push(Financial::income(
        "Rental income",
        25_000.0,
        Currency::THB,
        timestamp(2026),
        timestamp(2060),
    ));
    object.financials.push(Financial::expense(
        "Maintenance",
        5_000.0,
        Currency::THB,
        timestamp(2026),
        timestamp(2060),
    ));
    object
}

mod plan_execution {
    use super::*;

    #[test]
    fn career_change_and_condo_purchase_lifecycle() {
        let (mut family, alice_id, bob_id) = sample_family();
        let engineer_id = family.member(&alice_id).unwrap().careers[0].id.clone();
        let teacher_id = family.member(&bob_id).unwrap().careers[0].id.clone();

        let founder = Career::with_salary(
            "Founder",
            40_000.0,
            Currency::THB,
            timestamp(2026),
            timestamp(2060),
        );
        let founder_id = founder.id.clone();
        let condo = condo();
        let condo_id = condo.id.clone();
        let purchase_id = condo.financial_transaction.as_ref().unwrap().id.clone();

        let mut plan = Plan::new("Change careers, buy the condo");
        plan.steps.push(Step::new(
            timestamp(2026),
            alice_id.clone(),
            Action::change_career(engineer_id.clone(), founder),
        ));
        plan.steps.push(Step::new(
            timestamp(2026),
            alice_id.clone(),
            Action::buy_wealth_object(condo),
        ));
        plan.steps.push(Step::new(
            timestamp(2027),
            bob_id.clone(),
            Action::end_career(teacher_id.clone()),
        ));

        plan.execute(&mut family).unwrap();

        // Alice changed careers: the old record stays, stamped with the step
        // time, and the new one is appended after it.
        let alice = family.member(&alice_id).unwrap();
        assert_eq!(alice.careers.len(), 2);
        assert_eq!(alice.career(&engineer_id).unwrap().end_date, timestamp(2026));
        assert!(alice.career(&founder_id).is_some());

        // The purchase flow landed on Alice, and the condo is in her wealth.
        assert!(alice.financials.iter().any(|f| f.id == purchase_id));
        assert_eq!(alice.net_income(), -3_030_000.0);
        let condo = alice.wealth.object(&condo_id).unwrap();
        assert!(condo.is_asset());
        assert_eq!(condo.net_income(), 20_000.0);

        // Bob's career ended at the later step's time.
        let bob = family.member(&bob_id).unwrap();
        assert_eq!(bob.career(&teacher_id).unwrap().end_date, timestamp(2027));
    }

    #[test]
    fn selling_records_the_attached_transaction_as_proceeds() {
        let (mut family, alice_id, _) = sample_family();
        let condo = condo();
        let condo_id = condo.id.clone();
        let purchase_id = condo.financial_transaction.as_ref().unwrap().id.clone();

        let mut buy_plan = Plan::new("Buy");
        buy_plan.steps.push(Step::new(
            timestamp(2026),
            alice_id.clone(),
            Action::buy_wealth_object(condo),
        ));
        buy_plan.execute(&mut family).unwrap();

        let mut sell_plan = Plan::new("Sell");
        sell_plan.steps.push(Step::new(
            timestamp(2032),
            alice_id.clone(),
            Action::sell_wealth_object(condo_id.clone()),
        ));
        sell_plan.execute(&mut family).unwrap();

        let alice = family.member(&alice_id).unwrap();
        assert!(alice.wealth.object(&condo_id).is_none());

        // Buying and selling each record the object's one-time transaction.
        let recorded = alice
            .financials
            .iter()
            .filter(|f| f.id == purchase_id)
            .count();
        assert_eq!(recorded, 2);
    }

    #[test]
    fn steps_apply_in_array_order_regardless_of_time() {
        let (mut family, alice_id, _) = sample_family();
        let engineer_id = family.member(&alice_id).unwrap().careers[0].id.clone();

        let mut plan = Plan::new("Later step first");
        plan.steps.push(Step::new(
            timestamp(2030),
            alice_id.clone(),
            Action::end_career(engineer_id.clone()),
        ));
        plan.steps.push(Step::new(
            timestamp(2019),
            alice_id.clone(),
            Action::end_career(engineer_id.clone()),
        ));

        plan.execute(&mut family).unwrap();

        // The second array entry ran last, so its earlier time wins.
        let alice = family.member(&alice_id).unwrap();
        assert_eq!(alice.career(&engineer_id).unwrap().end_date, timestamp(2019));
    }

    #[test]
    fn a_simulation_holds_plans_for_one_family() {
        let (mut family, alice_id, _) = sample_family();
        let engineer_id = family.member(&alice_id).unwrap().careers[0].id.clone();

        let mut retire = Plan::new("Retire at 64");
        retire.steps.push(Step::new(
            timestamp(2060),
            alice_id.clone(),
            Action::end_career(engineer_id),
        ));
        let simulation = Simulation::new(vec![Plan::new("Do nothing"), retire]);

        for plan in &simulation.plans {
            plan.execute(&mut family).unwrap();
        }

        let alice = family.member(&alice_id).unwrap();
        assert_eq!(alice.careers[0].end_date, timestamp(2060));
    }
}

mod error_handling {
    use super::*;

    #[test]
    fn unknown_person_aborts_without_side_effects() {
        let (mut family, alice_id, _) = sample_family();
        let before = family.clone();

        let mut plan = Plan::new("Targets a stranger");
        plan.steps.push(Step::new(
            timestamp(2026),
            EntityId::new("stranger"),
            Action::new_career(Career::new("Ghost job", timestamp(2026), timestamp(2030))),
        ));

        let result = plan.execute(&mut family);

        assert!(matches!(
            result,
            Err(DomainError::PersonNotFound { .. })
        ));
        assert_eq!(family, before);
        assert!(family.member(&alice_id).is_some());
    }

    #[test]
    fn failing_middle_step_keeps_earlier_mutations() {
        let (mut family, alice_id, _) = sample_family();
        let kept = Career::new("Kept", timestamp(2026), timestamp(2030));
        let kept_id = kept.id.clone();
        let never = Career::new("Never added", timestamp(2027), timestamp(2030));
        let never_id = never.id.clone();

        let mut plan = Plan::new("Fails in the middle");
        plan.steps.push(Step::new(
            timestamp(2026),
            alice_id.clone(),
            Action::new_career(kept),
        ));
        plan.steps.push(Step::new(
            timestamp(2026),
            alice_id.clone(),
            Action::sell_wealth_object(EntityId::new("missing")),
        ));
        plan.steps.push(Step::new(
            timestamp(2027),
            alice_id.clone(),
            Action::new_career(never),
        ));

        let result = plan.execute(&mut family);

        assert!(matches!(
            result,
            Err(DomainError::Action(ActionError::WealthObjectNotFound { .. }))
        ));
        let alice = family.member(&alice_id).unwrap();
        assert!(alice.career(&kept_id).is_some());
        assert!(alice.career(&never_id).is_none());
    }

    #[test]
    fn change_career_short_circuit_leaves_new_career_out() {
        let (mut family, alice_id, _) = sample_family();
        let replacement = Career::new("Replacement", timestamp(2026), timestamp(2060));
        let replacement_id = replacement.id.clone();

        let mut plan = Plan::new("Changes a career that is not there");
        plan.steps.push(Step::new(
            timestamp(2026),
            alice_id.clone(),
            Action::change_career(EntityId::new("missing"), replacement),
        ));

        let result = plan.execute(&mut family);

        assert!(matches!(
            result,
            Err(DomainError::Action(ActionError::CareerNotFound { .. }))
        ));
        assert!(family
            .member(&alice_id)
            .unwrap()
            .career(&replacement_id)
            .is_none());
    }

    #[test]
    fn error_messages_surface_verbatim() {
        let (mut family, alice_id, _) = sample_family();

        let step = Step::new(
            timestamp(2026),
            alice_id,
            Action::sell_wealth_object(EntityId::new("wo-404")),
        );
        let error = step.execute(&mut family).unwrap_err();
        assert_eq!(error.to_string(), "Wealth object not found: wo-404");

        let step = Step::new(
            timestamp(2026),
            EntityId::new("p-404"),
            Action::end_career(EntityId::new("c-404")),
        );
        let error = step.execute(&mut family).unwrap_err();
        assert_eq!(error.to_string(), "Person not found: p-404");
    }
}

mod aggregation {
    use super::*;

    #[test]
    fn net_worth_and_liquidity_follow_tier_thresholds() {
        let (mut family, alice_id, _) = sample_family();

        let mut savings = WealthObject::new(
            "Savings",
            100_000.0,
            100_000.0,
            LiquidityTier::Cash,
            timestamp(2020),
            timestamp(2080),
        );
        savings.financials.push(Financial::income(
            "Interest",
            100.0,
            Currency::THB,
            timestamp(2020),
            timestamp(2080),
        ));

        let mut plan = Plan::new("Build a portfolio");
        plan.steps.push(Step::new(
            timestamp(2026),
            alice_id.clone(),
            Action::buy_wealth_object(savings),
        ));
        plan.steps.push(Step::new(
            timestamp(2026),
            alice_id.clone(),
            Action::buy_wealth_object(condo()),
        ));
        plan.execute(&mut family).unwrap();

        let wealth = &family.member(&alice_id).unwrap().wealth;
        assert_eq!(wealth.net_worth(), 20_100.0);
        assert_eq!(wealth.liquidity_value(LiquidityTier::Cash), 100.0);
        assert_eq!(wealth.liquidity_value(LiquidityTier::VeryLongTerm), 100.0);
        assert_eq!(wealth.liquidity_value(LiquidityTier::Illiquid), 20_100.0);
    }

    #[test]
    fn exchange_rates_hold_their_algebra() {
        let table = RateTable::default();

        for currency in Currency::all() {
            assert_eq!(table.rate(currency, currency).unwrap(), 1.0);
        }

        let thb_usd = table.rate(Currency::THB, Currency::USD).unwrap();
        let usd_thb = table.rate(Currency::USD, Currency::THB).unwrap();
        assert!((thb_usd * usd_thb - 1.0).abs() < 1e-12);
    }
}

mod serialization {
    use super::*;

    #[test]
    fn family_round_trips_through_the_engine_wire_shape() {
        let (mut family, alice_id, _) = sample_family();
        let mut plan = Plan::new("Buy the condo");
        plan.steps.push(Step::new(
            timestamp(2026),
            alice_id,
            Action::buy_wealth_object(condo()),
        ));
        plan.execute(&mut family).unwrap();

        let value = serde_json::to_value(&family).unwrap();

        // Field names are camelCase all the way down.
        assert!(value.pointer("/members/0/startDate").is_some());
        assert!(value.pointer("/members/0/wealth/wealthObjects/0/financialTransaction").is_some());
        assert_eq!(
            value
                .pointer("/members/0/wealth/wealthObjects/0/liquidityTier")
                .and_then(|tier| tier.as_u64()),
            Some(99_999)
        );
        assert_eq!(
            value
                .pointer("/relations/0/kind")
                .and_then(|kind| kind.as_str()),
            Some("spouse")
        );
        assert_eq!(
            value
                .pointer("/members/0/milestones/0/achievingMethod/method")
                .and_then(|method| method.as_str()),
            Some("byAmount")
        );

        let restored: Family = serde_json::from_value(value).unwrap();
        assert_eq!(restored, family);
    }

    #[test]
    fn plans_round_trip_with_typed_actions() {
        let (_, alice_id, _) = sample_family();
        let mut plan = Plan::new("Typed actions");
        plan.steps.push(Step::new(
            timestamp(2026),
            alice_id.clone(),
            Action::buy_wealth_object(condo()),
        ));
        plan.steps.push(Step::new(
            timestamp(2030),
            alice_id,
            Action::sell_wealth_object(EntityId::new("wo-1")),
        ));

        let json = serde_json::to_string(&plan).unwrap();
        assert!(json.contains("\"type\":\"BuyWealthObject\""));
        assert!(json.contains("\"type\":\"SellWealthObject\""));

        let restored: Plan = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, plan);
    }
}
