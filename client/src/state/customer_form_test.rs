use super::*;
use time::macros::date;

const TODAY: Date = date!(2026 - 10 - 18);

fn filled() -> CustomerDraft {
    CustomerDraft {
        name: "  Asha Rao ".to_owned(),
        email: "asha@example.in".to_owned(),
        phone: "98765 43210".to_owned(),
        date_of_birth: "1990-04-12".to_owned(),
        gender: "female".to_owned(),
        occupation: "Engineer".to_owned(),
        annual_income: "18,00,000".to_owned(),
        family_size: "4".to_owned(),
        dependents: "2".to_owned(),
        existing_cover: "5000000".to_owned(),
        health_conditions: String::new(),
        lifestyle_factors: "non_smoker, gym".to_owned(),
        risk_appetite: "high".to_owned(),
        investment_goals: "retirement,child education".to_owned(),
    }
}

#[test]
fn default_draft_preselects_gender_and_risk() {
    let draft = CustomerDraft::default();
    assert_eq!(draft.gender, "male");
    assert_eq!(draft.risk_appetite, "medium");
}

#[test]
fn validate_builds_payload_from_filled_form() {
    let customer = filled().validate(TODAY).unwrap();
    assert_eq!(customer.name, "Asha Rao");
    assert_eq!(customer.phone.as_deref(), Some("98765 43210"));
    assert_eq!(customer.date_of_birth.as_deref(), Some("1990-04-12"));
    assert_eq!(customer.age, Some(36));
    assert_eq!(customer.gender, Some(Gender::Female));
    assert_eq!(customer.annual_income, Some(1_800_000.0));
    assert_eq!(customer.family_size, Some(4));
    assert_eq!(customer.dependents, Some(2));
    assert_eq!(customer.existing_insurance, Some(serde_json::json!({ "total_coverage": 5_000_000.0 })));
    assert_eq!(customer.health_conditions, None);
    assert_eq!(customer.lifestyle_factors, Some(vec!["non_smoker".to_owned(), "gym".to_owned()]));
    assert_eq!(customer.risk_appetite, Some(RiskAppetite::High));
    assert_eq!(
        customer.investment_goals,
        Some(vec!["retirement".to_owned(), "child education".to_owned()])
    );
}

#[test]
fn validate_minimal_form_leaves_optionals_empty() {
    let draft = CustomerDraft {
        name: "Ravi".to_owned(),
        email: "ravi@example.in".to_owned(),
        ..CustomerDraft::default()
    };
    let customer = draft.validate(TODAY).unwrap();
    assert_eq!(customer.age, None);
    assert_eq!(customer.date_of_birth, None);
    assert_eq!(customer.annual_income, None);
    assert_eq!(customer.existing_insurance, None);
    assert_eq!(customer.gender, Some(Gender::Male));
}

#[test]
fn validate_requires_name_and_email() {
    let draft = CustomerDraft { name: "   ".to_owned(), ..filled() };
    assert_eq!(draft.validate(TODAY), Err(DraftError::MissingName));

    for email in ["", "asha", "@example.in", "asha@example", "asha@.in", "asha@example.", "a@@b.c", "a@b@c.in"] {
        let draft = CustomerDraft { email: email.to_owned(), ..filled() };
        assert_eq!(draft.validate(TODAY), Err(DraftError::InvalidEmail), "{email}");
    }
}

#[test]
fn validate_rejects_bad_or_future_birth_dates() {
    let draft = CustomerDraft { date_of_birth: "12-04-1990".to_owned(), ..filled() };
    assert_eq!(draft.validate(TODAY), Err(DraftError::InvalidBirthDate));

    let draft = CustomerDraft { date_of_birth: "2027-01-01".to_owned(), ..filled() };
    assert_eq!(draft.validate(TODAY), Err(DraftError::FutureBirthDate));
}

#[test]
fn validate_rejects_bad_numbers_with_field_name() {
    let draft = CustomerDraft { annual_income: "-5".to_owned(), ..filled() };
    assert_eq!(draft.validate(TODAY), Err(DraftError::InvalidNumber { field: "Annual income" }));

    let draft = CustomerDraft { dependents: "two".to_owned(), ..filled() };
    let err = draft.validate(TODAY).unwrap_err();
    assert_eq!(err.to_string(), "Dependents must be a non-negative number.");
}

#[test]
fn derived_age_tracks_birth_date_input() {
    let draft = filled();
    assert_eq!(draft.derived_age(TODAY), Some(36));
    let draft = CustomerDraft { date_of_birth: "2030-01-01".to_owned(), ..filled() };
    assert_eq!(draft.derived_age(TODAY), None);
    let draft = CustomerDraft { date_of_birth: String::new(), ..filled() };
    assert_eq!(draft.derived_age(TODAY), None);
}

// =============================================================
// Editing an existing customer
// =============================================================

fn stored() -> Customer {
    Customer { id: 9, profile: filled().validate(TODAY).unwrap(), created_at: None }
}

#[test]
fn from_customer_round_trips_through_the_form() {
    let draft = CustomerDraft::from_customer(&stored());
    assert_eq!(draft.name, "Asha Rao");
    assert_eq!(draft.annual_income, "1800000");
    assert_eq!(draft.existing_cover, "5000000");
    assert_eq!(draft.lifestyle_factors, "non_smoker, gym");
    assert_eq!(draft.health_conditions, "");
    assert_eq!(draft.gender, "female");
    assert_eq!(draft.validate(TODAY).unwrap(), stored().profile);
}

#[test]
fn validate_update_omits_identity_fields() {
    let mut draft = CustomerDraft::from_customer(&stored());
    draft.occupation = "  ".to_owned();
    draft.risk_appetite = "low".to_owned();
    let update = draft.validate_update().unwrap();
    assert_eq!(update.name.as_deref(), Some("Asha Rao"));
    assert_eq!(update.occupation, None);
    assert_eq!(update.risk_appetite, Some(RiskAppetite::Low));

    let json = serde_json::to_value(&update).unwrap();
    assert!(json.get("email").is_none());
    assert!(json.get("date_of_birth").is_none());
    assert_eq!(json["occupation"], serde_json::Value::Null);
    assert_eq!(json["existing_insurance"]["total_coverage"], 5_000_000.0);
}

#[test]
fn validate_update_checks_name_and_numbers() {
    let draft = CustomerDraft { name: String::new(), ..filled() };
    assert_eq!(draft.validate_update(), Err(DraftError::MissingName));
    let draft = CustomerDraft { family_size: "many".to_owned(), ..filled() };
    assert_eq!(draft.validate_update(), Err(DraftError::InvalidNumber { field: "Family size" }));
}

#[test]
fn recorded_cover_reads_numeric_total_only() {
    assert_eq!(recorded_cover(Some(&serde_json::json!({ "total_coverage": 2_500_000 }))), Some(2_500_000.0));
    assert_eq!(recorded_cover(Some(&serde_json::json!({ "total_coverage": "lots" }))), None);
    assert_eq!(recorded_cover(None), None);
}
