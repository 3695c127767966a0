use super::*;
use crate::net::types::{Gender, NewCustomer, RiskAppetite};
use time::macros::date;

const TODAY: Date = date!(2026 - 10 - 18);

fn customer() -> Customer {
    Customer {
        id: 42,
        profile: NewCustomer {
            name: "Asha Rao".to_owned(),
            email: "asha@example.in".to_owned(),
            date_of_birth: Some("1990-10-19".to_owned()),
            age: Some(99),
            gender: Some(Gender::Female),
            annual_income: Some(1_800_000.0),
            family_size: Some(4),
            dependents: Some(2),
            existing_insurance: Some(serde_json::json!({ "total_coverage": 5_000_000 })),
            risk_appetite: Some(RiskAppetite::High),
            ..NewCustomer::default()
        },
        created_at: None,
    }
}

#[test]
fn request_derives_age_from_birth_date_over_stored_age() {
    let request = needs_analysis_request(&customer(), TODAY).unwrap();
    assert_eq!(request.customer_id, 42);
    // Birthday is tomorrow, so 35 completed years.
    assert_eq!(request.age, 35);
    assert_eq!(request.gender, Gender::Female);
    assert_eq!(request.calculation_type, "comprehensive");
    assert_eq!(request.family_size, 4);
    assert_eq!(request.dependents, 2);
    assert!((request.existing_coverage - 5_000_000.0).abs() < f64::EPSILON);
    assert!((request.inflation_rate - 6.0).abs() < f64::EPSILON);
    assert!((request.return_rate - 8.0).abs() < f64::EPSILON);
}

#[test]
fn request_uses_stored_age_without_birth_date() {
    let mut c = customer();
    c.profile.date_of_birth = None;
    c.profile.age = Some(44);
    assert_eq!(needs_analysis_request(&c, TODAY).unwrap().age, 44);
}

#[test]
fn request_reports_missing_profile_fields() {
    let mut c = customer();
    c.profile.date_of_birth = None;
    c.profile.age = None;
    let err = needs_analysis_request(&c, TODAY).unwrap_err();
    assert_eq!(err, AnalysisError::IncompleteProfile("date of birth"));
    assert_eq!(err.user_message(), "Add the customer's date of birth before running a needs analysis.");

    let mut c = customer();
    c.profile.annual_income = None;
    assert_eq!(needs_analysis_request(&c, TODAY), Err(AnalysisError::IncompleteProfile("annual income")));
}

#[test]
fn request_refuses_to_guess_missing_gender() {
    let mut c = customer();
    c.profile.gender = None;
    let err = needs_analysis_request(&c, TODAY).unwrap_err();
    assert_eq!(err, AnalysisError::IncompleteProfile("gender"));
    assert_eq!(err.user_message(), "Add the customer's gender before running a needs analysis.");
}

#[test]
fn existing_cover_defaults_to_zero() {
    let mut c = customer();
    c.profile.existing_insurance = Some(serde_json::json!({ "policies": 2 }));
    assert!(existing_cover(&c).abs() < f64::EPSILON);
    c.profile.existing_insurance = None;
    assert!(existing_cover(&c).abs() < f64::EPSILON);
}

#[test]
fn coverage_rows_show_placeholder_for_missing_figures() {
    let analysis = NeedsAnalysis {
        total_insurance_needs: Some(25_000_000.0),
        emergency_fund_needs: None,
        ..NeedsAnalysis::default()
    };
    let rows = coverage_rows(&analysis);
    assert_eq!(rows.len(), 9);
    assert!(rows.contains(&("Total insurance needs", "₹2,50,00,000".to_owned())));
    assert!(rows.contains(&("Emergency fund", MISSING.to_owned())));
}

#[test]
fn customer_facts_show_derived_age() {
    let facts = customer_facts(&customer(), TODAY);
    assert_eq!(facts[0], ("Age", "35".to_owned()));
    assert_eq!(facts[4], ("Risk appetite", "High".to_owned()));
}

#[test]
fn share_content_summarises_cover() {
    let analysis = NeedsAnalysis {
        total_insurance_needs: Some(25_000_000.0),
        additional_coverage_needed: Some(4_500_000.0),
        ..NeedsAnalysis::default()
    };
    let content = share_content("Asha Rao", &analysis, None);
    assert_eq!(content.title, "Insurance needs analysis: Asha Rao");
    assert_eq!(
        content.text,
        "Asha Rao needs total life cover of ₹2.5 Cr. Additional cover required: ₹45.0 L."
    );
    assert_eq!(share_content("  ", &analysis, None).title, "Insurance needs analysis: Customer");
}

#[test]
fn api_errors_pass_through_user_message() {
    let err = AnalysisError::from(ApiError::Status { status: 500, detail: Some("boom".to_owned()) });
    assert_eq!(err.user_message(), "boom");
}
