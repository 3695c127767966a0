use super::*;

fn selected(ids: &[RecordId]) -> ComparisonSelection {
    let mut selection = ComparisonSelection::default();
    for id in ids {
        assert!(selection.toggle(*id));
    }
    selection
}

// =============================================================
// ComparisonSelection
// =============================================================

#[test]
fn toggle_adds_then_removes() {
    let mut selection = ComparisonSelection::default();
    assert!(selection.toggle(3));
    assert!(selection.contains(3));
    assert!(selection.toggle(3));
    assert!(selection.is_empty());
}

#[test]
fn toggle_refuses_past_cap_but_allows_untick() {
    let mut selection = selected(&[1, 2, 3, 4]);
    assert!(selection.is_full());
    assert!(!selection.toggle(5));
    assert_eq!(selection.ids(), &[1, 2, 3, 4]);
    assert!(selection.toggle(2));
    assert!(selection.toggle(5));
    assert_eq!(selection.ids(), &[1, 3, 4, 5]);
}

#[test]
fn compare_needs_two_products() {
    let mut selection = ComparisonSelection::default();
    assert!(!selection.can_compare());
    assert_eq!(selection.blocked_reason().as_deref(), Some("Select 2 to 4 products to compare."));
    selection.toggle(1);
    assert!(!selection.can_compare());
    assert_eq!(selection.blocked_reason().as_deref(), Some("Select 1 more product to compare."));
    selection.toggle(2);
    assert!(selection.can_compare());
    assert_eq!(selection.blocked_reason(), None);
}

#[test]
fn clear_empties_selection() {
    let mut selection = selected(&[1, 2]);
    selection.clear();
    assert_eq!(selection.len(), 0);
}

// =============================================================
// ComparisonSettings
// =============================================================

#[test]
fn default_settings_build_request() {
    let request = ComparisonSettings::default().build_request(&selected(&[10, 11])).unwrap();
    assert_eq!(request.product_ids, vec![10, 11]);
    assert_eq!(request.customer_profile.age, 30);
    assert_eq!(request.customer_profile.gender, Gender::Male);
    assert_eq!(request.customer_profile.annual_income, 1_000_000.0);
    assert_eq!(request.customer_profile.risk_appetite, RiskAppetite::Medium);
    assert_eq!(request.sum_assured, 10_000_000.0);
    assert_eq!(request.policy_term, 20);
    assert_eq!(request.premium_frequency, "yearly");
}

#[test]
fn build_request_serializes_backend_shape() {
    let settings = ComparisonSettings {
        gender: "female".to_owned(),
        risk_appetite: "low".to_owned(),
        premium_frequency: "monthly".to_owned(),
        ..ComparisonSettings::default()
    };
    let request = settings.build_request(&selected(&[1, 2])).unwrap();
    let json = serde_json::to_value(&request).unwrap();
    assert_eq!(json["product_ids"], serde_json::json!([1, 2]));
    assert_eq!(json["customer_profile"]["gender"], "female");
    assert_eq!(json["customer_profile"]["risk_appetite"], "low");
    assert_eq!(json["premium_frequency"], "monthly");
}

#[test]
fn build_request_rejects_small_selection_first() {
    let settings = ComparisonSettings { age: "x".to_owned(), ..ComparisonSettings::default() };
    assert_eq!(settings.build_request(&selected(&[1])), Err(CompareError::TooFew));
}

#[test]
fn build_request_names_bad_field() {
    let settings = ComparisonSettings { sum_assured: "0".to_owned(), ..ComparisonSettings::default() };
    let err = settings.build_request(&selected(&[1, 2])).unwrap_err();
    assert_eq!(err, CompareError::InvalidSetting { field: "Sum assured" });
    assert_eq!(err.to_string(), "Sum assured must be a positive number.");
}

#[test]
fn unknown_frequency_falls_back_to_yearly() {
    let settings = ComparisonSettings { premium_frequency: "weekly".to_owned(), ..ComparisonSettings::default() };
    let request = settings.build_request(&selected(&[1, 2])).unwrap();
    assert_eq!(request.premium_frequency, "yearly");
    assert_eq!(frequency_label("half_yearly"), "Half-yearly");
}
