use super::*;

#[test]
fn age_range_handles_open_ends() {
    let mut p = Product { min_age: Some(18), max_age: Some(65), ..Product::default() };
    assert_eq!(age_range(&p), "18–65");
    p.max_age = None;
    assert_eq!(age_range(&p), "18+");
    p.min_age = None;
    assert_eq!(age_range(&p), MISSING);
}

#[test]
fn sum_assured_range_uses_compact_rupees() {
    let p = Product { min_sum_assured: Some(2_500_000.0), max_sum_assured: Some(100_000_000.0), ..Product::default() };
    assert_eq!(sum_assured_range(&p), "₹25.0 L – ₹10.0 Cr");
    let p = Product { min_sum_assured: Some(500_000.0), ..Product::default() };
    assert_eq!(sum_assured_range(&p), "from ₹5.0 L");
}

#[test]
fn feature_summary_takes_first_three() {
    let row = ComparisonRow {
        features: vec!["Return of premium".into(), "Terminal illness".into(), "Waiver".into(), "Riders".into()],
        ..ComparisonRow::default()
    };
    assert_eq!(feature_summary(&row), "Return of premium, Terminal illness, Waiver");
    assert_eq!(feature_summary(&ComparisonRow::default()), MISSING);
}

#[test]
fn summary_lines_follow_backend_summary() {
    let mut result = ComparisonResponse::default();
    result.summary.total_products = 3;
    result.summary.min_premium = Some(9_800.0);
    result.summary.best_value_product = Some("Click 2 Protect".to_owned());
    let lines = summary_lines(&result);
    assert_eq!(lines[0], ("Products compared", "3".to_owned()));
    assert_eq!(lines[2], ("Lowest premium", "₹9,800".to_owned()));
    assert_eq!(lines[4], ("Best value", "Click 2 Protect".to_owned()));
    assert_eq!(lines[5], ("Lowest cost", MISSING.to_owned()));
}

#[test]
fn score_and_product_types() {
    assert_eq!(format_score(87.456), "87.5");
    assert_eq!(format_score(f64::NAN), MISSING);
    assert!(PRODUCT_TYPES.contains(&"term_life"));
    assert_eq!(humanize_code(PRODUCT_TYPES[4]), "ULIP");
}
