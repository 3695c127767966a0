use super::*;
use crate::net::types::{AgeGroupSumAssured, NamedCount};

#[test]
fn headline_cards_format_backend_figures() {
    let metrics = DashboardMetrics {
        total_customers: 128,
        total_recommendations: 342,
        average_premium: 24_500.0,
        conversion_rate: 68.25,
        top_products: vec![NamedCount { name: "Click 2 Protect".to_owned(), count: 40 }],
        ..DashboardMetrics::default()
    };
    let cards = headline_cards(&metrics);
    assert_eq!(cards[0], ("Total customers", "128".to_owned()));
    assert_eq!(cards[1], ("Recommendations", "342".to_owned()));
    assert_eq!(cards[2], ("Average premium", "₹24,500".to_owned()));
    assert_eq!(cards[3].0, "Conversion rate");
}

#[test]
fn bar_width_scales_against_max() {
    assert!((bar_width_percent(5, 10) - 50.0).abs() < f64::EPSILON);
    assert!((bar_width_percent(10, 10) - 100.0).abs() < f64::EPSILON);
    assert!(bar_width_percent(3, 0).abs() < f64::EPSILON);
}

#[test]
fn count_rows_scale_to_largest() {
    let rows = count_rows([("18-25", 4_u64), ("26-35", 8), ("36-45", 0)].into_iter());
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].label, "18-25");
    assert!((rows[0].width_percent - 50.0).abs() < f64::EPSILON);
    assert!((rows[1].width_percent - 100.0).abs() < f64::EPSILON);
    assert!(rows[2].width_percent.abs() < f64::EPSILON);
    assert!(count_rows(Vec::<(&str, u64)>::new()).is_empty());
}

#[test]
fn group_label_humanizes_and_names_missing_groups() {
    assert_eq!(group_label(Some("medium")), "Medium");
    assert_eq!(group_label(Some("female")), "Female");
    assert_eq!(group_label(None), "Not recorded");
    assert_eq!(group_label(Some(" ")), "Not recorded");
}

#[test]
fn count_rows_accept_owned_labels() {
    let rows = count_rows(vec![(group_label(Some("low")), 3), (group_label(None), 6)]);
    assert_eq!(rows[0].label, "Low");
    assert_eq!(rows[1].label, "Not recorded");
    assert!((rows[0].width_percent - 50.0).abs() < f64::EPSILON);
}

#[test]
fn sum_assured_by_age_formats_compact_amounts() {
    let insights = CustomerInsights {
        avg_sum_assured_by_age: vec![
            AgeGroupSumAssured { age_group: "25-34".to_owned(), avg_sum_assured: 12_500_000.0 },
            AgeGroupSumAssured { age_group: "35-44".to_owned(), avg_sum_assured: 7_500_000.0 },
        ],
        ..CustomerInsights::default()
    };
    assert_eq!(
        sum_assured_by_age(&insights),
        vec![("25-34".to_owned(), "₹1.3 Cr".to_owned()), ("35-44".to_owned(), "₹75.0 L".to_owned())]
    );
}
