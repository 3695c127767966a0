use super::*;

#[test]
fn format_inr_groups_indian_style() {
    assert_eq!(format_inr(0.0), "₹0");
    assert_eq!(format_inr(999.0), "₹999");
    assert_eq!(format_inr(1_000.0), "₹1,000");
    assert_eq!(format_inr(123_456.0), "₹1,23,456");
    assert_eq!(format_inr(1_234_567.0), "₹12,34,567");
    assert_eq!(format_inr(123_456_789.0), "₹12,34,56,789");
}

#[test]
fn format_inr_rounds_and_signs() {
    assert_eq!(format_inr(14_499.6), "₹14,500");
    assert_eq!(format_inr(-2_500.0), "-₹2,500");
    assert_eq!(format_inr(f64::NAN), MISSING);
}

#[test]
fn format_inr_compact_uses_lakh_and_crore() {
    assert_eq!(format_inr_compact(25_000_000.0), "₹2.5 Cr");
    assert_eq!(format_inr_compact(12_000_000.0), "₹1.2 Cr");
    assert_eq!(format_inr_compact(4_500_000.0), "₹45.0 L");
    assert_eq!(format_inr_compact(99_999.0), "₹99,999");
    assert_eq!(format_inr_compact(-4_500_000.0), "-₹45.0 L");
}

#[test]
fn format_inr_compact_picks_unit_after_rounding() {
    assert_eq!(format_inr_compact(99_999.4), "₹99,999");
    assert_eq!(format_inr_compact(99_999.6), "₹1.0 L");
    assert_eq!(format_inr_compact(9_940_000.0), "₹99.4 L");
    assert_eq!(format_inr_compact(9_999_999.9), "₹1.0 Cr");
    assert_eq!(format_inr_compact(9_996_000.0), "₹1.0 Cr");
}

#[test]
fn optional_formatters_use_placeholder() {
    assert_eq!(format_optional_inr(None), MISSING);
    assert_eq!(format_optional_inr(Some(1500.0)), "₹1,500");
    assert_eq!(format_optional_percent(None, 1), MISSING);
    assert_eq!(format_optional_percent(Some(98.64), 1), "98.6%");
}

#[test]
fn format_percent_fixed_decimals() {
    assert_eq!(format_percent(62.5, 1), "62.5%");
    assert_eq!(format_percent(62.4, 0), "62%");
    assert_eq!(format_percent(7.0, 2), "7.00%");
}

#[test]
fn format_trend_signs_positive_values() {
    assert_eq!(format_trend(Some(1.2)), "+1.2%");
    assert_eq!(format_trend(Some(-0.2)), "-0.2%");
    assert_eq!(format_trend(Some(0.0)), "0.0%");
    assert_eq!(format_trend(None), MISSING);
}

#[test]
fn format_rating_five_point_scale() {
    assert_eq!(format_rating(Some(4.5)), "4.5 / 5");
    assert_eq!(format_rating(None), MISSING);
}

#[test]
fn humanize_code_title_cases_words() {
    assert_eq!(humanize_code("term_life"), "Term Life");
    assert_eq!(humanize_code("child_plans"), "Child Plans");
    assert_eq!(humanize_code("ulip"), "ULIP");
    assert_eq!(humanize_code("CRITICAL_ILLNESS"), "Critical Illness");
    assert_eq!(humanize_code(""), "");
}

#[test]
fn format_iso_date_keeps_calendar_part() {
    assert_eq!(format_iso_date(Some("2026-10-01T10:00:00Z")), "2026-10-01");
    assert_eq!(format_iso_date(Some("2026-10-01 10:00:00")), "2026-10-01");
    assert_eq!(format_iso_date(Some("2026-10-01")), "2026-10-01");
    assert_eq!(format_iso_date(Some("  ")), MISSING);
    assert_eq!(format_iso_date(None), MISSING);
}
