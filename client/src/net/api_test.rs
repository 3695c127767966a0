use super::*;

fn base() -> &'static str {
    api_base_url()
}

#[test]
fn customer_endpoint_formats_expected_path() {
    assert_eq!(customer_endpoint(42), format!("{}/customers/42", base()));
}

#[test]
fn products_endpoint_without_filters_has_no_query() {
    assert_eq!(products_endpoint(&ProductFilter::default()), format!("{}/products/", base()));
}

#[test]
fn products_endpoint_encodes_filters() {
    let filter = ProductFilter { product_type: Some("term life".to_owned()), insurer_id: Some(3) };
    assert_eq!(
        products_endpoint(&filter),
        format!("{}/products/?product_type=term%20life&insurer_id=3", base())
    );
}

#[test]
fn products_endpoint_ignores_blank_type() {
    let filter = ProductFilter { product_type: Some(String::new()), insurer_id: None };
    assert_eq!(products_endpoint(&filter), format!("{}/products/", base()));
}

#[test]
fn recommendation_and_analysis_endpoints() {
    assert_eq!(
        generate_recommendations_endpoint(9),
        format!("{}/recommendations/generate/?customer_id=9", base())
    );
    assert_eq!(
        enhanced_needs_analysis_endpoint(9),
        format!("{}/needs-analysis/9/enhanced/", base())
    );
}

#[test]
fn stored_recommendations_and_market_history_endpoints() {
    assert_eq!(stored_recommendations_endpoint(9), format!("{}/recommendations/9", base()));
    assert_eq!(insurer_market_history_endpoint(4), format!("{}/market-data/insurer/4/", base()));
}

#[test]
fn customer_update_shares_customer_path() {
    assert_eq!(customer_endpoint(12), format!("{}/customers/12", base()));
    let body = serde_json::to_value(CustomerUpdate { name: Some("Asha".to_owned()), ..CustomerUpdate::default() })
        .unwrap();
    assert_eq!(body["name"], "Asha");
    assert!(body.get("email").is_none());
}

#[test]
fn report_endpoint_per_kind() {
    assert_eq!(
        report_endpoint(ReportKind::NeedsAnalysis, 5),
        format!("{}/pdf/needs-analysis/5", base())
    );
    assert_eq!(
        report_endpoint(ReportKind::Comprehensive, 5),
        format!("{}/pdf/comprehensive-report/5", base())
    );
}

#[test]
fn dashboard_endpoint_uses_period_query() {
    assert_eq!(
        dashboard_endpoint(ReportPeriod::Quarter),
        format!("{}/analytics/dashboard/?period=90d", base())
    );
    assert_eq!(customer_insights_endpoint(), format!("{}/analytics/customer-insights/", base()));
}

// =============================================================
// Error bodies
// =============================================================

#[test]
fn detail_from_body_reads_string_detail() {
    assert_eq!(
        detail_from_body(r#"{"detail":"Customer not found"}"#),
        Some("Customer not found".to_owned())
    );
}

#[test]
fn detail_from_body_joins_validation_messages() {
    let body = r#"{"detail":[{"loc":["body","email"],"msg":"value is not a valid email address"},{"msg":"field required"}]}"#;
    assert_eq!(
        detail_from_body(body),
        Some("value is not a valid email address; field required".to_owned())
    );
}

#[test]
fn detail_from_body_ignores_non_json_and_blank() {
    assert_eq!(detail_from_body("Internal Server Error"), None);
    assert_eq!(detail_from_body(r#"{"detail":"  "}"#), None);
    assert_eq!(detail_from_body(r#"{"error":"x"}"#), None);
}

#[test]
fn user_message_prefers_server_detail() {
    let err = ApiError::Status { status: 500, detail: Some("duplicate email".to_owned()) };
    assert_eq!(err.user_message(), "duplicate email");
    let err = ApiError::Status { status: 502, detail: None };
    assert_eq!(err.user_message(), "The server could not complete the request (502).");
}

#[test]
fn not_found_is_only_404_status() {
    assert!(ApiError::Status { status: 404, detail: None }.is_not_found());
    assert!(!ApiError::Status { status: 500, detail: None }.is_not_found());
    assert!(!ApiError::Network("offline".to_owned()).is_not_found());
}
