//! REST API helpers for communicating with the advisory backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call resolves to `ApiError::Unavailable` since the
//! backend is only contacted from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure collapses into one user-facing taxonomy: the request failed.
//! When the backend sent a FastAPI-style `detail` message it is surfaced
//! verbatim; otherwise a generic message is shown. Nothing is retried here;
//! pages offer a manual retry.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::types::{
    ComparisonRequest, ComparisonResponse, Customer, CustomerInsights, CustomerUpdate, DashboardMetrics,
    EnhancedNeedsAnalysis, Insurer, MarketData, MarketInsights, MarketTrends, NeedsAnalysis, NeedsAnalysisRequest,
    NewCustomer, Product, ProductFilter, Recommendation, RecordId, ReportPeriod,
};
use crate::config::api_base_url;
use crate::util::download::ReportKind;

/// Failure of a single backend request.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, DNS).
    #[error("network error: {0}")]
    Network(String),
    /// The backend answered with a non-2xx status.
    #[error("request failed with status {status}")]
    Status { status: u16, detail: Option<String> },
    /// The response body did not match the expected schema.
    #[error("unexpected response: {0}")]
    Decode(String),
    /// Called outside the browser.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Status { status: 404, .. })
    }

    /// Message shown in error panels; prefers the backend's own detail.
    pub fn user_message(&self) -> String {
        match self {
            Self::Status { detail: Some(detail), .. } => detail.clone(),
            Self::Status { status, detail: None } => format!("The server could not complete the request ({status})."),
            Self::Network(_) => "Could not reach the server. Check your connection and try again.".to_owned(),
            Self::Decode(_) => "The server sent an unexpected response.".to_owned(),
            Self::Unavailable => "This action is only available in the browser.".to_owned(),
        }
    }
}

// =============================================================================
// ENDPOINTS
// =============================================================================

fn endpoint(path: &str) -> String {
    format!("{}{path}", api_base_url())
}

fn customer_endpoint(customer_id: RecordId) -> String {
    endpoint(&format!("/customers/{customer_id}"))
}

fn products_endpoint(filter: &ProductFilter) -> String {
    let mut params = Vec::new();
    if let Some(product_type) = filter.product_type.as_deref().filter(|t| !t.is_empty()) {
        params.push(format!("product_type={}", urlencoding::encode(product_type)));
    }
    if let Some(insurer_id) = filter.insurer_id {
        params.push(format!("insurer_id={insurer_id}"));
    }
    if params.is_empty() {
        endpoint("/products/")
    } else {
        endpoint(&format!("/products/?{}", params.join("&")))
    }
}

fn enhanced_needs_analysis_endpoint(customer_id: RecordId) -> String {
    endpoint(&format!("/needs-analysis/{customer_id}/enhanced/"))
}

fn generate_recommendations_endpoint(customer_id: RecordId) -> String {
    endpoint(&format!("/recommendations/generate/?customer_id={customer_id}"))
}

fn stored_recommendations_endpoint(customer_id: RecordId) -> String {
    endpoint(&format!("/recommendations/{customer_id}"))
}

fn insurer_market_history_endpoint(insurer_id: RecordId) -> String {
    endpoint(&format!("/market-data/insurer/{insurer_id}/"))
}

fn report_endpoint(kind: ReportKind, customer_id: RecordId) -> String {
    match kind {
        ReportKind::NeedsAnalysis => endpoint(&format!("/pdf/needs-analysis/{customer_id}")),
        ReportKind::Comprehensive => endpoint(&format!("/pdf/comprehensive-report/{customer_id}")),
    }
}

fn dashboard_endpoint(period: ReportPeriod) -> String {
    endpoint(&format!("/analytics/dashboard/?period={}", period.as_query()))
}

fn customer_insights_endpoint() -> String {
    endpoint("/analytics/customer-insights/")
}

/// Extract FastAPI's `{"detail": ...}` message from an error body.
///
/// `detail` is either a string or a list of validation errors carrying `msg`.
fn detail_from_body(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        serde_json::Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_owned()),
        serde_json::Value::Array(items) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(|m| m.as_str()))
                .collect();
            if messages.is_empty() { None } else { Some(messages.join("; ")) }
        }
        _ => None,
    }
}

// =============================================================================
// CUSTOMERS
// =============================================================================

/// `GET /customers/`
///
/// # Errors
///
/// Returns an `ApiError` if the request fails or the body does not decode.
pub async fn list_customers() -> Result<Vec<Customer>, ApiError> {
    get_json(&endpoint("/customers/")).await
}

/// `GET /customers/{id}`
///
/// # Errors
///
/// Returns an `ApiError` if the request fails or the body does not decode.
pub async fn fetch_customer(customer_id: RecordId) -> Result<Customer, ApiError> {
    get_json(&customer_endpoint(customer_id)).await
}

/// `POST /customers/` with the form payload sent verbatim.
///
/// # Errors
///
/// Returns an `ApiError` if the backend rejects the customer or is unreachable.
pub async fn create_customer(customer: &NewCustomer) -> Result<Customer, ApiError> {
    post_json(&endpoint("/customers/"), customer).await
}

/// `PUT /customers/{id}`
///
/// # Errors
///
/// Returns an `ApiError` if the backend rejects the update or is unreachable.
pub async fn update_customer(customer_id: RecordId, update: &CustomerUpdate) -> Result<Customer, ApiError> {
    put_json(&customer_endpoint(customer_id), update).await
}

// =============================================================================
// REFERENCE DATA
// =============================================================================

/// `GET /insurers/`
///
/// # Errors
///
/// Returns an `ApiError` if the request fails or the body does not decode.
pub async fn list_insurers() -> Result<Vec<Insurer>, ApiError> {
    get_json(&endpoint("/insurers/")).await
}

/// `GET /products/` with optional type/insurer filters.
///
/// # Errors
///
/// Returns an `ApiError` if the request fails or the body does not decode.
pub async fn list_products(filter: &ProductFilter) -> Result<Vec<Product>, ApiError> {
    get_json(&products_endpoint(filter)).await
}

/// `POST /products/compare/`
///
/// # Errors
///
/// Returns an `ApiError` if the request fails or the body does not decode.
pub async fn compare_products(request: &ComparisonRequest) -> Result<ComparisonResponse, ApiError> {
    post_json(&endpoint("/products/compare/"), request).await
}

// =============================================================================
// NEEDS ANALYSIS & RECOMMENDATIONS
// =============================================================================

/// `POST /needs-analysis/`
///
/// # Errors
///
/// Returns an `ApiError` if the request fails or the body does not decode.
pub async fn create_needs_analysis(request: &NeedsAnalysisRequest) -> Result<NeedsAnalysis, ApiError> {
    post_json(&endpoint("/needs-analysis/"), request).await
}

/// `GET /needs-analysis/{id}/enhanced/`: analysis bundled with customer,
/// recommendations and calculator output.
///
/// # Errors
///
/// Returns `ApiError::Status` with 404 when no analysis exists yet.
pub async fn fetch_enhanced_needs_analysis(customer_id: RecordId) -> Result<EnhancedNeedsAnalysis, ApiError> {
    get_json(&enhanced_needs_analysis_endpoint(customer_id)).await
}

/// `POST /recommendations/generate/?customer_id={id}`
///
/// # Errors
///
/// Returns an `ApiError` if the request fails or the body does not decode.
pub async fn generate_recommendations(customer_id: RecordId) -> Result<Vec<Recommendation>, ApiError> {
    post_empty(&generate_recommendations_endpoint(customer_id)).await
}

/// `GET /recommendations/{id}`: recommendations stored by earlier runs.
///
/// # Errors
///
/// Returns an `ApiError` if the request fails or the body does not decode.
pub async fn list_recommendations(customer_id: RecordId) -> Result<Vec<Recommendation>, ApiError> {
    get_json(&stored_recommendations_endpoint(customer_id)).await
}

// =============================================================================
// PDF REPORTS
// =============================================================================

/// Fetch a per-customer PDF report as raw bytes.
///
/// # Errors
///
/// Returns an `ApiError` if the request fails.
pub async fn fetch_report_pdf(kind: ReportKind, customer_id: RecordId) -> Result<Vec<u8>, ApiError> {
    get_binary(&report_endpoint(kind, customer_id)).await
}

/// `POST /pdf/product-comparison/` returning the PDF bytes.
///
/// # Errors
///
/// Returns an `ApiError` if the request fails.
pub async fn fetch_comparison_pdf(request: &ComparisonRequest) -> Result<Vec<u8>, ApiError> {
    post_binary(&endpoint("/pdf/product-comparison/"), request).await
}

// =============================================================================
// MARKET DATA & ANALYTICS
// =============================================================================

/// `GET /market-data/latest/`
///
/// # Errors
///
/// Returns an `ApiError` if the request fails or the body does not decode.
pub async fn fetch_latest_market_data() -> Result<Vec<MarketData>, ApiError> {
    get_json(&endpoint("/market-data/latest/")).await
}

/// `GET /market-data/insurer/{id}/`, newest snapshot first.
///
/// # Errors
///
/// Returns an `ApiError` if the request fails or the body does not decode.
pub async fn fetch_insurer_market_history(insurer_id: RecordId) -> Result<Vec<MarketData>, ApiError> {
    get_json(&insurer_market_history_endpoint(insurer_id)).await
}

/// `GET /market-data/trends/`
///
/// # Errors
///
/// Returns an `ApiError` if the request fails or the body does not decode.
pub async fn fetch_market_trends() -> Result<MarketTrends, ApiError> {
    get_json(&endpoint("/market-data/trends/")).await
}

/// `GET /market-data/insights/`
///
/// # Errors
///
/// Returns an `ApiError` if the request fails or the body does not decode.
pub async fn fetch_market_insights() -> Result<MarketInsights, ApiError> {
    get_json(&endpoint("/market-data/insights/")).await
}

/// `GET /analytics/dashboard/?period=...`
///
/// # Errors
///
/// Returns an `ApiError` if the request fails or the body does not decode.
pub async fn fetch_dashboard_metrics(period: ReportPeriod) -> Result<DashboardMetrics, ApiError> {
    get_json(&dashboard_endpoint(period)).await
}

/// `GET /analytics/customer-insights/`
///
/// # Errors
///
/// Returns an `ApiError` if the request fails or the body does not decode.
pub async fn fetch_customer_insights() -> Result<CustomerInsights, ApiError> {
    get_json(&customer_insights_endpoint()).await
}

// =============================================================================
// TRANSPORT
// =============================================================================

async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(url)
            .send()
            .await
            .map_err(|e| network_error(url, &e))?;
        decode_json(url, resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
        Err(ApiError::Unavailable)
    }
}

async fn post_json<B: Serialize, T: DeserializeOwned>(url: &str, body: &B) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(url)
            .json(body)
            .map_err(|e| ApiError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(|e| network_error(url, &e))?;
        decode_json(url, resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (url, body);
        Err(ApiError::Unavailable)
    }
}

async fn put_json<B: Serialize, T: DeserializeOwned>(url: &str, body: &B) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::put(url)
            .json(body)
            .map_err(|e| ApiError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(|e| network_error(url, &e))?;
        decode_json(url, resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (url, body);
        Err(ApiError::Unavailable)
    }
}

async fn post_empty<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(url)
            .send()
            .await
            .map_err(|e| network_error(url, &e))?;
        decode_json(url, resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
        Err(ApiError::Unavailable)
    }
}

async fn get_binary(url: &str) -> Result<Vec<u8>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(url)
            .send()
            .await
            .map_err(|e| network_error(url, &e))?;
        read_binary(url, resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
        Err(ApiError::Unavailable)
    }
}

async fn post_binary<B: Serialize>(url: &str, body: &B) -> Result<Vec<u8>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(url)
            .json(body)
            .map_err(|e| ApiError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(|e| network_error(url, &e))?;
        read_binary(url, resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (url, body);
        Err(ApiError::Unavailable)
    }
}

#[cfg(feature = "hydrate")]
fn network_error(url: &str, err: &gloo_net::Error) -> ApiError {
    leptos::logging::warn!("request to {url} failed: {err}");
    ApiError::Network(err.to_string())
}

#[cfg(feature = "hydrate")]
async fn ensure_ok(url: &str, resp: gloo_net::http::Response) -> Result<gloo_net::http::Response, ApiError> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    leptos::logging::warn!("request to {url} returned {status}");
    Err(ApiError::Status { status, detail: detail_from_body(&body) })
}

#[cfg(feature = "hydrate")]
async fn decode_json<T: DeserializeOwned>(url: &str, resp: gloo_net::http::Response) -> Result<T, ApiError> {
    let resp = ensure_ok(url, resp).await?;
    resp.json::<T>().await.map_err(|e| {
        leptos::logging::warn!("response from {url} did not decode: {e}");
        ApiError::Decode(e.to_string())
    })
}

#[cfg(feature = "hydrate")]
async fn read_binary(url: &str, resp: gloo_net::http::Response) -> Result<Vec<u8>, ApiError> {
    let resp = ensure_ok(url, resp).await?;
    resp.binary().await.map_err(|e| ApiError::Decode(e.to_string()))
}
