//! Wire DTOs for the advisory backend's REST API.
//!
//! DESIGN
//! ======
//! These types mirror backend JSON payloads. The backend owns every invariant
//! on them; optional fields default on absence so a partially populated
//! response still renders, and no cross-field validation happens here.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Backend-assigned record identifier.
pub type RecordId = i64;

// =============================================================================
// ENUMS
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    #[default]
    Male,
    Female,
    Other,
}

impl Gender {
    pub const ALL: [Self; 3] = [Self::Male, Self::Female, Self::Other];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Other => "Other",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.as_str() == raw)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskAppetite {
    Low,
    #[default]
    Medium,
    High,
}

impl RiskAppetite {
    pub const ALL: [Self; 3] = [Self::Low, Self::Medium, Self::High];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.as_str() == raw)
    }
}

/// Urgency the backend attaches to a recommendation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    pub fn label(self) -> &'static str {
        match self {
            Self::High => "High priority",
            Self::Medium => "Medium priority",
            Self::Low => "Low priority",
        }
    }
}

/// Reporting window accepted by `/analytics/dashboard/`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReportPeriod {
    Week,
    #[default]
    Month,
    Quarter,
    Year,
}

impl ReportPeriod {
    pub const ALL: [Self; 4] = [Self::Week, Self::Month, Self::Quarter, Self::Year];

    /// Query-string value understood by the backend.
    pub fn as_query(self) -> &'static str {
        match self {
            Self::Week => "7d",
            Self::Month => "30d",
            Self::Quarter => "90d",
            Self::Year => "1y",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Week => "Last 7 days",
            Self::Month => "Last 30 days",
            Self::Quarter => "Last 90 days",
            Self::Year => "Last year",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_query() == raw)
    }
}

// =============================================================================
// REFERENCE DATA
// =============================================================================

/// An insurance company.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Insurer {
    pub id: RecordId,
    pub name: String,
    pub logo_url: Option<String>,
    pub website: Option<String>,
    pub customer_care: Option<String>,
    /// Percentage of claims settled, 0-100.
    pub claim_settlement_ratio: Option<f64>,
    pub solvency_ratio: Option<f64>,
    pub irda_registration: Option<String>,
    pub established_year: Option<i32>,
    pub headquarters: Option<String>,
    /// Agency rating on a 0-5 scale.
    pub rating: Option<f64>,
    pub rating_agency: Option<String>,
}

/// A policy product sold by an insurer.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    pub id: RecordId,
    pub name: String,
    pub insurer_id: RecordId,
    /// Backend product category, e.g. `term_life` or `ulip`.
    pub product_type: String,
    pub description: Option<String>,
    pub features: Option<Vec<String>>,
    pub benefits: Option<Vec<String>>,
    pub exclusions: Option<Vec<String>>,
    pub min_age: Option<u32>,
    pub max_age: Option<u32>,
    pub min_sum_assured: Option<f64>,
    pub max_sum_assured: Option<f64>,
    pub min_premium: Option<f64>,
    pub max_premium: Option<f64>,
    pub premium_frequency: Option<String>,
    pub policy_term_options: Option<Vec<u32>>,
    pub premium_paying_term_options: Option<Vec<u32>>,
    #[serde(default = "active_by_default")]
    pub is_active: bool,
    pub insurer: Option<Insurer>,
}

fn active_by_default() -> bool {
    true
}

impl Product {
    /// Insurer name when the backend embedded the insurer record.
    pub fn insurer_name(&self) -> Option<&str> {
        self.insurer.as_ref().map(|i| i.name.as_str())
    }
}

/// Optional filters for `/products/`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProductFilter {
    pub product_type: Option<String>,
    pub insurer_id: Option<RecordId>,
}

// =============================================================================
// CUSTOMER
// =============================================================================

/// Customer payload submitted by the intake form.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewCustomer {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    /// ISO-8601 calendar date (`YYYY-MM-DD`).
    pub date_of_birth: Option<String>,
    pub age: Option<u32>,
    pub gender: Option<Gender>,
    pub occupation: Option<String>,
    pub annual_income: Option<f64>,
    pub family_size: Option<u32>,
    pub dependents: Option<u32>,
    pub existing_insurance: Option<serde_json::Value>,
    pub health_conditions: Option<Vec<String>>,
    pub lifestyle_factors: Option<Vec<String>>,
    pub risk_appetite: Option<RiskAppetite>,
    pub investment_goals: Option<Vec<String>>,
}

/// A persisted customer as returned by the backend.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: RecordId,
    #[serde(flatten)]
    pub profile: NewCustomer,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Body of `PUT /customers/{id}`. Identity fields (email, date of birth,
/// gender) are not updatable; `None` clears the stored value.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomerUpdate {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub occupation: Option<String>,
    pub annual_income: Option<f64>,
    pub family_size: Option<u32>,
    pub dependents: Option<u32>,
    pub existing_insurance: Option<serde_json::Value>,
    pub health_conditions: Option<Vec<String>>,
    pub lifestyle_factors: Option<Vec<String>>,
    pub risk_appetite: Option<RiskAppetite>,
    pub investment_goals: Option<Vec<String>>,
}

// =============================================================================
// NEEDS ANALYSIS
// =============================================================================

/// Backend-computed coverage estimate for a customer.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NeedsAnalysis {
    pub id: Option<RecordId>,
    pub customer_id: Option<RecordId>,
    pub human_life_value: Option<f64>,
    pub income_replacement_needs: Option<f64>,
    pub debt_obligations: Option<f64>,
    pub children_education_needs: Option<f64>,
    pub retirement_needs: Option<f64>,
    pub emergency_fund_needs: Option<f64>,
    pub total_insurance_needs: Option<f64>,
    pub existing_coverage: Option<f64>,
    pub additional_coverage_needed: Option<f64>,
    pub analysis_date: Option<String>,
}

/// Inputs posted to `/needs-analysis/`. The backend runs the formulas.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NeedsAnalysisRequest {
    pub customer_id: RecordId,
    pub calculation_type: String,
    pub age: u32,
    pub gender: Gender,
    pub annual_income: f64,
    pub family_size: u32,
    pub dependents: u32,
    pub existing_coverage: f64,
    pub debt_obligations: f64,
    pub children_education_needs: f64,
    pub retirement_needs: f64,
    pub inflation_rate: f64,
    pub return_rate: f64,
}

/// Calculator block of the enhanced needs-analysis response.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorResult {
    pub human_life_value: Option<f64>,
    pub recommended_coverage: Option<f64>,
    pub additional_coverage_needed: Option<f64>,
    /// Premium estimates keyed by product category.
    pub premium_estimates: BTreeMap<String, f64>,
    pub inflation_adjusted_returns: BTreeMap<String, f64>,
}

/// Customer, analysis and recommendations bundled by the enhanced endpoint.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EnhancedNeedsAnalysis {
    #[serde(default)]
    pub customer: Option<Customer>,
    pub needs_analysis: NeedsAnalysis,
    #[serde(default)]
    pub recommendations: Vec<Recommendation>,
    #[serde(default)]
    pub calculator_results: Option<CalculatorResult>,
}

// =============================================================================
// RECOMMENDATIONS
// =============================================================================

/// A backend-selected, backend-ranked product suggestion.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Recommendation {
    pub id: RecordId,
    pub customer_id: RecordId,
    pub product_id: RecordId,
    pub sum_assured: f64,
    pub premium_amount: f64,
    pub policy_term: u32,
    pub premium_paying_term: u32,
    pub premium_frequency: String,
    pub reasoning: String,
    pub priority: Priority,
    pub product: Option<Product>,
}

// =============================================================================
// PRODUCT COMPARISON
// =============================================================================

/// Customer attributes the comparison endpoint scores against.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomerProfile {
    pub age: u32,
    pub gender: Gender,
    pub annual_income: f64,
    pub risk_appetite: RiskAppetite,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRequest {
    pub product_ids: Vec<RecordId>,
    pub customer_profile: CustomerProfile,
    pub sum_assured: f64,
    pub policy_term: u32,
    pub premium_frequency: String,
}

/// One scored row of a comparison table.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComparisonRow {
    pub product_id: RecordId,
    pub product_name: String,
    pub insurer_name: String,
    pub product_type: String,
    pub premium_amount: f64,
    pub premium_rate_per_1000: f64,
    pub features: Vec<String>,
    pub benefits: Vec<String>,
    pub exclusions: Vec<String>,
    pub rating: Option<f64>,
    pub claim_settlement_ratio: Option<f64>,
    pub recommendation_score: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComparisonSummary {
    pub total_products: u32,
    pub average_premium: Option<f64>,
    pub min_premium: Option<f64>,
    pub max_premium: Option<f64>,
    pub premium_range: Option<f64>,
    pub best_value_product: Option<String>,
    pub lowest_premium_product: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComparisonResponse {
    /// Rows ordered by the backend, best score first.
    pub comparison_data: Vec<ComparisonRow>,
    pub summary: ComparisonSummary,
    pub recommendations: Vec<String>,
    pub generated_at: Option<String>,
}

// =============================================================================
// MARKET DATA
// =============================================================================

/// Per-insurer market snapshot.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketData {
    pub id: RecordId,
    pub insurer_id: RecordId,
    pub date: Option<String>,
    pub claim_settlement_ratio: Option<f64>,
    pub rating: Option<f64>,
    pub market_share: Option<f64>,
    pub premium_growth: Option<f64>,
    pub insurer: Option<Insurer>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketTrends {
    pub inflation_trend: Option<f64>,
    pub repo_rate_trend: Option<f64>,
    pub gdp_growth_trend: Option<f64>,
    pub market_cap_trend: Option<f64>,
    pub top_performers: Vec<String>,
    pub market_insights: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketInsights {
    pub key_insights: Vec<String>,
    pub recommendations: Vec<String>,
    pub risk_factors: Vec<String>,
}

// =============================================================================
// ANALYTICS
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamedCount {
    pub name: String,
    pub count: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgeGroupCount {
    pub age_group: String,
    pub count: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IncomeRangeCount {
    pub range: String,
    pub count: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Demographics {
    pub age_groups: Vec<AgeGroupCount>,
    pub income_ranges: Vec<IncomeRangeCount>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PerformanceMetrics {
    pub needs_analysis_completed: u64,
    pub recommendations_generated: u64,
    pub pdf_reports_created: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecentCustomer {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub created_at: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecentActivity {
    pub recent_customers: Vec<RecentCustomer>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonthlyCount {
    pub month: String,
    pub customers: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Trends {
    pub monthly_customers: Vec<MonthlyCount>,
}

/// Aggregates served by `/analytics/dashboard/`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardMetrics {
    pub total_customers: u64,
    pub total_recommendations: u64,
    pub average_premium: f64,
    /// Percentage of customers with at least one recommendation.
    pub conversion_rate: f64,
    pub top_products: Vec<NamedCount>,
    pub customer_demographics: Demographics,
    pub performance_metrics: PerformanceMetrics,
    pub recent_activity: RecentActivity,
    pub trends: Trends,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskLevelCount {
    pub risk_level: Option<String>,
    pub count: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenderCount {
    pub gender: Option<String>,
    pub count: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InsurerCount {
    pub insurer: String,
    pub count: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgeGroupSumAssured {
    pub age_group: String,
    pub avg_sum_assured: f64,
}

/// Portfolio breakdowns served by `/analytics/customer-insights/`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomerInsights {
    pub risk_appetite_distribution: Vec<RiskLevelCount>,
    pub gender_distribution: Vec<GenderCount>,
    /// Insurers ranked by how often their products were recommended.
    pub top_insurers: Vec<InsurerCount>,
    pub avg_sum_assured_by_age: Vec<AgeGroupSumAssured>,
}
