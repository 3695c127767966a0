//! Needs analysis page for one customer.
//!
//! SYSTEM CONTEXT
//! ==============
//! Loads the enhanced analysis (customer, coverage breakdown, calculator
//! output and any recommendations). When the backend has no analysis yet it
//! answers 404; the page then creates one from the customer's stored profile
//! and shows that. Every figure shown is backend-computed except the age.
//!
//! ERROR HANDLING
//! ==============
//! Any failure lands in the error panel with a retry. A customer record too
//! sparse to analyse (no age, gender or income) is reported as such rather than sent.

#[cfg(test)]
#[path = "needs_analysis_test.rs"]
mod needs_analysis_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;
use time::Date;

use crate::components::metric_card::MetricCard;
use crate::components::pdf_button::ReportPdfButton;
use crate::components::share_menu::ShareMenu;
use crate::components::status::{ErrorPanel, LoadingPanel};
use crate::net::api::ApiError;
use crate::net::types::{CalculatorResult, Customer, EnhancedNeedsAnalysis, NeedsAnalysis, NeedsAnalysisRequest, RecordId};
use crate::state::customer_form::recorded_cover;
use crate::state::remote::{Phase, Remote};
use crate::state::ui::{UiState, edit_customer_path, parse_customer_id, recommendations_path};
use crate::util::age::{age_on, parse_birth_date, today};
use crate::util::download::ReportKind;
use crate::util::format::{MISSING, format_inr_compact, format_optional_inr, format_percent, humanize_code};
use crate::util::share::{ShareContent, current_page_url};

pub const CALCULATION_TYPE: &str = "comprehensive";
pub const DEFAULT_INFLATION_RATE: f64 = 6.0;
pub const DEFAULT_RETURN_RATE: f64 = 8.0;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("customer profile is missing {0}")]
    IncompleteProfile(&'static str),
}

impl AnalysisError {
    pub fn user_message(&self) -> String {
        match self {
            Self::Api(err) => err.user_message(),
            Self::IncompleteProfile(field) => {
                format!("Add the customer's {field} before running a needs analysis.")
            }
        }
    }
}

// =============================================================================
// PAGE
// =============================================================================

#[component]
pub fn NeedsAnalysisPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let params = use_params_map();
    let customer_id = Memo::new(move |_| params.with(|p| parse_customer_id(p.get("id").as_deref())));
    let analysis = RwSignal::new(Remote::<EnhancedNeedsAnalysis>::default());

    let load = move || {
        let Some(id) = customer_id.get_untracked() else {
            analysis.update(|s| s.fail("Unknown customer."));
            return;
        };
        analysis.update(Remote::begin);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match load_or_create(id).await {
                Ok(data) => {
                    if let Some(customer) = data.customer.as_ref() {
                        ui.update(|u| u.select_customer(customer.id, customer.profile.name.clone()));
                    }
                    analysis.update(|s| s.succeed(data));
                }
                Err(err) => {
                    leptos::logging::warn!("needs analysis for {id} failed: {err}");
                    analysis.update(|s| s.fail(err.user_message()));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, ui);
        }
    };
    Effect::new(move || {
        customer_id.track();
        load();
    });
    let on_retry = Callback::new(move |()| load());

    view! {
        <section class="page needs-analysis-page">
            <header class="page__header">
                <h1>"Needs Analysis"</h1>
            </header>
            {move || {
                let state = analysis.get();
                match (state.phase(), customer_id.get()) {
                    (Phase::Loading, _) => view! { <LoadingPanel label="Loading needs analysis..."/> }.into_any(),
                    (Phase::Failed, _) | (Phase::Ready, None) => {
                        view! { <ErrorPanel message=state.error_message() on_retry=on_retry/> }.into_any()
                    }
                    (Phase::Ready, Some(id)) => match state.data {
                        Some(data) => view! { <AnalysisContent customer_id=id data=data/> }.into_any(),
                        None => view! { <LoadingPanel label="Loading needs analysis..."/> }.into_any(),
                    },
                }
            }}
        </section>
    }
}

#[component]
fn AnalysisContent(customer_id: RecordId, data: EnhancedNeedsAnalysis) -> impl IntoView {
    let name = data.customer.as_ref().map(|c| c.profile.name.clone()).unwrap_or_default();
    let profile_facts = data.customer.as_ref().map(|c| customer_facts(c, today())).unwrap_or_default();
    let coverage = coverage_rows(&data.needs_analysis);
    let share = share_content(&name, &data.needs_analysis, current_page_url());
    let total = format_inr_compact(data.needs_analysis.total_insurance_needs.unwrap_or(0.0));
    let gap = format_inr_compact(data.needs_analysis.additional_coverage_needed.unwrap_or(0.0));
    let existing = format_inr_compact(data.needs_analysis.existing_coverage.unwrap_or(0.0));
    let calculator = data.calculator_results.clone();
    let recommendation_count = data.recommendations.len();
    let customer_name = Signal::derive({
        let name = name.clone();
        move || name.clone()
    });

    view! {
        <div class="panel needs-analysis-page__customer">
            <h2>{if name.is_empty() { MISSING.to_owned() } else { name.clone() }}</h2>
            <A href=edit_customer_path(customer_id)>"Edit profile"</A>
            <dl class="facts">
                {profile_facts
                    .into_iter()
                    .map(|(label, value)| view! { <dt>{label}</dt> <dd>{value}</dd> })
                    .collect::<Vec<_>>()}
            </dl>
        </div>
        <div class="dashboard-page__cards">
            <MetricCard label="Total cover needed" value=total emphasis=true/>
            <MetricCard label="Existing cover" value=existing/>
            <MetricCard label="Additional cover needed" value=gap/>
        </div>
        <div class="panel">
            <h2>"Coverage breakdown"</h2>
            <table class="table">
                <tbody>
                    {coverage
                        .into_iter()
                        .map(|(label, value)| view! { <tr><th>{label}</th><td>{value}</td></tr> })
                        .collect::<Vec<_>>()}
                </tbody>
            </table>
        </div>
        {calculator.map(|calc| view! { <CalculatorPanel calc=calc/> })}
        <div class="panel actions">
            <ReportPdfButton kind=ReportKind::NeedsAnalysis customer_id=customer_id customer_name=customer_name/>
            <ReportPdfButton kind=ReportKind::Comprehensive customer_id=customer_id customer_name=customer_name/>
            <ShareMenu content=Signal::derive(move || share.clone())/>
            <A href=recommendations_path(customer_id) attr:class="btn btn--primary">
                {if recommendation_count == 0 {
                    "Generate recommendations".to_owned()
                } else {
                    format!("View {recommendation_count} recommendations")
                }}
            </A>
        </div>
    }
}

#[component]
fn CalculatorPanel(calc: CalculatorResult) -> impl IntoView {
    let premiums = calc.premium_estimates.into_iter().collect::<Vec<_>>();
    let returns = calc.inflation_adjusted_returns.into_iter().collect::<Vec<_>>();
    view! {
        <div class="panel">
            <h2>"Calculator"</h2>
            <dl class="facts">
                <dt>"Human life value"</dt>
                <dd>{format_optional_inr(calc.human_life_value)}</dd>
                <dt>"Recommended coverage"</dt>
                <dd>{format_optional_inr(calc.recommended_coverage)}</dd>
            </dl>
            <h3>"Estimated annual premium"</h3>
            <ul class="list">
                {premiums
                    .into_iter()
                    .map(|(kind, premium)| {
                        view! {
                            <li class="list__row">
                                <span>{humanize_code(&kind)}</span>
                                <span class="list__meta">{format_optional_inr(Some(premium))}</span>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
            <h3>"Inflation-adjusted returns"</h3>
            <ul class="list">
                {returns
                    .into_iter()
                    .map(|(kind, rate)| {
                        view! {
                            <li class="list__row">
                                <span>{humanize_code(&kind)}</span>
                                <span class="list__meta">{format_percent(rate, 2)}</span>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        </div>
    }
}

// =============================================================================
// LOADING
// =============================================================================

/// Fetch the enhanced analysis, creating the analysis first when absent.
#[cfg(feature = "hydrate")]
async fn load_or_create(customer_id: RecordId) -> Result<EnhancedNeedsAnalysis, AnalysisError> {
    use crate::net::api;

    match api::fetch_enhanced_needs_analysis(customer_id).await {
        Ok(data) => Ok(data),
        Err(err) if err.is_not_found() => {
            leptos::logging::log!("no analysis for customer {customer_id}; creating one");
            let customer = api::fetch_customer(customer_id).await?;
            let request = needs_analysis_request(&customer, today())?;
            let created = api::create_needs_analysis(&request).await?;
            Ok(EnhancedNeedsAnalysis {
                customer: Some(customer),
                needs_analysis: created,
                recommendations: Vec::new(),
                calculator_results: None,
            })
        }
        Err(err) => Err(err.into()),
    }
}

// =============================================================================
// HELPERS
// =============================================================================

/// Build the analysis inputs from a stored customer profile.
///
/// # Errors
///
/// `IncompleteProfile` when neither an age nor a usable date of birth is on
/// record, or the gender or income is missing. Both drive the backend's
/// premium estimates, so no default is guessed.
pub fn needs_analysis_request(customer: &Customer, today: Date) -> Result<NeedsAnalysisRequest, AnalysisError> {
    let profile = &customer.profile;
    let age = profile
        .date_of_birth
        .as_deref()
        .and_then(parse_birth_date)
        .map(|birth| age_on(birth, today))
        .or(profile.age)
        .ok_or(AnalysisError::IncompleteProfile("date of birth"))?;
    let gender = profile.gender.ok_or(AnalysisError::IncompleteProfile("gender"))?;
    let annual_income = profile.annual_income.ok_or(AnalysisError::IncompleteProfile("annual income"))?;

    Ok(NeedsAnalysisRequest {
        customer_id: customer.id,
        calculation_type: CALCULATION_TYPE.to_owned(),
        age,
        gender,
        annual_income,
        family_size: profile.family_size.unwrap_or(1),
        dependents: profile.dependents.unwrap_or(0),
        existing_coverage: existing_cover(customer),
        debt_obligations: 0.0,
        children_education_needs: 0.0,
        retirement_needs: 0.0,
        inflation_rate: DEFAULT_INFLATION_RATE,
        return_rate: DEFAULT_RETURN_RATE,
    })
}

/// Sum assured the customer already holds, or zero.
pub fn existing_cover(customer: &Customer) -> f64 {
    recorded_cover(customer.profile.existing_insurance.as_ref()).unwrap_or(0.0)
}

/// Breakdown rows in display order.
pub fn coverage_rows(analysis: &NeedsAnalysis) -> Vec<(&'static str, String)> {
    vec![
        ("Human life value", format_optional_inr(analysis.human_life_value)),
        ("Income replacement", format_optional_inr(analysis.income_replacement_needs)),
        ("Debt obligations", format_optional_inr(analysis.debt_obligations)),
        ("Children's education", format_optional_inr(analysis.children_education_needs)),
        ("Retirement", format_optional_inr(analysis.retirement_needs)),
        ("Emergency fund", format_optional_inr(analysis.emergency_fund_needs)),
        ("Total insurance needs", format_optional_inr(analysis.total_insurance_needs)),
        ("Existing coverage", format_optional_inr(analysis.existing_coverage)),
        ("Additional coverage needed", format_optional_inr(analysis.additional_coverage_needed)),
    ]
}

/// Profile lines shown above the breakdown. Age is derived from the birth
/// date when one is on record.
pub fn customer_facts(customer: &Customer, today: Date) -> Vec<(&'static str, String)> {
    let profile = &customer.profile;
    let age = profile
        .date_of_birth
        .as_deref()
        .and_then(parse_birth_date)
        .map(|birth| age_on(birth, today))
        .or(profile.age)
        .map_or_else(|| MISSING.to_owned(), |a| a.to_string());
    vec![
        ("Age", age),
        ("Occupation", profile.occupation.clone().unwrap_or_else(|| MISSING.to_owned())),
        ("Annual income", format_optional_inr(profile.annual_income)),
        ("Dependents", profile.dependents.map_or_else(|| MISSING.to_owned(), |d| d.to_string())),
        ("Risk appetite", profile.risk_appetite.map_or_else(|| MISSING.to_owned(), |r| r.label().to_owned())),
    ]
}

/// Summary text for the share control.
pub fn share_content(customer_name: &str, analysis: &NeedsAnalysis, url: Option<String>) -> ShareContent {
    let who = if customer_name.trim().is_empty() { "Customer" } else { customer_name.trim() };
    let total = format_inr_compact(analysis.total_insurance_needs.unwrap_or(0.0));
    let gap = format_inr_compact(analysis.additional_coverage_needed.unwrap_or(0.0));
    ShareContent {
        title: format!("Insurance needs analysis: {who}"),
        text: format!("{who} needs total life cover of {total}. Additional cover required: {gap}."),
        url,
    }
}
