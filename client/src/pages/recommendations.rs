//! Recommendations page for one customer.
//!
//! Shows the recommendations stored for the customer, asking the backend to
//! generate them from the latest needs analysis when none exist yet or when
//! the advisor regenerates. Items keep the order the backend ranked them in.
//! Generated items carry only a `product_id`, so titles come from the
//! product catalogue. The comprehensive report PDF is offered from here.

#[cfg(test)]
#[path = "recommendations_test.rs"]
mod recommendations_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::components::pdf_button::ReportPdfButton;
use crate::components::status::{EmptyPanel, ErrorPanel, LoadingPanel};
use crate::net::api::ApiError;
use crate::net::types::{Customer, Priority, Product, ProductFilter, Recommendation, RecordId};
use crate::state::remote::{Phase, Remote, spawn_fetch};
use crate::state::ui::{UiState, needs_analysis_path, parse_customer_id};
use crate::util::download::ReportKind;
use crate::util::format::{format_inr, format_inr_compact, humanize_code};

/// Customer plus their recommendations, titles attached.
#[derive(Clone, Debug, PartialEq)]
pub struct CustomerRecommendations {
    pub customer: Customer,
    pub items: Vec<Recommendation>,
}

#[component]
pub fn RecommendationsPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let params = use_params_map();
    let customer_id = Memo::new(move |_| params.with(|p| parse_customer_id(p.get("id").as_deref())));
    let state = RwSignal::new(Remote::<CustomerRecommendations>::default());

    let load = move |regenerate: bool| {
        let Some(id) = customer_id.get_untracked() else {
            state.update(|s| s.fail("Unknown customer."));
            return;
        };
        spawn_fetch(state, move || async move {
            use crate::net::api;
            let customer = api::fetch_customer(id).await?;
            let stored = if regenerate { Vec::new() } else { api::list_recommendations(id).await? };
            let items = if stored.is_empty() { api::generate_recommendations(id).await? } else { stored };
            let catalogue = match api::list_products(&ProductFilter::default()).await {
                Ok(products) => products,
                Err(err) => {
                    leptos::logging::warn!("product catalogue unavailable for titles: {err}");
                    Vec::new()
                }
            };
            Ok::<_, ApiError>(CustomerRecommendations { customer, items: attach_products(items, &catalogue) })
        });
    };
    Effect::new(move || {
        customer_id.track();
        load(false);
    });
    Effect::new(move || {
        if let Some(data) = state.with(|s| s.data.as_ref().map(|d| (d.customer.id, d.customer.profile.name.clone()))) {
            ui.update(|u| u.select_customer(data.0, data.1));
        }
    });
    let on_retry = Callback::new(move |()| load(false));

    view! {
        <section class="page recommendations-page">
            <header class="page__header">
                <h1>"Recommendations"</h1>
                <button class="btn" on:click=move |_| load(true) disabled=move || state.with(|s| s.loading)>
                    "Regenerate"
                </button>
            </header>
            {move || {
                let current = state.get();
                match current.phase() {
                    Phase::Loading => view! { <LoadingPanel label="Loading recommendations..."/> }.into_any(),
                    Phase::Failed => {
                        view! { <ErrorPanel message=current.error_message() on_retry=on_retry/> }.into_any()
                    }
                    Phase::Ready => match current.data {
                        Some(data) => view! { <RecommendationList data=data/> }.into_any(),
                        None => view! { <EmptyPanel message="No recommendations yet."/> }.into_any(),
                    },
                }
            }}
        </section>
    }
}

#[component]
fn RecommendationList(data: CustomerRecommendations) -> impl IntoView {
    let customer_id: RecordId = data.customer.id;
    let name = data.customer.profile.name.clone();
    let total = format_inr(total_premium(&data.items));
    let heading = format!("{} for {name}", recommendation_count_label(data.items.len()));
    let customer_name = Signal::derive(move || name.clone());
    let empty = data.items.is_empty();

    view! {
        <div class="panel actions">
            <h2>{heading}</h2>
            <span class="list__meta">{format!("Combined premium {total}")}</span>
            <ReportPdfButton kind=ReportKind::Comprehensive customer_id=customer_id customer_name=customer_name/>
            <A href=needs_analysis_path(customer_id)>"Back to needs analysis"</A>
        </div>
        <Show when=move || empty>
            <EmptyPanel message="The backend found no suitable products for this profile."/>
        </Show>
        <ol class="recommendation-list">
            {data
                .items
                .into_iter()
                .map(|rec| view! { <RecommendationCard rec=rec/> })
                .collect::<Vec<_>>()}
        </ol>
    }
}

#[component]
fn RecommendationCard(rec: Recommendation) -> impl IntoView {
    let title = product_title(&rec);
    let class = priority_class(rec.priority);
    view! {
        <li class=format!("recommendation-card {class}")>
            <header class="recommendation-card__header">
                <span class="recommendation-card__title">{title}</span>
                <span class="recommendation-card__priority">{rec.priority.label()}</span>
            </header>
            <dl class="facts">
                <dt>"Sum assured"</dt>
                <dd>{format_inr_compact(rec.sum_assured)}</dd>
                <dt>"Premium"</dt>
                <dd>{premium_line(&rec)}</dd>
                <dt>"Policy term"</dt>
                <dd>{term_line(&rec)}</dd>
            </dl>
            <p class="recommendation-card__reasoning">{rec.reasoning.clone()}</p>
        </li>
    }
}

/// Fill in `product` from the catalogue wherever the backend left it out.
pub fn attach_products(items: Vec<Recommendation>, catalogue: &[Product]) -> Vec<Recommendation> {
    items
        .into_iter()
        .map(|mut rec| {
            if rec.product.is_none() {
                rec.product = catalogue.iter().find(|p| p.id == rec.product_id).cloned();
            }
            rec
        })
        .collect()
}

/// `Product (Insurer)` when the product is known, else its id.
pub fn product_title(rec: &Recommendation) -> String {
    match rec.product.as_ref() {
        Some(product) => match product.insurer_name() {
            Some(insurer) => format!("{} ({insurer})", product.name),
            None => format!("{} ({})", product.name, humanize_code(&product.product_type)),
        },
        None => format!("Product #{}", rec.product_id),
    }
}

pub fn premium_line(rec: &Recommendation) -> String {
    let frequency = if rec.premium_frequency.trim().is_empty() {
        "yearly".to_owned()
    } else {
        humanize_code(&rec.premium_frequency).to_lowercase()
    };
    format!("{} {frequency}", format_inr(rec.premium_amount))
}

pub fn term_line(rec: &Recommendation) -> String {
    if rec.premium_paying_term == 0 || rec.premium_paying_term == rec.policy_term {
        format!("{} years", rec.policy_term)
    } else {
        format!("{} years (pay for {})", rec.policy_term, rec.premium_paying_term)
    }
}

pub fn priority_class(priority: Priority) -> &'static str {
    match priority {
        Priority::High => "recommendation-card--high",
        Priority::Medium => "recommendation-card--medium",
        Priority::Low => "recommendation-card--low",
    }
}

/// Sum of the quoted premiums, each at its own frequency.
pub fn total_premium(items: &[Recommendation]) -> f64 {
    items.iter().map(|r| r.premium_amount).sum()
}

pub fn recommendation_count_label(count: usize) -> String {
    match count {
        1 => "1 recommendation".to_owned(),
        n => format!("{n} recommendations"),
    }
}
