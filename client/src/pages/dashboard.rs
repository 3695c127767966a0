//! Dashboard page: portfolio analytics for a selectable period.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the landing route. Metrics are fetched for the chosen reporting
//! window and refetched whenever the window changes. Customer insights
//! (risk, gender, insurer and sum-assured breakdowns) cover the whole book,
//! so they load once and fail or retry on their own. All figures are
//! computed by the backend.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::components::A;

use crate::components::metric_card::MetricCard;
use crate::components::status::{EmptyPanel, ErrorPanel, LoadingPanel};
use crate::net::types::{CustomerInsights, DashboardMetrics, ReportPeriod};
use crate::state::remote::{Phase, Remote, spawn_fetch};
use crate::state::ui::needs_analysis_path;
use crate::util::format::{format_inr, format_inr_compact, format_iso_date, format_percent, humanize_code};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let period = RwSignal::new(ReportPeriod::default());
    let metrics = RwSignal::new(Remote::<DashboardMetrics>::default());

    let load = move || {
        let selected = period.get_untracked();
        spawn_fetch(metrics, move || crate::net::api::fetch_dashboard_metrics(selected));
    };
    Effect::new(move || {
        period.track();
        load();
    });
    let on_retry = Callback::new(move |()| load());

    view! {
        <section class="page dashboard-page">
            <header class="page__header">
                <h1>"Dashboard"</h1>
                <label class="page__control">
                    "Period"
                    <select
                        class="select"
                        on:change=move |ev| {
                            if let Some(p) = ReportPeriod::parse(&event_target_value(&ev)) {
                                period.set(p);
                            }
                        }
                    >
                        {ReportPeriod::ALL
                            .into_iter()
                            .map(|p| {
                                view! {
                                    <option value=p.as_query() selected=move || period.get() == p>
                                        {p.label()}
                                    </option>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
            </header>
            {move || {
                let state = metrics.get();
                match state.phase() {
                    Phase::Loading => view! { <LoadingPanel label="Loading dashboard..."/> }.into_any(),
                    Phase::Failed => {
                        view! { <ErrorPanel message=state.error_message() on_retry=on_retry/> }.into_any()
                    }
                    Phase::Ready => match state.data {
                        Some(data) => view! { <DashboardContent metrics=data/> }.into_any(),
                        None => view! { <EmptyPanel message="No analytics yet."/> }.into_any(),
                    },
                }
            }}
            <InsightsSection/>
        </section>
    }
}

#[component]
fn InsightsSection() -> impl IntoView {
    let insights = RwSignal::new(Remote::<CustomerInsights>::default());
    let load = move || spawn_fetch(insights, crate::net::api::fetch_customer_insights);
    Effect::new(move || load());
    let on_retry = Callback::new(move |()| load());

    view! {
        <h2 class="page__subheading">"Customer insights"</h2>
        {move || {
            let state = insights.get();
            match state.phase() {
                Phase::Loading => view! { <LoadingPanel label="Loading customer insights..."/> }.into_any(),
                Phase::Failed => view! { <ErrorPanel message=state.error_message() on_retry=on_retry/> }.into_any(),
                Phase::Ready => match state.data {
                    Some(data) => view! { <InsightsContent insights=data/> }.into_any(),
                    None => view! { <EmptyPanel message="No customer insights yet."/> }.into_any(),
                },
            }
        }}
    }
}

#[component]
fn InsightsContent(insights: CustomerInsights) -> impl IntoView {
    let risk = count_rows(
        insights.risk_appetite_distribution.iter().map(|r| (group_label(r.risk_level.as_deref()), r.count)),
    );
    let gender =
        count_rows(insights.gender_distribution.iter().map(|g| (group_label(g.gender.as_deref()), g.count)));
    let insurers = count_rows(insights.top_insurers.iter().map(|i| (i.insurer.as_str(), i.count)));
    let sum_assured = sum_assured_by_age(&insights);

    view! {
        <div class="dashboard-page__grid">
            <div class="panel">
                <h2>"Risk appetite"</h2>
                <BarList rows=risk/>
            </div>
            <div class="panel">
                <h2>"Gender"</h2>
                <BarList rows=gender/>
            </div>
            <div class="panel">
                <h2>"Most recommended insurers"</h2>
                <BarList rows=insurers/>
            </div>
            <div class="panel">
                <h2>"Average sum assured by age"</h2>
                <dl class="facts">
                    {sum_assured
                        .into_iter()
                        .map(|(group, amount)| view! { <dt>{group}</dt> <dd>{amount}</dd> })
                        .collect::<Vec<_>>()}
                </dl>
            </div>
        </div>
    }
}

#[component]
fn DashboardContent(metrics: DashboardMetrics) -> impl IntoView {
    let cards = headline_cards(&metrics);
    let top_products = count_rows(metrics.top_products.iter().map(|p| (p.name.as_str(), p.count)));
    let age_groups =
        count_rows(metrics.customer_demographics.age_groups.iter().map(|g| (g.age_group.as_str(), g.count)));
    let monthly = count_rows(metrics.trends.monthly_customers.iter().map(|m| (m.month.as_str(), m.customers)));
    let performance = metrics.performance_metrics;
    let recent = metrics.recent_activity.recent_customers;

    view! {
        <div class="dashboard-page__cards">
            {cards
                .into_iter()
                .map(|(label, value)| view! { <MetricCard label=label value=value/> })
                .collect::<Vec<_>>()}
        </div>
        <div class="dashboard-page__grid">
            <div class="panel">
                <h2>"Top products"</h2>
                <BarList rows=top_products/>
            </div>
            <div class="panel">
                <h2>"Customers by age"</h2>
                <BarList rows=age_groups/>
            </div>
            <div class="panel">
                <h2>"New customers by month"</h2>
                <BarList rows=monthly/>
            </div>
            <div class="panel">
                <h2>"Activity"</h2>
                <dl class="facts">
                    <dt>"Needs analyses completed"</dt>
                    <dd>{performance.needs_analysis_completed}</dd>
                    <dt>"Recommendations generated"</dt>
                    <dd>{performance.recommendations_generated}</dd>
                    <dt>"PDF reports created"</dt>
                    <dd>{performance.pdf_reports_created}</dd>
                </dl>
            </div>
            <div class="panel">
                <h2>"Recent customers"</h2>
                <ul class="list">
                    {recent
                        .into_iter()
                        .map(|c| {
                            view! {
                                <li class="list__row">
                                    <A href=needs_analysis_path(c.id)>{c.name}</A>
                                    <span class="list__meta">{format_iso_date(c.created_at.as_deref())}</span>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ul>
            </div>
        </div>
    }
}

/// Horizontal bars scaled against the largest count.
#[component]
fn BarList(rows: Vec<CountRow>) -> impl IntoView {
    if rows.is_empty() {
        return view! { <p class="panel__empty">"No data for this period."</p> }.into_any();
    }
    view! {
        <ul class="bar-list">
            {rows
                .into_iter()
                .map(|CountRow { label, count, width_percent }| {
                    let width = format!("width: {width_percent:.1}%");
                    view! {
                        <li class="bar-list__row">
                            <span class="bar-list__label">{label}</span>
                            <span class="bar-list__track">
                                <span class="bar-list__bar" style=width></span>
                            </span>
                            <span class="bar-list__count">{count}</span>
                        </li>
                    }
                })
                .collect::<Vec<_>>()}
        </ul>
    }
    .into_any()
}

/// Headline numbers in display order.
pub fn headline_cards(metrics: &DashboardMetrics) -> Vec<(&'static str, String)> {
    vec![
        ("Total customers", metrics.total_customers.to_string()),
        ("Recommendations", metrics.total_recommendations.to_string()),
        ("Average premium", format_inr(metrics.average_premium)),
        ("Conversion rate", format_percent(metrics.conversion_rate, 1)),
    ]
}

/// One labelled bar.
#[derive(Clone, Debug, PartialEq)]
pub struct CountRow {
    pub label: String,
    pub count: u64,
    pub width_percent: f64,
}

/// Bars for `(label, count)` pairs, scaled against the largest count.
pub fn count_rows<L: Into<String>>(pairs: impl IntoIterator<Item = (L, u64)>) -> Vec<CountRow> {
    let pairs: Vec<(L, u64)> = pairs.into_iter().collect();
    let max = pairs.iter().map(|(_, count)| *count).max().unwrap_or(0);
    pairs
        .into_iter()
        .map(|(label, count)| CountRow { label: label.into(), count, width_percent: bar_width_percent(count, max) })
        .collect()
}

/// Label for a grouped backend code; customers without one group under null.
pub fn group_label(code: Option<&str>) -> String {
    match code.map(str::trim).filter(|c| !c.is_empty()) {
        Some(code) => humanize_code(code),
        None => "Not recorded".to_owned(),
    }
}

/// `(age group, average sum assured)` rows in backend order.
pub fn sum_assured_by_age(insights: &CustomerInsights) -> Vec<(String, String)> {
    insights
        .avg_sum_assured_by_age
        .iter()
        .map(|row| (row.age_group.clone(), format_inr_compact(row.avg_sum_assured)))
        .collect()
}

/// Bar length as a share of `max`, in percent.
#[allow(clippy::cast_precision_loss)]
pub fn bar_width_percent(count: u64, max: u64) -> f64 {
    if max == 0 {
        return 0.0;
    }
    (count as f64 / max as f64 * 100.0).clamp(0.0, 100.0)
}
