//! Market page: latest per-insurer figures, macro trends and insights.
//!
//! The three sections load independently so one failing endpoint does not
//! hide the others. Picking an insurer in the latest table loads its full
//! snapshot history into a fourth section.

#[cfg(test)]
#[path = "market_test.rs"]
mod market_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::metric_card::MetricCard;
use crate::components::status::{EmptyPanel, ErrorPanel, LoadingPanel};
use crate::net::types::{MarketData, MarketInsights, MarketTrends, RecordId};
use crate::state::remote::{Phase, Remote, spawn_fetch};
use crate::util::format::{MISSING, format_iso_date, format_optional_percent, format_rating, format_trend};

#[component]
pub fn MarketPage() -> impl IntoView {
    let latest = RwSignal::new(Remote::<Vec<MarketData>>::default());
    let trends = RwSignal::new(Remote::<MarketTrends>::default());
    let insights = RwSignal::new(Remote::<MarketInsights>::default());
    let selected = RwSignal::new(None::<(RecordId, String)>);
    let history = RwSignal::new(Remote::<Vec<MarketData>>::default());

    let load_latest = move || spawn_fetch(latest, crate::net::api::fetch_latest_market_data);
    let load_trends = move || spawn_fetch(trends, crate::net::api::fetch_market_trends);
    let load_insights = move || spawn_fetch(insights, crate::net::api::fetch_market_insights);
    Effect::new(move || {
        load_latest();
        load_trends();
        load_insights();
    });
    let retry_latest = Callback::new(move |()| load_latest());
    let retry_trends = Callback::new(move |()| load_trends());
    let retry_insights = Callback::new(move |()| load_insights());

    let load_history = move || {
        if let Some((insurer_id, _)) = selected.get_untracked() {
            spawn_fetch(history, move || crate::net::api::fetch_insurer_market_history(insurer_id));
        }
    };
    Effect::new(move || {
        selected.track();
        load_history();
    });
    let retry_history = Callback::new(move |()| load_history());
    let on_select = Callback::new(move |pick: (RecordId, String)| selected.set(Some(pick)));

    view! {
        <section class="page market-page">
            <header class="page__header">
                <h1>"Market Data"</h1>
            </header>
            {move || {
                let state = trends.get();
                match state.phase() {
                    Phase::Loading => view! { <LoadingPanel label="Loading market trends..."/> }.into_any(),
                    Phase::Failed => {
                        view! { <ErrorPanel message=state.error_message() on_retry=retry_trends/> }.into_any()
                    }
                    Phase::Ready => match state.data {
                        Some(data) => view! { <TrendsPanel trends=data/> }.into_any(),
                        None => view! { <EmptyPanel message="No trend data."/> }.into_any(),
                    },
                }
            }}
            {move || {
                let state = latest.get();
                match state.phase() {
                    Phase::Loading => view! { <LoadingPanel label="Loading insurer figures..."/> }.into_any(),
                    Phase::Failed => {
                        view! { <ErrorPanel message=state.error_message() on_retry=retry_latest/> }.into_any()
                    }
                    Phase::Ready => {
                        let rows = sort_by_market_share(state.data.unwrap_or_default());
                        if rows.is_empty() {
                            return view! { <EmptyPanel message="No market data recorded yet."/> }.into_any();
                        }
                        view! { <LatestTable rows=rows on_select=on_select/> }.into_any()
                    }
                }
            }}
            {move || {
                let (_, name) = selected.get()?;
                let state = history.get();
                Some(match state.phase() {
                    Phase::Loading => view! { <LoadingPanel label="Loading insurer history..."/> }.into_any(),
                    Phase::Failed => {
                        view! { <ErrorPanel message=state.error_message() on_retry=retry_history/> }.into_any()
                    }
                    Phase::Ready => {
                        let rows = newest_first(state.data.unwrap_or_default());
                        view! { <HistoryPanel name=name rows=rows/> }.into_any()
                    }
                })
            }}
            {move || {
                let state = insights.get();
                match state.phase() {
                    Phase::Loading => view! { <LoadingPanel label="Loading insights..."/> }.into_any(),
                    Phase::Failed => {
                        view! { <ErrorPanel message=state.error_message() on_retry=retry_insights/> }.into_any()
                    }
                    Phase::Ready => match state.data {
                        Some(data) => view! { <InsightsPanel insights=data/> }.into_any(),
                        None => view! { <EmptyPanel message="No insights."/> }.into_any(),
                    },
                }
            }}
        </section>
    }
}

#[component]
fn TrendsPanel(trends: MarketTrends) -> impl IntoView {
    view! {
        <div class="dashboard-page__cards">
            <MetricCard label="Inflation" value=format_trend(trends.inflation_trend)/>
            <MetricCard label="Repo rate" value=format_trend(trends.repo_rate_trend)/>
            <MetricCard label="GDP growth" value=format_trend(trends.gdp_growth_trend)/>
            <MetricCard label="Market cap" value=format_trend(trends.market_cap_trend)/>
        </div>
        <div class="panel">
            <h2>"Top performers"</h2>
            <TextList items=trends.top_performers/>
            <h2>"Market notes"</h2>
            <TextList items=trends.market_insights/>
        </div>
    }
}

#[component]
fn LatestTable(rows: Vec<MarketData>, on_select: Callback<(RecordId, String)>) -> impl IntoView {
    view! {
        <div class="panel">
            <h2>"Insurers"</h2>
            <table class="table">
                <thead>
                    <tr>
                        <th>"Insurer"</th>
                        <th>"Claim settlement"</th>
                        <th>"Rating"</th>
                        <th>"Market share"</th>
                        <th>"Premium growth"</th>
                        <th>"As of"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {rows
                        .into_iter()
                        .map(|row| {
                            let label = insurer_label(&row);
                            let pick = (row.insurer_id, label.clone());
                            view! {
                                <tr class="table__row">
                                    <td>{label}</td>
                                    <td>{format_optional_percent(row.claim_settlement_ratio, 1)}</td>
                                    <td>{format_rating(row.rating)}</td>
                                    <td>{format_optional_percent(row.market_share, 1)}</td>
                                    <td>{format_trend(row.premium_growth)}</td>
                                    <td>{format_iso_date(row.date.as_deref())}</td>
                                    <td>
                                        <button class="btn btn--link" on:click=move |_| on_select.run(pick.clone())>
                                            "History"
                                        </button>
                                    </td>
                                </tr>
                            }
                        })
                        .collect::<Vec<_>>()}
                </tbody>
            </table>
        </div>
    }
}

#[component]
fn HistoryPanel(name: String, rows: Vec<MarketData>) -> impl IntoView {
    let change = format_trend(market_share_change(&rows));
    let empty = rows.is_empty();
    view! {
        <div class="panel market-page__history">
            <h2>{format!("{name}: history")}</h2>
            <p class="list__meta">{format!("Market share change over the period: {change}")}</p>
            <Show when=move || empty>
                <p class="panel__empty">"No snapshots recorded for this insurer."</p>
            </Show>
            <table class="table">
                <thead>
                    <tr>
                        <th>"Date"</th>
                        <th>"Claim settlement"</th>
                        <th>"Rating"</th>
                        <th>"Market share"</th>
                        <th>"Premium growth"</th>
                    </tr>
                </thead>
                <tbody>
                    {rows
                        .into_iter()
                        .map(|row| {
                            view! {
                                <tr class="table__row">
                                    <td>{format_iso_date(row.date.as_deref())}</td>
                                    <td>{format_optional_percent(row.claim_settlement_ratio, 1)}</td>
                                    <td>{format_rating(row.rating)}</td>
                                    <td>{format_optional_percent(row.market_share, 1)}</td>
                                    <td>{format_trend(row.premium_growth)}</td>
                                </tr>
                            }
                        })
                        .collect::<Vec<_>>()}
                </tbody>
            </table>
        </div>
    }
}

#[component]
fn InsightsPanel(insights: MarketInsights) -> impl IntoView {
    view! {
        <div class="panel market-page__insights">
            <h2>"Key insights"</h2>
            <TextList items=insights.key_insights/>
            <h2>"Recommendations"</h2>
            <TextList items=insights.recommendations/>
            <h2>"Risk factors"</h2>
            <TextList items=insights.risk_factors/>
        </div>
    }
}

#[component]
fn TextList(items: Vec<String>) -> impl IntoView {
    if items.is_empty() {
        return view! { <p class="panel__empty">{MISSING}</p> }.into_any();
    }
    view! { <ul class="list">{items.into_iter().map(|item| view! { <li>{item}</li> }).collect::<Vec<_>>()}</ul> }
        .into_any()
}

/// Insurer name when embedded, else the id.
pub fn insurer_label(row: &MarketData) -> String {
    row.insurer.as_ref().map_or_else(|| format!("Insurer #{}", row.insurer_id), |i| i.name.clone())
}

/// Largest market share first; rows without a share go last.
pub fn sort_by_market_share(mut rows: Vec<MarketData>) -> Vec<MarketData> {
    rows.sort_by(|a, b| {
        let a = a.market_share.unwrap_or(f64::NEG_INFINITY);
        let b = b.market_share.unwrap_or(f64::NEG_INFINITY);
        b.total_cmp(&a)
    });
    rows
}

/// Snapshots ordered newest first; undated rows go last.
pub fn newest_first(mut rows: Vec<MarketData>) -> Vec<MarketData> {
    rows.sort_by(|a, b| b.date.cmp(&a.date));
    rows
}

/// Newest minus oldest market share across dated snapshots, in points.
pub fn market_share_change(newest_first: &[MarketData]) -> Option<f64> {
    let mut shares = newest_first.iter().filter_map(|r| r.market_share);
    let newest = shares.next()?;
    let oldest = shares.last()?;
    Some(newest - oldest)
}
