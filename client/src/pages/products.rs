//! Products page: catalogue, selection and side-by-side comparison.
//!
//! SYSTEM CONTEXT
//! ==============
//! The catalogue is filtered server-side by product type and insurer. The
//! advisor ticks two to four products, adjusts the customer profile the
//! backend prices against, and runs the comparison. Rows, summary and
//! advisory notes are rendered exactly as the backend returns them, and the
//! same request can be downloaded as a PDF.

#[cfg(test)]
#[path = "products_test.rs"]
mod products_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::pdf_button::ComparisonPdfButton;
use crate::components::status::{EmptyPanel, ErrorPanel, LoadingPanel};
use crate::net::types::{
    ComparisonRequest, ComparisonResponse, ComparisonRow, Gender, Insurer, Product, ProductFilter, RecordId,
    RiskAppetite,
};
use crate::state::comparison::{ComparisonSelection, ComparisonSettings, MAX_COMPARE, PREMIUM_FREQUENCIES, frequency_label};
use crate::state::remote::{Phase, Remote, spawn_fetch};
use crate::util::format::{
    MISSING, format_inr, format_inr_compact, format_optional_inr, format_optional_percent, format_rating,
    humanize_code,
};

/// Product categories the backend catalogues.
pub const PRODUCT_TYPES: [&str; 9] = [
    "term_life",
    "endowment",
    "money_back",
    "whole_life",
    "ulip",
    "child_plans",
    "pension_plans",
    "critical_illness",
    "disability",
];

#[component]
pub fn ProductsPage() -> impl IntoView {
    let filter = RwSignal::new(ProductFilter::default());
    let products = RwSignal::new(Remote::<Vec<Product>>::default());
    let insurers = RwSignal::new(Remote::<Vec<Insurer>>::default());
    let selection = RwSignal::new(ComparisonSelection::default());
    let settings = RwSignal::new(ComparisonSettings::default());
    let comparison = RwSignal::new(Remote::<ComparisonResponse>::default());
    let compared = RwSignal::new(false);
    let last_request = RwSignal::new(None::<ComparisonRequest>);
    let notice = RwSignal::new(None::<String>);

    let load_products = move || {
        let current = filter.get_untracked();
        spawn_fetch(products, move || async move { crate::net::api::list_products(&current).await });
    };
    Effect::new(move || {
        filter.track();
        load_products();
    });
    Effect::new(move || spawn_fetch(insurers, crate::net::api::list_insurers));
    let on_retry_products = Callback::new(move |()| load_products());

    let on_toggle = Callback::new(move |id: RecordId| {
        let accepted = selection.try_update(|s| s.toggle(id)).unwrap_or(false);
        notice.set((!accepted).then(|| format!("You can compare up to {MAX_COMPARE} products at a time.")));
    });

    let run_compare = move || {
        notice.set(None);
        let request = match settings.with_untracked(|s| selection.with_untracked(|sel| s.build_request(sel))) {
            Ok(request) => request,
            Err(err) => {
                notice.set(Some(err.to_string()));
                return;
            }
        };
        compared.set(true);
        last_request.set(Some(request.clone()));
        spawn_fetch(comparison, move || async move { crate::net::api::compare_products(&request).await });
    };
    let on_retry_compare = Callback::new(move |()| run_compare());

    let insurer_options = move || insurers.with(|s| s.data.clone().unwrap_or_default());

    view! {
        <section class="page products-page">
            <header class="page__header">
                <h1>"Compare Products"</h1>
                <label class="page__control">
                    "Type"
                    <select
                        class="select"
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            filter.update(|f| f.product_type = (!value.is_empty()).then_some(value));
                        }
                    >
                        <option value="">"All types"</option>
                        {PRODUCT_TYPES
                            .into_iter()
                            .map(|t| view! { <option value=t>{humanize_code(t)}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
                <label class="page__control">
                    "Insurer"
                    <select
                        class="select"
                        on:change=move |ev| {
                            let id = event_target_value(&ev).parse::<RecordId>().ok();
                            filter.update(|f| f.insurer_id = id);
                        }
                    >
                        <option value="">"All insurers"</option>
                        {move || {
                            insurer_options()
                                .into_iter()
                                .map(|i| view! { <option value=i.id.to_string()>{i.name}</option> })
                                .collect::<Vec<_>>()
                        }}
                    </select>
                </label>
            </header>

            {move || {
                let state = products.get();
                match state.phase() {
                    Phase::Loading => view! { <LoadingPanel label="Loading products..."/> }.into_any(),
                    Phase::Failed => {
                        view! { <ErrorPanel message=state.error_message() on_retry=on_retry_products/> }
                            .into_any()
                    }
                    Phase::Ready => {
                        let rows = state.data.unwrap_or_default();
                        if rows.is_empty() {
                            return view! { <EmptyPanel message="No products match these filters."/> }.into_any();
                        }
                        view! { <ProductCatalogue products=rows selection=selection on_toggle=on_toggle/> }
                            .into_any()
                    }
                }
            }}

            <SettingsPanel settings=settings/>

            <div class="panel actions">
                <button
                    class="btn btn--primary"
                    disabled=move || {
                        !selection.with(ComparisonSelection::can_compare) || comparison.with(|c| c.loading)
                    }
                    on:click=move |_| run_compare()
                >
                    {move || format!("Compare ({} selected)", selection.with(ComparisonSelection::len))}
                </button>
                <button
                    class="btn"
                    disabled=move || selection.with(ComparisonSelection::is_empty)
                    on:click=move |_| selection.update(ComparisonSelection::clear)
                >
                    "Clear selection"
                </button>
                <span class="actions__hint">
                    {move || notice.get().or_else(|| selection.with(ComparisonSelection::blocked_reason))}
                </span>
            </div>

            <Show when=move || compared.get()>
                {move || {
                    let state = comparison.get();
                    match state.phase() {
                        Phase::Loading => view! { <LoadingPanel label="Comparing products..."/> }.into_any(),
                        Phase::Failed => {
                            view! { <ErrorPanel message=state.error_message() on_retry=on_retry_compare/> }
                                .into_any()
                        }
                        Phase::Ready => match state.data {
                            Some(result) => {
                                view! { <ComparisonResult result=result request=last_request/> }.into_any()
                            }
                            None => view! { <EmptyPanel message="No comparison yet."/> }.into_any(),
                        },
                    }
                }}
            </Show>
        </section>
    }
}

#[component]
fn ProductCatalogue(
    products: Vec<Product>,
    selection: RwSignal<ComparisonSelection>,
    on_toggle: Callback<RecordId>,
) -> impl IntoView {
    view! {
        <table class="table products-page__catalogue">
            <thead>
                <tr>
                    <th></th>
                    <th>"Product"</th>
                    <th>"Insurer"</th>
                    <th>"Type"</th>
                    <th>"Entry age"</th>
                    <th>"Sum assured"</th>
                    <th>"Premium from"</th>
                </tr>
            </thead>
            <tbody>
                {products
                    .into_iter()
                    .map(|p| {
                        let id = p.id;
                        view! {
                            <tr class="table__row" class:table__row--selected=move || selection.with(|s| s.contains(id))>
                                <td>
                                    <input
                                        type="checkbox"
                                        prop:checked=move || selection.with(|s| s.contains(id))
                                        on:change=move |_| on_toggle.run(id)
                                    />
                                </td>
                                <td>{p.name.clone()}</td>
                                <td>{p.insurer_name().map_or_else(|| MISSING.to_owned(), ToOwned::to_owned)}</td>
                                <td>{humanize_code(&p.product_type)}</td>
                                <td>{age_range(&p)}</td>
                                <td>{sum_assured_range(&p)}</td>
                                <td>{format_optional_inr(p.min_premium)}</td>
                            </tr>
                        }
                    })
                    .collect::<Vec<_>>()}
            </tbody>
        </table>
    }
}

#[component]
fn SettingsPanel(settings: RwSignal<ComparisonSettings>) -> impl IntoView {
    view! {
        <fieldset class="panel form__group products-page__settings">
            <legend>"Customer profile"</legend>
            <label class="form__field">
                "Age"
                <input
                    class="input"
                    type="number"
                    prop:value=move || settings.with(|s| s.age.clone())
                    on:input=move |ev| {
                        let v = event_target_value(&ev);
                        settings.update(|s| s.age = v);
                    }
                />
            </label>
            <label class="form__field">
                "Gender"
                <select
                    class="select"
                    on:change=move |ev| {
                        let v = event_target_value(&ev);
                        settings.update(|s| s.gender = v);
                    }
                >
                    {Gender::ALL
                        .into_iter()
                        .map(|g| {
                            view! {
                                <option value=g.as_str() selected=move || settings.with(|s| s.gender == g.as_str())>
                                    {g.label()}
                                </option>
                            }
                        })
                        .collect::<Vec<_>>()}
                </select>
            </label>
            <label class="form__field">
                "Annual income (₹)"
                <input
                    class="input"
                    prop:value=move || settings.with(|s| s.annual_income.clone())
                    on:input=move |ev| {
                        let v = event_target_value(&ev);
                        settings.update(|s| s.annual_income = v);
                    }
                />
            </label>
            <label class="form__field">
                "Risk appetite"
                <select
                    class="select"
                    on:change=move |ev| {
                        let v = event_target_value(&ev);
                        settings.update(|s| s.risk_appetite = v);
                    }
                >
                    {RiskAppetite::ALL
                        .into_iter()
                        .map(|r| {
                            view! {
                                <option
                                    value=r.as_str()
                                    selected=move || settings.with(|s| s.risk_appetite == r.as_str())
                                >
                                    {r.label()}
                                </option>
                            }
                        })
                        .collect::<Vec<_>>()}
                </select>
            </label>
            <label class="form__field">
                "Sum assured (₹)"
                <input
                    class="input"
                    prop:value=move || settings.with(|s| s.sum_assured.clone())
                    on:input=move |ev| {
                        let v = event_target_value(&ev);
                        settings.update(|s| s.sum_assured = v);
                    }
                />
            </label>
            <label class="form__field">
                "Policy term (years)"
                <input
                    class="input"
                    type="number"
                    prop:value=move || settings.with(|s| s.policy_term.clone())
                    on:input=move |ev| {
                        let v = event_target_value(&ev);
                        settings.update(|s| s.policy_term = v);
                    }
                />
            </label>
            <label class="form__field">
                "Premium frequency"
                <select
                    class="select"
                    on:change=move |ev| {
                        let v = event_target_value(&ev);
                        settings.update(|s| s.premium_frequency = v);
                    }
                >
                    {PREMIUM_FREQUENCIES
                        .into_iter()
                        .map(|f| {
                            view! {
                                <option value=f selected=move || settings.with(|s| s.premium_frequency == f)>
                                    {frequency_label(f)}
                                </option>
                            }
                        })
                        .collect::<Vec<_>>()}
                </select>
            </label>
        </fieldset>
    }
}

#[component]
fn ComparisonResult(result: ComparisonResponse, request: RwSignal<Option<ComparisonRequest>>) -> impl IntoView {
    let summary = summary_lines(&result);
    let rows = result.comparison_data;
    let notes = result.recommendations;
    let has_notes = !notes.is_empty();

    view! {
        <div class="panel">
            <h2>"Comparison"</h2>
            <table class="table comparison-table">
                <thead>
                    <tr>
                        <th>"Product"</th>
                        <th>"Insurer"</th>
                        <th>"Premium"</th>
                        <th>"Per ₹1,000"</th>
                        <th>"Claim settlement"</th>
                        <th>"Rating"</th>
                        <th>"Score"</th>
                        <th>"Key features"</th>
                    </tr>
                </thead>
                <tbody>
                    {rows
                        .into_iter()
                        .map(|row| {
                            view! {
                                <tr class="table__row">
                                    <td>
                                        {row.product_name.clone()}
                                        <span class="table__sub">{humanize_code(&row.product_type)}</span>
                                    </td>
                                    <td>{row.insurer_name.clone()}</td>
                                    <td>{format_inr(row.premium_amount)}</td>
                                    <td>{format!("₹{:.2}", row.premium_rate_per_1000)}</td>
                                    <td>{format_optional_percent(row.claim_settlement_ratio, 1)}</td>
                                    <td>{format_rating(row.rating)}</td>
                                    <td>{format_score(row.recommendation_score)}</td>
                                    <td>{feature_summary(&row)}</td>
                                </tr>
                            }
                        })
                        .collect::<Vec<_>>()}
                </tbody>
            </table>
        </div>
        <div class="panel">
            <h2>"Summary"</h2>
            <dl class="facts">
                {summary
                    .into_iter()
                    .map(|(label, value)| view! { <dt>{label}</dt> <dd>{value}</dd> })
                    .collect::<Vec<_>>()}
            </dl>
            {has_notes.then(|| view! { <h3>"Advisory notes"</h3> })}
            <ul class="list">
                {notes.into_iter().map(|note| view! { <li>{note}</li> }).collect::<Vec<_>>()}
            </ul>
            <ComparisonPdfButton request=request/>
        </div>
    }
}

/// Entry age window, e.g. `18–65`.
pub fn age_range(product: &Product) -> String {
    match (product.min_age, product.max_age) {
        (Some(min), Some(max)) => format!("{min}–{max}"),
        (Some(min), None) => format!("{min}+"),
        (None, Some(max)) => format!("up to {max}"),
        (None, None) => MISSING.to_owned(),
    }
}

pub fn sum_assured_range(product: &Product) -> String {
    match (product.min_sum_assured, product.max_sum_assured) {
        (Some(min), Some(max)) => format!("{} – {}", format_inr_compact(min), format_inr_compact(max)),
        (Some(min), None) => format!("from {}", format_inr_compact(min)),
        (None, Some(max)) => format!("up to {}", format_inr_compact(max)),
        (None, None) => MISSING.to_owned(),
    }
}

/// Backend score out of 100.
pub fn format_score(score: f64) -> String {
    if score.is_finite() { format!("{score:.1}") } else { MISSING.to_owned() }
}

/// First three features, comma-joined.
pub fn feature_summary(row: &ComparisonRow) -> String {
    if row.features.is_empty() {
        return MISSING.to_owned();
    }
    row.features.iter().take(3).cloned().collect::<Vec<_>>().join(", ")
}

pub fn summary_lines(result: &ComparisonResponse) -> Vec<(&'static str, String)> {
    let summary = &result.summary;
    let text = |v: &Option<String>| v.clone().unwrap_or_else(|| MISSING.to_owned());
    vec![
        ("Products compared", summary.total_products.to_string()),
        ("Average premium", format_optional_inr(summary.average_premium)),
        ("Lowest premium", format_optional_inr(summary.min_premium)),
        ("Highest premium", format_optional_inr(summary.max_premium)),
        ("Best value", text(&summary.best_value_product)),
        ("Lowest cost", text(&summary.lowest_premium_product)),
    ]
}
