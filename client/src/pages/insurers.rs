//! Insurers page: reference table of every insurer the backend knows.

#[cfg(test)]
#[path = "insurers_test.rs"]
mod insurers_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::status::{EmptyPanel, ErrorPanel, LoadingPanel};
use crate::net::types::Insurer;
use crate::state::remote::{Phase, Remote, spawn_fetch};
use crate::util::format::{MISSING, format_optional_percent, format_rating};

#[component]
pub fn InsurersPage() -> impl IntoView {
    let insurers = RwSignal::new(Remote::<Vec<Insurer>>::default());
    let load = move || spawn_fetch(insurers, crate::net::api::list_insurers);
    Effect::new(move || load());
    let on_retry = Callback::new(move |()| load());

    view! {
        <section class="page insurers-page">
            <header class="page__header">
                <h1>"Insurers"</h1>
            </header>
            {move || {
                let state = insurers.get();
                match state.phase() {
                    Phase::Loading => view! { <LoadingPanel label="Loading insurers..."/> }.into_any(),
                    Phase::Failed => {
                        view! { <ErrorPanel message=state.error_message() on_retry=on_retry/> }.into_any()
                    }
                    Phase::Ready => {
                        let rows = sort_by_name(state.data.unwrap_or_default());
                        if rows.is_empty() {
                            return view! { <EmptyPanel message="No insurers on record."/> }.into_any();
                        }
                        view! { <InsurerTable rows=rows/> }.into_any()
                    }
                }
            }}
        </section>
    }
}

#[component]
fn InsurerTable(rows: Vec<Insurer>) -> impl IntoView {
    view! {
        <table class="table">
            <thead>
                <tr>
                    <th>"Insurer"</th>
                    <th>"Claim settlement"</th>
                    <th>"Solvency"</th>
                    <th>"Rating"</th>
                    <th>"Established"</th>
                    <th>"Headquarters"</th>
                    <th>"Customer care"</th>
                </tr>
            </thead>
            <tbody>
                {rows
                    .into_iter()
                    .map(|i| {
                        let website = i.website.clone();
                        view! {
                            <tr class="table__row">
                                <td>
                                    {match website {
                                        Some(url) => {
                                            view! {
                                                <a href=url target="_blank" rel="noopener noreferrer">
                                                    {i.name.clone()}
                                                </a>
                                            }
                                                .into_any()
                                        }
                                        None => i.name.clone().into_any(),
                                    }}
                                    <span class="table__sub">{registration_label(&i)}</span>
                                </td>
                                <td>{format_optional_percent(i.claim_settlement_ratio, 1)}</td>
                                <td>{solvency_label(i.solvency_ratio)}</td>
                                <td>{rating_label(&i)}</td>
                                <td>{i.established_year.map_or_else(|| MISSING.to_owned(), |y| y.to_string())}</td>
                                <td>{i.headquarters.clone().unwrap_or_else(|| MISSING.to_owned())}</td>
                                <td>{i.customer_care.clone().unwrap_or_else(|| MISSING.to_owned())}</td>
                            </tr>
                        }
                    })
                    .collect::<Vec<_>>()}
            </tbody>
        </table>
    }
}

pub fn sort_by_name(mut rows: Vec<Insurer>) -> Vec<Insurer> {
    rows.sort_by_key(|i| i.name.to_lowercase());
    rows
}

/// Solvency is a plain ratio (regulatory minimum 1.5), not a percentage.
pub fn solvency_label(ratio: Option<f64>) -> String {
    ratio.map_or_else(|| MISSING.to_owned(), |r| format!("{r:.2}"))
}

/// Rating with the issuing agency, e.g. `4.5 / 5 (CRISIL)`.
pub fn rating_label(insurer: &Insurer) -> String {
    let rating = format_rating(insurer.rating);
    match insurer.rating_agency.as_deref().filter(|a| !a.is_empty()) {
        Some(agency) if insurer.rating.is_some() => format!("{rating} ({agency})"),
        _ => rating,
    }
}

pub fn registration_label(insurer: &Insurer) -> String {
    insurer
        .irda_registration
        .as_deref()
        .map_or_else(String::new, |reg| format!("IRDAI reg. {reg}"))
}
