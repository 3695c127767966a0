//! Customers page: every customer on record, with a quick filter.
//!
//! Each row links to that customer's needs analysis, which also puts the
//! customer in focus, and to their recommendations and edit form.

#[cfg(test)]
#[path = "customers_test.rs"]
mod customers_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::components::A;

use crate::components::status::{EmptyPanel, ErrorPanel, LoadingPanel};
use crate::net::types::Customer;
use crate::state::remote::{Phase, Remote, spawn_fetch};
use crate::state::ui::{MenuItem, edit_customer_path, needs_analysis_path, recommendations_path};
use crate::util::age::age_from_birth_date;
use crate::util::format::{MISSING, format_iso_date, format_optional_inr};

#[component]
pub fn CustomersPage() -> impl IntoView {
    let customers = RwSignal::new(Remote::<Vec<Customer>>::default());
    let query = RwSignal::new(String::new());

    let load = move || spawn_fetch(customers, crate::net::api::list_customers);
    Effect::new(move || load());
    let on_retry = Callback::new(move |()| load());

    view! {
        <section class="page customers-page">
            <header class="page__header">
                <h1>"Customers"</h1>
                <input
                    class="input page__search"
                    type="search"
                    placeholder="Filter by name or email"
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                />
                <A href=MenuItem::NewCustomer.path() attr:class="btn btn--primary">"+ New customer"</A>
            </header>
            {move || {
                let state = customers.get();
                match state.phase() {
                    Phase::Loading => view! { <LoadingPanel label="Loading customers..."/> }.into_any(),
                    Phase::Failed => {
                        view! { <ErrorPanel message=state.error_message() on_retry=on_retry/> }.into_any()
                    }
                    Phase::Ready => {
                        let all = state.data.unwrap_or_default();
                        let needle = query.get();
                        let rows: Vec<Customer> = all.into_iter().filter(|c| matches_query(c, &needle)).collect();
                        if rows.is_empty() {
                            return view! { <EmptyPanel message="No customers match."/> }.into_any();
                        }
                        view! { <CustomerTable rows=rows/> }.into_any()
                    }
                }
            }}
        </section>
    }
}

#[component]
fn CustomerTable(rows: Vec<Customer>) -> impl IntoView {
    view! {
        <table class="table">
            <thead>
                <tr>
                    <th>"Name"</th>
                    <th>"Email"</th>
                    <th>"Age"</th>
                    <th>"Occupation"</th>
                    <th>"Annual income"</th>
                    <th>"Added"</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                {rows
                    .into_iter()
                    .map(|c| {
                        let name = c.profile.name.clone();
                        let age = display_age(&c);
                        view! {
                            <tr class="table__row">
                                <td>
                                    <A href=needs_analysis_path(c.id)>{name}</A>
                                </td>
                                <td>{c.profile.email.clone()}</td>
                                <td>{age}</td>
                                <td>{c.profile.occupation.clone().unwrap_or_else(|| MISSING.to_owned())}</td>
                                <td>{format_optional_inr(c.profile.annual_income)}</td>
                                <td>{format_iso_date(c.created_at.as_deref())}</td>
                                <td>
                                    <A href=recommendations_path(c.id)>"Recommendations"</A>
                                    " "
                                    <A href=edit_customer_path(c.id)>"Edit"</A>
                                </td>
                            </tr>
                        }
                    })
                    .collect::<Vec<_>>()}
            </tbody>
        </table>
    }
}

/// Case-insensitive match on name or email; a blank query matches all.
pub fn matches_query(customer: &Customer, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    customer.profile.name.to_lowercase().contains(&needle) || customer.profile.email.to_lowercase().contains(&needle)
}

/// Age from the birth date when present, else the stored age.
pub fn display_age(customer: &Customer) -> String {
    customer
        .profile
        .date_of_birth
        .as_deref()
        .and_then(age_from_birth_date)
        .or(customer.profile.age)
        .map_or_else(|| MISSING.to_owned(), |age| age.to_string())
}
