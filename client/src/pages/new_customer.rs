//! New customer page: intake form that creates a customer record.
//!
//! SYSTEM CONTEXT
//! ==============
//! The draft is validated locally for shape only, posted once, and on success
//! the advisor lands on the new customer's needs analysis. The submit button
//! stays disabled while the request is in flight so one click creates at
//! most one customer.

#[cfg(test)]
#[path = "new_customer_test.rs"]
mod new_customer_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use time::Date;

use crate::components::customer_fields::CustomerFields;
use crate::net::types::{Customer, NewCustomer};
use crate::state::action::ActionState;
use crate::state::customer_form::CustomerDraft;
use crate::state::ui::{UiState, needs_analysis_path};
use crate::util::age::today;

/// Route opened after a customer is created.
pub fn created_customer_route(customer: &Customer) -> String {
    needs_analysis_path(customer.id)
}

pub fn submit_label(busy: bool) -> &'static str {
    if busy { "Saving..." } else { "Create customer" }
}

/// Validate the draft and claim the submit. `None` means nothing is sent:
/// either a request is already in flight or the draft is invalid.
pub fn begin_create(action: &mut ActionState, draft: &CustomerDraft, today: Date) -> Option<NewCustomer> {
    action.begin_with(|| draft.validate(today))
}

#[component]
pub fn NewCustomerPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();
    let draft = RwSignal::new(CustomerDraft::default());
    let action = RwSignal::new(ActionState::default());
    let busy = move || action.with(|a| a.busy);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let payload = draft.with_untracked(|d| action.try_update(|a| begin_create(a, d, today())).flatten());
        let Some(payload) = payload else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::create_customer(&payload).await {
                    Ok(customer) => {
                        leptos::logging::log!("created customer {}", customer.id);
                        ui.update(|u| u.select_customer(customer.id, customer.profile.name.clone()));
                        navigate(&created_customer_route(&customer), leptos_router::NavigateOptions::default());
                    }
                    Err(err) => {
                        leptos::logging::warn!("create customer failed: {err}");
                        action.update(|a| a.finish(Err(err.user_message())));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (payload, &navigate, ui);
            action.update(|a| a.finish(Ok(())));
        }
    };

    view! {
        <section class="page new-customer-page">
            <header class="page__header">
                <h1>"New Customer"</h1>
            </header>
            <form class="form panel" on:submit=on_submit>
                <CustomerFields draft=draft/>
                <Show when=move || action.with(|a| a.error.is_some())>
                    <p class="form__error" role="alert">{move || action.with(|a| a.error.clone()).unwrap_or_default()}</p>
                </Show>
                <div class="form__actions">
                    <button class="btn btn--primary" type="submit" disabled=busy>
                        {move || submit_label(busy())}
                    </button>
                </div>
            </form>
        </section>
    }
}
