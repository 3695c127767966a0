//! Edit customer page: updates the contact, financial and goal fields of a
//! stored customer.
//!
//! Email, date of birth and gender are shown but locked; the backend does not
//! accept them on update. A saved edit does not rerun the needs analysis.

#[cfg(test)]
#[path = "edit_customer_test.rs"]
mod edit_customer_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::customer_fields::CustomerFields;
use crate::components::status::{ErrorPanel, LoadingPanel};
use crate::net::types::{Customer, CustomerUpdate};
use crate::state::action::ActionState;
use crate::state::customer_form::CustomerDraft;
use crate::state::remote::{Phase, Remote, spawn_fetch};
use crate::state::ui::{UiState, needs_analysis_path, parse_customer_id};

pub fn save_label(busy: bool) -> &'static str {
    if busy { "Saving..." } else { "Save changes" }
}

/// Validate the draft and claim the save; `None` means nothing is sent.
pub fn begin_update(action: &mut ActionState, draft: &CustomerDraft) -> Option<CustomerUpdate> {
    action.begin_with(|| draft.validate_update())
}

#[component]
pub fn EditCustomerPage() -> impl IntoView {
    let params = use_params_map();
    let customer_id = Memo::new(move |_| params.with(|p| parse_customer_id(p.get("id").as_deref())));
    let state = RwSignal::new(Remote::<Customer>::default());

    let load = move || {
        let Some(id) = customer_id.get_untracked() else {
            state.update(|s| s.fail("Unknown customer."));
            return;
        };
        spawn_fetch(state, move || crate::net::api::fetch_customer(id));
    };
    Effect::new(move || {
        customer_id.track();
        load();
    });
    let on_retry = Callback::new(move |()| load());

    view! {
        <section class="page edit-customer-page">
            <header class="page__header">
                <h1>"Edit Customer"</h1>
            </header>
            {move || {
                let current = state.get();
                match (current.phase(), current.data.clone()) {
                    (Phase::Ready, Some(customer)) => view! { <EditForm customer=customer/> }.into_any(),
                    (Phase::Failed, _) | (Phase::Ready, None) => {
                        view! { <ErrorPanel message=current.error_message() on_retry=on_retry/> }.into_any()
                    }
                    (Phase::Loading, _) => view! { <LoadingPanel label="Loading customer..."/> }.into_any(),
                }
            }}
        </section>
    }
}

#[component]
fn EditForm(customer: Customer) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();
    let customer_id = customer.id;
    let draft = RwSignal::new(CustomerDraft::from_customer(&customer));
    let action = RwSignal::new(ActionState::default());
    let busy = move || action.with(|a| a.busy);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let update = draft.with_untracked(|d| action.try_update(|a| begin_update(a, d)).flatten());
        let Some(update) = update else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::update_customer(customer_id, &update).await {
                    Ok(saved) => {
                        leptos::logging::log!("updated customer {}", saved.id);
                        ui.update(|u| u.select_customer(saved.id, saved.profile.name.clone()));
                        action.update(|a| a.finish(Ok(())));
                        navigate(&needs_analysis_path(saved.id), leptos_router::NavigateOptions::default());
                    }
                    Err(err) => {
                        leptos::logging::warn!("update customer {customer_id} failed: {err}");
                        action.update(|a| a.finish(Err(err.user_message())));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (update, &navigate, ui);
            action.update(|a| a.finish(Ok(())));
        }
    };

    view! {
        <form class="form panel" on:submit=on_submit>
            <CustomerFields draft=draft locked=true/>
            <Show when=move || action.with(|a| a.error.is_some())>
                <p class="form__error" role="alert">{move || action.with(|a| a.error.clone()).unwrap_or_default()}</p>
            </Show>
            <div class="form__actions">
                <A href=needs_analysis_path(customer_id)>"Cancel"</A>
                <button class="btn btn--primary" type="submit" disabled=busy>
                    {move || save_label(busy())}
                </button>
            </div>
        </form>
    }
}
