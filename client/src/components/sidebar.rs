//! Left navigation listing the top-level sections.
//!
//! SYSTEM CONTEXT
//! ==============
//! The active entry is derived from the current route, so deep links and the
//! browser back button keep the highlight in sync. When a customer is in
//! focus the sidebar also links straight to their analysis and
//! recommendations.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::state::ui::{MenuItem, UiState, needs_analysis_path, recommendations_path};

#[component]
pub fn Sidebar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let location = use_location();
    let active = Memo::new(move |_| MenuItem::from_path(&location.pathname.get()));

    let toggle_nav = move |_| ui.update(|u| u.nav_open = !u.nav_open);
    let close_nav = move |_| ui.update(|u| u.nav_open = false);

    view! {
        <nav class="sidebar" class:sidebar--open=move || ui.get().nav_open>
            <div class="sidebar__brand">
                <span class="sidebar__title">"Advisor Desk"</span>
                <button class="sidebar__toggle" on:click=toggle_nav aria-label="Toggle navigation">
                    "☰"
                </button>
            </div>
            <ul class="sidebar__menu">
                {MenuItem::ALL
                    .into_iter()
                    .map(|item| {
                        view! {
                            <li
                                class="sidebar__item"
                                class:sidebar__item--active=move || active.get() == item
                                on:click=close_nav
                            >
                                <A href=item.path()>{item.label()}</A>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
            {move || {
                ui.get()
                    .selected_customer
                    .map(|customer| {
                        view! {
                            <div class="sidebar__customer">
                                <span class="sidebar__customer-name">{customer.name.clone()}</span>
                                <A href=needs_analysis_path(customer.id)>"Needs analysis"</A>
                                <A href=recommendations_path(customer.id)>"Recommendations"</A>
                            </div>
                        }
                    })
            }}
        </nav>
    }
}
