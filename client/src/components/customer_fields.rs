//! Customer form fieldsets shared by the create and edit pages.
//!
//! Identity fields (email, date of birth, gender) are fixed once a customer
//! exists, so `locked` renders them read-only.

use leptos::prelude::*;

use crate::net::types::{Gender, RiskAppetite};
use crate::state::customer_form::CustomerDraft;
use crate::util::age::today;

#[component]
pub fn CustomerFields(draft: RwSignal<CustomerDraft>, #[prop(optional)] locked: bool) -> impl IntoView {
    let derived_age = move || {
        draft
            .with(|d| d.derived_age(today()))
            .map_or_else(String::new, |age| format!("Age {age}"))
    };

    view! {
        <fieldset class="form__group">
            <legend>"Contact"</legend>
            <TextField
                label="Full name *"
                value=Signal::derive(move || draft.with(|d| d.name.clone()))
                on_input=Callback::new(move |v| draft.update(|d| d.name = v))
            />
            <TextField
                label="Email *"
                input_type="email"
                readonly=locked
                value=Signal::derive(move || draft.with(|d| d.email.clone()))
                on_input=Callback::new(move |v| draft.update(|d| d.email = v))
            />
            <TextField
                label="Phone"
                input_type="tel"
                value=Signal::derive(move || draft.with(|d| d.phone.clone()))
                on_input=Callback::new(move |v| draft.update(|d| d.phone = v))
            />
        </fieldset>

        <fieldset class="form__group">
            <legend>"Personal"</legend>
            <div class="form__row">
                <TextField
                    label="Date of birth"
                    input_type="date"
                    readonly=locked
                    value=Signal::derive(move || draft.with(|d| d.date_of_birth.clone()))
                    on_input=Callback::new(move |v| draft.update(|d| d.date_of_birth = v))
                />
                <span class="form__derived">{derived_age}</span>
            </div>
            <label class="form__field">
                "Gender"
                <select
                    class="select"
                    disabled=locked
                    on:change=move |ev| {
                        let v = event_target_value(&ev);
                        draft.update(|d| d.gender = v);
                    }
                >
                    {Gender::ALL
                        .into_iter()
                        .map(|g| {
                            view! {
                                <option value=g.as_str() selected=move || draft.with(|d| d.gender == g.as_str())>
                                    {g.label()}
                                </option>
                            }
                        })
                        .collect::<Vec<_>>()}
                </select>
            </label>
            <TextField
                label="Occupation"
                value=Signal::derive(move || draft.with(|d| d.occupation.clone()))
                on_input=Callback::new(move |v| draft.update(|d| d.occupation = v))
            />
        </fieldset>

        <fieldset class="form__group">
            <legend>"Finances and family"</legend>
            <TextField
                label="Annual income (₹)"
                value=Signal::derive(move || draft.with(|d| d.annual_income.clone()))
                on_input=Callback::new(move |v| draft.update(|d| d.annual_income = v))
            />
            <TextField
                label="Family size"
                input_type="number"
                value=Signal::derive(move || draft.with(|d| d.family_size.clone()))
                on_input=Callback::new(move |v| draft.update(|d| d.family_size = v))
            />
            <TextField
                label="Dependents"
                input_type="number"
                value=Signal::derive(move || draft.with(|d| d.dependents.clone()))
                on_input=Callback::new(move |v| draft.update(|d| d.dependents = v))
            />
            <TextField
                label="Existing life cover (₹)"
                value=Signal::derive(move || draft.with(|d| d.existing_cover.clone()))
                on_input=Callback::new(move |v| draft.update(|d| d.existing_cover = v))
            />
            <label class="form__field">
                "Risk appetite"
                <select
                    class="select"
                    on:change=move |ev| {
                        let v = event_target_value(&ev);
                        draft.update(|d| d.risk_appetite = v);
                    }
                >
                    {RiskAppetite::ALL
                        .into_iter()
                        .map(|r| {
                            view! {
                                <option value=r.as_str() selected=move || draft.with(|d| d.risk_appetite == r.as_str())>
                                    {r.label()}
                                </option>
                            }
                        })
                        .collect::<Vec<_>>()}
                </select>
            </label>
        </fieldset>

        <fieldset class="form__group">
            <legend>"Health and goals"</legend>
            <p class="form__hint">"Separate multiple entries with commas."</p>
            <TextField
                label="Health conditions"
                value=Signal::derive(move || draft.with(|d| d.health_conditions.clone()))
                on_input=Callback::new(move |v| draft.update(|d| d.health_conditions = v))
            />
            <TextField
                label="Lifestyle factors"
                value=Signal::derive(move || draft.with(|d| d.lifestyle_factors.clone()))
                on_input=Callback::new(move |v| draft.update(|d| d.lifestyle_factors = v))
            />
            <TextField
                label="Investment goals"
                value=Signal::derive(move || draft.with(|d| d.investment_goals.clone()))
                on_input=Callback::new(move |v| draft.update(|d| d.investment_goals = v))
            />
        </fieldset>
    }
}

/// Labelled single-line input bound to one draft field.
#[component]
fn TextField(
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] readonly: bool,
    value: Signal<String>,
    on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <label class="form__field">
            {label}
            <input
                class="input"
                type=input_type
                readonly=readonly
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </label>
    }
}
