//! Headline number card used on the dashboard and analysis pages.

use leptos::prelude::*;

#[component]
pub fn MetricCard(
    #[prop(into)] label: String,
    #[prop(into)] value: String,
    #[prop(optional, into)] hint: Option<String>,
    #[prop(optional)] emphasis: bool,
) -> impl IntoView {
    view! {
        <div class="metric-card" class:metric-card--emphasis=emphasis>
            <span class="metric-card__label">{label}</span>
            <span class="metric-card__value">{value}</span>
            {hint.map(|hint| view! { <span class="metric-card__hint">{hint}</span> })}
        </div>
    }
}
