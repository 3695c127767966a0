//! PDF download buttons.
//!
//! DESIGN
//! ======
//! A download only writes the button's own `ActionState`. Page data
//! (analysis, recommendations, comparison rows) is never written here, so a
//! failed or slow download cannot disturb what is on screen.

#[cfg(test)]
#[path = "pdf_button_test.rs"]
mod pdf_button_test;

use leptos::prelude::*;

use crate::net::api::ApiError;
use crate::net::types::{ComparisonRequest, RecordId};
use crate::state::action::ActionState;
use crate::util::age::today;
use crate::util::download::{DownloadError, ReportKind, comparison_filename, report_filename};

/// Either half of fetch-then-save can fail.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DownloadFailure {
    #[error(transparent)]
    Fetch(#[from] ApiError),
    #[error(transparent)]
    Save(#[from] DownloadError),
}

impl DownloadFailure {
    pub fn user_message(&self) -> String {
        match self {
            Self::Fetch(err) => err.user_message(),
            Self::Save(DownloadError::Unavailable) => "Downloads are only available in the browser.".to_owned(),
            Self::Save(DownloadError::Browser(_)) => "The browser could not save the PDF. Try again.".to_owned(),
        }
    }
}

/// Outcome recorded on the button once fetch-then-save settles.
pub fn download_outcome(result: Result<(), DownloadFailure>) -> Result<(), String> {
    result.map_err(|err| {
        leptos::logging::warn!("pdf download failed: {err}");
        err.user_message()
    })
}

/// Label while idle or busy.
pub fn button_label(idle: &'static str, busy: bool) -> &'static str {
    if busy { "Preparing PDF..." } else { idle }
}

/// Per-customer report download.
#[component]
pub fn ReportPdfButton(
    kind: ReportKind,
    customer_id: RecordId,
    #[prop(into)] customer_name: Signal<String>,
) -> impl IntoView {
    let action = RwSignal::new(ActionState::default());

    let on_click = move |()| {
        if !action.try_update(ActionState::try_begin).unwrap_or(false) {
            return;
        }
        let filename = report_filename(kind, &customer_name.get_untracked(), today());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = async {
                let bytes = crate::net::api::fetch_report_pdf(kind, customer_id).await?;
                crate::util::download::save_pdf(&bytes, &filename)?;
                Ok::<(), DownloadFailure>(())
            }
            .await;
            action.update(|a| a.finish(download_outcome(result)));
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (customer_id, filename);
            action.update(|a| a.finish(Ok(())));
        }
    };

    view! { <PdfButtonView label=kind.label() action=action on_click=Callback::new(on_click)/> }
}

/// Comparison table download for the current selection and settings.
#[component]
pub fn ComparisonPdfButton(#[prop(into)] request: Signal<Option<ComparisonRequest>>) -> impl IntoView {
    let action = RwSignal::new(ActionState::default());

    let on_click = move |()| {
        let Some(request) = request.get_untracked() else {
            return;
        };
        if !action.try_update(ActionState::try_begin).unwrap_or(false) {
            return;
        }
        let filename = comparison_filename(today());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = async {
                let bytes = crate::net::api::fetch_comparison_pdf(&request).await?;
                crate::util::download::save_pdf(&bytes, &filename)?;
                Ok::<(), DownloadFailure>(())
            }
            .await;
            action.update(|a| a.finish(download_outcome(result)));
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, filename);
            action.update(|a| a.finish(Ok(())));
        }
    };

    view! { <PdfButtonView label="Download comparison PDF" action=action on_click=Callback::new(on_click)/> }
}

#[component]
fn PdfButtonView(label: &'static str, action: RwSignal<ActionState>, on_click: Callback<()>) -> impl IntoView {
    let busy = move || action.with(|a| a.busy);
    let error = move || action.with(|a| a.error.clone());
    view! {
        <div class="pdf-button">
            <button
                class="btn btn--secondary pdf-button__action"
                disabled=busy
                on:click=move |_| on_click.run(())
            >
                {move || button_label(label, busy())}
            </button>
            <Show when=move || error().is_some()>
                <span class="pdf-button__error" role="alert">{move || error().unwrap_or_default()}</span>
            </Show>
        </div>
    }
}
