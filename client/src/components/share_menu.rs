//! Share control for analysis summaries.
//!
//! Opens the platform share sheet when the browser has one. Otherwise it
//! toggles a manual list of WhatsApp, email and SMS links plus a copy
//! button.

#[cfg(test)]
#[path = "share_menu_test.rs"]
mod share_menu_test;

use leptos::prelude::*;

use crate::util::share::{ShareChannel, ShareContent, ShareError};

/// Feedback text once a clipboard write settles.
pub fn copy_feedback(outcome: &Result<(), ShareError>) -> &'static str {
    match outcome {
        Ok(()) => "Copied to clipboard",
        Err(ShareError::Unsupported) => "Copy is not available in this browser",
        Err(ShareError::Failed(_)) => "The browser blocked the copy. Select the text and copy it manually.",
    }
}

#[component]
pub fn ShareMenu(#[prop(into)] content: Signal<ShareContent>) -> impl IntoView {
    let open = RwSignal::new(false);
    let feedback = RwSignal::new(None::<&'static str>);

    let on_share = move |_| {
        feedback.set(None);
        if !crate::util::share::native_share_supported() {
            open.update(|o| *o = !*o);
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let content = content.get_untracked();
            leptos::task::spawn_local(async move {
                if let Err(err) = crate::util::share::share_native(&content).await {
                    // Cancelling the sheet lands here too.
                    leptos::logging::log!("native share ended: {err}");
                }
            });
        }
    };

    let on_copy = move |_| {
        feedback.set(None);
        let message = content.get_untracked().message();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let outcome = crate::util::share::copy_to_clipboard(&message).await;
            if let Err(err) = &outcome {
                leptos::logging::warn!("clipboard write failed: {err}");
            }
            feedback.set(Some(copy_feedback(&outcome)));
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = message;
            feedback.set(Some(copy_feedback(&Err(ShareError::Unsupported))));
        }
    };

    view! {
        <div class="share-menu">
            <button class="btn btn--secondary share-menu__toggle" on:click=on_share aria-expanded=move || open.get().to_string()>
                "Share"
            </button>
            <Show when=move || open.get()>
                <ul class="share-menu__list">
                    {ShareChannel::ALL
                        .into_iter()
                        .map(|channel| {
                            view! {
                                <li>
                                    <a
                                        class="share-menu__link"
                                        href=move || channel.link(&content.get())
                                        target="_blank"
                                        rel="noopener noreferrer"
                                    >
                                        {channel.label()}
                                    </a>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                    <li>
                        <button class="share-menu__link" on:click=on_copy>"Copy text"</button>
                    </li>
                </ul>
                <Show when=move || feedback.get().is_some()>
                    <span class="share-menu__feedback">{move || feedback.get().unwrap_or_default()}</span>
                </Show>
            </Show>
        </div>
    }
}
