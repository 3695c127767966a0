//! Fetch-and-render state for backend data.
//!
//! DESIGN
//! ======
//! Every page renders exactly one of three states: loading, error with a
//! retry action, or content. A failed fetch records the error but keeps any
//! data from an earlier success untouched, so a retry can never lose what the
//! user already saw.

#[cfg(test)]
#[path = "remote_test.rs"]
mod remote_test;

use std::future::Future;

use leptos::prelude::{RwSignal, Update};

use crate::net::api::ApiError;

/// Which of the three mutually exclusive views to render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Loading,
    Failed,
    Ready,
}

/// Backend data plus its request status.
#[derive(Clone, Debug, PartialEq)]
pub struct Remote<T> {
    pub data: Option<T>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> Default for Remote<T> {
    fn default() -> Self {
        Self { data: None, loading: false, error: None }
    }
}

impl<T> Remote<T> {
    /// Mark a request in flight. Prior data stays visible to the caller.
    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn succeed(&mut self, data: T) {
        self.data = Some(data);
        self.loading = false;
        self.error = None;
    }

    /// Record a failure without touching `data`.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.error = Some(message.into());
    }

    pub fn settle(&mut self, result: Result<T, ApiError>) {
        match result {
            Ok(data) => self.succeed(data),
            Err(err) => self.fail(err.user_message()),
        }
    }

    pub fn phase(&self) -> Phase {
        if self.loading {
            Phase::Loading
        } else if self.error.is_some() {
            Phase::Failed
        } else if self.data.is_some() {
            Phase::Ready
        } else {
            Phase::Loading
        }
    }

    pub fn error_message(&self) -> String {
        self.error.clone().unwrap_or_default()
    }
}

/// Start `fetch` and settle `state` with its result.
///
/// The state is marked loading immediately; in the browser the request runs
/// as a local task. Outside the browser the fetch is never issued, so SSR
/// renders the loading view and hydration takes over from there.
pub fn spawn_fetch<T, F, Fut>(state: RwSignal<Remote<T>>, fetch: F)
where
    T: Send + Sync + 'static,
    F: FnOnce() -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    state.update(Remote::begin);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = fetch().await;
        state.update(|s| s.settle(result));
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = fetch;
    }
}
