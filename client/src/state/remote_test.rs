use super::*;

#[test]
fn default_renders_loading() {
    let state = Remote::<u32>::default();
    assert_eq!(state.phase(), Phase::Loading);
    assert!(state.data.is_none());
}

#[test]
fn succeed_renders_content() {
    let mut state = Remote::default();
    state.begin();
    state.succeed(vec![1, 2, 3]);
    assert_eq!(state.phase(), Phase::Ready);
    assert_eq!(state.data, Some(vec![1, 2, 3]));
    assert!(!state.loading);
}

#[test]
fn failure_keeps_prior_data() {
    let mut state = Remote::default();
    state.succeed("first".to_owned());
    state.begin();
    assert_eq!(state.data.as_deref(), Some("first"));
    state.fail("Could not reach the server.");
    assert_eq!(state.phase(), Phase::Failed);
    assert_eq!(state.data.as_deref(), Some("first"));
    assert_eq!(state.error_message(), "Could not reach the server.");
}

#[test]
fn begin_clears_error_for_retry() {
    let mut state = Remote::<u32>::default();
    state.fail("boom");
    state.begin();
    assert_eq!(state.phase(), Phase::Loading);
    assert!(state.error.is_none());
}

#[test]
fn settle_uses_server_detail_for_errors() {
    let mut state = Remote::<u32>::default();
    state.settle(Err(ApiError::Status { status: 404, detail: Some("Customer not found".to_owned()) }));
    assert_eq!(state.phase(), Phase::Failed);
    assert_eq!(state.error_message(), "Customer not found");

    state.settle(Ok(7));
    assert_eq!(state.phase(), Phase::Ready);
    assert_eq!(state.data, Some(7));
}

#[test]
fn spawn_fetch_marks_loading_without_issuing_request_on_server() {
    #[cfg(not(feature = "hydrate"))]
    {
        use leptos::prelude::GetUntracked;

        let state = RwSignal::new(Remote::<u32>::default());
        spawn_fetch(state, || async { Ok(1) });
        let snapshot = state.get_untracked();
        assert!(snapshot.loading);
        assert!(snapshot.data.is_none());
    }
}
