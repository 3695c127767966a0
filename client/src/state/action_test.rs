use super::*;

#[test]
fn second_begin_is_refused_while_busy() {
    let mut action = ActionState::default();
    assert!(action.try_begin());
    assert!(!action.try_begin());
    action.finish(Ok(()));
    assert!(action.try_begin());
}

#[test]
fn begin_clears_previous_error() {
    let mut action = ActionState { busy: false, error: Some("timed out".to_owned()) };
    assert!(action.try_begin());
    assert_eq!(action.error, None);
}

#[test]
fn begin_with_yields_payload_once() {
    let mut action = ActionState::default();
    let mut prepared = 0;
    let first = action.begin_with(|| {
        prepared += 1;
        Ok::<_, String>("payload")
    });
    assert_eq!(first, Some("payload"));
    let second = action.begin_with(|| {
        prepared += 1;
        Ok::<_, String>("payload")
    });
    assert_eq!(second, None);
    assert_eq!(prepared, 1);
    assert!(action.busy);
}

#[test]
fn begin_with_records_preparation_error_and_stays_idle() {
    let mut action = ActionState::default();
    let result = action.begin_with(|| Err::<(), _>("Enter the customer's name."));
    assert_eq!(result, None);
    assert!(!action.busy);
    assert_eq!(action.error.as_deref(), Some("Enter the customer's name."));
}

#[test]
fn finish_keeps_failure_message() {
    let mut action = ActionState::default();
    action.try_begin();
    action.finish(Err("Could not reach the server.".to_owned()));
    assert!(!action.busy);
    assert_eq!(action.error.as_deref(), Some("Could not reach the server."));
}
