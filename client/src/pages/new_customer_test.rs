use super::*;
use crate::net::types::NewCustomer;
use time::macros::date;

#[test]
fn valid_draft_yields_one_payload_and_routes_to_analysis() {
    let draft = CustomerDraft {
        name: "Asha Rao".to_owned(),
        email: "asha@example.in".to_owned(),
        date_of_birth: "1990-04-12".to_owned(),
        ..CustomerDraft::default()
    };
    let payload = draft.validate(date!(2026 - 10 - 18)).unwrap();
    assert_eq!(payload.age, Some(36));

    let created = Customer { id: 57, profile: payload, created_at: None };
    assert_eq!(created_customer_route(&created), "/customers/57/needs-analysis");
}

#[test]
fn created_route_ignores_profile_contents() {
    let created = Customer { id: 3, profile: NewCustomer::default(), created_at: None };
    assert_eq!(created_customer_route(&created), "/customers/3/needs-analysis");
}

#[test]
fn submit_label_reflects_busy_state() {
    assert_eq!(submit_label(false), "Create customer");
    assert_eq!(submit_label(true), "Saving...");
}

#[test]
fn repeated_submit_while_busy_sends_once() {
    let draft = CustomerDraft {
        name: "Asha Rao".to_owned(),
        email: "asha@example.in".to_owned(),
        ..CustomerDraft::default()
    };
    let today = date!(2026 - 10 - 18);
    let mut action = ActionState::default();

    let sent: Vec<NewCustomer> = (0..3).filter_map(|_| begin_create(&mut action, &draft, today)).collect();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].name, "Asha Rao");
    assert!(action.busy);

    action.finish(Err("duplicate email".to_owned()));
    assert!(begin_create(&mut action, &draft, today).is_some());
}

#[test]
fn invalid_draft_sends_nothing_and_shows_error() {
    let mut action = ActionState::default();
    let draft = CustomerDraft { name: "Asha".to_owned(), ..CustomerDraft::default() };
    assert_eq!(begin_create(&mut action, &draft, date!(2026 - 10 - 18)), None);
    assert!(!action.busy);
    assert_eq!(action.error.as_deref(), Some("Enter a valid email address."));
}
