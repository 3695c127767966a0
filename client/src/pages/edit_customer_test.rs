use super::*;
use crate::net::types::{Gender, NewCustomer, RiskAppetite};

fn stored() -> Customer {
    Customer {
        id: 12,
        profile: NewCustomer {
            name: "Ravi Kumar".to_owned(),
            email: "ravi@example.in".to_owned(),
            gender: Some(Gender::Male),
            annual_income: Some(2_400_000.0),
            risk_appetite: Some(RiskAppetite::Medium),
            ..NewCustomer::default()
        },
        created_at: None,
    }
}

#[test]
fn unchanged_draft_resends_stored_values() {
    let mut action = ActionState::default();
    let draft = CustomerDraft::from_customer(&stored());
    let update = begin_update(&mut action, &draft).unwrap();
    assert_eq!(update.name.as_deref(), Some("Ravi Kumar"));
    assert_eq!(update.annual_income, Some(2_400_000.0));
    assert_eq!(update.risk_appetite, Some(RiskAppetite::Medium));
    assert!(action.busy);
}

#[test]
fn save_is_sent_once_while_busy() {
    let mut action = ActionState::default();
    let draft = CustomerDraft::from_customer(&stored());
    assert!(begin_update(&mut action, &draft).is_some());
    assert!(begin_update(&mut action, &draft).is_none());
    action.finish(Ok(()));
    assert!(begin_update(&mut action, &draft).is_some());
}

#[test]
fn invalid_edit_is_reported_not_sent() {
    let mut action = ActionState::default();
    let mut draft = CustomerDraft::from_customer(&stored());
    draft.annual_income = "lots".to_owned();
    assert_eq!(begin_update(&mut action, &draft), None);
    assert_eq!(action.error.as_deref(), Some("Annual income must be a non-negative number."));
}

#[test]
fn save_label_reflects_busy_state() {
    assert_eq!(save_label(false), "Save changes");
    assert_eq!(save_label(true), "Saving...");
}
