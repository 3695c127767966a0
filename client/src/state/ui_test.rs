use super::*;

// =============================================================
// MenuItem
// =============================================================

#[test]
fn menu_item_default_is_dashboard() {
    assert_eq!(MenuItem::default(), MenuItem::Dashboard);
}

#[test]
fn menu_item_paths_round_trip_through_from_path() {
    for item in MenuItem::ALL {
        assert_eq!(MenuItem::from_path(item.path()), item, "{item:?}");
    }
}

#[test]
fn customer_detail_routes_belong_to_customers() {
    assert_eq!(MenuItem::from_path("/customers/42/needs-analysis"), MenuItem::Customers);
    assert_eq!(MenuItem::from_path(&recommendations_path(42)), MenuItem::Customers);
    assert_eq!(MenuItem::from_path("/customers/new/"), MenuItem::NewCustomer);
}

#[test]
fn unknown_paths_fall_back_to_dashboard() {
    assert_eq!(MenuItem::from_path("/nope"), MenuItem::Dashboard);
    assert_eq!(MenuItem::from_path("/productsx"), MenuItem::Dashboard);
    assert_eq!(MenuItem::from_path(""), MenuItem::Dashboard);
}

#[test]
fn customer_paths_embed_id() {
    assert_eq!(needs_analysis_path(7), "/customers/7/needs-analysis");
    assert_eq!(recommendations_path(7), "/customers/7/recommendations");
    assert_eq!(edit_customer_path(7), "/customers/7/edit");
    assert_eq!(MenuItem::from_path(&edit_customer_path(7)), MenuItem::Customers);
}

#[test]
fn parse_customer_id_rejects_non_positive_and_garbage() {
    assert_eq!(parse_customer_id(Some("42")), Some(42));
    assert_eq!(parse_customer_id(Some("0")), None);
    assert_eq!(parse_customer_id(Some("-3")), None);
    assert_eq!(parse_customer_id(Some("abc")), None);
    assert_eq!(parse_customer_id(None), None);
}

// =============================================================
// UiState
// =============================================================

#[test]
fn ui_state_default_has_no_customer() {
    let state = UiState::default();
    assert!(state.selected_customer.is_none());
    assert!(!state.nav_open);
}

#[test]
fn select_customer_records_id_and_closes_nav() {
    let mut state = UiState { nav_open: true, ..UiState::default() };
    state.select_customer(42, "Asha Rao");
    assert_eq!(state.selected_customer_id(), Some(42));
    assert_eq!(state.selected_customer.as_ref().map(|c| c.name.as_str()), Some("Asha Rao"));
    assert!(!state.nav_open);
}
