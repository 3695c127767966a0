//! App-wide view state: which menu section is active and which customer is
//! in focus.
//!
//! DESIGN
//! ======
//! Views are switched by route. `MenuItem` maps each top-level section to its
//! path and back, and the selected customer is kept so the sidebar can link
//! straight to that customer's analysis and recommendations.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::net::types::RecordId;

/// Top-level navigation sections.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuItem {
    #[default]
    Dashboard,
    NewCustomer,
    Customers,
    Products,
    Market,
    Insurers,
}

impl MenuItem {
    pub const ALL: [Self; 6] =
        [Self::Dashboard, Self::NewCustomer, Self::Customers, Self::Products, Self::Market, Self::Insurers];

    pub fn path(self) -> &'static str {
        match self {
            Self::Dashboard => "/",
            Self::NewCustomer => "/customers/new",
            Self::Customers => "/customers",
            Self::Products => "/products",
            Self::Market => "/market",
            Self::Insurers => "/insurers",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::NewCustomer => "New Customer",
            Self::Customers => "Customers",
            Self::Products => "Compare Products",
            Self::Market => "Market Data",
            Self::Insurers => "Insurers",
        }
    }

    /// Section owning `path`. Customer detail routes belong to `Customers`.
    pub fn from_path(path: &str) -> Self {
        let path = path.trim_end_matches('/');
        if path.is_empty() {
            return Self::Dashboard;
        }
        if path == Self::NewCustomer.path() {
            return Self::NewCustomer;
        }
        [Self::Customers, Self::Products, Self::Market, Self::Insurers]
            .into_iter()
            .find(|item| path == item.path() || path.starts_with(&format!("{}/", item.path())))
            .unwrap_or_default()
    }
}

pub fn needs_analysis_path(customer_id: RecordId) -> String {
    format!("/customers/{customer_id}/needs-analysis")
}

pub fn edit_customer_path(customer_id: RecordId) -> String {
    format!("/customers/{customer_id}/edit")
}

pub fn recommendations_path(customer_id: RecordId) -> String {
    format!("/customers/{customer_id}/recommendations")
}

/// Parse a customer id route segment.
pub fn parse_customer_id(raw: Option<&str>) -> Option<RecordId> {
    raw.and_then(|s| s.trim().parse::<RecordId>().ok()).filter(|id| *id > 0)
}

/// Customer currently in focus, shown in the sidebar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectedCustomer {
    pub id: RecordId,
    pub name: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub selected_customer: Option<SelectedCustomer>,
    /// Sidebar visibility on narrow screens.
    pub nav_open: bool,
}

impl UiState {
    pub fn select_customer(&mut self, id: RecordId, name: impl Into<String>) {
        self.selected_customer = Some(SelectedCustomer { id, name: name.into() });
        self.nav_open = false;
    }

    pub fn selected_customer_id(&self) -> Option<RecordId> {
        self.selected_customer.as_ref().map(|c| c.id)
    }
}
