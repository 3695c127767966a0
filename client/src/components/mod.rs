//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and shared actions (status panels, PDF
//! downloads, sharing) while reading shared state from Leptos context
//! providers.

pub mod customer_fields;
pub mod metric_card;
pub mod pdf_button;
pub mod share_menu;
pub mod sidebar;
pub mod status;
