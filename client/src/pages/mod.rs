//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped fetching and delegates shared chrome (status
//! panels, PDF buttons, sharing) to `components`. Pure display helpers live
//! beside each page so they can be tested without a browser.

pub mod customers;
pub mod dashboard;
pub mod edit_customer;
pub mod insurers;
pub mod market;
pub mod needs_analysis;
pub mod new_customer;
pub mod products;
pub mod recommendations;
