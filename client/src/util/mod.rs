//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (clock, downloads,
//! share sheet, clipboard) and display formatting from page and component
//! logic so they stay testable without a browser.

pub mod age;
pub mod download;
pub mod format;
pub mod share;
