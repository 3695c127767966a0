//! Client-side state containers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages hold these in `RwSignal`s: `remote` for fetched backend data, `ui`
//! for view switching, `action` for one-shot submits and downloads, and the
//! form/selection drafts for user input. None of them outlive a page except
//! `ui`, which is provided as app-wide context.

pub mod action;
pub mod comparison;
pub mod customer_form;
pub mod remote;
pub mod ui;
