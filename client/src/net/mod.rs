//! Networking modules for the advisory backend's REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the HTTP calls and maps failures to `ApiError`; `types`
//! defines the JSON schema shared with the backend.

pub mod api;
pub mod types;
