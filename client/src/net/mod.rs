//! Networking modules for the reports REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the HTTP requests, `error` classifies their failures, and
//! `types` defines the wire schema shared with the backend.

pub mod api;
pub mod error;
pub mod types;
