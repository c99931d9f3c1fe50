//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `fetch`, `toast`) so pages and
//! components can depend on small focused models provided via context.

pub mod auth;
pub mod fetch;
pub mod toast;
