//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and small pure
//! predicates from page and component logic to improve reuse and testability.

pub mod color;
pub mod roles;
pub mod viewport;
