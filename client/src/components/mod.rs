//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and the generic data views while reading
//! shared state (auth, toasts) from Leptos context providers.

pub mod breadcrumbs;
pub mod data_list;
pub mod data_table;
pub mod list_header;
pub mod loading;
pub mod tabular_view;
pub mod toast_stack;
