//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (params, fetch cycles,
//! navigation) and delegates rendering details to `components`.

pub mod dashboard;
pub mod report_list;
pub(crate) mod report_route;
pub mod report_submissions;
pub mod report_submit;
