//! Application theme: brand palette and status colors.

pub mod palette;
