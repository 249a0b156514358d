//! Reusable widgets and formatting helpers.

pub mod confirm_gate;
pub mod date_fmt;
pub mod date_picker;
