//! Top-level pages, one per tab, plus the router fallback.

pub mod constellation;
pub mod habits;
pub mod home;
pub mod not_found;
