//! Shift Wage Engine for Swiss staffing missions
//!
//! This crate computes the gross pay of a single work shift: it splits the
//! worked minutes into night, Sunday/holiday, Saturday, overtime and normal
//! buckets, applies the premium rates from configuration, and keeps an
//! editable, exportable history of results.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod export;
pub mod history;
pub mod models;
