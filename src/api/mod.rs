//! HTTP API module for the Shift Wage Engine.
//!
//! This module provides the REST endpoints that collect shift fields, compute
//! breakdowns, and manage and export the history of stored results.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{ExportQuery, ShiftRequest};
pub use response::{ApiError, ApiErrorResponse, RememberedRate};
pub use state::AppState;
