//! HTTP API module for the PAYE engine.
//!
//! This module provides the REST API endpoints for calculating take-home
//! pay and inspecting the year-keyed rate tables.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculationRequest, LineItemRequest};
pub use response::ApiError;
pub use state::AppState;
