//! HTTP API module for the Rota Generation Engine.
//!
//! This module provides the REST endpoint for generating a week's schedule
//! from a forecast, roster and staffing configuration.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::ScheduleGenerationRequest;
pub use response::ApiError;
pub use state::AppState;
