//! HTTP API module for the HR console.
//!
//! This module exposes the data store, derived views and report export as
//! JSON endpoints behind a single-admin session.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    AttendanceRequest, CreateEmployeeRequest, DecisionRequest, LeaveRequestBody, LoginRequest,
    UpdateEmployeeRequest,
};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
