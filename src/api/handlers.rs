//! HTTP request handlers for the HR console API.
//!
//! This module contains the router and the handler functions for all API
//! endpoints. Every route except `/login` and `/session` sits behind
//! [`require_session`].

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, Query, Request, State, rejection::JsonRejection},
    http::StatusCode,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, patch, post, put},
};
use tracing::{Instrument, info, info_span, warn};
use uuid::Uuid;

use crate::auth::Session;
use crate::models::{Department, Employee, EmployeeId, LEAVE_REASONS, PayrollRow};
use crate::report::{Document, payroll_report, payslip};
use crate::views::{
    LeaveRequestView, PayrollStats, attendance_rate, dashboard_stats, department_average_salaries,
    department_headcounts, leave_requests, payroll_rows, payroll_stats, recent_leave_requests,
    search_attendance, search_employees, search_payroll,
};

use super::request::{
    AttendanceRequest, CreateEmployeeRequest, DecisionRequest, EmployeeQuery, LeaveQuery,
    LeaveRequestBody, LoginRequest, SearchQuery, UpdateEmployeeRequest,
};
use super::response::{
    ApiErrorResponse, AttendanceRow, CreatedLeaveRequest, DashboardResponse, ExportResponse,
    SessionStatus, json_body,
};
use super::state::AppState;

type ApiResult<T> = Result<T, ApiErrorResponse>;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    let protected = Router::new()
        .route("/logout", post(logout_handler))
        .route("/employees", get(list_employees).post(create_employee))
        .route("/employees/:id", patch(update_employee).delete(delete_employee))
        .route("/employees/:id/leave-requests", post(file_leave_request))
        .route(
            "/employees/:id/leave-requests/:request_id",
            put(decide_leave_request),
        )
        .route("/employees/:id/attendance", post(record_attendance))
        .route("/attendance", get(list_attendance))
        .route("/leave-requests", get(list_leave_requests))
        .route("/dashboard", get(dashboard_handler))
        .route("/departments", get(departments_handler))
        .route("/leave-reasons", get(leave_reasons_handler))
        .route("/payroll", get(list_payroll))
        .route("/payroll/stats", get(payroll_stats_handler))
        .route("/payroll/report", post(export_payroll_report))
        .route("/payroll/:id/payslip", post(export_payslip))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_session));

    Router::new()
        .route("/login", post(login_handler))
        .route("/session", get(session_handler))
        .merge(protected)
        .layer(middleware::from_fn(trace_request))
        .with_state(state)
}

/// Wraps each request in a span carrying a fresh correlation id and logs
/// its outcome.
async fn trace_request(request: Request, next: Next) -> Response {
    let correlation_id = Uuid::new_v4();
    let span = info_span!(
        "request",
        correlation_id = %correlation_id,
        method = %request.method(),
        path = %request.uri().path(),
    );

    let start_time = Instant::now();
    let response = next.run(request).instrument(span.clone()).await;
    let duration = start_time.elapsed();

    span.in_scope(|| {
        info!(
            status = response.status().as_u16(),
            duration_us = duration.as_micros() as u64,
            "Request completed"
        )
    });
    response
}

/// Rejects requests made without an active session.
async fn require_session(State(state): State<AppState>, request: Request, next: Next) -> Response {
    match state.sessions().is_authenticated() {
        Ok(true) => next.run(request).await,
        Ok(false) => {
            warn!(path = %request.uri().path(), "Rejected request without session");
            ApiErrorResponse::unauthenticated().into_response()
        }
        Err(err) => ApiErrorResponse::from(err).into_response(),
    }
}

// =============================================================================
// Session
// =============================================================================

async fn login_handler(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> ApiResult<Json<Session>> {
    let request = json_body(payload)?;
    match state.sessions().login(&request.username, &request.password)? {
        Some(session) => Ok(Json(session)),
        None => Err(ApiErrorResponse::invalid_credentials()),
    }
}

async fn logout_handler(State(state): State<AppState>) -> ApiResult<StatusCode> {
    state.sessions().logout()?;
    Ok(StatusCode::NO_CONTENT)
}

async fn session_handler(State(state): State<AppState>) -> ApiResult<Json<SessionStatus>> {
    let user = state.sessions().current()?;
    Ok(Json(SessionStatus {
        authenticated: user.is_some(),
        user,
    }))
}

// =============================================================================
// Employees
// =============================================================================

/// Handler for GET /employees.
///
/// Filters by `search` (name, position or contact) and `department`.
async fn list_employees(
    State(state): State<AppState>,
    Query(query): Query<EmployeeQuery>,
) -> ApiResult<Json<Vec<Employee>>> {
    let department = query.department_filter()?;
    let store = state.store();
    let employees = search_employees(store.employees(), &query.search, department)
        .into_iter()
        .cloned()
        .collect();
    Ok(Json(employees))
}

/// Handler for POST /employees.
async fn create_employee(
    State(state): State<AppState>,
    payload: Result<Json<CreateEmployeeRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Employee>)> {
    let fields = json_body(payload)?.validate()?;

    let mut store = state.store();
    let id = store.add_employee(fields)?;
    let employee = store
        .employee(id)
        .cloned()
        .ok_or_else(|| ApiErrorResponse::employee_not_found(id))?;
    Ok((StatusCode::CREATED, Json(employee)))
}

/// Handler for PATCH /employees/:id. Unknown ids are accepted and ignored.
async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<EmployeeId>,
    payload: Result<Json<UpdateEmployeeRequest>, JsonRejection>,
) -> ApiResult<StatusCode> {
    let update = json_body(payload)?.validate()?;
    state.store().update_employee(id, update)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Handler for DELETE /employees/:id. Unknown ids are accepted and ignored.
async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<EmployeeId>,
) -> ApiResult<StatusCode> {
    state.store().delete_employee(id)?;
    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
// Attendance and leave
// =============================================================================

async fn record_attendance(
    State(state): State<AppState>,
    Path(id): Path<EmployeeId>,
    payload: Result<Json<AttendanceRequest>, JsonRejection>,
) -> ApiResult<StatusCode> {
    let request = json_body(payload)?;
    state
        .store()
        .record_attendance(id, request.date, request.status)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Handler for POST /employees/:id/leave-requests.
///
/// Responds 201 with the new id, or 200 with a null id when the employee
/// does not exist and the request was dropped.
async fn file_leave_request(
    State(state): State<AppState>,
    Path(id): Path<EmployeeId>,
    payload: Result<Json<LeaveRequestBody>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<CreatedLeaveRequest>)> {
    let request = json_body(payload)?.validate()?;
    let request_id = state.store().add_leave_request(id, request)?;

    let status = if request_id.is_some() {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((status, Json(CreatedLeaveRequest { id: request_id })))
}

async fn decide_leave_request(
    State(state): State<AppState>,
    Path((id, request_id)): Path<(EmployeeId, String)>,
    payload: Result<Json<DecisionRequest>, JsonRejection>,
) -> ApiResult<StatusCode> {
    let status = json_body(payload)?.validate()?;
    state
        .store()
        .update_leave_request(id, &request_id, status)?;
    Ok(StatusCode::NO_CONTENT)
}

async fn list_attendance(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Json<Vec<AttendanceRow>> {
    let store = state.store();
    let rows = search_attendance(store.attendance(), &query.search)
        .into_iter()
        .map(|record| AttendanceRow {
            attendance_rate: attendance_rate(record),
            record: record.clone(),
        })
        .collect();
    Json(rows)
}

/// Handler for GET /leave-requests.
///
/// `status` filters by decision state, `limit` keeps the newest entries.
async fn list_leave_requests(
    State(state): State<AppState>,
    Query(query): Query<LeaveQuery>,
) -> ApiResult<Json<Vec<LeaveRequestView>>> {
    let status = query.status_filter()?;
    let store = state.store();
    Ok(Json(leave_requests(store.snapshot(), status, query.limit)))
}

// =============================================================================
// Dashboard and reference data
// =============================================================================

async fn dashboard_handler(State(state): State<AppState>) -> Json<DashboardResponse> {
    let store = state.store();
    let snapshot = store.snapshot();
    Json(DashboardResponse {
        stats: dashboard_stats(snapshot),
        headcounts: department_headcounts(snapshot.employees),
        average_salaries: department_average_salaries(snapshot.employees),
        recent_leave_requests: recent_leave_requests(snapshot),
    })
}

async fn departments_handler() -> Json<Vec<Department>> {
    Json(Department::ALL.to_vec())
}

async fn leave_reasons_handler() -> Json<Vec<&'static str>> {
    Json(LEAVE_REASONS.to_vec())
}

// =============================================================================
// Payroll
// =============================================================================

async fn list_payroll(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Json<Vec<PayrollRow>> {
    let rows = payroll_rows(state.store().snapshot());
    Json(
        search_payroll(&rows, &query.search)
            .into_iter()
            .cloned()
            .collect(),
    )
}

async fn payroll_stats_handler(State(state): State<AppState>) -> Json<PayrollStats> {
    let rows = payroll_rows(state.store().snapshot());
    Json(payroll_stats(&rows))
}

/// Handler for POST /payroll/:id/payslip.
///
/// Builds the employee's payslip and writes it to the report directory.
async fn export_payslip(
    State(state): State<AppState>,
    Path(id): Path<EmployeeId>,
) -> ApiResult<Json<ExportResponse>> {
    let row = payroll_rows(state.store().snapshot())
        .into_iter()
        .find(|row| row.employee_id == id)
        .ok_or_else(|| {
            warn!(employee_id = id, "Payslip requested for unknown employee");
            ApiErrorResponse::employee_not_found(id)
        })?;

    let document = payslip(&row, &state.report_context());
    emit(&state, document)
}

/// Handler for POST /payroll/report.
async fn export_payroll_report(State(state): State<AppState>) -> ApiResult<Json<ExportResponse>> {
    let rows = payroll_rows(state.store().snapshot());
    let document = payroll_report(&rows, &state.report_context());
    emit(&state, document)
}

fn emit(state: &AppState, document: Document) -> ApiResult<Json<ExportResponse>> {
    let path = state.reports().emit(&document)?;
    Ok(Json(ExportResponse {
        path: path.display().to_string(),
        document,
    }))
}
