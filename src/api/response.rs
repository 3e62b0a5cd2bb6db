//! Response types for the HR console API.
//!
//! This module defines the success payloads that are not plain domain types,
//! the error response structures, and the mapping from [`ConsoleError`] to
//! HTTP status codes.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::auth::Session;
use crate::error::ConsoleError;
use crate::models::AttendanceRecord;
use crate::report::Document;
use crate::views::{DashboardStats, DepartmentAverage, DepartmentHeadcount, LeaveRequestView};

/// Body of `GET /session`.
#[derive(Debug, Clone, Serialize)]
pub struct SessionStatus {
    /// Whether a session is active.
    pub authenticated: bool,
    /// The active session, if any.
    pub user: Option<Session>,
}

/// An attendance record with its computed rate.
#[derive(Debug, Clone, Serialize)]
pub struct AttendanceRow {
    /// The stored record.
    #[serde(flatten)]
    pub record: AttendanceRecord,
    /// Present days as a rounded percentage of recorded days.
    pub attendance_rate: u32,
}

/// Body of `GET /dashboard`.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardResponse {
    /// Headline figures.
    pub stats: DashboardStats,
    /// Employees per department.
    pub headcounts: Vec<DepartmentHeadcount>,
    /// Average salary per department.
    pub average_salaries: Vec<DepartmentAverage>,
    /// Newest leave requests of any status.
    pub recent_leave_requests: Vec<LeaveRequestView>,
}

/// Body returned after filing a leave request.
#[derive(Debug, Clone, Serialize)]
pub struct CreatedLeaveRequest {
    /// The generated id; `None` when the employee was unknown.
    pub id: Option<String>,
}

/// Body returned after a document has been written.
#[derive(Debug, Clone, Serialize)]
pub struct ExportResponse {
    /// Where the document was written.
    pub path: String,
    /// The document that was written.
    pub document: Document,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// A 400 validation failure.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error: ApiError::validation_error(message),
        }
    }

    /// A 400 validation failure listing the offending fields.
    pub fn missing_fields(fields: &[&str]) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error: ApiError::with_details(
                "VALIDATION_ERROR",
                "Please fill in all required fields",
                format!("Missing: {}", fields.join(", ")),
            ),
        }
    }

    /// A 401 for requests without a session.
    pub fn unauthenticated() -> Self {
        Self {
            status: StatusCode::UNAUTHORIZED,
            error: ApiError::new("UNAUTHENTICATED", "Login required"),
        }
    }

    /// A 401 for a rejected login.
    pub fn invalid_credentials() -> Self {
        Self {
            status: StatusCode::UNAUTHORIZED,
            error: ApiError::new("INVALID_CREDENTIALS", "Invalid username or password"),
        }
    }

    /// A 404 for reads of an unknown employee.
    pub fn employee_not_found(id: u32) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            error: ApiError::new("EMPLOYEE_NOT_FOUND", format!("Employee not found: {}", id)),
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<ConsoleError> for ApiErrorResponse {
    fn from(error: ConsoleError) -> Self {
        match &error {
            ConsoleError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            ConsoleError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            ConsoleError::SeedParse { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CONFIG_ERROR", "Seed dataset error", error.to_string()),
            },
            ConsoleError::StorageRead { .. }
            | ConsoleError::StorageWrite { .. }
            | ConsoleError::StorageParse { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("STORAGE_ERROR", "Storage error", error.to_string()),
            },
            ConsoleError::ReportWrite { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "REPORT_ERROR",
                    "Report could not be written",
                    error.to_string(),
                ),
            },
        }
    }
}

/// Unwraps a JSON body, turning extractor rejections into API errors.
pub fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ApiErrorResponse> {
    let rejection = match payload {
        Ok(Json(body)) => return Ok(body),
        Err(rejection) => rejection,
    };

    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(error = %body_text, "JSON data error");
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(error = %err, "JSON syntax error");
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    Err(ApiErrorResponse {
        status: StatusCode::BAD_REQUEST,
        error,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_errors_map_to_500() {
        let response: ApiErrorResponse = ConsoleError::StorageWrite {
            key: "hr_employees".to_string(),
            message: "disk full".to_string(),
        }
        .into();
        assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.error.code, "STORAGE_ERROR");
        assert!(response.error.details.unwrap().contains("hr_employees"));
    }

    #[test]
    fn test_missing_fields_lists_fields() {
        let response = ApiErrorResponse::missing_fields(&["name", "salary"]);
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.error.details.as_deref(), Some("Missing: name, salary"));
    }

    #[test]
    fn test_api_error_omits_empty_details() {
        let json = serde_json::to_value(ApiError::new("UNAUTHENTICATED", "Login required")).unwrap();
        assert!(json.get("details").is_none());
    }
}
