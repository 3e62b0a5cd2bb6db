//! Integration tests for the HR console API.
//!
//! These drive the full router over in-memory storage seeded with the
//! built-in dataset, covering:
//! - Session gating and login/logout
//! - Employee create, update, delete and search
//! - Leave request filing and decisions
//! - Dashboard and payroll aggregates
//! - Payslip and payroll report export
//! - Validation and error cases

use std::str::FromStr;
use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use tempfile::TempDir;
use tower::ServiceExt;

use hr_console::api::{AppState, create_router};
use hr_console::config::{ConfigLoader, ConsoleConfig};
use hr_console::storage::{EMPLOYEES_KEY, KeyValueStorage, MemoryStorage, SESSION_KEY};

// =============================================================================
// Test Helpers
// =============================================================================

struct TestApp {
    router: Router,
    storage: Arc<MemoryStorage>,
    report_dir: TempDir,
}

fn create_test_app() -> TestApp {
    let report_dir = TempDir::new().unwrap();
    let loader = ConfigLoader::from_config(ConsoleConfig {
        report_dir: report_dir.path().to_path_buf(),
        ..ConsoleConfig::default()
    });
    let storage = Arc::new(MemoryStorage::new());
    let state = AppState::with_storage(&loader, storage.clone()).unwrap();

    TestApp {
        router: create_router(state),
        storage,
        report_dir,
    }
}

fn decimal(value: &Value) -> Decimal {
    match value {
        Value::String(s) => Decimal::from_str(s).unwrap(),
        other => Decimal::from_str(&other.to_string()).unwrap(),
    }
}

async fn send(router: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if body_bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body_bytes).unwrap()
    };

    (status, json)
}

async fn login(router: &Router) {
    let (status, _) = send(
        router,
        "POST",
        "/login",
        Some(json!({"username": "Admin", "password": "admin123"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

async fn logged_in_app() -> TestApp {
    let app = create_test_app();
    login(&app.router).await;
    app
}

fn new_employee() -> Value {
    json!({
        "name": "Lerato Dlamini",
        "position": "Designer",
        "department": "Design",
        "salary": "48000",
        "contact": "lerato.dlamini@moderntech.com"
    })
}

// =============================================================================
// Session
// =============================================================================

#[tokio::test]
async fn test_protected_routes_require_session() {
    let app = create_test_app();

    for uri in ["/employees", "/dashboard", "/payroll", "/leave-requests"] {
        let (status, body) = send(&app.router, "GET", uri, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{}", uri);
        assert_eq!(body["code"], "UNAUTHENTICATED");
    }
}

#[tokio::test]
async fn test_invalid_credentials_rejected() {
    let app = create_test_app();

    let (status, body) = send(
        &app.router,
        "POST",
        "/login",
        Some(json!({"username": "Admin", "password": "wrong"})),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "INVALID_CREDENTIALS");
    assert!(!app.storage.contains(SESSION_KEY));
}

#[tokio::test]
async fn test_login_persists_session_and_logout_clears_it() {
    let app = logged_in_app().await;
    assert!(app.storage.contains(SESSION_KEY));

    let (status, body) = send(&app.router, "GET", "/session", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["authenticated"], true);
    assert_eq!(body["user"]["username"], "Admin");
    assert_eq!(body["user"]["role"], "Admin");

    let (status, _) = send(&app.router, "POST", "/logout", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(!app.storage.contains(SESSION_KEY));

    let (status, _) = send(&app.router, "GET", "/employees", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

// =============================================================================
// Employees
// =============================================================================

#[tokio::test]
async fn test_create_employee_assigns_next_id_and_payroll() {
    let app = logged_in_app().await;

    let (status, body) = send(&app.router, "POST", "/employees", Some(new_employee())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["employee_id"], 11);
    assert_eq!(body["employment_history"], "");

    let (_, payroll) = send(&app.router, "GET", "/payroll?search=Lerato", None).await;
    let rows = payroll.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(decimal(&rows[0]["hours_worked"]), Decimal::ZERO);
    assert_eq!(decimal(&rows[0]["final_salary"]), Decimal::new(48000, 0));

    let (_, attendance) = send(&app.router, "GET", "/attendance?search=lerato", None).await;
    assert_eq!(attendance[0]["employee_id"], 11);
    assert_eq!(attendance[0]["attendance_rate"], 0);

    assert!(app.storage.get(EMPLOYEES_KEY).unwrap().unwrap().contains("Lerato Dlamini"));
}

#[tokio::test]
async fn test_create_employee_reports_missing_fields() {
    let app = logged_in_app().await;

    let (status, body) = send(
        &app.router,
        "POST",
        "/employees",
        Some(json!({"name": "Nobody", "department": "Sales"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert_eq!(body["message"], "Please fill in all required fields");
    assert_eq!(body["details"], "Missing: position, salary, contact");

    let (_, employees) = send(&app.router, "GET", "/employees", None).await;
    assert_eq!(employees.as_array().unwrap().len(), 10);
}

#[tokio::test]
async fn test_malformed_json_rejected() {
    let app = logged_in_app().await;

    let response = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/employees")
                .header("Content-Type", "application/json")
                .body(Body::from("{ invalid json }"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["code"], "MALFORMED_JSON");
}

#[tokio::test]
async fn test_search_and_department_filter() {
    let app = logged_in_app().await;

    let (_, body) = send(&app.router, "GET", "/employees?search=ENGINEER", None).await;
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Sibongile Nkosi", "Naledi Moeketsi"]);

    let (_, body) = send(&app.router, "GET", "/employees?department=Marketing", None).await;
    assert_eq!(body.as_array().unwrap().len(), 2);

    let (_, body) = send(&app.router, "GET", "/employees?department=all", None).await;
    assert_eq!(body.as_array().unwrap().len(), 10);

    let (status, _) = send(&app.router, "GET", "/employees?department=Legal", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_name_propagates_to_attendance() {
    let app = logged_in_app().await;

    let (status, _) = send(
        &app.router,
        "PATCH",
        "/employees/3",
        Some(json!({"name": "Thabo M. Molefe"})),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, attendance) = send(&app.router, "GET", "/attendance?search=Thabo", None).await;
    assert_eq!(attendance[0]["name"], "Thabo M. Molefe");
}

#[tokio::test]
async fn test_salary_update_leaves_payroll_final_salary() {
    let app = logged_in_app().await;

    send(
        &app.router,
        "PATCH",
        "/employees/1",
        Some(json!({"salary": "90000"})),
    )
    .await;

    let (_, payroll) = send(&app.router, "GET", "/payroll?search=Sibongile", None).await;
    assert_eq!(decimal(&payroll[0]["base_salary"]), Decimal::new(90000, 0));
    assert_eq!(decimal(&payroll[0]["final_salary"]), Decimal::new(69500, 0));
}

#[tokio::test]
async fn test_delete_removes_employee_everywhere() {
    let app = logged_in_app().await;

    let (status, _) = send(&app.router, "DELETE", "/employees/10", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, employees) = send(&app.router, "GET", "/employees", None).await;
    assert_eq!(employees.as_array().unwrap().len(), 9);
    let (_, attendance) = send(&app.router, "GET", "/attendance", None).await;
    assert!(attendance.as_array().unwrap().iter().all(|a| a["employee_id"] != 10));
    let (_, payroll) = send(&app.router, "GET", "/payroll", None).await;
    assert!(payroll.as_array().unwrap().iter().all(|p| p["employee_id"] != 10));

    // The deleted maximum id is not handed out again.
    let (_, created) = send(&app.router, "POST", "/employees", Some(new_employee())).await;
    assert_eq!(created["employee_id"], 11);
}

#[tokio::test]
async fn test_unknown_ids_are_accepted_and_ignored() {
    let app = logged_in_app().await;
    let before = app.storage.get(EMPLOYEES_KEY).unwrap();

    let (status, _) = send(&app.router, "PATCH", "/employees/999", Some(json!({"name": "X"}))).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = send(&app.router, "DELETE", "/employees/999", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = send(
        &app.router,
        "POST",
        "/employees/999/leave-requests",
        Some(json!({"date": "2025-08-01", "reason": "Vacation"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], Value::Null);

    assert_eq!(app.storage.get(EMPLOYEES_KEY).unwrap(), before);
}

// =============================================================================
// Leave requests
// =============================================================================

#[tokio::test]
async fn test_leave_request_lifecycle() {
    let app = logged_in_app().await;

    let (status, body) = send(
        &app.router,
        "POST",
        "/employees/2/leave-requests",
        Some(json!({"date": "2025-08-04", "reason": "Medical Appointment"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let request_id = body["id"].as_str().unwrap().to_string();
    assert!(request_id.starts_with("lr-2-"));

    let (_, pending) = send(&app.router, "GET", "/leave-requests?status=pending", None).await;
    let pending = pending.as_array().unwrap();
    assert_eq!(pending.len(), 4);
    assert_eq!(pending[0]["id"], request_id.as_str());
    assert_eq!(pending[0]["employee_name"], "Lungile Moyo");

    let (status, _) = send(
        &app.router,
        "PUT",
        &format!("/employees/2/leave-requests/{}", request_id),
        Some(json!({"status": "Approved"})),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, approved) = send(&app.router, "GET", "/leave-requests?status=Approved", None).await;
    assert!(
        approved
            .as_array()
            .unwrap()
            .iter()
            .any(|lr| lr["id"] == request_id.as_str())
    );

    let (_, dashboard) = send(&app.router, "GET", "/dashboard", None).await;
    assert_eq!(dashboard["stats"]["pending_leaves"], 3);
}

#[tokio::test]
async fn test_leave_request_requires_known_reason() {
    let app = logged_in_app().await;

    let (status, body) = send(
        &app.router,
        "POST",
        "/employees/2/leave-requests",
        Some(json!({"date": "2025-08-04", "reason": "Holiday"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");

    let (_, reasons) = send(&app.router, "GET", "/leave-reasons", None).await;
    assert_eq!(reasons.as_array().unwrap().len(), 7);
}

#[tokio::test]
async fn test_decision_cannot_reset_to_pending() {
    let app = logged_in_app().await;

    let (status, _) = send(
        &app.router,
        "PUT",
        "/employees/4/leave-requests/lr-4-1",
        Some(json!({"status": "Pending"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_recent_leave_requests_are_newest_first() {
    let app = logged_in_app().await;

    let (_, body) = send(&app.router, "GET", "/leave-requests?limit=5", None).await;
    let dates: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|lr| lr["date"].as_str().unwrap())
        .collect();

    assert_eq!(dates.len(), 5);
    assert!(dates.windows(2).all(|w| w[0] >= w[1]));
}

#[tokio::test]
async fn test_recorded_attendance_changes_rate() {
    let app = logged_in_app().await;

    let (status, _) = send(
        &app.router,
        "POST",
        "/employees/1/attendance",
        Some(json!({"date": "2025-07-30", "status": "Present"})),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, attendance) = send(&app.router, "GET", "/attendance?search=Sibongile", None).await;
    assert_eq!(attendance[0]["attendance"].as_array().unwrap().len(), 6);
    // 5 of 6 days present
    assert_eq!(attendance[0]["attendance_rate"], 83);
}

// =============================================================================
// Dashboard and payroll
// =============================================================================

#[tokio::test]
async fn test_dashboard_over_seed_data() {
    let app = logged_in_app().await;

    let (status, body) = send(&app.router, "GET", "/dashboard", None).await;
    assert_eq!(status, StatusCode::OK);

    let stats = &body["stats"];
    assert_eq!(stats["total_employees"], 10);
    assert_eq!(decimal(&stats["total_payroll"]), Decimal::new(632850, 0));
    assert_eq!(stats["pending_leaves"], 3);
    assert_eq!(stats["attendance_rate"], 80);

    let headcounts = body["headcounts"].as_array().unwrap();
    assert_eq!(headcounts[0]["department"], "Development");
    let marketing = headcounts
        .iter()
        .find(|h| h["department"] == "Marketing")
        .unwrap();
    assert_eq!(marketing["count"], 2);

    assert_eq!(body["recent_leave_requests"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_payroll_stats_over_seed_data() {
    let app = logged_in_app().await;

    let (_, stats) = send(&app.router, "GET", "/payroll/stats", None).await;
    assert_eq!(decimal(&stats["total_payroll"]), Decimal::new(632850, 0));
    assert_eq!(decimal(&stats["average_salary"]), Decimal::new(63285, 0));
}

#[tokio::test]
async fn test_departments_listed_in_order() {
    let app = logged_in_app().await;

    let (_, body) = send(&app.router, "GET", "/departments", None).await;
    let departments = body.as_array().unwrap();
    assert_eq!(departments.len(), 9);
    assert_eq!(departments[1], "HR");
}

// =============================================================================
// Reports
// =============================================================================

#[tokio::test]
async fn test_payslip_export_writes_file() {
    let app = logged_in_app().await;

    let (status, body) = send(&app.router, "POST", "/payroll/1/payslip", None).await;
    assert_eq!(status, StatusCode::OK);

    let filename = body["document"]["filename"].as_str().unwrap();
    assert!(filename.starts_with("payslip_Sibongile_Nkosi_"));
    assert!(filename.ends_with(".txt"));

    let path = app.report_dir.path().join(filename);
    let written = std::fs::read_to_string(path).unwrap();
    assert!(written.contains("ModernTech Solutions"));
    assert!(written.contains("Sibongile Nkosi"));
}

#[tokio::test]
async fn test_payslip_for_unknown_employee_is_not_found() {
    let app = logged_in_app().await;

    let (status, body) = send(&app.router, "POST", "/payroll/999/payslip", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "EMPLOYEE_NOT_FOUND");
}

#[tokio::test]
async fn test_payroll_report_export() {
    let app = logged_in_app().await;

    let (status, body) = send(&app.router, "POST", "/payroll/report", None).await;
    assert_eq!(status, StatusCode::OK);

    let filename = body["document"]["filename"].as_str().unwrap();
    assert!(filename.starts_with("payroll_report_"));
    assert!(app.report_dir.path().join(filename).exists());
}
