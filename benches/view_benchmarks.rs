//! Performance benchmarks for the HR console views.
//!
//! Views are recomputed from the store on every read, so these measure the
//! cost of that recomputation as the company grows, plus one full request
//! through the router.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use std::sync::Arc;

use chrono::{Duration, NaiveDate};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use hr_console::api::{AppState, create_router};
use hr_console::config::{ConfigLoader, ConsoleConfig};
use hr_console::models::{
    AttendanceEntry, AttendanceRecord, AttendanceStatus, Department, Employee, LeaveRequest,
    LeaveStatus, PayrollRecord,
};
use hr_console::seed::SeedData;
use hr_console::storage::MemoryStorage;
use hr_console::store::DataStore;
use hr_console::views::{dashboard_stats, leave_requests, payroll_rows, payroll_stats};

use axum::{body::Body, http::Request};
use tower::ServiceExt;

/// Builds a dataset of `size` employees with 20 days of attendance and two
/// leave requests each.
fn generate_seed(size: u32) -> SeedData {
    let start = NaiveDate::from_ymd_opt(2025, 7, 1).unwrap();
    let mut seed = SeedData::empty();

    for id in 1..=size {
        let department = Department::ALL[id as usize % Department::ALL.len()];
        let salary = Decimal::from(40_000 + (id % 50) * 1_000);
        let name = format!("Employee {}", id);

        seed.employees.push(Employee {
            employee_id: id,
            name: name.clone(),
            position: "Analyst".to_string(),
            department,
            salary,
            employment_history: String::new(),
            contact: format!("employee{}@moderntech.com", id),
        });
        seed.attendance.push(AttendanceRecord {
            employee_id: id,
            name,
            attendance: (0..20)
                .map(|day| AttendanceEntry {
                    date: start + Duration::days(day),
                    status: if (id as i64 + day) % 7 == 0 {
                        AttendanceStatus::Absent
                    } else {
                        AttendanceStatus::Present
                    },
                })
                .collect(),
            leave_requests: (0..2)
                .map(|n| LeaveRequest {
                    id: format!("lr-{}-{}", id, n),
                    date: start + Duration::days((id as i64 * 3 + n) % 28),
                    reason: "Vacation".to_string(),
                    status: if n == 0 {
                        LeaveStatus::Pending
                    } else {
                        LeaveStatus::Approved
                    },
                })
                .collect(),
        });
        seed.payroll.push(PayrollRecord {
            employee_id: id,
            hours_worked: Decimal::from(160),
            leave_deductions: Decimal::from(8),
            final_salary: salary - Decimal::from(500),
        });
    }
    seed
}

fn open_store(size: u32) -> DataStore {
    DataStore::open(Arc::new(MemoryStorage::new()), generate_seed(size)).unwrap()
}

fn bench_dashboard(c: &mut Criterion) {
    let mut group = c.benchmark_group("dashboard_stats");

    for size in [10u32, 100, 1000] {
        let store = open_store(size);
        group.throughput(Throughput::Elements(u64::from(size)));
        group.bench_with_input(BenchmarkId::from_parameter(size), &store, |b, store| {
            b.iter(|| dashboard_stats(black_box(store.snapshot())))
        });
    }

    group.finish();
}

fn bench_payroll(c: &mut Criterion) {
    let mut group = c.benchmark_group("payroll_rows_and_stats");

    for size in [10u32, 100, 1000] {
        let store = open_store(size);
        group.throughput(Throughput::Elements(u64::from(size)));
        group.bench_with_input(BenchmarkId::from_parameter(size), &store, |b, store| {
            b.iter(|| {
                let rows = payroll_rows(black_box(store.snapshot()));
                payroll_stats(&rows)
            })
        });
    }

    group.finish();
}

fn bench_leave_requests(c: &mut Criterion) {
    let store = open_store(1000);

    c.bench_function("pending_leave_requests_1000", |b| {
        b.iter(|| leave_requests(black_box(store.snapshot()), Some(LeaveStatus::Pending), None))
    });
}

/// Full GET /dashboard round trip through the router, session included.
fn bench_dashboard_request(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let loader = ConfigLoader::from_config(ConsoleConfig::default());
    let state = AppState::with_storage(&loader, Arc::new(MemoryStorage::new())).unwrap();
    state.sessions().login("Admin", "admin123").unwrap();
    let router = create_router(state);

    c.bench_function("dashboard_request", |b| {
        b.to_async(&rt).iter(|| async {
            let request = Request::builder()
                .method("GET")
                .uri("/dashboard")
                .body(Body::empty())
                .unwrap();
            let response = router.clone().oneshot(request).await.unwrap();
            black_box(response.status())
        })
    });
}

criterion_group!(
    benches,
    bench_dashboard,
    bench_payroll,
    bench_leave_requests,
    bench_dashboard_request
);
criterion_main!(benches);
