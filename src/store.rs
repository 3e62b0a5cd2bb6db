//! The shared HR data store.
//!
//! [`DataStore`] is the single owner of the employee, attendance and payroll
//! collections. Its mutators keep the three collections consistent (every
//! employee has exactly one attendance record and one payroll record with the
//! same id) and write all three collections to storage after every change.
//!
//! Mutators never fail on an unknown id: a lookup miss is a silent no-op that
//! neither changes state nor writes. The only error a mutator can return is a
//! storage write failure.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use tracing::{debug, info, warn};

use crate::error::ConsoleResult;
use crate::models::{
    AttendanceEntry, AttendanceRecord, AttendanceStatus, Employee, EmployeeFields, EmployeeId,
    EmployeeUpdate, LeaveStatus, NewLeaveRequest, PayrollRecord,
};
use crate::seed::SeedData;
use crate::storage::{
    ATTENDANCE_KEY, EMPLOYEES_KEY, KeyValueStorage, PAYROLL_KEY, load_json, save_json,
};

/// Source of the current time in Unix milliseconds, used for leave request ids.
pub type Clock = fn() -> i64;

fn system_clock() -> i64 {
    Utc::now().timestamp_millis()
}

/// A read-only view of the store's collections at a point in time.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    /// All employees, in insertion order.
    pub employees: &'a [Employee],
    /// All attendance records, in insertion order.
    pub attendance: &'a [AttendanceRecord],
    /// All payroll records, in insertion order.
    pub payroll: &'a [PayrollRecord],
}

/// Owns the HR collections and persists them on every mutation.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use hr_console::models::{Department, EmployeeFields};
/// use hr_console::seed::SeedData;
/// use hr_console::storage::MemoryStorage;
/// use hr_console::store::DataStore;
/// use rust_decimal::Decimal;
///
/// let mut store = DataStore::open(Arc::new(MemoryStorage::new()), SeedData::empty())?;
/// let id = store.add_employee(EmployeeFields {
///     name: "Zanele Khumalo".to_string(),
///     position: "Marketing Specialist".to_string(),
///     department: Department::Marketing,
///     salary: Decimal::new(58000, 0),
///     employment_history: String::new(),
///     contact: "zanele.khumalo@moderntech.com".to_string(),
/// })?;
/// assert_eq!(id, 1);
/// assert_eq!(store.payroll_record(id).unwrap().final_salary, Decimal::new(58000, 0));
/// # Ok::<(), hr_console::error::ConsoleError>(())
/// ```
pub struct DataStore {
    storage: Arc<dyn KeyValueStorage>,
    employees: Vec<Employee>,
    attendance: Vec<AttendanceRecord>,
    payroll: Vec<PayrollRecord>,
    highest_id: EmployeeId,
    version: u64,
    clock: Clock,
}

impl DataStore {
    /// Hydrates a store from `storage`.
    ///
    /// Each collection is read from its own key; a key that has never been
    /// written is filled from `seed` instead. A key holding malformed data is
    /// an error rather than a silent reseed.
    pub fn open(storage: Arc<dyn KeyValueStorage>, seed: SeedData) -> ConsoleResult<Self> {
        let SeedData {
            employees: seed_employees,
            attendance: seed_attendance,
            payroll: seed_payroll,
        } = seed;

        let employees = hydrate(storage.as_ref(), EMPLOYEES_KEY, seed_employees)?;
        let attendance = hydrate(storage.as_ref(), ATTENDANCE_KEY, seed_attendance)?;
        let payroll = hydrate(storage.as_ref(), PAYROLL_KEY, seed_payroll)?;

        info!(
            employees = employees.len(),
            attendance = attendance.len(),
            payroll = payroll.len(),
            "Data store hydrated"
        );

        let highest_id = employees.iter().map(|e| e.employee_id).max().unwrap_or(0);

        Ok(Self {
            storage,
            employees,
            attendance,
            payroll,
            highest_id,
            version: 0,
            clock: system_clock,
        })
    }

    /// Replaces the clock used to stamp leave request ids.
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Returns a read-only snapshot of all three collections.
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            employees: &self.employees,
            attendance: &self.attendance,
            payroll: &self.payroll,
        }
    }

    /// All employees, in insertion order.
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// All attendance records, in insertion order.
    pub fn attendance(&self) -> &[AttendanceRecord] {
        &self.attendance
    }

    /// All payroll records, in insertion order.
    pub fn payroll(&self) -> &[PayrollRecord] {
        &self.payroll
    }

    /// Looks up an employee by id.
    pub fn employee(&self, id: EmployeeId) -> Option<&Employee> {
        self.employees.iter().find(|e| e.employee_id == id)
    }

    /// Looks up an attendance record by employee id.
    pub fn attendance_record(&self, id: EmployeeId) -> Option<&AttendanceRecord> {
        self.attendance.iter().find(|a| a.employee_id == id)
    }

    /// Looks up a payroll record by employee id.
    pub fn payroll_record(&self, id: EmployeeId) -> Option<&PayrollRecord> {
        self.payroll.iter().find(|p| p.employee_id == id)
    }

    /// Number of state-changing mutations applied since the store was opened.
    ///
    /// Lookup misses do not advance it, so it can key a memoized view.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Adds an employee along with an empty attendance record and a payroll
    /// record paying the full salary. Returns the assigned id.
    ///
    /// The new id is one more than the highest id this store has held since
    /// it was opened, so a deleted maximum id is not handed out again. No
    /// field validation is performed.
    pub fn add_employee(&mut self, fields: EmployeeFields) -> ConsoleResult<EmployeeId> {
        let max_existing = self
            .employees
            .iter()
            .map(|e| e.employee_id)
            .max()
            .unwrap_or(0);
        let employee_id = max_existing.max(self.highest_id) + 1;

        let previous = self.checkpoint();
        let employee = fields.into_employee(employee_id);
        self.attendance
            .push(AttendanceRecord::empty(employee_id, employee.name.clone()));
        self.payroll
            .push(PayrollRecord::initial(employee_id, employee.salary));
        self.employees.push(employee);

        self.persist(previous)?;
        self.highest_id = employee_id;
        info!(employee_id, "Employee added");
        Ok(employee_id)
    }

    /// Merges `update` into the employee with `id`.
    ///
    /// A new non-empty name is copied into the attendance record. The payroll
    /// record is left untouched even when the salary changes. Unknown ids are
    /// ignored.
    pub fn update_employee(&mut self, id: EmployeeId, update: EmployeeUpdate) -> ConsoleResult<()> {
        if !self.employees.iter().any(|e| e.employee_id == id) {
            debug!(employee_id = id, "Update ignored: unknown employee");
            return Ok(());
        }

        let previous = self.checkpoint();
        if let Some(employee) = self.employees.iter_mut().find(|e| e.employee_id == id) {
            update.apply_to(employee);
        }
        if let Some(name) = update.name.as_deref().filter(|n| !n.is_empty())
            && let Some(record) = self.attendance.iter_mut().find(|a| a.employee_id == id)
        {
            record.name = name.to_string();
        }

        self.persist(previous)?;
        info!(employee_id = id, "Employee updated");
        Ok(())
    }

    /// Removes the employee with `id` together with its attendance and
    /// payroll records. Unknown ids are ignored.
    pub fn delete_employee(&mut self, id: EmployeeId) -> ConsoleResult<()> {
        if !self.employees.iter().any(|e| e.employee_id == id) {
            debug!(employee_id = id, "Delete ignored: unknown employee");
            return Ok(());
        }

        let previous = self.checkpoint();
        self.employees.retain(|e| e.employee_id != id);
        self.attendance.retain(|a| a.employee_id != id);
        self.payroll.retain(|p| p.employee_id != id);

        self.persist(previous)?;
        info!(employee_id = id, "Employee deleted");
        Ok(())
    }

    /// Overwrites the status of a leave request.
    ///
    /// Re-deciding an already decided request simply replaces the status.
    /// Unknown employee or request ids are ignored.
    pub fn update_leave_request(
        &mut self,
        employee_id: EmployeeId,
        request_id: &str,
        status: LeaveStatus,
    ) -> ConsoleResult<()> {
        let known = self
            .attendance
            .iter()
            .filter(|a| a.employee_id == employee_id)
            .flat_map(|a| a.leave_requests.iter())
            .any(|lr| lr.id == request_id);
        if !known {
            debug!(employee_id, request_id, "Leave update ignored: unknown request");
            return Ok(());
        }

        let previous = self.checkpoint();
        if let Some(request) = self
            .attendance
            .iter_mut()
            .find(|a| a.employee_id == employee_id)
            .and_then(|record| record.leave_request_mut(request_id))
        {
            request.status = status;
        }

        self.persist(previous)?;
        info!(employee_id, request_id, status = %status, "Leave request updated");
        Ok(())
    }

    /// Files a leave request for an employee and returns its generated id.
    ///
    /// Returns `Ok(None)` and drops the request if the employee is unknown.
    pub fn add_leave_request(
        &mut self,
        employee_id: EmployeeId,
        request: NewLeaveRequest,
    ) -> ConsoleResult<Option<String>> {
        if !self.attendance.iter().any(|a| a.employee_id == employee_id) {
            debug!(employee_id, "Leave request dropped: unknown employee");
            return Ok(None);
        }

        let request_id = self.next_leave_request_id(employee_id);
        let previous = self.checkpoint();
        if let Some(record) = self
            .attendance
            .iter_mut()
            .find(|a| a.employee_id == employee_id)
        {
            record.leave_requests.push(request.with_id(request_id.clone()));
        }

        self.persist(previous)?;
        info!(employee_id, request_id = %request_id, "Leave request filed");
        Ok(Some(request_id))
    }

    /// Appends a day of attendance for an employee. Unknown ids are ignored.
    pub fn record_attendance(
        &mut self,
        employee_id: EmployeeId,
        date: NaiveDate,
        status: AttendanceStatus,
    ) -> ConsoleResult<()> {
        if !self.attendance.iter().any(|a| a.employee_id == employee_id) {
            debug!(employee_id, "Attendance ignored: unknown employee");
            return Ok(());
        }

        let previous = self.checkpoint();
        if let Some(record) = self
            .attendance
            .iter_mut()
            .find(|a| a.employee_id == employee_id)
        {
            record.attendance.push(AttendanceEntry { date, status });
        }

        self.persist(previous)?;
        debug!(employee_id, %date, ?status, "Attendance recorded");
        Ok(())
    }

    /// Builds `lr-{employee_id}-{millis}`, stepping the timestamp forward
    /// until the id is unused anywhere in the store.
    fn next_leave_request_id(&self, employee_id: EmployeeId) -> String {
        let mut millis = (self.clock)();
        loop {
            let candidate = format!("lr-{}-{}", employee_id, millis);
            let taken = self
                .attendance
                .iter()
                .flat_map(|a| a.leave_requests.iter())
                .any(|lr| lr.id == candidate);
            if !taken {
                return candidate;
            }
            millis += 1;
        }
    }

    fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            employees: self.employees.clone(),
            attendance: self.attendance.clone(),
            payroll: self.payroll.clone(),
        }
    }

    /// Writes all three collections, then bumps the version.
    ///
    /// If any write fails, the collections are reset to `previous`, the keys
    /// are rewritten from it best-effort, and the version does not move.
    fn persist(&mut self, previous: Checkpoint) -> ConsoleResult<()> {
        let storage = Arc::clone(&self.storage);
        let written = save_json(storage.as_ref(), EMPLOYEES_KEY, &self.employees)
            .and_then(|()| save_json(storage.as_ref(), ATTENDANCE_KEY, &self.attendance))
            .and_then(|()| save_json(storage.as_ref(), PAYROLL_KEY, &self.payroll));

        if let Err(error) = written {
            warn!(error = %error, "Persist failed, rolling back");
            let restores = [
                (EMPLOYEES_KEY, save_json(storage.as_ref(), EMPLOYEES_KEY, &previous.employees)),
                (ATTENDANCE_KEY, save_json(storage.as_ref(), ATTENDANCE_KEY, &previous.attendance)),
                (PAYROLL_KEY, save_json(storage.as_ref(), PAYROLL_KEY, &previous.payroll)),
            ];
            for (key, restored) in restores {
                if let Err(e) = restored {
                    warn!(key, error = %e, "Could not restore storage key");
                }
            }

            self.employees = previous.employees;
            self.attendance = previous.attendance;
            self.payroll = previous.payroll;
            return Err(error);
        }

        self.version += 1;
        debug!(version = self.version, "Collections persisted");
        Ok(())
    }
}

/// The collections as they were before a mutation.
struct Checkpoint {
    employees: Vec<Employee>,
    attendance: Vec<AttendanceRecord>,
    payroll: Vec<PayrollRecord>,
}

fn hydrate<T: serde::de::DeserializeOwned>(
    storage: &dyn KeyValueStorage,
    key: &str,
    fallback: Vec<T>,
) -> ConsoleResult<Vec<T>> {
    match load_json::<Vec<T>>(storage, key)? {
        Some(values) => {
            debug!(key, count = values.len(), "Hydrated from storage");
            Ok(values)
        }
        None => {
            debug!(key, count = fallback.len(), "Key absent, using seed");
            Ok(fallback)
        }
    }
}
