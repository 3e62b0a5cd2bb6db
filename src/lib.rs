//! HR console core for a small company.
//!
//! This crate keeps employee records, daily attendance, leave requests and
//! payroll figures in a persistent [`store::DataStore`], derives dashboard
//! and payroll views from it, exports payslips and payroll reports, and
//! serves all of it over a JSON HTTP API guarded by an admin session.

#![warn(missing_docs)]

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod report;
pub mod seed;
pub mod storage;
pub mod store;
pub mod views;
