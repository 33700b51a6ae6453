//! BURSAR Reports Engine — School Accounts Reporting & Export
//!
//! This crate turns an immutable accounts dataset snapshot into
//! downloadable report files:
//! - Deterministic projection of a dataset into tabular rows per report type
//! - CSV serialization (RFC 4180 quoting, header row first)
//! - Paginated PDF rendering with titled section tables
//! - Growth/derived metrics and rule-based key insights
//! - Pluggable data provider for dataset snapshots

pub mod app;
pub mod config;
pub mod exports;
pub mod logging;
pub mod models;
pub mod reports;

mod cli;
mod command_handlers;

pub use exports::{export_file_name, export_report, render_report_csv, render_report_pdf, ExportArtifact};
pub use models::{
    DepartmentEntry, ExportFormat, ExportRequest, IncomeTrendEntry, MonthlyComparisonEntry,
    PaymentStatusEntry, ReportDataset, ReportType,
};
pub use reports::{
    format_currency, format_growth, group_thousands, growth_percent, project_rows,
    project_sections, Insight, InsightSeverity, KeyInsights, ReportDataProvider, ReportSection,
    SampleDataProvider, TabularTable, TimeFilter,
};

// Re-export logging macros for use across crate
pub use crate::logging::macros;
