//! Data models for the Accounts Reporting Engine

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Immutable snapshot of financial metrics for one reporting period.
///
/// Produced by a [`crate::reports::ReportDataProvider`]; every export call
/// receives a fresh snapshot and never mutates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportDataset {
    /// Total income for the period, in whole UGX
    pub total_income: u64,
    pub total_students_paid: u32,
    pub total_students_pending: u32,
    pub total_students_overdue: u32,
    /// Average days from invoice to payment
    pub average_payment_days: u32,
    /// Collection rate as a percentage (e.g. 85.7)
    pub collection_rate: f64,
    pub payment_status: Vec<PaymentStatusEntry>,
    pub income_trend: Vec<IncomeTrendEntry>,
    pub departments: Vec<DepartmentEntry>,
    pub monthly_comparison: Vec<MonthlyComparisonEntry>,
}

/// One slice of the payment status breakdown (Paid / Pending / Overdue)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentStatusEntry {
    pub label: String,
    pub students: u32,
    /// Chart color tag carried through from the dashboard theme
    pub color: String,
    /// Share of all students, as a percentage
    pub percentage: f64,
}

/// Income vs target vs expenses for one period of the trend series
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncomeTrendEntry {
    pub period: String,
    pub income: u64,
    pub target: u64,
    pub expenses: u64,
}

/// Per-department income and completion figures
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepartmentEntry {
    pub department: String,
    pub income: u64,
    pub students: u32,
    /// Completion rate as a whole percentage (0-100)
    pub completion: u8,
}

/// Year-over-year income comparison for one month
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyComparisonEntry {
    pub month: String,
    pub this_year: u64,
    pub last_year: u64,
}

/// Which projection of the dataset an export serializes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportType {
    Summary,
    Detailed,
    Department,
    Trends,
}

impl ReportType {
    pub const ALL: [ReportType; 4] = [
        ReportType::Summary,
        ReportType::Detailed,
        ReportType::Department,
        ReportType::Trends,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReportType::Summary => "summary",
            ReportType::Detailed => "detailed",
            ReportType::Department => "department",
            ReportType::Trends => "trends",
        }
    }
}

impl FromStr for ReportType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "summary" => Ok(ReportType::Summary),
            "detailed" => Ok(ReportType::Detailed),
            "department" => Ok(ReportType::Department),
            "trends" => Ok(ReportType::Trends),
            other => Err(anyhow!(
                "Unknown report type '{}'. Expected one of: summary, detailed, department, trends.",
                other
            )),
        }
    }
}

/// Output format for an export.
///
/// `Excel` is accepted by the parser so the caller gets a clear
/// "not implemented" error instead of a silently missing file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Csv,
    Pdf,
    Excel,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Pdf => "pdf",
            ExportFormat::Excel => "excel",
        }
    }

    /// File extension used in export file names
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Pdf => "pdf",
            ExportFormat::Excel => "xlsx",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "pdf" => Ok(ExportFormat::Pdf),
            "excel" | "xlsx" => Ok(ExportFormat::Excel),
            other => Err(anyhow!(
                "Unknown export format '{}'. Expected one of: csv, pdf, excel.",
                other
            )),
        }
    }
}

/// A report type / format pair selected for one export call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportRequest {
    pub report_type: ReportType,
    pub format: ExportFormat,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_type_round_trips_through_str() {
        for rt in ReportType::ALL {
            let parsed: ReportType = rt.as_str().parse().expect("known name should parse");
            assert_eq!(parsed, rt);
        }
    }

    #[test]
    fn unknown_report_type_is_an_error() {
        let err = "quarterly".parse::<ReportType>().expect_err("should fail");
        assert!(err.to_string().contains("Unknown report type"));
    }

    #[test]
    fn excel_format_parses_but_keeps_xlsx_extension() {
        let fmt: ExportFormat = "excel".parse().expect("excel should parse");
        assert_eq!(fmt, ExportFormat::Excel);
        assert_eq!(fmt.extension(), "xlsx");
    }

    #[test]
    fn unknown_format_is_an_error() {
        let err = "docx".parse::<ExportFormat>().expect_err("should fail");
        assert!(err.to_string().contains("Unknown export format"));
    }
}
