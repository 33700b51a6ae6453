//! Report data providers
//!
//! The projector and serializers stay pure; datasets come in through the
//! [`ReportDataProvider`] contract. The sample provider stands in for the
//! school's fee ledger until the live backend lands.

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::models::{
    DepartmentEntry, IncomeTrendEntry, MonthlyComparisonEntry, PaymentStatusEntry, ReportDataset,
};

/// Reporting period selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimeFilter {
    Today,
    Yesterday,
    LastWeek,
    ThisWeek,
    ThisMonth,
    LastMonth,
    ThisQuarter,
    ThisYear,
}

impl TimeFilter {
    pub const ALL: [TimeFilter; 8] = [
        TimeFilter::Today,
        TimeFilter::Yesterday,
        TimeFilter::LastWeek,
        TimeFilter::ThisWeek,
        TimeFilter::ThisMonth,
        TimeFilter::LastMonth,
        TimeFilter::ThisQuarter,
        TimeFilter::ThisYear,
    ];

    /// Stable slug used on the command line
    pub fn slug(&self) -> &'static str {
        match self {
            TimeFilter::Today => "today",
            TimeFilter::Yesterday => "yesterday",
            TimeFilter::LastWeek => "last-week",
            TimeFilter::ThisWeek => "this-week",
            TimeFilter::ThisMonth => "this-month",
            TimeFilter::LastMonth => "last-month",
            TimeFilter::ThisQuarter => "this-quarter",
            TimeFilter::ThisYear => "this-year",
        }
    }

    /// Human-readable label rendered into report headers
    pub fn label(&self) -> &'static str {
        match self {
            TimeFilter::Today => "Today",
            TimeFilter::Yesterday => "Yesterday",
            TimeFilter::LastWeek => "Last Week",
            TimeFilter::ThisWeek => "This Week",
            TimeFilter::ThisMonth => "This Month",
            TimeFilter::LastMonth => "Last Month",
            TimeFilter::ThisQuarter => "This Quarter",
            TimeFilter::ThisYear => "This Year",
        }
    }
}

impl Default for TimeFilter {
    fn default() -> Self {
        TimeFilter::ThisMonth
    }
}

impl FromStr for TimeFilter {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.to_ascii_lowercase();
        TimeFilter::ALL
            .into_iter()
            .find(|f| f.slug() == wanted)
            .ok_or_else(|| {
                anyhow!(
                    "Unknown time filter '{}'. Valid filters: {}.",
                    s,
                    TimeFilter::ALL
                        .iter()
                        .map(|f| f.slug())
                        .collect::<Vec<_>>()
                        .join(", ")
                )
            })
    }
}

/// Contract for the data-fetching collaborator: returns one immutable
/// dataset snapshot for a reporting period.
pub trait ReportDataProvider {
    fn fetch(&self, filter: TimeFilter) -> Result<ReportDataset>;
}

/// In-memory provider returning the accounts department's sample snapshot.
///
/// Returns the same figures for every filter; a live provider would scope
/// the ledger query to the period.
#[derive(Debug, Default, Clone, Copy)]
pub struct SampleDataProvider;

impl ReportDataProvider for SampleDataProvider {
    fn fetch(&self, _filter: TimeFilter) -> Result<ReportDataset> {
        Ok(sample_dataset())
    }
}

fn sample_dataset() -> ReportDataset {
    ReportDataset {
        total_income: 22_345_000,
        total_students_paid: 300,
        total_students_pending: 200,
        total_students_overdue: 50,
        average_payment_days: 12,
        collection_rate: 85.7,
        payment_status: vec![
            payment_status("Paid", 300, "#4CAF50", 54.5),
            payment_status("Pending", 200, "#FF9800", 36.4),
            payment_status("Overdue", 50, "#F44336", 9.1),
        ],
        income_trend: vec![
            income_trend("Jan", 2_000_000, 2_500_000, 500_000),
            income_trend("Feb", 3_500_000, 3_000_000, 700_000),
            income_trend("Mar", 4_000_000, 3_500_000, 800_000),
            income_trend("Apr", 5_000_000, 4_000_000, 900_000),
            income_trend("May", 4_500_000, 4_500_000, 850_000),
            income_trend("Jun", 6_000_000, 5_000_000, 1_000_000),
        ],
        departments: vec![
            department("3D Architecture", 8_500_000, 120, 85),
            department("Interior Design", 6_200_000, 95, 78),
            department("Landscape Design", 4_100_000, 75, 92),
            department("Graphics Design", 3_545_000, 85, 88),
        ],
        monthly_comparison: vec![
            comparison("Jan", 2_000_000, 1_800_000),
            comparison("Feb", 3_500_000, 3_200_000),
            comparison("Mar", 4_000_000, 3_800_000),
            comparison("Apr", 5_000_000, 4_200_000),
            comparison("May", 4_500_000, 4_100_000),
            comparison("Jun", 6_000_000, 5_200_000),
        ],
    }
}

fn payment_status(label: &str, students: u32, color: &str, percentage: f64) -> PaymentStatusEntry {
    PaymentStatusEntry {
        label: label.to_string(),
        students,
        color: color.to_string(),
        percentage,
    }
}

fn income_trend(period: &str, income: u64, target: u64, expenses: u64) -> IncomeTrendEntry {
    IncomeTrendEntry {
        period: period.to_string(),
        income,
        target,
        expenses,
    }
}

fn department(name: &str, income: u64, students: u32, completion: u8) -> DepartmentEntry {
    DepartmentEntry {
        department: name.to_string(),
        income,
        students,
        completion,
    }
}

fn comparison(month: &str, this_year: u64, last_year: u64) -> MonthlyComparisonEntry {
    MonthlyComparisonEntry {
        month: month.to_string(),
        this_year,
        last_year,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_snapshot_is_internally_consistent() {
        let dataset = SampleDataProvider
            .fetch(TimeFilter::default())
            .expect("sample fetch should succeed");

        let status_total: u32 = dataset.payment_status.iter().map(|e| e.students).sum();
        assert_eq!(
            status_total,
            dataset.total_students_paid
                + dataset.total_students_pending
                + dataset.total_students_overdue
        );
        assert_eq!(dataset.income_trend.len(), dataset.monthly_comparison.len());
        assert_eq!(dataset.departments.len(), 4);
    }

    #[test]
    fn time_filter_slugs_round_trip() {
        for filter in TimeFilter::ALL {
            let parsed: TimeFilter = filter.slug().parse().expect("slug should parse");
            assert_eq!(parsed, filter);
        }
    }

    #[test]
    fn unknown_time_filter_lists_valid_options() {
        let err = "fortnight".parse::<TimeFilter>().expect_err("should fail");
        assert!(err.to_string().contains("this-month"));
    }
}
