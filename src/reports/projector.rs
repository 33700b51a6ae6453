//! Report projection
//!
//! Deterministic mapping from a dataset snapshot plus a report type to the
//! tabular intermediates the CSV and PDF serializers consume. Column order
//! is the output column order; row order follows the source sequences.

use crate::config::CURRENCY_PREFIX;
use crate::models::{ReportDataset, ReportType};

/// Ordered tabular intermediate: one header row plus data rows.
///
/// Each row is aligned with `columns` by position.
#[derive(Debug, Clone)]
pub struct TabularTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TabularTable {
    fn new(columns: &[&str]) -> Self {
        Self {
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    fn push_row(&mut self, row: Vec<String>) {
        debug_assert_eq!(row.len(), self.columns.len());
        self.rows.push(row);
    }
}

/// A titled table, the unit of the paginated PDF layout
#[derive(Debug, Clone)]
pub struct ReportSection {
    pub title: String,
    pub table: TabularTable,
}

/// Render a money value with currency prefix and thousands separators,
/// e.g. `UGX 1,500,000`
pub fn format_currency(amount: u64) -> String {
    format!("{} {}", CURRENCY_PREFIX, group_thousands(amount))
}

/// Insert thousands separators into a non-negative integer
pub fn group_thousands(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Project the dataset into the flat row shape used for CSV exports
pub fn project_rows(dataset: &ReportDataset, report_type: ReportType) -> TabularTable {
    match report_type {
        ReportType::Summary => {
            let mut table = TabularTable::new(&["Metric", "Value"]);
            table.push_row(vec![
                "Total Income".to_string(),
                format_currency(dataset.total_income),
            ]);
            table.push_row(vec![
                "Students Paid".to_string(),
                dataset.total_students_paid.to_string(),
            ]);
            table.push_row(vec![
                "Students Pending".to_string(),
                dataset.total_students_pending.to_string(),
            ]);
            table.push_row(vec![
                "Students Overdue".to_string(),
                dataset.total_students_overdue.to_string(),
            ]);
            table.push_row(vec![
                "Collection Rate".to_string(),
                format!("{}%", dataset.collection_rate),
            ]);
            table
        }
        ReportType::Detailed => {
            let mut table = TabularTable::new(&["Metric", "Value"]);
            for entry in &dataset.payment_status {
                table.push_row(vec![
                    format!("Students {}", entry.label),
                    entry.students.to_string(),
                ]);
            }
            for entry in &dataset.income_trend {
                table.push_row(vec![
                    format!("Income {}", entry.period),
                    format_currency(entry.income),
                ]);
            }
            table
        }
        ReportType::Department => {
            let mut table = TabularTable::new(&["Metric", "Value", "Students", "Completion"]);
            for dept in &dataset.departments {
                table.push_row(vec![
                    dept.department.clone(),
                    format_currency(dept.income),
                    dept.students.to_string(),
                    format!("{}%", dept.completion),
                ]);
            }
            table
        }
        ReportType::Trends => {
            let mut table = TabularTable::new(&["Metric", "ThisYear", "LastYear"]);
            for entry in &dataset.monthly_comparison {
                table.push_row(vec![
                    entry.month.clone(),
                    format_currency(entry.this_year),
                    format_currency(entry.last_year),
                ]);
            }
            table
        }
    }
}

/// Project the dataset into titled sections for the paginated PDF layout.
///
/// `Detailed` yields two sections (payment status breakdown, then the income
/// trend with targets and expenses); every other type yields one.
pub fn project_sections(dataset: &ReportDataset, report_type: ReportType) -> Vec<ReportSection> {
    match report_type {
        ReportType::Summary => {
            vec![ReportSection {
                title: "Summary Metrics".to_string(),
                table: project_rows(dataset, ReportType::Summary),
            }]
        }
        ReportType::Detailed => {
            let mut status = TabularTable::new(&["Status", "Students", "Percentage"]);
            for entry in &dataset.payment_status {
                status.push_row(vec![
                    entry.label.clone(),
                    entry.students.to_string(),
                    format!("{}%", entry.percentage),
                ]);
            }

            let mut trend = TabularTable::new(&[
                "Period",
                "Income (UGX)",
                "Target (UGX)",
                "Expenses (UGX)",
            ]);
            for entry in &dataset.income_trend {
                trend.push_row(vec![
                    entry.period.clone(),
                    group_thousands(entry.income),
                    group_thousands(entry.target),
                    group_thousands(entry.expenses),
                ]);
            }

            vec![
                ReportSection {
                    title: "Payment Status Breakdown".to_string(),
                    table: status,
                },
                ReportSection {
                    title: "Income Trend".to_string(),
                    table: trend,
                },
            ]
        }
        ReportType::Department => {
            let mut table = TabularTable::new(&[
                "Department",
                "Income (UGX)",
                "Students",
                "Completion Rate",
            ]);
            for dept in &dataset.departments {
                table.push_row(vec![
                    dept.department.clone(),
                    group_thousands(dept.income),
                    dept.students.to_string(),
                    format!("{}%", dept.completion),
                ]);
            }
            vec![ReportSection {
                title: "Department Breakdown".to_string(),
                table,
            }]
        }
        ReportType::Trends => {
            let mut table =
                TabularTable::new(&["Month", "This Year (UGX)", "Last Year (UGX)"]);
            for entry in &dataset.monthly_comparison {
                table.push_row(vec![
                    entry.month.clone(),
                    group_thousands(entry.this_year),
                    group_thousands(entry.last_year),
                ]);
            }
            vec![ReportSection {
                title: "Year-over-Year Comparison".to_string(),
                table,
            }]
        }
    }
}
