//! Key insights
//!
//! Rule-based highlights over a report dataset: target attainment, overdue
//! exposure, and the strongest growth signals.

use serde::{Deserialize, Serialize};

use crate::models::ReportDataset;
use crate::reports::growth::{format_growth, growth_percent};

/// Severity of a generated insight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightSeverity {
    Success,
    Warning,
    Info,
}

/// One generated highlight
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Insight {
    pub severity: InsightSeverity,
    pub message: String,
}

/// Rule-based highlights for one dataset snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyInsights {
    pub insights: Vec<Insight>,
}

impl KeyInsights {
    /// Derive insights from the dataset. Rules are deterministic; an empty
    /// dataset produces an empty insight list rather than an error.
    pub fn calculate(dataset: &ReportDataset) -> Self {
        let mut insights = Vec::new();

        // Target attainment for the latest trend period
        if let Some(latest) = dataset.income_trend.last() {
            let attainment = growth_percent(latest.income as f64, latest.target as f64);
            match attainment {
                Some(delta) if delta >= 0.0 => insights.push(Insight {
                    severity: InsightSeverity::Success,
                    message: format!(
                        "Income exceeded target by {} in {}",
                        format_growth(Some(delta)),
                        latest.period
                    ),
                }),
                Some(delta) => insights.push(Insight {
                    severity: InsightSeverity::Warning,
                    message: format!(
                        "Income missed target by {} in {}",
                        format_growth(Some(delta.abs())),
                        latest.period
                    ),
                }),
                None => {}
            }
        }

        if dataset.total_students_overdue > 0 {
            insights.push(Insight {
                severity: InsightSeverity::Warning,
                message: format!(
                    "{} students have overdue payments",
                    dataset.total_students_overdue
                ),
            });
        }

        // Strongest year-over-year month
        let best_month = dataset
            .monthly_comparison
            .iter()
            .filter_map(|entry| {
                growth_percent(entry.this_year as f64, entry.last_year as f64)
                    .map(|g| (entry, g))
            })
            .max_by(|a, b| a.1.total_cmp(&b.1));
        if let Some((entry, g)) = best_month {
            insights.push(Insight {
                severity: InsightSeverity::Info,
                message: format!(
                    "{} shows the strongest year-over-year growth at {}",
                    entry.month,
                    format_growth(Some(g))
                ),
            });
        }

        // Department completion leader
        let leader = dataset.departments.iter().max_by_key(|d| d.completion);
        if let Some(dept) = leader {
            insights.push(Insight {
                severity: InsightSeverity::Info,
                message: format!(
                    "{} leads completion at {}%",
                    dept.department, dept.completion
                ),
            });
        }

        Self { insights }
    }
}
