//! Export functionality for reports
//!
//! Provides CSV and paginated PDF export, plus the file-naming and format
//! dispatch shared by both.

pub mod csv;
pub mod pdf;

pub use csv::*;
pub use pdf::*;

use anyhow::{bail, Result};
use chrono::Utc;

use crate::config::REPORT_TITLE;
use crate::models::{ExportFormat, ExportRequest, ReportDataset, ReportType};
use crate::reports::projector::{project_rows, project_sections};

/// A rendered export ready to hand to the file-save boundary
#[derive(Debug)]
pub struct ExportArtifact {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Build an export file name: `<prefix>-<type>-<unixMillis>.<ext>`
pub fn export_file_name(
    prefix: &str,
    report_type: ReportType,
    format: ExportFormat,
    timestamp_millis: i64,
) -> String {
    format!(
        "{}-{}-{}.{}",
        prefix,
        report_type.as_str(),
        timestamp_millis,
        format.extension()
    )
}

/// Project and serialize one dataset snapshot per the export request.
///
/// Excel is not implemented and fails explicitly rather than producing an
/// empty or corrupt file.
pub fn export_report(
    dataset: &ReportDataset,
    request: &ExportRequest,
    prefix: &str,
    filter_label: &str,
) -> Result<ExportArtifact> {
    let bytes = match request.format {
        ExportFormat::Csv => {
            let table = project_rows(dataset, request.report_type);
            render_report_csv(&table)?.into_bytes()
        }
        ExportFormat::Pdf => {
            let sections = project_sections(dataset, request.report_type);
            render_report_pdf(REPORT_TITLE, filter_label, &sections)?
        }
        ExportFormat::Excel => {
            bail!("Excel export is not implemented; use csv or pdf")
        }
    };

    let file_name = export_file_name(
        prefix,
        request.report_type,
        request.format,
        Utc::now().timestamp_millis(),
    );

    Ok(ExportArtifact { file_name, bytes })
}
