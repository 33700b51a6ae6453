//! Command handlers for the reporting CLI

use anyhow::{Context, Result};
use std::path::Path;

use crate::config::REPORT_FILE_PREFIX;
use crate::exports::export_report;
use crate::log_stderr;
use crate::models::{ExportFormat, ExportRequest, ReportType};
use crate::reports::insights::KeyInsights;
use crate::reports::provider::{ReportDataProvider, SampleDataProvider, TimeFilter};

/// Run one export and write the artifact into `out_dir`.
/// Prints the written path on stdout.
pub(crate) fn handle_export(
    report_type: ReportType,
    format: ExportFormat,
    filter: TimeFilter,
    out_dir: &Path,
) -> Result<()> {
    let provider = SampleDataProvider;
    let dataset = provider
        .fetch(filter)
        .context("Failed to fetch report dataset")?;

    let request = ExportRequest {
        report_type,
        format,
    };
    let artifact = export_report(&dataset, &request, REPORT_FILE_PREFIX, filter.label())
        .with_context(|| {
            format!(
                "Failed to export {} report as {}",
                report_type.as_str(),
                format.as_str()
            )
        })?;

    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output directory {}", out_dir.display()))?;
    let path = out_dir.join(&artifact.file_name);
    std::fs::write(&path, &artifact.bytes)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    log_stderr!(
        "Exported {} report ({} bytes) to {}",
        report_type.as_str(),
        artifact.bytes.len(),
        path.display()
    );
    println!("{}", path.display());
    Ok(())
}

/// Print key insights for the selected period as pretty JSON
pub(crate) fn handle_insights(filter: TimeFilter) -> Result<()> {
    let dataset = SampleDataProvider
        .fetch(filter)
        .context("Failed to fetch report dataset")?;
    let report = KeyInsights::calculate(&dataset);
    println!(
        "{}",
        serde_json::to_string_pretty(&report).context("Failed to serialize insights")?
    );
    Ok(())
}

/// Print the dataset snapshot for the selected period as pretty JSON
pub(crate) fn handle_dataset(filter: TimeFilter) -> Result<()> {
    let dataset = SampleDataProvider
        .fetch(filter)
        .context("Failed to fetch report dataset")?;
    println!(
        "{}",
        serde_json::to_string_pretty(&dataset).context("Failed to serialize dataset")?
    );
    Ok(())
}

/// List the valid reporting period filters
pub(crate) fn handle_filters() -> Result<()> {
    for filter in TimeFilter::ALL {
        println!("{:<13} {}", filter.slug(), filter.label());
    }
    Ok(())
}
