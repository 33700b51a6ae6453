use anyhow::Result;
use std::path::PathBuf;

use crate::models::{ExportFormat, ReportType};
use crate::reports::provider::TimeFilter;

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum CliCommand {
    Export {
        report_type: ReportType,
        format: ExportFormat,
        filter: TimeFilter,
        out_dir: PathBuf,
    },
    Insights {
        filter: TimeFilter,
    },
    Dataset {
        filter: TimeFilter,
    },
    Filters,
    Help,
    Version,
}

pub(crate) fn version_text() -> String {
    format!("bursar-core {}", env!("CARGO_PKG_VERSION"))
}

pub(crate) fn usage_text() -> String {
    format!(
        "{version}
BURSAR Reports Engine — Accounts Reporting CLI

Usage:
  bursar-core [export] [--type <TYPE>] [--format <FORMAT>] [--filter <FILTER>] [--out <DIR>]
  bursar-core insights [--filter <FILTER>]
  bursar-core dataset [--filter <FILTER>]
  bursar-core filters
  bursar-core --help
  bursar-core --version

Options:
  -t, --type <TYPE>      Report type: summary, detailed, department, trends (default: summary)
  -f, --format <FORMAT>  Export format: csv, pdf, excel (default: pdf)
      --filter <FILTER>  Reporting period, e.g. this-month (default: this-month)
  -o, --out <DIR>        Directory the export file is written to (default: .)
  -h, --help             Show this help text
  -V, --version          Show version"
    , version = version_text())
}

fn parse_report_type(raw: &str) -> Result<ReportType> {
    raw.parse::<ReportType>()
        .map_err(|e| anyhow::anyhow!("{}\n\n{}", e, usage_text()))
}

fn parse_format(raw: &str) -> Result<ExportFormat> {
    raw.parse::<ExportFormat>()
        .map_err(|e| anyhow::anyhow!("{}\n\n{}", e, usage_text()))
}

fn parse_filter(raw: &str) -> Result<TimeFilter> {
    raw.parse::<TimeFilter>()
        .map_err(|e| anyhow::anyhow!("{}\n\n{}", e, usage_text()))
}

pub(crate) fn parse_cli_args<I, S>(args: I) -> Result<CliCommand>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut iter = args.into_iter();
    let _program_name = iter.next();

    let mut command: Option<String> = None;
    let mut report_type: Option<ReportType> = None;
    let mut format: Option<ExportFormat> = None;
    let mut filter: Option<TimeFilter> = None;
    let mut out_dir: Option<PathBuf> = None;

    while let Some(arg) = iter.next() {
        let arg = arg.as_ref();
        match arg {
            "-h" | "--help" => return Ok(CliCommand::Help),
            "-V" | "--version" => return Ok(CliCommand::Version),
            "export" | "insights" | "dataset" | "filters" => {
                if command.as_deref().is_some_and(|existing| existing != arg) {
                    return Err(anyhow::anyhow!(
                        "Multiple commands provided. Use only one command.\n\n{}",
                        usage_text()
                    ));
                }
                command = Some(arg.to_string());
            }
            "-t" | "--type" => {
                let value = iter.next().ok_or_else(|| {
                    anyhow::anyhow!("Missing value for --type.\n\n{}", usage_text())
                })?;
                report_type = Some(parse_report_type(value.as_ref())?);
            }
            "-f" | "--format" => {
                let value = iter.next().ok_or_else(|| {
                    anyhow::anyhow!("Missing value for --format.\n\n{}", usage_text())
                })?;
                format = Some(parse_format(value.as_ref())?);
            }
            "--filter" => {
                let value = iter.next().ok_or_else(|| {
                    anyhow::anyhow!("Missing value for --filter.\n\n{}", usage_text())
                })?;
                filter = Some(parse_filter(value.as_ref())?);
            }
            "-o" | "--out" => {
                let value = iter.next().ok_or_else(|| {
                    anyhow::anyhow!("Missing value for --out.\n\n{}", usage_text())
                })?;
                out_dir = Some(PathBuf::from(value.as_ref()));
            }
            _ if arg.starts_with("--type=") => {
                let value = arg.split_once('=').map(|(_, v)| v).unwrap_or_default();
                if value.is_empty() {
                    return Err(anyhow::anyhow!(
                        "Missing value for --type.\n\n{}",
                        usage_text()
                    ));
                }
                report_type = Some(parse_report_type(value)?);
            }
            _ if arg.starts_with("--format=") => {
                let value = arg.split_once('=').map(|(_, v)| v).unwrap_or_default();
                if value.is_empty() {
                    return Err(anyhow::anyhow!(
                        "Missing value for --format.\n\n{}",
                        usage_text()
                    ));
                }
                format = Some(parse_format(value)?);
            }
            _ if arg.starts_with("--filter=") => {
                let value = arg.split_once('=').map(|(_, v)| v).unwrap_or_default();
                if value.is_empty() {
                    return Err(anyhow::anyhow!(
                        "Missing value for --filter.\n\n{}",
                        usage_text()
                    ));
                }
                filter = Some(parse_filter(value)?);
            }
            _ if arg.starts_with("--out=") => {
                let value = arg.split_once('=').map(|(_, v)| v).unwrap_or_default();
                if value.is_empty() {
                    return Err(anyhow::anyhow!(
                        "Missing value for --out.\n\n{}",
                        usage_text()
                    ));
                }
                out_dir = Some(PathBuf::from(value));
            }
            _ => {
                return Err(anyhow::anyhow!(
                    "Unknown argument: {arg}\n\n{}",
                    usage_text()
                ));
            }
        }
    }

    match command.as_deref().unwrap_or("export") {
        "export" => Ok(CliCommand::Export {
            report_type: report_type.unwrap_or(ReportType::Summary),
            format: format.unwrap_or(ExportFormat::Pdf),
            filter: filter.unwrap_or_default(),
            out_dir: out_dir.unwrap_or_else(|| PathBuf::from(".")),
        }),
        "insights" => {
            if report_type.is_some() || format.is_some() || out_dir.is_some() {
                return Err(anyhow::anyhow!(
                    "--type/--format/--out are only valid with export.\n\n{}",
                    usage_text()
                ));
            }
            Ok(CliCommand::Insights {
                filter: filter.unwrap_or_default(),
            })
        }
        "dataset" => {
            if report_type.is_some() || format.is_some() || out_dir.is_some() {
                return Err(anyhow::anyhow!(
                    "--type/--format/--out are only valid with export.\n\n{}",
                    usage_text()
                ));
            }
            Ok(CliCommand::Dataset {
                filter: filter.unwrap_or_default(),
            })
        }
        "filters" => {
            if report_type.is_some() || format.is_some() || filter.is_some() || out_dir.is_some() {
                return Err(anyhow::anyhow!(
                    "Options are not valid with filters.\n\n{}",
                    usage_text()
                ));
            }
            Ok(CliCommand::Filters)
        }
        _ => unreachable!(),
    }
}
