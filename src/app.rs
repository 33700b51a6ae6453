use anyhow::Result;

use crate::cli::{parse_cli_args, usage_text, version_text, CliCommand};
use crate::command_handlers::{handle_dataset, handle_export, handle_filters, handle_insights};

/// Run the app by parsing CLI-style args and dispatching the command.
pub fn run<I, S>(args: I) -> Result<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let command = parse_cli_args(args)?;
    execute_command(command)
}

/// Execute a pre-parsed command. This is reusable for non-CLI entrypoints.
pub(crate) fn execute_command(command: CliCommand) -> Result<()> {
    match command {
        CliCommand::Help => {
            println!("{}", usage_text());
            Ok(())
        }
        CliCommand::Version => {
            println!("{}", version_text());
            Ok(())
        }
        CliCommand::Filters => handle_filters(),
        CliCommand::Insights { filter } => handle_insights(filter),
        CliCommand::Dataset { filter } => handle_dataset(filter),
        CliCommand::Export {
            report_type,
            format,
            filter,
            out_dir,
        } => handle_export(report_type, format, filter, &out_dir),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::CliCommand;
    use crate::models::{ExportFormat, ReportType};
    use crate::reports::provider::TimeFilter;

    #[test]
    fn excel_export_surfaces_not_implemented() {
        let tmp = std::env::temp_dir().join("bursar_excel_dispatch_test");
        let err = execute_command(CliCommand::Export {
            report_type: ReportType::Summary,
            format: ExportFormat::Excel,
            filter: TimeFilter::ThisMonth,
            out_dir: tmp,
        })
        .expect_err("excel export must fail");
        assert!(format!("{:#}", err).contains("not implemented"));
    }

    #[test]
    fn filters_command_succeeds() {
        execute_command(CliCommand::Filters).expect("filters should succeed");
    }
}
