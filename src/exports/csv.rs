//! CSV export functionality
//!
//! Serializes a projected table to RFC 4180 delimited text

use anyhow::Result;
use csv::Writer;

use crate::reports::projector::TabularTable;

/// Render a projected table as CSV: header row first, then one line per
/// data row. Fields with embedded commas, quotes, or newlines are quoted
/// and escaped by the writer.
pub fn render_report_csv(table: &TabularTable) -> Result<String> {
    let mut writer = Writer::from_writer(vec![]);

    writer.write_record(&table.columns)?;
    for row in &table.rows {
        writer.write_record(row)?;
    }

    let csv_data = String::from_utf8(writer.into_inner()?)?;
    Ok(csv_data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ReportType;
    use crate::reports::projector::project_rows;
    use crate::reports::provider::{ReportDataProvider, SampleDataProvider, TimeFilter};

    #[test]
    fn summary_csv_has_header_and_five_data_rows() {
        let dataset = SampleDataProvider
            .fetch(TimeFilter::default())
            .expect("sample fetch should succeed");
        let csv = render_report_csv(&project_rows(&dataset, ReportType::Summary))
            .expect("render should succeed");

        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "Metric,Value");
    }

    #[test]
    fn currency_values_with_commas_round_trip() {
        let table = TabularTable {
            columns: vec!["Metric".to_string(), "Value".to_string()],
            rows: vec![vec!["Income Jan".to_string(), "UGX 1,500,000".to_string()]],
        };
        let csv = render_report_csv(&table).expect("render should succeed");

        let mut reader = csv::Reader::from_reader(csv.as_bytes());
        let headers = reader.headers().expect("headers should parse").clone();
        assert_eq!(&headers, &vec!["Metric", "Value"]);

        let record = reader
            .records()
            .next()
            .expect("one record expected")
            .expect("record should parse");
        assert_eq!(&record[0], "Income Jan");
        assert_eq!(&record[1], "UGX 1,500,000");
    }

    #[test]
    fn embedded_quotes_and_newlines_are_escaped() {
        let table = TabularTable {
            columns: vec!["Metric".to_string(), "Value".to_string()],
            rows: vec![vec![
                "Note \"special\"".to_string(),
                "line1\nline2".to_string(),
            ]],
        };
        let csv = render_report_csv(&table).expect("render should succeed");

        let mut reader = csv::Reader::from_reader(csv.as_bytes());
        let record = reader
            .records()
            .next()
            .expect("one record expected")
            .expect("record should parse");
        assert_eq!(&record[0], "Note \"special\"");
        assert_eq!(&record[1], "line1\nline2");
    }
}
