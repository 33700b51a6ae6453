use bursar_core::{
    export_report, ExportFormat, ExportRequest, ReportDataProvider, ReportType,
    SampleDataProvider, TimeFilter,
};

fn sample_dataset() -> bursar_core::ReportDataset {
    SampleDataProvider
        .fetch(TimeFilter::ThisMonth)
        .expect("sample provider should produce a dataset")
}

#[test]
fn csv_export_writes_a_parseable_file() {
    let dataset = sample_dataset();
    let artifact = export_report(
        &dataset,
        &ExportRequest {
            report_type: ReportType::Summary,
            format: ExportFormat::Csv,
        },
        "report",
        "This Month",
    )
    .expect("csv export should succeed");

    let dir = tempfile::tempdir().expect("tempdir should be created");
    let path = dir.path().join(&artifact.file_name);
    std::fs::write(&path, &artifact.bytes).expect("artifact should be written");

    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .expect("file name should be valid utf-8");
    assert!(name.starts_with("report-summary-"));
    assert!(name.ends_with(".csv"));

    let mut reader = csv::Reader::from_path(&path).expect("written file should open as CSV");
    let headers = reader.headers().expect("headers should parse").clone();
    assert_eq!(&headers, &vec!["Metric", "Value"]);

    let records: Vec<csv::StringRecord> = reader
        .records()
        .collect::<Result<_, _>>()
        .expect("all records should parse");
    assert_eq!(records.len(), 5);
    assert_eq!(&records[0][1], "UGX 22,345,000");
}

#[test]
fn pdf_export_writes_a_pdf_file_for_every_report_type() {
    let dataset = sample_dataset();
    let dir = tempfile::tempdir().expect("tempdir should be created");

    for report_type in ReportType::ALL {
        let artifact = export_report(
            &dataset,
            &ExportRequest {
                report_type,
                format: ExportFormat::Pdf,
            },
            "report",
            "This Month",
        )
        .expect("pdf export should succeed");

        let path = dir.path().join(&artifact.file_name);
        std::fs::write(&path, &artifact.bytes).expect("artifact should be written");

        let bytes = std::fs::read(&path).expect("written file should read back");
        assert!(
            bytes.starts_with(b"%PDF"),
            "{} export should be a PDF document",
            report_type.as_str()
        );
    }
}

#[test]
fn excel_export_fails_without_writing_anything() {
    let dataset = sample_dataset();
    let err = export_report(
        &dataset,
        &ExportRequest {
            report_type: ReportType::Trends,
            format: ExportFormat::Excel,
        },
        "report",
        "This Month",
    )
    .expect_err("excel export must fail");
    assert!(err.to_string().contains("not implemented"));
}

#[test]
fn department_export_row_count_matches_dataset() {
    let dataset = sample_dataset();
    let artifact = export_report(
        &dataset,
        &ExportRequest {
            report_type: ReportType::Department,
            format: ExportFormat::Csv,
        },
        "report",
        "This Month",
    )
    .expect("csv export should succeed");

    let text = String::from_utf8(artifact.bytes).expect("csv should be utf-8");
    let mut reader = csv::Reader::from_reader(text.as_bytes());
    let records: Vec<csv::StringRecord> = reader
        .records()
        .collect::<Result<_, _>>()
        .expect("all records should parse");

    assert_eq!(records.len(), dataset.departments.len());
    for (record, dept) in records.iter().zip(&dataset.departments) {
        assert_eq!(&record[0], dept.department.as_str());
    }
}
