//! PDF export functionality
//!
//! Renders projected report sections as a paginated A4 document using
//! printpdf. Each section is a titled table; vertical position is tracked
//! so a section that overflows the current page continues on a new one.

use anyhow::{anyhow, Result};
use chrono::{FixedOffset, Utc};
use printpdf::*;
use std::io::BufWriter;

use crate::config::REPORT_TZ_OFFSET_SECS;
use crate::reports::projector::ReportSection;

const FONT_SIZE_TITLE: f32 = 18.0;
const FONT_SIZE_SECTION: f32 = 14.0;
const FONT_SIZE_META: f32 = 11.0;
const FONT_SIZE_BODY: f32 = 10.0;

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
/// First baseline from the bottom of the page, in mm
const PAGE_TOP_Y: f32 = 270.0;
const BOTTOM_MARGIN: f32 = 20.0;
const LEFT_MARGIN: f32 = 20.0;
const CONTENT_WIDTH: f32 = 170.0;

const ROW_HEIGHT: f32 = 7.0;
const HEADER_ROW_HEIGHT: f32 = 8.0;
const SECTION_TITLE_HEIGHT: f32 = 10.0;
/// Gap between the end of one table and the next section's title
const SECTION_GAP: f32 = 12.0;

/// Tracks the vertical write position and the current page index.
///
/// The next table always starts at the previous table's end plus
/// [`SECTION_GAP`]; when the needed height would cross the bottom margin
/// the cursor moves to a fresh page.
#[derive(Debug)]
pub(crate) struct PageCursor {
    y: f32,
    page_index: usize,
}

impl PageCursor {
    pub(crate) fn new() -> Self {
        Self {
            y: PAGE_TOP_Y,
            page_index: 0,
        }
    }

    pub(crate) fn y(&self) -> f32 {
        self.y
    }

    pub(crate) fn page_index(&self) -> usize {
        self.page_index
    }

    /// Whether `height` more millimetres fit above the bottom margin
    pub(crate) fn fits(&self, height: f32) -> bool {
        self.y - height >= BOTTOM_MARGIN
    }

    pub(crate) fn advance(&mut self, height: f32) {
        self.y -= height;
    }

    pub(crate) fn start_page(&mut self) {
        self.page_index += 1;
        self.y = PAGE_TOP_Y;
    }
}

/// Generate a paginated report PDF.
///
/// The first page carries the report title, the active time filter, and the
/// generation date rendered in the fixed report time zone (EAT, UTC+3).
pub fn render_report_pdf(
    title: &str,
    filter_label: &str,
    sections: &[ReportSection],
) -> Result<Vec<u8>> {
    let (doc, page1, layer1) =
        PdfDocument::new(title, Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1");

    let font = doc.add_builtin_font(BuiltinFont::Helvetica)?;
    let font_bold = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;

    let mut layer = doc.get_page(page1).get_layer(layer1);
    let mut cursor = PageCursor::new();

    // Document header
    layer.use_text(
        title,
        FONT_SIZE_TITLE,
        Mm(LEFT_MARGIN),
        Mm(cursor.y()),
        &font_bold,
    );
    cursor.advance(SECTION_TITLE_HEIGHT);

    layer.use_text(
        format!("Filter: {}", filter_label),
        FONT_SIZE_META,
        Mm(LEFT_MARGIN),
        Mm(cursor.y()),
        &font,
    );
    cursor.advance(ROW_HEIGHT);

    let report_tz = FixedOffset::east_opt(REPORT_TZ_OFFSET_SECS)
        .ok_or_else(|| anyhow!("Invalid report time zone offset"))?;
    let generated = Utc::now()
        .with_timezone(&report_tz)
        .format("%Y-%m-%d %H:%M:%S %:z");
    layer.use_text(
        format!("Generated: {}", generated),
        FONT_SIZE_META,
        Mm(LEFT_MARGIN),
        Mm(cursor.y()),
        &font,
    );
    cursor.advance(ROW_HEIGHT);
    cursor.advance(SECTION_GAP);

    for section in sections {
        // The title, header row, and at least one body row stay together
        let lead_height = SECTION_TITLE_HEIGHT + HEADER_ROW_HEIGHT + ROW_HEIGHT;
        if !cursor.fits(lead_height) {
            let (next_page, next_layer) =
                doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), section.title.as_str());
            layer = doc.get_page(next_page).get_layer(next_layer);
            cursor.start_page();
        }

        draw_section_title(&layer, &font_bold, &section.title, &mut cursor);
        draw_table_header(&layer, &font_bold, &section.table.columns, &mut cursor);

        for row in &section.table.rows {
            if !cursor.fits(ROW_HEIGHT) {
                let continued = format!("{} (continued)", section.title);
                let (next_page, next_layer) =
                    doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), continued.as_str());
                layer = doc.get_page(next_page).get_layer(next_layer);
                cursor.start_page();

                draw_section_title(&layer, &font_bold, &continued, &mut cursor);
                draw_table_header(&layer, &font_bold, &section.table.columns, &mut cursor);
            }

            let columns = section.table.columns.len();
            for (i, value) in row.iter().enumerate() {
                layer.use_text(
                    value.as_str(),
                    FONT_SIZE_BODY,
                    Mm(column_x(i, columns)),
                    Mm(cursor.y()),
                    &font,
                );
            }
            cursor.advance(ROW_HEIGHT);
        }

        cursor.advance(SECTION_GAP);
    }

    let mut buf = BufWriter::new(Vec::new());
    doc.save(&mut buf)?;
    let bytes = buf.into_inner()?;

    Ok(bytes)
}

/// X position for column `index` of `count` equally wide columns
fn column_x(index: usize, count: usize) -> f32 {
    LEFT_MARGIN + CONTENT_WIDTH * index as f32 / count.max(1) as f32
}

fn draw_section_title(
    layer: &PdfLayerReference,
    font_bold: &IndirectFontRef,
    title: &str,
    cursor: &mut PageCursor,
) {
    layer.use_text(
        title,
        FONT_SIZE_SECTION,
        Mm(LEFT_MARGIN),
        Mm(cursor.y()),
        font_bold,
    );
    cursor.advance(SECTION_TITLE_HEIGHT);
}

fn draw_table_header(
    layer: &PdfLayerReference,
    font_bold: &IndirectFontRef,
    columns: &[String],
    cursor: &mut PageCursor,
) {
    for (i, column) in columns.iter().enumerate() {
        layer.use_text(
            column.as_str(),
            FONT_SIZE_BODY,
            Mm(column_x(i, columns.len())),
            Mm(cursor.y()),
            font_bold,
        );
    }
    cursor.advance(HEADER_ROW_HEIGHT);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ReportType;
    use crate::reports::projector::{project_sections, ReportSection, TabularTable};
    use crate::reports::provider::{ReportDataProvider, SampleDataProvider, TimeFilter};

    fn section_with_rows(title: &str, rows: usize) -> ReportSection {
        ReportSection {
            title: title.to_string(),
            table: TabularTable {
                columns: vec!["Metric".to_string(), "Value".to_string()],
                rows: (0..rows)
                    .map(|i| vec![format!("Metric {i}"), i.to_string()])
                    .collect(),
            },
        }
    }

    /// Drive a cursor the way the renderer does, returning the page index
    /// on which each section's title lands.
    fn title_pages(sections: &[ReportSection]) -> Vec<usize> {
        let mut cursor = PageCursor::new();
        // Document header: title + filter + date lines
        cursor.advance(SECTION_TITLE_HEIGHT + ROW_HEIGHT + ROW_HEIGHT + SECTION_GAP);

        let mut pages = Vec::new();
        for section in sections {
            let lead = SECTION_TITLE_HEIGHT + HEADER_ROW_HEIGHT + ROW_HEIGHT;
            if !cursor.fits(lead) {
                cursor.start_page();
            }
            pages.push(cursor.page_index());
            cursor.advance(SECTION_TITLE_HEIGHT + HEADER_ROW_HEIGHT);
            for _ in &section.table.rows {
                if !cursor.fits(ROW_HEIGHT) {
                    cursor.start_page();
                    cursor.advance(SECTION_TITLE_HEIGHT + HEADER_ROW_HEIGHT);
                }
                cursor.advance(ROW_HEIGHT);
            }
            cursor.advance(SECTION_GAP);
        }
        pages
    }

    #[test]
    fn cursor_starts_on_first_page_at_top() {
        let cursor = PageCursor::new();
        assert_eq!(cursor.page_index(), 0);
        assert!(cursor.fits(ROW_HEIGHT));
    }

    #[test]
    fn overflowing_section_starts_on_next_page() {
        // First section fills the page; the second's title must land on page 1
        let sections = vec![
            section_with_rows("Big Section", 40),
            section_with_rows("Second Section", 3),
        ];
        let pages = title_pages(&sections);
        assert_eq!(pages[0], 0);
        assert!(pages[1] > pages[0], "second section must begin a new page");
    }

    #[test]
    fn short_sections_share_a_page() {
        let sections = vec![
            section_with_rows("First", 3),
            section_with_rows("Second", 3),
        ];
        let pages = title_pages(&sections);
        assert_eq!(pages, vec![0, 0]);
    }

    #[test]
    fn rows_never_render_below_bottom_margin() {
        let mut cursor = PageCursor::new();
        for _ in 0..500 {
            if !cursor.fits(ROW_HEIGHT) {
                cursor.start_page();
            }
            assert!(cursor.y() - ROW_HEIGHT >= BOTTOM_MARGIN);
            cursor.advance(ROW_HEIGHT);
        }
    }

    #[test]
    fn render_produces_pdf_bytes() {
        let dataset = SampleDataProvider
            .fetch(TimeFilter::default())
            .expect("sample fetch should succeed");
        let sections = project_sections(&dataset, ReportType::Detailed);

        let bytes = render_report_pdf("Account Reports", "This Month", &sections)
            .expect("render should succeed");
        assert!(bytes.starts_with(b"%PDF"));
        assert!(!bytes.is_empty());
    }
}
