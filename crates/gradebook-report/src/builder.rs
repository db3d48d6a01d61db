use anyhow::Context;
use chrono::{Local, NaiveDateTime};
use gradebook_core::{Result, StudentAverage};
use rust_xlsxwriter::{Format, Workbook};

use crate::Report;

pub const SHEET_NAME: &str = "StudentGrades";
pub const HEADER: [&str; 2] = ["Student Name", "Average Grade"];

/// Renders student averages as a two-column `.xlsx` worksheet.
///
/// Rows are written in the order given; the builder never sorts.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportBuilder;

impl ReportBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Build a report stamped with the current local time
    pub fn build(&self, records: &[StudentAverage]) -> Result<Report> {
        self.build_at(records, Local::now().naive_local())
    }

    /// Build a report stamped with `generated_at`
    pub fn build_at(
        &self,
        records: &[StudentAverage],
        generated_at: NaiveDateTime,
    ) -> Result<Report> {
        let bytes = render(records).context("failed to build grades report")?;

        tracing::debug!(
            rows = records.len(),
            bytes = bytes.len(),
            "Rendered grades report"
        );

        Ok(Report::new(generated_at, bytes))
    }
}

fn render(records: &[StudentAverage]) -> anyhow::Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();

    {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(SHEET_NAME)?;

        for (col, title) in (0u16..).zip(HEADER) {
            worksheet.write_string_with_format(0, col, title, &header_format)?;
        }

        for (index, record) in records.iter().enumerate() {
            let row = u32::try_from(index + 1).context("too many rows for one worksheet")?;
            worksheet.write_string(row, 0, record.student_name.as_str())?;
            worksheet.write_number(row, 1, record.average_grade)?;
        }

        worksheet.autofit();
    }

    Ok(workbook.save_to_buffer()?)
}
