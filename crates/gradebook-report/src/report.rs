use chrono::NaiveDateTime;
use std::io::Cursor;

pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// A finished spreadsheet held entirely in memory.
///
/// Filenames only have second resolution, so two reports built in the same
/// second share a name.
#[derive(Debug, Clone)]
pub struct Report {
    pub filename: String,
    pub generated_at: NaiveDateTime,
    bytes: Vec<u8>,
}

impl Report {
    pub(crate) fn new(generated_at: NaiveDateTime, bytes: Vec<u8>) -> Self {
        Self {
            filename: filename_for(generated_at),
            generated_at,
            bytes,
        }
    }

    pub fn content_type(&self) -> &'static str {
        XLSX_CONTENT_TYPE
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Reader positioned at the first byte of the document
    pub fn into_reader(self) -> Cursor<Vec<u8>> {
        Cursor::new(self.bytes)
    }
}

/// `GradesReport-<YYYYMMDDHHMMSS>.xlsx`
pub fn filename_for(generated_at: NaiveDateTime) -> String {
    format!("GradesReport-{}.xlsx", generated_at.format("%Y%m%d%H%M%S"))
}
