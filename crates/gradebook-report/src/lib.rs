pub mod builder;
pub mod report;

// Re-exports
pub use builder::ReportBuilder;
pub use report::{Report, XLSX_CONTENT_TYPE};
