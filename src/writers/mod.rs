pub mod color;
pub mod write_report;

pub use write_report::{ReportOptions, ReportWriter};
