// ==========================================
// Pantry Labels - report layer
// ==========================================

pub mod text_report;

pub use text_report::{txt_name_for, GuestReportWriter, SummaryReport};
