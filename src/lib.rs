// ==========================================
// Pantry Labels - core library
// ==========================================
// Inventory export + guest lists -> per-category PDF label sheets
// and text reports.
// ==========================================

// ==========================================
// Modules
// ==========================================

// domain - value types
pub mod domain;

// importer - CSV / spreadsheet inputs
pub mod importer;

// engine - label counts, ordering, run orchestration
pub mod engine;

// render - label layout and PDF output
pub mod render;

// report - text reports
pub mod report;

// config - run configuration
pub mod config;

// logging
pub mod logging;

// timing
pub mod perf;

// ==========================================
// Re-exports
// ==========================================

pub use config::{ConfigManager, LabelConfig};
pub use domain::{
    CategoryStatus, ClockTime, FileRole, GuestKey, GuestRecord, ImportWarning, ListKind,
    SortOrder, TimeWindow,
};
pub use engine::{discover_inputs, labels_for, LabelRun, PipelineError, RunSummary};
pub use importer::{ImportError, InventoryIndex};
pub use render::{LabelSheetRenderer, PdfSheetWriter, RenderError, SheetWriter};

// ==========================================
// Constants
// ==========================================

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const APP_NAME: &str = "pantry-labels";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
