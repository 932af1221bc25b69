// ==========================================
// Pantry Labels - engine layer
// ==========================================
// Responsibility: label counts, guest ordering, run orchestration
// No PDF or CSV details here; those live in render / importer.
// ==========================================

pub mod error;
pub mod guest_sorter;
pub mod label_count;
pub mod orchestrator;

pub use error::{PipelineError, PipelineResult};
pub use guest_sorter::GuestSorter;
pub use label_count::{label_table, labels_for, LABEL_BREAKPOINTS, MAX_LABELS};
pub use orchestrator::{discover_inputs, LabelRun, RunSummary};
