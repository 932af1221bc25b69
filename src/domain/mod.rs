// ==========================================
// Pantry Labels - domain layer
// ==========================================
// Value types shared by the importer, the renderer and the pipeline.
// No I/O here.
// ==========================================

pub mod guest;
pub mod report;
pub mod types;

pub use guest::{ClockTime, GuestKey, GuestRecord, ImportWarning, TimeWindow, GUEST_KEY_SEPARATOR};
pub use report::CategoryStatus;
pub use types::{FileRole, ListKind, SortOrder};
