// ==========================================
// Pantry Labels - render layer
// ==========================================
// Responsibility: guest records -> label pages -> documents
// ==========================================

pub mod error;
pub mod layout;
pub mod metrics;
pub mod sheet;
pub mod writer;

pub use error::{RenderError, RenderResult};
pub use layout::{route_caption, Align, Frame, LabelLayout, LabelPage, Rule, TextCell};
pub use sheet::{LabelSheet, LabelSheetRenderer};
pub use writer::{DryRunWriter, PdfSheetWriter, SheetWriter};
