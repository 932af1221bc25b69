// ==========================================
// Pantry Labels - label sheet renderer
// ==========================================
// Vec<GuestRecord> -> LabelSheet (labels_for(item_count) pages per guest)
//   -> SheetWriter -> CategoryStatus
// ==========================================

use crate::domain::{CategoryStatus, GuestRecord, ListKind};
use crate::engine::label_count::labels_for;
use crate::perf::PerfGuard;
use crate::render::error::{RenderError, RenderResult};
use crate::render::layout::{LabelLayout, LabelPage};
use crate::render::writer::SheetWriter;
use std::path::Path;
use tracing::{info, warn};

// ==========================================
// LabelSheet - every page of one document
// ==========================================
#[derive(Debug, Clone, PartialEq)]
pub struct LabelSheet {
    pub pages: Vec<LabelPage>,
    pub guest_count: usize,
}

impl LabelSheet {
    pub fn label_count(&self) -> usize {
        self.pages.len()
    }
}

// ==========================================
// LabelSheetRenderer
// ==========================================
pub struct LabelSheetRenderer {
    layout: LabelLayout,
}

impl Default for LabelSheetRenderer {
    fn default() -> Self {
        Self::new(LabelLayout::default())
    }
}

impl LabelSheetRenderer {
    pub fn new(layout: LabelLayout) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> &LabelLayout {
        &self.layout
    }

    /// Lays out `labels_for(item_count)` pages per guest, in guest order.
    ///
    /// # Errors
    /// - EmptyGuestList when `guests` is empty
    pub fn build_sheet(&self, guests: &[GuestRecord], kind: ListKind) -> RenderResult<LabelSheet> {
        if guests.is_empty() {
            return Err(RenderError::EmptyGuestList);
        }

        let mut pages = Vec::new();
        for guest in guests {
            let total = labels_for(guest.item_count);
            for index in 1..=total {
                pages.push(self.layout.guest_page(guest, kind, index, total));
            }
        }

        Ok(LabelSheet {
            pages,
            guest_count: guests.len(),
        })
    }

    /// Single framed calibration page for lining up label stock.
    pub fn sample_sheet(&self) -> LabelSheet {
        LabelSheet {
            pages: vec![self.layout.sample_page()],
            guest_count: 0,
        }
    }

    /// Renders and writes one document, turning every failure into a status.
    ///
    /// `file_name` is the name used in the status line; `path` is where the
    /// document goes.
    pub fn render(
        &self,
        guests: &[GuestRecord],
        kind: ListKind,
        writer: &dyn SheetWriter,
        path: &Path,
        file_name: &str,
    ) -> CategoryStatus {
        let perf = PerfGuard::new("render_label_sheet");

        let sheet = match self.build_sheet(guests, kind) {
            Ok(sheet) => sheet,
            Err(err) => {
                warn!(file = file_name, error = %err, "label sheet not rendered");
                return CategoryStatus::Failed {
                    file: file_name.to_string(),
                    reason: err.to_string(),
                };
            }
        };

        if let Err(err) = writer.write_sheet(&sheet, path) {
            warn!(file = file_name, error = %err, "label sheet write failed");
            return CategoryStatus::Failed {
                file: file_name.to_string(),
                reason: err.to_string(),
            };
        }

        perf.record_pages(sheet.label_count());
        info!(
            file = file_name,
            guests = sheet.guest_count,
            labels = sheet.label_count(),
            "label sheet rendered"
        );
        CategoryStatus::Rendered {
            file: file_name.to_string(),
            guests: sheet.guest_count,
            labels: sheet.label_count(),
        }
    }
}
