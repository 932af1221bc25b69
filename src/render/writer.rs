// ==========================================
// Pantry Labels - sheet writers
// ==========================================
// SheetWriter: LabelSheet -> output file
//   PdfSheetWriter: printpdf, Helvetica-Bold
//   DryRunWriter: writes nothing
// ==========================================

use crate::render::error::{RenderError, RenderResult};
use crate::render::layout::LabelPage;
use crate::render::sheet::LabelSheet;
use printpdf::{
    BuiltinFont, IndirectFontRef, Line, Mm, PdfDocument, PdfLayerReference, Point,
};
use std::fmt::Debug;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use tracing::debug;

const LAYER_NAME: &str = "Label";
const RULE_THICKNESS_PT: f32 = 1.0;

// ==========================================
// SheetWriter Trait
// ==========================================
pub trait SheetWriter {
    /// Writes every page of `sheet` to `path` as one document.
    fn write_sheet(&self, sheet: &LabelSheet, path: &Path) -> RenderResult<()>;
}

// ==========================================
// PdfSheetWriter
// ==========================================
pub struct PdfSheetWriter {
    title: String,
}

impl Default for PdfSheetWriter {
    fn default() -> Self {
        Self::new("Guest labels")
    }
}

impl PdfSheetWriter {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

impl SheetWriter for PdfSheetWriter {
    fn write_sheet(&self, sheet: &LabelSheet, path: &Path) -> RenderResult<()> {
        let first = sheet.pages.first().ok_or(RenderError::EmptyGuestList)?;

        let (doc, first_page, first_layer) = PdfDocument::new(
            self.title.as_str(),
            pt_to_mm(first.width),
            pt_to_mm(first.height),
            LAYER_NAME,
        );
        let font = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(pdf_error)?;

        for (i, page) in sheet.pages.iter().enumerate() {
            let layer = if i == 0 {
                doc.get_page(first_page).get_layer(first_layer)
            } else {
                let (page_idx, layer_idx) =
                    doc.add_page(pt_to_mm(page.width), pt_to_mm(page.height), LAYER_NAME);
                doc.get_page(page_idx).get_layer(layer_idx)
            };
            draw_page(&layer, &font, page);
        }

        let file = File::create(path)?;
        doc.save(&mut BufWriter::new(file)).map_err(pdf_error)?;

        debug!(path = %path.display(), pages = sheet.pages.len(), "pdf written");
        Ok(())
    }
}

fn draw_page(layer: &PdfLayerReference, font: &IndirectFontRef, page: &LabelPage) {
    // PDF user space starts at the bottom-left corner
    let flip = |y: f32| pt_to_mm(page.height - y);

    for cell in &page.cells {
        layer.use_text(
            cell.text.clone(),
            cell.font_size,
            pt_to_mm(cell.x),
            flip(cell.baseline),
            font,
        );
    }

    if page.rules.is_empty() && page.frames.is_empty() {
        return;
    }
    layer.set_outline_thickness(RULE_THICKNESS_PT);

    for rule in &page.rules {
        layer.add_line(Line {
            points: vec![
                (Point::new(pt_to_mm(rule.x1), flip(rule.y1)), false),
                (Point::new(pt_to_mm(rule.x2), flip(rule.y2)), false),
            ],
            is_closed: false,
        });
    }

    for frame in &page.frames {
        let (left, right) = (pt_to_mm(frame.x), pt_to_mm(frame.x + frame.width));
        let (top, bottom) = (flip(frame.y), flip(frame.y + frame.height));
        layer.add_line(Line {
            points: vec![
                (Point::new(left, top), false),
                (Point::new(right, top), false),
                (Point::new(right, bottom), false),
                (Point::new(left, bottom), false),
            ],
            is_closed: true,
        });
    }
}

fn pt_to_mm(pt: f32) -> Mm {
    Mm(pt * 25.4 / 72.0)
}

fn pdf_error<E: Debug>(err: E) -> RenderError {
    RenderError::Pdf(format!("{:?}", err))
}

// ==========================================
// DryRunWriter
// ==========================================
// Used by --dry-run: counts what would have been written.
#[derive(Debug, Default)]
pub struct DryRunWriter;

impl SheetWriter for DryRunWriter {
    fn write_sheet(&self, sheet: &LabelSheet, path: &Path) -> RenderResult<()> {
        debug!(
            path = %path.display(),
            pages = sheet.pages.len(),
            "dry run, document not written"
        );
        Ok(())
    }
}
