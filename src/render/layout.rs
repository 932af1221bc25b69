// ==========================================
// Pantry Labels - label page layout
// ==========================================
// Pure geometry: GuestRecord -> LabelPage (text cells, rules, frames).
// Coordinates are points measured from the top-left corner of the page.
// ==========================================

use crate::domain::{GuestRecord, ListKind};
use crate::importer::data_cleaner::DataCleaner;
use crate::render::metrics::text_width;
use serde::{Deserialize, Serialize};

/// 4" x 2" landscape label stock.
pub const PAGE_WIDTH_PT: f32 = 288.0;
pub const PAGE_HEIGHT_PT: f32 = 144.0;

// baseline sits 0.3 em below the vertical middle of a cell
const BASELINE_FACTOR: f32 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Align {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextCell {
    pub text: String,
    pub font_size: f32,
    pub align: Align,
    pub x: f32,        // left edge of the text
    pub baseline: f32, // from the top of the page
}

/// Straight line from `(x1, y1)` to `(x2, y2)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

/// Rectangle outline around a cell (calibration page only).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelPage {
    pub width: f32,
    pub height: f32,
    pub cells: Vec<TextCell>,
    pub rules: Vec<Rule>,
    pub frames: Vec<Frame>,
}

impl LabelPage {
    fn blank(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            cells: Vec::new(),
            rules: Vec::new(),
            frames: Vec::new(),
        }
    }

    /// Text of every cell, top to bottom.
    pub fn texts(&self) -> Vec<&str> {
        self.cells.iter().map(|c| c.text.as_str()).collect()
    }
}

/// Route captions print `" - "` as `": "`.
pub fn route_caption(route: &str) -> String {
    route.replace(" - ", ": ")
}

// ==========================================
// LabelLayout - fixed layout constants
// ==========================================
#[derive(Debug, Clone, PartialEq)]
pub struct LabelLayout {
    pub page_width: f32,
    pub page_height: f32,
    pub top_margin: f32,
    pub cell_padding: f32,
    pub route_font_size: f32,
    pub name_font_size: f32,
    pub caption_font_size: f32,
    pub rule_y: f32,
    pub route_gap: f32, // extra advance after the route line
    pub name_gap: f32,  // extra advance after each name line
    pub last_name_max_chars: usize,
    // calibration page sits higher and tighter than guest labels
    pub sample_top_margin: f32,
    pub sample_route_gap: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PageStyle {
    Guest,
    Sample,
}

impl Default for LabelLayout {
    fn default() -> Self {
        Self {
            page_width: PAGE_WIDTH_PT,
            page_height: PAGE_HEIGHT_PT,
            top_margin: 18.0,
            cell_padding: 2.0,
            route_font_size: 28.0,
            name_font_size: 36.0,
            caption_font_size: 12.0,
            rule_y: 36.0,
            route_gap: 10.0,
            name_gap: 4.0,
            last_name_max_chars: 15,
            sample_top_margin: 10.0,
            sample_route_gap: 8.0,
        }
    }
}

impl LabelLayout {
    /// Page `index` of `total` for one guest.
    ///
    /// Top to bottom: route caption and rule (delivery only), first name,
    /// last name (truncated), "index of total".
    pub fn guest_page(
        &self,
        guest: &GuestRecord,
        kind: ListKind,
        index: u32,
        total: u32,
    ) -> LabelPage {
        self.compose(guest, kind, index, total, PageStyle::Guest)
    }

    /// Calibration label: placeholder text with every cell framed.
    pub fn sample_page(&self) -> LabelPage {
        let placeholder = GuestRecord::new("First", "Last", "Route67890123456789012", 0);
        self.compose(&placeholder, ListKind::Delivery, 1, 8, PageStyle::Sample)
    }

    fn compose(
        &self,
        guest: &GuestRecord,
        kind: ListKind,
        index: u32,
        total: u32,
        style: PageStyle,
    ) -> LabelPage {
        let (top, route_gap, framed) = match style {
            PageStyle::Guest => (self.top_margin, self.route_gap, false),
            PageStyle::Sample => (self.sample_top_margin, self.sample_route_gap, true),
        };
        let cleaner = DataCleaner;
        let mut page = LabelPage::blank(self.page_width, self.page_height);
        let mut y = top;

        if kind.prints_route() {
            self.push_cell(
                &mut page,
                route_caption(&guest.route_or_time),
                self.route_font_size,
                Align::Left,
                y,
                framed,
            );
            page.rules.push(Rule {
                x1: 0.0,
                y1: self.rule_y,
                x2: self.page_width,
                y2: self.rule_y,
            });
        }
        y += self.route_font_size + route_gap;

        self.push_cell(
            &mut page,
            cleaner.title_case(&guest.first_name),
            self.name_font_size,
            Align::Center,
            y,
            framed,
        );
        y += self.name_font_size + self.name_gap;

        let last = cleaner.truncate_chars(&guest.last_name, self.last_name_max_chars);
        self.push_cell(
            &mut page,
            cleaner.title_case(&last),
            self.name_font_size,
            Align::Center,
            y,
            framed,
        );
        y += self.name_font_size + self.name_gap;

        self.push_cell(
            &mut page,
            format!("{} of {}", index, total),
            self.caption_font_size,
            Align::Right,
            y,
            framed,
        );

        page
    }

    // Cells span the full page width; framed cells are one font size tall,
    // unframed cells have zero height and sit on the cursor line.
    fn push_cell(
        &self,
        page: &mut LabelPage,
        text: String,
        font_size: f32,
        align: Align,
        top: f32,
        framed: bool,
    ) {
        let height = if framed { font_size } else { 0.0 };
        let width = text_width(&text, font_size);
        let x = match align {
            Align::Left => self.cell_padding,
            Align::Center => (self.page_width - width) / 2.0,
            Align::Right => self.page_width - self.cell_padding - width,
        };
        let baseline = top + height / 2.0 + BASELINE_FACTOR * font_size;

        if framed {
            page.frames.push(Frame {
                x: 0.0,
                y: top,
                width: self.page_width,
                height,
            });
        }
        page.cells.push(TextCell {
            text,
            font_size,
            align,
            x,
            baseline,
        });
    }
}
