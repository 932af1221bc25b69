// ==========================================
// Pantry Labels - text reports
// ==========================================
// GuestReportWriter: one .txt per rendered document
// SummaryReport: one status line per category
// ==========================================

use crate::domain::{CategoryStatus, GuestRecord};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// `tags-for-Delivery.pdf` -> `tags-for-Delivery.txt`
pub fn txt_name_for(pdf_name: &str) -> String {
    match pdf_name.strip_suffix(".pdf") {
        Some(stem) => format!("{}.txt", stem),
        None => format!("{}.txt", pdf_name),
    }
}

// ==========================================
// GuestReportWriter
// ==========================================
#[derive(Debug, Default)]
pub struct GuestReportWriter;

impl GuestReportWriter {
    pub fn new() -> Self {
        Self
    }

    /// Report body: blank line, report file name, one line per guest.
    pub fn format(&self, guests: &[GuestRecord], txt_name: &str) -> String {
        let mut out = format!("\n{}\n", txt_name);
        for guest in guests {
            out.push_str(&format!(
                "  {:<12} {:<12}     Time={}     bags={}\n",
                guest.first_name, guest.last_name, guest.route_or_time, guest.item_count
            ));
        }
        out
    }

    /// Writes the companion report for `pdf_name` into `output_dir`.
    ///
    /// # Errors
    /// Returns the I/O error; callers downgrade it to a warning.
    pub fn write(
        &self,
        guests: &[GuestRecord],
        pdf_name: &str,
        output_dir: &Path,
    ) -> io::Result<PathBuf> {
        let txt_name = txt_name_for(pdf_name);
        let path = output_dir.join(&txt_name);
        fs::write(&path, self.format(guests, &txt_name))?;
        debug!(path = %path.display(), guests = guests.len(), "guest report written");
        Ok(path)
    }

    /// Like `write`, but a failure only logs and returns the warning text.
    pub fn write_or_warn(
        &self,
        guests: &[GuestRecord],
        pdf_name: &str,
        output_dir: &Path,
    ) -> Option<String> {
        match self.write(guests, pdf_name, output_dir) {
            Ok(_) => None,
            Err(err) => {
                warn!(file = pdf_name, error = %err, "guest report not written");
                Some(format!("Failed to write report file for {}: {}", pdf_name, err))
            }
        }
    }
}

// ==========================================
// SummaryReport
// ==========================================
#[derive(Debug, Default, Clone)]
pub struct SummaryReport {
    lines: Vec<String>,
}

impl SummaryReport {
    pub fn from_statuses(statuses: &[CategoryStatus]) -> Self {
        Self {
            lines: statuses.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }

    pub fn write_to(&self, path: &Path) -> io::Result<()> {
        let mut file = fs::File::create(path)?;
        file.write_all(self.render().as_bytes())?;
        file.flush()
    }
}
