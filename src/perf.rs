use std::cell::Cell;
use std::time::Instant;

fn is_true(v: &str) -> bool {
    matches!(
        v.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "y" | "on"
    )
}

/// Whether perf records are emitted.
///
/// - on by default in debug builds, off in release
/// - `PANTRY_LABELS_PERF=1` forces it on, `PANTRY_LABELS_PERF=0` off
pub fn perf_enabled() -> bool {
    match std::env::var("PANTRY_LABELS_PERF") {
        Ok(v) => is_true(&v),
        Err(_) => cfg!(debug_assertions),
    }
}

/// Timing guard: logs elapsed_ms (and the page count, if recorded) on drop.
///
/// ```ignore
/// let _perf = pantry_labels::perf::PerfGuard::new("render_label_sheet");
/// // do work...
/// _perf.record_pages(12);
/// ```
pub struct PerfGuard {
    op: &'static str,
    start: Instant,
    pages: Cell<Option<usize>>,
    enabled: bool,
}

impl PerfGuard {
    pub fn new(op: &'static str) -> Self {
        Self {
            op,
            start: Instant::now(),
            pages: Cell::new(None),
            enabled: perf_enabled(),
        }
    }

    pub fn record_pages(&self, pages: usize) {
        self.pages.set(Some(pages));
    }

    pub fn op(&self) -> &'static str {
        self.op
    }
}

impl Drop for PerfGuard {
    fn drop(&mut self) {
        if !self.enabled {
            return;
        }
        let elapsed_ms = self.start.elapsed().as_millis() as u64;

        match self.pages.get() {
            Some(pages) => tracing::info!(
                target: "perf",
                op = self.op,
                elapsed_ms,
                pages,
                "done"
            ),
            None => tracing::info!(target: "perf", op = self.op, elapsed_ms, "done"),
        }
    }
}
