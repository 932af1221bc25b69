// ==========================================
// Pantry Labels - guest ordering
// ==========================================
// Input: guests selected for one category
// Output: guests in label print order
// ==========================================

use crate::domain::{GuestRecord, SortOrder};
use std::cmp::Ordering;

// ==========================================
// GuestSorter
// ==========================================
#[derive(Debug, Default)]
pub struct GuestSorter {}

impl GuestSorter {
    pub fn new() -> Self {
        Self {}
    }

    /// Orders guests for printing.
    ///
    /// - `Input`: file order, untouched
    /// - `LastFirst`: by last name, then first name; stable, so equal names
    ///   keep file order
    pub fn sort(&self, mut guests: Vec<GuestRecord>, order: SortOrder) -> Vec<GuestRecord> {
        if order == SortOrder::LastFirst {
            guests.sort_by(|a, b| self.compare(a, b));
        }
        guests
    }

    fn compare(&self, a: &GuestRecord, b: &GuestRecord) -> Ordering {
        a.last_name
            .cmp(&b.last_name)
            .then_with(|| a.first_name.cmp(&b.first_name))
    }
}
