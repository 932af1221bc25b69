// ==========================================
// Pantry Labels - guest list classifier
// ==========================================
// Guest list export ("First", "Last", "Route or Pickup Time")
//   + InventoryIndex -> ClassifiedGuestList
// ClassifiedGuestList::within(window) -> Vec<GuestRecord>
// ==========================================

use crate::domain::{ClockTime, GuestKey, GuestRecord, ImportWarning, ListKind, TimeWindow};
use crate::importer::data_cleaner::DataCleaner;
use crate::importer::error::ImportResult;
use crate::importer::field_mapper::{
    FieldMapper, GuestRow, COL_ROUTE_OR_TIME, GUEST_LIST_REQUIRED_COLUMNS,
};
use crate::importer::importer_trait::RawTable;
use crate::importer::inventory::{InventoryIndex, DEFAULT_ITEM_COUNT};
use tracing::{info, instrument, warn};

/// Rows inspected, including row 0, when cross-checking the list kind.
pub const DEFAULT_CLASSIFICATION_SAMPLE_ROWS: usize = 5;

#[derive(Debug, Clone, PartialEq)]
struct ClassifiedEntry {
    record: GuestRecord,
    time: Option<ClockTime>, // Some for every PickupWindow entry
}

// ==========================================
// ClassifiedGuestList - one guest list file, joined
// ==========================================
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedGuestList {
    pub source: String,
    pub kind: ListKind,
    pub warnings: Vec<ImportWarning>,
    entries: Vec<ClassifiedEntry>,
}

impl ClassifiedGuestList {
    /// Guests in input order.
    ///
    /// Delivery lists ignore the window and return every row verbatim.
    /// Pickup lists keep rows with `start <= hour < end` (all rows when
    /// `window` is `None`) with names in title case.
    pub fn within(&self, window: Option<TimeWindow>) -> Vec<GuestRecord> {
        match self.kind {
            ListKind::Delivery => self.entries.iter().map(|e| e.record.clone()).collect(),
            ListKind::PickupWindow => {
                let cleaner = DataCleaner;
                self.entries
                    .iter()
                    .filter(|e| match (window, e.time) {
                        (Some(w), Some(t)) => w.contains(t),
                        (None, _) => true,
                        (Some(_), None) => false,
                    })
                    .map(|e| GuestRecord {
                        first_name: cleaner.title_case(&e.record.first_name),
                        last_name: cleaner.title_case(&e.record.last_name),
                        route_or_time: e.record.route_or_time.clone(),
                        item_count: e.record.item_count,
                    })
                    .collect()
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ==========================================
// GuestListClassifier
// ==========================================
pub struct GuestListClassifier {
    sample_rows: usize,
    field_mapper: FieldMapper,
    data_cleaner: DataCleaner,
}

impl Default for GuestListClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_CLASSIFICATION_SAMPLE_ROWS)
    }
}

impl GuestListClassifier {
    pub fn new(sample_rows: usize) -> Self {
        Self {
            sample_rows: sample_rows.max(1),
            field_mapper: FieldMapper,
            data_cleaner: DataCleaner,
        }
    }

    /// Kind of a single route-or-time value.
    pub fn kind_of(value: &str) -> ListKind {
        if ClockTime::matches(value) {
            ListKind::PickupWindow
        } else {
            ListKind::Delivery
        }
    }

    /// Kind of the whole list, decided from the first data row.
    /// An empty list is treated as Delivery.
    pub fn detect_kind(&self, table: &RawTable) -> ListKind {
        table
            .first_row()
            .and_then(|row| row.get(COL_ROUTE_OR_TIME))
            .map(|v| Self::kind_of(v))
            .unwrap_or(ListKind::Delivery)
    }

    /// Joins a guest list against the inventory index.
    ///
    /// # Errors
    /// - MissingColumn when First, Last or Route or Pickup Time is absent
    #[instrument(skip(self, table, index), fields(rows = table.len()))]
    pub fn classify(
        &self,
        table: &RawTable,
        index: &InventoryIndex,
        source: &str,
    ) -> ImportResult<ClassifiedGuestList> {
        self.field_mapper
            .require_columns(table, source, GUEST_LIST_REQUIRED_COLUMNS)?;

        let kind = self.detect_kind(table);
        let mut warnings = Vec::new();

        if let Some(warning) = self.check_sample(table, kind) {
            warn!(source, kind = %kind, "{}", warning.message);
            warnings.push(warning);
        }

        let mut entries = Vec::with_capacity(table.len());
        for (idx, raw) in table.rows.iter().enumerate() {
            let row = self.field_mapper.map_guest_row(raw, idx + 1);

            let time = match kind {
                ListKind::Delivery => None,
                ListKind::PickupWindow => match ClockTime::parse(&row.route_or_time) {
                    Some(t) => Some(t),
                    None => {
                        let warning = ImportWarning::new(
                            row.row_number,
                            format!(
                                "{} {} has pickup time {:?} that is not H:MM AM/PM; row dropped",
                                row.first, row.last, row.route_or_time
                            ),
                        );
                        warn!(row = row.row_number, source, "{}", warning.message);
                        warnings.push(warning);
                        continue;
                    }
                },
            };

            let item_count = self.lookup_item_count(&row, index, &mut warnings);

            entries.push(ClassifiedEntry {
                record: GuestRecord::new(row.first, row.last, row.route_or_time, item_count),
                time,
            });
        }

        info!(
            source,
            kind = %kind,
            guests = entries.len(),
            warnings = warnings.len(),
            "guest list classified"
        );

        Ok(ClassifiedGuestList {
            source: source.to_string(),
            kind,
            warnings,
            entries,
        })
    }

    fn lookup_item_count(
        &self,
        row: &GuestRow,
        index: &InventoryIndex,
        warnings: &mut Vec<ImportWarning>,
    ) -> u32 {
        let last = self.data_cleaner.strip_markers(&row.last);
        let found = GuestKey::new(&row.first, &last).map(|key| {
            let count = index.get(&key);
            (key, count)
        });

        match found {
            Some((_, Some(count))) => count,
            Some((key, None)) => {
                let warning = ImportWarning::new(
                    row.row_number,
                    format!(
                        "{} not found in inventory; defaulting item count to {}",
                        key, DEFAULT_ITEM_COUNT
                    ),
                );
                warn!(row = row.row_number, key = %key, "{}", warning.message);
                warnings.push(warning);
                DEFAULT_ITEM_COUNT
            }
            None => {
                let warning = ImportWarning::new(
                    row.row_number,
                    format!(
                        "row has no guest name; defaulting item count to {}",
                        DEFAULT_ITEM_COUNT
                    ),
                );
                warn!(row = row.row_number, "{}", warning.message);
                warnings.push(warning);
                DEFAULT_ITEM_COUNT
            }
        }
    }

    /// Compares the first `sample_rows` rows against the row-0 kind.
    fn check_sample(&self, table: &RawTable, kind: ListKind) -> Option<ImportWarning> {
        let disagreeing = table
            .rows
            .iter()
            .take(self.sample_rows)
            .skip(1)
            .filter_map(|row| row.get(COL_ROUTE_OR_TIME))
            .filter(|v| Self::kind_of(v) != kind)
            .count();

        if disagreeing == 0 {
            return None;
        }
        Some(ImportWarning::new(
            0,
            format!(
                "list classified as {} from its first row, but {} of the next {} sampled rows disagree",
                kind,
                disagreeing,
                self.sample_rows.saturating_sub(1).min(table.len().saturating_sub(1))
            ),
        ))
    }
}
