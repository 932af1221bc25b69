// ==========================================
// Pantry Labels - inventory index builder
// ==========================================
// Inventory export ("Client" = "Last, First", "Total Quantity")
//   -> GuestKey -> item count
// ==========================================

use crate::domain::{GuestKey, ImportWarning};
use crate::importer::data_cleaner::DataCleaner;
use crate::importer::error::ImportResult;
use crate::importer::field_mapper::{FieldMapper, INVENTORY_REQUIRED_COLUMNS};
use crate::importer::importer_trait::RawTable;
use std::collections::HashMap;
use tracing::{debug, info, instrument, warn};

/// Item count used when a quantity or a guest cannot be resolved.
pub const DEFAULT_ITEM_COUNT: u32 = 1;

// ==========================================
// InventoryIndex - GuestKey -> item count
// ==========================================
// Built once per run, read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InventoryIndex {
    counts: HashMap<GuestKey, u32>,
}

impl InventoryIndex {
    pub fn get(&self, key: &GuestKey) -> Option<u32> {
        self.counts.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

impl FromIterator<(GuestKey, u32)> for InventoryIndex {
    fn from_iter<I: IntoIterator<Item = (GuestKey, u32)>>(iter: I) -> Self {
        Self {
            counts: iter.into_iter().collect(),
        }
    }
}

// ==========================================
// InventoryImport - builder output
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct InventoryImport {
    pub index: InventoryIndex,
    pub warnings: Vec<ImportWarning>,
    pub skipped_rows: usize,
}

// ==========================================
// InventoryIndexBuilder
// ==========================================
pub struct InventoryIndexBuilder {
    field_mapper: FieldMapper,
    data_cleaner: DataCleaner,
}

impl Default for InventoryIndexBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl InventoryIndexBuilder {
    pub fn new() -> Self {
        Self {
            field_mapper: FieldMapper,
            data_cleaner: DataCleaner,
        }
    }

    /// Builds the index from a parsed inventory export.
    ///
    /// # Errors
    /// - MissingColumn when the `Client` column is absent
    ///
    /// Unparseable names skip the row, unparseable quantities count as 1,
    /// duplicate keys keep the last row. All three only produce warnings.
    #[instrument(skip(self, table), fields(rows = table.len()))]
    pub fn build(&self, table: &RawTable, source: &str) -> ImportResult<InventoryImport> {
        self.field_mapper
            .require_columns(table, source, INVENTORY_REQUIRED_COLUMNS)?;

        let mut counts: HashMap<GuestKey, u32> = HashMap::new();
        let mut warnings = Vec::new();
        let mut skipped_rows = 0;

        for (idx, raw) in table.rows.iter().enumerate() {
            let row = self.field_mapper.map_inventory_row(raw, idx + 1);

            let key = row
                .client
                .as_deref()
                .and_then(|client| self.data_cleaner.split_client_name(client))
                .and_then(|(first, last)| GuestKey::new(first, last));

            let key = match key {
                Some(key) => key,
                None => {
                    let warning = ImportWarning::new(
                        row.row_number,
                        format!(
                            "no usable client name in {:?}; row skipped",
                            row.client.as_deref().unwrap_or("")
                        ),
                    );
                    warn!(row = row.row_number, source, "{}", warning.message);
                    warnings.push(warning);
                    skipped_rows += 1;
                    continue;
                }
            };

            let count = match self.data_cleaner.parse_quantity(row.total_quantity.as_deref()) {
                Some(q) if q < 0 => {
                    let warning = ImportWarning::new(
                        row.row_number,
                        format!("{} has negative item count {}; using 0", key, q),
                    );
                    warn!(row = row.row_number, key = %key, "{}", warning.message);
                    warnings.push(warning);
                    0
                }
                Some(q) => u32::try_from(q).unwrap_or(u32::MAX),
                None => {
                    let warning = ImportWarning::new(
                        row.row_number,
                        format!(
                            "{} has no item count; defaulting to {}",
                            key, DEFAULT_ITEM_COUNT
                        ),
                    );
                    warn!(row = row.row_number, key = %key, "{}", warning.message);
                    warnings.push(warning);
                    DEFAULT_ITEM_COUNT
                }
            };

            if let Some(previous) = counts.insert(key.clone(), count) {
                debug!(key = %key, previous, count, "duplicate inventory key, last row wins");
            }
        }

        info!(
            source,
            guests = counts.len(),
            skipped = skipped_rows,
            warnings = warnings.len(),
            "inventory index built"
        );

        Ok(InventoryImport {
            index: InventoryIndex { counts },
            warnings,
            skipped_rows,
        })
    }
}
