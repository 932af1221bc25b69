// ==========================================
// Pantry Labels - field mapper
// ==========================================
// Source columns -> typed row structs + required column checks
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use crate::importer::importer_trait::RawTable;
use std::collections::HashMap;

// ===== inventory export columns =====
pub const COL_CLIENT: &str = "Client";
pub const COL_TOTAL_QUANTITY: &str = "Total Quantity";

// ===== guest list export columns =====
pub const COL_FIRST: &str = "First";
pub const COL_LAST: &str = "Last";
pub const COL_ROUTE_OR_TIME: &str = "Route or Pickup Time";

pub const INVENTORY_REQUIRED_COLUMNS: &[&str] = &[COL_CLIENT];
pub const GUEST_LIST_REQUIRED_COLUMNS: &[&str] = &[COL_FIRST, COL_LAST, COL_ROUTE_OR_TIME];

// ==========================================
// InventoryRow - one inventory export row
// ==========================================
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryRow {
    pub client: Option<String>,         // "Last, First"
    pub total_quantity: Option<String>, // numeric, may be fractional
    pub row_number: usize,
}

// ==========================================
// GuestRow - one guest list export row
// ==========================================
#[derive(Debug, Clone, PartialEq)]
pub struct GuestRow {
    pub first: String,
    pub last: String,
    pub route_or_time: String,
    pub row_number: usize,
}

pub struct FieldMapper;

impl FieldMapper {
    /// Fails on the first required column missing from the header row.
    pub fn require_columns(
        &self,
        table: &RawTable,
        file: &str,
        columns: &[&str],
    ) -> ImportResult<()> {
        for column in columns {
            if !table.has_column(column) {
                return Err(ImportError::MissingColumn {
                    file: file.to_string(),
                    column: column.to_string(),
                });
            }
        }
        Ok(())
    }

    pub fn map_inventory_row(&self, row: &HashMap<String, String>, row_number: usize) -> InventoryRow {
        InventoryRow {
            client: self.get_string(row, COL_CLIENT),
            total_quantity: self.get_string(row, COL_TOTAL_QUANTITY),
            row_number,
        }
    }

    pub fn map_guest_row(&self, row: &HashMap<String, String>, row_number: usize) -> GuestRow {
        GuestRow {
            first: self.get_string(row, COL_FIRST).unwrap_or_default(),
            last: self.get_string(row, COL_LAST).unwrap_or_default(),
            route_or_time: self.get_string(row, COL_ROUTE_OR_TIME).unwrap_or_default(),
            row_number,
        }
    }

    /// Trimmed, non-empty value of `key`.
    fn get_string(&self, row: &HashMap<String, String>, key: &str) -> Option<String> {
        row.get(key).and_then(|v| {
            let trimmed = v.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        })
    }
}
