// ==========================================
// Pantry Labels - file parsers
// ==========================================
// Supports: CSV (.csv) / spreadsheet (.xlsx/.xls)
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use crate::importer::importer_trait::{FileParser, RawTable};
use calamine::{open_workbook_auto, Reader};
use csv::ReaderBuilder;
use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

// ==========================================
// CSV Parser
// ==========================================
pub struct CsvParser;

impl FileParser for CsvParser {
    fn parse_to_table(&self, file_path: &Path) -> ImportResult<RawTable> {
        let path = file_path;

        if !path.exists() {
            return Err(ImportError::FileNotFound(path.display().to_string()));
        }

        if let Some(ext) = path.extension() {
            if !ext.eq_ignore_ascii_case("csv") {
                return Err(ImportError::UnsupportedFormat(
                    ext.to_string_lossy().to_string(),
                ));
            }
        }

        let file = File::open(path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // exports are not always rectangular
            .from_reader(file);

        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim_start_matches('\u{feff}').trim().to_string())
            .collect();

        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result?;
            let mut row_map = HashMap::new();

            for (col_idx, value) in record.iter().enumerate() {
                if let Some(header) = headers.get(col_idx) {
                    row_map.insert(header.clone(), value.trim().to_string());
                }
            }

            if row_map.values().all(|v| v.is_empty()) {
                continue;
            }

            rows.push(row_map);
        }

        Ok(RawTable { headers, rows })
    }
}

// ==========================================
// Excel Parser
// ==========================================
// First worksheet, first row is the header.
pub struct ExcelParser;

impl FileParser for ExcelParser {
    fn parse_to_table(&self, file_path: &Path) -> ImportResult<RawTable> {
        let path = file_path;

        if !path.exists() {
            return Err(ImportError::FileNotFound(path.display().to_string()));
        }

        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();
        if ext != "xlsx" && ext != "xls" {
            return Err(ImportError::UnsupportedFormat(ext));
        }

        let mut workbook = open_workbook_auto(path)?;

        let sheet_names = workbook.sheet_names();
        let sheet_name = sheet_names
            .first()
            .cloned()
            .ok_or_else(|| ImportError::ExcelParseError("workbook has no sheets".to_string()))?;
        let range = workbook.worksheet_range(&sheet_name)?;

        let mut sheet_rows = range.rows();
        let headers: Vec<String> = match sheet_rows.next() {
            Some(header_row) => header_row
                .iter()
                .map(|cell| cell.to_string().trim().to_string())
                .collect(),
            None => return Ok(RawTable::default()),
        };

        let mut rows = Vec::new();
        for data_row in sheet_rows {
            let mut row_map = HashMap::new();

            for (col_idx, cell) in data_row.iter().enumerate() {
                if let Some(header) = headers.get(col_idx) {
                    row_map.insert(header.clone(), cell.to_string().trim().to_string());
                }
            }

            if row_map.values().all(|v| v.is_empty()) {
                continue;
            }

            rows.push(row_map);
        }

        Ok(RawTable { headers, rows })
    }
}

// ==========================================
// Universal parser (picks by extension)
// ==========================================
pub struct UniversalFileParser;

impl FileParser for UniversalFileParser {
    fn parse_to_table(&self, file_path: &Path) -> ImportResult<RawTable> {
        let ext = file_path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "csv" => CsvParser.parse_to_table(file_path),
            "xlsx" | "xls" => ExcelParser.parse_to_table(file_path),
            _ => Err(ImportError::UnsupportedFormat(ext)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::GuestKey;
    use crate::importer::inventory::InventoryIndexBuilder;
    use rust_xlsxwriter::Workbook;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::{NamedTempFile, TempDir};

    fn save_workbook(dir: &TempDir, name: &str, workbook: &mut Workbook) -> PathBuf {
        let path = dir.path().join(name);
        workbook.save(&path).unwrap();
        path
    }

    #[test]
    fn test_csv_parser_valid_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "Client,Total Quantity").unwrap();
        writeln!(temp_file, "\"Smith, Jane\",30").unwrap();
        writeln!(temp_file, "\"Doe, John\",12.5").unwrap();

        let table = CsvParser.parse_to_table(temp_file.path()).unwrap();

        assert_eq!(table.headers, vec!["Client", "Total Quantity"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows[0].get("Client"), Some(&"Smith, Jane".to_string()));
        assert_eq!(table.rows[1].get("Total Quantity"), Some(&"12.5".to_string()));
    }

    #[test]
    fn test_csv_parser_file_not_found() {
        let result = CsvParser.parse_to_table(Path::new("non_existent.csv"));
        assert!(matches!(result, Err(ImportError::FileNotFound(_))));
    }

    #[test]
    fn test_csv_parser_skip_empty_rows() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "First,Last").unwrap();
        writeln!(temp_file, "Jane,Smith").unwrap();
        writeln!(temp_file, ",").unwrap();
        writeln!(temp_file, "John,Doe").unwrap();

        let table = CsvParser.parse_to_table(temp_file.path()).unwrap();
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_csv_parser_header_only() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, " First , Last ,Route or Pickup Time").unwrap();

        let table = CsvParser.parse_to_table(temp_file.path()).unwrap();
        assert!(table.is_empty());
        assert!(table.has_column("Route or Pickup Time"));
        assert!(table.has_column("First"));
    }

    #[test]
    fn test_universal_parser_rejects_unknown_extension() {
        let temp_file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        let result = UniversalFileParser.parse_to_table(temp_file.path());
        assert!(matches!(result, Err(ImportError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_excel_inventory_numeric_quantities() {
        let dir = TempDir::new().unwrap();
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.write_string(0, 0, " Client ").unwrap();
        sheet.write_string(0, 1, "Total Quantity ").unwrap();
        sheet.write_string(1, 0, "Smith, Jane").unwrap();
        sheet.write_number(1, 1, 30.0).unwrap();
        sheet.write_string(2, 0, "Doe, John").unwrap();
        sheet.write_number(2, 1, 12.5).unwrap();
        let path = save_workbook(&dir, "Visits_with_Tallied_Inventory_Distribution.xlsx", &mut workbook);

        let table = UniversalFileParser.parse_to_table(&path).unwrap();
        assert_eq!(table.headers, vec!["Client", "Total Quantity"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows[0].get("Total Quantity"), Some(&"30".to_string()));

        let inventory = InventoryIndexBuilder::new().build(&table, "inv.xlsx").unwrap();
        let jane = GuestKey::new("Jane", "Smith").unwrap();
        let john = GuestKey::new("John", "Doe").unwrap();
        assert_eq!(inventory.index.get(&jane), Some(30));
        assert_eq!(inventory.index.get(&john), Some(12));
        assert!(inventory.warnings.is_empty());
    }

    #[test]
    fn test_excel_header_only_sheet() {
        let dir = TempDir::new().unwrap();
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.write_string(0, 0, "First").unwrap();
        sheet.write_string(0, 1, "Last").unwrap();
        sheet.write_string(0, 2, "Route or Pickup Time").unwrap();
        let path = save_workbook(&dir, "Delivery_Guests.xlsx", &mut workbook);

        let table = ExcelParser.parse_to_table(&path).unwrap();
        assert!(table.is_empty());
        assert!(table.has_column("Route or Pickup Time"));
    }

    #[test]
    fn test_excel_empty_sheet_gives_empty_table() {
        let dir = TempDir::new().unwrap();
        let mut workbook = Workbook::new();
        workbook.add_worksheet();
        let path = save_workbook(&dir, "empty.xlsx", &mut workbook);

        let table = UniversalFileParser.parse_to_table(&path).unwrap();
        assert!(table.headers.is_empty());
        assert!(table.is_empty());
    }
}
