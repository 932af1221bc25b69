// ==========================================
// Pantry Labels - importer layer
// ==========================================
// Responsibility: exported files -> inventory index + classified guest lists
// Supports: CSV, spreadsheet
// ==========================================

pub mod data_cleaner;
pub mod error;
pub mod field_mapper;
pub mod file_parser;
pub mod guest_list;
pub mod importer_trait;
pub mod inventory;
pub mod role_classifier;

pub use data_cleaner::DataCleaner;
pub use error::{ImportError, ImportResult};
pub use field_mapper::FieldMapper;
pub use file_parser::{CsvParser, ExcelParser, UniversalFileParser};
pub use guest_list::{ClassifiedGuestList, GuestListClassifier};
pub use importer_trait::{FileParser, FileProbe, RawTable, RoleClassifier};
pub use inventory::{InventoryImport, InventoryIndex, InventoryIndexBuilder, DEFAULT_ITEM_COUNT};
pub use role_classifier::{classifier_for, FilenameRoleClassifier, HeaderRoleClassifier};
