// ==========================================
// Pantry Labels - importer traits
// ==========================================
// FileParser: file -> RawTable
// RoleClassifier: RawTable -> FileRole
// ==========================================

use crate::domain::FileRole;
use crate::importer::error::ImportResult;
use std::collections::HashMap;
use std::path::Path;

// ==========================================
// RawTable - parser output
// ==========================================
// headers: trimmed header row, in file order
// rows: one map per data row (fully blank rows dropped)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<HashMap<String, String>>,
}

impl RawTable {
    pub fn has_column(&self, column: &str) -> bool {
        self.headers.iter().any(|h| h == column)
    }

    pub fn first_row(&self) -> Option<&HashMap<String, String>> {
        self.rows.first()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

// ==========================================
// FileParser Trait
// ==========================================
// Implementors: CsvParser, ExcelParser
pub trait FileParser: Send + Sync {
    /// Parses a file into its header row and data rows.
    ///
    /// # Returns
    /// - Ok(RawTable): headers + rows keyed by header
    /// - Err: missing file, unsupported extension, malformed content
    fn parse_to_table(&self, file_path: &Path) -> ImportResult<RawTable>;
}

// ==========================================
// FileProbe - what a role classifier may look at
// ==========================================
#[derive(Debug, Clone, Copy)]
pub struct FileProbe<'a> {
    pub path: &'a Path,
    pub headers: &'a [String],
    pub first_row: Option<&'a HashMap<String, String>>,
}

impl<'a> FileProbe<'a> {
    pub fn new(path: &'a Path, table: &'a RawTable) -> Self {
        Self {
            path,
            headers: &table.headers,
            first_row: table.first_row(),
        }
    }

    /// Path alone, for classifiers that never read contents.
    pub fn path_only(path: &'a Path) -> Self {
        Self {
            path,
            headers: &[],
            first_row: None,
        }
    }

    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

// ==========================================
// RoleClassifier Trait
// ==========================================
// Implementors: FilenameRoleClassifier, HeaderRoleClassifier
pub trait RoleClassifier: Send + Sync {
    /// Returns the role of an input file, or `None` when it is not recognized.
    fn classify(&self, probe: &FileProbe<'_>) -> Option<FileRole>;

    /// Whether `classify` looks at headers and rows. When false, files are
    /// classified from their path and only recognized files are parsed.
    fn reads_contents(&self) -> bool {
        true
    }

    /// Short name used in logs.
    fn name(&self) -> &'static str;
}
