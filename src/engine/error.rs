// ==========================================
// Pantry Labels - pipeline error types
// ==========================================
// Fatal preconditions only; per-category problems are statuses.
// ==========================================

use crate::importer::ImportError;
use std::path::PathBuf;
use thiserror::Error;

/// Pipeline error type
#[derive(Error, Debug)]
pub enum PipelineError {
    // ===== inputs =====
    #[error("'{0}' does not exist or is not a directory")]
    OutputDirMissing(PathBuf),

    #[error("{0} is not a file")]
    InputNotFound(PathBuf),

    #[error("no input files found")]
    NoInputs,

    #[error("neither a delivery nor a pickup guest list was found")]
    NoGuestLists,

    #[error("no inventory file found (file name containing '{0}')")]
    NoInventory(String),

    #[error("{0} had no guests")]
    EmptyInventory(String),

    // ===== wrapped =====
    #[error("could not read {file}: {source}")]
    InputUnreadable {
        file: String,
        #[source]
        source: ImportError,
    },

    #[error(transparent)]
    Import(#[from] ImportError),

    #[error("could not write summary {path}: {source}")]
    SummaryWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type PipelineResult<T> = Result<T, PipelineError>;

impl PipelineError {
    pub fn unreadable(file: impl Into<String>, source: ImportError) -> Self {
        PipelineError::InputUnreadable {
            file: file.into(),
            source,
        }
    }
}
