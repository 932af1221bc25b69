// ==========================================
// Pantry Labels - per-category outcome
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// CategoryStatus - one line of the summary report
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CategoryStatus {
    /// Document written (or counted in a dry run).
    Rendered {
        file: String,
        guests: usize,
        labels: usize,
    },
    /// Category had no guests; nothing rendered.
    NoGuests { file: String },
    /// Rendering or writing failed; other categories still run.
    Failed { file: String, reason: String },
}

impl CategoryStatus {
    pub fn file(&self) -> &str {
        match self {
            CategoryStatus::Rendered { file, .. }
            | CategoryStatus::NoGuests { file }
            | CategoryStatus::Failed { file, .. } => file,
        }
    }

    pub fn is_rendered(&self) -> bool {
        matches!(self, CategoryStatus::Rendered { .. })
    }
}

impl fmt::Display for CategoryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryStatus::Rendered {
                file,
                guests,
                labels,
            } => write!(f, "{} has {} guests and {} labels.", file, guests, labels),
            CategoryStatus::NoGuests { file } => write!(f, "Warning: no guests in {}.", file),
            CategoryStatus::Failed { file, reason } => {
                write!(f, "Failure: could not generate {}: {}", file, reason)
            }
        }
    }
}
