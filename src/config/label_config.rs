use crate::domain::{SortOrder, TimeWindow};
use serde::{Deserialize, Serialize};

/// Run configuration.
///
/// Every field has a default, so a config file only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelConfig {
    /// How input files are assigned to inventory / delivery / pickup.
    pub role_detection: RoleDetection,

    /// File name substrings used by `RoleDetection::Filename`.
    /// The delivery and pickup markers also name the output files.
    pub filename_markers: FilenameMarkers,

    /// Pickup windows, one output document each, in run order.
    pub pickup_windows: Vec<PickupWindowConfig>,

    pub delivery_sort: SortOrder,
    pub pickup_sort: SortOrder,

    /// Output documents are named `{prefix}{marker}[-{window label}].pdf`.
    pub output_prefix: String,

    pub summary_file_name: String,

    /// Extensions picked up when no input files are given.
    pub discovery_extensions: Vec<String>,

    /// Rows checked (including the first) when cross-checking a list's kind.
    pub classification_sample_rows: usize,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            role_detection: RoleDetection::Filename,
            filename_markers: FilenameMarkers::default(),
            pickup_windows: vec![
                PickupWindowConfig::new("Saturday", 7, 12),
                PickupWindowConfig::new("Friday-before-3", 12, 15),
                PickupWindowConfig::new("Friday-after-3", 15, 23),
            ],
            delivery_sort: SortOrder::Input,
            pickup_sort: SortOrder::LastFirst,
            output_prefix: "tags-for-".to_string(),
            summary_file_name: "make_tags_report.txt".to_string(),
            discovery_extensions: vec!["csv".to_string()],
            classification_sample_rows: 5,
        }
    }
}

impl LabelConfig {
    pub fn delivery_pdf_name(&self) -> String {
        format!("{}{}.pdf", self.output_prefix, self.filename_markers.delivery)
    }

    pub fn pickup_pdf_name(&self, window: &PickupWindowConfig) -> String {
        format!(
            "{}{}-{}.pdf",
            self.output_prefix, self.filename_markers.pickup, window.label
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleDetection {
    #[default]
    Filename,
    Header,
}

impl std::str::FromStr for RoleDetection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "filename" => Ok(RoleDetection::Filename),
            "header" => Ok(RoleDetection::Header),
            other => Err(format!("unknown role detection strategy: {}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilenameMarkers {
    pub inventory: String,
    pub delivery: String,
    pub pickup: String,
}

impl Default for FilenameMarkers {
    fn default() -> Self {
        Self {
            inventory: "Tallied".to_string(),
            delivery: "Delivery".to_string(),
            pickup: "Pickup".to_string(),
        }
    }
}

/// One pickup window `[start_hour, end_hour)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickupWindowConfig {
    pub label: String,
    pub start_hour: u32,
    pub end_hour: u32,
}

impl PickupWindowConfig {
    pub fn new(label: impl Into<String>, start_hour: u32, end_hour: u32) -> Self {
        Self {
            label: label.into(),
            start_hour,
            end_hour,
        }
    }

    pub fn window(&self) -> Option<TimeWindow> {
        TimeWindow::new(self.start_hour, self.end_hour)
    }
}
