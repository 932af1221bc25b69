// ==========================================
// Pantry Labels - configuration layer
// ==========================================
// Responsibility: role detection, pickup windows, sort order, output naming
// Storage: optional JSON file, defaults otherwise
// ==========================================

pub mod config_manager;
pub mod label_config;

pub use config_manager::{ConfigError, ConfigManager, ConfigResult, CONFIG_ENV_VAR};
pub use label_config::{FilenameMarkers, LabelConfig, PickupWindowConfig, RoleDetection};
