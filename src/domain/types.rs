// ==========================================
// Pantry Labels - domain enums
// ==========================================
// ListKind / FileRole / SortOrder
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// ListKind - guest list classification
// ==========================================
// Decided once per file from the first data row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListKind {
    Delivery,     // route labels
    PickupWindow, // H:MM AM/PM clock times
}

impl ListKind {
    /// Only delivery labels print the route caption and rule.
    pub fn prints_route(&self) -> bool {
        matches!(self, ListKind::Delivery)
    }
}

impl fmt::Display for ListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListKind::Delivery => write!(f, "Delivery"),
            ListKind::PickupWindow => write!(f, "PickupWindow"),
        }
    }
}

// ==========================================
// FileRole - what an input file is used for
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileRole {
    Inventory, // item counts per guest
    Delivery,  // delivery guest list
    Pickup,    // pickup guest list
}

impl fmt::Display for FileRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileRole::Inventory => write!(f, "inventory"),
            FileRole::Delivery => write!(f, "delivery"),
            FileRole::Pickup => write!(f, "pickup"),
        }
    }
}

// ==========================================
// SortOrder - guest ordering before rendering
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    Input,     // file order
    LastFirst, // (last name, first name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_delivery_prints_route() {
        assert!(ListKind::Delivery.prints_route());
        assert!(!ListKind::PickupWindow.prints_route());
    }

    #[test]
    fn test_sort_order_serde_names() {
        let order: SortOrder = serde_json::from_str("\"last_first\"").unwrap();
        assert_eq!(order, SortOrder::LastFirst);
        assert_eq!(serde_json::to_string(&SortOrder::Input).unwrap(), "\"input\"");
    }
}
