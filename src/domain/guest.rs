// ==========================================
// Pantry Labels - guest domain model
// ==========================================
// GuestKey: join key between inventory and guest lists
// GuestRecord: one guest row ready for rendering
// ClockTime / TimeWindow: pickup time filtering
// ==========================================

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Separator between the normalized first and last name.
pub const GUEST_KEY_SEPARATOR: char = '_';

// ==========================================
// GuestKey - normalized join key
// ==========================================
// Both the inventory path and the guest-list path must build keys through
// `GuestKey::new`, otherwise the join silently misses.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GuestKey(String);

impl GuestKey {
    /// Builds `first_last` from raw name parts.
    ///
    /// Each part is trimmed, inner whitespace collapsed, lowercased and
    /// stripped of `*` markers. Returns `None` when either part is empty
    /// after normalization.
    pub fn new(first: &str, last: &str) -> Option<Self> {
        let first = normalize_name_part(first);
        let last = normalize_name_part(last);
        if first.is_empty() || last.is_empty() {
            return None;
        }
        Some(GuestKey(format!("{}{}{}", first, GUEST_KEY_SEPARATOR, last)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GuestKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn normalize_name_part(value: &str) -> String {
    value
        .replace('*', " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

// ==========================================
// GuestRecord - one guest on one list
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestRecord {
    pub first_name: String,
    pub last_name: String,
    pub route_or_time: String, // route label (delivery) or "H:MM AM" (pickup)
    pub item_count: u32,       // from the inventory index, 1 when unmatched
}

impl GuestRecord {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        route_or_time: impl Into<String>,
        item_count: u32,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            route_or_time: route_or_time.into(),
            item_count,
        }
    }
}

// ==========================================
// ClockTime - pickup time "H:MM AM" / "HH:MM PM"
// ==========================================
// PM before noon gets +12; 12 AM is left at hour 12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ClockTime(NaiveTime);

impl ClockTime {
    /// Parses `H:MM AM|PM` or `HH:MM AM|PM`; anything else is `None`.
    pub fn parse(value: &str) -> Option<Self> {
        let mut parts = value.split_whitespace();
        let clock = parts.next()?;
        let marker = parts.next()?;
        if parts.next().is_some() {
            return None;
        }

        let is_pm = match marker.to_ascii_uppercase().as_str() {
            "AM" => false,
            "PM" => true,
            _ => return None,
        };

        let (hour_str, minute_str) = clock.split_once(':')?;
        if hour_str.is_empty()
            || hour_str.len() > 2
            || minute_str.len() != 2
            || !hour_str.chars().all(|c| c.is_ascii_digit())
            || !minute_str.chars().all(|c| c.is_ascii_digit())
        {
            return None;
        }

        let mut hour: u32 = hour_str.parse().ok()?;
        let minute: u32 = minute_str.parse().ok()?;
        if hour > 12 {
            return None;
        }
        if is_pm && hour < 12 {
            hour += 12;
        }

        NaiveTime::from_hms_opt(hour, minute, 0).map(ClockTime)
    }

    /// Whether `value` looks like a pickup time.
    pub fn matches(value: &str) -> bool {
        Self::parse(value).is_some()
    }

    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }
}

// ==========================================
// TimeWindow - half-open hour range [start, end)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start_hour: u32,
    pub end_hour: u32,
}

impl TimeWindow {
    /// Returns `None` unless `start < end <= 24`.
    pub fn new(start_hour: u32, end_hour: u32) -> Option<Self> {
        if start_hour < end_hour && end_hour <= 24 {
            Some(Self {
                start_hour,
                end_hour,
            })
        } else {
            None
        }
    }

    pub fn contains_hour(&self, hour: u32) -> bool {
        self.start_hour <= hour && hour < self.end_hour
    }

    pub fn contains(&self, time: ClockTime) -> bool {
        self.contains_hour(time.hour())
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start_hour, self.end_hour)
    }
}

// ==========================================
// ImportWarning - recoverable row-level problem
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportWarning {
    pub row_number: usize, // 1-based data row, 0 = whole file
    pub message: String,
}

impl ImportWarning {
    pub fn new(row_number: usize, message: impl Into<String>) -> Self {
        Self {
            row_number,
            message: message.into(),
        }
    }
}

impl fmt::Display for ImportWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.row_number == 0 {
            write!(f, "Warning: {}", self.message)
        } else {
            write!(f, "Warning: row {}: {}", self.row_number, self.message)
        }
    }
}
