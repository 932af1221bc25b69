// ==========================================
// Pantry Labels - text cleaning helpers
// ==========================================
// TRIM / NULL normalization / title case / quantity parsing
// ==========================================

pub struct DataCleaner;

impl DataCleaner {
    pub fn clean_text(&self, value: &str) -> String {
        value.trim().to_string()
    }

    /// Blank or whitespace-only values become `None`.
    pub fn normalize_null(&self, value: Option<&str>) -> Option<String> {
        value.and_then(|v| {
            let trimmed = v.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        })
    }

    /// Title case the way the pantry's paperwork prints names: a letter is
    /// uppercased when the previous character is not a letter, otherwise
    /// lowercased. "o'NEIL-smith" -> "O'Neil-Smith".
    pub fn title_case(&self, value: &str) -> String {
        let mut out = String::with_capacity(value.len());
        let mut prev_is_letter = false;
        for c in value.chars() {
            if c.is_alphabetic() {
                if prev_is_letter {
                    out.extend(c.to_lowercase());
                } else {
                    out.extend(c.to_uppercase());
                }
                prev_is_letter = true;
            } else {
                out.push(c);
                prev_is_letter = false;
            }
        }
        out
    }

    /// First `max_chars` characters (not bytes).
    pub fn truncate_chars(&self, value: &str, max_chars: usize) -> String {
        value.chars().take(max_chars).collect()
    }

    /// Parses a quantity cell as a float and truncates toward zero.
    ///
    /// Returns `None` for blanks, non-numbers and non-finite values.
    pub fn parse_quantity(&self, value: Option<&str>) -> Option<i64> {
        let v = self.normalize_null(value)?;
        let parsed = v.replace(',', "").parse::<f64>().ok()?;
        if !parsed.is_finite() {
            return None;
        }
        Some(parsed.trunc() as i64)
    }

    /// Splits `"Last, First"` on the first comma into `(first, last)`.
    pub fn split_client_name<'a>(&self, value: &'a str) -> Option<(&'a str, &'a str)> {
        let (last, first) = value.split_once(',')?;
        if first.trim().is_empty() || last.trim().is_empty() {
            return None;
        }
        Some((first, last))
    }

    /// Strips `*` markers some exports append to last names.
    pub fn strip_markers(&self, value: &str) -> String {
        value.replace('*', "")
    }
}
