// ==========================================
// Pantry Labels - label count quantization
// ==========================================
// item count -> number of label pages, step function over fixed breakpoints
// ==========================================

/// Bucket upper bounds; bucket `i` is `(BREAKPOINTS[i], BREAKPOINTS[i + 1]]`.
pub const LABEL_BREAKPOINTS: [u32; 17] = [
    0, 9, 17, 25, 32, 40, 49, 57, 67, 73, 82, 90, 100, 107, 112, 139, 200,
];

/// Most labels any guest gets.
pub const MAX_LABELS: u32 = (LABEL_BREAKPOINTS.len() - 1) as u32;

/// Number of label pages for an item count.
///
/// Counts above the last breakpoint get `MAX_LABELS`; a count of 0 falls in
/// the first bucket.
pub fn labels_for(item_count: u32) -> u32 {
    if item_count == 0 {
        return 1;
    }
    LABEL_BREAKPOINTS
        .windows(2)
        .position(|bounds| bounds[0] < item_count && item_count <= bounds[1])
        .map(|i| i as u32 + 1)
        .unwrap_or(MAX_LABELS)
}

/// `(item_count, labels)` rows for the breakpoints plus one past the end.
pub fn label_table() -> Vec<(u32, u32)> {
    LABEL_BREAKPOINTS
        .iter()
        .skip(1)
        .copied()
        .chain(std::iter::once(LABEL_BREAKPOINTS[LABEL_BREAKPOINTS.len() - 1] + 1))
        .map(|n| (n, labels_for(n)))
        .collect()
}
