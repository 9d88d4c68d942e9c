//! Index searches over ordered anchor-time sequences.
//!
//! Both the frame and keyframe namespaces of the position expression
//! language resolve through the same two binary searches: the rightmost
//! anchor at or before a query time ("floor") and the leftmost anchor at
//! or after it ("ceil"). The signed step lookup combines them:
//! floor-and-add for a non-negative step, ceil-and-subtract for a
//! negative one, with the resulting index clamped into the table.
//!
//! Anchor sequences are non-decreasing millisecond timestamps. Duplicate
//! timestamps are allowed; the floor search returns the rightmost
//! duplicate and the ceil search the leftmost.

/// Index of the rightmost anchor `<= query`, or `None` if the query lies
/// before the first anchor.
pub fn floor_index(times: &[i64], query: i64) -> Option<usize> {
    times.partition_point(|&t| t <= query).checked_sub(1)
}

/// Index of the leftmost anchor `>= query`, or `None` if the query lies
/// after the last anchor.
pub fn ceil_index(times: &[i64], query: i64) -> Option<usize> {
    let index = times.partition_point(|&t| t < query);
    (index < times.len()).then_some(index)
}

/// Move `step` anchors away from `query` and return the anchor time.
///
/// A non-negative step starts from the floor of the query, a negative
/// step from its ceil. The out-of-range sentinels (one before the first
/// anchor, one past the last) take part in the arithmetic before the
/// final clamp, so `step_lookup(&[10, 20], 5, 1)` lands on the first
/// anchor, not the second. Returns `None` only for an empty table.
pub fn step_lookup(times: &[i64], query: i64, step: i64) -> Option<i64> {
    if times.is_empty() {
        return None;
    }
    let base = if step >= 0 {
        times.partition_point(|&t| t <= query) as i64 - 1
    } else {
        times.partition_point(|&t| t < query) as i64
    };
    let index = base.saturating_add(step).clamp(0, times.len() as i64 - 1);
    Some(times[index as usize])
}
