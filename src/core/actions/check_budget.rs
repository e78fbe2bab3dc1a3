use crate::core::errors::GenerateError;

/// Segment count after `iterations` applications of a rule with branching
/// factor `k`, or `None` if it does not fit in a `u64`.
#[must_use]
pub fn project_segment_count(seed_segments: usize, branching_factor: usize, iterations: u32) -> Option<u64> {
    (branching_factor as u64)
        .checked_pow(iterations)?
        .checked_mul(seed_segments as u64)
}

/// Rejects a request whose final segment count would exceed `max_segments`.
/// Counts only grow with depth, so passing here covers every intermediate
/// iteration too. Returns the projected count on success.
pub fn check_budget(
    seed_segments: usize,
    branching_factor: usize,
    iterations: u32,
    max_segments: u64,
) -> Result<u64, GenerateError> {
    match project_segment_count(seed_segments, branching_factor, iterations) {
        Some(projected) if projected <= max_segments => Ok(projected),
        projected => Err(GenerateError::ResourceBudgetExceeded {
            iterations,
            projected_segments: projected.unwrap_or(u64::MAX),
            max_segments,
        }),
    }
}
