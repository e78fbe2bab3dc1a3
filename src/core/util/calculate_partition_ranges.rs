use std::num::NonZeroUsize;
use std::ops::Range;

/// Splits `0..segment_count` into contiguous ranges in index order. Sizes
/// differ by at most one, larger ranges first. The partition count is capped
/// at the segment count, so no range is empty unless there are no segments,
/// in which case a single empty range is returned.
pub fn calculate_partition_ranges(segment_count: usize, partitions: NonZeroUsize) -> Vec<Range<usize>> {
    let partitions = partitions.get().min(segment_count.max(1));
    let base = segment_count / partitions;
    let remainder = segment_count % partitions;
    let mut start = 0;

    (0..partitions)
        .map(|index| {
            let len = base + usize::from(index < remainder);
            let range = start..start + len;
            start += len;
            range
        })
        .collect()
}
