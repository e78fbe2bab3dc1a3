use std::mem;
use std::num::NonZeroUsize;

use crate::core::data::segment::Segment;
use crate::core::errors::GenerateError;
use crate::core::util::calculate_partition_ranges::calculate_partition_ranges;

/// One worker's share of an iteration: a contiguous run of input segments and
/// the disjoint region of the output that their replacements occupy.
#[derive(Debug)]
pub struct PartitionWindow<'a> {
    pub index: usize,
    pub segments: &'a [Segment],
    pub window: &'a mut [Segment],
}

/// Allocates the full output for one iteration up front. Fails instead of
/// aborting when the allocation cannot be satisfied.
pub fn allocate_output(input_len: usize, branching_factor: usize) -> Result<Vec<Segment>, GenerateError> {
    let len = input_len
        .checked_mul(branching_factor)
        .ok_or_else(|| GenerateError::allocation(usize::MAX))?;

    let mut output = Vec::new();
    output
        .try_reserve_exact(len)
        .map_err(|_| GenerateError::allocation(len))?;
    output.resize(len, Segment::default());

    Ok(output)
}

/// Carves `output` into one window per partition, in partition order.
/// Partition `p` covering input `start..end` owns output
/// `start * k..end * k`, so no two workers ever touch the same slot.
pub fn partition_windows<'a>(
    input: &'a [Segment],
    output: &'a mut [Segment],
    branching_factor: usize,
    partitions: NonZeroUsize,
) -> Vec<PartitionWindow<'a>> {
    let ranges = calculate_partition_ranges(input.len(), partitions);
    let mut windows = Vec::with_capacity(ranges.len());
    let mut rest = output;

    for (index, range) in ranges.into_iter().enumerate() {
        let (window, tail) = mem::take(&mut rest).split_at_mut(range.len() * branching_factor);
        rest = tail;

        windows.push(PartitionWindow {
            index,
            segments: &input[range],
            window,
        });
    }

    windows
}
