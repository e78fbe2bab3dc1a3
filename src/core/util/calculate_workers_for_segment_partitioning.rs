use std::num::NonZeroUsize;

/// Worker count for the parallel strategy: the configured value if any,
/// otherwise the host's available parallelism.
pub fn calculate_workers_for_segment_partitioning(configured: Option<NonZeroUsize>) -> NonZeroUsize {
    configured.unwrap_or_else(|| {
        std::thread::available_parallelism().unwrap_or(NonZeroUsize::MIN)
    })
}
