use crate::core::actions::expand_segments::expand_segments_parallel_rayon::expand_segments_parallel_rayon;
use crate::core::actions::expand_segments::expand_segments_parallel_scoped_threads::expand_segments_parallel_scoped_threads;
use crate::core::actions::expand_segments::expand_segments_serial::expand_segments_serial;
use crate::core::actions::expand_segments::ports::expansion_rule::ExpansionRule;
use crate::core::actions::expand_segments::strategy::{ParallelBackend, Strategy};
use crate::core::data::segment_set::SegmentSet;
use crate::core::errors::GenerateError;

/// Builds the set one depth deeper. The input set is only read; it is up to
/// the caller to drop it once the new set exists.
pub fn expand_segments<R>(set: &SegmentSet, rule: &R, strategy: Strategy) -> Result<SegmentSet, GenerateError>
where
    R: ExpansionRule + Sync,
    R::Failure: Send,
{
    let segments = match strategy {
        Strategy::Sequential => expand_segments_serial(set.segments(), rule)?,
        Strategy::Parallel {
            backend: ParallelBackend::Rayon,
            partitions,
        } => expand_segments_parallel_rayon(set.segments(), rule, partitions)?,
        Strategy::Parallel {
            backend: ParallelBackend::ScopedThreads,
            partitions,
        } => expand_segments_parallel_scoped_threads(set.segments(), rule, partitions)?,
    };

    Ok(SegmentSet::from_expanded(segments, set.depth() + 1, set.is_closed()))
}
