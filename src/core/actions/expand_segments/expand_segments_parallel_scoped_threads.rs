use std::num::NonZeroUsize;
use std::thread;

use crate::core::actions::expand_segments::expand_segments_serial::expand_into;
use crate::core::actions::expand_segments::partition_windows::{allocate_output, partition_windows};
use crate::core::actions::expand_segments::ports::expansion_rule::ExpansionRule;
use crate::core::data::segment::Segment;
use crate::core::errors::GenerateError;

/// Expands partitions on one scoped OS thread each. Empty partitions are
/// skipped rather than given a thread.
///
/// All spawned threads are joined before any error is reported, and the
/// reported error is the one from the lowest failing partition.
pub fn expand_segments_parallel_scoped_threads<R>(
    segments: &[Segment],
    rule: &R,
    partitions: NonZeroUsize,
) -> Result<Vec<Segment>, GenerateError>
where
    R: ExpansionRule + Sync,
    R::Failure: Send,
{
    let k = rule.branching_factor();
    let mut output = allocate_output(segments.len(), k)?;
    let windows = partition_windows(segments, &mut output, k, partitions);

    thread::scope(|scope| -> Result<(), GenerateError> {
        let mut handles = Vec::with_capacity(windows.len());
        let mut spawn_failure = None;

        for partition in windows.into_iter().filter(|p| !p.segments.is_empty()) {
            let index = partition.index;
            let spawned = thread::Builder::new()
                .name(format!("expand-partition-{}", index))
                .spawn_scoped(scope, move || {
                    expand_into(partition.segments, partition.window, rule)
                });

            match spawned {
                Ok(handle) => handles.push((index, handle)),
                Err(err) => {
                    spawn_failure = Some(GenerateError::WorkerFailure {
                        partition: index,
                        reason: format!("could not spawn worker thread: {}", err),
                    });
                    break;
                }
            }
        }

        let joined: Vec<Result<(), GenerateError>> = handles
            .into_iter()
            .map(|(index, handle)| match handle.join() {
                Ok(Ok(())) => Ok(()),
                Ok(Err(err)) => Err(GenerateError::expansion(index, err)),
                Err(_) => Err(GenerateError::panicked(index)),
            })
            .collect();

        first_failure(joined, spawn_failure)
    })?;

    Ok(output)
}

/// Reduces joined outcomes, in partition order, to the first error. A spawn
/// failure belongs to the partition after every spawned one, so it only wins
/// when all spawned workers succeeded.
fn first_failure(
    joined: Vec<Result<(), GenerateError>>,
    spawn_failure: Option<GenerateError>,
) -> Result<(), GenerateError> {
    joined.into_iter().chain(spawn_failure.map(Err)).collect()
}
