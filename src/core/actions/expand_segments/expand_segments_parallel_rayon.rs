use std::num::NonZeroUsize;
use std::panic::{self, AssertUnwindSafe};

use rayon::prelude::*;

use crate::core::actions::expand_segments::expand_segments_serial::expand_into;
use crate::core::actions::expand_segments::partition_windows::{allocate_output, partition_windows};
use crate::core::actions::expand_segments::ports::expansion_rule::ExpansionRule;
use crate::core::data::segment::Segment;
use crate::core::errors::GenerateError;

/// Expands partitions on rayon's work-stealing pool.
///
/// Each partition writes into its own pre-sized output window, so the result
/// is assembled by construction in partition order and matches
/// [`expand_segments_serial`](super::expand_segments_serial::expand_segments_serial)
/// bit for bit. A rule failure or panic in any partition fails the whole
/// iteration.
pub fn expand_segments_parallel_rayon<R>(
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

    partition_windows(segments, &mut output, k, partitions)
        .into_par_iter()
        .try_for_each(|partition| {
            let index = partition.index;

            panic::catch_unwind(AssertUnwindSafe(|| {
                expand_into(partition.segments, partition.window, rule)
            }))
            .map_err(|_| GenerateError::panicked(index))?
            .map_err(|err| GenerateError::expansion(index, err))
        })?;

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::expand_segments::expand_segments_serial::expand_segments_serial;
    use crate::core::fractals::errors::ExpansionError;
    use crate::core::fractals::koch::rule::KochRule;
    use crate::core::fractals::quadratic_koch::rule::QuadraticKochRule;
    use crate::core::fractals::seeds::Seed;

    /// Fails on any segment that starts left of `x = 0`.
    #[derive(Debug)]
    struct StubFailureRule {}

    impl ExpansionRule for StubFailureRule {
        type Failure = ExpansionError;

        fn branching_factor(&self) -> usize {
            KochRule::BRANCHING_FACTOR
        }

        fn expand(&self, segment: Segment, out: &mut [Segment]) -> Result<(), Self::Failure> {
            if segment.start.x < 0.0 {
                return Err(ExpansionError::NonFiniteCoordinate { segment });
            }
            KochRule.expand(segment, out)
        }
    }

    #[derive(Debug)]
    struct StubPanicRule {}

    impl ExpansionRule for StubPanicRule {
        type Failure = ExpansionError;

        fn branching_factor(&self) -> usize {
            1
        }

        fn expand(&self, _: Segment, _: &mut [Segment]) -> Result<(), Self::Failure> {
            panic!("stub rule panicked");
        }
    }

    fn partitions(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    fn koch_depth(depth: u32) -> Vec<Segment> {
        let mut segments = Seed::Triangle.segment_set().segments().to_vec();
        for _ in 0..depth {
            segments = expand_segments_serial(&segments, &KochRule).unwrap();
        }
        segments
    }

    #[test]
    fn test_rayon_generates_same_results_as_sequential() {
        let input = koch_depth(4);

        let sequential_results = expand_segments_serial(&input, &KochRule).unwrap();
        let rayon_results = expand_segments_parallel_rayon(&input, &KochRule, partitions(8)).unwrap();

        assert_eq!(rayon_results, sequential_results);
    }

    #[test]
    fn test_rayon_matches_sequential_for_any_partition_count() {
        let input = koch_depth(2);
        let sequential_results = expand_segments_serial(&input, &QuadraticKochRule).unwrap();

        for n in 1..=(input.len() + 3) {
            let rayon_results =
                expand_segments_parallel_rayon(&input, &QuadraticKochRule, partitions(n)).unwrap();

            assert_eq!(rayon_results, sequential_results, "partitions = {}", n);
        }
    }

    #[test]
    fn test_rayon_with_more_partitions_than_segments() {
        let input = Seed::Line.segment_set().segments().to_vec();

        let sequential_results = expand_segments_serial(&input, &KochRule).unwrap();
        let rayon_results = expand_segments_parallel_rayon(&input, &KochRule, partitions(16)).unwrap();

        assert_eq!(rayon_results, sequential_results);
    }

    #[test]
    fn test_rayon_propagates_rule_failure() {
        let input = koch_depth(3);

        let result = expand_segments_parallel_rayon(&input, &StubFailureRule {}, partitions(4));

        assert!(matches!(result, Err(GenerateError::WorkerFailure { .. })));
    }

    #[test]
    fn test_rayon_reports_panic_as_worker_failure() {
        let input = koch_depth(1);

        let result = expand_segments_parallel_rayon(&input, &StubPanicRule {}, partitions(3));

        assert!(matches!(
            result,
            Err(GenerateError::WorkerFailure { ref reason, .. }) if reason == "worker panicked"
        ));
    }
}
