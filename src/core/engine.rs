use std::time::Instant;

use crate::core::actions::assemble_points::{PointLayout, assemble_points};
use crate::core::actions::check_budget::check_budget;
use crate::core::actions::expand_segments::expand_segments::expand_segments;
use crate::core::actions::expand_segments::ports::expansion_rule::ExpansionRule;
use crate::core::actions::expand_segments::strategy::{ParallelBackend, Strategy};
use crate::core::data::generation_request::GenerationRequest;
use crate::core::data::point::Point;
use crate::core::data::segment_set::SegmentSet;
use crate::core::errors::GenerateError;
use crate::core::fractals::koch::rule::KochRule;
use crate::core::fractals::seeds::Seed;
use crate::core::limits::EngineLimits;
use crate::core::util::calculate_workers_for_segment_partitioning::calculate_workers_for_segment_partitioning;

/// Owns an expansion rule, a seed and the execution settings, and turns
/// `(iterations, parallel)` requests into point sequences.
///
/// Generation is synchronous and atomic: the call returns either the complete
/// curve or a single error, and leaves no work running behind it.
#[derive(Debug, Clone)]
pub struct FractalEngine<R = KochRule> {
    rule: R,
    seed: Seed,
    limits: EngineLimits,
    backend: ParallelBackend,
    layout: PointLayout,
}

impl FractalEngine<KochRule> {
    /// Koch rule on the triangle seed, with default limits.
    #[must_use]
    pub fn snowflake() -> Self {
        Self::new(KochRule, Seed::Triangle)
    }
}

impl Default for FractalEngine<KochRule> {
    fn default() -> Self {
        Self::snowflake()
    }
}

impl<R> FractalEngine<R>
where
    R: ExpansionRule + Sync,
    R::Failure: Send,
{
    #[must_use]
    pub fn new(rule: R, seed: Seed) -> Self {
        Self {
            rule,
            seed,
            limits: EngineLimits::default(),
            backend: ParallelBackend::default(),
            layout: PointLayout::default(),
        }
    }

    #[must_use]
    pub fn with_limits(mut self, limits: EngineLimits) -> Self {
        self.limits = limits;
        self
    }

    #[must_use]
    pub fn with_backend(mut self, backend: ParallelBackend) -> Self {
        self.backend = backend;
        self
    }

    #[must_use]
    pub fn with_layout(mut self, layout: PointLayout) -> Self {
        self.layout = layout;
        self
    }

    #[must_use]
    pub fn rule(&self) -> &R {
        &self.rule
    }

    #[must_use]
    pub fn seed(&self) -> Seed {
        self.seed
    }

    #[must_use]
    pub fn limits(&self) -> &EngineLimits {
        &self.limits
    }

    #[must_use]
    pub fn layout(&self) -> PointLayout {
        self.layout
    }

    /// True when the emitted points describe a loop whose last vertex joins
    /// back to the first without repeating it.
    #[must_use]
    pub fn emits_closed_loop(&self) -> bool {
        self.seed.is_closed() && self.layout == PointLayout::LineLoop
    }

    #[must_use]
    pub fn strategy_for(&self, parallel: bool) -> Strategy {
        if parallel {
            Strategy::Parallel {
                backend: self.backend,
                partitions: calculate_workers_for_segment_partitioning(self.limits.worker_threads),
            }
        } else {
            Strategy::Sequential
        }
    }

    /// Validates the request, expands the seed `iterations` times and returns
    /// the ordered points of the final curve.
    pub fn generate(&self, iterations: i64, parallel: bool) -> Result<Vec<Point>, GenerateError> {
        let request = GenerationRequest::new(iterations, parallel, &self.limits).inspect_err(|err| {
            log::warn!("rejected generation request: {}", err);
        })?;

        self.run(request)
    }

    pub fn run(&self, request: GenerationRequest) -> Result<Vec<Point>, GenerateError> {
        let strategy = self.strategy_for(request.parallel());
        let start = Instant::now();

        let set = self.expand_to_depth(request.iterations(), strategy)?;
        let points = assemble_points(&set, self.layout, strategy.is_parallel());

        log::info!(
            "generated {} points at depth {} ({}) in {:?}",
            points.len(),
            set.depth(),
            strategy,
            start.elapsed()
        );

        Ok(points)
    }

    /// Builds the segment set at `iterations` depth. The budget is checked
    /// against the final depth before the first iteration allocates anything.
    pub fn expand_to_depth(&self, iterations: u32, strategy: Strategy) -> Result<SegmentSet, GenerateError> {
        let mut set = self.seed.segment_set();

        let projected = check_budget(
            set.len(),
            self.rule.branching_factor(),
            iterations,
            self.limits.max_segments,
        )
        .inspect_err(|err| log::warn!("rejected generation request: {}", err))?;

        log::debug!(
            "expanding {} seed to depth {}: {} segments projected",
            self.seed.display_name(),
            iterations,
            projected
        );

        for _ in 0..iterations {
            set = expand_segments(&set, &self.rule, strategy)?;
            log::debug!("depth {} holds {} segments", set.depth(), set.len());
        }

        Ok(set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::segment::Segment;
    use crate::core::fractals::errors::ExpansionError;
    use crate::core::fractals::quadratic_koch::rule::QuadraticKochRule;
    use std::num::NonZeroUsize;

    /// Koch expansion that refuses segments shorter than half a unit, so the
    /// triangle survives two iterations and fails on the third.
    #[derive(Debug)]
    struct StubShortSegmentFailureRule {}

    impl ExpansionRule for StubShortSegmentFailureRule {
        type Failure = ExpansionError;

        fn branching_factor(&self) -> usize {
            KochRule::BRANCHING_FACTOR
        }

        fn expand(&self, segment: Segment, out: &mut [Segment]) -> Result<(), Self::Failure> {
            if segment.length() < 0.5 {
                return Err(ExpansionError::NonFiniteCoordinate { segment });
            }
            KochRule.expand(segment, out)
        }
    }

    fn engine_with_workers(workers: usize) -> FractalEngine {
        FractalEngine::snowflake().with_limits(
            EngineLimits::default().with_worker_threads(NonZeroUsize::new(workers).unwrap()),
        )
    }

    #[test]
    fn test_depth_zero_returns_seed_points() {
        let engine = FractalEngine::snowflake();

        assert_eq!(engine.generate(0, false).unwrap(), Seed::Triangle.vertices());
        assert_eq!(engine.generate(0, true).unwrap(), Seed::Triangle.vertices());
    }

    #[test]
    fn test_sequential_and_parallel_agree() {
        let engine = engine_with_workers(4);

        for iterations in 0..=6 {
            assert_eq!(
                engine.generate(iterations, true).unwrap(),
                engine.generate(iterations, false).unwrap(),
                "iterations = {}",
                iterations
            );
        }
    }

    #[test]
    fn test_backends_agree() {
        let rayon = engine_with_workers(3).with_backend(ParallelBackend::Rayon);
        let scoped = engine_with_workers(3).with_backend(ParallelBackend::ScopedThreads);

        assert_eq!(rayon.generate(5, true).unwrap(), scoped.generate(5, true).unwrap());
    }

    #[test]
    fn test_point_count_grows_by_branching_factor() {
        let engine = FractalEngine::snowflake();

        let counts: Vec<usize> = (0..5).map(|n| engine.generate(n, false).unwrap().len()).collect();

        assert_eq!(counts, vec![3, 12, 48, 192, 768]);
    }

    #[test]
    fn test_quadratic_rule_on_square() {
        let engine = FractalEngine::new(QuadraticKochRule, Seed::Square);

        assert_eq!(engine.generate(2, true).unwrap().len(), 4 * 5 * 5);
    }

    #[test]
    fn test_line_strip_layout_repeats_first_point() {
        let engine = FractalEngine::snowflake().with_layout(PointLayout::LineStrip);

        let points = engine.generate(3, false).unwrap();

        assert_eq!(points.len(), 3 * 64 + 1);
        assert_eq!(points.first(), points.last());
        assert!(!engine.emits_closed_loop());
    }

    #[test]
    fn test_invalid_iterations_are_rejected() {
        let engine = FractalEngine::snowflake();

        assert!(matches!(
            engine.generate(-1, true),
            Err(GenerateError::InvalidInput { iterations: -1, .. })
        ));
        assert!(matches!(
            engine.generate(25, false),
            Err(GenerateError::InvalidInput { iterations: 25, .. })
        ));
    }

    #[test]
    fn test_budget_is_enforced_before_expansion() {
        let engine =
            FractalEngine::snowflake().with_limits(EngineLimits::default().with_max_segments(48));

        assert_eq!(engine.generate(2, false).unwrap().len(), 48);
        assert_eq!(
            engine.generate(3, true),
            Err(GenerateError::ResourceBudgetExceeded {
                iterations: 3,
                projected_segments: 192,
                max_segments: 48,
            })
        );
    }

    #[test]
    fn test_documented_maximum_depth_is_refused_by_default_budget() {
        let engine = FractalEngine::snowflake();

        assert!(matches!(
            engine.generate(24, true),
            Err(GenerateError::ResourceBudgetExceeded { iterations: 24, .. })
        ));
    }

    #[test]
    fn test_strategy_for() {
        let engine = engine_with_workers(5).with_backend(ParallelBackend::ScopedThreads);

        assert_eq!(engine.strategy_for(false), Strategy::Sequential);
        assert_eq!(
            engine.strategy_for(true),
            Strategy::Parallel {
                backend: ParallelBackend::ScopedThreads,
                partitions: NonZeroUsize::new(5).unwrap(),
            }
        );
    }

    #[test]
    fn test_sequential_rule_failure_returns_worker_failure() {
        let engine = FractalEngine::new(StubShortSegmentFailureRule {}, Seed::Triangle);

        assert_eq!(engine.generate(2, false).unwrap().len(), 48);
        assert!(matches!(
            engine.generate(3, false),
            Err(GenerateError::WorkerFailure { partition: 0, .. })
        ));
    }

    #[test]
    fn test_parallel_rule_failure_returns_worker_failure_on_every_backend() {
        for backend in ParallelBackend::ALL {
            let engine = FractalEngine::new(StubShortSegmentFailureRule {}, Seed::Triangle)
                .with_limits(EngineLimits::default().with_worker_threads(NonZeroUsize::new(4).unwrap()))
                .with_backend(*backend);

            let result = engine.generate(3, true);

            assert!(
                matches!(result, Err(GenerateError::WorkerFailure { .. })),
                "{:?} returned {:?}",
                backend,
                result
            );
        }
    }
}
