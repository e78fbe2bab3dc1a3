use crate::core::actions::expand_segments::ports::expansion_rule::ExpansionRule;
use crate::core::data::point::Point;
use crate::core::data::segment::Segment;
use crate::core::fractals::errors::ExpansionError;

const ONE_THIRD: f64 = 1.0 / 3.0;
const TWO_THIRDS: f64 = 2.0 / 3.0;
// sqrt(3) / 6: apex height of an equilateral triangle on a base of length 1/3
const APEX_HEIGHT: f64 = 0.288_675_134_594_812_9;

/// Classic Koch substitution: the middle third of a segment is replaced by two
/// sides of an equilateral triangle raised on its left-hand side.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct KochRule;

impl KochRule {
    pub const BRANCHING_FACTOR: usize = 4;
}

impl ExpansionRule for KochRule {
    type Failure = ExpansionError;

    fn branching_factor(&self) -> usize {
        Self::BRANCHING_FACTOR
    }

    fn expand(&self, segment: Segment, out: &mut [Segment]) -> Result<(), Self::Failure> {
        let actual = out.len();
        let [first, second, third, fourth] = out else {
            return Err(ExpansionError::OutputSizeMismatch {
                expected: Self::BRANCHING_FACTOR,
                actual,
            });
        };

        let start = segment.start;
        let dx = segment.dx();
        let dy = segment.dy();

        let one_third = Point::new(start.x + dx * ONE_THIRD, start.y + dy * ONE_THIRD);
        let apex = Point::new(
            start.x + dx * 0.5 - dy * APEX_HEIGHT,
            start.y + dy * 0.5 + dx * APEX_HEIGHT,
        );
        let two_thirds = Point::new(start.x + dx * TWO_THIRDS, start.y + dy * TWO_THIRDS);

        if !(one_third.is_finite() && apex.is_finite() && two_thirds.is_finite()) {
            return Err(ExpansionError::NonFiniteCoordinate { segment });
        }

        *first = Segment::new(start, one_third);
        *second = Segment::new(one_third, apex);
        *third = Segment::new(apex, two_thirds);
        *fourth = Segment::new(two_thirds, segment.end);

        Ok(())
    }
}
