use crate::core::actions::expand_segments::ports::expansion_rule::ExpansionRule;
use crate::core::data::point::Point;
use crate::core::data::segment::Segment;
use crate::core::fractals::errors::ExpansionError;

const ONE_THIRD: f64 = 1.0 / 3.0;
const TWO_THIRDS: f64 = 2.0 / 3.0;

/// Type 1 quadratic Koch substitution: the middle third is replaced by three
/// sides of a square raised on the segment's left-hand side.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct QuadraticKochRule;

impl QuadraticKochRule {
    pub const BRANCHING_FACTOR: usize = 5;
}

impl ExpansionRule for QuadraticKochRule {
    type Failure = ExpansionError;

    fn branching_factor(&self) -> usize {
        Self::BRANCHING_FACTOR
    }

    fn expand(&self, segment: Segment, out: &mut [Segment]) -> Result<(), Self::Failure> {
        let actual = out.len();
        let [first, second, third, fourth, fifth] = out else {
            return Err(ExpansionError::OutputSizeMismatch {
                expected: Self::BRANCHING_FACTOR,
                actual,
            });
        };

        let start = segment.start;
        let dx = segment.dx();
        let dy = segment.dy();
        let normal_x = -dy * ONE_THIRD;
        let normal_y = dx * ONE_THIRD;

        let one_third = Point::new(start.x + dx * ONE_THIRD, start.y + dy * ONE_THIRD);
        let two_thirds = Point::new(start.x + dx * TWO_THIRDS, start.y + dy * TWO_THIRDS);
        let raised_left = Point::new(one_third.x + normal_x, one_third.y + normal_y);
        let raised_right = Point::new(two_thirds.x + normal_x, two_thirds.y + normal_y);

        let corners = [one_third, raised_left, raised_right, two_thirds];
        if !corners.iter().all(Point::is_finite) {
            return Err(ExpansionError::NonFiniteCoordinate { segment });
        }

        *first = Segment::new(start, one_third);
        *second = Segment::new(one_third, raised_left);
        *third = Segment::new(raised_left, raised_right);
        *fourth = Segment::new(raised_right, two_thirds);
        *fifth = Segment::new(two_thirds, segment.end);

        Ok(())
    }
}
