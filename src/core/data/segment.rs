use crate::core::data::point::Point;

/// A directed edge of the curve. Its index in the traversal is its position
/// in the owning [`SegmentSet`](crate::core::data::segment_set::SegmentSet).
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    #[must_use]
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub fn dx(&self) -> f64 {
        self.end.x - self.start.x
    }

    #[must_use]
    pub fn dy(&self) -> f64 {
        self.end.y - self.start.y
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        self.dx().hypot(self.dy())
    }

    #[must_use]
    pub fn connects_to(&self, next: &Segment) -> bool {
        self.end == next.start
    }
}
