use crate::core::data::point::Point;
use crate::core::data::segment_set::SegmentSet;

// sqrt(3) / 2
const HALF_SQRT_3: f64 = 0.866_025_403_784_438_6;

/// Depth-0 shapes. Closed shapes are wound clockwise so that the left-hand
/// side of every edge faces outward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Seed {
    /// Equilateral triangle inscribed in the unit circle, apex up.
    #[default]
    Triangle,
    /// Axis-aligned square of side 1 centred on the origin.
    Square,
    /// Open horizontal segment from (-1, 0) to (1, 0).
    Line,
}

impl Seed {
    pub const ALL: &'static [Self] = &[Self::Triangle, Self::Square, Self::Line];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Triangle => "Triangle",
            Self::Square => "Square",
            Self::Line => "Line",
        }
    }

    #[must_use]
    pub const fn is_closed(self) -> bool {
        match self {
            Self::Triangle | Self::Square => true,
            Self::Line => false,
        }
    }

    #[must_use]
    pub fn vertices(self) -> Vec<Point> {
        match self {
            Self::Triangle => vec![
                Point::new(0.0, 1.0),
                Point::new(HALF_SQRT_3, -0.5),
                Point::new(-HALF_SQRT_3, -0.5),
            ],
            Self::Square => vec![
                Point::new(-0.5, -0.5),
                Point::new(-0.5, 0.5),
                Point::new(0.5, 0.5),
                Point::new(0.5, -0.5),
            ],
            Self::Line => vec![Point::new(-1.0, 0.0), Point::new(1.0, 0.0)],
        }
    }

    #[must_use]
    pub fn segment_count(self) -> usize {
        let vertices = self.vertices().len();
        if self.is_closed() { vertices } else { vertices - 1 }
    }

    #[must_use]
    pub fn segment_set(self) -> SegmentSet {
        SegmentSet::from_vertices(&self.vertices(), self.is_closed())
    }
}
