use crate::core::data::point::Point;
use crate::core::data::segment::Segment;

/// The curve at one iteration depth, as an ordered run of connected segments.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentSet {
    segments: Vec<Segment>,
    depth: u32,
    closed: bool,
}

impl SegmentSet {
    /// Builds a depth-0 set from polyline vertices. A closed set gets an extra
    /// edge from the last vertex back to the first.
    #[must_use]
    pub fn from_vertices(vertices: &[Point], closed: bool) -> Self {
        let mut segments: Vec<Segment> = vertices
            .windows(2)
            .map(|pair| Segment::new(pair[0], pair[1]))
            .collect();

        if closed && vertices.len() > 1 {
            segments.push(Segment::new(vertices[vertices.len() - 1], vertices[0]));
        }

        Self {
            segments,
            depth: 0,
            closed,
        }
    }

    pub(crate) fn from_expanded(segments: Vec<Segment>, depth: u32, closed: bool) -> Self {
        Self {
            segments,
            depth,
            closed,
        }
    }

    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    #[must_use]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// True when every segment starts exactly where the previous one ended,
    /// including the wrap-around edge for closed sets.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        let chained = self
            .segments
            .windows(2)
            .all(|pair| pair[0].connects_to(&pair[1]));

        let wraps = match (self.segments.first(), self.segments.last()) {
            (Some(first), Some(last)) if self.closed => last.connects_to(first),
            _ => true,
        };

        chained && wraps
    }
}
