use rayon::prelude::*;

use crate::core::data::point::Point;
use crate::core::data::segment_set::SegmentSet;

/// Vertex layout handed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointLayout {
    /// Start point of every segment, plus the final end point for open
    /// curves. Closed curves are drawn as a loop.
    #[default]
    LineLoop,
    /// Always appends the final end point, so a closed curve repeats its
    /// first vertex and can be drawn as a strip.
    LineStrip,
}

impl PointLayout {
    #[must_use]
    pub fn point_count(self, segments: usize, closed: bool) -> usize {
        if segments == 0 {
            return 0;
        }

        match (self, closed) {
            (Self::LineLoop, true) => segments,
            _ => segments + 1,
        }
    }
}

/// Flattens a finished set into its ordered vertex list.
#[must_use]
pub fn assemble_points(set: &SegmentSet, layout: PointLayout, parallel: bool) -> Vec<Point> {
    let segments = set.segments();
    let mut points = Vec::with_capacity(layout.point_count(segments.len(), set.is_closed()));

    if parallel {
        segments
            .par_iter()
            .map(|segment| segment.start)
            .collect_into_vec(&mut points);
    } else {
        points.extend(segments.iter().map(|segment| segment.start));
    }

    let append_end = layout == PointLayout::LineStrip || !set.is_closed();
    if let (true, Some(last)) = (append_end, segments.last()) {
        points.push(last.end);
    }

    points
}
