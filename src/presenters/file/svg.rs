use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::point::Point;

const MARGIN_FRACTION: f64 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Bounds {
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
}

impl Bounds {
    fn of(points: &[Point]) -> Option<Self> {
        let first = points.first()?;
        let start = Self {
            min_x: first.x,
            min_y: first.y,
            max_x: first.x,
            max_y: first.y,
        };

        Some(points.iter().fold(start, |b, p| Self {
            min_x: b.min_x.min(p.x),
            min_y: b.min_y.min(p.y),
            max_x: b.max_x.max(p.x),
            max_y: b.max_y.max(p.y),
        }))
    }

    fn extent(&self) -> f64 {
        (self.max_x - self.min_x).max(self.max_y - self.min_y).max(f64::EPSILON)
    }
}

/// Renders the curve as a single SVG outline. The y axis is flipped so the
/// picture is upright.
#[derive(Debug, Default, Clone, Copy)]
pub struct SvgFilePresenter {}

impl SvgFilePresenter {
    pub fn new() -> Self {
        Self {}
    }

    pub fn write_svg<W: Write>(&self, points: &[Point], closed: bool, out: &mut W) -> std::io::Result<()> {
        let Some(bounds) = Bounds::of(points) else {
            writeln!(out, r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 1 1"></svg>"#)?;
            return Ok(());
        };

        let margin = bounds.extent() * MARGIN_FRACTION;
        let width = bounds.max_x - bounds.min_x + 2.0 * margin;
        let height = bounds.max_y - bounds.min_y + 2.0 * margin;
        let stroke = bounds.extent() / 500.0;
        let element = if closed { "polygon" } else { "polyline" };

        writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{} {} {} {}">"#,
            bounds.min_x - margin,
            0.0 - bounds.max_y - margin,
            width,
            height
        )?;
        write!(out, r#"  <{} fill="none" stroke="black" stroke-width="{}" points=""#, element, stroke)?;
        for (i, point) in points.iter().enumerate() {
            if i > 0 {
                write!(out, " ")?;
            }
            write!(out, "{},{}", point.x, 0.0 - point.y)?;
        }
        writeln!(out, r#""/>"#)?;
        writeln!(out, "</svg>")?;

        Ok(())
    }
}

impl FilePresenterPort for SvgFilePresenter {
    fn present(&self, points: &[Point], closed: bool, filepath: &Path) -> std::io::Result<()> {
        let mut file = BufWriter::new(File::create(filepath)?);

        self.write_svg(points, closed, &mut file)?;
        file.flush()
    }
}
