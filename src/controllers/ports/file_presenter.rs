use std::path::Path;

use crate::core::data::point::Point;

/// Writes a finished curve somewhere a human can look at it.
pub trait FilePresenterPort {
    /// `closed` is true when the last point joins back to the first without
    /// being repeated.
    fn present(&self, points: &[Point], closed: bool, filepath: &Path) -> std::io::Result<()>;
}

impl<P: FilePresenterPort + ?Sized> FilePresenterPort for Box<P> {
    fn present(&self, points: &[Point], closed: bool, filepath: &Path) -> std::io::Result<()> {
        (**self).present(points, closed, filepath)
    }
}
