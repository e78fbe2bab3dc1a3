use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::point::Point;

/// Writes the points as a JSON array of `{"x": .., "y": ..}` objects, the shape
/// a web front-end consumes directly.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonFilePresenter {}

impl JsonFilePresenter {
    pub fn new() -> Self {
        Self {}
    }
}

impl FilePresenterPort for JsonFilePresenter {
    fn present(&self, points: &[Point], _closed: bool, filepath: &Path) -> std::io::Result<()> {
        let mut file = BufWriter::new(File::create(filepath)?);

        serde_json::to_writer(&mut file, points)?;
        file.flush()
    }
}
