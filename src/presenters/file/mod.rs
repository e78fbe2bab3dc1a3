pub mod json;
pub mod svg;

use std::path::Path;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::presenters::file::json::JsonFilePresenter;
use crate::presenters::file::svg::SvgFilePresenter;

/// Picks a presenter by file extension: `.json` gets JSON, anything else SVG.
pub fn presenter_for_path(path: &Path) -> Box<dyn FilePresenterPort> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => Box::new(JsonFilePresenter::new()),
        _ => Box::new(SvgFilePresenter::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::point::Point;

    #[test]
    fn test_json_extension_selects_json_presenter() {
        let path = std::env::temp_dir().join(format!("snowflake-select-{}.JSON", std::process::id()));

        presenter_for_path(&path)
            .present(&[Point::new(1.0, 2.0)], false, &path)
            .unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(written, r#"[{"x":1.0,"y":2.0}]"#);
    }
}
