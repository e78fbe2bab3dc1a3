use std::path::Path;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::controllers::session::{GenerationReport, GenerationSession, SessionError};
use crate::core::actions::expand_segments::ports::expansion_rule::ExpansionRule;
use crate::core::engine::FractalEngine;

/// Generates one curve per call and hands the latest result to a file
/// presenter on request.
pub struct CliController<P: FilePresenterPort, R> {
    presenter: P,
    session: GenerationSession<R>,
}

impl<P, R> CliController<P, R>
where
    P: FilePresenterPort,
    R: ExpansionRule + Sync,
    R::Failure: Send,
{
    pub fn new(presenter: P, engine: FractalEngine<R>) -> Self {
        Self {
            presenter,
            session: GenerationSession::new(engine),
        }
    }

    pub fn generate(&mut self, iterations: i64, parallel: bool) -> Result<GenerationReport, SessionError> {
        let engine = self.session.engine();

        println!("Generating {} curve...", engine.seed().display_name());
        println!("Iterations: {}", iterations);
        println!("Strategy:   {}", engine.strategy_for(parallel));

        let report = self.session.request(iterations, parallel)?;

        println!("Points:     {}", report.points.len());
        println!("Duration:   {:?}", report.elapsed);

        Ok(report)
    }

    /// Writes the last generated curve. Does nothing if nothing has been
    /// generated yet.
    pub fn write(&self, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        if let Some(points) = self.session.current() {
            let closed = self.session.engine().emits_closed_loop();
            self.presenter.present(&points, closed, filepath.as_ref())?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::point::Point;
    use crate::core::errors::GenerateError;
    use std::cell::RefCell;

    #[derive(Default)]
    struct StubPresenter {
        presented: RefCell<Vec<(usize, bool)>>,
    }

    impl FilePresenterPort for StubPresenter {
        fn present(&self, points: &[Point], closed: bool, _: &Path) -> std::io::Result<()> {
            self.presented.borrow_mut().push((points.len(), closed));
            Ok(())
        }
    }

    #[test]
    fn test_write_before_generate_presents_nothing() {
        let controller = CliController::new(StubPresenter::default(), FractalEngine::snowflake());

        controller.write("unused.svg").unwrap();

        assert!(controller.presenter.presented.borrow().is_empty());
    }

    #[test]
    fn test_generate_then_write_presents_latest_curve() {
        let mut controller = CliController::new(StubPresenter::default(), FractalEngine::snowflake());

        let report = controller.generate(3, true).unwrap();
        controller.write("unused.svg").unwrap();

        assert_eq!(report.points.len(), 192);
        assert_eq!(*controller.presenter.presented.borrow(), vec![(192, true)]);
    }

    #[test]
    fn test_failed_generate_keeps_previous_curve() {
        let mut controller = CliController::new(StubPresenter::default(), FractalEngine::snowflake());

        controller.generate(1, false).unwrap();
        let result = controller.generate(99, false);
        controller.write("unused.svg").unwrap();

        assert!(matches!(
            result,
            Err(SessionError::Generate(GenerateError::InvalidInput { iterations: 99, .. }))
        ));
        assert_eq!(*controller.presenter.presented.borrow(), vec![(12, true)]);
    }
}
