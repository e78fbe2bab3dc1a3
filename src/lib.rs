//! Koch-style fractal curve generation with interchangeable sequential and
//! parallel execution strategies that produce bit-identical output.

mod controllers;
mod core;
mod presenters;

pub use crate::controllers::cli::args::{CliArgs, CliArgsError, USAGE};
pub use crate::controllers::cli::cli_controller::CliController;
pub use crate::controllers::ports::file_presenter::FilePresenterPort;
pub use crate::controllers::session::{GenerationReport, GenerationSession, SessionError};
pub use crate::core::actions::assemble_points::PointLayout;
pub use crate::core::actions::expand_segments::ports::expansion_rule::ExpansionRule;
pub use crate::core::actions::expand_segments::strategy::{ParallelBackend, Strategy};
pub use crate::core::data::generation_request::GenerationRequest;
pub use crate::core::data::point::Point;
pub use crate::core::data::segment::Segment;
pub use crate::core::data::segment_set::SegmentSet;
pub use crate::core::engine::FractalEngine;
pub use crate::core::errors::GenerateError;
pub use crate::core::fractals::errors::ExpansionError;
pub use crate::core::fractals::koch::rule::KochRule;
pub use crate::core::fractals::quadratic_koch::rule::QuadraticKochRule;
pub use crate::core::fractals::seeds::Seed;
pub use crate::core::limits::{DOCUMENTED_MAX_ITERATIONS, EngineLimits};
pub use crate::presenters::file::json::JsonFilePresenter;
pub use crate::presenters::file::presenter_for_path;
pub use crate::presenters::file::svg::SvgFilePresenter;

/// Koch snowflake at `iterations` depth with the default engine.
///
/// `parallel` selects the parallel strategy; the points are identical either
/// way. Depths outside `0..=24` fail with [`GenerateError::InvalidInput`], and
/// depths whose segment count exceeds the default ceiling fail with
/// [`GenerateError::ResourceBudgetExceeded`].
pub fn generate(iterations: i64, parallel: bool) -> Result<Vec<Point>, GenerateError> {
    FractalEngine::snowflake().generate(iterations, parallel)
}
