use std::path::PathBuf;

use thiserror::Error;

use crate::core::actions::assemble_points::PointLayout;
use crate::core::actions::expand_segments::strategy::ParallelBackend;

const DEFAULT_ITERATIONS: i64 = 5;
const DEFAULT_OUTPUT: &str = "output/snowflake.svg";

pub const USAGE: &str = "usage: snowflake_engine [ITERATIONS] [--parallel] \
[--backend rayon|scoped] [--strip] [--output PATH]";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CliArgsError {
    #[error("invalid iteration count '{0}'")]
    InvalidIterations(String),

    #[error("missing value for '{0}'")]
    MissingValue(String),

    #[error("unknown backend '{0}', expected 'rayon' or 'scoped'")]
    UnknownBackend(String),

    #[error("unexpected argument '{0}'")]
    UnexpectedArgument(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub iterations: i64,
    pub parallel: bool,
    pub backend: ParallelBackend,
    pub layout: PointLayout,
    pub output: PathBuf,
    pub help: bool,
}

impl Default for CliArgs {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            parallel: false,
            backend: ParallelBackend::default(),
            layout: PointLayout::default(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            help: false,
        }
    }
}

impl CliArgs {
    /// Parses arguments without the program name. Iteration counts are kept
    /// signed so that range checking is left to the engine.
    pub fn parse<I, S>(args: I) -> Result<Self, CliArgsError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut parsed = Self::default();
        let mut args = args.into_iter().map(Into::into);
        let mut seen_iterations = false;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => parsed.help = true,
                "-p" | "--parallel" => parsed.parallel = true,
                "--strip" => parsed.layout = PointLayout::LineStrip,
                "-o" | "--output" => {
                    let value = args.next().ok_or_else(|| CliArgsError::MissingValue(arg.clone()))?;
                    parsed.output = PathBuf::from(value);
                }
                "--backend" => {
                    let value = args.next().ok_or_else(|| CliArgsError::MissingValue(arg.clone()))?;
                    parsed.backend = match value.as_str() {
                        "rayon" => ParallelBackend::Rayon,
                        "scoped" => ParallelBackend::ScopedThreads,
                        _ => return Err(CliArgsError::UnknownBackend(value)),
                    };
                }
                value if !seen_iterations && is_positional(value) => {
                    parsed.iterations = value
                        .parse()
                        .map_err(|_| CliArgsError::InvalidIterations(value.to_string()))?;
                    seen_iterations = true;
                }
                _ => return Err(CliArgsError::UnexpectedArgument(arg.clone())),
            }
        }

        Ok(parsed)
    }
}

/// Anything that is not a flag. A leading `-` followed by a digit is a
/// negative number, not a flag.
fn is_positional(arg: &str) -> bool {
    match arg.strip_prefix('-') {
        Some(rest) => rest.starts_with(|c: char| c.is_ascii_digit()),
        None => true,
    }
}
