use std::num::NonZeroUsize;

/// Deepest expansion the engine accepts, whatever the configuration says.
pub const DOCUMENTED_MAX_ITERATIONS: u32 = 24;

const DEFAULT_MAX_SEGMENTS: u64 = 1 << 24;

pub const MAX_SEGMENTS_ENV: &str = "SNOWFLAKE_MAX_SEGMENTS";
pub const MAX_ITERATIONS_ENV: &str = "SNOWFLAKE_MAX_ITERATIONS";
pub const WORKERS_ENV: &str = "SNOWFLAKE_WORKERS";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineLimits {
    pub max_iterations: u32,
    /// Ceiling on the final segment count, checked before anything is allocated.
    pub max_segments: u64,
    /// Partition count for the parallel strategy. `None` uses the available
    /// parallelism of the host.
    pub worker_threads: Option<NonZeroUsize>,
}

impl Default for EngineLimits {
    fn default() -> Self {
        Self {
            max_iterations: DOCUMENTED_MAX_ITERATIONS,
            max_segments: DEFAULT_MAX_SEGMENTS,
            worker_threads: None,
        }
    }
}

impl EngineLimits {
    /// Iteration bound actually enforced. Never above the documented maximum.
    #[must_use]
    pub fn effective_max_iterations(&self) -> u32 {
        self.max_iterations.min(DOCUMENTED_MAX_ITERATIONS)
    }

    #[must_use]
    pub fn with_max_segments(mut self, max_segments: u64) -> Self {
        self.max_segments = max_segments;
        self
    }

    #[must_use]
    pub fn with_worker_threads(mut self, workers: NonZeroUsize) -> Self {
        self.worker_threads = Some(workers);
        self
    }

    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds limits from the defaults, overriding each field whose variable
    /// is present and parses. Unparsable values are logged and skipped.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut limits = Self::default();

        if let Some(value) = parse_var::<u64, _>(&lookup, MAX_SEGMENTS_ENV) {
            limits.max_segments = value;
        }

        if let Some(value) = parse_var::<u32, _>(&lookup, MAX_ITERATIONS_ENV) {
            if value > DOCUMENTED_MAX_ITERATIONS {
                log::warn!(
                    "{} = {} is above the documented maximum, using {}",
                    MAX_ITERATIONS_ENV,
                    value,
                    DOCUMENTED_MAX_ITERATIONS
                );
            }
            limits.max_iterations = value.min(DOCUMENTED_MAX_ITERATIONS);
        }

        if let Some(value) = parse_var::<NonZeroUsize, _>(&lookup, WORKERS_ENV) {
            let available = std::thread::available_parallelism().map_or(1, NonZeroUsize::get);
            if value.get() > available {
                log::warn!(
                    "{} = {} exceeds the {} available cores, partitions are capped at the segment count",
                    WORKERS_ENV,
                    value,
                    available
                );
            }
            limits.worker_threads = Some(value);
        }

        limits
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Option<T>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key)?;

    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            log::warn!("ignoring {} = {:?}: not a valid value", key, raw);
            None
        }
    }
}
