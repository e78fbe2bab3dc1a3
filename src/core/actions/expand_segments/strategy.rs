use std::fmt;
use std::num::NonZeroUsize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParallelBackend {
    #[default]
    Rayon,
    ScopedThreads,
}

impl ParallelBackend {
    pub const ALL: &'static [Self] = &[Self::Rayon, Self::ScopedThreads];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Rayon => "rayon",
            Self::ScopedThreads => "scoped threads",
        }
    }
}

/// How one iteration is executed. The two variants are alternative code paths
/// that produce identical output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Sequential,
    Parallel {
        backend: ParallelBackend,
        partitions: NonZeroUsize,
    },
}

impl Strategy {
    #[must_use]
    pub fn is_parallel(&self) -> bool {
        matches!(self, Self::Parallel { .. })
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sequential => write!(f, "sequential"),
            Self::Parallel {
                backend,
                partitions,
            } => write!(f, "parallel ({}, {} partitions)", backend.display_name(), partitions),
        }
    }
}
