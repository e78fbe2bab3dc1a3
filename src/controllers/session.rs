//! Caller-side wrapper around a [`FractalEngine`].
//!
//! The engine itself is stateless. A session adds what a front-end needs: one
//! request at a time, wall-clock timing around the call, and geometry that is
//! only ever replaced by a complete new result.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use thiserror::Error;

use crate::core::actions::expand_segments::ports::expansion_rule::ExpansionRule;
use crate::core::actions::expand_segments::strategy::Strategy;
use crate::core::data::point::Point;
use crate::core::engine::FractalEngine;
use crate::core::errors::GenerateError;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    #[error("a generation request is already in flight")]
    Busy,

    #[error(transparent)]
    Generate(#[from] GenerateError),
}

#[derive(Debug, Clone)]
pub struct GenerationReport {
    pub points: Arc<Vec<Point>>,
    pub iterations: i64,
    pub strategy: Strategy,
    pub elapsed: Duration,
}

struct InFlight<'a>(&'a AtomicBool);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

#[derive(Debug)]
pub struct GenerationSession<R> {
    engine: FractalEngine<R>,
    in_flight: AtomicBool,
    current: Mutex<Option<Arc<Vec<Point>>>>,
}

impl<R> GenerationSession<R>
where
    R: ExpansionRule + Sync,
    R::Failure: Send,
{
    pub fn new(engine: FractalEngine<R>) -> Self {
        Self {
            engine,
            in_flight: AtomicBool::new(false),
            current: Mutex::new(None),
        }
    }

    pub fn engine(&self) -> &FractalEngine<R> {
        &self.engine
    }

    /// Geometry from the last successful request.
    pub fn current(&self) -> Option<Arc<Vec<Point>>> {
        self.lock_current().clone()
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Runs one generation. Refused with [`SessionError::Busy`] while another
    /// request is running. On failure the current geometry is left as it was.
    pub fn request(&self, iterations: i64, parallel: bool) -> Result<GenerationReport, SessionError> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            log::warn!("refusing request for {} iterations: another request is in flight", iterations);
            return Err(SessionError::Busy);
        }
        let _in_flight = InFlight(&self.in_flight);

        let strategy = self.engine.strategy_for(parallel);
        let start = Instant::now();
        let result = self.engine.generate(iterations, parallel);
        let elapsed = start.elapsed();

        match result {
            Ok(points) => {
                let points = Arc::new(points);
                *self.lock_current() = Some(Arc::clone(&points));

                Ok(GenerationReport {
                    points,
                    iterations,
                    strategy,
                    elapsed,
                })
            }
            Err(err) => {
                log::error!("generation failed after {:?}, keeping previous geometry: {}", elapsed, err);
                Err(err.into())
            }
        }
    }

    fn lock_current(&self) -> MutexGuard<'_, Option<Arc<Vec<Point>>>> {
        self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
