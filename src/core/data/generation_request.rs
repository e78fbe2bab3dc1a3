use crate::core::errors::GenerateError;
use crate::core::limits::EngineLimits;

/// A validated `(iterations, parallel)` pair, consumed by a single call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationRequest {
    iterations: u32,
    parallel: bool,
}

impl GenerationRequest {
    /// Rejects depths outside `[0, max]` rather than clamping them.
    pub fn new(iterations: i64, parallel: bool, limits: &EngineLimits) -> Result<Self, GenerateError> {
        let max = limits.effective_max_iterations();

        match u32::try_from(iterations) {
            Ok(depth) if depth <= max => Ok(Self {
                iterations: depth,
                parallel,
            }),
            _ => Err(GenerateError::InvalidInput { iterations, max }),
        }
    }

    #[must_use]
    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    #[must_use]
    pub fn parallel(&self) -> bool {
        self.parallel
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_full_documented_range() {
        let limits = EngineLimits::default();

        for iterations in 0..=24 {
            let request = GenerationRequest::new(iterations, true, &limits).unwrap();

            assert_eq!(i64::from(request.iterations()), iterations);
            assert!(request.parallel());
        }
    }

    #[test]
    fn test_rejects_negative_and_too_deep() {
        let limits = EngineLimits::default();

        assert_eq!(
            GenerationRequest::new(-1, false, &limits),
            Err(GenerateError::InvalidInput {
                iterations: -1,
                max: 24
            })
        );
        assert_eq!(
            GenerationRequest::new(25, false, &limits),
            Err(GenerateError::InvalidInput {
                iterations: 25,
                max: 24
            })
        );
        assert!(GenerationRequest::new(i64::MAX, false, &limits).is_err());
    }

    #[test]
    fn test_respects_lower_configured_maximum() {
        let limits = EngineLimits {
            max_iterations: 6,
            ..EngineLimits::default()
        };

        assert!(GenerationRequest::new(6, false, &limits).is_ok());
        assert_eq!(
            GenerationRequest::new(7, false, &limits),
            Err(GenerateError::InvalidInput {
                iterations: 7,
                max: 6
            })
        );
    }
}
