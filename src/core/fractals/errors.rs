use thiserror::Error;

use crate::core::data::segment::Segment;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ExpansionError {
    #[error("expanding segment {segment:?} produced a non-finite coordinate")]
    NonFiniteCoordinate { segment: Segment },

    #[error("output window holds {actual} segments, expected {expected}")]
    OutputSizeMismatch { expected: usize, actual: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_size_mismatch_message() {
        let err = ExpansionError::OutputSizeMismatch {
            expected: 8,
            actual: 6,
        };

        assert_eq!(err.to_string(), "output window holds 6 segments, expected 8");
    }
}
