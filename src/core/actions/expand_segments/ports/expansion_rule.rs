use std::error::Error;

use crate::core::data::segment::Segment;

/// A fixed geometric substitution applied to one segment at a time.
///
/// Implementations must be pure and local: the replacements depend only on the
/// given segment, never on its neighbours or its index. The drivers rely on
/// this to expand partitions independently.
pub trait ExpansionRule {
    type Failure: Error;

    /// Number of replacement segments written per input segment.
    fn branching_factor(&self) -> usize;

    /// Writes the replacements for `segment` into `out`, which holds exactly
    /// [`branching_factor`](Self::branching_factor) slots. The first
    /// replacement must start at `segment.start` and the last must end at
    /// `segment.end`.
    fn expand(&self, segment: Segment, out: &mut [Segment]) -> Result<(), Self::Failure>;
}
