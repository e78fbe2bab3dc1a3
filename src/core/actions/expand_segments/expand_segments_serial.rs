use crate::core::actions::expand_segments::partition_windows::allocate_output;
use crate::core::actions::expand_segments::ports::expansion_rule::ExpansionRule;
use crate::core::data::segment::Segment;
use crate::core::errors::GenerateError;

/// Expands `segments` in index order into `window`, which must hold exactly
/// `k` slots per input segment. Every strategy funnels through here, so the
/// values written do not depend on who calls it.
pub fn expand_into<R: ExpansionRule>(
    segments: &[Segment],
    window: &mut [Segment],
    rule: &R,
) -> Result<(), R::Failure> {
    let k = rule.branching_factor();
    if k == 0 {
        return Ok(());
    }

    for (segment, replacements) in segments.iter().zip(window.chunks_exact_mut(k)) {
        rule.expand(*segment, replacements)?;
    }

    Ok(())
}

/// Reference strategy: one thread, one pass, index order.
pub fn expand_segments_serial<R: ExpansionRule>(
    segments: &[Segment],
    rule: &R,
) -> Result<Vec<Segment>, GenerateError> {
    let mut output = allocate_output(segments.len(), rule.branching_factor())?;

    expand_into(segments, &mut output, rule).map_err(|err| GenerateError::expansion(0, err))?;

    Ok(output)
}
