//! Hexagram resolution: primary, mutual, and changing.
//!
//! All three are total over normalized seeds. Trigrams are recovered from
//! lines by exact match against the eight canonical patterns; since the
//! patterns are pairwise distinct, at most one can match.

use tracing::debug;

use crate::hexagrams;
use crate::model::{Hexagram, Line, LineSequence, Trigram};
use crate::seed::trigram_for_seed;

/// The trigram for three lines, bottom first.
///
/// Falls back to 坤 if nothing matches, which the closed eight-pattern space
/// makes impossible.
pub fn trigram_from_lines(lines: [Line; 3]) -> Trigram {
    Trigram::from_lines(lines).unwrap_or(Trigram::Kun)
}

/// The primary hexagram for a pair of trigram seeds.
pub fn resolve_primary(upper_seed: i64, lower_seed: i64) -> Hexagram {
    let upper = trigram_for_seed(upper_seed);
    let lower = trigram_for_seed(lower_seed);
    hexagrams::hexagram(upper, lower)
}

/// The mutual hexagram: lines 2–4 become the lower trigram, lines 3–5 the
/// upper.
///
/// Depends on the two trigram seeds alone.
pub fn resolve_mutual(upper_seed: i64, lower_seed: i64) -> Hexagram {
    let lines = LineSequence::new(trigram_for_seed(upper_seed), trigram_for_seed(lower_seed));
    from_sequence(&lines)
}

/// The changing hexagram: `primary` with the line at `changing_line`
/// flipped.
///
/// A line outside 1..=6 means there is no changing hexagram.
pub fn resolve_changing(primary: &Hexagram, changing_line: u8) -> Option<Hexagram> {
    let Some(flipped) = primary.lines().flipped(changing_line) else {
        debug!(changing_line, "changing line out of range, no changing hexagram");
        return None;
    };
    let lower = trigram_from_lines(flipped.lower());
    let upper = trigram_from_lines(flipped.upper());
    Some(hexagrams::hexagram(upper, lower))
}

fn from_sequence(lines: &LineSequence) -> Hexagram {
    let lower = trigram_from_lines(lines.inner_lower());
    let upper = trigram_from_lines(lines.inner_upper());
    hexagrams::hexagram(upper, lower)
}
