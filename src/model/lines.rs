//! Lines and six-line sequences.

use serde::{Deserialize, Serialize};

use super::trigram::Trigram;

/// A single line: solid (yang) or broken (yin).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Line {
    Yang,
    Yin,
}

impl Line {
    #[must_use]
    pub fn flip(self) -> Self {
        match self {
            Self::Yang => Self::Yin,
            Self::Yin => Self::Yang,
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Self::Yang => "———",
            Self::Yin => "— —",
        }
    }
}

/// Six lines, bottom first: the lower trigram's three lines followed by the
/// upper trigram's three. Positions are numbered 1 (bottom) to 6 (top).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineSequence([Line; 6]);

impl LineSequence {
    /// Stacks `upper` on top of `lower`.
    pub fn new(upper: Trigram, lower: Trigram) -> Self {
        let [l1, l2, l3] = lower.lines();
        let [u1, u2, u3] = upper.lines();
        Self([l1, l2, l3, u1, u2, u3])
    }

    pub fn from_lines(lines: [Line; 6]) -> Self {
        Self(lines)
    }

    pub fn lines(&self) -> [Line; 6] {
        self.0
    }

    /// The line at `position` (1-based). `None` outside 1..=6.
    pub fn get(&self, position: u8) -> Option<Line> {
        let index = usize::from(position.checked_sub(1)?);
        self.0.get(index).copied()
    }

    /// A copy with the line at `position` (1-based) flipped.
    /// `None` outside 1..=6.
    pub fn flipped(&self, position: u8) -> Option<Self> {
        let index = usize::from(position.checked_sub(1)?);
        let mut lines = self.0;
        let line = lines.get_mut(index)?;
        *line = line.flip();
        Some(Self(lines))
    }

    /// Lines 1–3.
    pub fn lower(&self) -> [Line; 3] {
        self.window(0)
    }

    /// Lines 4–6.
    pub fn upper(&self) -> [Line; 3] {
        self.window(3)
    }

    /// Lines 2–4, the lower trigram of the mutual hexagram.
    pub fn inner_lower(&self) -> [Line; 3] {
        self.window(1)
    }

    /// Lines 3–5, the upper trigram of the mutual hexagram.
    pub fn inner_upper(&self) -> [Line; 3] {
        self.window(2)
    }

    fn window(&self, start: usize) -> [Line; 3] {
        let [a, b, c, d, e, f] = self.0;
        match start {
            0 => [a, b, c],
            1 => [b, c, d],
            2 => [c, d, e],
            _ => [d, e, f],
        }
    }
}
