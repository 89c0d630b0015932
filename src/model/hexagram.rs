//! Hexagram: two trigrams stacked, plus what the tradition says about them.

use serde::{Deserialize, Serialize};

use super::{lines::LineSequence, trigram::Trigram};

/// A resolved hexagram.
///
/// `number` is the King Wen sequence number, or 0 for a hexagram synthesized
/// from a pair the table does not know.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hexagram {
    pub number: u8,
    pub name: String,
    pub upper_trigram: Trigram,
    pub lower_trigram: Trigram,
    /// The Unicode hexagram glyph.
    pub symbol: String,
    /// The judgment.
    pub meaning: String,
    /// The image and its gloss.
    pub description: String,
}

impl Hexagram {
    pub fn lines(&self) -> LineSequence {
        LineSequence::new(self.upper_trigram, self.lower_trigram)
    }

    pub fn is_synthetic(&self) -> bool {
        self.number == 0
    }
}
