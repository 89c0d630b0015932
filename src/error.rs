//! Errors raised while translating an input into seeds.

use crate::model::{Category, Trigram};

/// Why a divination was rejected.
///
/// Translation is all-or-nothing: either every seed is produced or the whole
/// input is rejected with enough context to point at the offending field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DivinationError {
    #[error("invalid {category} input ({field}): {reason}")]
    InvalidInput {
        category: Category,
        field: &'static str,
        reason: String,
    },

    /// A trigram pair missing from the hexagram table. Indicates a table bug.
    #[error("no hexagram for upper {upper} over lower {lower}")]
    UnresolvableHexagram { upper: Trigram, lower: Trigram },
}

impl DivinationError {
    pub(crate) fn invalid(
        category: Category,
        field: &'static str,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidInput {
            category,
            field,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = core::result::Result<T, DivinationError>;
