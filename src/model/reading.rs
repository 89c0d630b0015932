//! The finished reading.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::hexagram::Hexagram;

/// Raw seeds as produced by a translator, before normalization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seeds {
    pub upper: i64,
    pub lower: i64,
    pub changing: i64,
}

/// The result of one cast.
///
/// Created once and never modified. `time` serializes as an RFC 3339
/// string and deserializes back into a [`Timestamp`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DivinationResult {
    pub primary: Hexagram,
    pub mutual: Option<Hexagram>,
    /// 1 (bottom) through 6 (top).
    pub changing_line: u8,
    pub changing: Option<Hexagram>,
    pub interpretation: String,

    /// How the reading was cast.
    #[serde(default = "unrecorded_method")]
    pub method: String,

    /// The arithmetic behind the seeds, one step per line.
    #[serde(default)]
    pub detail_lines: Vec<String>,

    #[serde(default)]
    pub seeds: Seeds,

    /// The moment the reading refers to.
    pub time: Timestamp,
}

/// Readings saved before the method was recorded.
fn unrecorded_method() -> String {
    "未记录起卦方式".to_string()
}
