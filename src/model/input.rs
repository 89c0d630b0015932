//! What a cast starts from.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The observation a cast is seeded from.
///
/// Tagged enum so each variant is self-describing when read back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum DivinationInput {
    /// A moment: year, month, day and double-hour.
    Time(TemporalInput),

    /// Numbers reported by the asker. At least two.
    Number { numbers: Vec<i64> },

    /// A written phrase: character count and strokes.
    Text { text: String },

    /// A compass direction, e.g. `东` or `east`.
    Direction { direction: String },

    /// A sound heard, e.g. `雷声` or `thunder`.
    Sound { sound: String },

    /// A colour seen, e.g. `红色` or `red`.
    Color { color: String },

    /// A free-text description of an object.
    Object { description: String },

    /// No input: seeded from the current instant.
    Random,
}

/// Civil date-time fields for a time cast.
///
/// Every missing field is taken from the clock.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemporalInput {
    pub year: Option<i16>,
    pub month: Option<i8>,
    pub day: Option<i8>,
    pub hour: Option<i8>,
    pub minute: Option<i8>,
    /// Convert the date to the lunar calendar before seeding.
    #[serde(default)]
    pub lunar: bool,
}

/// The category tag of a [`DivinationInput`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    Time,
    Number,
    Text,
    Direction,
    Sound,
    Color,
    Object,
    Random,
}

impl DivinationInput {
    pub fn category(&self) -> Category {
        match self {
            Self::Time(_) => Category::Time,
            Self::Number { .. } => Category::Number,
            Self::Text { .. } => Category::Text,
            Self::Direction { .. } => Category::Direction,
            Self::Sound { .. } => Category::Sound,
            Self::Color { .. } => Category::Color,
            Self::Object { .. } => Category::Object,
            Self::Random => Category::Random,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Time => "time",
            Self::Number => "number",
            Self::Text => "text",
            Self::Direction => "direction",
            Self::Sound => "sound",
            Self::Color => "color",
            Self::Object => "object",
            Self::Random => "random",
        };
        f.write_str(name)
    }
}
