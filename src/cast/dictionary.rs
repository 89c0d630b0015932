//! Label dictionaries for the observational categories.
//!
//! Each dictionary carries its own policy for labels it does not know:
//! reject the input, or fall back to a fixed entry.

use crate::error::{DivinationError, Result};
use crate::model::Category;
use crate::model::Trigram::{self, Dui, Gen, Kan, Kun, Li, Qian, Xun, Zhen};

/// One label and the trigram it maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DictionaryEntry {
    pub label: &'static str,
    /// Alternative spellings, matched case-insensitively.
    pub aliases: &'static [&'static str],
    pub trigram: Trigram,
}

/// What to do with a label that is not in the dictionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnknownLabel {
    Reject,
    Fallback {
        label: &'static str,
        trigram: Trigram,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dictionary {
    pub category: Category,
    pub field: &'static str,
    pub entries: &'static [DictionaryEntry],
    pub unknown: UnknownLabel,
}

/// A resolved label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Matched<'a> {
    /// The label as it should be reported: the input itself, or the
    /// fallback label when the input was empty.
    pub label: &'a str,
    pub trigram: Trigram,
}

const fn entry(
    label: &'static str,
    aliases: &'static [&'static str],
    trigram: Trigram,
) -> DictionaryEntry {
    DictionaryEntry {
        label,
        aliases,
        trigram,
    }
}

pub const DIRECTIONS: Dictionary = Dictionary {
    category: Category::Direction,
    field: "direction",
    entries: &[
        entry("东", &["east", "e"], Zhen),
        entry("东南", &["southeast", "se"], Xun),
        entry("南", &["south", "s"], Li),
        entry("西南", &["southwest", "sw"], Kun),
        entry("西", &["west", "w"], Dui),
        entry("西北", &["northwest", "nw"], Qian),
        entry("北", &["north", "n"], Kan),
        entry("东北", &["northeast", "ne"], Gen),
    ],
    unknown: UnknownLabel::Reject,
};

pub const SOUNDS: Dictionary = Dictionary {
    category: Category::Sound,
    field: "sound",
    entries: &[
        entry("鸟叫", &["bird", "birdsong"], Xun),
        entry("狗吠", &["dog", "bark"], Gen),
        entry("雷声", &["thunder"], Zhen),
        entry("风声", &["wind"], Xun),
        entry("雨声", &["rain"], Kan),
        entry("人声", &["voice", "voices"], Dui),
        entry("车声", &["vehicle", "traffic"], Qian),
        entry("钟声", &["bell"], Qian),
        entry("鼓声", &["drum"], Zhen),
        entry("其他", &["other"], Kun),
    ],
    unknown: UnknownLabel::Fallback {
        label: "其他",
        trigram: Kun,
    },
};

pub const COLORS: Dictionary = Dictionary {
    category: Category::Color,
    field: "color",
    entries: &[
        entry("红色", &["红", "red"], Li),
        entry("黄色", &["黄", "yellow"], Kun),
        entry("白色", &["白", "white"], Qian),
        entry("黑色", &["黑", "black"], Kan),
        entry("青色", &["青", "cyan"], Zhen),
        entry("绿色", &["绿", "green"], Xun),
        entry("紫色", &["紫", "purple"], Li),
        entry("灰色", &["灰", "gray", "grey"], Dui),
    ],
    unknown: UnknownLabel::Reject,
};

impl DictionaryEntry {
    fn matches(&self, label: &str) -> bool {
        self.label == label || self.aliases.iter().any(|a| a.eq_ignore_ascii_case(label))
    }
}

impl Dictionary {
    /// Resolves `label` (trimmed) under this dictionary's unknown-label policy.
    pub fn lookup<'a>(&self, label: &'a str) -> Result<Matched<'a>> {
        let label = label.trim();
        if let Some(found) = self.entries.iter().find(|e| e.matches(label)) {
            return Ok(Matched {
                label,
                trigram: found.trigram,
            });
        }
        match self.unknown {
            UnknownLabel::Fallback {
                label: fallback,
                trigram,
            } => Ok(Matched {
                label: if label.is_empty() { fallback } else { label },
                trigram,
            }),
            UnknownLabel::Reject if label.is_empty() => Err(DivinationError::invalid(
                self.category,
                self.field,
                "is empty",
            )),
            UnknownLabel::Reject => Err(DivinationError::invalid(
                self.category,
                self.field,
                format!("unknown label \"{label}\"; expected one of {}", self.labels()),
            )),
        }
    }

    /// The canonical labels, separated by "、".
    pub fn labels(&self) -> String {
        self.entries
            .iter()
            .map(|e| e.label)
            .collect::<Vec<_>>()
            .join("、")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directions_follow_the_later_heaven_arrangement() {
        let cases = [
            ("东", Zhen),
            ("东南", Xun),
            ("南", Li),
            ("西南", Kun),
            ("西", Dui),
            ("西北", Qian),
            ("北", Kan),
            ("东北", Gen),
        ];
        for (label, trigram) in cases {
            assert_eq!(DIRECTIONS.lookup(label).unwrap().trigram, trigram);
        }
    }

    #[test]
    fn aliases_match_case_insensitively() {
        assert_eq!(DIRECTIONS.lookup("NorthWest").unwrap().trigram, Qian);
        assert_eq!(COLORS.lookup(" Grey ").unwrap().trigram, Dui);
        assert_eq!(SOUNDS.lookup("THUNDER").unwrap().trigram, Zhen);
    }

    #[test]
    fn unknown_direction_is_rejected() {
        let err = DIRECTIONS.lookup("上").unwrap_err();
        match err {
            DivinationError::InvalidInput {
                category, field, ..
            } => {
                assert_eq!(category, Category::Direction);
                assert_eq!(field, "direction");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn empty_color_is_rejected() {
        assert!(COLORS.lookup("  ").is_err());
    }

    #[test]
    fn unknown_sound_falls_back_to_other() {
        let m = SOUNDS.lookup("猫叫").unwrap();
        assert_eq!(m.trigram, Kun);
        assert_eq!(m.label, "猫叫");

        let m = SOUNDS.lookup("").unwrap();
        assert_eq!(m.trigram, Kun);
        assert_eq!(m.label, "其他");
    }

    #[test]
    fn every_color_is_covered() {
        let expected = [
            ("红色", Li),
            ("黄色", Kun),
            ("白色", Qian),
            ("黑色", Kan),
            ("青色", Zhen),
            ("绿色", Xun),
            ("紫色", Li),
            ("灰色", Dui),
        ];
        for (label, trigram) in expected {
            assert_eq!(COLORS.lookup(label).unwrap().trigram, trigram);
        }
    }

    #[test]
    fn labels_lists_canonical_names() {
        assert_eq!(DIRECTIONS.labels(), "东、东南、南、西南、西、西北、北、东北");
    }
}
