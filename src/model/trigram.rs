//! The eight trigrams and their attributes.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::lines::Line::{self, Yang, Yin};

/// One of the eight trigrams.
///
/// Numbered 1 through 8 in the order 乾 兑 离 震 巽 坎 艮 坤. The same
/// numbering is used by every seed translator and by the hexagram table.
/// Serialized as that number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Trigram {
    Qian,
    Dui,
    Li,
    Zhen,
    Xun,
    Kan,
    Gen,
    Kun,
}

/// The five phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Element {
    Metal,
    Wood,
    Water,
    Fire,
    Earth,
}

impl Element {
    pub fn name(self) -> &'static str {
        match self {
            Self::Metal => "金",
            Self::Wood => "木",
            Self::Water => "水",
            Self::Fire => "火",
            Self::Earth => "土",
        }
    }
}

/// Static description of a trigram.
#[derive(Debug, PartialEq, Eq)]
pub struct TrigramInfo {
    pub name: &'static str,
    pub pinyin: &'static str,
    pub symbol: &'static str,
    /// The natural image: heaven, lake, fire, and so on.
    pub image: &'static str,
    pub attribute: &'static str,
    pub direction: &'static str,
    pub element: Element,
    /// Bottom line first.
    pub lines: [Line; 3],
}

static TRIGRAMS: [TrigramInfo; 8] = [
    TrigramInfo {
        name: "乾",
        pinyin: "qian",
        symbol: "☰",
        image: "天",
        attribute: "健",
        direction: "西北",
        element: Element::Metal,
        lines: [Yang, Yang, Yang],
    },
    TrigramInfo {
        name: "兑",
        pinyin: "dui",
        symbol: "☱",
        image: "泽",
        attribute: "悦",
        direction: "西",
        element: Element::Metal,
        lines: [Yang, Yang, Yin],
    },
    TrigramInfo {
        name: "离",
        pinyin: "li",
        symbol: "☲",
        image: "火",
        attribute: "丽",
        direction: "南",
        element: Element::Fire,
        lines: [Yang, Yin, Yang],
    },
    TrigramInfo {
        name: "震",
        pinyin: "zhen",
        symbol: "☳",
        image: "雷",
        attribute: "动",
        direction: "东",
        element: Element::Wood,
        lines: [Yang, Yin, Yin],
    },
    TrigramInfo {
        name: "巽",
        pinyin: "xun",
        symbol: "☴",
        image: "风",
        attribute: "入",
        direction: "东南",
        element: Element::Wood,
        lines: [Yin, Yang, Yang],
    },
    TrigramInfo {
        name: "坎",
        pinyin: "kan",
        symbol: "☵",
        image: "水",
        attribute: "陷",
        direction: "北",
        element: Element::Water,
        lines: [Yin, Yang, Yin],
    },
    TrigramInfo {
        name: "艮",
        pinyin: "gen",
        symbol: "☶",
        image: "山",
        attribute: "止",
        direction: "东北",
        element: Element::Earth,
        lines: [Yin, Yin, Yang],
    },
    TrigramInfo {
        name: "坤",
        pinyin: "kun",
        symbol: "☷",
        image: "地",
        attribute: "顺",
        direction: "西南",
        element: Element::Earth,
        lines: [Yin, Yin, Yin],
    },
];

impl Trigram {
    /// All eight, in numbering order.
    pub const ALL: [Self; 8] = [
        Self::Qian,
        Self::Dui,
        Self::Li,
        Self::Zhen,
        Self::Xun,
        Self::Kan,
        Self::Gen,
        Self::Kun,
    ];

    /// The trigram's number, 1 through 8.
    pub fn number(self) -> u8 {
        self as u8 + 1
    }

    /// Looks a trigram up by its number. Anything outside 1..=8 is `None`.
    pub fn from_number(number: u8) -> Option<Self> {
        Self::ALL.get(usize::from(number.checked_sub(1)?)).copied()
    }

    /// Finds the trigram whose lines equal `lines` exactly.
    pub fn from_lines(lines: [Line; 3]) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.lines() == lines)
    }

    pub fn info(self) -> &'static TrigramInfo {
        &TRIGRAMS[self as usize]
    }

    /// Lines, bottom first.
    pub fn lines(self) -> [Line; 3] {
        self.info().lines
    }

    pub fn name(self) -> &'static str {
        self.info().name
    }

    pub fn symbol(self) -> &'static str {
        self.info().symbol
    }

    pub fn element(self) -> Element {
        self.info().element
    }
}

impl fmt::Display for Trigram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.name(), self.symbol())
    }
}

impl From<Trigram> for u8 {
    fn from(trigram: Trigram) -> Self {
        trigram.number()
    }
}

impl TryFrom<u8> for Trigram {
    type Error = String;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        Self::from_number(number).ok_or_else(|| format!("no trigram numbered {number}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashSet;

    #[test]
    fn numbers_run_one_through_eight() {
        let numbers: Vec<u8> = Trigram::ALL.iter().map(|t| t.number()).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5, 6, 7, 8]);
        for t in Trigram::ALL {
            assert_eq!(Trigram::from_number(t.number()), Some(t));
        }
    }

    #[test]
    fn from_number_rejects_out_of_range() {
        assert_eq!(Trigram::from_number(0), None);
        assert_eq!(Trigram::from_number(9), None);
    }

    #[test]
    fn line_patterns_are_pairwise_distinct() {
        let patterns: HashSet<[Line; 3]> = Trigram::ALL.iter().map(|t| t.lines()).collect();
        assert_eq!(patterns.len(), 8);
    }

    #[test]
    fn lines_round_trip_to_the_same_trigram() {
        for t in Trigram::ALL {
            assert_eq!(Trigram::from_lines(t.lines()), Some(t));
        }
    }

    #[test]
    fn bottom_line_comes_first() {
        // 震 has a single solid line at the bottom; 艮 has it at the top.
        assert_eq!(Trigram::Zhen.lines(), [Yang, Yin, Yin]);
        assert_eq!(Trigram::Gen.lines(), [Yin, Yin, Yang]);
    }

    #[test]
    fn serializes_as_number() {
        let json = serde_json::to_string(&Trigram::Kan).unwrap();
        assert_eq!(json, "6");
        let back: Trigram = serde_json::from_str("6").unwrap();
        assert_eq!(back, Trigram::Kan);
        assert!(serde_json::from_str::<Trigram>("0").is_err());
    }

    #[test]
    fn attributes_match_the_later_heaven_directions() {
        assert_eq!(Trigram::Li.info().direction, "南");
        assert_eq!(Trigram::Kan.info().direction, "北");
        assert_eq!(Trigram::Zhen.element(), Element::Wood);
        assert_eq!(Trigram::Kun.element().name(), "土");
    }
}
