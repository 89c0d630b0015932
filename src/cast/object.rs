//! Object cast: a described thing's features or strokes name the upper
//! trigram.

use crate::clock::Clock;
use crate::error::{DivinationError, Result};
use crate::model::Trigram::{self, Gen, Kan, Kun, Li, Qian, Xun, Zhen};
use crate::model::{Category, Seeds};
use crate::seed::{normalize_trigram_seed, trigram_for_seed};
use crate::strokes::total_strokes;

use super::{Moment, Translation};

/// Keywords that evoke a trigram's image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObjectFeature {
    pub keywords: &'static [&'static str],
    pub trigram: Trigram,
}

/// Checked in order; the first rule with a matching keyword wins.
pub const OBJECT_FEATURES: &[ObjectFeature] = &[
    feature(&["圆", "圆形", "球", "轮", "环", "round", "ball", "wheel", "ring"], Qian),
    feature(&["方", "方形", "田", "土", "地", "square", "field", "soil"], Kun),
    feature(&["尖", "火", "灯", "光", "亮", "sharp", "fire", "lamp", "light", "bright"], Li),
    feature(&["长", "木", "竿", "竹", "雷", "long", "wood", "pole", "bamboo", "thunder"], Zhen),
    feature(&["风", "动", "布", "绳", "羽", "wind", "cloth", "rope", "feather"], Xun),
    feature(&["水", "弯", "沟", "洞", "流", "water", "curve", "ditch", "hole", "flow"], Kan),
    feature(&["山", "石", "止", "静", "门", "mountain", "stone", "rock", "still", "door"], Gen),
    feature(&["牛", "土块", "母", "坠", "厚", "cow", "ox", "mother", "heavy", "thick"], Kun),
];

const fn feature(keywords: &'static [&'static str], trigram: Trigram) -> ObjectFeature {
    ObjectFeature { keywords, trigram }
}

/// The first feature rule matching `description`, with the keyword that
/// matched.
///
/// Chinese keywords match anywhere in the text. English keywords match
/// whole words only, ignoring case, so "spring" does not count as "ring".
pub fn feature_trigram(description: &str) -> Option<(&'static str, Trigram)> {
    let lowered = description.to_lowercase();
    let words: Vec<&str> = lowered
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|w| !w.is_empty())
        .collect();

    OBJECT_FEATURES.iter().find_map(|rule| {
        rule.keywords
            .iter()
            .find(|k| {
                if k.is_ascii() {
                    words.contains(k)
                } else {
                    lowered.contains(**k)
                }
            })
            .map(|k| (*k, rule.trigram))
    })
}

pub(super) fn translate(description: &str, clock: &dyn Clock) -> Result<Translation> {
    let description = description.trim();
    if description.is_empty() {
        return Err(DivinationError::invalid(
            Category::Object,
            "description",
            "is empty",
        ));
    }

    let strokes = i64::try_from(total_strokes(description)).unwrap_or(i64::MAX);
    let (trigram, upper_trace) = match feature_trigram(description) {
        Some((keyword, trigram)) => (
            trigram,
            format!("物象取卦：“{keyword}” → {}卦", trigram.name()),
        ),
        None => {
            let trigram = trigram_for_seed(strokes);
            (
                trigram,
                format!("笔画取卦：{strokes} → {}卦", trigram.name()),
            )
        }
    };

    let now = Moment::now(clock);
    let upper = i64::from(trigram.number());
    let lower = now.temporal_seed();
    let changing = upper.saturating_add(strokes);

    Ok(Translation {
        seeds: Seeds {
            upper,
            lower,
            changing,
        },
        method: format!("物象起卦（观物：{description}）"),
        trace: vec![
            upper_trace,
            format!(
                "下卦取数：{} → {}",
                now.temporal_trace(),
                normalize_trigram_seed(lower)
            ),
            format!("动爻取数：{upper} + {strokes}（笔画） = {changing}"),
        ],
        time: now.timestamp,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::cast::testing::clock;

    #[test]
    fn first_matching_rule_wins() {
        // 圆 (乾) comes before 石 (艮).
        assert_eq!(feature_trigram("圆石"), Some(("圆", Qian)));
        assert_eq!(feature_trigram("一块石头"), Some(("石", Gen)));
    }

    #[test]
    fn english_keywords_ignore_case() {
        assert_eq!(feature_trigram("A Bamboo"), Some(("bamboo", Zhen)));
    }

    #[test]
    fn english_keywords_match_whole_words() {
        assert_eq!(feature_trigram("a spring of water"), Some(("water", Kan)));
        assert_eq!(feature_trigram("a kite in flight"), None);
        assert_eq!(feature_trigram("a wooden box"), None);
        assert_eq!(feature_trigram("a Ring, polished"), Some(("ring", Qian)));
        assert_eq!(feature_trigram("红色ball"), Some(("ball", Qian)));
    }

    #[test]
    fn no_feature_means_no_match() {
        assert_eq!(feature_trigram("书"), None);
    }

    #[test]
    fn feature_names_the_upper_trigram() {
        let t = translate("一盏灯", &clock()).unwrap();
        assert_eq!(t.seeds.upper, 3);
        assert_eq!(t.seeds.lower, 2024 + 3 + 15 + 8);
        let strokes = i64::try_from(total_strokes("一盏灯")).unwrap();
        assert_eq!(t.seeds.changing, 3 + strokes);
        assert_eq!(t.method, "物象起卦（观物：一盏灯）");
    }

    #[test]
    fn strokes_name_the_upper_trigram_without_a_feature() {
        // 书 has four strokes: 震.
        let t = translate("书", &clock()).unwrap();
        assert_eq!(t.seeds.upper, 4);
        assert_eq!(t.seeds.changing, 8);
    }

    #[test]
    fn empty_description_is_rejected() {
        assert!(translate("  ", &clock()).is_err());
    }
}
