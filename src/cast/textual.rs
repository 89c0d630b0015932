//! Text cast: character count over stroke total.

use crate::clock::Clock;
use crate::error::{DivinationError, Result};
use crate::model::{Category, Seeds};
use crate::strokes::total_strokes;

use super::{Moment, Translation};

pub(super) fn translate(text: &str, clock: &dyn Clock) -> Result<Translation> {
    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.is_empty() {
        return Err(DivinationError::invalid(
            Category::Text,
            "text",
            "has no characters besides whitespace",
        ));
    }

    let count = i64::try_from(compact.chars().count()).unwrap_or(i64::MAX);
    let strokes = i64::try_from(total_strokes(&compact)).unwrap_or(i64::MAX);
    let changing = count.saturating_add(strokes);

    Ok(Translation {
        seeds: Seeds {
            upper: count,
            lower: strokes,
            changing,
        },
        method: format!("文字起卦（{compact}）"),
        trace: vec![
            format!("上卦取数：字数 {count}"),
            format!("下卦取数：笔画 {strokes}"),
            format!("动爻取数：{count} + {strokes} = {changing}"),
        ],
        time: Moment::now(clock).timestamp,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::cast::testing::clock;

    #[test]
    fn single_character() {
        // 乾: one character, eleven strokes.
        let t = translate("乾", &clock()).unwrap();
        assert_eq!(
            t.seeds,
            Seeds {
                upper: 1,
                lower: 11,
                changing: 12
            }
        );
        assert_eq!(t.method, "文字起卦（乾）");
    }

    #[test]
    fn common_phrase_counts_real_strokes() {
        // 梅 11, 花 7, 易 8, 数 13.
        let t = translate("梅花易数", &clock()).unwrap();
        assert_eq!(
            t.seeds,
            Seeds {
                upper: 4,
                lower: 39,
                changing: 43
            }
        );
    }

    #[test]
    fn whitespace_is_ignored() {
        let spaced = translate(" 天 地\n", &clock()).unwrap();
        let packed = translate("天地", &clock()).unwrap();
        assert_eq!(spaced.seeds, packed.seeds);
        assert_eq!(spaced.seeds.upper, 2);
        assert_eq!(spaced.method, "文字起卦（天地）");
    }

    #[test]
    fn blank_text_is_rejected() {
        for text in ["", "   ", "\t\n"] {
            let err = translate(text, &clock()).unwrap_err();
            assert!(matches!(
                err,
                DivinationError::InvalidInput {
                    category: Category::Text,
                    ..
                }
            ));
        }
    }

    #[test]
    fn unknown_characters_still_count() {
        let t = translate("ab", &clock()).unwrap();
        assert_eq!(t.seeds.upper, 2);
        assert_eq!(t.seeds.lower, 4);
    }
}
