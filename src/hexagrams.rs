//! The sixty-four hexagrams.
//!
//! Stored in King Wen order and indexed by an 8×8 array keyed on
//! (upper, lower) trigram, built at compile time. A pair missing from the
//! table still resolves: [`hexagram`] synthesizes a placeholder from the two
//! trigram names rather than failing.

use crate::error::{DivinationError, Result};
use crate::model::Hexagram;
use crate::model::Trigram::{self, Dui, Gen, Kan, Kun, Li, Qian, Xun, Zhen};

/// A row of the static table.
#[derive(Debug, PartialEq, Eq)]
pub struct HexagramEntry {
    pub number: u8,
    pub name: &'static str,
    pub upper: Trigram,
    pub lower: Trigram,
    pub symbol: &'static str,
    pub meaning: &'static str,
    pub description: &'static str,
}

impl HexagramEntry {
    pub fn to_hexagram(&self) -> Hexagram {
        Hexagram {
            number: self.number,
            name: self.name.to_string(),
            upper_trigram: self.upper,
            lower_trigram: self.lower,
            symbol: self.symbol.to_string(),
            meaning: self.meaning.to_string(),
            description: self.description.to_string(),
        }
    }
}

const fn entry(
    number: u8,
    name: &'static str,
    upper: Trigram,
    lower: Trigram,
    symbol: &'static str,
    meaning: &'static str,
    description: &'static str,
) -> HexagramEntry {
    HexagramEntry {
        number,
        name,
        upper,
        lower,
        symbol,
        meaning,
        description,
    }
}

#[rustfmt::skip]
const TABLE: [HexagramEntry; 64] = [
    entry(1, "乾为天", Qian, Qian, "䷀", "元亨利贞", "天行健，君子以自强不息。龙跃于天，利见大人。"),
    entry(2, "坤为地", Kun, Kun, "䷁", "元亨，利牝马之贞", "地势坤，君子以厚德载物。"),
    entry(3, "水雷屯", Kan, Zhen, "䷂", "元亨利贞", "云雷屯。君子以经纶。"),
    entry(4, "山水蒙", Gen, Kan, "䷃", "亨。匪我求童蒙", "山下出泉，蒙。君子以果行育德。"),
    entry(5, "水天需", Kan, Qian, "䷄", "有孚，光亨，贞吉", "云上于天，需。君子以饮食宴乐。"),
    entry(6, "天水讼", Qian, Kan, "䷅", "有孚，窒惕中吉", "天与水违行，讼。君子以作事谋始。"),
    entry(7, "地水师", Kun, Kan, "䷆", "贞，丈人吉无咎", "地中有水，师。君子以容民畜众。"),
    entry(8, "水地比", Kan, Kun, "䷇", "吉。原筮元永贞，无咎", "地上有水，比。先王以建万国，亲诸侯。"),
    entry(9, "风天小畜", Xun, Qian, "䷈", "亨。密云不雨", "风行天上，小畜。君子以懿文德。"),
    entry(10, "天泽履", Qian, Dui, "䷉", "履虎尾，不咥人，亨", "上天下泽，履。君子以辨上下，定民志。"),
    entry(11, "地天泰", Kun, Qian, "䷊", "小往大来，吉亨", "天地交，泰。后以财成天地之道，辅相天地之宜。"),
    entry(12, "天地否", Qian, Kun, "䷋", "否之匪人，不利君子贞", "天地不交，否。君子以俭德辟难，不可荣以禄。"),
    entry(13, "天火同人", Qian, Li, "䷌", "同人于野，亨", "天与火，同人。君子以类族辨物。"),
    entry(14, "火天大有", Li, Qian, "䷍", "元亨", "火在天上，大有。君子以遏恶扬善，顺天休命。"),
    entry(15, "地山谦", Kun, Gen, "䷎", "亨，君子有终", "地中有山，谦。君子以裒多益寡，称物平施。"),
    entry(16, "雷地豫", Zhen, Kun, "䷏", "利建侯行师", "雷出地奋，豫。先王以作乐崇德。"),
    entry(17, "泽雷随", Dui, Zhen, "䷐", "元亨利贞，无咎", "泽中有雷，随。君子以向晦入宴息。"),
    entry(18, "山风蛊", Gen, Xun, "䷑", "元亨，利涉大川", "山下有风，蛊。君子以振民育德。"),
    entry(19, "地泽临", Kun, Dui, "䷒", "元亨利贞", "泽上有地，临。君子以教思无穷，容保民无疆。"),
    entry(20, "风地观", Xun, Kun, "䷓", "盥而不荐，有孚颙若", "风行地上，观。先王以省方观民设教。"),
    entry(21, "火雷噬嗑", Li, Zhen, "䷔", "亨，利用狱", "雷电，噬嗑。先王以明罚敕法。"),
    entry(22, "山火贲", Gen, Li, "䷕", "亨。小利有攸往", "山下有火，贲。君子以明庶政，无敢折狱。"),
    entry(23, "山地剥", Gen, Kun, "䷖", "不利有攸往", "山附于地，剥。上以厚下，安宅。"),
    entry(24, "地雷复", Kun, Zhen, "䷗", "亨。出入无疾，朋来无咎", "雷在地中，复。先王以至日闭关，商旅不行。"),
    entry(25, "天雷无妄", Qian, Zhen, "䷘", "元亨利贞", "天下雷行，无妄。先王以茂对时，育万物。"),
    entry(26, "山天大畜", Gen, Qian, "䷙", "利贞，不家食吉", "天在山中，大畜。君子以多识前言往行，以畜其德。"),
    entry(27, "山雷颐", Gen, Zhen, "䷚", "贞吉。观颐，自求口实", "山下有雷，颐。君子以慎言语，节饮食。"),
    entry(28, "泽风大过", Dui, Xun, "䷛", "栋桡，利有攸往，亨", "泽灭木，大过。君子以独立不惧，遯世无闷。"),
    entry(29, "坎为水", Kan, Kan, "䷜", "习坎，有孚维心亨", "水洊至，习坎。君子以常德行，习教事。"),
    entry(30, "离为火", Li, Li, "䷝", "利贞，亨。畜牝牛，吉", "明两作，离。大人以继明照于四方。"),
    entry(31, "泽山咸", Dui, Gen, "䷞", "亨，利贞，取女吉", "山上有泽，咸。君子以虚受人。"),
    entry(32, "雷风恒", Zhen, Xun, "䷟", "亨无咎，利贞", "雷风，恒。君子以立不易方。"),
    entry(33, "天山遁", Qian, Gen, "䷠", "亨，小利贞", "天下有山，遁。君子以远小人，不恶而严。退避保身，明哲保身。"),
    entry(34, "雷天大壮", Zhen, Qian, "䷡", "利贞", "雷在天上，大壮。君子以非礼弗履。"),
    entry(35, "火地晋", Li, Kun, "䷢", "康侯用锡马蕃庶，昼日三接", "明出地上，晋。君子以自昭明德。"),
    entry(36, "地火明夷", Kun, Li, "䷣", "利艰贞", "明入地中，明夷。君子以莅众，用晦而明。"),
    entry(37, "风火家人", Xun, Li, "䷤", "利女贞", "风自火出，家人。君子以言有物，而行有恒。"),
    entry(38, "火泽睽", Li, Dui, "䷥", "小事吉", "上火下泽，睽。君子以同而异。"),
    entry(39, "水山蹇", Kan, Gen, "䷦", "利西南，不利东北", "山上有水，蹇。君子以反身修德。"),
    entry(40, "雷水解", Zhen, Kan, "䷧", "利西南。无所往，其来复吉", "雷雨作，解。君子以赦过宥罪。"),
    entry(41, "山泽损", Gen, Dui, "䷨", "有孚，元吉无咎", "山下有泽，损。君子以惩忿窒欲。"),
    entry(42, "风雷益", Xun, Zhen, "䷩", "利有攸往，利涉大川", "风雷，益。君子以见善则迁，有过则改。"),
    entry(43, "泽天夬", Dui, Qian, "䷪", "扬于王庭，孚号有厉", "泽上于天，夬。君子以施禄及下，居德则忌。"),
    entry(44, "天风姤", Qian, Xun, "䷫", "女壮，勿用取女", "天下有风，姤。后以施命诰四方。阴气萌生，须防小人。"),
    entry(45, "泽地萃", Dui, Kun, "䷬", "亨。王假有庙", "泽上于地，萃。君子以除戎器，戒不虞。"),
    entry(46, "地风升", Kun, Xun, "䷭", "元亨，用见大人", "地中生木，升。君子以顺德，积小以高大。"),
    entry(47, "泽水困", Dui, Kan, "䷮", "亨，贞大人吉", "泽无水，困。君子以致命遂志。"),
    entry(48, "水风井", Kan, Xun, "䷯", "改邑不改井", "木上有水，井。君子以劳民劝相。"),
    entry(49, "泽火革", Dui, Li, "䷰", "己日乃孚，元亨利贞", "泽中有火，革。君子以治历明时。"),
    entry(50, "火风鼎", Li, Xun, "䷱", "元吉，亨", "木上有火，鼎。君子以正位凝命。"),
    entry(51, "震为雷", Zhen, Zhen, "䷲", "亨。震来虩虩，笑言哑哑", "洊雷，震。君子以恐惧修省。"),
    entry(52, "艮为山", Gen, Gen, "䷳", "艮其背，不获其身", "兼山，艮。君子以思不出其位。"),
    entry(53, "风山渐", Xun, Gen, "䷴", "女归吉，利贞", "山上有木，渐。君子以居贤德善俗。"),
    entry(54, "雷泽归妹", Zhen, Dui, "䷵", "征凶，无攸利", "泽上有雷，归妹。君子以永终知敝。"),
    entry(55, "雷火丰", Zhen, Li, "䷶", "亨，王假之", "雷电皆至，丰。君子以折狱致刑。"),
    entry(56, "火山旅", Li, Gen, "䷷", "小亨，旅贞吉", "山上有火，旅。君子以明慎用刑，而不留狱。"),
    entry(57, "巽为风", Xun, Xun, "䷸", "小亨，利有攸往", "随风，巽。君子以申命行事。"),
    entry(58, "兑为泽", Dui, Dui, "䷹", "亨，利贞", "丽泽，兑。君子以朋友讲习。"),
    entry(59, "风水涣", Xun, Kan, "䷺", "亨。王假有庙", "风行水上，涣。先王以享于帝，立庙。"),
    entry(60, "水泽节", Kan, Dui, "䷻", "亨。苦节不可贞", "泽上有水，节。君子以制数度，议德行。"),
    entry(61, "风泽中孚", Xun, Dui, "䷼", "豚鱼吉，利涉大川", "泽上有风，中孚。君子以议狱缓死。"),
    entry(62, "雷山小过", Zhen, Gen, "䷽", "亨，利贞", "山上有雷，小过。君子以行过乎恭，丧过乎哀，用过乎俭。"),
    entry(63, "水火既济", Kan, Li, "䷾", "亨小利贞", "水在火上，既济。君子以思患而预防之。"),
    entry(64, "火水未济", Li, Kan, "䷿", "亨。小狐汔济", "火在水上，未济。君子以慎辨物居方。"),
];

/// All sixty-four, in King Wen order.
pub static HEXAGRAMS: [HexagramEntry; 64] = TABLE;

/// `INDEX[upper][lower]` is the table position plus one; zero means absent.
static INDEX: [[u8; 8]; 8] = build_index(&TABLE);

#[allow(clippy::cast_possible_truncation)] // The table has 64 rows.
const fn build_index(table: &[HexagramEntry]) -> [[u8; 8]; 8] {
    let mut index = [[0; 8]; 8];
    let mut i = 0;
    while i < table.len() {
        let e = &table[i];
        index[e.upper as usize][e.lower as usize] = (i + 1) as u8;
        i += 1;
    }
    index
}

/// The table row for a pair, if the table has one.
pub fn entry_for(upper: Trigram, lower: Trigram) -> Option<&'static HexagramEntry> {
    let slot = INDEX[upper as usize][lower as usize];
    HEXAGRAMS.get(usize::from(slot.checked_sub(1)?))
}

/// The table row with King Wen number `number`.
pub fn by_number(number: u8) -> Option<&'static HexagramEntry> {
    HEXAGRAMS.get(usize::from(number.checked_sub(1)?))
}

/// The hexagram for a pair. Never fails: unknown pairs are synthesized.
pub fn hexagram(upper: Trigram, lower: Trigram) -> Hexagram {
    entry_for(upper, lower).map_or_else(|| synthesize(upper, lower), HexagramEntry::to_hexagram)
}

/// The hexagram for a pair, straight from the table.
///
/// Fails with [`DivinationError::UnresolvableHexagram`] instead of
/// synthesizing; used to audit the table.
pub fn strict_hexagram(upper: Trigram, lower: Trigram) -> Result<Hexagram> {
    entry_for(upper, lower)
        .map(HexagramEntry::to_hexagram)
        .ok_or(DivinationError::UnresolvableHexagram { upper, lower })
}

/// A structurally valid stand-in for a pair the table lacks.
pub fn synthesize(upper: Trigram, lower: Trigram) -> Hexagram {
    Hexagram {
        number: 0,
        name: format!("{}{}", upper.name(), lower.name()),
        upper_trigram: upper,
        lower_trigram: lower,
        symbol: "卦".to_string(),
        meaning: "待解".to_string(),
        description: format!("上{}下{}", upper.name(), lower.name()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashSet;

    #[test]
    fn every_pair_is_in_the_table() {
        for upper in Trigram::ALL {
            for lower in Trigram::ALL {
                let h = strict_hexagram(upper, lower).unwrap();
                assert_eq!(h.upper_trigram, upper);
                assert_eq!(h.lower_trigram, lower);
                assert!(!h.is_synthetic());
            }
        }
    }

    #[test]
    fn table_is_in_king_wen_order() {
        for (i, e) in HEXAGRAMS.iter().enumerate() {
            assert_eq!(usize::from(e.number), i + 1);
            assert_eq!(by_number(e.number), Some(e));
        }
        assert_eq!(by_number(0), None);
        assert_eq!(by_number(65), None);
    }

    #[test]
    fn pairs_are_unique() {
        let pairs: HashSet<(Trigram, Trigram)> =
            HEXAGRAMS.iter().map(|e| (e.upper, e.lower)).collect();
        assert_eq!(pairs.len(), 64);
    }

    #[test]
    fn glyphs_follow_the_unicode_block() {
        for e in &HEXAGRAMS {
            let glyph = e.symbol.chars().next().unwrap();
            assert_eq!(u32::from(glyph), 0x4DC0 + u32::from(e.number) - 1);
        }
    }

    #[test]
    fn known_pairs() {
        assert_eq!(hexagram(Qian, Qian).name, "乾为天");
        assert_eq!(hexagram(Kun, Kun).number, 2);
        assert_eq!(hexagram(Dui, Li).name, "泽火革");
        assert_eq!(hexagram(Kan, Zhen).number, 3);
        assert_eq!(hexagram(Li, Kan).number, 64);
    }

    #[test]
    fn synthesized_hexagram_names_both_trigrams() {
        let h = synthesize(Gen, Xun);
        assert_eq!(h.number, 0);
        assert!(h.is_synthetic());
        assert_eq!(h.name, "艮巽");
        assert_eq!(h.meaning, "待解");
        assert_eq!(h.description, "上艮下巽");
        assert_eq!(h.upper_trigram, Gen);
        assert_eq!(h.lower_trigram, Xun);
    }
}
