//! The plain-text interpretation attached to every reading.

use crate::model::Hexagram;

const SYNTHESIS: &str = "【综合分析】主卦体现事情现状，互卦刻画演变过程，变卦指示趋势走向。动爻为关键节点，应依卦象灵活推演吉凶。";

/// Everything the interpretation text is built from.
#[derive(Debug, Clone, Copy)]
pub struct Interpretation<'a> {
    pub method: &'a str,
    pub trace: &'a [String],
    pub primary: &'a Hexagram,
    pub mutual: Option<&'a Hexagram>,
    pub changing: Option<&'a Hexagram>,
    pub changing_line: u8,
}

impl Interpretation<'_> {
    /// Renders the blocks in fixed order, one item per line. An absent
    /// mutual or changing hexagram drops its block.
    pub fn render(&self) -> String {
        let mut lines = Vec::with_capacity(self.trace.len() + 12);
        lines.push(format!("起卦方法：{}", self.method));
        lines.extend(self.trace.iter().cloned());

        let p = self.primary;
        lines.push(format!("【主卦】{}（{}）", p.name, p.symbol));
        lines.push(format!("卦辞：{}", p.meaning));
        lines.push(format!("解读：{}", p.description));

        if let Some(m) = self.mutual {
            lines.push(format!("【互卦】{}（{}）", m.name, m.symbol));
            lines.push(format!("互卦含义：{}", m.meaning));
        }
        if let Some(c) = self.changing {
            lines.push(format!("【变卦】{}（{}）", c.name, c.symbol));
            lines.push(format!("变卦含义：{}", c.meaning));
        }

        lines.push(format!("【动爻】第{}爻", self.changing_line));
        lines.push(SYNTHESIS.to_string());
        lines.join("\n")
    }
}
