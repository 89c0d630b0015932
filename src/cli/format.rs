//! Output formatting for CLI display.

use jiff::tz::TimeZone;
use uuid::Uuid;

use meihua::model::{DivinationResult, Hexagram};
use meihua::storage::HistoryEntry;

/// The first eight characters of an id.
pub(super) fn short_id(id: Uuid) -> String {
    id.to_string()[..8].to_string()
}

/// The three hexagrams side by side with the changing line marked, then
/// the interpretation.
pub(super) fn format_reading(reading: &DivinationResult) -> String {
    let mut out = String::new();

    let mut header = format!("{} {}", reading.primary.symbol, reading.primary.name);
    if let Some(changing) = &reading.changing {
        header.push_str(&format!("  →  {} {}", changing.symbol, changing.name));
    }
    out.push_str(&header);
    out.push('\n');
    out.push_str(&draw(&reading.primary, reading.changing_line));
    out.push('\n');
    out.push_str(&reading.interpretation);
    out
}

/// Lines top to bottom, `○` beside the changing line.
fn draw(hexagram: &Hexagram, changing_line: u8) -> String {
    let lines = hexagram.lines();
    (1..=6u8)
        .rev()
        .filter_map(|position| {
            let line = lines.get(position)?;
            let marker = if position == changing_line { " ○" } else { "" };
            Some(format!("{}{marker}\n", line.glyph()))
        })
        .collect()
}

/// One line of `history list`.
pub(super) fn format_entry(entry: &HistoryEntry) -> String {
    let saved = entry
        .saved_at
        .to_zoned(TimeZone::system())
        .strftime("%Y-%m-%d %H:%M");
    let reading = &entry.reading;
    let mut line = format!(
        "{}  {saved}  {} {}  {}",
        short_id(entry.id),
        reading.primary.symbol,
        reading.primary.name,
        reading.method
    );
    if let Some(note) = &entry.note {
        line.push_str(&format!("  # {note}"));
    }
    line
}

/// One line of `table`.
pub(super) fn format_table_row(hexagram: &Hexagram) -> String {
    format!(
        "{:>2}  {} {}  上{}下{}  {}",
        hexagram.number,
        hexagram.symbol,
        hexagram.name,
        hexagram.upper_trigram.name(),
        hexagram.lower_trigram.name(),
        hexagram.meaning
    )
}
