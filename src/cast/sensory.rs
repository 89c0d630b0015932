//! Direction, sound and colour casts.
//!
//! The observed label names the upper trigram; the lower comes from the
//! moment of observation.

use crate::clock::Clock;
use crate::error::Result;
use crate::model::{Seeds, Trigram};
use crate::seed::normalize_trigram_seed;

use super::dictionary::{COLORS, DIRECTIONS, SOUNDS};
use super::{Moment, Translation};

pub(super) fn direction(label: &str, clock: &dyn Clock) -> Result<Translation> {
    let matched = DIRECTIONS.lookup(label)?;
    Ok(with_moment(
        matched.trigram,
        format!("方位取卦：{} → {}卦", matched.label, matched.trigram.name()),
        format!("方位起卦（观方位：{}）", matched.label),
        &Moment::now(clock),
    ))
}

pub(super) fn sound(label: &str, clock: &dyn Clock) -> Result<Translation> {
    let matched = SOUNDS.lookup(label)?;
    Ok(with_moment(
        matched.trigram,
        format!("声音取卦：{} → {}卦", matched.label, matched.trigram.name()),
        format!("声音起卦（闻声：{}）", matched.label),
        &Moment::now(clock),
    ))
}

/// Colour drops the year: the lower seed is month + day + double-hour.
pub(super) fn color(label: &str, clock: &dyn Clock) -> Result<Translation> {
    let matched = COLORS.lookup(label)?;
    let now = Moment::now(clock);
    let upper = i64::from(matched.trigram.number());
    let lower = now.month + now.day + now.double_hour;
    let lower_number = normalize_trigram_seed(lower);
    let changing = upper + i64::from(lower_number);

    Ok(Translation {
        seeds: Seeds {
            upper,
            lower,
            changing,
        },
        method: format!("颜色起卦（观色：{}）", matched.label),
        trace: vec![
            format!("颜色取卦：{} → {}卦", matched.label, matched.trigram.name()),
            format!(
                "下卦取数：{} + {} + {}（时辰） = {lower}",
                now.month, now.day, now.double_hour
            ),
            format!("动爻取数：{upper} + {lower_number} = {changing}"),
        ],
        time: now.timestamp,
    })
}

/// Upper from the trigram, lower from the full date and double-hour, and
/// the minute added into the changing seed.
fn with_moment(trigram: Trigram, upper_trace: String, method: String, now: &Moment) -> Translation {
    let upper = i64::from(trigram.number());
    let lower = now.temporal_seed();
    let lower_number = normalize_trigram_seed(lower);
    let changing = upper + i64::from(lower_number) + now.minute;

    Translation {
        seeds: Seeds {
            upper,
            lower,
            changing,
        },
        method,
        trace: vec![
            upper_trace,
            format!("下卦取数：{}", now.temporal_trace()),
            format!(
                "动爻取数：{upper} + {lower_number} + {}（分） = {changing}",
                now.minute
            ),
        ],
        time: now.timestamp,
    }
}
