//! Number cast: reported numbers become the seeds directly.

use crate::clock::Clock;
use crate::error::{DivinationError, Result};
use crate::model::{Category, Seeds};

use super::{Moment, Translation};

pub(super) fn translate(numbers: &[i64], clock: &dyn Clock) -> Result<Translation> {
    let [first, second, rest @ ..] = numbers else {
        return Err(DivinationError::invalid(
            Category::Number,
            "numbers",
            format!("needs at least two numbers, got {}", numbers.len()),
        ));
    };
    let upper = first.saturating_abs();
    let lower = second.saturating_abs();

    let (changing, changing_trace) = match rest.first() {
        Some(third) => {
            let changing = third.saturating_abs();
            (changing, format!("动爻取数：第三数 {changing}"))
        }
        None => {
            let changing = upper.saturating_add(lower);
            (changing, format!("动爻取数：{upper} + {lower} = {changing}"))
        }
    };

    Ok(Translation {
        seeds: Seeds {
            upper,
            lower,
            changing,
        },
        method: "数字起卦（报数）".to_string(),
        trace: vec![
            format!("上卦取数：{upper}"),
            format!("下卦取数：{lower}"),
            changing_trace,
        ],
        time: Moment::now(clock).timestamp,
    })
}
