//! Time cast: year, month and day over the double-hour.

use jiff::civil::{Date, DateTime};

use crate::clock::Clock;
use crate::error::{DivinationError, Result};
use crate::lunar::LunarCalendar;
use crate::model::{Category, Seeds, TemporalInput};
use crate::seed::normalize_trigram_seed;

use super::Translation;

const SOLAR_METHOD: &str = "公历时间起卦（梅花易数年月日时）";
const LUNAR_METHOD: &str = "农历时间起卦（梅花易数年月日时）";

/// The double-hour (时辰) for a clock hour, 1 (子, 23:00–00:59) through
/// 12 (亥, 21:00–22:59).
///
/// Hours outside 0..=23 wrap.
pub fn double_hour(hour: i8) -> u8 {
    let hour = u8::try_from(hour.rem_euclid(24)).unwrap_or(0);
    (hour + 1) / 2 % 12 + 1
}

pub(super) fn translate(
    input: &TemporalInput,
    clock: &dyn Clock,
    calendar: &dyn LunarCalendar,
) -> Result<Translation> {
    let now = clock.now();
    let civil = civil_datetime(input, &now.datetime())?;
    let time = civil
        .to_zoned(now.time_zone().clone())
        .map_err(|e| invalid("date", e.to_string()))?
        .timestamp();

    let (year, month, day, method, label) = if input.lunar {
        let lunar = calendar.solar_to_lunar(civil.date()).ok_or_else(|| {
            invalid(
                "lunar",
                format!("{} is outside the lunar calendar's range", civil.date()),
            )
        })?;
        (lunar.year, lunar.month, lunar.day, LUNAR_METHOD, "农历")
    } else {
        (civil.year(), civil.month(), civil.day(), SOLAR_METHOD, "公历")
    };

    let double = double_hour(civil.hour());
    let upper = i64::from(year) + i64::from(month) + i64::from(day);
    let lower = upper + i64::from(double);
    let upper_number = normalize_trigram_seed(upper);
    let lower_number = normalize_trigram_seed(lower);
    let minute = civil.minute();
    let changing = i64::from(upper_number) + i64::from(lower_number) + i64::from(minute);

    Ok(Translation {
        seeds: Seeds {
            upper,
            lower,
            changing,
        },
        method: method.to_string(),
        trace: vec![
            format!("{label}日期：{year}年{month}月{day}日，{:02}:{minute:02}", civil.hour()),
            format!("上卦取数：{year} + {month} + {day} = {upper}"),
            format!("下卦取数：{upper} + {double}（时辰） = {lower}"),
            format!("动爻取数：{upper_number} + {lower_number} + {minute}（分） = {changing}"),
        ],
        time,
    })
}

/// Fills missing fields from `now` and validates the result.
fn civil_datetime(input: &TemporalInput, now: &DateTime) -> Result<DateTime> {
    let year = input.year.unwrap_or(now.year());
    let month = input.month.unwrap_or(now.month());
    let day = input.day.unwrap_or(now.day());
    let hour = input.hour.unwrap_or(now.hour());
    let minute = input.minute.unwrap_or(now.minute());

    check_range("year", year, -9999, 9999)?;
    check_range("month", month, 1, 12)?;
    check_range("hour", hour, 0, 23)?;
    check_range("minute", minute, 0, 59)?;
    let date = Date::new(year, month, day)
        .map_err(|_| invalid("day", format!("{year}-{month:02} has no day {day}")))?;
    Ok(date.at(hour, minute, 0, 0))
}

fn check_range<T>(field: &'static str, value: T, min: T, max: T) -> Result<()>
where
    T: PartialOrd + std::fmt::Display,
{
    if value < min || value > max {
        return Err(invalid(field, format!("{value} is outside {min}..={max}")));
    }
    Ok(())
}

fn invalid(field: &'static str, reason: impl Into<String>) -> DivinationError {
    DivinationError::invalid(Category::Time, field, reason)
}
