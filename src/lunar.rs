//! Solar to lunar date conversion.
//!
//! The time cast can seed from the traditional lunisolar date. Conversion is
//! behind [`LunarCalendar`] so callers can substitute their own oracle;
//! [`TableCalendar`] is the built-in one.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// A date in the Chinese lunisolar calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LunarDate {
    pub year: i16,
    pub month: i8,
    pub day: i8,
    /// The month is the intercalary repeat of `month`.
    pub leap_month: bool,
}

/// Converts Gregorian dates to lunar dates. A pure function.
pub trait LunarCalendar: Send + Sync {
    /// `None` when the date is outside the calendar's range.
    fn solar_to_lunar(&self, date: Date) -> Option<LunarDate>;
}

/// Lunar calendar backed by the month-length table for 1900–2100.
///
/// Each year packs: bits 0–3 the leap month (0 for none), bits 4–15 the
/// length of months 12 down to 1 (set = 30 days), bit 16 the length of the
/// leap month.
#[derive(Debug, Clone, Copy, Default)]
pub struct TableCalendar;

const FIRST_YEAR: i16 = 1900;

#[rustfmt::skip]
const YEAR_INFO: [u32; 201] = [
    0x04bd8, 0x04ae0, 0x0a570, 0x054d5, 0x0d260, 0x0d950, 0x16554, 0x056a0, 0x09ad0, 0x055d2,
    0x04ae0, 0x0a5b6, 0x0a4d0, 0x0d250, 0x1d255, 0x0b540, 0x0d6a0, 0x0ada2, 0x095b0, 0x14977,
    0x04970, 0x0a4b0, 0x0b4b5, 0x06a50, 0x06d40, 0x1ab54, 0x02b60, 0x09570, 0x052f2, 0x04970,
    0x06566, 0x0d4a0, 0x0ea50, 0x16a95, 0x05ad0, 0x02b60, 0x186e3, 0x092e0, 0x1c8d7, 0x0c950,
    0x0d4a0, 0x1d8a6, 0x0b550, 0x056a0, 0x1a5b4, 0x025d0, 0x092d0, 0x0d2b2, 0x0a950, 0x0b557,
    0x06ca0, 0x0b550, 0x15355, 0x04da0, 0x0a5b0, 0x14573, 0x052b0, 0x0a9a8, 0x0e950, 0x06aa0,
    0x0aea6, 0x0ab50, 0x04b60, 0x0aae4, 0x0a570, 0x05260, 0x0f263, 0x0d950, 0x05b57, 0x056a0,
    0x096d0, 0x04dd5, 0x04ad0, 0x0a4d0, 0x0d4d4, 0x0d250, 0x0d558, 0x0b540, 0x0b6a0, 0x195a6,
    0x095b0, 0x049b0, 0x0a974, 0x0a4b0, 0x0b27a, 0x06a50, 0x06d40, 0x0af46, 0x0ab60, 0x09570,
    0x04af5, 0x04970, 0x064b0, 0x074a3, 0x0ea50, 0x06b58, 0x05ac0, 0x0ab60, 0x096d5, 0x092e0,
    0x0c960, 0x0d954, 0x0d4a0, 0x0da50, 0x07552, 0x056a0, 0x0abb7, 0x025d0, 0x092d0, 0x0cab5,
    0x0a950, 0x0b4a0, 0x0baa4, 0x0ad50, 0x055d9, 0x04ba0, 0x0a5b0, 0x15176, 0x052b0, 0x0a930,
    0x07954, 0x06aa0, 0x0ad50, 0x05b52, 0x04b60, 0x0a6e6, 0x0a4e0, 0x0d260, 0x0ea65, 0x0d530,
    0x05aa0, 0x076a3, 0x096d0, 0x04afb, 0x04ad0, 0x0a4d0, 0x1d0b6, 0x0d250, 0x0d520, 0x0dd45,
    0x0b5a0, 0x056d0, 0x055b2, 0x049b0, 0x0a577, 0x0a4b0, 0x0aa50, 0x1b255, 0x06d20, 0x0ada0,
    0x14b63, 0x09370, 0x049f8, 0x04970, 0x064b0, 0x168a6, 0x0ea50, 0x06b20, 0x1a6c4, 0x0aae0,
    0x092e0, 0x0d2e3, 0x0c960, 0x0d557, 0x0d4a0, 0x0da50, 0x05d55, 0x056a0, 0x0a6d0, 0x055d4,
    0x052d0, 0x0a9b8, 0x0a950, 0x0b4a0, 0x0b6a6, 0x0ad50, 0x055a0, 0x0aba4, 0x0a5b0, 0x052b0,
    0x0b273, 0x06930, 0x07337, 0x06aa0, 0x0ad50, 0x14b55, 0x04b60, 0x0a570, 0x054e4, 0x0d160,
    0x0e968, 0x0d520, 0x0daa0, 0x16aa6, 0x056d0, 0x04ae0, 0x0a9d4, 0x0a2d0, 0x0d150, 0x0f252,
    0x0d520,
];

impl LunarCalendar for TableCalendar {
    fn solar_to_lunar(&self, date: Date) -> Option<LunarDate> {
        // Lunar 1900-01-01 fell on 1900-01-31.
        let epoch = Date::new(FIRST_YEAR, 1, 31).ok()?;
        let mut offset = i64::from(epoch.until(date).ok()?.get_days());
        if offset < 0 {
            return None;
        }

        let mut year = FIRST_YEAR;
        let mut info = None;
        for packed in YEAR_INFO {
            let days = year_days(packed);
            if offset < days {
                info = Some(packed);
                break;
            }
            offset -= days;
            year += 1;
        }
        let info = info?;

        let leap = leap_month(info);
        for month in 1..=12 {
            let days = month_days(info, month);
            if offset < days {
                return lunar_date(year, month, offset, false);
            }
            offset -= days;

            if month == leap {
                let days = leap_days(info);
                if offset < days {
                    return lunar_date(year, month, offset, true);
                }
                offset -= days;
            }
        }
        None
    }
}

fn lunar_date(year: i16, month: u8, offset: i64, leap_month: bool) -> Option<LunarDate> {
    Some(LunarDate {
        year,
        month: i8::try_from(month).ok()?,
        day: i8::try_from(offset + 1).ok()?,
        leap_month,
    })
}

fn leap_month(info: u32) -> u8 {
    // Masked to four bits.
    u8::try_from(info & 0xf).unwrap_or(0)
}

fn leap_days(info: u32) -> i64 {
    match (leap_month(info), info & 0x10000) {
        (0, _) => 0,
        (_, 0) => 29,
        _ => 30,
    }
}

fn month_days(info: u32, month: u8) -> i64 {
    if info & (0x10000 >> month) == 0 { 29 } else { 30 }
}

fn year_days(info: u32) -> i64 {
    (1..=12).map(|m| month_days(info, m)).sum::<i64>() + leap_days(info)
}
