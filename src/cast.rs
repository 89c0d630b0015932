//! Seed translators: one per input category.
//!
//! Each translator turns its input into three raw seeds (upper, lower,
//! changing), a method label, and trace lines showing the arithmetic.
//! Translation fails fast on a bad input and never returns partial seeds.

mod dictionary;
mod numeric;
mod object;
mod random;
mod sensory;
mod temporal;
mod textual;

use jiff::{Timestamp, Zoned};

use crate::clock::Clock;
use crate::error::Result;
use crate::lunar::LunarCalendar;
use crate::model::{DivinationInput, Seeds};

pub use dictionary::{
    COLORS, DIRECTIONS, Dictionary, DictionaryEntry, Matched, SOUNDS, UnknownLabel,
};
pub use object::{OBJECT_FEATURES, ObjectFeature, feature_trigram};
pub use temporal::double_hour;

/// What a translator produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub seeds: Seeds,
    pub method: String,
    pub trace: Vec<String>,
    /// The moment the reading refers to.
    pub time: Timestamp,
}

/// Dispatches `input` to the translator for its category.
pub fn translate(
    input: &DivinationInput,
    clock: &dyn Clock,
    calendar: &dyn LunarCalendar,
) -> Result<Translation> {
    match input {
        DivinationInput::Time(temporal) => temporal::translate(temporal, clock, calendar),
        DivinationInput::Number { numbers } => numeric::translate(numbers, clock),
        DivinationInput::Text { text } => textual::translate(text, clock),
        DivinationInput::Direction { direction } => sensory::direction(direction, clock),
        DivinationInput::Sound { sound } => sensory::sound(sound, clock),
        DivinationInput::Color { color } => sensory::color(color, clock),
        DivinationInput::Object { description } => object::translate(description, clock),
        DivinationInput::Random => Ok(random::translate(clock)),
    }
}

/// Civil fields of the instant a cast is made.
struct Moment {
    year: i64,
    month: i64,
    day: i64,
    hour: i64,
    minute: i64,
    second: i64,
    millisecond: i64,
    double_hour: i64,
    timestamp: Timestamp,
}

impl Moment {
    fn now(clock: &dyn Clock) -> Self {
        let now = clock.now();
        Self::from_zoned(&now)
    }

    fn from_zoned(zoned: &Zoned) -> Self {
        Self {
            year: i64::from(zoned.year()),
            month: i64::from(zoned.month()),
            day: i64::from(zoned.day()),
            hour: i64::from(zoned.hour()),
            minute: i64::from(zoned.minute()),
            second: i64::from(zoned.second()),
            millisecond: i64::from(zoned.millisecond()),
            double_hour: i64::from(double_hour(zoned.hour())),
            timestamp: zoned.timestamp(),
        }
    }

    /// Year + month + day + double-hour.
    fn temporal_seed(&self) -> i64 {
        self.year + self.month + self.day + self.double_hour
    }

    fn temporal_trace(&self) -> String {
        format!(
            "{} + {} + {} + {} = {}",
            self.year,
            self.month,
            self.day,
            self.double_hour,
            self.temporal_seed()
        )
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! A fixed clock for translator tests.

    use jiff::{Zoned, civil::date, tz::TimeZone};

    use crate::clock::FixedClock;

    /// 2024-03-15 14:27:08.250 at UTC+8.
    pub(crate) fn clock() -> FixedClock {
        FixedClock::new(zoned(2024, 3, 15, 14, 27, 8, 250))
    }

    pub(crate) fn zoned(y: i16, mo: i8, d: i8, h: i8, mi: i8, s: i8, ms: i32) -> Zoned {
        date(y, mo, d)
            .at(h, mi, s, ms * 1_000_000)
            .to_zoned(TimeZone::fixed(jiff::tz::offset(8)))
            .unwrap()
    }
}
