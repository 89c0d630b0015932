//! The divination pipeline: translate, normalize, resolve, render.

use tracing::{debug, instrument};

use crate::cast::{self, Translation};
use crate::clock::{Clock, SystemClock};
use crate::error::Result;
use crate::lunar::{LunarCalendar, TableCalendar};
use crate::model::{DivinationInput, DivinationResult, Seeds};
use crate::render::Interpretation;
use crate::resolve::{resolve_changing, resolve_mutual, resolve_primary};
use crate::seed::normalize_line_seed;

/// Casts readings against a clock and a lunar calendar.
///
/// Holds no state between calls; concurrent use is safe.
#[derive(Clone, Copy)]
pub struct Diviner<'a> {
    clock: &'a dyn Clock,
    calendar: &'a dyn LunarCalendar,
}

impl Default for Diviner<'static> {
    fn default() -> Self {
        Self {
            clock: &SystemClock,
            calendar: &TableCalendar,
        }
    }
}

impl<'a> Diviner<'a> {
    pub fn new(clock: &'a dyn Clock, calendar: &'a dyn LunarCalendar) -> Self {
        Self { clock, calendar }
    }

    /// Casts one reading.
    ///
    /// Fails only when the input cannot be translated into seeds.
    #[instrument(skip_all, fields(category = %input.category()))]
    pub fn divine(&self, input: &DivinationInput) -> Result<DivinationResult> {
        let translation = cast::translate(input, self.clock, self.calendar)?;
        debug!(
            upper = translation.seeds.upper,
            lower = translation.seeds.lower,
            changing = translation.seeds.changing,
            "seeds translated"
        );
        Ok(assemble(translation))
    }
}

/// Casts one reading with the system clock and the built-in lunar table.
pub fn perform_divination(input: &DivinationInput) -> Result<DivinationResult> {
    Diviner::default().divine(input)
}

/// Builds the reading from translated seeds.
pub fn assemble(translation: Translation) -> DivinationResult {
    let Translation {
        seeds,
        method,
        trace,
        time,
    } = translation;
    let Seeds {
        upper,
        lower,
        changing,
    } = seeds;

    let changing_line = normalize_line_seed(changing);
    let primary = resolve_primary(upper, lower);
    let mutual = resolve_mutual(upper, lower);
    let changing = resolve_changing(&primary, changing_line);
    debug!(
        primary = primary.number,
        mutual = mutual.number,
        changing_line,
        "hexagrams resolved"
    );

    let interpretation = Interpretation {
        method: &method,
        trace: &trace,
        primary: &primary,
        mutual: Some(&mutual),
        changing: changing.as_ref(),
        changing_line,
    }
    .render();

    DivinationResult {
        primary,
        mutual: Some(mutual),
        changing_line,
        changing,
        interpretation,
        method,
        detail_lines: trace,
        seeds,
        time,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::cast::testing::{clock, zoned};
    use crate::clock::FixedClock;
    use crate::error::DivinationError;
    use crate::model::{Category, TemporalInput, Trigram};

    fn divine(input: &DivinationInput) -> Result<DivinationResult> {
        let clock = clock();
        Diviner::new(&clock, &TableCalendar).divine(input)
    }

    #[test]
    fn new_year_midnight_is_ge() {
        let result = divine(&DivinationInput::Time(TemporalInput {
            year: Some(2024),
            month: Some(1),
            day: Some(1),
            hour: Some(0),
            minute: Some(0),
            lunar: false,
        }))
        .unwrap();

        assert_eq!(result.primary.upper_trigram, Trigram::Dui);
        assert_eq!(result.primary.lower_trigram, Trigram::Li);
        assert_eq!(result.primary.number, 49);
        assert_eq!(result.mutual.as_ref().unwrap().number, 44);
        assert_eq!(result.changing_line, 5);
        assert_eq!(result.changing.as_ref().unwrap().number, 55);
        assert_eq!(
            result.time,
            zoned(2024, 1, 1, 0, 0, 0, 0).timestamp()
        );
    }

    #[test]
    fn three_and_seven() {
        let result = divine(&DivinationInput::Number {
            numbers: vec![3, 7],
        })
        .unwrap();
        assert_eq!(result.primary.upper_trigram, Trigram::Li);
        assert_eq!(result.primary.lower_trigram, Trigram::Gen);
        assert_eq!(result.changing_line, 4);
        assert_eq!(result.seeds.changing, 10);
    }

    #[test]
    fn one_number_is_not_enough() {
        let err = divine(&DivinationInput::Number { numbers: vec![1] }).unwrap_err();
        assert!(matches!(
            err,
            DivinationError::InvalidInput {
                category: Category::Number,
                ..
            }
        ));
    }

    #[test]
    fn the_character_qian() {
        let result = divine(&DivinationInput::Text { text: "乾".into() }).unwrap();
        assert_eq!(result.primary.upper_trigram, Trigram::Qian);
        assert_eq!(result.primary.lower_trigram, Trigram::Li);
        assert_eq!(result.changing_line, 6);
    }

    #[test]
    fn every_category_produces_a_consistent_reading() {
        let inputs = [
            DivinationInput::Time(TemporalInput::default()),
            DivinationInput::Number {
                numbers: vec![12, 34, 56],
            },
            DivinationInput::Text {
                text: "梅花易数".into(),
            },
            DivinationInput::Direction {
                direction: "东南".into(),
            },
            DivinationInput::Sound {
                sound: "鸟叫".into(),
            },
            DivinationInput::Color {
                color: "white".into(),
            },
            DivinationInput::Object {
                description: "一口井".into(),
            },
            DivinationInput::Random,
        ];

        for input in &inputs {
            let result = divine(input).unwrap();
            assert!((1..=6).contains(&result.changing_line));
            assert!(!result.primary.is_synthetic());

            let changing = result.changing.as_ref().unwrap();
            let diff = result
                .primary
                .lines()
                .lines()
                .iter()
                .zip(changing.lines().lines())
                .filter(|(a, b)| **a != *b)
                .count();
            assert_eq!(diff, 1, "{input:?}");

            assert!(result.interpretation.starts_with("起卦方法："));
            assert!(result.interpretation.contains(&result.method));
            assert!(!result.detail_lines.is_empty());
        }
    }

    #[test]
    fn the_same_input_and_instant_give_the_same_reading() {
        let input = DivinationInput::Random;
        assert_eq!(divine(&input).unwrap(), divine(&input).unwrap());
    }

    #[test]
    fn the_clock_is_substitutable() {
        let a = FixedClock::new(zoned(2024, 1, 1, 0, 0, 0, 0));
        let b = FixedClock::new(zoned(2024, 1, 2, 0, 0, 0, 0));
        let input = DivinationInput::Time(TemporalInput::default());
        let ra = Diviner::new(&a, &TableCalendar).divine(&input).unwrap();
        let rb = Diviner::new(&b, &TableCalendar).divine(&input).unwrap();
        assert_eq!(rb.seeds.upper, ra.seeds.upper + 1);
    }
}
