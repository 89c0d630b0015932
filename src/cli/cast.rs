//! `meihua cast` arguments.

use clap::Subcommand;

use meihua::model::{DivinationInput, TemporalInput};

use crate::config::Config;

#[derive(Debug, Subcommand)]
pub enum CastMethod {
    /// From a date and time. Missing fields are taken from now.
    Time {
        #[arg(long)]
        year: Option<i16>,
        #[arg(long)]
        month: Option<i8>,
        #[arg(long)]
        day: Option<i8>,
        #[arg(long)]
        hour: Option<i8>,
        #[arg(long)]
        minute: Option<i8>,

        /// Seed from the lunar date.
        #[arg(long, conflicts_with = "solar")]
        lunar: bool,

        /// Seed from the Gregorian date, overriding `lunar = true` in the
        /// config.
        #[arg(long)]
        solar: bool,
    },

    /// From reported numbers: upper, lower, and an optional changing seed.
    Number {
        #[arg(required = true, allow_negative_numbers = true)]
        numbers: Vec<i64>,
    },

    /// From a written phrase: character count over stroke total.
    Text { text: String },

    /// From a compass direction (东, 东南, … or east, se, …).
    Direction { direction: String },

    /// From a sound heard (雷声, 鸟叫, … or thunder, bird, …).
    /// Unrecognized sounds read as 其他.
    Sound { sound: Option<String> },

    /// From a colour seen (红色, 白色, … or red, white, …).
    Color { color: String },

    /// From a description of an object.
    Object { description: String },

    /// From the current instant alone.
    Random,
}

impl CastMethod {
    pub(super) fn to_input(&self, config: &Config) -> DivinationInput {
        match self {
            Self::Time {
                year,
                month,
                day,
                hour,
                minute,
                lunar,
                solar,
            } => DivinationInput::Time(TemporalInput {
                year: *year,
                month: *month,
                day: *day,
                hour: *hour,
                minute: *minute,
                lunar: *lunar || (config.lunar && !*solar),
            }),
            Self::Number { numbers } => DivinationInput::Number {
                numbers: numbers.clone(),
            },
            Self::Text { text } => DivinationInput::Text { text: text.clone() },
            Self::Direction { direction } => DivinationInput::Direction {
                direction: direction.clone(),
            },
            Self::Sound { sound } => DivinationInput::Sound {
                sound: sound.clone().unwrap_or_default(),
            },
            Self::Color { color } => DivinationInput::Color {
                color: color.clone(),
            },
            Self::Object { description } => DivinationInput::Object {
                description: description.clone(),
            },
            Self::Random => DivinationInput::Random,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time(lunar: bool, solar: bool) -> CastMethod {
        CastMethod::Time {
            year: Some(2024),
            month: None,
            day: None,
            hour: None,
            minute: None,
            lunar,
            solar,
        }
    }

    fn is_lunar(input: &DivinationInput) -> bool {
        matches!(input, DivinationInput::Time(t) if t.lunar)
    }

    #[test]
    fn config_sets_the_default_calendar() {
        let lunar = Config {
            lunar: true,
            ..Config::default()
        };
        assert!(is_lunar(&time(false, false).to_input(&lunar)));
        assert!(!is_lunar(&time(false, true).to_input(&lunar)));
        assert!(!is_lunar(&time(false, false).to_input(&Config::default())));
        assert!(is_lunar(&time(true, false).to_input(&Config::default())));
    }

    #[test]
    fn missing_sound_is_empty() {
        let input = CastMethod::Sound { sound: None }.to_input(&Config::default());
        assert_eq!(
            input,
            DivinationInput::Sound {
                sound: String::new()
            }
        );
    }
}
