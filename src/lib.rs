//! Plum Blossom (Meihua) numerology.
//!
//! Turns an observation (a moment, a few numbers, a phrase, a sound heard,
//! a colour seen) into three seeds, resolves them into a primary hexagram,
//! its mutual hexagram and its changing hexagram, and renders the reading.
//!
//! Everything under [`divination`] is a pure computation over static tables.
//! [`storage`] and [`prompt`] are the collaborators that keep readings and
//! hand them to a narrative layer.

pub mod cast;
pub mod clock;
pub mod divination;
mod error;
pub mod hexagrams;
pub mod lunar;
pub mod model;
pub mod prompt;
pub mod render;
pub mod resolve;
pub mod seed;
pub mod storage;
pub mod strokes;

pub use divination::{Diviner, perform_divination};
pub use error::{DivinationError, Result};
