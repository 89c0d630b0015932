//! Core data model for Meihua.
//!
//! These types carry a reading from end to end: trigrams and their lines,
//! hexagrams, the input that seeds a cast, and the finished result.

mod hexagram;
mod input;
mod lines;
mod reading;
mod trigram;

pub use hexagram::Hexagram;
pub use input::{Category, DivinationInput, TemporalInput};
pub use lines::{Line, LineSequence};
pub use reading::{DivinationResult, Seeds};
pub use trigram::{Element, Trigram, TrigramInfo};
