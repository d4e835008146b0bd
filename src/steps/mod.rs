//! Parsing of single recipe instructions: label markup, cook times and timer labels.

mod duration;
mod label;
mod split;

pub use self::duration::extract_duration_minutes;
pub use self::label::{classify_label, classify_label_with, LabelCategory, LabelStrings};
pub use self::split::split_instruction;
