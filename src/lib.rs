//! Recipe step analysis and cooking timers.
//!
//! Pure parsers turn recipe text into cook times, timer labels and scaled
//! ingredient quantities; [`TimerEngine`] and [`TimerDriver`] run the
//! resulting countdowns.

pub mod config;
pub mod error;
pub mod ingredients;
pub mod model;
pub mod recipe;
pub mod steps;
pub mod timers;
pub mod uniffi_bindings;

pub use config::{load_config, Settings};
pub use error::StepsError;
pub use ingredients::{parse_ingredient, scale_quantity, Aisle, BASE_SERVINGS};
pub use model::{Nutrition, Recipe};
pub use recipe::{analyze_recipe, analyze_step, shopping_list, to_markdown, ShoppingItem, StepAnalysis};
pub use steps::{classify_label, extract_duration_minutes, split_instruction, LabelStrings};
pub use timers::{
    format_clock, ChannelSignal, CompletionSignal, RunningTimer, TimerDriver, TimerEngine,
    TimerEvent, TimerHandle, TimerState,
};
