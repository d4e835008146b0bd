//! UniFFI bindings for recipe-steps
//!
//! This module provides FFI-compatible types and functions for use with iOS and Android.
//! The host app owns the one-second clock: it calls [`FfiTimerEngine::tick`] and plays
//! the completion sound for every label that comes back.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::{RunningTimer, StepAnalysis, StepsError, TimerEngine, TimerState};

// Re-export UniFFI macro
#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();

/// FFI-compatible analysis of one recipe step
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiStep {
    /// 1-based step number
    pub index: u32,
    /// Instruction text without the label tag
    pub body: String,
    pub label: String,
    pub explicit_label: bool,
    /// Cook time in minutes, if the step mentions one
    pub duration_minutes: Option<u32>,
    pub suggest_parallel_work: bool,
}

impl From<StepAnalysis> for FfiStep {
    fn from(step: StepAnalysis) -> Self {
        FfiStep {
            index: u32::try_from(step.index).unwrap_or(u32::MAX),
            body: step.body,
            label: step.label,
            explicit_label: step.explicit_label,
            duration_minutes: step.duration_minutes,
            suggest_parallel_work: step.suggest_parallel_work,
        }
    }
}

/// FFI-compatible instruction split into its label tag and body
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiInstruction {
    /// Label from a `⟦label:...⟧` tag. `Some("")` for an empty tag, `None` without one
    pub label: Option<String>,
    pub body: String,
}

/// FFI-compatible shopping list entry
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiShoppingItem {
    pub name: String,
    /// Scaled quantity, empty when the line had none
    pub quantity: String,
    /// Aisle key such as "vegetables" or "dairy"
    pub aisle: String,
}

/// FFI-compatible timer lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum FfiTimerState {
    Idle,
    Running,
    Expired,
}

impl From<TimerState> for FfiTimerState {
    fn from(state: TimerState) -> Self {
        match state {
            TimerState::Idle => FfiTimerState::Idle,
            TimerState::Running => FfiTimerState::Running,
            TimerState::Expired => FfiTimerState::Expired,
        }
    }
}

/// FFI-compatible snapshot of one timer
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiTimer {
    pub label: String,
    pub base_minutes: u32,
    pub remaining_seconds: u32,
    pub state: FfiTimerState,
    pub alerting: bool,
    /// Remaining time as MM:SS
    pub clock: String,
    pub progress: f64,
}

impl From<RunningTimer> for FfiTimer {
    fn from(timer: RunningTimer) -> Self {
        FfiTimer {
            state: timer.state().into(),
            clock: crate::format_clock(timer.remaining_seconds),
            progress: timer.progress(),
            label: timer.label,
            base_minutes: timer.base_minutes,
            remaining_seconds: timer.remaining_seconds,
            alerting: timer.alerting,
        }
    }
}

/// FFI-compatible error type
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Error))]
pub enum FfiStepsError {
    /// Recipe JSON could not be decoded
    ParseError { message: String },
    /// Invalid input provided
    InvalidInput { message: String },
    /// Configuration error
    ConfigError { message: String },
    /// File could not be read
    IoError { message: String },
}

impl fmt::Display for FfiStepsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FfiStepsError::ParseError { message } => write!(f, "Parse error: {}", message),
            FfiStepsError::InvalidInput { message } => write!(f, "Invalid input: {}", message),
            FfiStepsError::ConfigError { message } => write!(f, "Config error: {}", message),
            FfiStepsError::IoError { message } => write!(f, "I/O error: {}", message),
        }
    }
}

impl std::error::Error for FfiStepsError {}

impl From<StepsError> for FfiStepsError {
    fn from(err: StepsError) -> Self {
        match err {
            StepsError::Io(e) => FfiStepsError::IoError {
                message: e.to_string(),
            },
            StepsError::Json(e) => FfiStepsError::ParseError {
                message: e.to_string(),
            },
            StepsError::ConfigError(e) => FfiStepsError::ConfigError {
                message: e.to_string(),
            },
            StepsError::InvalidInput(message) => FfiStepsError::InvalidInput { message },
        }
    }
}

/// Split a raw instruction into its explicit label (if any) and body
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn split_instruction(raw: String) -> FfiInstruction {
    let (label, body) = crate::split_instruction(&raw);
    FfiInstruction { label, body }
}

/// Cook time in minutes mentioned in a step body
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn extract_duration_minutes(body: String) -> Option<u32> {
    crate::extract_duration_minutes(&body)
}

/// Timer label for a step
///
/// # Arguments
/// * `body` - Step text without the label tag
/// * `step_index` - 1-based step number
/// * `explicit_label` - Label from a `⟦label:...⟧` tag, if any
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn classify_label(body: String, step_index: u32, explicit_label: Option<String>) -> String {
    crate::classify_label(&body, step_index as usize, explicit_label.as_deref())
}

/// Ingredient name of a free-text line such as "200 g Mehl"
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn parse_ingredient_name(line: String) -> String {
    crate::ingredients::parse_ingredient_name(&line)
}

/// Quantity token of a free-text ingredient line, if any
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn parse_ingredient_quantity(line: String) -> Option<String> {
    crate::ingredients::parse_ingredient_quantity(&line)
}

/// Scale a quantity token from four servings to `servings`
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn scale_quantity(token: String, servings: u32) -> String {
    crate::scale_quantity(&token, servings.max(1))
}

/// Analyze every step of a recipe given as JSON
///
/// # Returns
/// One `FfiStep` per instruction, in order
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn analyze_recipe_json(json: String) -> Result<Vec<FfiStep>, FfiStepsError> {
    let recipe = crate::Recipe::from_json(&json)?;
    let settings = crate::Settings::default();
    Ok(crate::analyze_recipe(&recipe, &settings)
        .into_iter()
        .map(FfiStep::from)
        .collect())
}

/// Shopping list for ingredient lines, scaled to `servings`
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn shopping_list(ingredients: Vec<String>, servings: u32) -> Vec<FfiShoppingItem> {
    crate::shopping_list(&ingredients, servings)
        .into_iter()
        .map(|item| FfiShoppingItem {
            name: item.name,
            quantity: item.quantity.unwrap_or_default(),
            aisle: item.aisle.key().to_string(),
        })
        .collect()
}

/// Markdown export of a recipe given as JSON
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn recipe_to_markdown(json: String) -> Result<String, FfiStepsError> {
    let recipe = crate::Recipe::from_json(&json)?;
    Ok(crate::to_markdown(&recipe))
}

/// Remaining seconds as MM:SS
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn format_clock(seconds: u32) -> String {
    crate::format_clock(seconds)
}

/// Get the library version
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Timer registry shared with the host app
#[derive(Debug, Default)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Object))]
pub struct FfiTimerEngine {
    inner: Mutex<TimerEngine>,
}

impl FfiTimerEngine {
    fn lock(&self) -> MutexGuard<'_, TimerEngine> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg_attr(feature = "uniffi", uniffi::export)]
impl FfiTimerEngine {
    #[cfg_attr(feature = "uniffi", uniffi::constructor)]
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Register a paused timer; `false` when the label is already taken
    pub fn start(&self, minutes: u32, label: String) -> bool {
        self.lock().start(minutes, &label)
    }

    pub fn toggle(&self, label: String) {
        self.lock().toggle(&label)
    }

    pub fn reset(&self, label: String) {
        self.lock().reset(&label)
    }

    pub fn set_base_minutes(&self, label: String, minutes: u32) {
        self.lock().set_base_minutes(&label, minutes)
    }

    pub fn remove(&self, label: String) {
        self.lock().remove(&label)
    }

    pub fn stop_all(&self) {
        self.lock().stop_all()
    }

    /// Advance every running timer by one second; returns labels that just expired
    pub fn tick(&self) -> Vec<String> {
        self.lock().tick()
    }

    pub fn timers(&self) -> Vec<FfiTimer> {
        self.lock()
            .timers()
            .into_iter()
            .map(FfiTimer::from)
            .collect()
    }

    pub fn active_alerts(&self) -> u32 {
        u32::try_from(self.lock().active_alerts()).unwrap_or(u32::MAX)
    }
}
