use thiserror::Error;

/// Errors raised by the layers around the step parsers and timers.
///
/// The parsers and the timer engine themselves never fail; these variants
/// cover configuration loading, recipe file input and CLI arguments.
#[derive(Error, Debug)]
pub enum StepsError {
    /// Failed to read a recipe or configuration file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Recipe JSON could not be decoded
    #[error("Invalid recipe JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration file or environment could not be loaded
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    /// Input that parsed but makes no sense (e.g. a recipe without a title)
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
