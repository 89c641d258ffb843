use thiserror::Error;

/// Errors raised by the matching engine
///
/// Scores never fail: out-of-range numeric inputs are clamped. Errors are
/// reserved for wiring problems and malformed offline evaluation batches.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("evaluation input length mismatch: {labels} labels, {rankings} rankings, {relevance} relevance lists")]
    LengthMismatch {
        labels: usize,
        rankings: usize,
        relevance: usize,
    },

    #[error("Invalid engine configuration: {0}")]
    InvalidConfig(String),

    #[error("Keyword pattern error: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
