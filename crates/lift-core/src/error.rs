use thiserror::Error;

/// Failures of the core primitives: invalid configuration values and
/// unparseable action names or ordinals.
#[derive(Debug, Error)]
pub enum LiftError {
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("cannot parse: {0}")]
    Parse(String),
}

pub type LiftResult<T> = Result<T, LiftError>;
