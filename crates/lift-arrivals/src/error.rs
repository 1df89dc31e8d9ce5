use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArrivalsError {
    #[error("arrival table error: {0}")]
    Config(String),

    #[error("arrival table parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ArrivalsResult<T> = Result<T, ArrivalsError>;
