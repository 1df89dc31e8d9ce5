use lift_arrivals::ArrivalsError;
use lift_building::BuildingError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("building error: {0}")]
    Building(#[from] BuildingError),

    #[error("arrivals error: {0}")]
    Arrivals(#[from] ArrivalsError),
}

pub type SimResult<T> = Result<T, SimError>;
