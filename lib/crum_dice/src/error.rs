use crum_fair::FairError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DiceError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiceError {
    #[error("invalid dice specification: {0}")]
    InvalidDiceSpec(String),

    #[error("dice {index} doesn't exist in the list of {len}")]
    NoSuchDice { index: usize, len: usize },

    #[error("choice {value} is outside {min}..={max}")]
    InvalidChoice { value: i64, min: i64, max: i64 },

    #[error("{0}")]
    WrongState(&'static str),

    #[error(transparent)]
    Fair(#[from] FairError),
}
