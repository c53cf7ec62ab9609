pub mod normal;
pub mod wilson;
pub mod ztest;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum StatsError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("division undefined: {0}")]
    DivisionUndefined(String),
}
