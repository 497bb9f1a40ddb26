use thiserror::Error;

use crate::core::Instant;

pub type DateAxisResult<T> = Result<T, DateAxisError>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum DateAxisError {
    #[error("invalid range: lower={lower}, upper={upper}")]
    InvalidRange { lower: Instant, upper: Instant },

    #[error("{bound} bound must be set when auto-ranging is disabled")]
    MissingBound { bound: &'static str },

    #[error("invalid axis length: {0}")]
    InvalidAxisLength(f64),

    #[error("invalid average tick gap: {0}")]
    InvalidTickGap(f64),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
