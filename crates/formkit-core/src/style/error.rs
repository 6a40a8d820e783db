use thiserror::Error;

/// Style lookup errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleError {
    #[error("Unknown style: {0}")]
    Unknown(String),
}
