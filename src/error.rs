//! Top-level error type for a command-line run

use crate::config::{ParameterError, GENERIC_FAILURE};
use crate::io::LoadError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Parameter(#[from] ParameterError),
    #[error(transparent)]
    Load(#[from] LoadError),
}

impl Error {
    /// The single line shown to the user; load failures never expose their cause
    pub fn user_message(&self) -> &'static str {
        match self {
            Error::Parameter(e) => e.user_message(),
            Error::Load(_) => GENERIC_FAILURE,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
