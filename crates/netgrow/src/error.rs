//! Error types and result alias for the crate.
//!
//! This module defines [`enum@crate::error::Error`] and the crate-wide [Result] alias.
//! Variants cover malformed growth parameters, sampling from an empty degree
//! distribution, and handles that do not belong to a network.
//!
//! A growth run that stalls before reaching its requested node count is not an
//! error; see [`crate::growth::Termination`].
use thiserror::Error;

use crate::network::NodeId;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("degree distribution has no entry with positive weight")]
    EmptyDistribution,

    #[error("unknown node {id:?}")]
    UnknownNode { id: NodeId },

    #[error("{0}")]
    Other(String),
}

impl From<String> for Error {
    fn from(value: String) -> Self {
        Error::Other(value)
    }
}

impl From<&str> for Error {
    fn from(value: &str) -> Self {
        Error::Other(value.to_owned())
    }
}
