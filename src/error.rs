// SPDX-License-Identifier: MPL-2.0
//! Crate error type.
//!
//! Lifecycle operations never fail; only construction and settings/preset
//! persistence surface errors.

use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),
    #[error("Config Error: {0}")]
    Config(String),
    /// The toaster was built outside of a tokio runtime.
    #[error("Runtime Error: {0}")]
    NoRuntime(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<tokio::runtime::TryCurrentError> for Error {
    fn from(err: tokio::runtime::TryCurrentError) -> Self {
        Error::NoRuntime(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
