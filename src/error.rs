// SPDX-License-Identifier: MPL-2.0
//! Errors raised while reading or writing `settings.toml`.
//!
//! The notifier itself never fails; only configuration persistence does.

use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    /// The settings file or its directory could not be read or written.
    Io(String),
    /// The settings file is not valid TOML or does not match the schema.
    Config(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(reason) => write!(f, "settings file unavailable: {reason}"),
            Error::Config(reason) => write!(f, "invalid settings: {reason}"),
        }
    }
}

impl std::error::Error for Error {}

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

pub type Result<T> = std::result::Result<T, Error>;
