//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

// Errors raised while building configuration data trees.
#[derive(Debug)]
pub enum Error {
    JsonParse(serde_json::Error),
    UnknownNode(String),
    UnexpectedJsonType(String),
    InvalidValue(String, String),
    MissingListKey(String, &'static str),
    MissingMandatory(String),
    DuplicateEntry(String),
}

// ===== impl Error =====

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::JsonParse(..) => {
                write!(f, "failed to parse JSON data")
            }
            Error::UnknownNode(path) => {
                write!(f, "unknown schema node: {path}")
            }
            Error::UnexpectedJsonType(path) => {
                write!(f, "unexpected JSON value type for node: {path}")
            }
            Error::InvalidValue(path, value) => {
                write!(f, "invalid value \"{value}\" for node: {path}")
            }
            Error::MissingListKey(path, key) => {
                write!(f, "missing list key \"{key}\" for node: {path}")
            }
            Error::MissingMandatory(path) => {
                write!(f, "missing mandatory node: {path}")
            }
            Error::DuplicateEntry(path) => {
                write!(f, "duplicate data node: {path}")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::JsonParse(error) => Some(error),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Error {
        Error::JsonParse(error)
    }
}
