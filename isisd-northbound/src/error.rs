//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use tracing::{error, warn};

// Northbound errors.
#[derive(Debug)]
pub enum Error {
    ValidationCallback(String),
    PrepareCallback(String),
    Inconsistency(String, String),
    DataPathNotFound(String),
    YangInvalidData(isisd_yang::Error),
}

// ===== impl Error =====

impl Error {
    pub fn log(&self) {
        match self {
            Error::ValidationCallback(error) => {
                warn!(%error, "{}", self);
            }
            Error::PrepareCallback(error) => {
                warn!(%error, "{}", self);
            }
            Error::Inconsistency(path, error) => {
                error!(%path, %error, "{}", self);
            }
            Error::DataPathNotFound(path) => {
                warn!(%path, "{}", self);
            }
            Error::YangInvalidData(error) => {
                warn!(%error, "{}", self);
            }
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::ValidationCallback(..) => {
                write!(f, "validation callback failed")
            }
            Error::PrepareCallback(..) => {
                write!(f, "resource allocation failed")
            }
            Error::Inconsistency(..) => {
                write!(f, "configuration inconsistency")
            }
            Error::DataPathNotFound(..) => {
                write!(f, "data path not found")
            }
            Error::YangInvalidData(..) => {
                write!(f, "invalid YANG instance data")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::YangInvalidData(error) => Some(error),
            _ => None,
        }
    }
}

impl From<isisd_yang::Error> for Error {
    fn from(error: isisd_yang::Error) -> Error {
        Error::YangInvalidData(error)
    }
}
