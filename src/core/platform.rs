use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

#[derive(Debug)]
pub enum PlatformError {
    // ISBN or request payload failed validation before any external call.
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    // The catalog has no record for the requested ISBN.
    NotFound {
        message: String,
    },
    // The catalog service could not be queried.
    Lookup {
        message: String,
        reason_code: Option<String>,
        retryable: bool,
    },
    // The article service rejected or failed the creation request.
    Submission {
        message: String,
        reason_code: Option<String>,
    },
    Serialization {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

impl PlatformError {
    pub fn validation(message: &str, reason_code: Option<String>) -> PlatformError {
        PlatformError::Validation { message: message.to_string(), reason_code }
    }

    pub fn not_found(message: &str) -> PlatformError {
        PlatformError::NotFound { message: message.to_string() }
    }

    pub fn lookup(message: &str, reason_code: Option<String>, retryable: bool) -> PlatformError {
        PlatformError::Lookup { message: message.to_string(), reason_code, retryable }
    }

    pub fn submission(message: &str, reason_code: Option<String>) -> PlatformError {
        PlatformError::Submission { message: message.to_string(), reason_code }
    }

    pub fn serialization(message: &str) -> PlatformError {
        PlatformError::Serialization { message: message.to_string() }
    }

    pub fn runtime(message: &str, reason_code: Option<String>) -> PlatformError {
        PlatformError::Runtime { message: message.to_string(), reason_code }
    }

    pub fn retryable(&self) -> bool {
        match self {
            PlatformError::Validation { .. } => { false }
            PlatformError::NotFound { .. } => { false }
            PlatformError::Lookup { retryable, .. } => { *retryable }
            PlatformError::Submission { .. } => { false }
            PlatformError::Serialization { .. } => { false }
            PlatformError::Runtime { .. } => { false }
        }
    }
}

impl From<serde_json::Error> for PlatformError {
    fn from(err: serde_json::Error) -> Self {
        PlatformError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

impl Display for PlatformError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            PlatformError::Validation { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            PlatformError::NotFound { message } => {
                write!(f, "{}", message)
            }
            PlatformError::Lookup { message, reason_code, retryable } => {
                write!(f, "{} {:?} {}", message, reason_code, retryable)
            }
            PlatformError::Submission { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            PlatformError::Serialization { message } => {
                write!(f, "{}", message)
            }
            PlatformError::Runtime { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
        }
    }
}

/// A specialized Result type shared by the lookup, composition and submission layers.
pub type PlatformResult<T> = Result<T, PlatformError>;

// Selects the concrete lookup/submission client implementations wired by the factories.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub(crate) enum ClientStore {
    Http,
    Local,
}
