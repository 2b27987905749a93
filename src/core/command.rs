use async_trait::async_trait;
use crate::core::platform::PlatformError;

#[derive(Debug)]
pub enum CommandError {
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    NotFound {
        message: String,
    },
    Lookup {
        message: String,
        reason_code: Option<String>,
        retryable: bool,
    },
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

#[async_trait]
pub trait Command<Request, Response> {
    async fn execute(&self, req: Request) -> Result<Response, CommandError>;
}

impl From<PlatformError> for CommandError {
    fn from(other: PlatformError) -> Self {
        match other {
            PlatformError::Validation { message, reason_code } => {
                CommandError::Validation { message, reason_code }
            }
            PlatformError::NotFound { message } => {
                CommandError::NotFound { message }
            }
            PlatformError::Lookup { message, reason_code, retryable } => {
                CommandError::Lookup { message, reason_code, retryable }
            }
            PlatformError::Submission { message, reason_code } => {
                CommandError::Submission { message, reason_code }
            }
            PlatformError::Serialization { message } => {
                CommandError::Serialization { message }
            }
            PlatformError::Runtime { message, reason_code } => {
                CommandError::Runtime { message, reason_code }
            }
        }
    }
}
