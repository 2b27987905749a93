use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::core::command::{Command, CommandError};
use crate::core::controller::UserContext;
use crate::share::domain::ShareService;

pub(crate) struct ShareBookCommand {
    share_service: Box<dyn ShareService>,
}

impl ShareBookCommand {
    pub(crate) fn new(share_service: Box<dyn ShareService>) -> Self {
        Self {
            share_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ShareBookCommandRequest {
    pub(crate) isbn: String,
    pub(crate) user: UserContext,
    pub(crate) user_agent: String,
}

// Business outcome envelope; the transport status code is always success.
#[derive(Debug, Serialize)]
pub(crate) struct ShareBookCommandResponse {
    pub status: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub msg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub book: Option<BookDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl ShareBookCommandResponse {
    pub fn succeeded(book: BookDto, url: &str) -> Self {
        Self {
            status: true,
            msg: None,
            book: Some(book),
            url: Some(url.to_string()),
        }
    }

    pub fn failed(msg: &str) -> Self {
        Self {
            status: false,
            msg: Some(msg.to_string()),
            book: None,
            url: None,
        }
    }
}

#[async_trait]
impl Command<ShareBookCommandRequest, ShareBookCommandResponse> for ShareBookCommand {
    async fn execute(&self, req: ShareBookCommandRequest) -> Result<ShareBookCommandResponse, CommandError> {
        self.share_service
            .share_book(req.isbn.as_str(), &req.user, req.user_agent.as_str())
            .await
            .map_err(CommandError::from)
            .map(|shared| ShareBookCommandResponse::succeeded(BookDto::from(&shared.book), shared.url.as_str()))
    }
}
