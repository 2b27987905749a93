use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::core::command::{Command, CommandError};
use crate::share::domain::ShareService;

pub(crate) struct GetBookCommand {
    share_service: Box<dyn ShareService>,
}

impl GetBookCommand {
    pub(crate) fn new(share_service: Box<dyn ShareService>) -> Self {
        Self {
            share_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct GetBookCommandRequest {
    pub(crate) isbn: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct GetBookCommandResponse {
    pub status: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub msg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub book: Option<BookDto>,
}

impl GetBookCommandResponse {
    pub fn succeeded(book: BookDto) -> Self {
        Self {
            status: true,
            msg: None,
            book: Some(book),
        }
    }

    pub fn failed(msg: &str) -> Self {
        Self {
            status: false,
            msg: Some(msg.to_string()),
            book: None,
        }
    }
}

#[async_trait]
impl Command<GetBookCommandRequest, GetBookCommandResponse> for GetBookCommand {
    async fn execute(&self, req: GetBookCommandRequest) -> Result<GetBookCommandResponse, CommandError> {
        self.share_service
            .get_book(req.isbn.as_str())
            .await
            .map_err(CommandError::from)
            .map(|book| GetBookCommandResponse::succeeded(BookDto::from(&book)))
    }
}
