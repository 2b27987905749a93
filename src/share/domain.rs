pub mod composer;
pub mod service;
pub mod validator;

use async_trait::async_trait;
use crate::books::domain::model::BookRecord;
use crate::core::controller::UserContext;
use crate::core::platform::PlatformResult;

// Outcome of a successful share: the looked-up record plus the canonical URL
// of the article that was created from it.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SharedArticle {
    pub book: BookRecord,
    pub url: String,
}

#[async_trait]
pub(crate) trait ShareService: Sync + Send {
    async fn share_book(&self, isbn: &str, user: &UserContext,
                        user_agent: &str) -> PlatformResult<SharedArticle>;
    async fn get_book(&self, isbn: &str) -> PlatformResult<BookRecord>;
}
