pub mod http_submission_client;
pub mod local_submission_client;

use async_trait::async_trait;
use crate::articles::domain::model::ArticleEntity;
use crate::core::platform::PlatformResult;

// Port onto the article authoring service. Returns the new article id; no
// partial-success state is modeled.
#[async_trait]
pub(crate) trait ArticleSubmissionClient: Sync + Send {
    async fn submit(&self, article: &ArticleEntity) -> PlatformResult<String>;
}
