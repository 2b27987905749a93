use std::sync::{Arc, Mutex};
use async_trait::async_trait;
use uuid::Uuid;
use crate::articles::domain::model::ArticleEntity;
use crate::articles::submission::ArticleSubmissionClient;
use crate::core::platform::{PlatformError, PlatformResult};

// In-memory article store used in dev mode and tests. Every submission gets a
// fresh id; sharing the same book twice yields two distinct articles.
#[derive(Debug)]
pub struct LocalArticleSubmissionClient {
    submitted: Arc<Mutex<Vec<ArticleEntity>>>,
    fail: bool,
}

impl LocalArticleSubmissionClient {
    pub(crate) fn new() -> Self {
        Self {
            submitted: Arc::new(Mutex::new(vec![])),
            fail: false,
        }
    }

    // Always errors, for exercising the submission failure branch.
    pub(crate) fn failing() -> Self {
        Self {
            submitted: Arc::new(Mutex::new(vec![])),
            fail: true,
        }
    }

    // Shared handle onto the submitted articles, cloneable before the client
    // is boxed behind the port.
    pub(crate) fn submitted(&self) -> Arc<Mutex<Vec<ArticleEntity>>> {
        self.submitted.clone()
    }
}

#[async_trait]
impl ArticleSubmissionClient for LocalArticleSubmissionClient {
    async fn submit(&self, article: &ArticleEntity) -> PlatformResult<String> {
        if self.fail {
            return Err(PlatformError::submission("local article service failed", None));
        }
        let article_id = Uuid::new_v4().to_string();
        self.submitted
            .lock()
            .map_err(|err| PlatformError::runtime(
                format!("article store poisoned {:?}", err).as_str(), None))?
            .push(article.clone());
        Ok(article_id)
    }
}

#[cfg(test)]
mod tests {
    use crate::articles::domain::model::ArticleEntity;
    use crate::articles::submission::local_submission_client::LocalArticleSubmissionClient;
    use crate::articles::submission::ArticleSubmissionClient;
    use crate::core::controller::UserContext;
    use crate::core::platform::PlatformError;

    fn build_article() -> ArticleEntity {
        let user = UserContext::new("user-1", "user-1@test.io");
        ArticleEntity::new("title", "书单", "content", &user, "test-agent")
    }

    #[tokio::test]
    async fn test_should_store_submitted_article() {
        let client = LocalArticleSubmissionClient::new();
        let submitted = client.submitted();
        let id = client.submit(&build_article()).await.expect("should submit");
        assert!(!id.is_empty());
        assert_eq!(1, submitted.lock().expect("should lock").len());
    }

    #[tokio::test]
    async fn test_should_return_distinct_ids() {
        let client = LocalArticleSubmissionClient::new();
        let article = build_article();
        let first = client.submit(&article).await.expect("should submit");
        let second = client.submit(&article).await.expect("should submit");
        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn test_should_fail_when_configured() {
        let client = LocalArticleSubmissionClient::failing();
        let res = client.submit(&build_article()).await;
        assert!(matches!(res, Err(PlatformError::Submission { message: _, reason_code: _ })));
    }
}
