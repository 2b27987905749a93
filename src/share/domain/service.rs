use async_trait::async_trait;
use crate::articles::domain::model::ArticleEntity;
use crate::articles::submission::ArticleSubmissionClient;
use crate::books::domain::model::BookRecord;
use crate::books::lookup::BookLookupClient;
use crate::core::controller::UserContext;
use crate::core::domain::Configuration;
use crate::core::platform::PlatformResult;
use crate::share::domain::{composer, validator, SharedArticle, ShareService};

// Sequences validate -> lookup -> compose -> submit, terminal at the first
// failure. Lookup and submission never run concurrently; submission depends
// on the looked-up record. No retries, no caching, no deduplication.
pub(crate) struct ShareServiceImpl {
    config: Configuration,
    lookup_client: Box<dyn BookLookupClient>,
    submission_client: Box<dyn ArticleSubmissionClient>,
}

impl ShareServiceImpl {
    pub(crate) fn new(config: &Configuration, lookup_client: Box<dyn BookLookupClient>,
                      submission_client: Box<dyn ArticleSubmissionClient>) -> Self {
        Self {
            config: config.clone(),
            lookup_client,
            submission_client,
        }
    }

    fn article_url(&self, article_id: &str) -> String {
        format!("{}/article/{}", self.config.serve_path.trim_end_matches('/'), article_id)
    }
}

#[async_trait]
impl ShareService for ShareServiceImpl {
    async fn share_book(&self, isbn: &str, user: &UserContext,
                        user_agent: &str) -> PlatformResult<SharedArticle> {
        let isbn = validator::normalize(isbn)?;
        let book = self.lookup_client.find_by_isbn(isbn.as_str()).await?;
        let composition = composer::compose(&book);
        let article = ArticleEntity::new(composition.title.as_str(), composition.tags.as_str(),
                                         composition.content.as_str(), user, user_agent);
        let article_id = self.submission_client.submit(&article).await?;
        Ok(SharedArticle { book, url: self.article_url(article_id.as_str()) })
    }

    async fn get_book(&self, isbn: &str) -> PlatformResult<BookRecord> {
        let isbn = validator::normalize(isbn)?;
        self.lookup_client.find_by_isbn(isbn.as_str()).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};
    use crate::articles::domain::model::ArticleEntity;
    use crate::articles::submission::local_submission_client::LocalArticleSubmissionClient;
    use crate::books::lookup::local_lookup_client::LocalBookLookupClient;
    use crate::core::controller::UserContext;
    use crate::core::domain::Configuration;
    use crate::core::platform::PlatformError;
    use crate::share::domain::service::ShareServiceImpl;
    use crate::share::domain::ShareService;

    fn build_service(submission: LocalArticleSubmissionClient) -> ShareServiceImpl {
        ShareServiceImpl::new(&Configuration::new("test"),
                              Box::new(LocalBookLookupClient::seeded()),
                              Box::new(submission))
    }

    fn build_user() -> UserContext {
        UserContext::new("user-1", "user-1@test.io")
    }

    #[tokio::test]
    async fn test_should_reject_blank_isbn_before_lookup() {
        let submission = LocalArticleSubmissionClient::new();
        let submitted = submission.submitted();
        let svc = build_service(submission);

        let res = svc.share_book("   ", &build_user(), "test-agent").await;
        // a validation error proves the blank value never reached the catalog
        assert!(matches!(res, Err(PlatformError::Validation { message: _, reason_code: _ })));
        assert!(matches!(svc.get_book("").await, Err(PlatformError::Validation { message: _, reason_code: _ })));
        assert_eq!(0, submitted.lock().expect("should lock").len());
    }

    #[tokio::test]
    async fn test_should_fail_share_for_unknown_isbn_without_submitting() {
        let submission = LocalArticleSubmissionClient::new();
        let submitted = submission.submitted();
        let svc = build_service(submission);

        let res = svc.share_book("0000000000", &build_user(), "test-agent").await;
        assert!(matches!(res, Err(PlatformError::NotFound { message: _ })));
        assert_eq!(0, submitted.lock().expect("should lock").len());
    }

    #[tokio::test]
    async fn test_should_share_book() {
        let submission = LocalArticleSubmissionClient::new();
        let submitted = submission.submitted();
        let svc = build_service(submission);

        let shared = svc.share_book(" 9787111544937 ", &build_user(), "test-agent")
            .await.expect("should share book");
        assert_eq!("示例书", shared.book.title.as_str());
        assert!(shared.url.contains("/article/"));

        let articles: Vec<ArticleEntity> = submitted.lock().expect("should lock").clone();
        assert_eq!(1, articles.len());
        assert_eq!(":books: 《示例书》纸质实体书免费送啦！", articles[0].title.as_str());
        assert_eq!("书单,编程,示例", articles[0].tags.as_str());
        assert_eq!("user-1", articles[0].author_id.as_str());
        assert_eq!("test-agent", articles[0].user_agent.as_str());
    }

    #[tokio::test]
    async fn test_should_create_distinct_articles_for_repeated_shares() {
        let svc = build_service(LocalArticleSubmissionClient::new());

        let first = svc.share_book("9787111544937", &build_user(), "test-agent")
            .await.expect("should share book");
        let second = svc.share_book("9787111544937", &build_user(), "test-agent")
            .await.expect("should share book");
        assert_ne!(first.url, second.url);
    }

    #[tokio::test]
    async fn test_should_surface_submission_failure() {
        let svc = build_service(LocalArticleSubmissionClient::failing());

        let res = svc.share_book("9787111544937", &build_user(), "test-agent").await;
        assert!(matches!(res, Err(PlatformError::Submission { message: _, reason_code: _ })));
    }

    #[tokio::test]
    async fn test_should_get_book_without_submitting() {
        let submission = LocalArticleSubmissionClient::new();
        let submitted: Arc<Mutex<Vec<ArticleEntity>>> = submission.submitted();
        let svc = build_service(submission);

        let book = svc.get_book("9787111407010").await.expect("should return book");
        assert_eq!("代码大全", book.title.as_str());
        assert_eq!(2, book.translator.len());
        assert_eq!(0, submitted.lock().expect("should lock").len());
    }
}
