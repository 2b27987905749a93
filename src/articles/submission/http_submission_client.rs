use async_trait::async_trait;
use serde::Deserialize;
use crate::articles::domain::model::ArticleEntity;
use crate::articles::submission::ArticleSubmissionClient;
use crate::core::platform::{PlatformError, PlatformResult};

// Persists articles through the community authoring API:
// POST {base}/api/articles
#[derive(Debug)]
pub struct HttpArticleSubmissionClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpArticleSubmissionClient {
    pub(crate) fn new(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct SubmissionResponse {
    id: String,
}

#[async_trait]
impl ArticleSubmissionClient for HttpArticleSubmissionClient {
    async fn submit(&self, article: &ArticleEntity) -> PlatformResult<String> {
        let url = format!("{}/api/articles", self.base_url);
        let response = self.client
            .post(url.as_str())
            .json(article)
            .send()
            .await
            .map_err(|err| PlatformError::submission(
                format!("article submission failed {:?}", err).as_str(), None))?;

        let status = response.status();
        if !status.is_success() {
            return Err(PlatformError::submission(
                format!("article service returned {}", status).as_str(),
                Some(status.as_u16().to_string())));
        }

        let created = response
            .json::<SubmissionResponse>()
            .await
            .map_err(|err| PlatformError::submission(
                format!("article response parsing failed {:?}", err).as_str(), None))?;
        Ok(created.id)
    }
}
