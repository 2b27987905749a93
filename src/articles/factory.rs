use crate::articles::submission::ArticleSubmissionClient;
use crate::articles::submission::http_submission_client::HttpArticleSubmissionClient;
use crate::articles::submission::local_submission_client::LocalArticleSubmissionClient;
use crate::core::domain::Configuration;
use crate::core::platform::ClientStore;

pub(crate) async fn create_submission_client(config: &Configuration, store: ClientStore,
                                             http: &reqwest::Client) -> Box<dyn ArticleSubmissionClient> {
    match store {
        ClientStore::Http => {
            Box::new(HttpArticleSubmissionClient::new(http.clone(), config.submission_url.as_str()))
        }
        ClientStore::Local => {
            Box::new(LocalArticleSubmissionClient::new())
        }
    }
}
