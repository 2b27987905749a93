use std::env;
use serde::{Deserialize, Serialize};

// Configuration abstracts runtime options for the book sharing service
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub(crate) struct Configuration {
    pub profile: String,
    // base URL the community is served from, used to build canonical article links
    pub serve_path: String,
    // base URL of the external bibliographic catalog API
    pub catalog_url: String,
    // base URL of the article authoring API
    pub submission_url: String,
    pub http_timeout_secs: u64,
}

impl Configuration {
    pub fn new(profile: &str) -> Self {
        Configuration {
            profile: profile.to_string(),
            serve_path: env_or("BOOKSHARE_SERVE_PATH", "https://hacpai.com"),
            catalog_url: env_or("BOOKSHARE_CATALOG_URL", "https://api.douban.com"),
            submission_url: env_or("BOOKSHARE_SUBMISSION_URL", "http://localhost:8080"),
            http_timeout_secs: 10,
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use crate::core::domain::Configuration;

    #[tokio::test]
    async fn test_should_build_config() {
        let config = Configuration::new("test");
        assert_eq!("test", config.profile.as_str());
        assert_eq!(10, config.http_timeout_secs);
        assert!(!config.serve_path.is_empty());
        assert!(!config.catalog_url.is_empty());
    }
}
