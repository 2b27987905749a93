use std::time::Duration;

pub(crate) const USER_AGENT: &str = concat!("bookshare/", env!("CARGO_PKG_VERSION"));

pub(crate) fn build_http_client(timeout_secs: u64) -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(timeout_secs))
        .build()
}

pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        // disable printing the name of the module in every log line.
        .with_target(false)
        .with_ansi(false)
        .json()
        .init();
}

#[cfg(test)]
mod tests {
    use crate::utils::http::build_http_client;

    #[tokio::test]
    async fn test_should_build_http_client() {
        let _ = build_http_client(5).expect("should build client");
    }
}
