use std::time::Instant;
use axum::http::{Request, StatusCode};
use axum::middleware::Next;
use axum::response::Response;
use serde::{Deserialize, Serialize};
use crate::core::domain::Configuration;
use crate::core::lang::LangProps;
use crate::core::platform::ClientStore;

#[derive(Debug, Clone)]
pub(crate) struct AppState {
    pub(crate) config: Configuration,
    pub(crate) store: ClientStore,
    pub(crate) lang: LangProps,
    pub(crate) http: reqwest::Client,
}

impl AppState {
    pub fn new(config: Configuration, store: ClientStore, http: reqwest::Client) -> AppState {
        AppState {
            config,
            store,
            lang: LangProps::new(),
            http,
        }
    }
}

// Authenticated caller attached to the request by the login middleware.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub(crate) struct UserContext {
    pub user_id: String,
    pub user_email: String,
}

impl UserContext {
    pub fn new(user_id: &str, user_email: &str) -> Self {
        Self {
            user_id: user_id.to_string(),
            user_email: user_email.to_string(),
        }
    }
}

// Login gate applied at the router boundary. Handlers behind it can rely on a
// UserContext extension being present.
pub(crate) async fn require_login<B>(mut req: Request<B>, next: Next<B>) -> Result<Response, StatusCode> {
    let user_id = header_value(&req, "x-user-id");
    let user_email = header_value(&req, "x-user-email");
    if user_id.is_empty() {
        return Err(StatusCode::UNAUTHORIZED);
    }
    req.extensions_mut().insert(UserContext::new(user_id.as_str(), user_email.as_str()));
    Ok(next.run(req).await)
}

// Stopwatch around every request, applied outside the login gate.
pub(crate) async fn track_elapsed<B>(req: Request<B>, next: Next<B>) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let started = Instant::now();
    let res = next.run(req).await;
    tracing::info!(%method, path = path.as_str(),
        elapsed_ms = started.elapsed().as_millis() as u64, "handled request");
    res
}

fn header_value<B>(req: &Request<B>, name: &str) -> String {
    req.headers()
        .get(name)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::middleware;
    use axum::routing::get;
    use axum::{Extension, Router};
    use tower::ServiceExt;
    use crate::core::controller::{require_login, AppState, UserContext};
    use crate::core::domain::Configuration;
    use crate::core::platform::ClientStore;

    // Answers 200 only when the login gate attached the expected caller.
    async fn whoami(Extension(user): Extension<UserContext>) -> StatusCode {
        if user.user_id == "user-1" && user.user_email == "user-1@test.io" {
            StatusCode::OK
        } else {
            StatusCode::BAD_REQUEST
        }
    }

    fn build_router() -> Router {
        Router::new()
            .route("/whoami", get(whoami))
            .route_layer(middleware::from_fn(require_login))
    }

    #[tokio::test]
    async fn test_should_reject_anonymous_request() {
        let req = Request::builder()
            .uri("/whoami")
            .body(Body::empty())
            .expect("should build request");
        let res = build_router().oneshot(req).await.expect("should handle request");
        assert_eq!(StatusCode::UNAUTHORIZED, res.status());
    }

    #[tokio::test]
    async fn test_should_attach_user_context_for_logged_in_request() {
        let req = Request::builder()
            .uri("/whoami")
            .header("x-user-id", "user-1")
            .header("x-user-email", "user-1@test.io")
            .body(Body::empty())
            .expect("should build request");
        let res = build_router().oneshot(req).await.expect("should handle request");
        assert_eq!(StatusCode::OK, res.status());
    }

    #[tokio::test]
    async fn test_should_build_app_state() {
        let state = AppState::new(Configuration::new("test"), ClientStore::Local, reqwest::Client::new());
        assert_eq!(ClientStore::Local, state.store);
        assert_eq!("test", state.config.profile.as_str());
    }

    #[tokio::test]
    async fn test_should_build_user_context() {
        let user = UserContext::new("user-1", "user-1@test.io");
        assert_eq!("user-1", user.user_id.as_str());
        assert_eq!("user-1@test.io", user.user_email.as_str());
    }
}
