use axum::extract::State;
use axum::http::header::USER_AGENT;
use axum::http::HeaderMap;
use axum::response::Json;
use axum::Extension;
use serde_json::Value;
use crate::core::command::Command;
use crate::core::controller::{AppState, UserContext};
use crate::core::lang::BOOK_QUERY_FAILED_LABEL;
use crate::share::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest, GetBookCommandResponse};
use crate::share::command::share_book_cmd::{ShareBookCommand, ShareBookCommandRequest, ShareBookCommandResponse};
use crate::share::domain::ShareService;
use crate::share::factory;

async fn build_service(state: &AppState) -> Box<dyn ShareService> {
    factory::create_share_service(&state.config, state.store, &state.http).await
}

// POST /book/share
// The transport always answers 200; every failure class collapses into the
// same envelope with the one shared failure label.
pub(crate) async fn share_book(
    State(state): State<AppState>,
    Extension(user): Extension<UserContext>,
    headers: HeaderMap,
    payload: Option<Json<Value>>) -> Json<ShareBookCommandResponse> {
    let req = ShareBookCommandRequest {
        isbn: extract_isbn(&payload),
        user,
        user_agent: header_string(&headers),
    };
    let svc = build_service(&state).await;
    match ShareBookCommand::new(svc).execute(req).await {
        Ok(res) => Json(res),
        Err(err) => {
            tracing::error!(?err, "share book failed");
            Json(ShareBookCommandResponse::failed(state.lang.get(BOOK_QUERY_FAILED_LABEL).as_str()))
        }
    }
}

// POST /book/info
pub(crate) async fn get_book(
    State(state): State<AppState>,
    Extension(_user): Extension<UserContext>,
    payload: Option<Json<Value>>) -> Json<GetBookCommandResponse> {
    let req = GetBookCommandRequest { isbn: extract_isbn(&payload) };
    let svc = build_service(&state).await;
    match GetBookCommand::new(svc).execute(req).await {
        Ok(res) => Json(res),
        Err(err) => {
            tracing::warn!(?err, "get book failed");
            Json(GetBookCommandResponse::failed(state.lang.get(BOOK_QUERY_FAILED_LABEL).as_str()))
        }
    }
}

// Unparseable bodies and missing fields degrade to a blank ISBN, which fails
// validation downstream with the same envelope as every other failure.
fn extract_isbn(payload: &Option<Json<Value>>) -> String {
    payload.as_ref()
        .and_then(|json| json.0.get("isbn"))
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn header_string(headers: &HeaderMap) -> String {
    headers.get(USER_AGENT)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string()
}
