use actix_web::http::header::ContentType;
use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};
use serde_json::json;
use tracing::error;
use uuid::Uuid;

use crate::chat_request::ChatRequest;
use crate::upstream::UpstreamClient;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/api/chat")
            .route(web::post().to(handle_chat))
            // Explicit catch-all so non-POST callers get our JSON error
            // instead of actix's bare 405.
            .route(web::route().to(method_not_allowed)),
    )
    .route("/health", web::get().to(health));
}

async fn health() -> &'static str {
    "OK"
}

async fn method_not_allowed() -> HttpResponse {
    HttpResponse::MethodNotAllowed().json(json!({ "error": "Method Not Allowed" }))
}

/// Entry point for `POST /api/chat`. Anything the pipeline did not
/// anticipate is logged here and collapsed into an opaque 500 so no
/// internal detail reaches the caller.
async fn handle_chat(upstream: web::Data<UpstreamClient>, body: web::Bytes) -> HttpResponse {
    let request_id = Uuid::new_v4();
    match relay(&upstream, &body, request_id).await {
        Ok(response) => response,
        Err(err) => {
            error!(%request_id, "relay failed: {err:#}");
            HttpResponse::InternalServerError().json(json!({ "error": "Internal Server Error" }))
        }
    }
}

async fn relay(
    upstream: &UpstreamClient,
    body: &[u8],
    request_id: Uuid,
) -> anyhow::Result<HttpResponse> {
    // A body that is not JSON at all is an unexpected failure (500); only a
    // well-formed body without a usable message gets the dedicated 400.
    let request: ChatRequest = serde_json::from_slice(body)?;

    let message = match request.message() {
        Some(message) if !message.is_empty() => message,
        _ => {
            return Ok(HttpResponse::BadRequest()
                .json(json!({ "error": "Bad Request: Message is required." })));
        }
    };

    let response = upstream.send(message).await?;
    let status = response.status();

    if !status.is_success() {
        let error_body = response.text().await?;
        error!(
            %request_id,
            status = status.as_u16(),
            "OpenRouter API error: {error_body}"
        );
        let status = StatusCode::from_u16(status.as_u16())?;
        return Ok(
            HttpResponse::build(status).json(json!({ "error": format!("API Error: {error_body}") }))
        );
    }

    // Relay the payload untouched; parsing only confirms it is JSON.
    let payload = response.bytes().await?;
    let _: serde_json::Value = serde_json::from_slice(&payload)?;

    Ok(HttpResponse::Ok()
        .content_type(ContentType::json())
        .body(payload))
}
