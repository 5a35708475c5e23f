use axum::{Json, http::StatusCode};
use serde::Serialize;
use serde_json::Value;

use crate::error::Failure;
use crate::pagination::PaginationMeta;
use crate::payload::Payload;
use crate::status::status_message;

/// Reply type used across HTTP handlers to simplify signatures: the status
/// line plus the JSON envelope axum serializes.
pub type ApiReply = (StatusCode, Json<ApiResponse>);

/// Standardized top-level JSON object returned for every request.
///
/// `data` is present on every success envelope (null when there is no body
/// data) and absent on error envelopes; `meta` appears only when the payload
/// wrapped a paginated collection; `error` appears only on error envelopes.
#[derive(Debug, Serialize)]
pub struct ApiResponse {
    pub status: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<PaginationMeta>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApiResponse {
    /// Success envelope with an explicit status line.
    ///
    /// When no message is given the table entry for 200 ("OK") is used, even
    /// if `status` is some other 2xx code. That mirrors the upstream contract
    /// and is deliberate.
    pub fn success(data: Payload, message: Option<&str>, status: StatusCode) -> ApiReply {
        let message = message.unwrap_or_else(|| status_message(200)).to_string();
        let meta = data.paginator().map(PaginationMeta::from_paginator);
        let data = data.resolve();
        (
            status,
            Json(ApiResponse {
                status: "success",
                message,
                data: Some(data),
                meta,
                error: None,
            }),
        )
    }

    /// Convenience for the common 200 success with default message.
    pub fn ok(data: Payload) -> ApiReply {
        Self::success(data, None, StatusCode::OK)
    }

    /// Creation envelope; callers normally pass `StatusCode::CREATED`. The
    /// default message is the table entry for 201 regardless of `status`.
    pub fn created(data: Payload, message: Option<&str>, status: StatusCode) -> ApiReply {
        let message = message.unwrap_or_else(|| status_message(201));
        Self::success(data, Some(message), status)
    }

    /// Generic error envelope for an already-caught failure.
    ///
    /// A failure that embeds its own HTTP status code overrides `status`
    /// entirely, even when the caller passed one explicitly.
    pub fn error(failure: Option<&dyn Failure>, message: Option<&str>, status: StatusCode) -> ApiReply {
        let status = failure.and_then(|f| f.status_code()).unwrap_or(status);
        let resolved = message
            .map(str::to_string)
            .unwrap_or_else(|| status_message(status.as_u16()).to_string());
        let kind = failure
            .map(|f| f.kind().to_string())
            .unwrap_or_else(|| "RuntimeError".to_string());
        Self::build_error(failure, resolved, kind, status)
    }

    /// Authorization-failure envelope. Unlike [`ApiResponse::error`], the
    /// supplied status is never overridden by a code embedded in the failure;
    /// the asymmetry is part of the contract.
    pub fn unauthorized(
        failure: Option<&dyn Failure>,
        message: Option<&str>,
        status: StatusCode,
    ) -> ApiReply {
        let resolved = message
            .map(str::to_string)
            .unwrap_or_else(|| status_message(401).to_string());
        let kind = failure
            .map(|f| f.kind().to_string())
            .unwrap_or_else(|| "AuthorizationException".to_string());
        Self::build_error(failure, resolved, kind, status)
    }

    fn build_error(
        failure: Option<&dyn Failure>,
        resolved_message: String,
        kind: String,
        status: StatusCode,
    ) -> ApiReply {
        // A non-empty failure message wins over both the explicit message and
        // the table fallback.
        let message = match failure.map(|f| f.to_string()) {
            Some(m) if !m.is_empty() => m,
            _ => resolved_message,
        };
        tracing::debug!(status = status.as_u16(), error = %kind, "built error envelope");
        (
            status,
            Json(ApiResponse {
                status: "error",
                message,
                data: None,
                meta: None,
                error: Some(kind),
            }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AuthorizationException, HttpException};
    use crate::pagination::Page;
    use serde_json::json;

    fn body(reply: &ApiReply) -> Value {
        serde_json::to_value(&*reply.1).expect("serialize envelope")
    }

    #[test]
    fn test_ok_with_empty_payload() {
        let reply = ApiResponse::ok(Payload::Empty);
        assert_eq!(reply.0, StatusCode::OK);
        let body = body(&reply);
        assert_eq!(body["status"], "success");
        assert_eq!(body["message"], "OK");
        assert!(body["data"].is_null());
        assert!(body.get("data").is_some(), "data key present with null value");
        assert!(body.get("meta").is_none());
        assert!(body.get("error").is_none());
    }

    #[test]
    fn test_success_keeps_explicit_message_and_status() {
        let reply = ApiResponse::success(
            Payload::raw(json!({ "id": 1 })),
            Some("Fetched"),
            StatusCode::OK,
        );
        let body = body(&reply);
        assert_eq!(body["message"], "Fetched");
        assert_eq!(body["data"], json!({ "id": 1 }));
    }

    // Documented quirk: the default success message is always table[200],
    // independent of the status line actually used.
    #[test]
    fn test_success_default_message_is_ok_even_for_other_2xx() {
        let reply = ApiResponse::success(Payload::Empty, None, StatusCode::PARTIAL_CONTENT);
        assert_eq!(reply.0, StatusCode::PARTIAL_CONTENT);
        assert_eq!(body(&reply)["message"], "OK");
    }

    #[test]
    fn test_success_with_page_merges_pagination_meta() {
        let page = Page::new(vec![json!({ "id": 1 }), json!({ "id": 2 })], 2, 10, 42, "/users");
        let reply = ApiResponse::ok(Payload::page(page));
        let body = body(&reply);
        assert_eq!(body["data"], json!([{ "id": 1 }, { "id": 2 }]));
        let meta = &body["meta"];
        assert_eq!(meta["current_page"], 2);
        assert_eq!(meta["last_page"], 5);
        assert_eq!(meta["per_page"], 10);
        assert_eq!(meta["total"], 42);
        assert_eq!(meta["links"]["first"], "/users?page=1");
        assert_eq!(meta["links"]["last"], "/users?page=5");
    }

    #[test]
    fn test_success_first_page_prev_link_is_null() {
        let page: Page<u32> = Page::new(vec![], 1, 10, 42, "/users");
        let reply = ApiResponse::ok(Payload::page(page));
        let body = body(&reply);
        assert!(body["meta"]["links"]["prev"].is_null());
        assert_eq!(body["meta"]["links"]["next"], "/users?page=2");
    }

    #[test]
    fn test_created_defaults() {
        let reply = ApiResponse::created(
            Payload::raw(json!({ "id": 1 })),
            None,
            StatusCode::CREATED,
        );
        assert_eq!(reply.0, StatusCode::CREATED);
        let body = body(&reply);
        assert_eq!(body["status"], "success");
        assert_eq!(body["message"], "Created");
        assert_eq!(body["data"], json!({ "id": 1 }));
    }

    #[test]
    fn test_created_explicit_message_wins() {
        let reply = ApiResponse::created(Payload::Empty, Some("Queued"), StatusCode::ACCEPTED);
        assert_eq!(reply.0, StatusCode::ACCEPTED);
        assert_eq!(body(&reply)["message"], "Queued");
    }

    #[test]
    fn test_error_embedded_status_overrides_parameter() {
        let failure = HttpException::new(StatusCode::FORBIDDEN, "Forbidden here");
        let reply = ApiResponse::error(Some(&failure), None, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(reply.0, StatusCode::FORBIDDEN);
        let body = body(&reply);
        assert_eq!(body["status"], "error");
        assert_eq!(body["message"], "Forbidden here");
        assert_eq!(body["error"], "HttpException");
        assert!(body.get("data").is_none());
        assert!(body.get("meta").is_none());
    }

    #[test]
    fn test_error_without_failure_uses_table_and_runtime_error() {
        let reply = ApiResponse::error(None, None, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(reply.0, StatusCode::INTERNAL_SERVER_ERROR);
        let body = body(&reply);
        assert_eq!(body["message"], "Internal Server Error");
        assert_eq!(body["error"], "RuntimeError");
    }

    #[test]
    fn test_error_empty_failure_message_falls_back_to_explicit() {
        let failure = AuthorizationException::new("");
        let reply = ApiResponse::error(Some(&failure), Some("Nope"), StatusCode::BAD_REQUEST);
        let body = body(&reply);
        assert_eq!(body["message"], "Nope");
        assert_eq!(body["error"], "AuthorizationException");
    }

    // The asymmetry with `error` is intentional: unauthorized never lets a
    // failure's embedded code replace the supplied status.
    #[test]
    fn test_unauthorized_never_overrides_status_from_failure() {
        let failure = HttpException::new(StatusCode::FORBIDDEN, "Forbidden here");
        let reply = ApiResponse::unauthorized(Some(&failure), None, StatusCode::UNAUTHORIZED);
        assert_eq!(reply.0, StatusCode::UNAUTHORIZED);
        let body = body(&reply);
        assert_eq!(body["message"], "Forbidden here");
        assert_eq!(body["error"], "HttpException");
    }

    #[test]
    fn test_unauthorized_empty_failure_message_uses_table_fallback() {
        let failure = AuthorizationException::new("");
        let reply = ApiResponse::unauthorized(Some(&failure), None, StatusCode::UNAUTHORIZED);
        assert_eq!(reply.0, StatusCode::UNAUTHORIZED);
        assert_eq!(body(&reply)["message"], "Unauthorized");
    }

    #[test]
    fn test_unauthorized_without_failure_defaults() {
        let reply = ApiResponse::unauthorized(None, None, StatusCode::UNAUTHORIZED);
        let body = body(&reply);
        assert_eq!(body["message"], "Unauthorized");
        assert_eq!(body["error"], "AuthorizationException");
    }

    #[test]
    fn test_serialized_urls_keep_forward_slashes_unescaped() {
        let page: Page<u32> = Page::new(vec![], 1, 10, 5, "http://localhost/users");
        let reply = ApiResponse::ok(Payload::page(page));
        let text = serde_json::to_string(&*reply.1).expect("serialize envelope");
        assert!(text.contains("http://localhost/users?page=1"));
        assert!(!text.contains("\\/"));
    }
}
