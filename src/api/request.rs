//! Request body helpers shared by the JSON endpoints.
//!
//! The endpoints accept a body without `Content-Type`, unless told
//! otherwise, and reject any other media type than `application/json`.
//! axum's `Json` extractor insists on the header, so bodies are taken as
//! raw bytes and decoded here.

use axum::http::{HeaderMap, StatusCode, header};
use serde::de::DeserializeOwned;

use super::error::ApiError;

const JSON_MEDIA_TYPE: &str = "application/json";

pub const UNSUPPORTED_MEDIA_TYPE_MESSAGE: &str = "Content-Type header is not application/json";
pub const INVALID_JSON_MESSAGE: &str = "Invalid JSON format";

/// Whether a missing `Content-Type` header is acceptable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    /// Missing header is fine, a present one must be JSON
    Optional,
    /// Header must be present and JSON
    Required,
}

/// Check the `Content-Type` header; answers 415 on mismatch.
///
/// Parameters such as `charset` are ignored and the media type is compared
/// case-insensitively.
pub fn check_content_type(headers: &HeaderMap, policy: ContentType) -> Result<(), ApiError> {
    let Some(value) = headers.get(header::CONTENT_TYPE) else {
        return match policy {
            ContentType::Optional => Ok(()),
            ContentType::Required => Err(unsupported_media_type("<missing>")),
        };
    };

    let raw = value.to_str().unwrap_or_default();
    let media_type = raw.split(';').next().unwrap_or_default().trim();
    if media_type.eq_ignore_ascii_case(JSON_MEDIA_TYPE) {
        Ok(())
    } else {
        Err(unsupported_media_type(raw))
    }
}

/// Decode a JSON body; answers 400 when it does not fit `T`.
pub fn decode_json<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(|e| {
        tracing::warn!(error = %e, "Failed to decode JSON");
        ApiError::bad_request(INVALID_JSON_MESSAGE)
    })
}

fn unsupported_media_type(content_type: &str) -> ApiError {
    tracing::warn!(content_type, "Invalid Content-Type");
    ApiError::new(StatusCode::UNSUPPORTED_MEDIA_TYPE, UNSUPPORTED_MEDIA_TYPE_MESSAGE)
}
