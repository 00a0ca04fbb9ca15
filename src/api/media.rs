//! Image upload endpoint.

use axum::{
    body::Bytes,
    http::{header, HeaderMap},
};
use serde::Serialize;

use super::{success, ApiResult};
use crate::media::{to_data_url, DEFAULT_MIME};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataUrl {
    pub data_url: String,
    pub size: usize,
}

/// POST /api/media/data-url - Turn raw image bytes into a data URL.
pub async fn create_data_url(headers: HeaderMap, body: Bytes) -> ApiResult<DataUrl> {
    let mime = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or(DEFAULT_MIME);

    success(DataUrl {
        data_url: to_data_url(mime, &body),
        size: body.len(),
    })
}
