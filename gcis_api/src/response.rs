//! Response metadata and the validation applied before any decoding.
//!
//! The upstream API is documented to answer 200 for everything, including
//! filter-syntax errors, which it reports as a plain-text body. It also
//! sometimes answers "no rows" with an empty body instead of `[]`.
//! [`check_response`] classifies a response with those quirks in mind.

use bytes::Bytes;
use reqwest::header::{HeaderMap, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use url::Url;

use crate::Error;

/// Status, headers and origin of one response. Returned with every
/// successful call and attached to errors raised after a response arrived.
#[derive(Debug, Clone)]
pub struct ResponseMeta {
    pub method: Method,
    pub url: Url,
    pub status: StatusCode,
    pub headers: HeaderMap,
}

impl ResponseMeta {
    /// The raw `Content-Type` header, if present and valid ASCII.
    pub fn content_type(&self) -> Option<&str> {
        self.headers
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
    }

    fn is_json(&self) -> bool {
        self.content_type()
            .map(|ct| {
                ct.trim_start()
                    .to_ascii_lowercase()
                    .starts_with("application/json")
            })
            .unwrap_or(false)
    }
}

/// A decoded result together with the metadata of the response it came from.
#[derive(Debug, Clone)]
pub struct Response<T> {
    pub data: T,
    pub meta: ResponseMeta,
}

impl<T> Response<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Response<U> {
        Response {
            data: f(self.data),
            meta: self.meta,
        }
    }
}

impl<T> Response<Vec<T>> {
    /// Keeps the first record, dropping any others. Empty becomes `None`.
    pub(crate) fn into_first(self) -> Response<Option<T>> {
        self.map(|records| records.into_iter().next())
    }
}

const EMPTY_ARRAY: &[u8] = b"[]";

/// Validates a response and returns the body ready for JSON decoding.
pub(crate) fn check_response(meta: &ResponseMeta, body: Bytes) -> Result<Bytes, Error> {
    if meta.status != StatusCode::OK {
        tracing::warn!(
            "Unexpected status {} from {}: {}",
            meta.status,
            meta.url,
            truncate_body(&String::from_utf8_lossy(&body))
        );
        return Err(Error::UnexpectedStatus {
            response: Box::new(meta.clone()),
        });
    }

    if !meta.is_json() {
        let text = String::from_utf8_lossy(&body).into_owned();
        tracing::warn!(
            "Non-JSON body ({}) from {}: {}",
            meta.content_type().unwrap_or("no content-type"),
            meta.url,
            truncate_body(&text)
        );
        let message = if text.is_empty() {
            "unexpected body".to_string()
        } else {
            text
        };
        return Err(Error::UnexpectedBody {
            message,
            response: Box::new(meta.clone()),
        });
    }

    if body.is_empty() {
        return Ok(Bytes::from_static(EMPTY_ARRAY));
    }

    Ok(body)
}

/// Decodes a validated body as a JSON array of records.
pub(crate) fn decode_array<T: DeserializeOwned>(
    meta: &ResponseMeta,
    body: &[u8],
) -> Result<Vec<T>, Error> {
    serde_json::from_slice::<Vec<T>>(body).map_err(|e| {
        tracing::error!(
            "Failed to parse resource: {} | body: {}",
            e,
            truncate_body(&String::from_utf8_lossy(body))
        );
        Error::Decode {
            source: e,
            response: Box::new(meta.clone()),
        }
    })
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        return body.to_string();
    }
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...[truncated]", &body[..end])
}
