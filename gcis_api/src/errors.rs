//! Error types for the API client.

use crate::response::ResponseMeta;
use crate::transport::TransportError;

/// Errors that can occur when making API requests.
///
/// Variants raised after a response arrived carry its [`ResponseMeta`], which
/// [`Error::response`] exposes uniformly.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The request path could not be resolved against the base URL.
    #[error("Invalid request path {path:?}: {source}")]
    InvalidUrl {
        path: String,
        #[source]
        source: url::ParseError,
    },
    /// The caller's cancellation token fired before the call completed.
    #[error("Request cancelled")]
    Cancelled,
    /// The request never produced a response (DNS, connect, timeout, body read).
    #[error("Request failed: {0}")]
    Transport(#[source] TransportError),
    /// The API answered with something other than 200, which it documents it never does.
    #[error("unexpected status code: {}", .response.status.as_u16())]
    UnexpectedStatus { response: Box<ResponseMeta> },
    /// The API answered 200 with a non-JSON body, usually a plain-text query error.
    #[error("{} {}: {} {message}", .response.method, .response.url, .response.status.as_u16())]
    UnexpectedBody {
        message: String,
        response: Box<ResponseMeta>,
    },
    /// The body passed validation but was not the expected JSON array.
    #[error("Failed to decode response: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
        response: Box<ResponseMeta>,
    },
    /// Copying the raw body into the caller's sink failed.
    #[error("Failed to write response body: {0}")]
    Sink(#[source] std::io::Error),
}

impl Error {
    /// Metadata of the response that caused this error, if one was received.
    pub fn response(&self) -> Option<&ResponseMeta> {
        match self {
            Error::UnexpectedStatus { response }
            | Error::UnexpectedBody { response, .. }
            | Error::Decode { response, .. } => Some(response),
            _ => None,
        }
    }

    /// HTTP status code of the response that caused this error, if any.
    pub fn status(&self) -> Option<u16> {
        self.response().map(|r| r.status.as_u16())
    }
}
