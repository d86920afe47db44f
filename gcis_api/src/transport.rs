//! Pluggable HTTP execution.
//!
//! The [`Client`](crate::Client) never talks to the network directly; it hands
//! a fully resolved [`HttpRequest`] to an [`HttpTransport`] and gets a
//! [`RawResponse`] back. [`ReqwestTransport`] is the default implementation.
//! Tests and embedders can supply their own through
//! [`ClientBuilder::transport`](crate::ClientBuilder::transport).

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::HeaderMap;
use reqwest::{Method, StatusCode};
use url::Url;

/// A fully resolved outbound request.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
}

/// The envelope of one response: status, headers and the complete body.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

/// Network-level failures. Never produced for a response that arrived,
/// whatever its status.
#[derive(thiserror::Error, Debug)]
pub enum TransportError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{0}")]
    Other(String),
}

/// Executes one HTTP round trip.
///
/// Implementations must read the whole body before returning and must not
/// interpret the status code. Dropping the returned future aborts the call.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn execute(&self, request: HttpRequest) -> Result<RawResponse, TransportError>;
}

/// [`HttpTransport`] backed by a shared `reqwest::Client`.
///
/// No timeout is configured by default; pass a preconfigured client to
/// [`ReqwestTransport::with_client`] to impose one.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(&self, request: HttpRequest) -> Result<RawResponse, TransportError> {
        let resp = self
            .client
            .request(request.method, request.url)
            .headers(request.headers)
            .send()
            .await?;

        let status = resp.status();
        let headers = resp.headers().clone();
        let body = resp.bytes().await?;

        Ok(RawResponse {
            status,
            headers,
            body,
        })
    }
}
