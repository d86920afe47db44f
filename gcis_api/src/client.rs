//! HTTP client for the GCIS open-data API.

use std::fmt;
use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest::Method;
use serde::de::DeserializeOwned;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio_util::sync::CancellationToken;
use url::Url;

use crate::{
    endpoint::{Endpoint, ResultPolicy},
    query::{
        BasicInformationInput, BusinessBasicInformationInput, CompanyByKeywordInput,
        CompanyByResponsibleNameInput, Query,
    },
    response::{check_response, decode_array, Response, ResponseMeta},
    transport::{HttpRequest, HttpTransport, ReqwestTransport},
    types::{
        BusinessBasicInformation, BusinessBasicInformationAndBusiness, CompanyBasicInformation,
        CompanyBasicInformationAndBusiness, CompanyByKeyword, CompanyByResponsibleName,
    },
    user_agent::DEFAULT_USER_AGENT,
    Error,
};

/// Production host of the open-data API.
pub const DEFAULT_BASE_URL: &str = "https://data.gcis.nat.gov.tw/";

/// HTTP client for the GCIS open-data API.
///
/// Cheap to clone and safe to share between tasks: the configuration is
/// read-only and every call keeps its own state. No timeout is imposed;
/// callers bound a call by cancelling its [`CancellationToken`].
#[derive(Clone)]
pub struct Client {
    /// Base URL, always ending in `/`.
    base_api_url: String,
    user_agent: Option<HeaderValue>,
    transport: Arc<dyn HttpTransport>,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("base_api_url", &self.base_api_url)
            .field("user_agent", &self.user_agent)
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Creates a new client pointing at the production API.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Self {
        Self::builder().base_url(base_url).build()
    }

    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    pub fn base_url(&self) -> &str {
        &self.base_api_url
    }

    fn get_url(&self, path: &str) -> Result<Url, Error> {
        let invalid = |source| {
            tracing::error!("Invalid URL constructed from {:?}: {}", path, source);
            Error::InvalidUrl {
                path: path.to_string(),
                source,
            }
        };
        Url::parse(&self.base_api_url)
            .and_then(|base| base.join(path))
            .map_err(invalid)
    }

    async fn execute(
        &self,
        method: Method,
        path: &str,
        cancel: &CancellationToken,
    ) -> Result<(ResponseMeta, bytes::Bytes), Error> {
        if cancel.is_cancelled() {
            tracing::debug!("Request for {} cancelled before it was sent", path);
            return Err(Error::Cancelled);
        }

        let url = self.get_url(path)?;
        let mut headers = HeaderMap::new();
        if let Some(user_agent) = &self.user_agent {
            headers.insert(USER_AGENT, user_agent.clone());
        }
        let request = HttpRequest {
            method: method.clone(),
            url: url.clone(),
            headers,
        };

        tracing::debug!("{} {}", method, url);
        let result = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                tracing::debug!("Request to {} cancelled in flight", url);
                return Err(Error::Cancelled);
            }
            result = self.transport.execute(request) => result,
        };

        let raw = match result {
            Ok(raw) => raw,
            Err(_) if cancel.is_cancelled() => return Err(Error::Cancelled),
            Err(e) => {
                tracing::error!("Failed to get resource {}: {}", url, e);
                return Err(Error::Transport(e));
            }
        };

        let meta = ResponseMeta {
            method,
            url,
            status: raw.status,
            headers: raw.headers,
        };
        Ok((meta, raw.body))
    }

    /// GETs `path` (relative to the base URL), validates the response and
    /// decodes the body as a JSON array of `T`.
    pub async fn execute_decoding<T>(
        &self,
        path: &str,
        cancel: &CancellationToken,
    ) -> Result<Response<Vec<T>>, Error>
    where
        T: DeserializeOwned,
    {
        let (meta, body) = self.execute(Method::GET, path, cancel).await?;
        let body = check_response(&meta, body)?;
        let data = decode_array(&meta, &body)?;
        Ok(Response { data, meta })
    }

    /// GETs `path` and copies the body verbatim into `sink`, whatever the
    /// status or content type. Nothing is validated or decoded.
    pub async fn execute_raw<W>(
        &self,
        path: &str,
        cancel: &CancellationToken,
        sink: &mut W,
    ) -> Result<ResponseMeta, Error>
    where
        W: AsyncWrite + Unpin + ?Sized,
    {
        let (meta, body) = self.execute(Method::GET, path, cancel).await?;
        sink.write_all(&body).await.map_err(Error::Sink)?;
        sink.flush().await.map_err(Error::Sink)?;
        Ok(meta)
    }

    async fn fetch_one<T, Q>(
        &self,
        endpoint: Endpoint,
        cancel: &CancellationToken,
        query: &Q,
    ) -> Result<Response<Option<T>>, Error>
    where
        T: DeserializeOwned,
        Q: Query,
    {
        debug_assert_eq!(endpoint.policy(), ResultPolicy::Singular);
        let path = query.descriptor(endpoint).to_path();
        Ok(self.execute_decoding::<T>(&path, cancel).await?.into_first())
    }

    async fn fetch_many<T, Q>(
        &self,
        endpoint: Endpoint,
        cancel: &CancellationToken,
        query: &Q,
    ) -> Result<Response<Vec<T>>, Error>
    where
        T: DeserializeOwned,
        Q: Query,
    {
        debug_assert_eq!(endpoint.policy(), ResultPolicy::Plural);
        let path = query.descriptor(endpoint).to_path();
        self.execute_decoding::<T>(&path, cancel).await
    }

    /// Fetches the basic information of a company by its 統一編號.
    /// `data` is `None` when no company matches.
    pub async fn get_company_basic_information(
        &self,
        cancel: &CancellationToken,
        input: &BasicInformationInput,
    ) -> Result<Response<Option<CompanyBasicInformation>>, Error> {
        self.fetch_one(Endpoint::CompanyBasicInformation, cancel, input)
            .await
    }

    /// Fetches the basic information and business items of a company.
    pub async fn get_company_basic_information_and_business(
        &self,
        cancel: &CancellationToken,
        input: &BasicInformationInput,
    ) -> Result<Response<Option<CompanyBasicInformationAndBusiness>>, Error> {
        self.fetch_one(Endpoint::CompanyBasicInformationAndBusiness, cancel, input)
            .await
    }

    /// Searches companies by name keyword and status. One page of at most
    /// `top` (default 50) matches.
    pub async fn search_companies_by_keyword(
        &self,
        cancel: &CancellationToken,
        input: &CompanyByKeywordInput,
    ) -> Result<Response<Vec<CompanyByKeyword>>, Error> {
        self.fetch_many(Endpoint::CompanyByKeyword, cancel, input)
            .await
    }

    /// Searches companies by the name of their responsible person.
    pub async fn search_companies_by_responsible_name(
        &self,
        cancel: &CancellationToken,
        input: &CompanyByResponsibleNameInput,
    ) -> Result<Response<Vec<CompanyByResponsibleName>>, Error> {
        self.fetch_many(Endpoint::CompanyByResponsibleName, cancel, input)
            .await
    }

    /// Fetches the basic information of a business by number and agency.
    pub async fn get_business_basic_information(
        &self,
        cancel: &CancellationToken,
        input: &BusinessBasicInformationInput,
    ) -> Result<Response<Option<BusinessBasicInformation>>, Error> {
        self.fetch_one(Endpoint::BusinessBasicInformation, cancel, input)
            .await
    }

    /// Fetches the basic information and business items of a business.
    pub async fn get_business_basic_information_and_business(
        &self,
        cancel: &CancellationToken,
        input: &BusinessBasicInformationInput,
    ) -> Result<Response<Option<BusinessBasicInformationAndBusiness>>, Error> {
        self.fetch_one(Endpoint::BusinessBasicInformationAndBusiness, cancel, input)
            .await
    }
}

/// Builder for [`Client`]. Every setting is optional.
pub struct ClientBuilder {
    base_url: String,
    user_agent: String,
    transport: Option<Arc<dyn HttpTransport>>,
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            transport: None,
        }
    }
}

impl ClientBuilder {
    /// Overrides the base URL. A trailing `/` is added when missing so that
    /// relative dataset paths resolve beneath it.
    pub fn base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_string();
        self
    }

    /// Overrides the `User-Agent`. An empty value sends none.
    pub fn user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = user_agent.to_string();
        self
    }

    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn build(self) -> Client {
        let mut base_api_url = self.base_url;
        if !base_api_url.ends_with('/') {
            base_api_url.push('/');
        }

        let user_agent = if self.user_agent.is_empty() {
            None
        } else {
            match HeaderValue::from_str(&self.user_agent) {
                Ok(value) => Some(value),
                Err(e) => {
                    tracing::warn!("Ignoring invalid user agent {:?}: {}", self.user_agent, e);
                    None
                }
            }
        };

        Client {
            base_api_url,
            user_agent,
            transport: self
                .transport
                .unwrap_or_else(|| Arc::new(ReqwestTransport::new())),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::pin::Pin;
    use std::sync::Mutex;
    use std::task::{Context, Poll};

    use async_trait::async_trait;
    use bytes::Bytes;
    use reqwest::header::CONTENT_TYPE;
    use reqwest::StatusCode;

    use super::*;
    use crate::transport::{RawResponse, TransportError};

    /// Answers every request with a fixed response and records what it saw.
    struct StaticTransport {
        status: StatusCode,
        content_type: Option<&'static str>,
        body: &'static str,
        seen: Mutex<Vec<HttpRequest>>,
    }

    impl StaticTransport {
        fn json(body: &'static str) -> Self {
            Self {
                status: StatusCode::OK,
                content_type: Some("application/json;charset=UTF-8"),
                body,
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl HttpTransport for StaticTransport {
        async fn execute(&self, request: HttpRequest) -> Result<RawResponse, TransportError> {
            self.seen.lock().unwrap().push(request);
            let mut headers = HeaderMap::new();
            if let Some(ct) = self.content_type {
                headers.insert(CONTENT_TYPE, HeaderValue::from_static(ct));
            }
            Ok(RawResponse {
                status: self.status,
                headers,
                body: Bytes::from_static(self.body.as_bytes()),
            })
        }
    }

    /// Cancels the caller's token, then fails like a dropped connection.
    struct CancelThenFail {
        token: CancellationToken,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl HttpTransport for CancelThenFail {
        async fn execute(&self, _request: HttpRequest) -> Result<RawResponse, TransportError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.token.cancel();
            Err(TransportError::Other("connection reset".to_string()))
        }
    }

    struct Failing;

    #[async_trait]
    impl HttpTransport for Failing {
        async fn execute(&self, _request: HttpRequest) -> Result<RawResponse, TransportError> {
            Err(TransportError::Other("connection refused".to_string()))
        }
    }

    #[test]
    fn new_client_uses_production_defaults() {
        let client = Client::new();
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
        assert_eq!(
            client.user_agent.as_ref().and_then(|v| v.to_str().ok()),
            Some(DEFAULT_USER_AGENT)
        );
        assert!(DEFAULT_USER_AGENT.starts_with("gcis-rs/"));
    }

    #[test]
    fn base_url_gets_trailing_slash() {
        let client = Client::with_base_url("http://127.0.0.1:8080");
        assert_eq!(client.base_url(), "http://127.0.0.1:8080/");
        let url = client.get_url("od/data/api/X?$format=json").unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8080/od/data/api/X?$format=json");
    }

    #[test]
    fn relative_path_resolves_under_base_path() {
        let client = Client::with_base_url("http://localhost/mirror");
        let url = client.get_url("od/data/api/X").unwrap();
        assert_eq!(url.as_str(), "http://localhost/mirror/od/data/api/X");
    }

    #[test]
    fn malformed_base_url_is_invalid_url() {
        let client = Client::with_base_url("not a url");
        let err = client.get_url("od/data/api/X").unwrap_err();
        assert!(matches!(err, Error::InvalidUrl { .. }));
    }

    #[tokio::test]
    async fn user_agent_is_attached() {
        let transport = Arc::new(StaticTransport::json("[]"));
        let client = Client::builder()
            .user_agent("test-agent/1.0")
            .transport(transport.clone())
            .build();

        let resp = client
            .get_company_basic_information(
                &CancellationToken::new(),
                &BasicInformationInput::new("20828393"),
            )
            .await
            .unwrap();
        assert!(resp.data.is_none());

        let seen = transport.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].method, Method::GET);
        assert_eq!(seen[0].headers.get(USER_AGENT).unwrap(), "test-agent/1.0");
        assert_eq!(
            seen[0].url.path(),
            "/od/data/api/5F64D864-61CB-4D0D-8AD9-492047CC1EA6"
        );
    }

    #[tokio::test]
    async fn empty_user_agent_sends_none() {
        let transport = Arc::new(StaticTransport::json("[]"));
        let client = Client::builder()
            .user_agent("")
            .transport(transport.clone())
            .build();
        client
            .execute_decoding::<serde_json::Value>("od/data/api/X", &CancellationToken::new())
            .await
            .unwrap();
        assert!(transport.seen.lock().unwrap()[0].headers.get(USER_AGENT).is_none());
    }

    #[tokio::test]
    async fn singular_takes_first_of_many() {
        let transport = Arc::new(StaticTransport::json(
            r#"[{"Business_Accounting_NO":"1"},{"Business_Accounting_NO":"2"}]"#,
        ));
        let client = Client::builder().transport(transport).build();
        let resp = client
            .get_company_basic_information(
                &CancellationToken::new(),
                &BasicInformationInput::new("1"),
            )
            .await
            .unwrap();
        assert_eq!(resp.data.unwrap().business_accounting_no, "1");
    }

    #[tokio::test]
    async fn already_cancelled_sends_nothing() {
        let transport = Arc::new(StaticTransport::json("[]"));
        let client = Client::builder().transport(transport.clone()).build();
        let cancel = CancellationToken::new();
        cancel.cancel();

        let err = client
            .search_companies_by_keyword(&cancel, &CompanyByKeywordInput::default())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Cancelled));
        assert!(transport.seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn cancellation_wins_over_racing_transport_failure() {
        let cancel = CancellationToken::new();
        let transport = Arc::new(CancelThenFail {
            token: cancel.clone(),
            calls: AtomicUsize::new(0),
        });
        let client = Client::builder().transport(transport.clone()).build();

        let err = client
            .get_business_basic_information(
                &cancel,
                &BusinessBasicInformationInput::new("26459190", "376610000A"),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Cancelled));
        assert_eq!(transport.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn transport_failure_is_transport_error() {
        let client = Client::builder().transport(Arc::new(Failing)).build();
        let err = client
            .search_companies_by_responsible_name(
                &CancellationToken::new(),
                &CompanyByResponsibleNameInput::default().with_responsible_name("陳O聖"),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Transport(_)));
        assert!(err.response().is_none());
    }

    #[tokio::test]
    async fn raw_sink_receives_body_verbatim() {
        let transport = Arc::new(StaticTransport {
            status: StatusCode::OK,
            content_type: Some("text/plain"),
            body: "$format參數有誤，請查明後繼續。",
            seen: Mutex::new(Vec::new()),
        });
        let client = Client::builder().transport(transport).build();

        let mut sink: Vec<u8> = Vec::new();
        let meta = client
            .execute_raw("od/data/api/X?$format=xml", &CancellationToken::new(), &mut sink)
            .await
            .unwrap();
        assert_eq!(meta.status, StatusCode::OK);
        assert_eq!(String::from_utf8(sink).unwrap(), "$format參數有誤，請查明後繼續。");
    }

    /// Sink that rejects every write.
    struct BrokenPipe;

    impl AsyncWrite for BrokenPipe {
        fn poll_write(
            self: Pin<&mut Self>,
            _cx: &mut Context<'_>,
            _buf: &[u8],
        ) -> Poll<std::io::Result<usize>> {
            Poll::Ready(Err(std::io::ErrorKind::BrokenPipe.into()))
        }

        fn poll_flush(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<std::io::Result<()>> {
            Poll::Ready(Ok(()))
        }

        fn poll_shutdown(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<std::io::Result<()>> {
            Poll::Ready(Ok(()))
        }
    }

    #[tokio::test]
    async fn failing_sink_is_sink_error() {
        let client = Client::builder()
            .transport(Arc::new(StaticTransport::json(r#"[{"Company_Name":"x"}]"#)))
            .build();

        let err = client
            .execute_raw(
                &Endpoint::CompanyBasicInformation.path(),
                &CancellationToken::new(),
                &mut BrokenPipe,
            )
            .await
            .unwrap_err();
        match &err {
            Error::Sink(source) => assert_eq!(source.kind(), std::io::ErrorKind::BrokenPipe),
            other => panic!("expected Sink, got {:?}", other),
        }
        assert!(err.response().is_none());
    }
}
