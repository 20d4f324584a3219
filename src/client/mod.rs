//! Client layer: orchestrates transport calls and maps transport ↔ domain.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::{
    Call, CallInfo, CallInfoResponse, CallResponse, CallViaLastDigits, CallWithCode, Login,
    Password, ValidationError,
};

const DEFAULT_ENDPOINT: &str = "https://api-call2fa.rikkicom.io";
const DEFAULT_API_VERSION: &str = "v1";

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn post_json<'a>(
        &'a self,
        url: &'a str,
        credentials: &'a Credentials,
        body: serde_json::Value,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;

    fn get<'a>(
        &'a self,
        url: &'a str,
        credentials: &'a Credentials,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn post_json<'a>(
        &'a self,
        url: &'a str,
        credentials: &'a Credentials,
        body: serde_json::Value,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let response = self
                .client
                .post(url)
                .basic_auth(
                    credentials.login().as_str(),
                    Some(credentials.password().as_str()),
                )
                .json(&body)
                .send()
                .await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }

    fn get<'a>(
        &'a self,
        url: &'a str,
        credentials: &'a Credentials,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let response = self
                .client
                .get(url)
                .basic_auth(
                    credentials.login().as_str(),
                    Some(credentials.password().as_str()),
                )
                .send()
                .await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, Clone)]
/// API credentials for Call2FA, sent as HTTP Basic Auth on every request.
///
/// Immutable once constructed; a client holding them can be shared freely
/// across tasks.
pub struct Credentials {
    login: Login,
    password: Password,
}

impl Credentials {
    /// Create validated credentials: both parts must be non-empty.
    pub fn new(
        login: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            login: Login::new(login)?,
            password: Password::new(password)?,
        })
    }

    /// Borrow the login part.
    pub fn login(&self) -> &Login {
        &self.login
    }

    /// Borrow the password part.
    pub fn password(&self) -> &Password {
        &self.password
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`Call2faClient`].
///
/// This error preserves:
/// - transport failures (DNS, TLS, timeouts, refused connections),
/// - remote rejections (non-2xx HTTP status with any diagnostic body),
/// - malformed responses (2xx body that is not the documented contract),
/// - validation failures from domain constructors.
pub enum Call2faError {
    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// Non-successful HTTP status code returned by the server.
    #[error("unexpected HTTP status: {status}")]
    HttpStatus { status: u16, body: Option<String> },

    /// A 2xx response body could not be parsed or lacked the expected fields.
    #[error("malformed response: {0}")]
    Parse(#[source] Box<dyn StdError + Send + Sync>),

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The configured endpoint is not a valid URL.
    #[error("invalid endpoint URL: {0}")]
    InvalidEndpoint(#[source] url::ParseError),
}

#[derive(Debug, Clone)]
/// Builder for [`Call2faClient`].
///
/// Use this when you need to customize the endpoint (e.g. to point at a mock
/// server in tests), the API version, the timeout, or the user-agent.
pub struct Call2faClientBuilder {
    credentials: Credentials,
    endpoint: String,
    api_version: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl Call2faClientBuilder {
    /// Create a builder with the production endpoint and no timeout/user-agent override.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            api_version: DEFAULT_API_VERSION.to_owned(),
            timeout: None,
            user_agent: None,
        }
    }

    /// Override the Call2FA base endpoint URL.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Override the API version path segment (default `v1`).
    pub fn api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    ///
    /// Without one, the blocking duration of a call is bounded only by the
    /// operating system's socket defaults.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`Call2faClient`]. No network activity happens here.
    pub fn build(self) -> Result<Call2faClient, Call2faError> {
        url::Url::parse(&self.endpoint).map_err(Call2faError::InvalidEndpoint)?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| Call2faError::Transport(Box::new(err)))?;

        Ok(Call2faClient {
            credentials: self.credentials,
            endpoint: self.endpoint.trim_end_matches('/').to_owned(),
            api_version: self.api_version,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

#[derive(Clone)]
/// High-level Call2FA client.
///
/// This type orchestrates request encoding, HTTP Basic Auth, and response
/// parsing. By default it talks to `https://api-call2fa.rikkicom.io` under the
/// `v1` API version.
///
/// Construction performs no network I/O; credentials are authenticated by the
/// service on each request. Every operation issues exactly one request — there
/// is no retry or caching layer.
pub struct Call2faClient {
    credentials: Credentials,
    endpoint: String,
    api_version: String,
    http: Arc<dyn HttpTransport>,
}

impl std::fmt::Debug for Call2faClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Call2faClient")
            .field("credentials", &self.credentials)
            .field("endpoint", &self.endpoint)
            .field("api_version", &self.api_version)
            .finish_non_exhaustive()
    }
}

impl Call2faClient {
    /// Create a client using the production endpoint.
    ///
    /// For more customization, use [`Call2faClient::builder`].
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            api_version: DEFAULT_API_VERSION.to_owned(),
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(credentials: Credentials) -> Call2faClientBuilder {
        Call2faClientBuilder::new(credentials)
    }

    /// Initiate a plain verification call.
    ///
    /// Errors:
    /// - [`Call2faError::HttpStatus`] for non-2xx HTTP responses,
    /// - [`Call2faError::Parse`] when a 2xx body is not JSON or lacks `call_id`,
    /// - [`Call2faError::Transport`] when the request itself fails.
    pub async fn call(&self, request: Call) -> Result<CallResponse, Call2faError> {
        let body = crate::transport::encode_call_json(&request);
        self.post_call_method(crate::transport::CALL_METHOD, body)
            .await
    }

    /// Initiate a call that announces a verification code to the callee.
    ///
    /// Errors are reported as for [`Call2faClient::call`].
    pub async fn call_with_code(&self, request: CallWithCode) -> Result<CallResponse, Call2faError> {
        let body = crate::transport::encode_call_with_code_json(&request);
        self.post_call_method(crate::transport::CODE_CALL_METHOD, body)
            .await
    }

    /// Initiate a last-digits call from the given number pool.
    ///
    /// Errors are reported as for [`Call2faClient::call`].
    pub async fn call_via_last_digits(
        &self,
        request: CallViaLastDigits,
    ) -> Result<CallResponse, Call2faError> {
        let method = crate::transport::call_via_last_digits_method_path(&request);
        let body = crate::transport::encode_call_via_last_digits_json(&request);
        self.post_call_method(&method, body).await
    }

    /// Fetch information about a previously initiated call.
    ///
    /// Errors are reported as for [`Call2faClient::call`].
    pub async fn call_info(&self, request: CallInfo) -> Result<CallInfoResponse, Call2faError> {
        let uri = self.make_uri(&crate::transport::call_info_method_path(&request));
        let response = self
            .http
            .get(&uri, &self.credentials)
            .await
            .map_err(Call2faError::Transport)?;
        let response = reject_error_status(response)?;
        crate::transport::decode_call_info_json_response(&response.body)
            .map_err(|err| Call2faError::Parse(Box::new(err)))
    }

    async fn post_call_method(
        &self,
        method: &str,
        body: serde_json::Value,
    ) -> Result<CallResponse, Call2faError> {
        let uri = self.make_uri(method);
        let response = self
            .http
            .post_json(&uri, &self.credentials, body)
            .await
            .map_err(Call2faError::Transport)?;
        let response = reject_error_status(response)?;
        crate::transport::decode_call_json_response(&response.body)
            .map_err(|err| Call2faError::Parse(Box::new(err)))
    }

    // The wire contract uses trailing slashes on every method.
    fn make_uri(&self, method: &str) -> String {
        format!("{}/{}/{}/", self.endpoint, self.api_version, method)
    }
}

fn reject_error_status(response: HttpResponse) -> Result<HttpResponse, Call2faError> {
    if (200..=299).contains(&response.status) {
        return Ok(response);
    }
    let body = if response.body.trim().is_empty() {
        None
    } else {
        Some(response.body)
    };
    Err(Call2faError::HttpStatus {
        status: response.status,
        body,
    })
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::Mutex;

    use crate::domain::{
        CallId, CallbackUrl, DigitsMode, Language, PoolId, RawPhoneNumber, VerificationCode,
    };

    use super::*;

    #[derive(Debug, Clone)]
    struct FakeTransport {
        state: Arc<Mutex<FakeTransportState>>,
    }

    #[derive(Debug)]
    struct FakeTransportState {
        last_method: Option<&'static str>,
        last_url: Option<String>,
        last_body: Option<serde_json::Value>,
        last_credentials: Option<(String, String)>,
        response_status: u16,
        response_body: String,
        fail_with: Option<io::ErrorKind>,
        request_count: usize,
    }

    impl FakeTransport {
        fn new(response_status: u16, response_body: impl Into<String>) -> Self {
            Self {
                state: Arc::new(Mutex::new(FakeTransportState {
                    last_method: None,
                    last_url: None,
                    last_body: None,
                    last_credentials: None,
                    response_status,
                    response_body: response_body.into(),
                    fail_with: None,
                    request_count: 0,
                })),
            }
        }

        fn failing(kind: io::ErrorKind) -> Self {
            let transport = Self::new(200, "");
            transport.state.lock().unwrap().fail_with = Some(kind);
            transport
        }

        fn last_request(&self) -> (Option<String>, Option<serde_json::Value>) {
            let state = self.state.lock().unwrap();
            (state.last_url.clone(), state.last_body.clone())
        }

        fn last_method(&self) -> Option<&'static str> {
            self.state.lock().unwrap().last_method
        }

        fn last_credentials(&self) -> Option<(String, String)> {
            self.state.lock().unwrap().last_credentials.clone()
        }

        fn request_count(&self) -> usize {
            self.state.lock().unwrap().request_count
        }

        fn record(
            &self,
            method: &'static str,
            url: &str,
            credentials: &Credentials,
            body: Option<serde_json::Value>,
        ) -> Result<HttpResponse, Box<dyn StdError + Send + Sync>> {
            let mut state = self.state.lock().unwrap();
            state.request_count += 1;
            state.last_method = Some(method);
            state.last_url = Some(url.to_owned());
            state.last_body = body;
            state.last_credentials = Some((
                credentials.login().as_str().to_owned(),
                credentials.password().as_str().to_owned(),
            ));
            if let Some(kind) = state.fail_with {
                return Err(Box::new(io::Error::new(kind, "transport failed")));
            }
            Ok(HttpResponse {
                status: state.response_status,
                body: state.response_body.clone(),
            })
        }
    }

    impl HttpTransport for FakeTransport {
        fn post_json<'a>(
            &'a self,
            url: &'a str,
            credentials: &'a Credentials,
            body: serde_json::Value,
        ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
            Box::pin(async move { self.record("POST", url, credentials, Some(body)) })
        }

        fn get<'a>(
            &'a self,
            url: &'a str,
            credentials: &'a Credentials,
        ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
            Box::pin(async move { self.record("GET", url, credentials, None) })
        }
    }

    fn make_client(transport: FakeTransport) -> Call2faClient {
        Call2faClient {
            credentials: Credentials::new("user", "pass").unwrap(),
            endpoint: "https://example.invalid".to_owned(),
            api_version: "v1".to_owned(),
            http: Arc::new(transport),
        }
    }

    fn call_request() -> Call {
        Call::new(
            RawPhoneNumber::new("+380631010121").unwrap(),
            Some(CallbackUrl::new("https://example.com/cb").unwrap()),
        )
    }

    #[test]
    fn construction_performs_no_network_io() {
        let transport = FakeTransport::new(200, r#"{"call_id": "95818344"}"#);
        let _client = make_client(transport.clone());
        assert_eq!(transport.request_count(), 0);
    }

    #[tokio::test]
    async fn call_posts_json_with_basic_auth_and_parses_call_id() {
        let transport = FakeTransport::new(200, r#"{"call_id": "95818344"}"#);
        let client = make_client(transport.clone());

        let response = client.call(call_request()).await.unwrap();
        assert_eq!(response.call_id, CallId::new("95818344").unwrap());

        let (url, body) = transport.last_request();
        assert_eq!(url.as_deref(), Some("https://example.invalid/v1/call/"));
        let body = body.unwrap();
        assert_eq!(body["phone_number"], "+380631010121");
        assert_eq!(body["callback_url"], "https://example.com/cb");
        assert_eq!(
            transport.last_credentials(),
            Some(("user".to_owned(), "pass".to_owned()))
        );
    }

    #[tokio::test]
    async fn call_issues_exactly_one_request() {
        let transport = FakeTransport::new(200, r#"{"call_id": "95818344"}"#);
        let client = make_client(transport.clone());

        client.call(call_request()).await.unwrap();
        assert_eq!(transport.request_count(), 1);
    }

    #[tokio::test]
    async fn call_accepts_created_status() {
        let transport = FakeTransport::new(201, r#"{"call_id": "95818344"}"#);
        let client = make_client(transport);

        let response = client.call(call_request()).await.unwrap();
        assert_eq!(response.call_id.as_str(), "95818344");
    }

    #[tokio::test]
    async fn call_maps_unauthorized_to_http_status_error() {
        let transport = FakeTransport::new(401, r#"{"detail": "invalid credentials"}"#);
        let client = make_client(transport.clone());

        let err = client.call(call_request()).await.unwrap_err();
        match err {
            Call2faError::HttpStatus { status, body } => {
                assert_eq!(status, 401);
                assert!(!body.unwrap().is_empty());
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(transport.request_count(), 1);
    }

    #[tokio::test]
    async fn call_maps_empty_error_body_to_none() {
        let transport = FakeTransport::new(503, "   ");
        let client = make_client(transport);

        let err = client.call(call_request()).await.unwrap_err();
        assert!(matches!(
            err,
            Call2faError::HttpStatus {
                status: 503,
                body: None
            }
        ));
    }

    #[tokio::test]
    async fn call_maps_invalid_json_to_parse_error() {
        let transport = FakeTransport::new(200, "{ not json }");
        let client = make_client(transport);

        let err = client.call(call_request()).await.unwrap_err();
        assert!(matches!(err, Call2faError::Parse(_)));
    }

    #[tokio::test]
    async fn call_maps_missing_call_id_to_parse_error() {
        let transport = FakeTransport::new(200, r#"{"status": "queued"}"#);
        let client = make_client(transport);

        let err = client.call(call_request()).await.unwrap_err();
        assert!(matches!(err, Call2faError::Parse(_)));
    }

    #[tokio::test]
    async fn call_maps_transport_failure_without_retry() {
        let transport = FakeTransport::failing(io::ErrorKind::ConnectionRefused);
        let client = make_client(transport.clone());

        let err = client.call(call_request()).await.unwrap_err();
        assert!(matches!(err, Call2faError::Transport(_)));
        assert_eq!(transport.request_count(), 1);
    }

    #[tokio::test]
    async fn call_with_code_posts_code_fields() {
        let transport = FakeTransport::new(201, r#"{"call_id": "95818345"}"#);
        let client = make_client(transport.clone());

        let request = CallWithCode::new(
            RawPhoneNumber::new("+380631010121").unwrap(),
            VerificationCode::new("0042").unwrap(),
            Language::new("uk").unwrap(),
        );
        let response = client.call_with_code(request).await.unwrap();
        assert_eq!(response.call_id.as_str(), "95818345");

        let (url, body) = transport.last_request();
        assert_eq!(url.as_deref(), Some("https://example.invalid/v1/code/call/"));
        let body = body.unwrap();
        assert_eq!(body["code"], "0042");
        assert_eq!(body["lang"], "uk");
    }

    #[tokio::test]
    async fn call_via_last_digits_selects_pool_path() {
        let transport = FakeTransport::new(201, r#"{"call_id": "95818346"}"#);
        let client = make_client(transport.clone());

        let request = CallViaLastDigits::new(
            RawPhoneNumber::new("+380631010121").unwrap(),
            PoolId::new("7").unwrap(),
            DigitsMode::Four,
        );
        client.call_via_last_digits(request).await.unwrap();

        let (url, body) = transport.last_request();
        assert_eq!(
            url.as_deref(),
            Some("https://example.invalid/v1/pool/7/call/")
        );
        assert_eq!(body.unwrap()["phone_number"], "+380631010121");
    }

    #[tokio::test]
    async fn call_via_last_digits_selects_six_digit_path() {
        let transport = FakeTransport::new(201, r#"{"call_id": "95818346"}"#);
        let client = make_client(transport.clone());

        let request = CallViaLastDigits::new(
            RawPhoneNumber::new("+380631010121").unwrap(),
            PoolId::new("7").unwrap(),
            DigitsMode::Six,
        );
        client.call_via_last_digits(request).await.unwrap();

        let (url, _) = transport.last_request();
        assert_eq!(
            url.as_deref(),
            Some("https://example.invalid/v1/pool/7/call/six-digits/")
        );
    }

    #[tokio::test]
    async fn call_info_uses_get_and_parses_fields() {
        let json = r#"
        {
          "call_id": "95818344",
          "state": "answered",
          "duration": 12
        }
        "#;
        let transport = FakeTransport::new(200, json);
        let client = make_client(transport.clone());

        let request = CallInfo::new(CallId::new("95818344").unwrap());
        let response = client.call_info(request).await.unwrap();
        assert_eq!(response.call_id.as_str(), "95818344");
        assert_eq!(response.state.as_deref(), Some("answered"));
        assert_eq!(response.extra["duration"], 12);

        assert_eq!(transport.last_method(), Some("GET"));
        let (url, body) = transport.last_request();
        assert_eq!(
            url.as_deref(),
            Some("https://example.invalid/v1/call/95818344/")
        );
        assert_eq!(body, None);
    }

    #[tokio::test]
    async fn call_info_maps_not_found_to_http_status_error() {
        let transport = FakeTransport::new(404, "not found");
        let client = make_client(transport);

        let request = CallInfo::new(CallId::new("0").unwrap());
        let err = client.call_info(request).await.unwrap_err();
        assert!(matches!(
            err,
            Call2faError::HttpStatus {
                status: 404,
                body: Some(_)
            }
        ));
    }

    #[test]
    fn credentials_validate_inputs() {
        assert!(Credentials::new("", "pass").is_err());
        assert!(Credentials::new("user", "").is_err());
        assert!(Credentials::new("user", "pass").is_ok());
    }

    #[test]
    fn builder_overrides_are_applied() {
        let client = Call2faClient::builder(Credentials::new("user", "pass").unwrap())
            .endpoint("https://example.invalid/")
            .api_version("v2")
            .build()
            .unwrap();
        assert_eq!(client.endpoint, "https://example.invalid");
        assert_eq!(client.api_version, "v2");
        assert_eq!(client.make_uri("call"), "https://example.invalid/v2/call/");
    }

    #[test]
    fn builder_rejects_invalid_endpoint() {
        let err = Call2faClient::builder(Credentials::new("user", "pass").unwrap())
            .endpoint("not a url")
            .build()
            .unwrap_err();
        assert!(matches!(err, Call2faError::InvalidEndpoint(_)));
    }

    #[test]
    fn default_client_targets_production_endpoint() {
        let client = Call2faClient::new(Credentials::new("user", "pass").unwrap());
        assert_eq!(
            client.make_uri("call"),
            "https://api-call2fa.rikkicom.io/v1/call/"
        );
    }
}
