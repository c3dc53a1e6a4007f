//! Async HTTP transport used by price sources.
//!
//! Requests are plain data so a scripted [`HttpClient`] can stand in for
//! [`ReqwestHttpClient`] and inspect exactly what would have been sent.

use std::collections::BTreeMap;
use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use thiserror::Error;
use tracing::warn;

use crate::links::encode_query;

const USER_AGENT: &str = concat!("tripdesk/", env!("CARGO_PKG_VERSION"));
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

/// Credentials attached to a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpAuth {
    None,
    BearerToken(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    /// Lower-cased header names.
    pub headers: BTreeMap<String, String>,
    pub body: Option<String>,
    pub timeout: Duration,
}

impl HttpRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self::with_method(HttpMethod::Get, url.into())
    }

    /// Form-encoded POST, as used by OAuth token endpoints.
    pub fn post_form(url: impl Into<String>, fields: &[(&str, &str)]) -> Self {
        let mut request = Self::with_method(HttpMethod::Post, url.into());
        request.headers.insert(
            String::from("content-type"),
            String::from("application/x-www-form-urlencoded"),
        );
        request.body = Some(encode_query(fields));
        request
    }

    fn with_method(method: HttpMethod, url: String) -> Self {
        let mut headers = BTreeMap::new();
        headers.insert(String::from("accept"), String::from("application/json"));
        Self {
            method,
            url,
            headers,
            body: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_auth(mut self, auth: HttpAuth) -> Self {
        match auth {
            HttpAuth::None => {
                self.headers.remove("authorization");
            }
            HttpAuth::BearerToken(token) => {
                self.headers
                    .insert(String::from("authorization"), format!("Bearer {token}"));
            }
        }
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn ok(body: impl Into<String>) -> Self {
        Self::new(200, body)
    }

    pub const fn is_success(&self) -> bool {
        matches!(self.status, 200..=299)
    }
}

/// Failure before a status code was received.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HttpError {
    #[error("request timed out: {0}")]
    Timeout(String),

    #[error("connection failed: {0}")]
    Connect(String),

    #[error("failed to read response body: {0}")]
    Body(String),

    #[error("request failed: {0}")]
    Request(String),
}

impl HttpError {
    /// Timeouts and dropped connections are worth another attempt.
    pub const fn retryable(&self) -> bool {
        matches!(self, Self::Timeout(_) | Self::Connect(_) | Self::Body(_))
    }
}

impl From<reqwest::Error> for HttpError {
    fn from(error: reqwest::Error) -> Self {
        let detail = error.to_string();
        if error.is_timeout() {
            Self::Timeout(detail)
        } else if error.is_connect() {
            Self::Connect(detail)
        } else if error.is_body() || error.is_decode() {
            Self::Body(detail)
        } else {
            Self::Request(detail)
        }
    }
}

pub trait HttpClient: Send + Sync {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>>;
}

/// Production transport.
#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

impl ReqwestHttpClient {
    pub fn new() -> Self {
        Self::from_builder(configured_builder())
    }

    fn from_builder(builder: reqwest::ClientBuilder) -> Self {
        let client = match builder.build() {
            Ok(client) => client,
            Err(error) => {
                warn!(%error, "http client setup failed, using reqwest defaults");
                reqwest::Client::new()
            }
        };
        Self { client }
    }

    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        let method = match request.method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
        };

        let mut builder = self
            .client
            .request(method, &request.url)
            .timeout(request.timeout);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(HttpResponse { status, body })
    }
}

impl Default for ReqwestHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

fn configured_builder() -> reqwest::ClientBuilder {
    reqwest::Client::builder().user_agent(USER_AGENT)
}

impl HttpClient for ReqwestHttpClient {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
        Box::pin(self.send(request))
    }
}

#[cfg(test)]
mod tests {
    use std::io::{BufRead, BufReader, Write};
    use std::net::TcpListener;
    use std::thread;

    use super::*;

    /// Accepts one connection, answers `{}` and returns the request head.
    fn serve_once() -> (String, thread::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback");
        let url = format!("http://{}/offers", listener.local_addr().expect("local addr"));
        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().expect("accept");
            let mut reader = BufReader::new(stream.try_clone().expect("clone stream"));
            let mut head = String::new();
            loop {
                let mut line = String::new();
                let read = reader.read_line(&mut line).expect("read request");
                if read == 0 || line == "\r\n" {
                    break;
                }
                head.push_str(&line);
            }
            stream
                .write_all(b"HTTP/1.1 200 OK\r\ncontent-length: 2\r\nconnection: close\r\n\r\n{}")
                .expect("write response");
            head
        });
        (url, handle)
    }

    #[tokio::test]
    async fn production_client_identifies_itself() {
        // Given: a loopback server and the client built the way `new` builds it
        let (url, server) = serve_once();
        let client = ReqwestHttpClient::from_builder(configured_builder().no_proxy());

        // When: a request goes out
        let response = client
            .execute(HttpRequest::get(url))
            .await
            .expect("loopback request");

        // Then: the server saw the tripdesk user agent
        assert_eq!(response, HttpResponse::ok("{}"));
        let head = server.join().expect("server thread").to_ascii_lowercase();
        assert!(
            head.contains(&format!("user-agent: {}", USER_AGENT.to_ascii_lowercase())),
            "request head: {head}"
        );
        assert!(head.contains("accept: application/json"));
    }

    #[test]
    fn new_builds_a_client() {
        let client = ReqwestHttpClient::new();
        assert!(format!("{client:?}").contains("ReqwestHttpClient"));
    }

    #[test]
    fn bearer_token_sets_authorization() {
        let request = HttpRequest::get("https://example.test/offers")
            .with_auth(HttpAuth::BearerToken(String::from("token-123")));

        assert_eq!(request.header("Authorization"), Some("Bearer token-123"));
        assert_eq!(request.header("accept"), Some("application/json"));

        let cleared = request.with_auth(HttpAuth::None);
        assert_eq!(cleared.header("authorization"), None);
    }

    #[test]
    fn form_post_is_url_encoded() {
        let request = HttpRequest::post_form(
            "https://example.test/token",
            &[("grant_type", "client_credentials"), ("client_id", "a b")],
        );

        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(
            request.header("content-type"),
            Some("application/x-www-form-urlencoded")
        );
        assert_eq!(
            request.body.as_deref(),
            Some("grant_type=client_credentials&client_id=a%20b")
        );
        assert_eq!(request.timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn only_transient_failures_are_retryable() {
        assert!(HttpError::Timeout(String::from("slow")).retryable());
        assert!(HttpError::Connect(String::from("refused")).retryable());
        assert!(!HttpError::Request(String::from("bad url")).retryable());
    }

    #[test]
    fn success_covers_the_2xx_range() {
        assert!(HttpResponse::new(204, "").is_success());
        assert!(!HttpResponse::new(302, "").is_success());
    }
}
