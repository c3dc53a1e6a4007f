//! Contract tests for the Amadeus client against a scripted transport.

use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use tripdesk_flights::{
    AmadeusClient, AmadeusConfig, ApiErrorKind, HttpClient, HttpError, HttpMethod, HttpRequest,
    HttpResponse, PriceSource, SearchParams,
};

/// Replays canned responses in order and records every request.
struct ScriptedHttpClient {
    responses: Mutex<VecDeque<Result<HttpResponse, HttpError>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl ScriptedHttpClient {
    fn new(responses: Vec<Result<HttpResponse, HttpError>>) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(responses.into()),
            requests: Mutex::new(Vec::new()),
        })
    }

    fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().expect("requests lock").clone()
    }
}

impl HttpClient for ScriptedHttpClient {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
        self.requests.lock().expect("requests lock").push(request);
        let next = self
            .responses
            .lock()
            .expect("responses lock")
            .pop_front()
            .unwrap_or_else(|| Err(HttpError::Request(String::from("no scripted response left"))));
        Box::pin(async move { next })
    }
}

fn token(value: &str) -> Result<HttpResponse, HttpError> {
    Ok(HttpResponse::ok(format!(
        r#"{{"type":"amadeusOAuth2Token","access_token":"{value}","expires_in":1799}}"#
    )))
}

fn status(code: u16) -> Result<HttpResponse, HttpError> {
    Ok(HttpResponse::new(code, r#"{"errors":[]}"#))
}

const ONE_OFFER: &str = r#"{"data":[{"price":{"total":"289.10","currency":"USD"},
    "itineraries":[{"segments":[{"departure":{"iataCode":"PHL"},"arrival":{"iataCode":"DEN"},
    "carrierCode":"WN","number":"501"}]}]}]}"#;

fn params() -> SearchParams {
    SearchParams::parse("PHL", "DEN", "2026-01-24", "2026-01-26", 2).expect("valid params")
}

fn client(transport: Arc<ScriptedHttpClient>) -> AmadeusClient {
    AmadeusClient::with_http_client(
        AmadeusConfig::new("key-123", "secret-456").with_base_url("https://amadeus.test"),
        transport,
    )
}

#[tokio::test]
async fn authenticates_then_searches_with_bearer_token() {
    let transport =
        ScriptedHttpClient::new(vec![token("tok-1"), Ok(HttpResponse::ok(ONE_OFFER))]);
    let amadeus = client(transport.clone());

    let offers = amadeus.offers(&params()).await.expect("search succeeds");

    assert_eq!(offers.len(), 1);
    assert_eq!(offers[0].airlines, vec!["WN"]);

    let requests = transport.requests();
    assert_eq!(requests.len(), 2);

    let auth = &requests[0];
    assert_eq!(auth.method, HttpMethod::Post);
    assert_eq!(auth.url, "https://amadeus.test/v1/security/oauth2/token");
    assert_eq!(
        auth.body.as_deref(),
        Some("grant_type=client_credentials&client_id=key-123&client_secret=secret-456")
    );

    let search = &requests[1];
    assert_eq!(search.method, HttpMethod::Get);
    assert_eq!(
        search.url,
        "https://amadeus.test/v2/shopping/flight-offers?originLocationCode=PHL&\
         destinationLocationCode=DEN&departureDate=2026-01-24&returnDate=2026-01-26&\
         adults=2&nonStop=false&currencyCode=USD&max=10"
    );
    assert_eq!(
        search.header("authorization"),
        Some("Bearer tok-1")
    );
}

#[tokio::test]
async fn token_is_reused_across_searches() {
    let transport = ScriptedHttpClient::new(vec![
        token("tok-1"),
        Ok(HttpResponse::ok(ONE_OFFER)),
        Ok(HttpResponse::ok(r#"{"data":[]}"#)),
    ]);
    let amadeus = client(transport.clone());

    amadeus.offers(&params()).await.expect("first search");
    let second = amadeus.offers(&params()).await.expect("second search");

    assert!(second.is_empty());
    assert_eq!(transport.requests().len(), 3, "only one token request");
}

#[tokio::test]
async fn expired_token_is_refreshed_once() {
    let transport = ScriptedHttpClient::new(vec![
        token("stale"),
        status(401),
        token("fresh"),
        Ok(HttpResponse::ok(ONE_OFFER)),
    ]);
    let amadeus = client(transport.clone());

    let offers = amadeus.offers(&params()).await.expect("retry succeeds");

    assert_eq!(offers.len(), 1);
    let requests = transport.requests();
    assert_eq!(
        requests[3].header("authorization"),
        Some("Bearer fresh")
    );
}

#[tokio::test]
async fn rejected_credentials_surface_as_unauthorized() {
    let transport = ScriptedHttpClient::new(vec![status(401)]);
    let amadeus = client(transport);

    let error = amadeus.offers(&params()).await.expect_err("auth fails");

    assert_eq!(error.kind(), ApiErrorKind::Unauthorized);
    assert!(!error.retryable());
}

#[tokio::test]
async fn rate_limit_is_reported_as_retryable() {
    let transport = ScriptedHttpClient::new(vec![token("tok"), status(429)]);
    let amadeus = client(transport);

    let error = amadeus.offers(&params()).await.expect_err("rate limited");

    assert_eq!(error.kind(), ApiErrorKind::RateLimited);
    assert!(error.retryable());
}

#[tokio::test]
async fn transport_failure_is_unavailable() {
    let transport = ScriptedHttpClient::new(vec![Err(HttpError::Connect(String::from("connection refused")))]);
    let amadeus = client(transport);

    let error = amadeus.offers(&params()).await.expect_err("transport down");

    assert_eq!(error.kind(), ApiErrorKind::Unavailable);
    assert!(error.message().contains("connection refused"));
}

#[tokio::test]
async fn malformed_body_is_invalid_response() {
    let transport =
        ScriptedHttpClient::new(vec![token("tok"), Ok(HttpResponse::ok("<html>"))]);
    let amadeus = client(transport);

    let error = amadeus.offers(&params()).await.expect_err("bad body");

    assert_eq!(error.kind(), ApiErrorKind::InvalidResponse);
}
