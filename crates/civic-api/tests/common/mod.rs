use axum::{
    Router,
    body::Body,
    http::{HeaderMap, Request, StatusCode},
};
use chrono::{DateTime, TimeZone, Utc};
use civic_api::{ApiConfig, ApiState, router};
use http_body_util::BodyExt;
use serde::Deserialize;
use tower::ServiceExt;

/// Seed used unless a test asks for another
pub const TEST_SEED: u64 = 42;

/// Fixed clock for every test state
pub fn test_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 15, 10, 30, 0)
        .single()
        .expect("valid timestamp")
}

/// Test state builder for creating ApiState
pub struct TestStateBuilder {
    config: ApiConfig,
}

impl TestStateBuilder {
    pub fn new() -> Self {
        Self {
            config: ApiConfig {
                mock_seed: Some(TEST_SEED),
                ..ApiConfig::default()
            },
        }
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.mock_seed = Some(seed);
        self
    }

    pub fn allow_demo_passwords(mut self) -> Self {
        self.config.allow_demo_passwords = true;
        self
    }

    pub fn build(self) -> ApiState {
        ApiState::new(&self.config).with_frozen_time(test_now())
    }

    /// Full application with the middleware stack
    pub fn app(self) -> Router {
        let config = self.config.clone();
        router::app(self.build(), &config)
    }
}

impl Default for TestStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper to make requests to the test app
pub struct TestClient {
    router: Router,
}

impl TestClient {
    pub fn new(router: Router) -> Self {
        Self { router }
    }

    /// Client over the full app with default test settings
    pub fn default_app() -> Self {
        Self::new(TestStateBuilder::new().app())
    }

    /// Send a request and get the response
    pub async fn request(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to execute request");

        let status = response.status();
        let headers = response.headers().clone();
        let body_bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to read response body")
            .to_bytes();

        TestResponse {
            status,
            body: body_bytes.to_vec(),
            headers,
        }
    }

    /// Send a GET request
    pub async fn get(&self, uri: &str) -> TestResponse {
        let request = Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .expect("Failed to build request");

        self.request(request).await
    }

    /// Send a request with a raw body and JSON content type
    pub async fn send_raw(&self, method: &str, uri: &str, body: &str) -> TestResponse {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .expect("Failed to build request");

        self.request(request).await
    }

    /// Send a POST request with JSON body
    pub async fn post_json<T: serde::Serialize>(&self, uri: &str, body: &T) -> TestResponse {
        let json_body = serde_json::to_string(body).expect("Failed to serialize body");
        self.send_raw("POST", uri, &json_body).await
    }

    /// Send a PUT request with JSON body
    pub async fn put_json<T: serde::Serialize>(&self, uri: &str, body: &T) -> TestResponse {
        let json_body = serde_json::to_string(body).expect("Failed to serialize body");
        self.send_raw("PUT", uri, &json_body).await
    }
}

/// Test response wrapper
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
    pub headers: HeaderMap,
}

impl TestResponse {
    /// Get response body as string
    pub fn text(&self) -> String {
        String::from_utf8(self.body.clone()).expect("Response body is not valid UTF-8")
    }

    /// Parse response body as JSON
    pub fn json<T: for<'de> Deserialize<'de>>(&self) -> T {
        serde_json::from_slice(&self.body).expect("Failed to parse JSON response")
    }

    /// Assert status code
    pub fn assert_status(&self, expected: StatusCode) {
        assert_eq!(
            self.status,
            expected,
            "Expected status {}, got {}. Body: {}",
            expected,
            self.status,
            self.text()
        );
    }

    /// Assert the standard failure envelope
    pub fn assert_error(&self, expected: StatusCode, message: &str) {
        self.assert_status(expected);
        let body: serde_json::Value = self.json();
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], message);
    }
}
