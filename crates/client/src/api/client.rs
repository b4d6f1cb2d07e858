//! HTTP client facade
//!
//! Single chokepoint for all storefront API calls. Builds the URL and
//! headers, attaches the bearer token when one exists, parses the JSON
//! response envelope, emits at most one user-facing notification per
//! call, and classifies every failure into a typed [`ApiError`].

use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, instrument};

use super::auth::{AccessTokenProvider, AnonymousProvider};
use super::errors::{ApiError, GENERIC_ERROR_MESSAGE};
use super::notify::{NotificationEvent, NotificationReporter, TracingReporter};
use crate::config::ApiClientConfig;
use crate::http::HttpClient;

/// Per-call request parameters
///
/// Defaults to a GET with no body and no header overrides.
#[derive(Debug, Default, Clone)]
pub struct RequestOptions {
    /// HTTP method; GET when unset
    pub method: Option<Method>,
    /// JSON body payload
    pub body: Option<Value>,
    /// Header overrides, applied last; they win on key collision
    pub headers: Vec<(String, String)>,
}

/// Success-notification fallback per HTTP method.
///
/// GET (and anything else) never emits a success notification.
fn success_fallback(method: &Method) -> Option<&'static str> {
    match method.as_str() {
        "POST" => Some("Operation completed successfully!"),
        "PUT" => Some("Updated successfully!"),
        "DELETE" => Some("Deleted successfully!"),
        _ => None,
    }
}

/// API client facade
pub struct ApiClient {
    http: HttpClient,
    config: ApiClientConfig,
    auth: Arc<dyn AccessTokenProvider>,
    reporter: Arc<dyn NotificationReporter>,
}

impl ApiClient {
    /// Create a new API client
    ///
    /// # Errors
    ///
    /// Returns error if the underlying HTTP client cannot be created
    pub fn new(
        config: ApiClientConfig,
        auth: Arc<dyn AccessTokenProvider>,
        reporter: Arc<dyn NotificationReporter>,
    ) -> Result<Self, ApiError> {
        let http = HttpClient::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self { http, config, auth, reporter })
    }

    /// Create a builder for fluent configuration
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::default()
    }

    /// Perform an API call and return the parsed JSON envelope.
    ///
    /// Exactly one network call, zero retries. Emits at most one
    /// notification: a success event for 2xx POST/PUT/DELETE, an error
    /// event on any failed call. Callers must not re-notify for an
    /// error returned from here.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Config`] if the endpoint does not start with `/`
    ///   or a header override is not a valid header (no network call,
    ///   no notification)
    /// - [`ApiError::Network`] if the transport fails
    /// - [`ApiError::MalformedResponse`] if the body is not valid JSON
    /// - [`ApiError::Application`] on a non-2xx status, carrying the
    ///   body's `message` or the generic fallback
    #[instrument(skip(self, options), fields(endpoint = %endpoint))]
    pub async fn request(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<Value, ApiError> {
        if !endpoint.starts_with('/') {
            return Err(ApiError::Config(format!(
                "Endpoint must start with '/': {endpoint}"
            )));
        }

        let method = options.method.unwrap_or(Method::GET);
        let url = format!("{}{}", self.config.base_url, endpoint);
        let token = self.auth.access_token().await?;
        let headers = build_headers(token.as_deref(), &options.headers)?;

        let mut builder = self.http.request(method.clone(), &url).headers(headers);
        if let Some(body) = &options.body {
            let bytes = serde_json::to_vec(body)
                .map_err(|e| ApiError::Config(format!("Failed to serialize body: {e}")))?;
            builder = builder.body(bytes);
        }

        let response = match self.http.send(builder).await {
            Ok(response) => response,
            // an unbuildable request (e.g. invalid URL) never left the
            // process, so it carries no notification
            Err(err @ ApiError::Network(_)) => return Err(self.notify_failure(err)),
            Err(err) => return Err(err),
        };

        let status = response.status();
        let bytes = match response.bytes().await {
            Ok(bytes) => bytes,
            Err(err) => return Err(self.notify_failure(ApiError::Network(err.to_string()))),
        };

        // The remote always answers JSON, including for error statuses;
        // anything else is a malformed response.
        let envelope: Value = match serde_json::from_slice(&bytes) {
            Ok(envelope) => envelope,
            Err(err) => {
                return Err(self.notify_failure(ApiError::MalformedResponse(err.to_string())))
            }
        };

        if !status.is_success() {
            let message = envelope_message(&envelope).unwrap_or(GENERIC_ERROR_MESSAGE).to_string();
            self.reporter.report(NotificationEvent::error(message.clone()));
            return Err(ApiError::Application(message));
        }

        if let Some(fallback) = success_fallback(&method) {
            let message = envelope_message(&envelope).unwrap_or(fallback);
            self.reporter.report(NotificationEvent::success(message));
        }

        debug!(%method, %status, "API call succeeded");
        Ok(envelope)
    }

    /// GET an endpoint and decode the envelope into `R`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`]; decode failures are
    /// [`ApiError::MalformedResponse`].
    pub async fn get<R: DeserializeOwned>(&self, endpoint: &str) -> Result<R, ApiError> {
        let envelope = self.request(endpoint, RequestOptions::default()).await?;
        decode(envelope)
    }

    /// POST a JSON body and decode the envelope into `R`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn post<B: Serialize, R: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<R, ApiError> {
        let options =
            RequestOptions { method: Some(Method::POST), body: Some(to_body(body)?), headers: vec![] };
        let envelope = self.request(endpoint, options).await?;
        decode(envelope)
    }

    /// PUT a JSON body and decode the envelope into `R`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn put<B: Serialize, R: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<R, ApiError> {
        let options =
            RequestOptions { method: Some(Method::PUT), body: Some(to_body(body)?), headers: vec![] };
        let envelope = self.request(endpoint, options).await?;
        decode(envelope)
    }

    /// DELETE an endpoint and return the raw envelope.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn delete(&self, endpoint: &str) -> Result<Value, ApiError> {
        let options = RequestOptions { method: Some(Method::DELETE), ..Default::default() };
        self.request(endpoint, options).await
    }

    /// Emit the single error notification for a failed call.
    ///
    /// Only failures of a request that was actually issued are
    /// notified; errors detected before any network I/O are returned
    /// bare.
    fn notify_failure(&self, err: ApiError) -> ApiError {
        self.reporter.report(NotificationEvent::error(err.user_message()));
        err
    }
}

fn envelope_message(envelope: &Value) -> Option<&str> {
    envelope.get("message").and_then(Value::as_str)
}

fn to_body<B: Serialize>(body: &B) -> Result<Value, ApiError> {
    serde_json::to_value(body)
        .map_err(|e| ApiError::Config(format!("Failed to serialize body: {e}")))
}

fn decode<R: DeserializeOwned>(envelope: Value) -> Result<R, ApiError> {
    serde_json::from_value(envelope)
        .map_err(|e| ApiError::MalformedResponse(format!("Failed to decode response: {e}")))
}

/// Default headers plus bearer token plus caller overrides, in that
/// order; later entries replace earlier ones on key collision.
fn build_headers(
    token: Option<&str>,
    overrides: &[(String, String)],
) -> Result<HeaderMap, ApiError> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    if let Some(token) = token {
        let value = HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|e| ApiError::Config(format!("Invalid access token: {e}")))?;
        headers.insert(AUTHORIZATION, value);
    }

    for (name, value) in overrides {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| ApiError::Config(format!("Invalid header name {name:?}: {e}")))?;
        let value = HeaderValue::from_str(value)
            .map_err(|e| ApiError::Config(format!("Invalid header value for {name}: {e}")))?;
        headers.insert(name, value);
    }

    Ok(headers)
}

/// Builder for [`ApiClient`]
#[derive(Default)]
pub struct ApiClientBuilder {
    config: Option<ApiClientConfig>,
    auth: Option<Arc<dyn AccessTokenProvider>>,
    reporter: Option<Arc<dyn NotificationReporter>>,
}

impl ApiClientBuilder {
    /// Set the client configuration
    pub fn config(mut self, config: ApiClientConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the access token provider; anonymous when unset
    pub fn auth(mut self, auth: Arc<dyn AccessTokenProvider>) -> Self {
        self.auth = Some(auth);
        self
    }

    /// Set the notification reporter; logs to tracing when unset
    pub fn reporter(mut self, reporter: Arc<dyn NotificationReporter>) -> Self {
        self.reporter = Some(reporter);
        self
    }

    /// Build the API client
    ///
    /// # Errors
    ///
    /// Returns error if the underlying HTTP client cannot be created
    pub fn build(self) -> Result<ApiClient, ApiError> {
        let config = self.config.unwrap_or_default();
        let auth = self.auth.unwrap_or_else(|| Arc::new(AnonymousProvider));
        let reporter = self.reporter.unwrap_or_else(|| Arc::new(TracingReporter));

        ApiClient::new(config, auth, reporter)
    }
}
