//! The request pipeline: build, dispatch, decode, classify.

use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

use reqwest::{header, Client, Method, Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ApiConfig;
use crate::error::{Error, Result};

/// Fixed per-request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Media type for JSON request bodies.
const APPLICATION_JSON: &str = "application/json";

/// HTTP verbs the API is called with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    /// Fetch a resource.
    Get,
    /// Create a resource or trigger an action.
    Post,
    /// Replace a resource.
    Put,
    /// Remove a resource.
    Delete,
}

impl Verb {
    /// Canonical uppercase spelling of the verb.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Verb::Get => "GET",
            Verb::Post => "POST",
            Verb::Put => "PUT",
            Verb::Delete => "DELETE",
        }
    }

    fn as_method(self) -> Method {
        match self {
            Verb::Get => Method::GET,
            Verb::Post => Method::POST,
            Verb::Put => Method::PUT,
            Verb::Delete => Method::DELETE,
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Verb {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        match value {
            "GET" => Ok(Verb::Get),
            "POST" => Ok(Verb::Post),
            "PUT" => Ok(Verb::Put),
            "DELETE" => Ok(Verb::Delete),
            other => Err(Error::UnsupportedMethod(other.to_string())),
        }
    }
}

/// Per-call options: extra headers merged onto the outbound request.
///
/// Header names are unique here; setting the same name twice keeps the last
/// value. On the wire they are appended after the `Authorization` header, so
/// reusing a name the request already carries adds another header line
/// rather than overwriting it.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    headers: HashMap<String, String>,
}

impl RequestOptions {
    /// Options with no extra headers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an extra header to every request made with these options.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Iterate over the extra headers.
    pub fn headers(&self) -> impl Iterator<Item = (&str, &str)> {
        self.headers.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// ChartMogul API client.
///
/// Every operation flows through one pipeline: build the request, dispatch
/// it, then either decode the JSON body or classify the error status.
/// Exactly one of a decoded value or an error results from any dispatch.
///
/// The client is cheap to clone and safe to share across tasks; the only
/// state is the read-only configuration and the underlying connection pool.
#[derive(Debug, Clone)]
pub struct ChartMogulClient {
    http: Client,
    config: ApiConfig,
}

impl ChartMogulClient {
    /// Create a client from a configuration.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client cannot be built (should not happen with
    /// default settings).
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build HTTP client");

        Self { http, config }
    }

    /// Perform an authorized GET and decode the response into `T`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the server returns a non-2xx
    /// status, or the body does not decode as `T`.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        options: &RequestOptions,
    ) -> Result<T> {
        let request = self.build_request::<()>(Verb::Get, path, None, true, options)?;
        let response = self.dispatch(request).await?;
        decode(response).await
    }

    /// Perform an authorized POST and decode the response into `T`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the server returns a non-2xx
    /// status, or the body does not decode as `T`.
    pub async fn post<P: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        payload: &P,
        options: &RequestOptions,
    ) -> Result<T> {
        let request = self.build_request(Verb::Post, path, Some(payload), true, options)?;
        let response = self.dispatch(request).await?;
        decode(response).await
    }

    /// Perform an authorized POST, discarding the response body.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns a non-2xx
    /// status.
    pub async fn post_without_response<P: Serialize>(
        &self,
        path: &str,
        payload: &P,
        options: &RequestOptions,
    ) -> Result<()> {
        let request = self.build_request(Verb::Post, path, Some(payload), true, options)?;
        self.dispatch(request).await.map(drop)
    }

    /// Perform an authorized PUT and decode the response into `T`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the server returns a non-2xx
    /// status, or the body does not decode as `T`.
    pub async fn put<P: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        payload: &P,
        options: &RequestOptions,
    ) -> Result<T> {
        let request = self.build_request(Verb::Put, path, Some(payload), true, options)?;
        let response = self.dispatch(request).await?;
        decode(response).await
    }

    /// Perform an authorized PUT, discarding the response body.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns a non-2xx
    /// status.
    pub async fn put_without_response<P: Serialize>(
        &self,
        path: &str,
        payload: &P,
        options: &RequestOptions,
    ) -> Result<()> {
        let request = self.build_request(Verb::Put, path, Some(payload), true, options)?;
        self.dispatch(request).await.map(drop)
    }

    /// Perform an authorized DELETE, discarding the response body.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns a non-2xx
    /// status.
    pub async fn delete(&self, path: &str, options: &RequestOptions) -> Result<()> {
        let request = self.build_request::<()>(Verb::Delete, path, None, true, options)?;
        self.dispatch(request).await.map(drop)
    }

    /// Build an outbound request.
    ///
    /// The request is built once and immutable afterwards. A body is
    /// attached iff `payload` is supplied; the `Authorization` header is
    /// attached iff `authorize` is true. Caller headers go on after the
    /// authorization header, so reusing its name appends a second header
    /// line instead of replacing it.
    fn build_request<P: Serialize>(
        &self,
        verb: Verb,
        path: &str,
        payload: Option<&P>,
        authorize: bool,
        options: &RequestOptions,
    ) -> Result<Request> {
        let url = format!("{}{path}", self.config.base_url);
        let mut builder = self
            .http
            .request(verb.as_method(), &url)
            .header(header::ACCEPT, "*/*");

        if authorize {
            builder =
                builder.basic_auth(&self.config.account_token, Some(&self.config.secret_key));
        }

        for (name, value) in options.headers() {
            builder = builder.header(name, value);
        }

        if let Some(payload) = payload {
            let body = serde_json::to_vec(payload)?;
            builder = builder
                .header(header::CONTENT_TYPE, APPLICATION_JSON)
                .header(header::CONTENT_LENGTH, body.len())
                .body(body);
        }

        builder.build().map_err(Error::Transport)
    }

    /// Send a built request and classify any non-2xx response.
    ///
    /// If the error body itself cannot be read, the transport error
    /// propagates unclassified.
    async fn dispatch(&self, request: Request) -> Result<Response> {
        let url = request.url().clone();
        tracing::debug!(method = %request.method(), %url, "dispatching request");

        let response = self.http.execute(request).await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await?;
        tracing::warn!(%status, %url, "request rejected");
        Err(Error::from_status(status, body))
    }
}

/// Buffer a response body to completion and decode it as JSON.
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let text = response.text().await?;
    Ok(serde_json::from_str(&text)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client() -> ChartMogulClient {
        ChartMogulClient::new(
            ApiConfig::new("token", "secret").with_base_url("http://localhost:9"),
        )
    }

    #[derive(Serialize)]
    struct Payload {
        name: String,
    }

    fn payload() -> Payload {
        Payload {
            name: "Acme".to_string(),
        }
    }

    #[test]
    fn json_payload_sets_body_and_headers() {
        let client = test_client();
        for verb in [Verb::Post, Verb::Put] {
            let request = client
                .build_request(
                    verb,
                    "/v1/customers",
                    Some(&payload()),
                    true,
                    &RequestOptions::new(),
                )
                .unwrap();

            let expected = serde_json::to_vec(&payload()).unwrap();
            let body = request.body().unwrap().as_bytes().unwrap();
            assert_eq!(body, expected.as_slice());
            assert_eq!(
                request.headers().get(header::CONTENT_TYPE).unwrap(),
                "application/json"
            );
            assert_eq!(
                request.headers().get(header::CONTENT_LENGTH).unwrap(),
                &expected.len().to_string()
            );
        }
    }

    #[test]
    fn no_payload_means_no_body() {
        let client = test_client();
        let request = client
            .build_request::<()>(Verb::Get, "/v1/customers", None, true, &RequestOptions::new())
            .unwrap();

        assert!(request.body().is_none());
        assert!(request.headers().get(header::CONTENT_TYPE).is_none());
        assert_eq!(request.headers().get(header::ACCEPT).unwrap(), "*/*");
    }

    #[test]
    fn authorized_request_carries_basic_credentials() {
        let client = test_client();
        let request = client
            .build_request::<()>(Verb::Get, "/v1/ping", None, true, &RequestOptions::new())
            .unwrap();

        // base64("token:secret")
        let auth = request.headers().get(header::AUTHORIZATION).unwrap();
        assert_eq!(auth.to_str().unwrap(), "Basic dG9rZW46c2VjcmV0");
    }

    #[test]
    fn unauthorized_request_has_no_credentials() {
        let client = test_client();
        let request = client
            .build_request::<()>(Verb::Get, "/v1/ping", None, false, &RequestOptions::new())
            .unwrap();

        assert!(request.headers().get(header::AUTHORIZATION).is_none());
    }

    #[test]
    fn caller_headers_append_rather_than_overwrite() {
        let client = test_client();
        let options = RequestOptions::new().with_header("Authorization", "Bearer other");
        let request = client
            .build_request::<()>(Verb::Get, "/v1/ping", None, true, &options)
            .unwrap();

        let lines: Vec<_> = request.headers().get_all(header::AUTHORIZATION).iter().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].to_str().unwrap(), "Basic dG9rZW46c2VjcmV0");
        assert_eq!(lines[1].to_str().unwrap(), "Bearer other");
    }

    #[test]
    fn extra_headers_are_applied() {
        let client = test_client();
        let options = RequestOptions::new().with_header("X-Request-Id", "req_42");
        let request = client
            .build_request::<()>(Verb::Delete, "/v1/customers/cus_1", None, true, &options)
            .unwrap();

        assert_eq!(request.headers().get("x-request-id").unwrap(), "req_42");
    }

    #[test]
    fn unsupported_verb_is_rejected_by_name() {
        let err = Verb::try_from("PATCH").unwrap_err();
        assert!(matches!(err, Error::UnsupportedMethod(_)));
        assert!(err.to_string().contains("PATCH"));

        assert_eq!(Verb::try_from("DELETE").unwrap(), Verb::Delete);
    }
}
