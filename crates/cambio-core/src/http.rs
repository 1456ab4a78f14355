use std::fmt::{Display, Formatter};
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex, PoisonError};

/// HTTP request envelope used by transport calls. The upstream contract is
/// GET-only, so no method field is carried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub timeout_ms: u64,
}

impl HttpRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout_ms: 5_000,
        }
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }
}

/// HTTP response envelope returned by a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn ok_json(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    pub fn with_status(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Transport-level HTTP error: the request never yielded a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpError {
    message: String,
}

impl HttpError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for HttpError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for HttpError {}

/// Transport contract for async GET execution.
pub trait HttpClient: Send + Sync {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>>;
}

/// Production HTTP client backed by reqwest.
#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    client: Arc<reqwest::Client>,
}

impl ReqwestHttpClient {
    pub fn new() -> Self {
        Self {
            client: Arc::new(
                reqwest::Client::builder()
                    .user_agent("cambio/0.1.0")
                    .build()
                    .unwrap_or_else(|_| reqwest::Client::new()),
            ),
        }
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

impl Default for ReqwestHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpClient for ReqwestHttpClient {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
        Box::pin(async move {
            let timeout = std::time::Duration::from_millis(request.timeout_ms);
            let response = self
                .client
                .get(&request.url)
                .timeout(timeout)
                .send()
                .await
                .map_err(|e| {
                    if e.is_timeout() {
                        HttpError::new(format!("request timeout: {e}"))
                    } else if e.is_connect() {
                        HttpError::new(format!("connection failed: {e}"))
                    } else {
                        HttpError::new(format!("request failed: {e}"))
                    }
                })?;

            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .map_err(|e| HttpError::new(format!("failed to read response body: {e}")))?;

            Ok(HttpResponse { status, body })
        })
    }
}

/// Scripted transport for deterministic offline tests. Routes are matched
/// by URL substring, first match wins; unmatched URLs error.
#[derive(Debug, Default)]
pub struct ScriptedHttpClient {
    routes: Vec<(String, Result<HttpResponse, HttpError>)>,
    requests: Mutex<Vec<String>>,
}

impl ScriptedHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Respond with a 200 JSON body to URLs containing `fragment`.
    pub fn on_success(mut self, fragment: impl Into<String>, body: impl Into<String>) -> Self {
        self.routes
            .push((fragment.into(), Ok(HttpResponse::ok_json(body))));
        self
    }

    /// Respond with the given status and body to URLs containing `fragment`.
    pub fn on_status(
        mut self,
        fragment: impl Into<String>,
        status: u16,
        body: impl Into<String>,
    ) -> Self {
        self.routes
            .push((fragment.into(), Ok(HttpResponse::with_status(status, body))));
        self
    }

    /// Fail at the wire for URLs containing `fragment`.
    pub fn on_error(mut self, fragment: impl Into<String>, message: impl Into<String>) -> Self {
        self.routes
            .push((fragment.into(), Err(HttpError::new(message))));
        self
    }

    /// URLs executed so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl HttpClient for ScriptedHttpClient {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request.url.clone());
        let response = self
            .routes
            .iter()
            .find(|(fragment, _)| request.url.contains(fragment))
            .map(|(_, response)| response.clone())
            .unwrap_or_else(|| {
                Err(HttpError::new(format!(
                    "no scripted response for {}",
                    request.url
                )))
            });
        Box::pin(async move { response })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn scripted_client_matches_url_fragment() {
        let client = ScriptedHttpClient::new()
            .on_success("latest", r#"{"rates":{}}"#)
            .on_status("convert", 500, "boom");

        let ok = client
            .execute(HttpRequest::get("https://api.test/v1/latest?symbols=EUR"))
            .await
            .expect("scripted response");
        assert!(ok.is_success());

        let degraded = client
            .execute(HttpRequest::get("https://api.test/v1/convert?from=EUR"))
            .await
            .expect("scripted response");
        assert_eq!(degraded.status, 500);

        assert_eq!(client.requests().len(), 2);
    }

    #[tokio::test]
    async fn scripted_client_errors_on_unmatched_url() {
        let client = ScriptedHttpClient::new().on_success("latest", "{}");
        let error = client
            .execute(HttpRequest::get("https://api.test/v1/currencies"))
            .await
            .expect_err("unmatched URL must fail");
        assert!(error.message().contains("no scripted response"));
    }
}
