use std::fmt::{Display, Formatter};
use std::sync::Arc;

use serde_json::Value;

use crate::config::ProviderConfig;
use crate::error::ProviderError;
use crate::http::{HttpClient, HttpRequest};
use crate::query::QueryParams;

/// Upstream endpoints the core issues GET requests against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Currencies,
    Latest,
    Convert,
    Timeseries,
    Historical,
}

impl Endpoint {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Currencies => "currencies",
            Self::Latest => "latest",
            Self::Convert => "convert",
            Self::Timeseries => "timeseries",
            Self::Historical => "historical",
        }
    }
}

impl Display for Endpoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Single-request GET layer.
///
/// Normalizes wire failures and non-2xx statuses into
/// [`ProviderError::Transport`] and returns the parsed JSON body verbatim;
/// payload shape is the normalizers' concern, not this layer's.
pub struct Transport {
    http: Arc<dyn HttpClient>,
    config: ProviderConfig,
}

impl Transport {
    pub fn new(http: Arc<dyn HttpClient>, config: ProviderConfig) -> Self {
        Self { http, config }
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    pub async fn get_json(
        &self,
        endpoint: Endpoint,
        params: QueryParams,
    ) -> Result<Value, ProviderError> {
        let base = self.config.base_url.trim_end_matches('/');
        let query = params.encode(&self.config);
        let url = if query.is_empty() {
            format!("{base}/{endpoint}")
        } else {
            format!("{base}/{endpoint}?{query}")
        };

        let request = HttpRequest::get(url).with_timeout_ms(self.config.timeout_ms);
        let response = self
            .http
            .execute(request)
            .await
            .map_err(|error| ProviderError::transport(endpoint, None, error.message()))?;

        if !response.is_success() {
            return Err(ProviderError::transport(
                endpoint,
                Some(response.status),
                error_body_message(&response.body),
            ));
        }

        serde_json::from_str(&response.body).map_err(|error| {
            ProviderError::malformed(endpoint, format!("body is not valid JSON: {error}"))
        })
    }
}

/// Best-effort human-readable message from an upstream error body: a JSON
/// `message`/`error` field when parseable, otherwise the first 200
/// characters of the raw text.
fn error_body_message(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<Value>(body) {
        let message = value
            .get("message")
            .and_then(Value::as_str)
            .or_else(|| value.get("error").and_then(Value::as_str))
            .or_else(|| value.pointer("/error/message").and_then(Value::as_str));
        if let Some(message) = message {
            return message.to_owned();
        }
    }
    body.chars().take(200).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::ScriptedHttpClient;

    fn transport(client: ScriptedHttpClient) -> (Arc<ScriptedHttpClient>, Transport) {
        let client = Arc::new(client);
        let config = ProviderConfig::new("https://api.test/v1/", Some(String::from("secret")));
        (client.clone(), Transport::new(client, config))
    }

    #[tokio::test]
    async fn strips_trailing_slash_and_appends_credential() {
        let (client, transport) =
            transport(ScriptedHttpClient::new().on_success("latest", r#"{"rates":{}}"#));

        transport
            .get_json(Endpoint::Latest, QueryParams::new().set("symbols", "EUR"))
            .await
            .expect("request should succeed");

        assert_eq!(
            client.requests(),
            ["https://api.test/v1/latest?symbols=EUR&api_key=secret"]
        );
    }

    #[tokio::test]
    async fn non_success_status_extracts_json_message() {
        let (_, transport) = transport(ScriptedHttpClient::new().on_status(
            "convert",
            422,
            r#"{"error":{"message":"invalid pair"}}"#,
        ));

        let error = transport
            .get_json(Endpoint::Convert, QueryParams::new())
            .await
            .expect_err("status 422 must fail");

        assert_eq!(error.status(), Some(422));
        assert!(error.to_string().contains("invalid pair"));
    }

    #[tokio::test]
    async fn non_json_error_body_is_truncated() {
        let long_body = "x".repeat(500);
        let (_, transport) =
            transport(ScriptedHttpClient::new().on_status("currencies", 503, long_body));

        let error = transport
            .get_json(Endpoint::Currencies, QueryParams::new())
            .await
            .expect_err("status 503 must fail");

        match error {
            ProviderError::Transport { message, .. } => assert_eq!(message.len(), 200),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn wire_failure_has_no_status() {
        let (_, transport) =
            transport(ScriptedHttpClient::new().on_error("historical", "connection refused"));

        let error = transport
            .get_json(Endpoint::Historical, QueryParams::new())
            .await
            .expect_err("wire failure must surface");

        assert_eq!(error.status(), None);
        assert!(error.to_string().contains("connection refused"));
    }

    #[tokio::test]
    async fn success_body_must_be_json() {
        let (_, transport) =
            transport(ScriptedHttpClient::new().on_success("latest", "<html>not json</html>"));

        let error = transport
            .get_json(Endpoint::Latest, QueryParams::new())
            .await
            .expect_err("non-JSON body must fail");
        assert!(matches!(error, ProviderError::Malformed { .. }));
    }
}
