use urlencoding::encode;

use crate::config::ProviderConfig;

/// Ordered query parameters for one upstream request.
///
/// Parameters are emitted in insertion order; a `None` value is omitted
/// rather than serialized. The provider credential, when configured, is
/// always appended last.
#[derive(Debug, Clone, Default)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, name: &str, value: impl ToString) -> Self {
        self.pairs.push((name.to_owned(), value.to_string()));
        self
    }

    /// Set a parameter only when a value is present.
    pub fn set_opt<T: ToString>(self, name: &str, value: Option<T>) -> Self {
        match value {
            Some(value) => self.set(name, value),
            None => self,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Percent-encode into a query string, appending the credential
    /// parameter last when one is configured.
    pub fn encode(&self, config: &ProviderConfig) -> String {
        let mut parts: Vec<String> = self
            .pairs
            .iter()
            .map(|(name, value)| format!("{}={}", encode(name), encode(value)))
            .collect();
        if let Some(api_key) = &config.api_key {
            parts.push(format!("api_key={}", encode(api_key)));
        }
        parts.join("&")
    }
}
