use thiserror::Error;

use crate::transport::Endpoint;

/// Validation errors for user-supplied codes and dates.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("currency code cannot be empty")]
    EmptyCode,
    #[error("currency code must be 3-5 ASCII letters: '{value}'")]
    InvalidCode { value: String },

    #[error("date must be YYYY-MM-DD: '{value}'")]
    InvalidDate { value: String },
    #[error("start date {start} is after end date {end}")]
    InvalidDateRange { start: String, end: String },
}

/// Failures surfaced by the provider-facing layers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// Network failure or non-2xx upstream status. `status` is absent when
    /// the request never produced a response.
    #[error("{endpoint}: {message}")]
    Transport {
        endpoint: Endpoint,
        status: Option<u16>,
        message: String,
    },

    /// Payload lacks an expected numeric or structural field.
    #[error("{endpoint}: malformed response: {detail}")]
    Malformed { endpoint: Endpoint, detail: String },

    /// The USD cross-rate fallback cannot be computed because a required
    /// rate is missing from the fallback data.
    #[error("no USD rate available for '{code}'")]
    FallbackUnavailable { code: String },
}

impl ProviderError {
    pub fn transport(
        endpoint: Endpoint,
        status: Option<u16>,
        message: impl Into<String>,
    ) -> Self {
        Self::Transport {
            endpoint,
            status,
            message: message.into(),
        }
    }

    pub fn malformed(endpoint: Endpoint, detail: impl Into<String>) -> Self {
        Self::Malformed {
            endpoint,
            detail: detail.into(),
        }
    }

    pub fn fallback_unavailable(code: impl Into<String>) -> Self {
        Self::FallbackUnavailable { code: code.into() }
    }

    /// HTTP status attached to a transport failure, when one was received.
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Transport { status, .. } => *status,
            _ => None,
        }
    }
}
