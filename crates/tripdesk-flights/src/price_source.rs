//! Price source contract and its error type.
//!
//! A price source turns [`SearchParams`] into priced [`FlightOffer`]s. The
//! only production implementation is [`AmadeusClient`](crate::AmadeusClient);
//! tests plug in scripted sources.

use std::fmt::{Display, Formatter};
use std::future::Future;
use std::pin::Pin;

use crate::{FlightOffer, SearchParams};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    NotConfigured,
    Unauthorized,
    Unavailable,
    RateLimited,
    InvalidResponse,
}

/// Error raised by a price source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    kind: ApiErrorKind,
    message: String,
    retryable: bool,
}

impl ApiError {
    pub fn not_configured(message: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::NotConfigured,
            message: message.into(),
            retryable: false,
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::Unauthorized,
            message: message.into(),
            retryable: false,
        }
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::Unavailable,
            message: message.into(),
            retryable: true,
        }
    }

    pub fn rate_limited(message: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::RateLimited,
            message: message.into(),
            retryable: true,
        }
    }

    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::InvalidResponse,
            message: message.into(),
            retryable: false,
        }
    }

    /// Map a non-2xx status to the matching error kind.
    pub fn from_status(source: &str, status: u16) -> Self {
        let message = format!("{source} returned status {status}");
        match status {
            401 | 403 => Self::unauthorized(message),
            429 => Self::rate_limited(message),
            _ => Self::unavailable(message),
        }
    }

    pub const fn kind(&self) -> ApiErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn retryable(&self) -> bool {
        self.retryable
    }

    pub const fn code(&self) -> &'static str {
        match self.kind {
            ApiErrorKind::NotConfigured => "api.not_configured",
            ApiErrorKind::Unauthorized => "api.unauthorized",
            ApiErrorKind::Unavailable => "api.unavailable",
            ApiErrorKind::RateLimited => "api.rate_limited",
            ApiErrorKind::InvalidResponse => "api.invalid_response",
        }
    }
}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.code())
    }
}

impl std::error::Error for ApiError {}

/// Upstream that can price a round trip.
pub trait PriceSource: Send + Sync {
    /// Short human-readable name used in log lines.
    fn name(&self) -> &'static str;

    fn offers<'a>(
        &'a self,
        params: &'a SearchParams,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<FlightOffer>, ApiError>> + Send + 'a>>;
}
