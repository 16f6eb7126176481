//! Error types for the Adobe Analytics API client.
//!
//! Every endpoint failure surfaces as [`Error::Request`] tagged with the
//! [`ErrorKind`] of the endpoint that raised it, so callers can match on the
//! kind instead of inspecting messages.

use crate::request::Params;
use strum::{EnumIter, IntoStaticStr};
use thiserror::Error;

/// Closed set of error kinds: one for initialization and one per operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr)]
pub enum ErrorKind {
    #[strum(serialize = "ERROR_SDK_INITIALIZATION")]
    SdkInitialization,
    #[strum(serialize = "ERROR_GET_CALCULATED_METRICS")]
    GetCalculatedMetrics,
    #[strum(serialize = "ERROR_GET_CALCULATED_METRIC_BY_ID")]
    GetCalculatedMetricById,
    #[strum(serialize = "ERROR_GET_COLLECTIONS")]
    GetCollections,
    #[strum(serialize = "ERROR_GET_COLLECTION_BY_ID")]
    GetCollectionById,
    #[strum(serialize = "ERROR_GET_DATE_RANGES")]
    GetDateRanges,
    #[strum(serialize = "ERROR_GET_DATE_RANGE_BY_ID")]
    GetDateRangeById,
    #[strum(serialize = "ERROR_GET_DIMENSIONS")]
    GetDimensions,
    #[strum(serialize = "ERROR_GET_DIMENSION_BY_ID")]
    GetDimensionById,
    #[strum(serialize = "ERROR_GET_METRICS")]
    GetMetrics,
    #[strum(serialize = "ERROR_GET_METRIC_BY_ID")]
    GetMetricById,
    #[strum(serialize = "ERROR_GET_REPORT")]
    GetReport,
    #[strum(serialize = "ERROR_GET_SEGMENTS")]
    GetSegments,
    #[strum(serialize = "ERROR_VALIDATE_SEGMENT")]
    ValidateSegment,
    #[strum(serialize = "ERROR_GET_USERS")]
    GetUsers,
    #[strum(serialize = "ERROR_GET_CURRENT_USER")]
    GetCurrentUser,
    #[strum(serialize = "ERROR_GET_USAGE_LOGS")]
    GetUsageLogs,
}

impl ErrorKind {
    /// Stable identifier, e.g. `ERROR_GET_METRICS`.
    pub fn code(self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Base error type for Analytics SDK operations.
#[derive(Error, Debug)]
pub enum Error {
    /// One or more required credentials were empty at initialization.
    #[error(
        "[AnalyticsSDK:ERROR_SDK_INITIALIZATION] SDK initialization error(s). Missing arguments: {}",
        .missing.join(", ")
    )]
    Initialization { missing: Vec<&'static str> },

    /// The API description could not be loaded.
    #[error("[AnalyticsSDK:ERROR_SDK_INITIALIZATION] invalid API description: {0}")]
    Description(#[source] serde_json::Error),

    /// The HTTP client could not be constructed.
    #[error("[AnalyticsSDK:ERROR_SDK_INITIALIZATION] failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),

    /// An endpoint call failed.
    #[error("[AnalyticsSDK:{kind}] {source}")]
    Request {
        kind: ErrorKind,
        params: Params,
        /// JSON body the call sent, for report and segment validation calls.
        body: Option<serde_json::Value>,
        #[source]
        source: TransportError,
    },
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Initialization { .. } | Error::Description(_) | Error::HttpClient(_) => {
                ErrorKind::SdkInitialization
            }
            Error::Request { kind, .. } => *kind,
        }
    }

    /// Parameters the failing call was made with, if any.
    pub fn params(&self) -> Option<&Params> {
        match self {
            Error::Request { params, .. } => Some(params),
            _ => None,
        }
    }

    /// Request body of the failing call, if it had one.
    pub fn body(&self) -> Option<&serde_json::Value> {
        match self {
            Error::Request { body, .. } => body.as_ref(),
            _ => None,
        }
    }

    /// HTTP status of the failed response, when the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Request {
                source: TransportError::Status { status, .. },
                ..
            } => Some(*status),
            _ => None,
        }
    }
}

/// Raised by the transport for a single request/response round-trip.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API returned a non-success status.
    #[error("{status} {message}")]
    Status {
        status: u16,
        message: String,
        response_data: Option<serde_json::Value>,
    },

    #[error("invalid response body: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("failed to serialize request body: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("operation {tag}.{operation_id} is not in the API description")]
    UnknownOperation { tag: String, operation_id: String },

    #[error("missing path parameter: {0}")]
    MissingPathParameter(String),

    #[error("invalid path parameter {name}: {value:?}")]
    InvalidPathParameter { name: String, value: String },

    #[error("invalid header value for {0}")]
    InvalidHeader(&'static str),
}

impl TransportError {
    pub fn status(
        status: u16,
        message: impl Into<String>,
        response_data: Option<serde_json::Value>,
    ) -> Self {
        Self::Status {
            status,
            message: message.into(),
            response_data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use strum::IntoEnumIterator;

    #[test]
    fn initialization_message_lists_all_missing_fields() {
        let err = Error::Initialization {
            missing: vec!["companyId", "token"],
        };
        assert_eq!(
            err.to_string(),
            "[AnalyticsSDK:ERROR_SDK_INITIALIZATION] SDK initialization error(s). Missing arguments: companyId, token"
        );
        assert_eq!(err.kind(), ErrorKind::SdkInitialization);
        assert!(err.params().is_none());
        assert!(err.body().is_none());
    }

    #[test]
    fn codes_are_unique() {
        let codes: HashSet<&str> = ErrorKind::iter().map(ErrorKind::code).collect();
        assert_eq!(codes.len(), ErrorKind::iter().count());
        assert!(codes.iter().all(|c| c.starts_with("ERROR_")));
    }

    #[test]
    fn request_error_carries_kind_params_and_status() {
        let err = Error::Request {
            kind: ErrorKind::GetMetrics,
            params: Params::new().with("rsid", "123"),
            body: None,
            source: TransportError::status(403, "Forbidden", None),
        };
        assert_eq!(err.kind(), ErrorKind::GetMetrics);
        assert_eq!(err.status(), Some(403));
        assert_eq!(err.params().and_then(|p| p.get("rsid")), Some("123"));
        assert_eq!(err.to_string(), "[AnalyticsSDK:ERROR_GET_METRICS] 403 Forbidden");
        assert!(std::error::Error::source(&err).is_some());
    }
}
