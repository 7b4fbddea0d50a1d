use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::chain::ChainError;
use crate::signer::SignerError;

/// Terminal failure of a block or transaction lookup.
///
/// Messages are safe to hand to clients; upstream error details stay in the logs.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("upstream unavailable: {message}")]
    UpstreamUnavailable {
        message: String,
        timed_out: bool,
        #[source]
        source: Option<ChainError>,
    },

    #[error("not found: {0}")]
    NotFound(String),

    #[error("failed to recover sender: {0}")]
    SignatureRecovery(#[from] SignerError),

    #[error("inconsistent chain data: {0}")]
    Consistency(String),
}

impl GatewayError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidInput(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::UpstreamUnavailable { timed_out: true, .. } => StatusCode::GATEWAY_TIMEOUT,
            Self::UpstreamUnavailable { .. } => StatusCode::BAD_GATEWAY,
            Self::SignatureRecovery(_) | Self::Consistency(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub(crate) fn timed_out(step: &str) -> Self {
        Self::UpstreamUnavailable {
            message: format!("{step} timed out"),
            timed_out: true,
            source: None,
        }
    }

    /// Keeps the node's error as `source` for logging; only `step` reaches the client.
    pub(crate) fn upstream(step: &str, err: ChainError) -> Self {
        Self::UpstreamUnavailable {
            message: format!("{step} failed"),
            timed_out: false,
            source: Some(err),
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_kinds_to_status_codes() {
        assert_eq!(
            GatewayError::InvalidInput("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            GatewayError::NotFound("x".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            GatewayError::timed_out("fetch block").status_code(),
            StatusCode::GATEWAY_TIMEOUT
        );
        assert_eq!(
            GatewayError::upstream("fetch block", ChainError::Rpc("boom".into())).status_code(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            GatewayError::from(SignerError::UnsupportedType(3)).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            GatewayError::Consistency("x".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn upstream_message_hides_transport_details() {
        let err = GatewayError::upstream(
            "fetch receipt",
            ChainError::Rpc("connection refused at 10.0.0.7".into()),
        );
        assert_eq!(err.to_string(), "upstream unavailable: fetch receipt failed");
        let source = std::error::Error::source(&err).map(ToString::to_string);
        assert_eq!(
            source.as_deref(),
            Some("rpc request failed: connection refused at 10.0.0.7")
        );
        assert!(std::error::Error::source(&GatewayError::timed_out("fetch block")).is_none());
    }
}
