//! Request pipelines turning raw chain data into client-facing views.
//!
//! Both pipelines are straight-line: every upstream call is awaited in order,
//! bounded by the configured timeout, and the first failure ends the request.

mod block;
mod transaction;

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

pub use block::{block_view, parse_block_number};
pub use transaction::{parse_tx_hash, transaction_view};

use crate::chain::{ChainClient, ChainError};
use crate::error::GatewayError;

#[derive(Clone)]
pub struct Resolver {
    client: Arc<dyn ChainClient>,
    timeout: Duration,
}

impl Resolver {
    pub fn new(client: Arc<dyn ChainClient>, timeout: Duration) -> Self {
        Self { client, timeout }
    }

    async fn fetch<T, F>(&self, step: &'static str, call: F) -> Result<T, GatewayError>
    where
        F: Future<Output = Result<T, ChainError>>,
    {
        match tokio::time::timeout(self.timeout, call).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(err)) => Err(GatewayError::upstream(step, err)),
            Err(_) => Err(GatewayError::timed_out(step)),
        }
    }
}

fn log_failure(err: &GatewayError) {
    match err {
        GatewayError::InvalidInput(_) => tracing::debug!(error = %err, "rejected request"),
        GatewayError::NotFound(_) => tracing::info!(error = %err, "lookup found nothing"),
        GatewayError::UpstreamUnavailable {
            source: Some(cause),
            ..
        } => tracing::warn!(error = %err, cause = %cause, "lookup failed"),
        GatewayError::UpstreamUnavailable { source: None, .. } => {
            tracing::warn!(error = %err, "lookup failed")
        }
        GatewayError::SignatureRecovery(_) | GatewayError::Consistency(_) => {
            tracing::error!(error = %err, "lookup failed")
        }
    }
}
