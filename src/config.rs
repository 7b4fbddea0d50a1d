use std::env;
use std::time::Duration;

use url::Url;

pub const DEFAULT_RPC_URL: &str = "https://endpoints.omniatech.io/v1/eth/sepolia/public";
const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct Config {
    pub eth_rpc_url: Url,
    pub http_bind_addr: String,
    pub upstream_timeout: Duration,
}

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("invalid ETH_RPC_URL {0:?}: {1}")]
    InvalidRpcUrl(String, url::ParseError),
    #[error("invalid UPSTREAM_TIMEOUT_SECS {0:?}: expected a positive number of seconds")]
    InvalidTimeout(String),
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(
            env::var("ETH_RPC_URL").ok(),
            env::var("HTTP_BIND").ok(),
            env::var("UPSTREAM_TIMEOUT_SECS").ok(),
        )
    }

    fn from_vars(
        rpc_url: Option<String>,
        bind: Option<String>,
        timeout_secs: Option<String>,
    ) -> Result<Self, ConfigError> {
        let raw_url = rpc_url.unwrap_or_else(|| DEFAULT_RPC_URL.to_string());
        let eth_rpc_url =
            Url::parse(&raw_url).map_err(|e| ConfigError::InvalidRpcUrl(raw_url.clone(), e))?;

        let http_bind_addr = bind.unwrap_or_else(|| "127.0.0.1:8080".to_string());
        let upstream_timeout = match timeout_secs {
            Some(raw) => parse_timeout(&raw)?,
            None => Duration::from_secs(DEFAULT_UPSTREAM_TIMEOUT_SECS),
        };

        Ok(Self {
            eth_rpc_url,
            http_bind_addr,
            upstream_timeout,
        })
    }
}

fn parse_timeout(raw: &str) -> Result<Duration, ConfigError> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ConfigError::InvalidTimeout(raw.to_string())),
    }
}
