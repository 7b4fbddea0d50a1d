use std::time::Duration;

use async_trait::async_trait;
use ethers_core::types::{Block, BlockId, Transaction, TransactionReceipt, H256};
use ethers_providers::{Http, Middleware, Provider};
use url::Url;

/// Failure talking to the chain node. Absence of data is not an error: lookups
/// return `Ok(None)` for blocks or transactions the node does not know.
#[derive(Debug, thiserror::Error)]
pub enum ChainError {
    #[error("failed to build http client: {0}")]
    Client(#[from] reqwest::Error),
    #[error("rpc request failed: {0}")]
    Rpc(String),
}

/// Read-only view of a chain node, shared by every request.
#[async_trait]
pub trait ChainClient: Send + Sync {
    async fn chain_id(&self) -> Result<u64, ChainError>;

    async fn get_block_by_number(&self, number: u64) -> Result<Option<Block<H256>>, ChainError>;

    async fn get_block_by_hash(&self, hash: H256) -> Result<Option<Block<H256>>, ChainError>;

    async fn get_transaction(&self, hash: H256) -> Result<Option<Transaction>, ChainError>;

    async fn get_transaction_receipt(
        &self,
        hash: H256,
    ) -> Result<Option<TransactionReceipt>, ChainError>;
}

#[derive(Clone)]
pub struct EthClient {
    provider: Provider<Http>,
}

impl EthClient {
    /// Builds a pooled HTTP provider for `rpc_url` without touching the network.
    pub fn new(rpc_url: Url, timeout: Duration) -> Result<Self, ChainError> {
        let client = reqwest::Client::builder()
            .no_proxy()
            .timeout(timeout)
            .build()?;
        let transport = Http::new_with_client(rpc_url, client);
        let provider = Provider::new(transport);
        Ok(Self { provider })
    }

    /// Builds the provider and checks the node answers `eth_chainId`.
    pub async fn connect(rpc_url: Url, timeout: Duration) -> Result<Self, ChainError> {
        let client = Self::new(rpc_url.clone(), timeout)?;
        let chain_id = client.chain_id().await?;
        tracing::info!(%rpc_url, chain_id, "connected to chain node");
        Ok(client)
    }
}

fn rpc_err(err: ethers_providers::ProviderError) -> ChainError {
    ChainError::Rpc(err.to_string())
}

#[async_trait]
impl ChainClient for EthClient {
    async fn chain_id(&self) -> Result<u64, ChainError> {
        let id = self.provider.get_chainid().await.map_err(rpc_err)?;
        u64::try_from(id).map_err(|_| ChainError::Rpc(format!("chain id {id} exceeds u64")))
    }

    async fn get_block_by_number(&self, number: u64) -> Result<Option<Block<H256>>, ChainError> {
        self.provider
            .get_block(BlockId::Number(number.into()))
            .await
            .map_err(rpc_err)
    }

    async fn get_block_by_hash(&self, hash: H256) -> Result<Option<Block<H256>>, ChainError> {
        self.provider
            .get_block(BlockId::Hash(hash))
            .await
            .map_err(rpc_err)
    }

    async fn get_transaction(&self, hash: H256) -> Result<Option<Transaction>, ChainError> {
        self.provider.get_transaction(hash).await.map_err(rpc_err)
    }

    async fn get_transaction_receipt(
        &self,
        hash: H256,
    ) -> Result<Option<TransactionReceipt>, ChainError> {
        self.provider
            .get_transaction_receipt(hash)
            .await
            .map_err(rpc_err)
    }
}
