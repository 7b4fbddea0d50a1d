use ethers_core::types::{Block, H256, U256};

use super::{log_failure, Resolver};
use crate::error::GatewayError;
use crate::format::{format_timestamp, hash_hex};
use crate::models::{BlockDetails, BlockStatus, BlockView};

/// Parses a non-negative base-10 block height. No sign, whitespace or radix prefix.
pub fn parse_block_number(raw: &str) -> Result<U256, GatewayError> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(GatewayError::InvalidInput(format!(
            "block number {raw:?} is not a non-negative base-10 integer"
        )));
    }
    // Only overflow is left; no chain reaches a height beyond 256 bits.
    U256::from_dec_str(raw).map_err(|_| GatewayError::NotFound(format!("block {raw}")))
}

/// Difficulty zero is read as finalized. This is a post-merge heuristic, not a
/// finality query: a chain that always reports zero difficulty is always "finalized".
pub fn block_status(difficulty: U256) -> BlockStatus {
    if difficulty.is_zero() {
        BlockStatus::Finalized
    } else {
        BlockStatus::NotFinalized
    }
}

pub fn block_view(block: Block<H256>) -> Result<BlockView, GatewayError> {
    let block_number = block
        .number
        .ok_or_else(|| GatewayError::Consistency("block has no number".to_string()))?
        .as_u64();
    let block_hash = block
        .hash
        .ok_or_else(|| GatewayError::Consistency(format!("block {block_number} has no hash")))?;

    let transactions: Vec<String> = block.transactions.iter().copied().map(hash_hex).collect();

    Ok(BlockView {
        block_number,
        status: block_status(block.difficulty),
        timestamp: format_timestamp(block.timestamp)?,
        transaction_count: transactions.len(),
        transactions,
        withdrawals: block.withdrawals.as_ref().map_or(0, Vec::len),
        details: BlockDetails {
            block_hash: hash_hex(block_hash),
            parent_hash: hash_hex(block.parent_hash),
            state_root: hash_hex(block.state_root),
            nonce: block.nonce.map(|n| n.to_low_u64_be()).unwrap_or_default(),
        },
    })
}

impl Resolver {
    #[tracing::instrument(name = "resolve_block", skip(self))]
    pub async fn resolve_block(&self, block_number: &str) -> Result<BlockView, GatewayError> {
        let result = self.block_pipeline(block_number).await;
        match &result {
            Ok(view) => tracing::info!(block = view.block_number, "block info retrieved"),
            Err(err) => log_failure(err),
        }
        result
    }

    async fn block_pipeline(&self, raw: &str) -> Result<BlockView, GatewayError> {
        let height = parse_block_number(raw)?;
        let number =
            u64::try_from(height).map_err(|_| GatewayError::NotFound(format!("block {height}")))?;

        let block = self
            .fetch("fetch block by number", self.client.get_block_by_number(number))
            .await?
            .ok_or_else(|| GatewayError::NotFound(format!("block {number}")))?;

        let view = block_view(block)?;
        if view.block_number != number {
            return Err(GatewayError::Consistency(format!(
                "requested block {number} but node returned block {}",
                view.block_number
            )));
        }
        Ok(view)
    }
}
