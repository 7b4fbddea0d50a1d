use ethers_core::types::{Block, Transaction, TransactionReceipt, H256, U64};

use super::{log_failure, Resolver};
use crate::error::GatewayError;
use crate::format::{address_hex, compute_fee, format_timestamp, hash_hex, input_hex};
use crate::models::{TransactionView, TxStatus};
use crate::signer::recover_sender;

/// Accepts exactly 32 bytes of hex, with or without a `0x` prefix.
pub fn parse_tx_hash(raw: &str) -> Result<H256, GatewayError> {
    let digits = raw
        .strip_prefix("0x")
        .or_else(|| raw.strip_prefix("0X"))
        .unwrap_or(raw);
    let invalid = || {
        GatewayError::InvalidInput(format!(
            "transaction hash {raw:?} is not 32 bytes of hex"
        ))
    };
    if digits.len() != 64 {
        return Err(invalid());
    }
    let mut bytes = [0u8; 32];
    hex::decode_to_slice(digits, &mut bytes).map_err(|_| invalid())?;
    Ok(H256::from(bytes))
}

pub fn tx_status(receipt_status: Option<U64>) -> TxStatus {
    if receipt_status == Some(U64::from(1u64)) {
        TxStatus::Success
    } else {
        TxStatus::Fail
    }
}

/// Combines a transaction with its receipt and the block the receipt points at.
pub fn transaction_view(
    tx: &Transaction,
    receipt: &TransactionReceipt,
    block: &Block<H256>,
) -> Result<TransactionView, GatewayError> {
    let block_number = receipt
        .block_number
        .ok_or_else(|| GatewayError::Consistency("receipt has no block number".to_string()))?
        .as_u64();
    let fetched = block.number.map(|n| n.as_u64());
    if fetched != Some(block_number) {
        return Err(GatewayError::Consistency(format!(
            "receipt names block {block_number} but its block hash resolves to {fetched:?}"
        )));
    }

    let from = recover_sender(tx)?;

    let gas_used = receipt
        .gas_used
        .ok_or_else(|| GatewayError::Consistency("receipt has no gas used".to_string()))?;
    let gas_price = tx
        .gas_price
        .or(receipt.effective_gas_price)
        .or(tx.max_fee_per_gas)
        .ok_or_else(|| GatewayError::Consistency("transaction has no gas price".to_string()))?;

    Ok(TransactionView {
        tx_hash: hash_hex(tx.hash),
        status: tx_status(receipt.status),
        block_number,
        timestamp: format_timestamp(block.timestamp)?,
        from: address_hex(from),
        to: tx.to.map(address_hex),
        value: tx.value.to_string(),
        tx_fee: compute_fee(gas_used, gas_price).to_string(),
        gas_price: gas_price.to_string(),
        input_data: input_hex(&tx.input),
    })
}

impl Resolver {
    #[tracing::instrument(name = "resolve_transaction", skip(self))]
    pub async fn resolve_transaction(&self, tx_hash: &str) -> Result<TransactionView, GatewayError> {
        let result = self.transaction_pipeline(tx_hash).await;
        match &result {
            Ok(view) => tracing::info!(tx = %view.tx_hash, "transaction info retrieved"),
            Err(err) => log_failure(err),
        }
        result
    }

    async fn transaction_pipeline(&self, raw: &str) -> Result<TransactionView, GatewayError> {
        let hash = parse_tx_hash(raw)?;

        let tx = self
            .fetch("fetch transaction", self.client.get_transaction(hash))
            .await?
            .ok_or_else(|| GatewayError::NotFound(format!("transaction {}", hash_hex(hash))))?;

        let receipt = self
            .fetch("fetch receipt", self.client.get_transaction_receipt(hash))
            .await?
            .ok_or_else(|| {
                GatewayError::NotFound(format!("receipt for transaction {}", hash_hex(hash)))
            })?;

        let block_hash = receipt
            .block_hash
            .ok_or_else(|| GatewayError::Consistency("receipt has no block hash".to_string()))?;
        let block = self
            .fetch("fetch block by hash", self.client.get_block_by_hash(block_hash))
            .await?
            .ok_or_else(|| {
                GatewayError::Consistency(format!(
                    "receipt block {} does not resolve",
                    hash_hex(block_hash)
                ))
            })?;

        transaction_view(&tx, &receipt, &block)
    }
}
