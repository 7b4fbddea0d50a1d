use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BlockStatus {
    #[serde(rename = "finalized")]
    Finalized,
    #[serde(rename = "not finalized")]
    NotFinalized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TxStatus {
    Success,
    Fail,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockView {
    pub block_number: u64,
    pub status: BlockStatus,
    pub timestamp: String,
    pub transaction_count: usize,
    pub transactions: Vec<String>,
    pub withdrawals: usize,
    pub details: BlockDetails,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockDetails {
    pub block_hash: String,
    pub parent_hash: String,
    pub state_root: String,
    pub nonce: u64,
}

/// Monetary fields are decimal wei strings. `to` is `null` for contract creation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionView {
    pub tx_hash: String,
    pub status: TxStatus,
    pub block_number: u64,
    pub timestamp: String,
    pub from: String,
    pub to: Option<String>,
    pub value: String,
    pub tx_fee: String,
    pub gas_price: String,
    pub input_data: String,
}
