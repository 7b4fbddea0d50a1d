use ethers_core::types::transaction::eip2718::TypedTransaction;
use ethers_core::types::{Address, Signature, SignatureError, Transaction, U256, U64};

#[derive(Debug, thiserror::Error)]
pub enum SignerError {
    #[error("unsupported transaction type {0}")]
    UnsupportedType(u64),
    #[error("typed transaction carries no chain id")]
    MissingChainId,
    #[error("chain id {0} does not fit in 64 bits")]
    ChainIdOverflow(U256),
    #[error("chain id {declared} disagrees with signature chain id {signed}")]
    ChainIdMismatch { declared: u64, signed: u64 },
    #[error("invalid signature v value {0}")]
    InvalidV(u64),
    #[error(transparent)]
    Signature(#[from] SignatureError),
}

/// Recovers the sender of a signed transaction using the chain id it declares.
///
/// Legacy transactions take their chain id from `v` (EIP-155) and must agree
/// with the chain id the node reports, if any. EIP-2930 and EIP-1559
/// transactions must declare one.
pub fn recover_sender(tx: &Transaction) -> Result<Address, SignerError> {
    let tx_type = tx.transaction_type.map(|t| t.as_u64()).unwrap_or(0);
    let v = tx.v.as_u64();
    if let Some(declared) = tx.chain_id {
        u64::try_from(declared).map_err(|_| SignerError::ChainIdOverflow(declared))?;
    }

    let mut typed: TypedTransaction = tx.into();
    match tx_type {
        0 => {
            let signed = legacy_chain_id(v)?;
            if let (Some(declared), Some(signed)) = (tx.chain_id, signed) {
                if declared != U256::from(signed) {
                    return Err(SignerError::ChainIdMismatch {
                        declared: declared.low_u64(),
                        signed,
                    });
                }
            }
            // Unprotected transactions are hashed without a chain id.
            if let TypedTransaction::Legacy(req) = &mut typed {
                req.chain_id = signed.map(U64::from);
            }
        }
        1 | 2 => {
            if tx.chain_id.is_none() {
                return Err(SignerError::MissingChainId);
            }
            if !matches!(v, 0 | 1 | 27 | 28) {
                return Err(SignerError::InvalidV(v));
            }
        }
        other => return Err(SignerError::UnsupportedType(other)),
    }

    let signature = Signature { r: tx.r, s: tx.s, v };
    Ok(signature.recover(typed.sighash())?)
}

fn legacy_chain_id(v: u64) -> Result<Option<u64>, SignerError> {
    match v {
        27 | 28 => Ok(None),
        v if v >= 35 => Ok(Some((v - 35) / 2)),
        v => Err(SignerError::InvalidV(v)),
    }
}
