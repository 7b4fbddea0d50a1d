use chrono::{DateTime, SecondsFormat};
use ethers_core::types::{Address, H256, U256, U512};
use ethers_core::utils::to_checksum;

use crate::error::GatewayError;

/// Renders epoch seconds as an RFC 3339 UTC timestamp, e.g. `2023-11-14T22:13:20Z`.
pub fn format_timestamp(epoch_secs: U256) -> Result<String, GatewayError> {
    let secs = i64::try_from(epoch_secs)
        .ok()
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
        .ok_or_else(|| {
            GatewayError::Consistency(format!("block timestamp {epoch_secs} is out of range"))
        })?;
    Ok(secs.to_rfc3339_opts(SecondsFormat::Secs, true))
}

pub fn hash_hex(hash: H256) -> String {
    format!("0x{:x}", hash)
}

/// EIP-55 mixed-case address.
pub fn address_hex(addr: Address) -> String {
    to_checksum(&addr, None)
}

pub fn input_hex(input: &[u8]) -> String {
    format!("0x{}", hex::encode(input))
}

/// gasUsed × gasPrice. A 256×256-bit product always fits in 512 bits.
pub fn compute_fee(gas_used: U256, gas_price: U256) -> U512 {
    gas_used.full_mul(gas_price)
}
