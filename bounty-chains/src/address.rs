//! Per-chain-family address validation
//!
//! Format checks only, scoped to what each chain family guarantees about its
//! address shape. EVM chains get the `0x` prefix + length rule, solana gets a
//! length window, and anything else passes through with a warning that no
//! chain-specific rule exists. Classification is total: every address ends up
//! in exactly one of `valid`/`invalid`, warnings are annotations on top.

use serde::{Deserialize, Serialize};

use crate::normalizer::normalize_label;

/// Chains sharing the EVM 20-byte `0x`-prefixed address format.
pub const EVM_CHAINS: [&str; 7] = [
    "ethereum",
    "arbitrum",
    "polygon",
    "bsc",
    "avalanche",
    "optimism",
    "base",
];

/// Conventional all-zero address for a chain's base asset.
pub const NATIVE_TOKEN_ADDRESS: &str = "0x0000000000000000000000000000000000000000";

const EVM_ADDRESS_LEN: usize = 42;
const SOLANA_ADDRESS_MIN_LEN: usize = 32;
const SOLANA_ADDRESS_MAX_LEN: usize = 44;

/// Address classification for one chain.
///
/// `valid` and `invalid` together cover every submitted address; entries hold
/// the trimmed lower-cased form except blank input, which keeps its original
/// value in `invalid`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AddressValidation {
    pub valid: Vec<String>,
    pub invalid: Vec<String>,
    pub warnings: Vec<String>,
}

/// Classify a batch of addresses against one chain's format rules.
pub fn validate_addresses<S: AsRef<str>>(addresses: &[S], chain: &str) -> AddressValidation {
    let chain = normalize_label(chain);
    let is_evm = EVM_CHAINS.contains(&chain.as_str());
    let mut result = AddressValidation::default();

    for address in addresses {
        let original = address.as_ref();
        let normalized = original.trim().to_lowercase();

        if normalized.is_empty() {
            result.invalid.push(original.to_string());
            continue;
        }

        if is_evm {
            if normalized == NATIVE_TOKEN_ADDRESS {
                result.warnings.push(format!(
                    "{normalized} is the native token placeholder for {chain}"
                ));
                result.valid.push(normalized);
            } else if normalized.starts_with("0x") && normalized.len() == EVM_ADDRESS_LEN {
                result.valid.push(normalized);
            } else {
                result.invalid.push(normalized);
            }
        } else if chain == "solana" {
            if (SOLANA_ADDRESS_MIN_LEN..=SOLANA_ADDRESS_MAX_LEN).contains(&normalized.len()) {
                result.valid.push(normalized);
            } else {
                result.invalid.push(normalized);
            }
        } else {
            result.warnings.push(format!(
                "no chain-specific validation for {chain}, accepting {normalized} as-is"
            ));
            result.valid.push(normalized);
        }
    }

    result
}
