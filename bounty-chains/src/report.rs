//! Wallet token report builder
//!
//! One partition pass over the batch, then one chain description and one
//! address validation per distinct chain seen, folded into a report with
//! operator-facing recommendation lines. The report is ephemeral: recomputed
//! per call, never persisted, and building it twice over the same batch yields
//! structurally identical output.

use serde::{Deserialize, Serialize};

use crate::address::{validate_addresses, AddressValidation};
use crate::normalizer::{describe, ChainInfo};
use crate::partition::{partition, PartitionResult};
use crate::registry::ChainRegistry;
use crate::token::Token;

/// Per-chain slice of a report: what the platform knows about the chain plus
/// the address classification of the tokens that landed on it. Unsupported
/// chains carry an empty validation since their tokens were never bucketed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChainReport {
    pub chain: String,
    pub info: ChainInfo,
    pub addresses: AddressValidation,
}

/// Full report over one wallet token batch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenReport {
    pub partition: PartitionResult,
    pub chains: Vec<ChainReport>,
    pub recommendations: Vec<String>,
}

/// Build the report for one token batch.
///
/// Chain order is supported buckets first (first-seen order), then unsupported
/// labels (first-occurrence order). Recommendation order is fixed: unsupported
/// chains, then priceable tokens, then per-chain invalid addresses; zero-count
/// lines are omitted.
pub fn build_report(registry: &ChainRegistry, tokens: &[Token]) -> TokenReport {
    let partition = partition(registry, tokens);
    let mut chains = Vec::with_capacity(partition.valid_chains.len() + partition.unsupported_chains.len());

    for bucket in partition.valid_chains.iter() {
        let addresses: Vec<&str> = bucket.tokens.iter().map(|t| t.address.as_str()).collect();
        chains.push(ChainReport {
            chain: bucket.chain.clone(),
            info: describe(registry, Some(&bucket.chain)),
            addresses: validate_addresses(&addresses, &bucket.chain),
        });
    }
    for label in &partition.unsupported_chains {
        chains.push(ChainReport {
            chain: label.clone(),
            info: describe(registry, Some(label)),
            addresses: validate_addresses::<&str>(&[], label),
        });
    }

    let recommendations = build_recommendations(&partition, &chains);

    log::debug!(
        "token report: {} token(s), {} supported chain(s), {} unsupported chain(s)",
        partition.summary.total_tokens,
        partition.summary.chains_supported,
        partition.summary.chains_unsupported
    );

    TokenReport {
        partition,
        chains,
        recommendations,
    }
}

fn build_recommendations(partition: &PartitionResult, chains: &[ChainReport]) -> Vec<String> {
    let mut lines = Vec::new();

    if !partition.unsupported_chains.is_empty() {
        lines.push(format!(
            "{} unsupported chain(s): {} - tokens on these chains cannot be priced",
            partition.unsupported_chains.len(),
            partition.unsupported_chains.join(", ")
        ));
    }

    if partition.summary.valid_tokens > 0 {
        lines.push(format!(
            "{} token(s) across {} supported chain(s) are ready for pricing",
            partition.summary.valid_tokens, partition.summary.chains_supported
        ));
    }

    for report in chains {
        if !report.addresses.invalid.is_empty() {
            lines.push(format!(
                "{} invalid address(es) on {} - review before resubmitting",
                report.addresses.invalid.len(),
                report.chain
            ));
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::NATIVE_TOKEN_ADDRESS;
    use crate::normalizer::UNSPECIFIED_CHAIN;

    #[test]
    fn test_end_to_end_wallet_batch() {
        let registry = ChainRegistry::with_defaults();
        let arbitrum_usdt = "0xfd086bc7cd5c481dcc9c85ebe478a1c0b69fcbb9";
        assert_eq!(arbitrum_usdt.len(), 42);
        let tokens = vec![
            Token::new("Tether", "USDT", arbitrum_usdt, Some("arbitrum")),
            Token::new("Ether", "ETH", NATIVE_TOKEN_ADDRESS, Some("ethereum")),
            Token::new(
                "Wrapped SOL",
                "WSOL",
                "So11111111111111111111111111111111111111112",
                Some("solana"),
            ),
            Token::new("Mystery", "MYS", "0x123", Some("unknown-chain")),
        ];

        let report = build_report(&registry, &tokens);

        assert_eq!(report.partition.summary.total_tokens, 4);
        assert_eq!(report.partition.summary.valid_tokens, 3);
        assert_eq!(report.partition.summary.unsupported_tokens, 1);
        assert_eq!(
            report.partition.unsupported_chains,
            vec!["unknown-chain".to_string()]
        );

        // 42-char 0x literal on arbitrum classifies valid
        let arbitrum = report
            .chains
            .iter()
            .find(|c| c.chain == "arbitrum")
            .expect("arbitrum report missing");
        assert_eq!(arbitrum.addresses.valid, vec![arbitrum_usdt.to_string()]);

        // native placeholder on ethereum is valid with exactly one warning
        let ethereum = report
            .chains
            .iter()
            .find(|c| c.chain == "ethereum")
            .expect("ethereum report missing");
        assert_eq!(ethereum.addresses.valid.len(), 1);
        assert_eq!(ethereum.addresses.warnings.len(), 1);

        // recommendations lead with the unsupported-chain line
        assert!(report.recommendations[0].contains("unsupported chain"));
        assert!(report.recommendations[0].contains("unknown-chain"));
    }

    #[test]
    fn test_report_is_idempotent() {
        let registry = ChainRegistry::with_defaults();
        let tokens = vec![
            Token::new("Tether", "USDT", NATIVE_TOKEN_ADDRESS, Some("polygon")),
            Token::new("Nameless", "N", "addr", None),
        ];
        let first = build_report(&registry, &tokens);
        let second = build_report(&registry, &tokens);
        assert_eq!(first, second);
    }

    #[test]
    fn test_unsupported_chains_get_empty_validation_and_suggestions() {
        let registry = ChainRegistry::with_defaults();
        let tokens = vec![Token::new("Classic", "ETC", "0xabc", Some("ethereum-classic"))];
        let report = build_report(&registry, &tokens);

        assert_eq!(report.chains.len(), 1);
        let entry = &report.chains[0];
        assert_eq!(entry.chain, "ethereum-classic");
        assert!(!entry.info.is_supported);
        assert_eq!(entry.info.suggestions, Some(vec!["ethereum".to_string()]));
        // never address-validated, so the validation is empty
        assert_eq!(entry.addresses, AddressValidation::default());
    }

    #[test]
    fn test_recommendation_order_and_zero_count_omission() {
        let registry = ChainRegistry::with_defaults();
        let tokens = vec![
            Token::new("Mystery", "MYS", "x", None),
            Token::new("Good", "GD", NATIVE_TOKEN_ADDRESS, Some("base")),
            Token::new("Bad", "BD", "0xshort", Some("base")),
        ];
        let report = build_report(&registry, &tokens);

        assert_eq!(report.recommendations.len(), 3);
        assert!(report.recommendations[0].contains(UNSPECIFIED_CHAIN));
        assert!(report.recommendations[1].contains("ready for pricing"));
        assert!(report.recommendations[2].contains("invalid address(es) on base"));

        // all-valid batch emits no unsupported and no invalid lines
        let clean = build_report(
            &registry,
            &[Token::new("Good", "GD", NATIVE_TOKEN_ADDRESS, Some("base"))],
        );
        assert_eq!(clean.recommendations.len(), 1);
        assert!(clean.recommendations[0].contains("ready for pricing"));
    }

    #[test]
    fn test_empty_batch_has_no_recommendations() {
        let registry = ChainRegistry::with_defaults();
        let report = build_report(&registry, &[]);
        assert!(report.chains.is_empty());
        assert!(report.recommendations.is_empty());
    }

    #[test]
    fn test_input_not_mutated() {
        let registry = ChainRegistry::with_defaults();
        let tokens = vec![Token::new("Tether", "USDT", "0XABC", Some("  Ethereum"))];
        let before = tokens.clone();
        let _ = build_report(&registry, &tokens);
        assert_eq!(tokens, before);
    }
}
