//! Token partitioning by chain support
//!
//! A wallet batch is heterogeneous: tokens from chains the platform prices,
//! tokens from chains it does not, tokens with no chain at all. Partitioning
//! never rejects a token; every input lands either in its chain's bucket or
//! under its label in the unsupported list, and the summary counters always
//! reconcile with the input length.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::normalizer::normalize;
use crate::registry::ChainRegistry;
use crate::token::Token;

/// Tokens that landed on one supported chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainBucket {
    pub chain: String,
    pub tokens: Vec<Token>,
}

/// Supported-chain buckets in first-seen order.
///
/// Serializes as a JSON map keyed by chain label, keeping first-seen order on
/// the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChainBuckets(Vec<ChainBucket>);

impl ChainBuckets {
    pub fn iter(&self) -> impl Iterator<Item = &ChainBucket> {
        self.0.iter()
    }

    pub fn chains(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|b| b.chain.as_str())
    }

    pub fn tokens_for(&self, chain: &str) -> Option<&[Token]> {
        self.0
            .iter()
            .find(|b| b.chain == chain)
            .map(|b| b.tokens.as_slice())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn bucket_mut(&mut self, chain: &str) -> &mut ChainBucket {
        if let Some(idx) = self.0.iter().position(|b| b.chain == chain) {
            &mut self.0[idx]
        } else {
            self.0.push(ChainBucket {
                chain: chain.to_string(),
                tokens: Vec::new(),
            });
            self.0.last_mut().unwrap()
        }
    }
}

impl Serialize for ChainBuckets {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for bucket in &self.0 {
            map.serialize_entry(&bucket.chain, &bucket.tokens)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ChainBuckets {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct BucketsVisitor;

        impl<'de> Visitor<'de> for BucketsVisitor {
            type Value = ChainBuckets;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of chain label to token list")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut buckets = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((chain, tokens)) = access.next_entry::<String, Vec<Token>>()? {
                    buckets.push(ChainBucket { chain, tokens });
                }
                Ok(ChainBuckets(buckets))
            }
        }

        deserializer.deserialize_map(BucketsVisitor)
    }
}

/// Token and chain counters for one partition pass.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PartitionSummary {
    pub total_tokens: usize,
    pub valid_tokens: usize,
    pub unsupported_tokens: usize,
    pub chains_supported: usize,
    pub chains_unsupported: usize,
}

/// Outcome of partitioning one token batch.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PartitionResult {
    pub valid_chains: ChainBuckets,
    pub unsupported_chains: Vec<String>,
    pub summary: PartitionSummary,
}

/// Partition a token batch by chain support.
///
/// Tokens are processed in input order. Buckets are created lazily, so both
/// bucket order and unsupported-label order reflect first occurrence.
/// `valid_tokens`/`unsupported_tokens` count tokens; the `chains_*` counters
/// count distinct chain keys.
pub fn partition(registry: &ChainRegistry, tokens: &[Token]) -> PartitionResult {
    let mut result = PartitionResult {
        summary: PartitionSummary {
            total_tokens: tokens.len(),
            ..PartitionSummary::default()
        },
        ..PartitionResult::default()
    };

    for token in tokens {
        let chain = normalize(token.chain.as_deref());
        if registry.is_supported(&chain) {
            result.valid_chains.bucket_mut(&chain).tokens.push(token.clone());
            result.summary.valid_tokens += 1;
        } else {
            if !result.unsupported_chains.contains(&chain) {
                result.unsupported_chains.push(chain);
            }
            result.summary.unsupported_tokens += 1;
        }
    }

    result.summary.chains_supported = result.valid_chains.len();
    result.summary.chains_unsupported = result.unsupported_chains.len();
    result
}
