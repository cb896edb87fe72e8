//! Chain registry
//!
//! Read-only lookup table from a normalized chain label to the market-data
//! provider's platform identifier. The table is injected into the processing
//! paths instead of living behind a module-level global, so tests and callers
//! control exactly which chains count as supported.
//!
//! Enumeration order is insertion order. Suggestion output in
//! [`crate::normalizer::describe`] depends on that order being stable.

use serde::{Deserialize, Serialize};

use crate::error::ChainError;
use crate::normalizer::normalize_label;

/// A single supported chain and its market-data platform identifier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChainEntry {
    pub label: String,
    pub platform_id: String,
}

/// Insertion-ordered chain label → platform identifier lookup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChainRegistry {
    entries: Vec<ChainEntry>,
}

impl ChainRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Registry seeded with the chains the platform launched with.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for (label, platform_id) in [
            ("ethereum", "ethereum"),
            ("arbitrum", "arbitrum-one"),
            ("polygon", "polygon-pos"),
            ("bsc", "binance-smart-chain"),
            ("avalanche", "avalanche"),
            ("optimism", "optimistic-ethereum"),
            ("base", "base"),
            ("solana", "solana"),
            ("fantom", "fantom"),
        ] {
            // Labels above are already normalized, register cannot fail here
            let _ = registry.register(label, platform_id);
        }
        registry
    }

    /// Build a registry from `(label, platform_id)` pairs, e.g. a fetched
    /// asset-platform listing. Pair order becomes enumeration order.
    pub fn from_pairs<I, S, T>(pairs: I) -> Result<Self, ChainError>
    where
        I: IntoIterator<Item = (S, T)>,
        S: AsRef<str>,
        T: Into<String>,
    {
        let mut registry = Self::new();
        for (label, platform_id) in pairs {
            registry.register(label.as_ref(), platform_id)?;
        }
        Ok(registry)
    }

    /// Register a chain. The label is normalized before insertion; registering
    /// an existing label updates its platform identifier in place, keeping the
    /// original enumeration position.
    pub fn register(&mut self, label: &str, platform_id: impl Into<String>) -> Result<(), ChainError> {
        let normalized = normalize_label(label);
        if normalized.is_empty() {
            return Err(ChainError::registry("chain label cannot be empty"));
        }
        let platform_id = platform_id.into();
        if platform_id.is_empty() {
            return Err(ChainError::registry(format!(
                "platform identifier for '{normalized}' cannot be empty"
            )));
        }
        match self.entries.iter_mut().find(|e| e.label == normalized) {
            Some(entry) => entry.platform_id = platform_id,
            None => self.entries.push(ChainEntry {
                label: normalized,
                platform_id,
            }),
        }
        Ok(())
    }

    /// Platform identifier for a normalized chain label, if supported.
    pub fn platform_id(&self, normalized_label: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.label == normalized_label)
            .map(|e| e.platform_id.as_str())
    }

    /// Whether the normalized label resolves to a platform identifier.
    pub fn is_supported(&self, normalized_label: &str) -> bool {
        self.platform_id(normalized_label).is_some()
    }

    /// Supported labels in insertion order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.label.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
