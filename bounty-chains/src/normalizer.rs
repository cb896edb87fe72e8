//! Chain label normalization and support lookup
//!
//! Chain labels arrive as free text from wallet payloads: mixed case, padded,
//! sometimes missing entirely. Everything downstream works on the normalized
//! form, and a missing label maps to the explicit [`UNSPECIFIED_CHAIN`]
//! sentinel so it classifies as unsupported instead of leaking a stringified
//! placeholder into chain keys.

use serde::{Deserialize, Serialize};

use crate::registry::ChainRegistry;

/// Label a token carries when its chain field is absent.
pub const UNSPECIFIED_CHAIN: &str = "unspecified";

/// Upper bound on "did you mean" entries in [`ChainInfo::suggestions`].
const MAX_SUGGESTIONS: usize = 3;

/// What the platform knows about one chain label, derived per query.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChainInfo {
    pub original: Option<String>,
    pub normalized: String,
    pub platform_id: Option<String>,
    pub is_supported: bool,
    /// Present only for unsupported labels. Substring containment against the
    /// registry's labels in enumeration order, no similarity scoring.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<Vec<String>>,
}

/// Trim and lower-case a present chain label.
pub fn normalize_label(label: &str) -> String {
    label.trim().to_lowercase()
}

/// Normalize a possibly-absent chain label. Absent maps to
/// [`UNSPECIFIED_CHAIN`]; a present label is trimmed and lower-cased even if
/// that leaves it empty.
pub fn normalize(label: Option<&str>) -> String {
    match label {
        Some(label) => normalize_label(label),
        None => UNSPECIFIED_CHAIN.to_string(),
    }
}

/// Whether the registry resolves the normalized label to a platform id.
pub fn is_supported(registry: &ChainRegistry, normalized_label: &str) -> bool {
    registry.is_supported(normalized_label)
}

/// Normalize a label, look up its support, and attach suggestions for
/// unsupported labels.
pub fn describe(registry: &ChainRegistry, label: Option<&str>) -> ChainInfo {
    let normalized = normalize(label);
    let platform_id = registry.platform_id(&normalized).map(str::to_string);
    let is_supported = platform_id.is_some();

    let suggestions = if is_supported {
        None
    } else {
        Some(
            registry
                .labels()
                .filter(|supported| {
                    supported.contains(normalized.as_str()) || normalized.contains(*supported)
                })
                .take(MAX_SUGGESTIONS)
                .map(str::to_string)
                .collect(),
        )
    };

    ChainInfo {
        original: label.map(str::to_string),
        normalized,
        platform_id,
        is_supported,
        suggestions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_trims_and_lowercases() {
        assert_eq!(normalize(Some("  Ethereum ")), "ethereum");
        assert_eq!(normalize(Some("SOLANA")), "solana");
        assert_eq!(normalize(Some("")), "");
    }

    #[test]
    fn test_normalize_absent_label() {
        assert_eq!(normalize(None), UNSPECIFIED_CHAIN);
    }

    #[test]
    fn test_describe_supported_chain() {
        let registry = ChainRegistry::with_defaults();
        let info = describe(&registry, Some("Ethereum"));
        assert_eq!(info.original.as_deref(), Some("Ethereum"));
        assert_eq!(info.normalized, "ethereum");
        assert_eq!(info.platform_id.as_deref(), Some("ethereum"));
        assert!(info.is_supported);
        assert!(info.suggestions.is_none());
    }

    #[test]
    fn test_describe_unknown_chain() {
        let registry = ChainRegistry::with_defaults();
        let info = describe(&registry, Some("unknown-chain"));
        assert!(!info.is_supported);
        assert_eq!(info.platform_id, None);
        assert_eq!(info.suggestions, Some(vec![]));
    }

    #[test]
    fn test_describe_suggests_containing_labels() {
        let registry = ChainRegistry::with_defaults();
        // "ethereum-classic" contains "ethereum"
        let info = describe(&registry, Some("Ethereum-Classic"));
        assert!(!info.is_supported);
        assert_eq!(info.suggestions, Some(vec!["ethereum".to_string()]));
        // "sol" is contained in "solana"
        let info = describe(&registry, Some("sol"));
        assert_eq!(info.suggestions, Some(vec!["solana".to_string()]));
    }

    #[test]
    fn test_describe_caps_suggestions_in_registry_order() {
        let registry = ChainRegistry::from_pairs([
            ("chain-d", "d"),
            ("chain-c", "c"),
            ("chain-b", "b"),
            ("chain-a", "a"),
        ])
        .expect("from_pairs failed");
        let info = describe(&registry, Some("chain"));
        assert_eq!(
            info.suggestions,
            Some(vec![
                "chain-d".to_string(),
                "chain-c".to_string(),
                "chain-b".to_string(),
            ])
        );
    }

    #[test]
    fn test_describe_absent_label_is_unsupported() {
        let registry = ChainRegistry::with_defaults();
        let info = describe(&registry, None);
        assert_eq!(info.original, None);
        assert_eq!(info.normalized, UNSPECIFIED_CHAIN);
        assert!(!info.is_supported);
    }
}
