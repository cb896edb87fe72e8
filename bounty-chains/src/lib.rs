//! Bounty Chains
//!
//! Chain and token processing core for the bounty platform.
//! Normalizes free-text chain labels, partitions wallet token batches by chain
//! support, validates addresses per chain family and folds the results into a
//! wallet token report with operator-facing recommendations.
//!
//! ## Architecture
//!
//! Every operation is a pure, single-pass transform over its inputs plus one
//! injected lookup table:
//!
//! - **Registry**: insertion-ordered chain label → platform identifier table
//! - **Normalizer**: label normalization, support lookup, "did you mean" info
//! - **Partition**: batch grouping by chain support with reconciling counters
//! - **Address**: per-chain-family format validation
//! - **Report**: composition of the above into one ephemeral report
//!
//! ## Usage
//!
//! ```rust
//! use bounty_chains::{build_report, ChainRegistry, Token};
//!
//! let registry = ChainRegistry::with_defaults();
//! let tokens = vec![Token::new(
//!     "Tether",
//!     "USDT",
//!     "0xdac17f958d2ee523a2206206994597c13d831ec7",
//!     Some("ethereum"),
//! )];
//! let report = build_report(&registry, &tokens);
//! assert_eq!(report.partition.summary.valid_tokens, 1);
//! ```

pub mod address;
pub mod error;
pub mod normalizer;
pub mod partition;
pub mod registry;
pub mod report;
pub mod token;

// Re-export the processing surface
pub use address::{validate_addresses, AddressValidation, EVM_CHAINS, NATIVE_TOKEN_ADDRESS};
pub use error::ChainError;
pub use normalizer::{describe, is_supported, normalize, ChainInfo, UNSPECIFIED_CHAIN};
pub use partition::{partition, ChainBucket, ChainBuckets, PartitionResult, PartitionSummary};
pub use registry::{ChainEntry, ChainRegistry};
pub use report::{build_report, ChainReport, TokenReport};
pub use token::Token;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
