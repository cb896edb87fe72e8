//! Token entity for the chain processing core

use serde::{Deserialize, Serialize};

/// A token as submitted by a wallet payload. Raw and untrusted: `chain` may be
/// absent or unrecognized and `address` is free text until validated.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Token {
    pub name: String,
    pub symbol: String,
    pub address: String,
    pub chain: Option<String>,
}

impl Token {
    pub fn new(
        name: impl Into<String>,
        symbol: impl Into<String>,
        address: impl Into<String>,
        chain: Option<&str>,
    ) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
            address: address.into(),
            chain: chain.map(str::to_string),
        }
    }
}
