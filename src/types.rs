// Capped NFT Ledger - Core Types
// This module defines the data structures held by the ledger.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::{LedgerError, LedgerResult};

// ========================================
// Protocol Constants
// ========================================

/// Maximum collection name length (bytes)
pub const MAX_NAME_LENGTH: usize = 64;

/// Maximum symbol length (bytes)
pub const MAX_SYMBOL_LENGTH: usize = 8;

// ========================================
// Address
// ========================================

/// Opaque 32-byte caller identity.
///
/// The ledger trusts these values as already authenticated; verifying them
/// (signatures, sessions) belongs to the embedding system. The all-zero
/// address is reserved as the null identity and is never a valid owner or
/// recipient. Absence of an identity inside ledger state is always
/// `Option<Address>`, never the zero address.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Address(#[serde(with = "hex::serde")] [u8; 32]);

impl Address {
    /// The reserved null identity
    pub const ZERO: Address = Address([0u8; 32]);

    /// Create an address from raw bytes
    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Check whether this is the reserved null identity
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

// ========================================
// Token
// ========================================

/// A minted token record.
///
/// A token exists only once minted; unminted ids have no record at all.
/// There is no burn path, so a record never goes away.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Token ID (minter-assigned, positive, never reused)
    pub token_id: u64,

    /// Current owner
    pub owner: Address,

    /// Single token approval (auto-cleared on every transfer)
    pub approved: Option<Address>,
}

impl Token {
    /// Create a freshly minted token record
    pub fn new(token_id: u64, owner: Address) -> Self {
        Self {
            token_id,
            owner,
            approved: None,
        }
    }

    /// Clear the single-token approval (called after transfer)
    pub fn clear_approval(&mut self) {
        self.approved = None;
    }
}

// ========================================
// Collection
// ========================================

/// Collection metadata and supply counters.
///
/// `name`, `symbol` and `max_supply` are fixed at construction.
/// `total_supply` counts tokens ever minted and is never decremented.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    /// Collection name (max 64 bytes)
    pub name: String,

    /// Symbol (max 8 bytes, uppercase ASCII)
    pub symbol: String,

    /// Maximum supply (ceiling on tokens ever minted)
    pub max_supply: u64,

    /// Current total supply (monotonic)
    pub total_supply: u64,
}

impl Collection {
    /// Create and validate collection metadata
    pub fn new(name: &str, symbol: &str, max_supply: u64) -> LedgerResult<Self> {
        let collection = Self {
            name: name.to_string(),
            symbol: symbol.to_string(),
            max_supply,
            total_supply: 0,
        };
        collection.validate()?;
        Ok(collection)
    }

    /// Validate the collection configuration
    pub fn validate(&self) -> LedgerResult<()> {
        if self.max_supply == 0 {
            return Err(LedgerError::InvalidConfig);
        }

        if self.name.is_empty() || self.name.len() > MAX_NAME_LENGTH {
            return Err(LedgerError::InvalidConfig);
        }

        if self.symbol.is_empty() || self.symbol.len() > MAX_SYMBOL_LENGTH {
            return Err(LedgerError::InvalidConfig);
        }
        if !self
            .symbol
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
        {
            return Err(LedgerError::InvalidConfig);
        }

        Ok(())
    }

    /// Check if one more token can be minted
    pub fn can_mint(&self) -> LedgerResult<()> {
        if self.total_supply >= self.max_supply {
            return Err(LedgerError::SupplyExceeded);
        }
        Ok(())
    }

    /// Count a freshly minted token
    pub fn record_mint(&mut self) -> LedgerResult<()> {
        self.total_supply = self
            .total_supply
            .checked_add(1)
            .ok_or(LedgerError::Overflow)?;
        Ok(())
    }
}
