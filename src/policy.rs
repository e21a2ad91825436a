// Capped NFT Ledger - Mint Authorization Policy
// Mint authority is an injected policy object rather than a hardcoded
// identity, so multi-admin or role-based schemes can be plugged in without
// touching the ledger itself.

use super::types::Address;

/// Decides which callers may mint
pub trait MintPolicy {
    /// Check whether `caller` is authorized to mint
    fn can_mint(&self, caller: &Address) -> bool;
}

/// Exactly one principal holds the mint capability, fixed at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SingleAdmin {
    admin: Address,
}

impl SingleAdmin {
    /// Create a policy with the given admin identity
    pub fn new(admin: Address) -> Self {
        Self { admin }
    }

    /// The admin identity
    pub fn admin(&self) -> &Address {
        &self.admin
    }
}

impl MintPolicy for SingleAdmin {
    fn can_mint(&self, caller: &Address) -> bool {
        *caller == self.admin
    }
}
