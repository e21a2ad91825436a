// Capped NFT Ledger - Storage Layer
// This module defines the abstract storage interface, key helpers for
// byte-keyed backends, and the in-memory reference backend.
//
// Storage Key Structure:
// - Collection:        ldg:col
// - Token:             ldg:tok:<token_id>
// - Owner Balance:     ldg:own:<owner>
// - Operator Approval: ldg:opr:<owner><operator>

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

use super::error::{LedgerError, LedgerResult};
use super::types::{Address, Collection, Token};

// ========================================
// Storage Trait (for dependency injection)
// ========================================

/// Abstract storage interface for ledger operations.
/// Embedding systems provide concrete storage backends.
pub trait LedgerStorage {
    // Collection record
    fn get_collection(&self) -> Option<Collection>;
    fn set_collection(&mut self, collection: &Collection) -> LedgerResult<()>;

    // Token records
    fn get_token(&self, token_id: u64) -> Option<Token>;
    fn set_token(&mut self, token: &Token) -> LedgerResult<()>;
    fn token_exists(&self, token_id: u64) -> bool;

    // Balance accounting
    fn get_balance(&self, owner: &Address) -> u64;
    fn increment_balance(&mut self, owner: &Address) -> LedgerResult<u64>;
    fn decrement_balance(&mut self, owner: &Address) -> LedgerResult<u64>;

    // Operator approvals
    fn is_approved_for_all(&self, owner: &Address, operator: &Address) -> bool;
    fn set_approval_for_all(
        &mut self,
        owner: &Address,
        operator: &Address,
        approved: bool,
    ) -> LedgerResult<()>;
}

// ========================================
// Storage Key Prefixes
// ========================================

/// Storage key prefixes for byte-keyed backends
pub mod prefixes {
    /// Collection record key (single record per ledger)
    pub const COLLECTION: &[u8] = b"ldg:col";

    /// Token record prefix
    pub const TOKEN: &[u8] = b"ldg:tok:";

    /// Owner token balance prefix
    pub const OWNER_BALANCE: &[u8] = b"ldg:own:";

    /// Operator approval prefix
    pub const OPERATOR_APPROVAL: &[u8] = b"ldg:opr:";
}

// ========================================
// Storage Key Generation Functions
// ========================================

/// Generate storage key for the collection record
pub fn collection_key() -> Vec<u8> {
    prefixes::COLLECTION.to_vec()
}

/// Generate storage key for a token record
pub fn token_key(token_id: u64) -> Vec<u8> {
    let mut key = Vec::with_capacity(prefixes::TOKEN.len() + 8);
    key.extend_from_slice(prefixes::TOKEN);
    key.extend_from_slice(&token_id.to_be_bytes());
    key
}

/// Generate storage key for an owner balance
pub fn owner_balance_key(owner: &Address) -> Vec<u8> {
    let mut key = Vec::with_capacity(prefixes::OWNER_BALANCE.len() + 32);
    key.extend_from_slice(prefixes::OWNER_BALANCE);
    key.extend_from_slice(owner.as_bytes());
    key
}

/// Generate storage key for an operator approval
pub fn operator_approval_key(owner: &Address, operator: &Address) -> Vec<u8> {
    let mut key = Vec::with_capacity(prefixes::OPERATOR_APPROVAL.len() + 32 + 32);
    key.extend_from_slice(prefixes::OPERATOR_APPROVAL);
    key.extend_from_slice(owner.as_bytes());
    key.extend_from_slice(operator.as_bytes());
    key
}

// ========================================
// In-Memory Backend
// ========================================

/// In-memory reference backend.
///
/// Index maps keep iteration order deterministic, which makes state
/// snapshots reproducible across runs.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct MemoryStorage {
    collection: Option<Collection>,
    tokens: IndexMap<u64, Token>,
    balances: IndexMap<Address, u64>,
    operators: IndexMap<Address, IndexSet<Address>>,
}

impl MemoryStorage {
    /// Create an empty backend
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of token records held
    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    /// Sum of all recorded balances
    pub fn balance_total(&self) -> u64 {
        self.balances.values().sum()
    }
}

impl LedgerStorage for MemoryStorage {
    fn get_collection(&self) -> Option<Collection> {
        self.collection.clone()
    }

    fn set_collection(&mut self, collection: &Collection) -> LedgerResult<()> {
        self.collection = Some(collection.clone());
        Ok(())
    }

    fn get_token(&self, token_id: u64) -> Option<Token> {
        self.tokens.get(&token_id).cloned()
    }

    fn set_token(&mut self, token: &Token) -> LedgerResult<()> {
        self.tokens.insert(token.token_id, token.clone());
        Ok(())
    }

    fn token_exists(&self, token_id: u64) -> bool {
        self.tokens.contains_key(&token_id)
    }

    fn get_balance(&self, owner: &Address) -> u64 {
        self.balances.get(owner).copied().unwrap_or(0)
    }

    fn increment_balance(&mut self, owner: &Address) -> LedgerResult<u64> {
        let balance = self.balances.entry(*owner).or_insert(0);
        *balance = balance.checked_add(1).ok_or(LedgerError::Overflow)?;
        Ok(*balance)
    }

    fn decrement_balance(&mut self, owner: &Address) -> LedgerResult<u64> {
        let balance = self.balances.entry(*owner).or_insert(0);
        *balance = balance.checked_sub(1).ok_or(LedgerError::Overflow)?;
        Ok(*balance)
    }

    fn is_approved_for_all(&self, owner: &Address, operator: &Address) -> bool {
        self.operators
            .get(owner)
            .map(|set| set.contains(operator))
            .unwrap_or(false)
    }

    fn set_approval_for_all(
        &mut self,
        owner: &Address,
        operator: &Address,
        approved: bool,
    ) -> LedgerResult<()> {
        if approved {
            self.operators.entry(*owner).or_default().insert(*operator);
        } else if let Some(set) = self.operators.get_mut(owner) {
            set.swap_remove(operator);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(byte: u8) -> Address {
        Address::new([byte; 32])
    }

    #[test]
    fn test_storage_keys_distinct() {
        let owner = addr(1);
        let operator = addr(2);

        let keys = [
            collection_key(),
            token_key(1),
            token_key(2),
            owner_balance_key(&owner),
            owner_balance_key(&operator),
            operator_approval_key(&owner, &operator),
            operator_approval_key(&operator, &owner),
        ];

        let mut seen = std::collections::HashSet::new();
        for key in keys {
            assert!(seen.insert(key));
        }
    }

    #[test]
    fn test_token_storage() {
        let mut storage = MemoryStorage::new();
        assert!(!storage.token_exists(1));
        assert!(storage.get_token(1).is_none());

        let token = Token::new(1, addr(1));
        storage.set_token(&token).unwrap();

        assert!(storage.token_exists(1));
        assert_eq!(storage.get_token(1), Some(token));
        assert_eq!(storage.token_count(), 1);
    }

    #[test]
    fn test_balance_accounting() {
        let mut storage = MemoryStorage::new();
        let owner = addr(1);

        // Never-seen account has zero balance
        assert_eq!(storage.get_balance(&owner), 0);

        assert_eq!(storage.increment_balance(&owner).unwrap(), 1);
        assert_eq!(storage.increment_balance(&owner).unwrap(), 2);
        assert_eq!(storage.decrement_balance(&owner).unwrap(), 1);
        assert_eq!(storage.get_balance(&owner), 1);
        assert_eq!(storage.balance_total(), 1);

        // Underflow is an error, not a wrap
        storage.decrement_balance(&owner).unwrap();
        assert_eq!(
            storage.decrement_balance(&owner),
            Err(LedgerError::Overflow)
        );
    }

    #[test]
    fn test_operator_approvals_independent() {
        let mut storage = MemoryStorage::new();
        let owner = addr(1);
        let op_a = addr(2);
        let op_b = addr(3);

        storage.set_approval_for_all(&owner, &op_a, true).unwrap();
        assert!(storage.is_approved_for_all(&owner, &op_a));
        assert!(!storage.is_approved_for_all(&owner, &op_b));
        // Direction matters
        assert!(!storage.is_approved_for_all(&op_a, &owner));

        storage.set_approval_for_all(&owner, &op_a, false).unwrap();
        assert!(!storage.is_approved_for_all(&owner, &op_a));
    }

    #[test]
    fn test_memory_storage_serde() {
        let mut storage = MemoryStorage::new();
        storage
            .set_collection(&Collection::new("MyNFT", "MNFT", 1000).unwrap())
            .unwrap();
        storage.set_token(&Token::new(1, addr(1))).unwrap();
        storage.increment_balance(&addr(1)).unwrap();
        storage.set_approval_for_all(&addr(1), &addr(2), true).unwrap();

        let json = serde_json::to_string(&storage).unwrap();
        let back: MemoryStorage = serde_json::from_str(&json).unwrap();
        assert_eq!(back.get_token(1), storage.get_token(1));
        assert_eq!(back.get_balance(&addr(1)), 1);
        assert!(back.is_approved_for_all(&addr(1), &addr(2)));
    }
}
