// Ledger Query Operations
// This module contains read-only query functions. Queries that would hide
// a bug by defaulting (owner of an unminted id) fail instead; balance
// queries return zero for never-seen accounts.

use crate::error::{LedgerError, LedgerResult};
use crate::storage::LedgerStorage;
use crate::types::{Address, Collection};

/// Get the owner of a token
///
/// # Returns
/// - `Ok(Address)`: Owner address
/// - `Err(LedgerError)`: `NonexistentToken` if unminted
pub fn owner_of<S: LedgerStorage + ?Sized>(storage: &S, token_id: u64) -> LedgerResult<Address> {
    let token = storage
        .get_token(token_id)
        .ok_or(LedgerError::NonexistentToken)?;

    Ok(token.owner)
}

/// Check if a token has been minted
pub fn exists<S: LedgerStorage + ?Sized>(storage: &S, token_id: u64) -> bool {
    storage.token_exists(token_id)
}

/// Get the number of tokens owned by an account.
/// Never-seen accounts hold zero; this is not an error.
pub fn balance_of<S: LedgerStorage + ?Sized>(storage: &S, account: &Address) -> u64 {
    storage.get_balance(account)
}

/// Get the approved spender for a token
///
/// # Returns
/// - `Ok(Option<Address>)`: Approved spender, `None` if unset
/// - `Err(LedgerError)`: `NonexistentToken` if unminted
pub fn get_approved<S: LedgerStorage + ?Sized>(
    storage: &S,
    token_id: u64,
) -> LedgerResult<Option<Address>> {
    let token = storage
        .get_token(token_id)
        .ok_or(LedgerError::NonexistentToken)?;

    Ok(token.approved)
}

/// Check if an operator holds blanket approval from an owner
pub fn is_approved_for_all<S: LedgerStorage + ?Sized>(
    storage: &S,
    owner: &Address,
    operator: &Address,
) -> bool {
    storage.is_approved_for_all(owner, operator)
}

/// Get the collection record.
/// A constructed ledger always holds one; its absence is a backend fault.
pub fn get_collection<S: LedgerStorage + ?Sized>(storage: &S) -> LedgerResult<Collection> {
    storage.get_collection().ok_or(LedgerError::StorageError)
}

#[cfg(test)]
mod tests {
    use super::super::mint::mint;
    use super::super::OperationContext;
    use super::*;
    use crate::events::EventLog;
    use crate::policy::SingleAdmin;
    use crate::storage::MemoryStorage;

    fn addr(byte: u8) -> Address {
        Address::new([byte; 32])
    }

    fn setup() -> (MemoryStorage, Address) {
        let mut storage = MemoryStorage::new();
        storage
            .set_collection(&Collection::new("MyNFT", "MNFT", 1000).unwrap())
            .unwrap();
        let owner = addr(10);
        let policy = SingleAdmin::new(owner);
        let mut events = EventLog::new();
        let ctx = OperationContext::new(owner);
        mint(&mut storage, &policy, &ctx, &owner, 1, &mut events).unwrap();
        (storage, owner)
    }

    #[test]
    fn test_owner_of() {
        let (storage, owner) = setup();
        assert_eq!(owner_of(&storage, 1), Ok(owner));
        assert_eq!(owner_of(&storage, 999), Err(LedgerError::NonexistentToken));
    }

    #[test]
    fn test_exists() {
        let (storage, _) = setup();
        assert!(exists(&storage, 1));
        assert!(!exists(&storage, 2));
    }

    #[test]
    fn test_balance_of_unseen_account_is_zero() {
        let (storage, owner) = setup();
        assert_eq!(balance_of(&storage, &owner), 1);
        assert_eq!(balance_of(&storage, &addr(99)), 0);
    }

    #[test]
    fn test_get_approved() {
        let (storage, _) = setup();
        assert_eq!(get_approved(&storage, 1), Ok(None));
        assert_eq!(
            get_approved(&storage, 999),
            Err(LedgerError::NonexistentToken)
        );
    }

    #[test]
    fn test_get_collection() {
        let (storage, _) = setup();
        let collection = get_collection(&storage).unwrap();
        assert_eq!(collection.name, "MyNFT");
        assert_eq!(collection.symbol, "MNFT");
        assert_eq!(collection.max_supply, 1000);
        assert_eq!(collection.total_supply, 1);

        let empty = MemoryStorage::new();
        assert_eq!(get_collection(&empty), Err(LedgerError::StorageError));
    }
}
