// Ledger Mint Operation
// This module contains the mint operation logic.

use log::debug;

use crate::error::{LedgerError, LedgerResult};
use crate::events::{EventLog, LedgerEvent};
use crate::policy::MintPolicy;
use crate::storage::LedgerStorage;
use crate::types::{Address, Token};

use super::validation::{validate_recipient, validate_token_id};
use super::OperationContext;

/// Mint a token with a minter-assigned id
///
/// # Parameters
/// - `storage`: Storage backend
/// - `policy`: Mint authorization policy
/// - `ctx`: Operation context (caller)
/// - `to`: Recipient address
/// - `token_id`: Minter-assigned token ID
/// - `events`: Event log
///
/// # Returns
/// - `Ok(())`: Success
/// - `Err(LedgerError)`: Error code
pub fn mint<S, P>(
    storage: &mut S,
    policy: &P,
    ctx: &OperationContext,
    to: &Address,
    token_id: u64,
    events: &mut EventLog,
) -> LedgerResult<()>
where
    S: LedgerStorage + ?Sized,
    P: MintPolicy + ?Sized,
{
    // Step 1: Authorization
    if !policy.can_mint(&ctx.caller) {
        return Err(LedgerError::Unauthorized);
    }

    // Step 2: Input validation
    validate_token_id(token_id)?;

    // Step 3: Supply cap
    let mut collection = storage
        .get_collection()
        .ok_or(LedgerError::StorageError)?;
    collection.can_mint()?;

    // Step 4: Ids are never reused, even across owners
    if storage.token_exists(token_id) {
        return Err(LedgerError::TokenAlreadyExists);
    }

    // Step 5: Recipient must be a real identity
    validate_recipient(to)?;

    // Step 6: Apply
    collection.record_mint()?;
    let token = Token::new(token_id, *to);
    storage.set_token(&token)?;
    storage.set_collection(&collection)?;
    storage.increment_balance(to)?;

    debug!(
        "minted token {} to {} (supply {}/{})",
        token_id, to, collection.total_supply, collection.max_supply
    );

    events.record(LedgerEvent::Transfer {
        from: None,
        to: *to,
        token_id,
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::SingleAdmin;
    use crate::storage::MemoryStorage;
    use crate::types::Collection;

    fn addr(byte: u8) -> Address {
        Address::new([byte; 32])
    }

    fn setup(max_supply: u64) -> (MemoryStorage, SingleAdmin, Address, EventLog) {
        let mut storage = MemoryStorage::new();
        storage
            .set_collection(&Collection::new("MyNFT", "MNFT", max_supply).unwrap())
            .unwrap();
        let admin = addr(10);
        (storage, SingleAdmin::new(admin), admin, EventLog::new())
    }

    #[test]
    fn test_mint_success() {
        let (mut storage, policy, admin, mut events) = setup(1000);
        let owner = addr(1);

        let ctx = OperationContext::new(admin);
        mint(&mut storage, &policy, &ctx, &owner, 1, &mut events).unwrap();

        let token = storage.get_token(1).unwrap();
        assert_eq!(token.owner, owner);
        assert!(token.approved.is_none());

        assert_eq!(storage.get_balance(&owner), 1);
        assert_eq!(storage.get_collection().unwrap().total_supply, 1);

        assert_eq!(
            events.events(),
            &[LedgerEvent::Transfer {
                from: None,
                to: owner,
                token_id: 1,
            }]
        );
    }

    #[test]
    fn test_mint_not_admin_fails() {
        let (mut storage, policy, _admin, mut events) = setup(1000);
        let other = addr(1);

        let ctx = OperationContext::new(other);
        let result = mint(&mut storage, &policy, &ctx, &other, 1, &mut events);
        assert_eq!(result, Err(LedgerError::Unauthorized));
        assert!(events.is_empty());
    }

    #[test]
    fn test_mint_duplicate_id_fails() {
        let (mut storage, policy, admin, mut events) = setup(1000);
        let ctx = OperationContext::new(admin);

        mint(&mut storage, &policy, &ctx, &addr(1), 1, &mut events).unwrap();
        let result = mint(&mut storage, &policy, &ctx, &addr(2), 1, &mut events);
        assert_eq!(result, Err(LedgerError::TokenAlreadyExists));

        // First owner untouched
        assert_eq!(storage.get_token(1).unwrap().owner, addr(1));
        assert_eq!(storage.get_collection().unwrap().total_supply, 1);
    }

    #[test]
    fn test_mint_supply_exceeded() {
        let (mut storage, policy, admin, mut events) = setup(1);
        let ctx = OperationContext::new(admin);

        mint(&mut storage, &policy, &ctx, &addr(1), 1, &mut events).unwrap();
        let result = mint(&mut storage, &policy, &ctx, &addr(1), 2, &mut events);
        assert_eq!(result, Err(LedgerError::SupplyExceeded));
        assert_eq!(storage.get_collection().unwrap().total_supply, 1);
    }

    #[test]
    fn test_mint_zero_recipient_fails() {
        let (mut storage, policy, admin, mut events) = setup(1000);
        let ctx = OperationContext::new(admin);

        let result = mint(&mut storage, &policy, &ctx, &Address::ZERO, 1, &mut events);
        assert_eq!(result, Err(LedgerError::InvalidRecipient));
        assert!(!storage.token_exists(1));
    }

    #[test]
    fn test_mint_zero_token_id_fails() {
        let (mut storage, policy, admin, mut events) = setup(1000);
        let ctx = OperationContext::new(admin);

        let result = mint(&mut storage, &policy, &ctx, &addr(1), 0, &mut events);
        assert_eq!(result, Err(LedgerError::InvalidTokenId));
    }

    #[test]
    fn test_mint_ids_are_caller_assigned() {
        let (mut storage, policy, admin, mut events) = setup(1000);
        let ctx = OperationContext::new(admin);

        // Non-sequential ids are fine
        mint(&mut storage, &policy, &ctx, &addr(1), 42, &mut events).unwrap();
        mint(&mut storage, &policy, &ctx, &addr(1), 7, &mut events).unwrap();

        assert!(storage.token_exists(42));
        assert!(storage.token_exists(7));
        assert_eq!(storage.get_balance(&addr(1)), 2);
    }
}
