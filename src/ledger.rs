// Capped NFT Ledger - Facade
// The Ledger owns storage, mint policy and the event log, and exposes the
// full operation surface. Every mutating call fully validates, then fully
// applies, then appends its notification; mutating methods take `&mut
// self`, so calls are serialized by construction.

use super::error::LedgerResult;
use super::events::{EventLog, LedgerEvent};
use super::operations::{self, OperationContext};
use super::policy::{MintPolicy, SingleAdmin};
use super::storage::{LedgerStorage, MemoryStorage};
use super::types::{Address, Collection};

/// The capped non-fungible token ledger state machine
pub struct Ledger<S: LedgerStorage = MemoryStorage, P: MintPolicy = SingleAdmin> {
    storage: S,
    policy: P,
    events: EventLog,
}

impl Ledger<MemoryStorage, SingleAdmin> {
    /// Construct an in-memory ledger.
    ///
    /// The constructing caller becomes the single admin authorized to
    /// mint. Fails with `InvalidConfig` on a zero max supply or invalid
    /// name/symbol.
    pub fn new(admin: Address, name: &str, symbol: &str, max_supply: u64) -> LedgerResult<Self> {
        Self::with_policy(
            MemoryStorage::new(),
            SingleAdmin::new(admin),
            name,
            symbol,
            max_supply,
        )
    }
}

impl<S: LedgerStorage, P: MintPolicy> Ledger<S, P> {
    /// Construct a ledger over an injected storage backend and mint policy
    pub fn with_policy(
        mut storage: S,
        policy: P,
        name: &str,
        symbol: &str,
        max_supply: u64,
    ) -> LedgerResult<Self> {
        let collection = Collection::new(name, symbol, max_supply)?;
        storage.set_collection(&collection)?;

        Ok(Self {
            storage,
            policy,
            events: EventLog::new(),
        })
    }

    // ========================================
    // Mutating Operations
    // ========================================

    /// Mint a token with a minter-assigned id (policy-authorized callers only)
    pub fn mint(&mut self, caller: Address, to: Address, token_id: u64) -> LedgerResult<()> {
        let ctx = OperationContext::new(caller);
        operations::mint(
            &mut self.storage,
            &self.policy,
            &ctx,
            &to,
            token_id,
            &mut self.events,
        )
    }

    /// Transfer a token; caller must be owner, approved spender, or operator
    pub fn transfer_from(
        &mut self,
        caller: Address,
        from: Address,
        to: Address,
        token_id: u64,
    ) -> LedgerResult<()> {
        let ctx = OperationContext::new(caller);
        operations::transfer_from(&mut self.storage, &ctx, &from, &to, token_id, &mut self.events)
    }

    /// Set or revoke (`None`) the single-token approved spender
    pub fn approve(
        &mut self,
        caller: Address,
        spender: Option<Address>,
        token_id: u64,
    ) -> LedgerResult<()> {
        let ctx = OperationContext::new(caller);
        operations::approve(&mut self.storage, &ctx, spender, token_id, &mut self.events)
    }

    /// Grant or revoke blanket operator approval for all the caller's tokens
    pub fn set_approval_for_all(
        &mut self,
        caller: Address,
        operator: Address,
        approved: bool,
    ) -> LedgerResult<()> {
        let ctx = OperationContext::new(caller);
        operations::set_approval_for_all(
            &mut self.storage,
            &ctx,
            &operator,
            approved,
            &mut self.events,
        )
    }

    // ========================================
    // Read-Only Queries
    // ========================================

    /// Owner of a token; fails with `NonexistentToken` if unminted
    pub fn owner_of(&self, token_id: u64) -> LedgerResult<Address> {
        operations::owner_of(&self.storage, token_id)
    }

    /// Whether a token has been minted
    pub fn exists(&self, token_id: u64) -> bool {
        operations::exists(&self.storage, token_id)
    }

    /// Token count owned by an account (zero for never-seen accounts)
    pub fn balance_of(&self, account: &Address) -> u64 {
        operations::balance_of(&self.storage, account)
    }

    /// Approved spender of a token; fails with `NonexistentToken` if unminted
    pub fn get_approved(&self, token_id: u64) -> LedgerResult<Option<Address>> {
        operations::get_approved(&self.storage, token_id)
    }

    /// Whether `operator` holds blanket approval from `owner`
    pub fn is_approved_for_all(&self, owner: &Address, operator: &Address) -> bool {
        operations::is_approved_for_all(&self.storage, owner, operator)
    }

    /// Collection name
    pub fn name(&self) -> LedgerResult<String> {
        Ok(operations::get_collection(&self.storage)?.name)
    }

    /// Collection symbol
    pub fn symbol(&self) -> LedgerResult<String> {
        Ok(operations::get_collection(&self.storage)?.symbol)
    }

    /// Count of tokens ever minted
    pub fn total_supply(&self) -> LedgerResult<u64> {
        Ok(operations::get_collection(&self.storage)?.total_supply)
    }

    /// Ceiling on tokens ever minted
    pub fn max_supply(&self) -> LedgerResult<u64> {
        Ok(operations::get_collection(&self.storage)?.max_supply)
    }

    // ========================================
    // Events & Backend Access
    // ========================================

    /// All notifications raised so far, in emission order
    pub fn events(&self) -> &[LedgerEvent] {
        self.events.events()
    }

    /// Remove and return all pending notifications in emission order
    pub fn drain_events(&mut self) -> Vec<LedgerEvent> {
        self.events.drain()
    }

    /// Read access to the storage backend
    pub fn storage(&self) -> &S {
        &self.storage
    }
}
