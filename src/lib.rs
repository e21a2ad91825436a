// Capped Non-Fungible Token Ledger
// This crate provides a single-collection NFT ledger state machine.
//
// Features:
// - Minter-assigned token ids with a hard max-supply cap
// - Two-tier delegation: single-token approvals and blanket operators
// - Injected mint authorization policy (single admin by default)
// - Ordered notification events for indexing
// - Pluggable storage via a backend trait
//
// Module Structure:
// - error: Error codes and types
// - types: Core data structures (Address, Token, Collection)
// - events: Notification events and the ordered event log
// - policy: Mint authorization policies
// - storage: Storage trait, key helpers, in-memory backend
// - operations: Core operation logic (mint, transfer, approve, query)
// - ledger: Facade owning storage, policy and events

mod error;
mod events;
mod ledger;
pub mod operations;
mod policy;
mod storage;
mod types;

pub use error::*;
pub use events::*;
pub use ledger::*;
pub use policy::*;
pub use storage::*;
pub use types::*;
