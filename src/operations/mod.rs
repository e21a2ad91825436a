// Ledger Operations Module
// This module contains the core business logic for ledger operations.
//
// The operations are designed to be backend-agnostic:
// - Storage is abstracted via the LedgerStorage trait
// - The caller identity is passed in as an operation context
// - Events are appended to an injected event log

mod approval;
mod mint;
mod query;
mod transfer;
mod validation;

pub use approval::*;
pub use mint::*;
pub use query::*;
pub use transfer::*;
pub use validation::*;

use super::error::{LedgerError, LedgerResult};
use super::storage::LedgerStorage;
use super::types::{Address, Token};

// ========================================
// Operation Context
// ========================================

/// Context identifying the caller of an operation.
/// The identity is assumed to be already authenticated.
pub struct OperationContext {
    /// Current caller
    pub caller: Address,
}

impl OperationContext {
    /// Create a new operation context
    pub fn new(caller: Address) -> Self {
        Self { caller }
    }
}

// ========================================
// Permission Checking Utilities
// ========================================

/// Check if the caller may move a token.
/// Returns Ok(()) if authorized, Err otherwise.
pub fn check_token_permission<S: LedgerStorage + ?Sized>(
    storage: &S,
    token: &Token,
    caller: &Address,
) -> LedgerResult<()> {
    // Owner always has permission
    if token.owner == *caller {
        return Ok(());
    }

    // Single token approval
    if token.approved.as_ref() == Some(caller) {
        return Ok(());
    }

    // Blanket operator approval
    if storage.is_approved_for_all(&token.owner, caller) {
        return Ok(());
    }

    Err(LedgerError::Unauthorized)
}
