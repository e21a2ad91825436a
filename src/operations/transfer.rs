// Ledger Transfer Operation
// This module contains the transfer_from operation logic.

use log::debug;

use crate::error::{LedgerError, LedgerResult};
use crate::events::{EventLog, LedgerEvent};
use crate::storage::LedgerStorage;
use crate::types::Address;

use super::validation::validate_recipient;
use super::{check_token_permission, OperationContext};

/// Transfer a token from its declared owner to a new owner
///
/// The caller must be the owner, the token's approved spender, or an
/// approved operator of the owner. Self-transfers are legal and still
/// clear the single-token approval.
///
/// # Parameters
/// - `storage`: Storage backend
/// - `ctx`: Operation context (caller)
/// - `from`: Declared current owner
/// - `to`: New owner address
/// - `token_id`: Token ID
/// - `events`: Event log
///
/// # Returns
/// - `Ok(())`: Success
/// - `Err(LedgerError)`: Error code
pub fn transfer_from<S: LedgerStorage + ?Sized>(
    storage: &mut S,
    ctx: &OperationContext,
    from: &Address,
    to: &Address,
    token_id: u64,
    events: &mut EventLog,
) -> LedgerResult<()> {
    // Step 1: Token must exist
    let mut token = storage
        .get_token(token_id)
        .ok_or(LedgerError::NonexistentToken)?;

    // Step 2: Declared owner must match the record
    if token.owner != *from {
        return Err(LedgerError::OwnerMismatch);
    }

    // Step 3: Recipient must be a real identity
    validate_recipient(to)?;

    // Step 4: Permission check
    check_token_permission(storage, &token, &ctx.caller)?;

    // Step 5: Apply
    storage.decrement_balance(from)?;
    storage.increment_balance(to)?;

    token.owner = *to;
    // Unconditional, also on self-transfer
    token.clear_approval();
    storage.set_token(&token)?;

    debug!("transferred token {} from {} to {}", token_id, from, to);

    events.record(LedgerEvent::Transfer {
        from: Some(*from),
        to: *to,
        token_id,
    });

    Ok(())
}
