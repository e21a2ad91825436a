// Ledger Approval Operations
// This module contains single-token approval and blanket operator approval.

use log::debug;

use crate::error::{LedgerError, LedgerResult};
use crate::events::{EventLog, LedgerEvent};
use crate::storage::LedgerStorage;
use crate::types::Address;

use super::OperationContext;

/// Set or revoke the single-token approved spender
///
/// The caller must be the token's owner or an approved operator of the
/// owner. Passing `None` revokes the approval.
///
/// # Parameters
/// - `storage`: Storage backend
/// - `ctx`: Operation context (caller)
/// - `spender`: Delegate to approve, or `None` to revoke
/// - `token_id`: Token ID
/// - `events`: Event log
///
/// # Returns
/// - `Ok(())`: Success
/// - `Err(LedgerError)`: Error code
pub fn approve<S: LedgerStorage + ?Sized>(
    storage: &mut S,
    ctx: &OperationContext,
    spender: Option<Address>,
    token_id: u64,
    events: &mut EventLog,
) -> LedgerResult<()> {
    let mut token = storage
        .get_token(token_id)
        .ok_or(LedgerError::NonexistentToken)?;

    let owner = token.owner;
    if ctx.caller != owner && !storage.is_approved_for_all(&owner, &ctx.caller) {
        return Err(LedgerError::Unauthorized);
    }

    token.approved = spender;
    storage.set_token(&token)?;

    debug!(
        "approval on token {}: {}",
        token_id,
        spender.map(|s| s.to_string()).unwrap_or_else(|| "revoked".to_string())
    );

    events.record(LedgerEvent::Approval {
        owner,
        spender,
        token_id,
    });

    Ok(())
}

/// Grant or revoke blanket operator approval for all of the caller's tokens
///
/// The approval covers tokens currently owned and tokens acquired later,
/// and survives transfers until revoked.
///
/// # Parameters
/// - `storage`: Storage backend
/// - `ctx`: Operation context (caller, i.e. the granting owner)
/// - `operator`: Operator address (must differ from the caller)
/// - `approved`: Grant or revoke
/// - `events`: Event log
///
/// # Returns
/// - `Ok(())`: Success
/// - `Err(LedgerError)`: Error code
pub fn set_approval_for_all<S: LedgerStorage + ?Sized>(
    storage: &mut S,
    ctx: &OperationContext,
    operator: &Address,
    approved: bool,
    events: &mut EventLog,
) -> LedgerResult<()> {
    if *operator == ctx.caller {
        return Err(LedgerError::InvalidOperator);
    }

    storage.set_approval_for_all(&ctx.caller, operator, approved)?;

    debug!(
        "operator approval: {} -> {} = {}",
        ctx.caller, operator, approved
    );

    events.record(LedgerEvent::ApprovalForAll {
        owner: ctx.caller,
        operator: *operator,
        approved,
    });

    Ok(())
}
