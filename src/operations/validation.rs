// Ledger Input Validation Helpers
// This module provides validation functions for operation inputs.

use crate::error::{LedgerError, LedgerResult};
use crate::types::Address;

/// Validate token ID (must be non-zero)
pub fn validate_token_id(token_id: u64) -> LedgerResult<()> {
    if token_id == 0 {
        return Err(LedgerError::InvalidTokenId);
    }
    Ok(())
}

/// Validate recipient address (must not be the null identity)
pub fn validate_recipient(recipient: &Address) -> LedgerResult<()> {
    if recipient.is_zero() {
        return Err(LedgerError::InvalidRecipient);
    }
    Ok(())
}
