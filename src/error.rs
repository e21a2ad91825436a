// Capped NFT Ledger - Error Codes
// This module defines all error codes for ledger operations.
//
// Error Code Ranges:
// - 0: Success
// - 1-99: Configuration errors
// - 100-199: Token errors
// - 200-299: Permission errors
// - 300-399: Input validation errors
// - 400-499: Supply errors
// - 900-999: System errors

use thiserror::Error;

/// Ledger operation result type
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Ledger error type with numeric code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[repr(u64)]
pub enum LedgerError {
    // ========================================
    // Configuration errors (1-99)
    // ========================================
    #[error("Invalid configuration")]
    InvalidConfig = 1,

    // ========================================
    // Token errors (100-199)
    // ========================================
    #[error("Token does not exist")]
    NonexistentToken = 100,

    #[error("Token already exists")]
    TokenAlreadyExists = 101,

    #[error("Invalid token ID")]
    InvalidTokenId = 102,

    // ========================================
    // Permission errors (200-299)
    // ========================================
    #[error("Unauthorized")]
    Unauthorized = 200,

    #[error("Declared owner does not match actual owner")]
    OwnerMismatch = 201,

    // ========================================
    // Input validation errors (300-399)
    // ========================================
    #[error("Invalid recipient")]
    InvalidRecipient = 300,

    #[error("Invalid operator")]
    InvalidOperator = 301,

    // ========================================
    // Supply errors (400-499)
    // ========================================
    #[error("Max supply exceeded")]
    SupplyExceeded = 400,

    // ========================================
    // System errors (900-999)
    // ========================================
    #[error("Arithmetic overflow")]
    Overflow = 900,

    #[error("Storage error")]
    StorageError = 901,
}

impl LedgerError {
    /// Get the numeric error code
    #[inline]
    pub fn code(&self) -> u64 {
        *self as u64
    }

    /// Create error from numeric code
    pub fn from_code(code: u64) -> Option<Self> {
        match code {
            1 => Some(Self::InvalidConfig),
            100 => Some(Self::NonexistentToken),
            101 => Some(Self::TokenAlreadyExists),
            102 => Some(Self::InvalidTokenId),
            200 => Some(Self::Unauthorized),
            201 => Some(Self::OwnerMismatch),
            300 => Some(Self::InvalidRecipient),
            301 => Some(Self::InvalidOperator),
            400 => Some(Self::SupplyExceeded),
            900 => Some(Self::Overflow),
            901 => Some(Self::StorageError),
            _ => None,
        }
    }
}
