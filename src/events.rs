// Capped NFT Ledger - Notification Events
// Every successful state transition appends an event for indexing.

use log::trace;
use serde::{Deserialize, Serialize};

use super::types::Address;

// ========================================
// Event Types
// ========================================

/// Notification raised by a successful ledger operation
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LedgerEvent {
    /// Token ownership changed. `from` is `None` for mints.
    Transfer {
        from: Option<Address>,
        to: Address,
        token_id: u64,
    },

    /// Single-token approval set or revoked (`spender` is `None` on revoke)
    Approval {
        owner: Address,
        spender: Option<Address>,
        token_id: u64,
    },

    /// Blanket operator approval granted or revoked
    ApprovalForAll {
        owner: Address,
        operator: Address,
        approved: bool,
    },
}

impl LedgerEvent {
    /// Get event type name for indexing
    pub fn event_type(&self) -> &'static str {
        match self {
            LedgerEvent::Transfer { .. } => "transfer",
            LedgerEvent::Approval { .. } => "approval",
            LedgerEvent::ApprovalForAll { .. } => "approval_for_all",
        }
    }
}

// ========================================
// Event Log
// ========================================

/// Ordered in-memory event log.
///
/// Events are appended in emission order; an indexing subsystem reads or
/// drains them in the same order.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct EventLog {
    events: Vec<LedgerEvent>,
}

impl EventLog {
    /// Create an empty event log
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event
    pub fn record(&mut self, event: LedgerEvent) {
        trace!("event: {} {:?}", event.event_type(), event);
        self.events.push(event);
    }

    /// All recorded events in emission order
    pub fn events(&self) -> &[LedgerEvent] {
        &self.events
    }

    /// Remove and return all recorded events in emission order
    pub fn drain(&mut self) -> Vec<LedgerEvent> {
        std::mem::take(&mut self.events)
    }

    /// Number of recorded events
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the log is empty
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
