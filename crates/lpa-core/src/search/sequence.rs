//! Request sequencing for search-as-you-type.
//!
//! Each query takes a ticket before it is sent. When its response arrives it
//! is only applied if no newer ticket was issued in the meantime.

use std::sync::atomic::{AtomicU64, Ordering};

/// Ticket identifying one issued query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestTicket(u64);

/// Monotonic ticket counter. Shared between concurrent queries of one widget.
#[derive(Debug, Default)]
pub struct SearchSequencer {
    latest: AtomicU64,
}

impl SearchSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a ticket newer than every ticket issued before it.
    pub fn issue(&self) -> RequestTicket {
        RequestTicket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// True if `ticket` is the most recently issued one.
    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }
}
