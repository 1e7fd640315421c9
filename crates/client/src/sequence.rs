//! Stale-response suppression for racing requests.
//!
//! When the UI fires overlapping requests for the same view (fast typing in a
//! search box, double navigation), only the newest response may be applied.
//! Callers take a [`Ticket`] before each request and check it when the
//! response arrives; tickets from superseded requests are refused.

use std::cell::Cell;

/// A claim on "the in-flight request as of when I started".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Issues monotonically increasing tickets and accepts only the newest.
#[derive(Debug, Default)]
pub struct RequestSequencer {
    latest: Cell<u64>,
}

impl RequestSequencer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request, superseding every ticket issued before.
    pub fn issue(&self) -> Ticket {
        let next = self.latest.get() + 1;
        self.latest.set(next);
        Ticket(next)
    }

    /// True when `ticket` is still the newest, i.e. its response should be
    /// applied. Stale tickets stay stale forever.
    #[must_use]
    pub fn accept(&self, ticket: &Ticket) -> bool {
        self.latest.get() == ticket.0
    }
}
