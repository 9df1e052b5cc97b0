//! Single-slot, cancel-and-replace animation frame queue.
//!
//! At most one position update is pending. Submitting a new sample
//! supersedes the pending one: the caller cancels the returned frame and
//! requests a new one tagged with the returned ticket. When a frame fires,
//! `fire` hands back the sample only if the ticket is still current, so a
//! superseded callback that slipped through cancellation applies nothing.

/// Host-assigned animation frame handle (`requestAnimationFrame` id).
pub type FrameId = i32;

/// Identifies one submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug)]
struct Pending<S> {
    ticket: Ticket,
    frame: Option<FrameId>,
    sample: S,
}

/// The pending-update slot.
#[derive(Debug)]
pub struct FrameSlot<S> {
    next_ticket: u64,
    pending: Option<Pending<S>>,
}

impl<S> Default for FrameSlot<S> {
    fn default() -> Self {
        Self {
            next_ticket: 0,
            pending: None,
        }
    }
}

impl<S> FrameSlot<S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `sample`, replacing whatever was pending.
    ///
    /// Returns the ticket for the new frame and the superseded frame, which
    /// the caller must cancel.
    pub fn submit(&mut self, sample: S) -> (Ticket, Option<FrameId>) {
        let ticket = Ticket(self.next_ticket);
        self.next_ticket = self.next_ticket.wrapping_add(1);
        let superseded = self.pending.take().and_then(|p| p.frame);
        self.pending = Some(Pending {
            ticket,
            frame: None,
            sample,
        });
        (ticket, superseded)
    }

    /// Record the frame the host scheduled for `ticket`.
    pub fn bind(&mut self, ticket: Ticket, frame: FrameId) {
        if let Some(pending) = self.pending.as_mut().filter(|p| p.ticket == ticket) {
            pending.frame = Some(frame);
        }
    }

    /// Take the sample for a fired frame. Stale tickets yield nothing.
    pub fn fire(&mut self, ticket: Ticket) -> Option<S> {
        let current = self.pending.as_ref().is_some_and(|p| p.ticket == ticket);
        if current {
            self.pending.take().map(|p| p.sample)
        } else {
            None
        }
    }

    /// Drop the pending sample, returning its frame for cancellation.
    pub fn cancel(&mut self) -> Option<FrameId> {
        self.pending.take().and_then(|p| p.frame)
    }

    #[cfg(test)]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
