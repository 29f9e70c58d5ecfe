//! Bookkeeping for coalescing bursts of input.
//!
//! Every input schedules a [`Ticket`]; the timer that fires for a ticket
//! only has an effect if no newer ticket has been scheduled in between.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

#[derive(Debug, Clone, Default)]
pub struct Debouncer {
    issued: u64,
    pending: Option<Ticket>,
}

impl Debouncer {
    pub fn schedule(&mut self) -> Ticket {
        self.issued += 1;
        let ticket = Ticket(self.issued);
        self.pending = Some(ticket);
        ticket
    }

    /// Returns `true` if the ticket is the latest one; it is consumed then.
    pub fn settle(&mut self, ticket: Ticket) -> bool {
        if self.pending == Some(ticket) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
