//! Supersession of in-flight resolutions.
//!
//! Every configuration change that affects a column starts a new resolution
//! with [`ResolutionTracker::begin`]. A result is accepted only if its
//! [`Ticket`] is still the newest one for that column, so a slow lookup can
//! never overwrite the result of a faster, more recent one.

use std::collections::BTreeMap;

use roster_model::MappingResult;

/// Handle for one resolution attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    column: usize,
    generation: u64,
}

impl Ticket {
    pub fn column(&self) -> usize {
        self.column
    }
}

#[derive(Debug, Default)]
struct Slot {
    generation: u64,
    result: Option<MappingResult>,
}

/// Latest accepted [`MappingResult`] per column.
#[derive(Debug, Default)]
pub struct ResolutionTracker {
    slots: BTreeMap<usize, Slot>,
}

impl ResolutionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a resolution for `column`, superseding any in flight.
    ///
    /// The column's previous result is cleared; it no longer reflects the
    /// configuration.
    pub fn begin(&mut self, column: usize) -> Ticket {
        let slot = self.slots.entry(column).or_default();
        slot.generation += 1;
        slot.result = None;
        Ticket {
            column,
            generation: slot.generation,
        }
    }

    /// Store `result` if `ticket` is still current. Returns whether it was stored.
    pub fn complete(&mut self, ticket: Ticket, result: MappingResult) -> bool {
        match self.slots.get_mut(&ticket.column) {
            Some(slot) if slot.generation == ticket.generation => {
                slot.result = Some(result);
                true
            }
            _ => {
                tracing::debug!(column = ticket.column, "discarding stale resolution");
                false
            }
        }
    }

    /// Returns true if `ticket` has not been superseded.
    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.slots
            .get(&ticket.column)
            .is_some_and(|slot| slot.generation == ticket.generation)
    }

    pub fn result(&self, column: usize) -> Option<&MappingResult> {
        self.slots.get(&column).and_then(|slot| slot.result.as_ref())
    }

    /// Supersede everything, e.g. after the country or directory changed.
    pub fn invalidate_all(&mut self) {
        for slot in self.slots.values_mut() {
            slot.generation += 1;
            slot.result = None;
        }
    }
}
