// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

use time::OffsetDateTime;
use zone_park_domain::{RequestId, RequestState, SlotId, ZoneId};

/// Default number of operations the rollback log retains.
pub const DEFAULT_ROLLBACK_CAPACITY: usize = 10;

/// The kind of reversible operation a rollback entry records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RollbackKind {
    /// A slot was allocated to a request. Undoing this cancels the
    /// request and frees the slot.
    Allocation,
    /// A request was cancelled. Undo is informational only: the slot must
    /// be manually reallocated.
    Cancellation,
    /// A request changed state (occupied or released). Undo is
    /// informational only: the prior state is reported, not restored.
    StateChange,
}

/// One reversible operation, recorded at the moment it happened.
///
/// Entries are immutable once created and are evicted only by the log's
/// capacity bound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollbackEntry {
    /// What kind of operation this records.
    pub kind: RollbackKind,
    /// The request the operation applied to.
    pub request_id: RequestId,
    /// The slot involved, for allocation entries.
    pub slot_id: Option<SlotId>,
    /// The zone owning the slot, for allocation entries.
    pub zone_id: Option<ZoneId>,
    /// The state the request was in before the operation, for state
    /// change entries.
    pub previous_state: Option<RequestState>,
    /// When the operation was recorded.
    pub recorded_at: OffsetDateTime,
}

impl RollbackEntry {
    /// Records a slot allocation.
    #[must_use]
    pub fn allocation(request_id: RequestId, slot_id: SlotId, zone_id: ZoneId) -> Self {
        Self {
            kind: RollbackKind::Allocation,
            request_id,
            slot_id: Some(slot_id),
            zone_id: Some(zone_id),
            previous_state: None,
            recorded_at: OffsetDateTime::now_utc(),
        }
    }

    /// Records a request cancellation.
    #[must_use]
    pub fn cancellation(request_id: RequestId) -> Self {
        Self {
            kind: RollbackKind::Cancellation,
            request_id,
            slot_id: None,
            zone_id: None,
            previous_state: None,
            recorded_at: OffsetDateTime::now_utc(),
        }
    }

    /// Records a request state change from `previous_state`.
    #[must_use]
    pub fn state_change(request_id: RequestId, previous_state: RequestState) -> Self {
        Self {
            kind: RollbackKind::StateChange,
            request_id,
            slot_id: None,
            zone_id: None,
            previous_state: Some(previous_state),
            recorded_at: OffsetDateTime::now_utc(),
        }
    }
}

/// A capacity-bounded LIFO history of reversible operations.
///
/// When the log is at capacity, pushing evicts the OLDEST entry (the
/// bottom of the stack) before the new entry lands on top. This keeps the
/// most recent operations undoable, which is the behavior collaborators
/// depend on: the bound limits history depth, not recency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollbackLog {
    entries: Vec<RollbackEntry>,
    capacity: usize,
}

impl RollbackLog {
    /// Creates a log with the default capacity.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_capacity(DEFAULT_ROLLBACK_CAPACITY)
    }

    /// Creates a log bounded to `capacity` entries.
    #[must_use]
    pub const fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity,
        }
    }

    /// Pushes an entry, evicting the oldest entry first when at capacity.
    pub fn push(&mut self, entry: RollbackEntry) {
        if self.entries.len() >= self.capacity {
            if self.capacity == 0 {
                return;
            }
            self.entries.remove(0);
        }
        self.entries.push(entry);
    }

    /// Removes and returns the most recently pushed entry.
    pub fn pop(&mut self) -> Option<RollbackEntry> {
        self.entries.pop()
    }

    /// Returns the most recently pushed entry without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&RollbackEntry> {
        self.entries.last()
    }

    /// Returns the number of entries currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the log holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the capacity bound.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Discards all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for RollbackLog {
    fn default() -> Self {
        Self::new()
    }
}
