// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use zone_park_domain::{DomainError, ZoneId};

/// Errors that can occur during engine operations.
///
/// Every variant is recoverable; a failed operation leaves the engine
/// unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// The intake queue is at capacity.
    QueueFull {
        /// The queue's capacity bound.
        capacity: usize,
    },
    /// The intake queue holds no pending requests.
    QueueEmpty,
    /// No slot is available anywhere in the system.
    AllocationFailed {
        /// The zone the request asked for.
        requested_zone: ZoneId,
    },
    /// The rollback log holds no entries.
    NothingToRollback,
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::QueueFull { capacity } => {
                write!(f, "Request queue is full ({capacity} requests)")
            }
            Self::QueueEmpty => write!(f, "No pending requests in queue"),
            Self::AllocationFailed { requested_zone } => {
                write!(
                    f,
                    "No available slots in any zone for a request in zone {requested_zone}"
                )
            }
            Self::NothingToRollback => write!(f, "No operations to rollback"),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
