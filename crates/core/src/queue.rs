// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::VecDeque;

use zone_park_domain::RequestId;

use crate::error::CoreError;

/// Default intake queue capacity.
pub const DEFAULT_QUEUE_CAPACITY: usize = 100;

/// Bounded FIFO intake queue of pending request ids.
///
/// Requests are processed strictly in arrival order. The queue holds
/// ids only; the requests themselves live in the request registry.
#[derive(Debug, Clone)]
pub struct RequestQueue {
    entries: VecDeque<RequestId>,
    capacity: usize,
}

impl RequestQueue {
    #[must_use]
    pub const fn new() -> Self {
        Self::with_capacity(DEFAULT_QUEUE_CAPACITY)
    }

    #[must_use]
    pub const fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            capacity,
        }
    }

    /// Appends a request id to the back of the queue.
    ///
    /// # Errors
    ///
    /// [`CoreError::QueueFull`] if the queue is at capacity. The queue
    /// is unchanged.
    pub fn enqueue(&mut self, request_id: RequestId) -> Result<(), CoreError> {
        if self.is_full() {
            return Err(CoreError::QueueFull {
                capacity: self.capacity,
            });
        }
        self.entries.push_back(request_id);
        Ok(())
    }

    /// Removes and returns the oldest pending request id.
    pub fn dequeue(&mut self) -> Option<RequestId> {
        self.entries.pop_front()
    }

    /// The oldest pending request id, without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&RequestId> {
        self.entries.front()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }

    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for RequestQueue {
    fn default() -> Self {
        Self::new()
    }
}
