// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::BTreeMap;

use zone_park_domain::{DomainError, ParkingRequest, RequestId, RequestState, ZoneId};

use crate::error::CoreError;

/// Ordered registry of every request ever created, terminal or not.
///
/// Requests are stored in creation order. Lookups are linear; the
/// registry doubles as the data source for all analytics queries.
#[derive(Debug, Clone, Default)]
pub struct RequestRegistry {
    requests: Vec<ParkingRequest>,
}

impl RequestRegistry {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            requests: Vec::new(),
        }
    }

    /// Adds a request to the registry.
    ///
    /// # Errors
    ///
    /// [`CoreError::DomainViolation`] if a request with the same id is
    /// already registered.
    pub fn add(&mut self, request: ParkingRequest) -> Result<(), CoreError> {
        if self.find(request.request_id()).is_some() {
            return Err(DomainError::DuplicateRequest(request.request_id().clone()).into());
        }
        self.requests.push(request);
        Ok(())
    }

    #[must_use]
    pub fn find(&self, request_id: &RequestId) -> Option<&ParkingRequest> {
        self.requests
            .iter()
            .find(|request| request.request_id() == request_id)
    }

    pub fn find_mut(&mut self, request_id: &RequestId) -> Option<&mut ParkingRequest> {
        self.requests
            .iter_mut()
            .find(|request| request.request_id() == request_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.requests.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    /// Requests in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &ParkingRequest> {
        self.requests.iter()
    }

    /// Number of requests currently in `state`.
    #[must_use]
    pub fn count_by_state(&self, state: RequestState) -> usize {
        self.requests
            .iter()
            .filter(|request| request.state() == state)
            .count()
    }

    /// Requests currently in `state`, in creation order.
    #[must_use]
    pub fn requests_in_state(&self, state: RequestState) -> Vec<&ParkingRequest> {
        self.requests
            .iter()
            .filter(|request| request.state() == state)
            .collect()
    }

    /// Requests that still occupy or may come to occupy a slot.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.requests
            .iter()
            .filter(|request| request.is_active())
            .count()
    }

    /// Sum of total costs over requests that reached allocation.
    ///
    /// Cancelled requests and requests still waiting contribute
    /// nothing.
    #[must_use]
    pub fn total_revenue(&self) -> f64 {
        self.requests
            .iter()
            .filter(|request| {
                matches!(
                    request.state(),
                    RequestState::Allocated | RequestState::Occupied | RequestState::Released
                )
            })
            .map(ParkingRequest::total_cost)
            .sum()
    }

    /// Number of requests that were placed outside their requested
    /// zone.
    #[must_use]
    pub fn cross_zone_count(&self) -> usize {
        self.requests
            .iter()
            .filter(|request| request.is_cross_zone())
            .count()
    }

    /// Mean occupancy duration in minutes over released requests.
    ///
    /// Returns `0.0` when no request has been released yet.
    #[must_use]
    pub fn average_duration(&self) -> f64 {
        let released: Vec<f64> = self
            .requests
            .iter()
            .filter(|request| request.state() == RequestState::Released)
            .map(ParkingRequest::duration_minutes)
            .collect();
        if released.is_empty() {
            return 0.0;
        }
        #[allow(clippy::cast_precision_loss)]
        let count = released.len() as f64;
        released.iter().sum::<f64>() / count
    }

    /// Request counts keyed by requested zone, in zone id order.
    #[must_use]
    pub fn zone_request_distribution(&self) -> BTreeMap<ZoneId, usize> {
        let mut distribution: BTreeMap<ZoneId, usize> = BTreeMap::new();
        for request in &self.requests {
            *distribution
                .entry(request.requested_zone_id().clone())
                .or_insert(0) += 1;
        }
        distribution
    }
}
