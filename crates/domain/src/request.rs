// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Parking request lifecycle and cost tracking.
//!
//! A request moves `Requested -> Allocated -> Occupied -> Released`, with
//! `Cancelled` reachable from `Requested` or `Allocated` only. All guard
//! failures are reported as typed errors and leave both the request and
//! the slot unchanged.

use crate::error::DomainError;
use crate::ids::{RequestId, SlotId, VehicleId, ZoneId};
use crate::slot::ParkingSlot;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::OffsetDateTime;

/// Base cost for a same-zone allocation.
pub const BASE_PARKING_COST: f64 = 10.0;
/// Extra cost when the allocated zone is adjacent to the requested one.
pub const ADJACENT_ZONE_PENALTY: f64 = 3.0;
/// Extra cost when the allocated zone is neither requested nor adjacent.
pub const DISTANT_ZONE_PENALTY: f64 = 5.0;

/// Lifecycle state of a parking request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RequestState {
    /// Created, awaiting allocation.
    Requested,
    /// A slot has been assigned but the vehicle has not arrived.
    Allocated,
    /// The vehicle is parked in the assigned slot.
    Occupied,
    /// The vehicle has left and the slot has been freed. Terminal.
    Released,
    /// The request was withdrawn. Terminal.
    Cancelled,
}

impl RequestState {
    /// Returns the string representation of the state.
    ///
    /// This is the form used by the serialization contract.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Requested => "REQUESTED",
            Self::Allocated => "ALLOCATED",
            Self::Occupied => "OCCUPIED",
            Self::Released => "RELEASED",
            Self::Cancelled => "CANCELLED",
        }
    }

    /// Returns true if no further transitions are possible.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Released | Self::Cancelled)
    }
}

impl FromStr for RequestState {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "REQUESTED" => Ok(Self::Requested),
            "ALLOCATED" => Ok(Self::Allocated),
            "OCCUPIED" => Ok(Self::Occupied),
            "RELEASED" => Ok(Self::Released),
            "CANCELLED" => Ok(Self::Cancelled),
            _ => Err(DomainError::InvalidRequestState(s.to_string())),
        }
    }
}

impl std::fmt::Display for RequestState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A non-owning reference to an allocated slot.
///
/// Slots are owned by their areas; a request only records which slot it
/// occupies and in which zone, so the reference stays valid across
/// reconstruction from persisted state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotRef {
    /// The referenced slot.
    pub slot_id: SlotId,
    /// The zone owning the slot.
    pub zone_id: ZoneId,
}

/// One vehicle-parking attempt, tracked through its full lifecycle.
#[derive(Debug, Clone, PartialEq)]
pub struct ParkingRequest {
    request_id: RequestId,
    vehicle_id: VehicleId,
    requested_zone_id: ZoneId,
    allocated_slot: Option<SlotRef>,
    cross_zone: bool,
    adjacent_zone_used: bool,
    base_cost: f64,
    penalty_cost: f64,
    total_cost: f64,
    requested_at: OffsetDateTime,
    allocated_at: Option<OffsetDateTime>,
    released_at: Option<OffsetDateTime>,
    state: RequestState,
}

impl ParkingRequest {
    /// Creates a new request in the `Requested` state.
    #[must_use]
    pub fn new(request_id: RequestId, vehicle_id: VehicleId, requested_zone_id: ZoneId) -> Self {
        Self {
            request_id,
            vehicle_id,
            requested_zone_id,
            allocated_slot: None,
            cross_zone: false,
            adjacent_zone_used: false,
            base_cost: BASE_PARKING_COST,
            penalty_cost: 0.0,
            total_cost: BASE_PARKING_COST,
            requested_at: OffsetDateTime::now_utc(),
            allocated_at: None,
            released_at: None,
            state: RequestState::Requested,
        }
    }

    /// Returns the request identifier.
    #[must_use]
    pub const fn request_id(&self) -> &RequestId {
        &self.request_id
    }

    /// Returns the identifier of the requesting vehicle.
    #[must_use]
    pub const fn vehicle_id(&self) -> &VehicleId {
        &self.vehicle_id
    }

    /// Returns the zone the vehicle asked for.
    #[must_use]
    pub const fn requested_zone_id(&self) -> &ZoneId {
        &self.requested_zone_id
    }

    /// Returns the allocated slot reference, if any.
    #[must_use]
    pub const fn allocated_slot(&self) -> Option<&SlotRef> {
        self.allocated_slot.as_ref()
    }

    /// Returns the current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> RequestState {
        self.state
    }

    /// Returns whether the allocation landed outside the requested zone.
    #[must_use]
    pub const fn is_cross_zone(&self) -> bool {
        self.cross_zone
    }

    /// Returns whether a cross-zone allocation used an adjacent zone.
    #[must_use]
    pub const fn adjacent_zone_used(&self) -> bool {
        self.adjacent_zone_used
    }

    /// Returns the base parking cost.
    #[must_use]
    pub const fn base_cost(&self) -> f64 {
        self.base_cost
    }

    /// Returns the cross-zone penalty cost (0.0 for same-zone parking).
    #[must_use]
    pub const fn penalty_cost(&self) -> f64 {
        self.penalty_cost
    }

    /// Returns the total cost (base + penalty).
    #[must_use]
    pub const fn total_cost(&self) -> f64 {
        self.total_cost
    }

    /// Returns when the request was created.
    #[must_use]
    pub const fn requested_at(&self) -> OffsetDateTime {
        self.requested_at
    }

    /// Returns when the slot was allocated, if it was.
    #[must_use]
    pub const fn allocated_at(&self) -> Option<OffsetDateTime> {
        self.allocated_at
    }

    /// Returns when the slot was released, if it was.
    #[must_use]
    pub const fn released_at(&self) -> Option<OffsetDateTime> {
        self.released_at
    }

    /// Returns whether the request is still in a non-terminal state.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(
            self.state,
            RequestState::Requested | RequestState::Allocated | RequestState::Occupied
        )
    }

    /// Binds the given slot to this request and moves to `Allocated`.
    ///
    /// Occupies the slot, records the cross-zone flags, computes the cost
    /// (base, plus the adjacent or distant penalty when `cross_zone`), and
    /// stamps the allocation time.
    ///
    /// # Errors
    ///
    /// * `DomainError::InvalidTransition` if the request is not `Requested`.
    /// * `DomainError::SlotUnavailable` if the slot is already occupied.
    ///
    /// Both failures leave the request and the slot unchanged.
    pub fn allocate(
        &mut self,
        slot: &mut ParkingSlot,
        cross_zone: bool,
        adjacent: bool,
    ) -> Result<(), DomainError> {
        if self.state != RequestState::Requested {
            return Err(DomainError::InvalidTransition {
                request: self.request_id.clone(),
                from: self.state,
                action: "allocate",
            });
        }
        slot.occupy(self.vehicle_id.clone())?;

        self.allocated_slot = Some(SlotRef {
            slot_id: slot.slot_id().clone(),
            zone_id: slot.zone_id().clone(),
        });
        self.cross_zone = cross_zone;
        self.adjacent_zone_used = adjacent;
        self.base_cost = BASE_PARKING_COST;
        self.penalty_cost = if cross_zone {
            if adjacent {
                ADJACENT_ZONE_PENALTY
            } else {
                DISTANT_ZONE_PENALTY
            }
        } else {
            0.0
        };
        self.total_cost = self.base_cost + self.penalty_cost;
        self.allocated_at = Some(OffsetDateTime::now_utc());
        self.state = RequestState::Allocated;
        Ok(())
    }

    /// Marks the vehicle as parked, moving `Allocated -> Occupied`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTransition` if the request is not
    /// `Allocated`.
    pub fn mark_occupied(&mut self) -> Result<(), DomainError> {
        if self.state != RequestState::Allocated {
            return Err(DomainError::InvalidTransition {
                request: self.request_id.clone(),
                from: self.state,
                action: "mark occupied",
            });
        }
        self.state = RequestState::Occupied;
        Ok(())
    }

    /// Releases the slot, moving `Occupied -> Released`.
    ///
    /// Frees the slot and stamps the release time. `slot` must be the slot
    /// this request occupies.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTransition` if the request is not
    /// `Occupied`.
    pub fn mark_released(&mut self, slot: &mut ParkingSlot) -> Result<(), DomainError> {
        if self.state != RequestState::Occupied {
            return Err(DomainError::InvalidTransition {
                request: self.request_id.clone(),
                from: self.state,
                action: "release",
            });
        }
        slot.vacate();
        self.released_at = Some(OffsetDateTime::now_utc());
        self.state = RequestState::Released;
        Ok(())
    }

    /// Cancels the request.
    ///
    /// Legal from `Requested` or `Allocated` only. When cancelling an
    /// `Allocated` request the bound slot is freed; pass it as `slot`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTransition` if the request is already
    /// `Occupied`, `Released`, or `Cancelled`.
    pub fn cancel(&mut self, slot: Option<&mut ParkingSlot>) -> Result<(), DomainError> {
        if !matches!(
            self.state,
            RequestState::Requested | RequestState::Allocated
        ) {
            return Err(DomainError::InvalidTransition {
                request: self.request_id.clone(),
                from: self.state,
                action: "cancel",
            });
        }
        if self.state == RequestState::Allocated
            && let Some(slot) = slot
        {
            slot.vacate();
        }
        self.state = RequestState::Cancelled;
        Ok(())
    }

    /// Returns the parking duration in minutes.
    ///
    /// Measured from the allocation time (or the request time if the
    /// request was never allocated) to the release time. Zero for
    /// non-released requests.
    #[must_use]
    pub fn duration_minutes(&self) -> f64 {
        let Some(released_at) = self.released_at else {
            return 0.0;
        };
        if self.state != RequestState::Released {
            return 0.0;
        }
        let start: OffsetDateTime = self.allocated_at.unwrap_or(self.requested_at);
        (released_at - start).as_seconds_f64() / 60.0
    }

    /// Restores a request from persisted state, bypassing the transition
    /// guards.
    #[allow(clippy::too_many_arguments)]
    pub(crate) const fn restore(
        request_id: RequestId,
        vehicle_id: VehicleId,
        requested_zone_id: ZoneId,
        allocated_slot: Option<SlotRef>,
        cross_zone: bool,
        adjacent_zone_used: bool,
        base_cost: f64,
        penalty_cost: f64,
        total_cost: f64,
        requested_at: OffsetDateTime,
        allocated_at: Option<OffsetDateTime>,
        released_at: Option<OffsetDateTime>,
        state: RequestState,
    ) -> Self {
        Self {
            request_id,
            vehicle_id,
            requested_zone_id,
            allocated_slot,
            cross_zone,
            adjacent_zone_used,
            base_cost,
            penalty_cost,
            total_cost,
            requested_at,
            allocated_at,
            released_at,
            state,
        }
    }
}
