// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::ids::{AreaId, RequestId, SlotId, VehicleId, ZoneId};
use crate::request::RequestState;

/// Errors that can occur during domain validation and state transitions.
///
/// Every variant is recoverable by the caller; a failed operation leaves
/// all domain structures unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Zone lookup miss.
    ZoneNotFound(ZoneId),
    /// Area lookup miss within a zone.
    AreaNotFound {
        /// The zone searched.
        zone: ZoneId,
        /// The missing area.
        area: AreaId,
    },
    /// Slot lookup miss within a zone.
    SlotNotFound {
        /// The zone searched.
        zone: ZoneId,
        /// The missing slot.
        slot: SlotId,
    },
    /// Vehicle lookup miss.
    VehicleNotFound(VehicleId),
    /// Request lookup miss.
    RequestNotFound(RequestId),
    /// A zone is already holding its maximum number of areas.
    AreaCapacityExceeded {
        /// The full zone.
        zone: ZoneId,
        /// The zone's area capacity.
        capacity: usize,
    },
    /// An area is already holding its maximum number of slots.
    SlotCapacityExceeded {
        /// The full area.
        area: AreaId,
        /// The area's slot capacity.
        capacity: usize,
    },
    /// A zone with this identifier already exists.
    DuplicateZone(ZoneId),
    /// An area with this identifier already exists in the zone.
    DuplicateArea {
        /// The zone.
        zone: ZoneId,
        /// The duplicate area identifier.
        area: AreaId,
    },
    /// A slot with this identifier already exists in the area.
    DuplicateSlot {
        /// The area.
        area: AreaId,
        /// The duplicate slot identifier.
        slot: SlotId,
    },
    /// A request with this identifier is already registered.
    DuplicateRequest(RequestId),
    /// A non-empty license plate is already registered to another vehicle.
    DuplicateLicensePlate(String),
    /// A zone cannot be adjacent to itself.
    SelfAdjacency(ZoneId),
    /// A request state-machine guard was violated.
    InvalidTransition {
        /// The request on which the transition was attempted.
        request: RequestId,
        /// The request's current state.
        from: RequestState,
        /// The attempted operation.
        action: &'static str,
    },
    /// The targeted slot is already occupied.
    SlotUnavailable(SlotId),
    /// A request state string could not be parsed.
    InvalidRequestState(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZoneNotFound(zone) => write!(f, "Zone {zone} not found"),
            Self::AreaNotFound { zone, area } => {
                write!(f, "Area {area} not found in zone {zone}")
            }
            Self::SlotNotFound { zone, slot } => {
                write!(f, "Slot {slot} not found in zone {zone}")
            }
            Self::VehicleNotFound(vehicle) => write!(f, "Vehicle {vehicle} not found"),
            Self::RequestNotFound(request) => write!(f, "Request {request} not found"),
            Self::AreaCapacityExceeded { zone, capacity } => {
                write!(f, "Zone {zone} is full: capacity of {capacity} areas reached")
            }
            Self::SlotCapacityExceeded { area, capacity } => {
                write!(f, "Area {area} is full: capacity of {capacity} slots reached")
            }
            Self::DuplicateZone(zone) => write!(f, "Zone {zone} already exists"),
            Self::DuplicateArea { zone, area } => {
                write!(f, "Area {area} already exists in zone {zone}")
            }
            Self::DuplicateSlot { area, slot } => {
                write!(f, "Slot {slot} already exists in area {area}")
            }
            Self::DuplicateRequest(request) => {
                write!(f, "Request {request} is already registered")
            }
            Self::DuplicateLicensePlate(plate) => {
                write!(f, "License plate '{plate}' is already registered")
            }
            Self::SelfAdjacency(zone) => {
                write!(f, "Zone {zone} cannot be adjacent to itself")
            }
            Self::InvalidTransition {
                request,
                from,
                action,
            } => {
                write!(
                    f,
                    "Cannot {action} request {request}: invalid transition from {from}"
                )
            }
            Self::SlotUnavailable(slot) => write!(f, "Slot {slot} is not available"),
            Self::InvalidRequestState(state) => {
                write!(f, "Invalid request state: {state}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
