// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::ids::{SlotId, VehicleId, ZoneId};

/// The smallest allocatable unit of parking.
///
/// A slot is owned exclusively by its area and mutated only through the
/// request lifecycle (allocation, release, cancellation).
///
/// # Invariant
///
/// `is_available() == false` iff an occupant vehicle is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParkingSlot {
    slot_id: SlotId,
    zone_id: ZoneId,
    is_available: bool,
    vehicle_id: Option<VehicleId>,
}

impl ParkingSlot {
    /// Creates a new available slot.
    #[must_use]
    pub const fn new(slot_id: SlotId, zone_id: ZoneId) -> Self {
        Self {
            slot_id,
            zone_id,
            is_available: true,
            vehicle_id: None,
        }
    }

    /// Returns the slot identifier.
    #[must_use]
    pub const fn slot_id(&self) -> &SlotId {
        &self.slot_id
    }

    /// Returns the identifier of the zone owning this slot.
    #[must_use]
    pub const fn zone_id(&self) -> &ZoneId {
        &self.zone_id
    }

    /// Returns whether the slot is free.
    #[must_use]
    pub const fn is_available(&self) -> bool {
        self.is_available
    }

    /// Returns the occupying vehicle, if any.
    #[must_use]
    pub const fn occupant(&self) -> Option<&VehicleId> {
        self.vehicle_id.as_ref()
    }

    /// Marks the slot occupied by the given vehicle.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::SlotUnavailable` if the slot is already taken;
    /// the slot is left unchanged.
    pub fn occupy(&mut self, vehicle_id: VehicleId) -> Result<(), DomainError> {
        if !self.is_available {
            return Err(DomainError::SlotUnavailable(self.slot_id.clone()));
        }
        self.is_available = false;
        self.vehicle_id = Some(vehicle_id);
        Ok(())
    }

    /// Frees the slot, clearing the occupant.
    ///
    /// Vacating an already-free slot is a no-op.
    pub fn vacate(&mut self) {
        self.is_available = true;
        self.vehicle_id = None;
    }

    /// Restores a slot from persisted state.
    pub(crate) const fn restore(
        slot_id: SlotId,
        zone_id: ZoneId,
        is_available: bool,
        vehicle_id: Option<VehicleId>,
    ) -> Self {
        Self {
            slot_id,
            zone_id,
            is_available,
            vehicle_id,
        }
    }
}
