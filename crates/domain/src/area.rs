// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::ids::{AreaId, SlotId, ZoneId};
use crate::slot::ParkingSlot;

/// A fixed-capacity container of slots within one zone.
///
/// Capacity is fixed at creation; slots are appended up to capacity and
/// never removed. Slot order is insertion order, which is also the scan
/// order for allocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParkingArea {
    area_id: AreaId,
    zone_id: ZoneId,
    capacity: usize,
    slots: Vec<ParkingSlot>,
}

impl ParkingArea {
    /// Creates a new empty area.
    #[must_use]
    pub const fn new(area_id: AreaId, zone_id: ZoneId, capacity: usize) -> Self {
        Self {
            area_id,
            zone_id,
            capacity,
            slots: Vec::new(),
        }
    }

    /// Returns the area identifier.
    #[must_use]
    pub const fn area_id(&self) -> &AreaId {
        &self.area_id
    }

    /// Returns the identifier of the zone owning this area.
    #[must_use]
    pub const fn zone_id(&self) -> &ZoneId {
        &self.zone_id
    }

    /// Returns the maximum number of slots this area can hold.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of slots currently in the area.
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Appends a new slot to the area.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::SlotCapacityExceeded` if the area is at
    /// capacity, or `DomainError::DuplicateSlot` if a slot with this
    /// identifier already exists. No partial mutation occurs.
    pub fn add_slot(&mut self, slot_id: SlotId) -> Result<(), DomainError> {
        if self.slots.len() >= self.capacity {
            return Err(DomainError::SlotCapacityExceeded {
                area: self.area_id.clone(),
                capacity: self.capacity,
            });
        }
        if self.find_slot(&slot_id).is_some() {
            return Err(DomainError::DuplicateSlot {
                area: self.area_id.clone(),
                slot: slot_id,
            });
        }
        self.slots
            .push(ParkingSlot::new(slot_id, self.zone_id.clone()));
        Ok(())
    }

    /// Finds a slot by identifier.
    #[must_use]
    pub fn find_slot(&self, slot_id: &SlotId) -> Option<&ParkingSlot> {
        self.slots.iter().find(|slot| slot.slot_id() == slot_id)
    }

    /// Finds a slot by identifier, mutably.
    #[must_use]
    pub fn find_slot_mut(&mut self, slot_id: &SlotId) -> Option<&mut ParkingSlot> {
        self.slots.iter_mut().find(|slot| slot.slot_id() == slot_id)
    }

    /// Returns the first available slot in insertion order, if any.
    #[must_use]
    pub fn first_available_slot(&self) -> Option<&ParkingSlot> {
        self.slots.iter().find(|slot| slot.is_available())
    }

    /// Counts the available slots in the area.
    #[must_use]
    pub fn available_slot_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_available()).count()
    }

    /// Iterates over the slots in insertion order.
    pub fn slots(&self) -> impl Iterator<Item = &ParkingSlot> {
        self.slots.iter()
    }
}
