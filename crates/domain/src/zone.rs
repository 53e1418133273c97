// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::area::ParkingArea;
use crate::error::DomainError;
use crate::ids::{AreaId, SlotId, ZoneId};
use crate::slot::ParkingSlot;

/// A top-level parking region containing areas.
///
/// Area capacity is fixed at creation. The adjacency list records the
/// identifiers of neighboring zones in the order they were added; that
/// order is the scan order for adjacent-zone allocation. Symmetry of the
/// adjacency relation is maintained by the system-level operation, not by
/// the zone itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Zone {
    zone_id: ZoneId,
    name: String,
    area_capacity: usize,
    areas: Vec<ParkingArea>,
    adjacent: Vec<ZoneId>,
}

impl Zone {
    /// Creates a new empty zone.
    #[must_use]
    pub const fn new(zone_id: ZoneId, name: String, area_capacity: usize) -> Self {
        Self {
            zone_id,
            name,
            area_capacity,
            areas: Vec::new(),
            adjacent: Vec::new(),
        }
    }

    /// Returns the zone identifier.
    #[must_use]
    pub const fn zone_id(&self) -> &ZoneId {
        &self.zone_id
    }

    /// Returns the zone's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the maximum number of areas this zone can hold.
    #[must_use]
    pub const fn area_capacity(&self) -> usize {
        self.area_capacity
    }

    /// Returns the number of areas currently in the zone.
    #[must_use]
    pub fn area_count(&self) -> usize {
        self.areas.len()
    }

    /// Appends a new area to the zone.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::AreaCapacityExceeded` if the zone is at
    /// capacity, or `DomainError::DuplicateArea` if an area with this
    /// identifier already exists. No partial mutation occurs.
    pub fn add_area(&mut self, area_id: AreaId, slot_capacity: usize) -> Result<(), DomainError> {
        if self.areas.len() >= self.area_capacity {
            return Err(DomainError::AreaCapacityExceeded {
                zone: self.zone_id.clone(),
                capacity: self.area_capacity,
            });
        }
        if self.find_area(&area_id).is_some() {
            return Err(DomainError::DuplicateArea {
                zone: self.zone_id.clone(),
                area: area_id,
            });
        }
        self.areas
            .push(ParkingArea::new(area_id, self.zone_id.clone(), slot_capacity));
        Ok(())
    }

    /// Finds an area by identifier.
    #[must_use]
    pub fn find_area(&self, area_id: &AreaId) -> Option<&ParkingArea> {
        self.areas.iter().find(|area| area.area_id() == area_id)
    }

    /// Finds an area by identifier, mutably.
    #[must_use]
    pub fn find_area_mut(&mut self, area_id: &AreaId) -> Option<&mut ParkingArea> {
        self.areas.iter_mut().find(|area| area.area_id() == area_id)
    }

    /// Finds a slot by identifier anywhere in the zone.
    #[must_use]
    pub fn find_slot(&self, slot_id: &SlotId) -> Option<&ParkingSlot> {
        self.areas.iter().find_map(|area| area.find_slot(slot_id))
    }

    /// Finds a slot by identifier anywhere in the zone, mutably.
    #[must_use]
    pub fn find_slot_mut(&mut self, slot_id: &SlotId) -> Option<&mut ParkingSlot> {
        self.areas
            .iter_mut()
            .find_map(|area| area.find_slot_mut(slot_id))
    }

    /// Returns the first available slot in the zone, scanning areas in
    /// insertion order and slots in insertion order within each area.
    #[must_use]
    pub fn first_available_slot(&self) -> Option<&ParkingSlot> {
        self.areas
            .iter()
            .find_map(ParkingArea::first_available_slot)
    }

    /// Returns the total number of slots in the zone.
    #[must_use]
    pub fn total_slot_count(&self) -> usize {
        self.areas.iter().map(ParkingArea::slot_count).sum()
    }

    /// Returns the number of available slots in the zone.
    #[must_use]
    pub fn available_slot_count(&self) -> usize {
        self.areas.iter().map(ParkingArea::available_slot_count).sum()
    }

    /// Records another zone as adjacent to this one.
    ///
    /// Recording an already-present neighbor is a no-op reported as
    /// `Ok(false)`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::SelfAdjacency` if `zone_id` names this zone.
    pub fn record_adjacent(&mut self, zone_id: ZoneId) -> Result<bool, DomainError> {
        if zone_id == self.zone_id {
            return Err(DomainError::SelfAdjacency(zone_id));
        }
        if self.adjacent.contains(&zone_id) {
            return Ok(false);
        }
        self.adjacent.push(zone_id);
        Ok(true)
    }

    /// Returns whether the given zone is recorded as adjacent.
    #[must_use]
    pub fn is_adjacent(&self, zone_id: &ZoneId) -> bool {
        self.adjacent.contains(zone_id)
    }

    /// Returns the adjacent zone identifiers in the order they were
    /// recorded.
    #[must_use]
    pub fn adjacent_zones(&self) -> &[ZoneId] {
        &self.adjacent
    }

    /// Iterates over the areas in insertion order.
    pub fn areas(&self) -> impl Iterator<Item = &ParkingArea> {
        self.areas.iter()
    }
}
