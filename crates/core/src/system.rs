// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use zone_park_domain::{
    AreaId, DomainError, ParkingRequest, ParkingSlot, RequestId, RequestState, SlotId, Vehicle,
    VehicleId, Zone, ZoneId,
};
use zone_park_rollback::{RollbackEntry, RollbackKind, RollbackLog};

use crate::alloc::{self, Placement};
use crate::error::CoreError;
use crate::queue::RequestQueue;
use crate::requests::RequestRegistry;
use crate::vehicles::VehicleRegistry;

/// First value of the generated vehicle and request id sequences.
const ID_SEQUENCE_START: u64 = 1000;

/// What an allocation produced, returned to the caller for display or
/// billing.
#[derive(Debug, Clone, PartialEq)]
pub struct AllocationReceipt {
    /// The allocated request.
    pub request_id: RequestId,
    /// The slot the vehicle was assigned.
    pub slot_id: SlotId,
    /// The zone owning the slot.
    pub zone_id: ZoneId,
    /// True if the slot lies outside the requested zone.
    pub cross_zone: bool,
    /// True if the slot lies in a zone adjacent to the requested one.
    pub adjacent_zone_used: bool,
    /// Base cost plus any cross-zone penalty.
    pub total_cost: f64,
}

/// Outcome of a single rollback step.
///
/// Only allocation entries mutate state when rolled back; the other
/// kinds report what a restore would involve and leave the engine
/// untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RollbackReport {
    /// An allocation was undone: the request was cancelled and its
    /// slot freed.
    AllocationUndone {
        /// The cancelled request.
        request_id: RequestId,
        /// The slot that was freed.
        slot_id: Option<SlotId>,
        /// The zone owning the freed slot.
        zone_id: Option<ZoneId>,
    },
    /// A cancellation entry was popped. Restoring the request would
    /// require a fresh allocation, so nothing was mutated.
    CancellationNoted {
        /// The cancelled request.
        request_id: RequestId,
    },
    /// A state change entry was popped. Nothing was mutated.
    StateChangeNoted {
        /// The affected request.
        request_id: RequestId,
        /// The state the request held before the recorded change.
        previous_state: Option<RequestState>,
    },
}

/// The parking engine: topology, registries, intake queue, and
/// rollback log behind one explicit context object.
///
/// Zones are kept in registration order, which the allocation search
/// depends on. Every mutating operation either completes or returns a
/// typed error with no partial mutation.
#[derive(Debug, Clone)]
pub struct ParkingSystem {
    zones: Vec<Zone>,
    vehicles: VehicleRegistry,
    requests: RequestRegistry,
    queue: RequestQueue,
    rollback: RollbackLog,
    next_vehicle_seq: u64,
    next_request_seq: u64,
}

impl ParkingSystem {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            zones: Vec::new(),
            vehicles: VehicleRegistry::new(),
            requests: RequestRegistry::new(),
            queue: RequestQueue::new(),
            rollback: RollbackLog::new(),
            next_vehicle_seq: ID_SEQUENCE_START,
            next_request_seq: ID_SEQUENCE_START,
        }
    }

    /// Creates an engine with custom queue and rollback bounds.
    #[must_use]
    pub const fn with_capacities(queue_capacity: usize, rollback_capacity: usize) -> Self {
        Self {
            zones: Vec::new(),
            vehicles: VehicleRegistry::new(),
            requests: RequestRegistry::new(),
            queue: RequestQueue::with_capacity(queue_capacity),
            rollback: RollbackLog::with_capacity(rollback_capacity),
            next_vehicle_seq: ID_SEQUENCE_START,
            next_request_seq: ID_SEQUENCE_START,
        }
    }

    // ----- topology -----

    /// Registers a new zone at the end of the scan order.
    ///
    /// # Errors
    ///
    /// [`CoreError::DomainViolation`] if a zone with this id already
    /// exists.
    pub fn add_zone(
        &mut self,
        zone_id: ZoneId,
        name: &str,
        area_capacity: usize,
    ) -> Result<(), CoreError> {
        if self.find_zone(&zone_id).is_some() {
            return Err(DomainError::DuplicateZone(zone_id).into());
        }
        tracing::info!(zone = %zone_id, area_capacity, "zone registered");
        self.zones
            .push(Zone::new(zone_id, name.to_owned(), area_capacity));
        Ok(())
    }

    /// Adds an area to a zone.
    ///
    /// # Errors
    ///
    /// [`CoreError::DomainViolation`] if the zone does not exist, is
    /// at its area capacity, or already holds the area.
    pub fn add_area(
        &mut self,
        zone_id: &ZoneId,
        area_id: AreaId,
        slot_capacity: usize,
    ) -> Result<(), CoreError> {
        let zone = self
            .zones
            .iter_mut()
            .find(|zone| zone.zone_id() == zone_id)
            .ok_or_else(|| DomainError::ZoneNotFound(zone_id.clone()))?;
        zone.add_area(area_id, slot_capacity)?;
        Ok(())
    }

    /// Adds a slot to an area.
    ///
    /// # Errors
    ///
    /// [`CoreError::DomainViolation`] if the zone or area does not
    /// exist, the area is at capacity, or the slot id is a duplicate.
    pub fn add_slot(
        &mut self,
        zone_id: &ZoneId,
        area_id: &AreaId,
        slot_id: SlotId,
    ) -> Result<(), CoreError> {
        let zone = self
            .zones
            .iter_mut()
            .find(|zone| zone.zone_id() == zone_id)
            .ok_or_else(|| DomainError::ZoneNotFound(zone_id.clone()))?;
        let area = zone.find_area_mut(area_id).ok_or_else(|| {
            DomainError::AreaNotFound {
                zone: zone_id.clone(),
                area: area_id.clone(),
            }
        })?;
        area.add_slot(slot_id)?;
        Ok(())
    }

    /// Records a symmetric adjacency between two zones.
    ///
    /// Returns `Ok(false)` if the pair was already adjacent.
    ///
    /// # Errors
    ///
    /// [`CoreError::DomainViolation`] if either zone is missing or the
    /// two ids are equal.
    pub fn add_adjacency(&mut self, first: &ZoneId, second: &ZoneId) -> Result<bool, CoreError> {
        if first == second {
            return Err(DomainError::SelfAdjacency(first.clone()).into());
        }
        for zone_id in [first, second] {
            if self.find_zone(zone_id).is_none() {
                return Err(DomainError::ZoneNotFound(zone_id.clone()).into());
            }
        }
        let mut recorded = false;
        for (from, to) in [(first, second), (second, first)] {
            let zone = self
                .zones
                .iter_mut()
                .find(|zone| zone.zone_id() == from)
                .ok_or_else(|| DomainError::ZoneNotFound(from.clone()))?;
            recorded |= zone.record_adjacent(to.clone())?;
        }
        if recorded {
            tracing::info!(first = %first, second = %second, "zones marked adjacent");
        }
        Ok(recorded)
    }

    #[must_use]
    pub fn find_zone(&self, zone_id: &ZoneId) -> Option<&Zone> {
        self.zones.iter().find(|zone| zone.zone_id() == zone_id)
    }

    /// Zones in registration order.
    #[must_use]
    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    #[must_use]
    pub fn total_slot_count(&self) -> usize {
        self.zones.iter().map(Zone::total_slot_count).sum()
    }

    #[must_use]
    pub fn available_slot_count(&self) -> usize {
        self.zones.iter().map(Zone::available_slot_count).sum()
    }

    // ----- vehicles -----

    /// Registers a vehicle and returns its generated id.
    ///
    /// # Errors
    ///
    /// [`CoreError::DomainViolation`] if the preferred zone does not
    /// exist or a non-empty plate is already registered.
    pub fn register_vehicle(
        &mut self,
        vehicle_type: &str,
        license_plate: &str,
        owner_name: &str,
        preferred_zone_id: &ZoneId,
    ) -> Result<VehicleId, CoreError> {
        if self.find_zone(preferred_zone_id).is_none() {
            return Err(DomainError::ZoneNotFound(preferred_zone_id.clone()).into());
        }
        if !self.vehicles.license_plate_is_unique(license_plate) {
            return Err(DomainError::DuplicateLicensePlate(license_plate.to_owned()).into());
        }
        // Auto-registered vehicles may occupy generated-looking ids;
        // skip over any collision.
        let mut vehicle_id = self.next_vehicle_id();
        while self.vehicles.search(&vehicle_id).is_some() {
            vehicle_id = self.next_vehicle_id();
        }
        self.vehicles.insert(Vehicle::new(
            vehicle_id.clone(),
            vehicle_type.to_owned(),
            preferred_zone_id.clone(),
            license_plate.to_owned(),
            owner_name.to_owned(),
        ));
        tracing::info!(vehicle = %vehicle_id, vehicle_type, "vehicle registered");
        Ok(vehicle_id)
    }

    #[must_use]
    pub fn find_vehicle(&self, vehicle_id: &VehicleId) -> Option<&Vehicle> {
        self.vehicles.search(vehicle_id)
    }

    /// Registered vehicles in ascending id order.
    pub fn vehicles_in_order(&self) -> impl Iterator<Item = &Vehicle> {
        self.vehicles.iter_in_order()
    }

    #[must_use]
    pub fn vehicle_count(&self) -> usize {
        self.vehicles.len()
    }

    /// Updates a vehicle's preferred zone.
    ///
    /// # Errors
    ///
    /// [`CoreError::DomainViolation`] if the vehicle or the zone does
    /// not exist.
    pub fn set_preferred_zone(
        &mut self,
        vehicle_id: &VehicleId,
        zone_id: &ZoneId,
    ) -> Result<(), CoreError> {
        if self.find_zone(zone_id).is_none() {
            return Err(DomainError::ZoneNotFound(zone_id.clone()).into());
        }
        let vehicle = self
            .vehicles
            .search_mut(vehicle_id)
            .ok_or_else(|| DomainError::VehicleNotFound(vehicle_id.clone()))?;
        vehicle.set_preferred_zone(zone_id.clone());
        Ok(())
    }

    // ----- requests -----

    /// Creates a request and queues it for processing.
    ///
    /// An unknown vehicle id is auto-registered with type `"Unknown"`
    /// and the requested zone as its preference, so walk-ins are never
    /// turned away for missing paperwork.
    ///
    /// # Errors
    ///
    /// [`CoreError::QueueFull`] if the intake queue is at capacity.
    /// The request is not created and no vehicle is registered.
    pub fn create_request(
        &mut self,
        vehicle_id: &VehicleId,
        requested_zone_id: &ZoneId,
    ) -> Result<RequestId, CoreError> {
        if self.queue.is_full() {
            return Err(CoreError::QueueFull {
                capacity: self.queue.capacity(),
            });
        }
        if self.vehicles.search(vehicle_id).is_none() {
            tracing::warn!(vehicle = %vehicle_id, "unknown vehicle, auto-registering");
            self.vehicles.insert(Vehicle::new(
                vehicle_id.clone(),
                "Unknown".to_owned(),
                requested_zone_id.clone(),
                String::new(),
                String::new(),
            ));
        }
        let request_id = self.next_request_id();
        self.requests.add(ParkingRequest::new(
            request_id.clone(),
            vehicle_id.clone(),
            requested_zone_id.clone(),
        ))?;
        self.queue.enqueue(request_id.clone())?;
        tracing::info!(request = %request_id, vehicle = %vehicle_id, zone = %requested_zone_id, "request queued");
        Ok(request_id)
    }

    /// Dequeues the oldest pending request and tries to allocate it.
    ///
    /// On allocation failure the request leaves the queue but stays
    /// `Requested` in the registry; [`Self::allocate_request`] can
    /// retry it once capacity frees up.
    ///
    /// # Errors
    ///
    /// [`CoreError::QueueEmpty`] if nothing is pending, otherwise any
    /// error of [`Self::allocate_request`].
    pub fn process_next_request(&mut self) -> Result<AllocationReceipt, CoreError> {
        let request_id = self.queue.dequeue().ok_or(CoreError::QueueEmpty)?;
        self.allocate_request(&request_id)
    }

    /// Searches for a slot and allocates it to the request.
    ///
    /// # Errors
    ///
    /// [`CoreError::DomainViolation`] if the request is unknown or not
    /// in the `Requested` state, [`CoreError::AllocationFailed`] if no
    /// zone has a free slot. Failures mutate nothing.
    pub fn allocate_request(&mut self, request_id: &RequestId) -> Result<AllocationReceipt, CoreError> {
        let requested_zone = self
            .requests
            .find(request_id)
            .ok_or_else(|| DomainError::RequestNotFound(request_id.clone()))?
            .requested_zone_id()
            .clone();

        let placement: Placement = alloc::find_slot_for(&self.zones, &requested_zone)?;

        let request = self
            .requests
            .find_mut(request_id)
            .ok_or_else(|| DomainError::RequestNotFound(request_id.clone()))?;
        let slot = Self::slot_in(&mut self.zones, &placement.zone_id, &placement.slot_id)?;
        request.allocate(slot, placement.cross_zone, placement.adjacent)?;

        self.rollback.push(RollbackEntry::allocation(
            request_id.clone(),
            placement.slot_id.clone(),
            placement.zone_id.clone(),
        ));
        tracing::info!(
            request = %request_id,
            slot = %placement.slot_id,
            zone = %placement.zone_id,
            cross_zone = placement.cross_zone,
            total_cost = request.total_cost(),
            "request allocated"
        );
        Ok(AllocationReceipt {
            request_id: request_id.clone(),
            slot_id: placement.slot_id,
            zone_id: placement.zone_id,
            cross_zone: placement.cross_zone,
            adjacent_zone_used: placement.adjacent,
            total_cost: request.total_cost(),
        })
    }

    /// Marks an allocated request's vehicle as physically parked.
    ///
    /// # Errors
    ///
    /// [`CoreError::DomainViolation`] if the request is unknown or not
    /// `Allocated`.
    pub fn mark_occupied(&mut self, request_id: &RequestId) -> Result<(), CoreError> {
        let request = self
            .requests
            .find_mut(request_id)
            .ok_or_else(|| DomainError::RequestNotFound(request_id.clone()))?;
        let previous = request.state();
        request.mark_occupied()?;
        self.rollback
            .push(RollbackEntry::state_change(request_id.clone(), previous));
        tracing::info!(request = %request_id, "slot occupied");
        Ok(())
    }

    /// Releases an occupied request's slot and finalizes its cost.
    ///
    /// # Errors
    ///
    /// [`CoreError::DomainViolation`] if the request is unknown or not
    /// `Occupied`.
    pub fn mark_released(&mut self, request_id: &RequestId) -> Result<(), CoreError> {
        let request = self
            .requests
            .find_mut(request_id)
            .ok_or_else(|| DomainError::RequestNotFound(request_id.clone()))?;
        let previous = request.state();
        let Some(slot_ref) = request.allocated_slot().cloned() else {
            return Err(DomainError::InvalidTransition {
                request: request_id.clone(),
                from: previous,
                action: "release",
            }
            .into());
        };
        let slot = Self::slot_in(&mut self.zones, &slot_ref.zone_id, &slot_ref.slot_id)?;
        request.mark_released(slot)?;
        self.rollback
            .push(RollbackEntry::state_change(request_id.clone(), previous));
        tracing::info!(request = %request_id, slot = %slot_ref.slot_id, "slot released");
        Ok(())
    }

    /// Cancels a request, freeing its slot if one was allocated.
    ///
    /// # Errors
    ///
    /// [`CoreError::DomainViolation`] if the request is unknown or
    /// already `Occupied` or terminal.
    pub fn cancel_request(&mut self, request_id: &RequestId) -> Result<(), CoreError> {
        self.apply_cancel(request_id)?;
        self.rollback
            .push(RollbackEntry::cancellation(request_id.clone()));
        tracing::info!(request = %request_id, "request cancelled");
        Ok(())
    }

    // ----- rollback -----

    #[must_use]
    pub fn available_rollbacks(&self) -> usize {
        self.rollback.len()
    }

    /// Pops the most recent rollback entry and dispatches it.
    ///
    /// Allocation entries are the only kind that mutates: the request
    /// is cancelled and its slot freed. Cancellation and state change
    /// entries only report what a restore would involve. A failed
    /// dispatch still consumes the entry.
    ///
    /// # Errors
    ///
    /// [`CoreError::NothingToRollback`] if the log is empty;
    /// [`CoreError::DomainViolation`] if the referenced request no
    /// longer allows the undo.
    pub fn rollback_last(&mut self) -> Result<RollbackReport, CoreError> {
        let entry = self.rollback.pop().ok_or(CoreError::NothingToRollback)?;
        match entry.kind {
            RollbackKind::Allocation => {
                self.apply_cancel(&entry.request_id)?;
                tracing::info!(request = %entry.request_id, "allocation rolled back");
                Ok(RollbackReport::AllocationUndone {
                    request_id: entry.request_id,
                    slot_id: entry.slot_id,
                    zone_id: entry.zone_id,
                })
            }
            RollbackKind::Cancellation => {
                if self.requests.find(&entry.request_id).is_none() {
                    return Err(DomainError::RequestNotFound(entry.request_id).into());
                }
                tracing::info!(
                    request = %entry.request_id,
                    "cancellation popped; manual reallocation required"
                );
                Ok(RollbackReport::CancellationNoted {
                    request_id: entry.request_id,
                })
            }
            RollbackKind::StateChange => {
                if self.requests.find(&entry.request_id).is_none() {
                    return Err(DomainError::RequestNotFound(entry.request_id).into());
                }
                tracing::info!(
                    request = %entry.request_id,
                    previous_state = ?entry.previous_state,
                    "state change popped; no mutation applied"
                );
                Ok(RollbackReport::StateChangeNoted {
                    request_id: entry.request_id,
                    previous_state: entry.previous_state,
                })
            }
        }
    }

    /// Rolls back up to `count` entries, most recent first.
    ///
    /// `count` is clamped to the available entries. One report is
    /// collected per step and a failed step does not stop the rest.
    pub fn rollback_last_k(&mut self, count: usize) -> Vec<Result<RollbackReport, CoreError>> {
        let steps = count.min(self.rollback.len());
        let mut reports = Vec::with_capacity(steps);
        for _ in 0..steps {
            reports.push(self.rollback_last());
        }
        reports
    }

    // ----- analytics -----

    /// All requests ever created, in creation order.
    #[must_use]
    pub const fn requests(&self) -> &RequestRegistry {
        &self.requests
    }

    #[must_use]
    pub fn pending_request_count(&self) -> usize {
        self.queue.len()
    }

    /// The oldest queued request id, if any.
    #[must_use]
    pub fn peek_next_request(&self) -> Option<&RequestId> {
        self.queue.peek()
    }

    /// Occupancy ratio per zone, in registration order.
    ///
    /// A zone with no slots reports `0.0`.
    #[must_use]
    pub fn zone_utilization(&self) -> Vec<(ZoneId, f64)> {
        self.zones
            .iter()
            .map(|zone| {
                let total = zone.total_slot_count();
                let occupied = total - zone.available_slot_count();
                #[allow(clippy::cast_precision_loss)]
                let ratio = if total == 0 {
                    0.0
                } else {
                    occupied as f64 / total as f64
                };
                (zone.zone_id().clone(), ratio)
            })
            .collect()
    }

    /// The zone with the highest occupancy ratio.
    #[must_use]
    pub fn busiest_zone(&self) -> Option<(ZoneId, f64)> {
        self.zone_utilization()
            .into_iter()
            .max_by(|left, right| left.1.total_cmp(&right.1))
    }

    /// The zone with the lowest occupancy ratio.
    #[must_use]
    pub fn most_available_zone(&self) -> Option<(ZoneId, f64)> {
        self.zone_utilization()
            .into_iter()
            .min_by(|left, right| left.1.total_cmp(&right.1))
    }

    // ----- internals -----

    /// Cancels a request without recording a rollback entry.
    ///
    /// Shared by `cancel_request` (which records one) and the
    /// allocation undo path (which must not).
    fn apply_cancel(&mut self, request_id: &RequestId) -> Result<(), CoreError> {
        let request = self
            .requests
            .find_mut(request_id)
            .ok_or_else(|| DomainError::RequestNotFound(request_id.clone()))?;
        let slot_ref = if request.state() == RequestState::Allocated {
            request.allocated_slot().cloned()
        } else {
            None
        };
        match slot_ref {
            Some(slot_ref) => {
                let slot = Self::slot_in(&mut self.zones, &slot_ref.zone_id, &slot_ref.slot_id)?;
                request.cancel(Some(slot))?;
            }
            None => request.cancel(None)?,
        }
        Ok(())
    }

    fn slot_in<'a>(
        zones: &'a mut [Zone],
        zone_id: &ZoneId,
        slot_id: &SlotId,
    ) -> Result<&'a mut ParkingSlot, CoreError> {
        zones
            .iter_mut()
            .find(|zone| zone.zone_id() == zone_id)
            .and_then(|zone| zone.find_slot_mut(slot_id))
            .ok_or_else(|| {
                CoreError::from(DomainError::SlotNotFound {
                    zone: zone_id.clone(),
                    slot: slot_id.clone(),
                })
            })
    }

    fn next_vehicle_id(&mut self) -> VehicleId {
        let id = VehicleId::from(format!("V{}", self.next_vehicle_seq));
        self.next_vehicle_seq += 1;
        id
    }

    fn next_request_id(&mut self) -> RequestId {
        let id = RequestId::from(format!("R{}", self.next_request_seq));
        self.next_request_seq += 1;
        id
    }
}

impl Default for ParkingSystem {
    fn default() -> Self {
        Self::new()
    }
}
