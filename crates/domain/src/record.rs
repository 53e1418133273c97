// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Flat serialization records for the persistence collaborator.
//!
//! The engine never performs I/O. Each entity maps to a flat record of
//! primitive fields; reconstruction tolerates missing optional fields by
//! substituting the documented defaults (e.g. a slot with no
//! `is_available` field loads as available). The persistence layer is
//! responsible for re-linking slots to areas on reload, using the
//! conventional `"<zone>-<area>-S<n>"` slot identifier form.

use crate::ids::{AreaId, RequestId, SlotId, VehicleId, ZoneId};
use crate::request::{BASE_PARKING_COST, ParkingRequest, RequestState, SlotRef};
use crate::slot::ParkingSlot;
use crate::vehicle::Vehicle;
use crate::zone::Zone;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

const fn default_true() -> bool {
    true
}

const fn default_base_cost() -> f64 {
    BASE_PARKING_COST
}

fn default_state() -> String {
    RequestState::Requested.as_str().to_owned()
}

/// Flat record for a parking slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotRecord {
    /// The slot identifier.
    pub slot_id: SlotId,
    /// The owning zone.
    pub zone_id: ZoneId,
    /// Availability; defaults to `true` when missing.
    #[serde(default = "default_true")]
    pub is_available: bool,
    /// Occupying vehicle identifier; empty string when the slot is free.
    #[serde(default)]
    pub vehicle_id: String,
}

impl From<&ParkingSlot> for SlotRecord {
    fn from(slot: &ParkingSlot) -> Self {
        Self {
            slot_id: slot.slot_id().clone(),
            zone_id: slot.zone_id().clone(),
            is_available: slot.is_available(),
            vehicle_id: slot
                .occupant()
                .map(|vehicle_id| vehicle_id.as_str().to_owned())
                .unwrap_or_default(),
        }
    }
}

impl SlotRecord {
    /// Reconstructs the slot this record describes.
    #[must_use]
    pub fn into_slot(self) -> ParkingSlot {
        let occupant: Option<VehicleId> = if self.is_available || self.vehicle_id.is_empty() {
            None
        } else {
            Some(VehicleId::from(self.vehicle_id))
        };
        ParkingSlot::restore(
            self.slot_id,
            self.zone_id,
            occupant.is_none(),
            occupant,
        )
    }
}

/// Flat record for a registered vehicle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleRecord {
    /// The vehicle identifier.
    pub vehicle_id: VehicleId,
    /// Free-form vehicle classification.
    pub vehicle_type: String,
    /// The preferred zone.
    pub preferred_zone: ZoneId,
    /// License plate; defaults to empty when missing.
    #[serde(default)]
    pub license_plate: String,
    /// Owner name; defaults to empty when missing.
    #[serde(default)]
    pub owner_name: String,
    /// Registration time; re-stamped on reconstruction when missing.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub registered_at: Option<OffsetDateTime>,
}

impl From<&Vehicle> for VehicleRecord {
    fn from(vehicle: &Vehicle) -> Self {
        Self {
            vehicle_id: vehicle.vehicle_id.clone(),
            vehicle_type: vehicle.vehicle_type.clone(),
            preferred_zone: vehicle.preferred_zone.clone(),
            license_plate: vehicle.license_plate.clone(),
            owner_name: vehicle.owner_name.clone(),
            registered_at: Some(vehicle.registered_at),
        }
    }
}

impl VehicleRecord {
    /// Reconstructs the vehicle this record describes.
    #[must_use]
    pub fn into_vehicle(self) -> Vehicle {
        let mut vehicle: Vehicle = Vehicle::new(
            self.vehicle_id,
            self.vehicle_type,
            self.preferred_zone,
            self.license_plate,
            self.owner_name,
        );
        if let Some(registered_at) = self.registered_at {
            vehicle.registered_at = registered_at;
        }
        vehicle
    }
}

/// Flat record for a parking request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestRecord {
    /// The request identifier.
    pub request_id: RequestId,
    /// The requesting vehicle.
    pub vehicle_id: VehicleId,
    /// The zone the vehicle asked for.
    pub requested_zone_id: ZoneId,
    /// Allocated slot identifier, if any.
    #[serde(default)]
    pub allocated_slot_id: Option<SlotId>,
    /// Zone owning the allocated slot, if any.
    #[serde(default)]
    pub allocated_zone_id: Option<ZoneId>,
    /// Whether the allocation landed outside the requested zone.
    #[serde(default)]
    pub cross_zone_allocation: bool,
    /// Whether a cross-zone allocation used an adjacent zone.
    #[serde(default)]
    pub is_adjacent_zone: bool,
    /// Base cost; defaults to the flat base cost when missing.
    #[serde(default = "default_base_cost")]
    pub base_cost: f64,
    /// Penalty cost; defaults to zero when missing.
    #[serde(default)]
    pub penalty_cost: f64,
    /// Total cost; defaults to the flat base cost when missing.
    #[serde(default = "default_base_cost")]
    pub total_cost: f64,
    /// Lifecycle state name; unknown or missing values load as
    /// `"REQUESTED"`.
    #[serde(default = "default_state")]
    pub current_state: String,
    /// Creation time; re-stamped on reconstruction when missing.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub request_time: Option<OffsetDateTime>,
    /// Allocation time, if any.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub allocation_time: Option<OffsetDateTime>,
    /// Release time, if any.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub release_time: Option<OffsetDateTime>,
}

impl From<&ParkingRequest> for RequestRecord {
    fn from(request: &ParkingRequest) -> Self {
        Self {
            request_id: request.request_id().clone(),
            vehicle_id: request.vehicle_id().clone(),
            requested_zone_id: request.requested_zone_id().clone(),
            allocated_slot_id: request
                .allocated_slot()
                .map(|slot_ref| slot_ref.slot_id.clone()),
            allocated_zone_id: request
                .allocated_slot()
                .map(|slot_ref| slot_ref.zone_id.clone()),
            cross_zone_allocation: request.is_cross_zone(),
            is_adjacent_zone: request.adjacent_zone_used(),
            base_cost: request.base_cost(),
            penalty_cost: request.penalty_cost(),
            total_cost: request.total_cost(),
            current_state: request.state().as_str().to_owned(),
            request_time: Some(request.requested_at()),
            allocation_time: request.allocated_at(),
            release_time: request.released_at(),
        }
    }
}

impl RequestRecord {
    /// Reconstructs the request this record describes.
    ///
    /// An unparseable state string falls back to `Requested`, matching the
    /// tolerant reconstruction contract.
    #[must_use]
    pub fn into_request(self) -> ParkingRequest {
        let state: RequestState = self
            .current_state
            .parse()
            .unwrap_or(RequestState::Requested);
        let allocated_slot: Option<SlotRef> =
            self.allocated_slot_id
                .zip(self.allocated_zone_id)
                .map(|(slot_id, zone_id)| SlotRef { slot_id, zone_id });
        ParkingRequest::restore(
            self.request_id,
            self.vehicle_id,
            self.requested_zone_id,
            allocated_slot,
            self.cross_zone_allocation,
            self.is_adjacent_zone,
            self.base_cost,
            self.penalty_cost,
            self.total_cost,
            self.request_time.unwrap_or_else(OffsetDateTime::now_utc),
            self.allocation_time,
            self.release_time,
            state,
        )
    }
}

/// Flat record for a zone's shape and adjacency.
///
/// Areas and slots are serialized separately as [`SlotRecord`]s; the
/// persistence collaborator re-links them on reload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneRecord {
    /// The zone identifier.
    pub zone_id: ZoneId,
    /// The zone display name.
    pub zone_name: String,
    /// Maximum number of areas the zone can hold.
    pub area_capacity: usize,
    /// Adjacent zone identifiers in recorded order; defaults to empty.
    #[serde(default)]
    pub adjacent_zones: Vec<ZoneId>,
    /// Area identifiers in insertion order, with their slot capacities.
    #[serde(default)]
    pub areas: Vec<(AreaId, usize)>,
}

impl From<&Zone> for ZoneRecord {
    fn from(zone: &Zone) -> Self {
        Self {
            zone_id: zone.zone_id().clone(),
            zone_name: zone.name().to_owned(),
            area_capacity: zone.area_capacity(),
            adjacent_zones: zone.adjacent_zones().to_vec(),
            areas: zone
                .areas()
                .map(|area| (area.area_id().clone(), area.capacity()))
                .collect(),
        }
    }
}

impl ZoneRecord {
    /// Reconstructs the zone shell this record describes.
    ///
    /// Areas are recreated empty; slots are restored separately from
    /// [`SlotRecord`]s. Area entries beyond the zone's capacity are
    /// dropped rather than failing the whole reconstruction.
    #[must_use]
    pub fn into_zone(self) -> Zone {
        let mut zone: Zone = Zone::new(self.zone_id, self.zone_name, self.area_capacity);
        for (area_id, slot_capacity) in self.areas {
            if zone.add_area(area_id, slot_capacity).is_err() {
                break;
            }
        }
        for adjacent in self.adjacent_zones {
            // Self or duplicate entries in a hand-edited file are skipped.
            let _ = zone.record_adjacent(adjacent);
        }
        zone
    }
}
