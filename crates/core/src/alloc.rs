// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use zone_park_domain::{DomainError, SlotId, Zone, ZoneId};

use crate::error::CoreError;

/// The outcome of a slot search: where the vehicle goes and how far
/// from its requested zone it ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    /// The zone the slot belongs to.
    pub zone_id: ZoneId,
    /// The slot selected for the request.
    pub slot_id: SlotId,
    /// True if the slot is outside the requested zone.
    pub cross_zone: bool,
    /// True if the slot is in a zone adjacent to the requested zone.
    pub adjacent: bool,
}

/// Finds a slot for a request targeting `requested_zone_id`.
///
/// The search proceeds in three stages and stops at the first hit:
///
/// 1. the requested zone itself,
/// 2. the requested zone's adjacent zones, in the order the
///    adjacencies were recorded,
/// 3. every remaining zone, scanned circularly in registration order
///    starting just past the requested zone.
///
/// Mutates nothing. The caller applies the returned [`Placement`] to
/// the request state machine.
///
/// # Errors
///
/// [`CoreError::DomainViolation`] if the requested zone does not
/// exist, [`CoreError::AllocationFailed`] if no zone has a free slot.
pub fn find_slot_for(zones: &[Zone], requested_zone_id: &ZoneId) -> Result<Placement, CoreError> {
    let position = zones
        .iter()
        .position(|zone| zone.zone_id() == requested_zone_id)
        .ok_or_else(|| DomainError::ZoneNotFound(requested_zone_id.clone()))?;

    if let Some(slot) = zones[position].first_available_slot() {
        return Ok(Placement {
            zone_id: requested_zone_id.clone(),
            slot_id: slot.slot_id().clone(),
            cross_zone: false,
            adjacent: false,
        });
    }

    for adjacent_id in zones[position].adjacent_zones() {
        let Some(adjacent_zone) = zones.iter().find(|zone| zone.zone_id() == adjacent_id) else {
            continue;
        };
        if let Some(slot) = adjacent_zone.first_available_slot() {
            return Ok(Placement {
                zone_id: adjacent_id.clone(),
                slot_id: slot.slot_id().clone(),
                cross_zone: true,
                adjacent: true,
            });
        }
    }

    for offset in 1..zones.len() {
        let candidate = &zones[(position + offset) % zones.len()];
        if let Some(slot) = candidate.first_available_slot() {
            return Ok(Placement {
                zone_id: candidate.zone_id().clone(),
                slot_id: slot.slot_id().clone(),
                cross_zone: true,
                adjacent: false,
            });
        }
    }

    Err(CoreError::AllocationFailed {
        requested_zone: requested_zone_id.clone(),
    })
}
