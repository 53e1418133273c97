// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::ids::{VehicleId, ZoneId};
use time::OffsetDateTime;

/// A registered vehicle.
///
/// Vehicles are immutable after registration except for the preferred
/// zone. Identifier uniqueness and license plate uniqueness (for
/// non-empty plates) are enforced by the vehicle registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vehicle {
    /// The engine-generated vehicle identifier.
    pub vehicle_id: VehicleId,
    /// Free-form vehicle classification (e.g. "Car", "Motorcycle").
    pub vehicle_type: String,
    /// The zone this vehicle prefers to park in.
    pub preferred_zone: ZoneId,
    /// License plate; may be empty, unique when non-empty.
    pub license_plate: String,
    /// Owner name, informational only.
    pub owner_name: String,
    /// When the vehicle was registered.
    pub registered_at: OffsetDateTime,
}

impl Vehicle {
    /// Creates a new vehicle registered now.
    #[must_use]
    pub fn new(
        vehicle_id: VehicleId,
        vehicle_type: String,
        preferred_zone: ZoneId,
        license_plate: String,
        owner_name: String,
    ) -> Self {
        Self {
            vehicle_id,
            vehicle_type,
            preferred_zone,
            license_plate,
            owner_name,
            registered_at: OffsetDateTime::now_utc(),
        }
    }

    /// Updates the preferred zone, the only mutable field.
    pub fn set_preferred_zone(&mut self, zone_id: ZoneId) {
        self.preferred_zone = zone_id;
    }
}
