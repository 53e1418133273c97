// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod area;
mod error;
mod ids;
mod record;
mod request;
mod slot;
mod vehicle;
mod zone;

#[cfg(test)]
mod tests;

pub use area::ParkingArea;
pub use error::DomainError;
pub use ids::{AreaId, RequestId, SlotId, VehicleId, ZoneId};
pub use record::{RequestRecord, SlotRecord, VehicleRecord, ZoneRecord};
pub use request::{
    ADJACENT_ZONE_PENALTY, BASE_PARKING_COST, DISTANT_ZONE_PENALTY, ParkingRequest, RequestState,
    SlotRef,
};
pub use slot::ParkingSlot;
pub use vehicle::Vehicle;
pub use zone::Zone;
