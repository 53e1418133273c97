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

mod alloc;
mod error;
mod queue;
mod requests;
mod system;
mod vehicles;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use alloc::{Placement, find_slot_for};
pub use error::CoreError;
pub use queue::{DEFAULT_QUEUE_CAPACITY, RequestQueue};
pub use requests::RequestRegistry;
pub use system::{AllocationReceipt, ParkingSystem, RollbackReport};
pub use vehicles::{InorderIter, VehicleRegistry};
