// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Identifier newtypes for the parking domain.
//!
//! All identifiers are opaque strings. Vehicle and request identifiers are
//! generated by the engine (`"V" + n` / `"R" + n`, monotonic from 1000);
//! zone, area, and slot identifiers are operator-supplied.

use serde::{Deserialize, Serialize};

macro_rules! string_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates a new identifier from a string value.
            #[must_use]
            pub fn new(value: &str) -> Self {
                Self(value.to_owned())
            }

            /// Returns the identifier as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }
    };
}

string_id!(
    /// Identifier of a top-level parking zone.
    ZoneId
);
string_id!(
    /// Identifier of a parking area within a zone.
    AreaId
);
string_id!(
    /// Identifier of an atomic parking slot.
    ///
    /// By convention slot identifiers take the form `"<zone>-<area>-S<n>"`,
    /// which the persistence collaborator parses to re-link slots to their
    /// areas on reload. The engine itself treats the value as opaque.
    SlotId
);
string_id!(
    /// Identifier of a registered vehicle.
    VehicleId
);
string_id!(
    /// Identifier of a parking request.
    RequestId
);

impl SlotId {
    /// Returns the zone component of a conventional `"<zone>-<area>-S<n>"`
    /// slot identifier, or `None` if the identifier does not follow the
    /// convention.
    #[must_use]
    pub fn zone_component(&self) -> Option<&str> {
        let mut parts = self.0.split('-');
        let zone: &str = parts.next()?;
        // Require all three components before trusting the first.
        parts.next()?;
        parts.next()?;
        Some(zone)
    }

    /// Returns the area component of a conventional `"<zone>-<area>-S<n>"`
    /// slot identifier, or `None` if the identifier does not follow the
    /// convention.
    #[must_use]
    pub fn area_component(&self) -> Option<&str> {
        let mut parts = self.0.split('-');
        parts.next()?;
        let area: &str = parts.next()?;
        parts.next()?;
        Some(area)
    }
}
