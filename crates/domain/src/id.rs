//! Typed identifiers for every aggregate.
//!
//! Two families exist. Generated identifiers (`define_id!`) are UUID-backed
//! and minted once at construction: the aggregate is never re-identified.
//! Natural-key identifiers (`define_name!`) wrap a validated non-blank
//! string and are reconstructed identically on every load. Identifier
//! equality is value equality; identifiers carry no business logic.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

macro_rules! define_id {
    ($(#[doc = $doc:expr])* $name:ident) => {
        $(#[doc = $doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(uuid::Uuid);

        impl Default for $name {
            fn default() -> Self {
                Self(uuid::Uuid::new_v4())
            }
        }

        impl $name {
            /// Generate a new random identifier.
            #[must_use]
            pub fn new() -> Self {
                Self::default()
            }

            /// Wrap an existing UUID, e.g. when reconstructing from storage.
            #[must_use]
            pub fn from_uuid(uuid: uuid::Uuid) -> Self {
                Self(uuid)
            }

            /// Access the inner UUID.
            #[must_use]
            pub fn as_uuid(self) -> uuid::Uuid {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                uuid::Uuid::parse_str(s).map(Self)
            }
        }
    };
}

macro_rules! define_name {
    ($(#[doc = $doc:expr])* $name:ident, $label:literal) => {
        $(#[doc = $doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Validate and wrap a raw string.
            ///
            /// # Errors
            ///
            /// Returns [`ValidationError::Blank`] when the string is empty
            /// or whitespace-only.
            pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
                let value = value.into();
                if value.trim().is_empty() {
                    return Err(ValidationError::Blank($label));
                }
                Ok(Self(value))
            }

            /// Borrow the underlying string.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(
    /// Unique identifier for a [`Room`](crate::room::Room).
    RoomId
);

define_id!(
    /// Unique identifier for a [`Device`](crate::device::Device).
    DeviceId
);

define_id!(
    /// Unique identifier for a [`Sensor`](crate::sensor::Sensor).
    SensorId
);

define_id!(
    /// Unique identifier for an [`Actuator`](crate::actuator::Actuator).
    ActuatorId
);

define_id!(
    /// Unique identifier for a [`Reading`](crate::reading::Reading).
    ReadingId
);

define_name!(
    /// Natural identity of a [`House`](crate::house::House).
    HouseName,
    "house name"
);

define_name!(
    /// Display name of a room.
    RoomName,
    "room name"
);

define_name!(
    /// Display name of a device.
    DeviceName,
    "device name"
);

define_name!(
    /// Natural identity of a device type, e.g. `"GridPowerMeter"`.
    DeviceTypeName,
    "device type name"
);

define_name!(
    /// Human name of a sensor type, e.g. `"Temperature"`.
    SensorTypeName,
    "sensor type name"
);

define_name!(
    /// Measurement unit of a sensor type, e.g. `"Celsius"`.
    SensorTypeUnit,
    "sensor type unit"
);

define_name!(
    /// Natural identity of a [`SensorType`](crate::sensor::SensorType).
    SensorTypeId,
    "sensor type id"
);

define_name!(
    /// Natural identity of a [`SensorModel`](crate::sensor::SensorModel).
    SensorModelName,
    "sensor model name"
);

define_name!(
    /// Natural identity of an [`ActuatorType`](crate::actuator::ActuatorType).
    ActuatorTypeName,
    "actuator type name"
);

define_name!(
    /// Natural identity of an [`ActuatorModel`](crate::actuator::ActuatorModel).
    ActuatorModelName,
    "actuator model name"
);

impl SensorTypeId {
    /// Derive the identity from the type's name and unit, by concatenation.
    ///
    /// `("Temp", "Celsius")` yields `"TempCelsius"`, matching the identity of
    /// a sensor type reconstructed from storage with that explicit id.
    #[must_use]
    pub fn derived(name: &SensorTypeName, unit: &SensorTypeUnit) -> Self {
        Self(format!("{name}{unit}"))
    }
}
