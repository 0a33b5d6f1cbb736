//! Device — hardware installed in a room, carrying sensors and actuators.

use serde::{Deserialize, Serialize};

use crate::error::RuleViolation;
use crate::id::{DeviceId, DeviceName, DeviceTypeName, RoomId};

/// Activation state of a device. Fresh devices start active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeviceStatus(bool);

impl Default for DeviceStatus {
    fn default() -> Self {
        Self(true)
    }
}

impl DeviceStatus {
    #[must_use]
    pub fn active() -> Self {
        Self(true)
    }

    #[must_use]
    pub fn inactive() -> Self {
        Self(false)
    }

    #[must_use]
    pub fn is_active(self) -> bool {
        self.0
    }
}

/// A device kind, e.g. `"GridPowerMeter"`. Aggregate with a natural key,
/// seeded from configuration at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceType {
    name: DeviceTypeName,
}

impl DeviceType {
    #[must_use]
    pub fn new(name: DeviceTypeName) -> Self {
        Self { name }
    }

    #[must_use]
    pub fn identity(&self) -> &DeviceTypeName {
        &self.name
    }
}

impl PartialEq for DeviceType {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for DeviceType {}

impl std::hash::Hash for DeviceType {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

/// The device aggregate. References its room by [`RoomId`] only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Device {
    id: DeviceId,
    name: DeviceName,
    type_name: DeviceTypeName,
    room_id: RoomId,
    status: DeviceStatus,
}

impl Device {
    /// Create a fresh, active device with a generated identity.
    #[must_use]
    pub fn new(name: DeviceName, type_name: DeviceTypeName, room_id: RoomId) -> Self {
        Self::restore(
            DeviceId::new(),
            name,
            type_name,
            room_id,
            DeviceStatus::active(),
        )
    }

    /// Reconstruct a device from storage with a known identity and status.
    #[must_use]
    pub fn restore(
        id: DeviceId,
        name: DeviceName,
        type_name: DeviceTypeName,
        room_id: RoomId,
        status: DeviceStatus,
    ) -> Self {
        Self {
            id,
            name,
            type_name,
            room_id,
            status,
        }
    }

    #[must_use]
    pub fn identity(&self) -> DeviceId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &DeviceName {
        &self.name
    }

    #[must_use]
    pub fn type_name(&self) -> &DeviceTypeName {
        &self.type_name
    }

    #[must_use]
    pub fn room_id(&self) -> RoomId {
        self.room_id
    }

    #[must_use]
    pub fn status(&self) -> DeviceStatus {
        self.status
    }

    /// Deactivate the device. The one domain state transition.
    ///
    /// # Errors
    ///
    /// Returns [`RuleViolation::DeviceAlreadyInactive`] when called on an
    /// inactive device. The repeat call is rejected rather than ignored so a
    /// double-deactivation bug in the caller surfaces immediately.
    pub fn deactivate(&mut self) -> Result<(), RuleViolation> {
        if !self.status.is_active() {
            return Err(RuleViolation::DeviceAlreadyInactive(self.id.to_string()));
        }
        self.status = DeviceStatus::inactive();
        Ok(())
    }
}

impl PartialEq for Device {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Device {}

impl std::hash::Hash for Device {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
