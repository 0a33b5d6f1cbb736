//! Sensors and their catalog: sensor types, sensor models, and the sensor
//! aggregate installed on a device.

use serde::{Deserialize, Serialize};

use crate::id::{DeviceId, SensorId, SensorModelName, SensorTypeId, SensorTypeName, SensorTypeUnit};

/// A kind of measurement, e.g. temperature in Celsius.
///
/// The identity may be derived deterministically from name and unit
/// ([`SensorType::new`]) or supplied explicitly on reconstruction from
/// storage ([`SensorType::restore`]); both paths yield equal aggregates for
/// the same data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SensorType {
    id: SensorTypeId,
    name: SensorTypeName,
    unit: SensorTypeUnit,
}

impl SensorType {
    /// Create a sensor type, deriving its identity from name and unit.
    #[must_use]
    pub fn new(name: SensorTypeName, unit: SensorTypeUnit) -> Self {
        let id = SensorTypeId::derived(&name, &unit);
        Self::restore(id, name, unit)
    }

    /// Reconstruct a sensor type with an explicit identity.
    #[must_use]
    pub fn restore(id: SensorTypeId, name: SensorTypeName, unit: SensorTypeUnit) -> Self {
        Self { id, name, unit }
    }

    #[must_use]
    pub fn identity(&self) -> &SensorTypeId {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &SensorTypeName {
        &self.name
    }

    #[must_use]
    pub fn unit(&self) -> &SensorTypeUnit {
        &self.unit
    }
}

impl PartialEq for SensorType {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for SensorType {}

impl std::hash::Hash for SensorType {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// A concrete sensor product implementing one sensor type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SensorModel {
    name: SensorModelName,
    sensor_type_id: SensorTypeId,
}

impl SensorModel {
    #[must_use]
    pub fn new(name: SensorModelName, sensor_type_id: SensorTypeId) -> Self {
        Self {
            name,
            sensor_type_id,
        }
    }

    #[must_use]
    pub fn identity(&self) -> &SensorModelName {
        &self.name
    }

    #[must_use]
    pub fn sensor_type_id(&self) -> &SensorTypeId {
        &self.sensor_type_id
    }
}

impl PartialEq for SensorModel {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for SensorModel {}

impl std::hash::Hash for SensorModel {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

/// A sensor installed on a device. Readings reference the sensor by
/// [`SensorId`]; the sensor holds no reading collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sensor {
    id: SensorId,
    device_id: DeviceId,
    model_name: SensorModelName,
}

impl Sensor {
    /// Install a fresh sensor, generating its identity.
    #[must_use]
    pub fn new(device_id: DeviceId, model_name: SensorModelName) -> Self {
        Self::restore(SensorId::new(), device_id, model_name)
    }

    /// Reconstruct a sensor from storage with a known identity.
    #[must_use]
    pub fn restore(id: SensorId, device_id: DeviceId, model_name: SensorModelName) -> Self {
        Self {
            id,
            device_id,
            model_name,
        }
    }

    #[must_use]
    pub fn identity(&self) -> SensorId {
        self.id
    }

    #[must_use]
    pub fn device_id(&self) -> DeviceId {
        self.device_id
    }

    #[must_use]
    pub fn model_name(&self) -> &SensorModelName {
        &self.model_name
    }
}

impl PartialEq for Sensor {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Sensor {}

impl std::hash::Hash for Sensor {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
