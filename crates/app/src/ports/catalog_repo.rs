//! Catalog repository ports — sensor/actuator types and models and device
//! types, seeded from static configuration before any aggregation query
//! runs. The generic contract is sufficient for all five.

use domo_domain::actuator::{ActuatorModel, ActuatorType};
use domo_domain::device::DeviceType;
use domo_domain::id::{
    ActuatorModelName, ActuatorTypeName, DeviceTypeName, SensorModelName, SensorTypeId,
};
use domo_domain::sensor::{SensorModel, SensorType};

use super::repository::Repository;

/// Repository for [`SensorType`] aggregates.
pub trait SensorTypeRepository: Repository<SensorTypeId, SensorType> {}

/// Repository for [`SensorModel`] aggregates.
pub trait SensorModelRepository: Repository<SensorModelName, SensorModel> {}

/// Repository for [`ActuatorType`] aggregates.
pub trait ActuatorTypeRepository: Repository<ActuatorTypeName, ActuatorType> {}

/// Repository for [`ActuatorModel`] aggregates.
pub trait ActuatorModelRepository: Repository<ActuatorModelName, ActuatorModel> {}

/// Repository for [`DeviceType`] aggregates.
pub trait DeviceTypeRepository: Repository<DeviceTypeName, DeviceType> {}
