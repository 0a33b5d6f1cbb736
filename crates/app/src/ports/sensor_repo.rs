//! Sensor repository port.

use std::future::Future;

use domo_domain::error::DomoError;
use domo_domain::id::{DeviceId, SensorId, SensorModelName};
use domo_domain::sensor::Sensor;

use super::repository::Repository;

/// Repository for [`Sensor`] aggregates.
pub trait SensorRepository: Repository<SensorId, Sensor> {
    /// All sensors installed on a device.
    fn find_sensors_by_device_id(
        &self,
        device_id: DeviceId,
    ) -> impl Future<Output = Result<Vec<Sensor>, DomoError>> + Send;

    /// Sensors on a device restricted to one sensor model.
    fn find_sensors_by_device_id_and_model(
        &self,
        device_id: DeviceId,
        model_name: &SensorModelName,
    ) -> impl Future<Output = Result<Vec<Sensor>, DomoError>> + Send;

    /// Identity-only projection of [`Self::find_sensors_by_device_id_and_model`].
    fn find_sensor_ids_by_device_id_and_model(
        &self,
        device_id: DeviceId,
        model_name: &SensorModelName,
    ) -> impl Future<Output = Result<Vec<SensorId>, DomoError>> + Send;
}
