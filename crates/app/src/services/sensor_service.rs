//! Sensor service — installing sensors on devices.

use domo_domain::error::{DomoError, NotFoundError};
use domo_domain::id::{DeviceId, SensorId, SensorModelName};
use domo_domain::sensor::Sensor;

use crate::ports::{DeviceRepository, Repository, SensorModelRepository, SensorRepository};

/// Application service for sensor installation and lookup.
pub struct SensorService<S, D, M> {
    sensors: S,
    devices: D,
    models: M,
}

impl<S, D, M> SensorService<S, D, M>
where
    S: SensorRepository,
    D: DeviceRepository,
    M: SensorModelRepository,
{
    /// Create a new service backed by the given repositories.
    pub fn new(sensors: S, devices: D, models: M) -> Self {
        Self {
            sensors,
            devices,
            models,
        }
    }

    /// Install a sensor of a cataloged model on an existing device.
    ///
    /// # Errors
    ///
    /// Returns [`DomoError::NotFound`] when the device or the sensor model
    /// does not exist, or a storage error from the repository.
    #[tracing::instrument(skip(self), fields(device = %device_id, model = %model_name))]
    pub async fn add_sensor(
        &self,
        device_id: DeviceId,
        model_name: SensorModelName,
    ) -> Result<Sensor, DomoError> {
        if !self.devices.exists_by_identity(&device_id).await? {
            return Err(NotFoundError {
                entity: "Device",
                id: device_id.to_string(),
            }
            .into());
        }
        if !self.models.exists_by_identity(&model_name).await? {
            return Err(NotFoundError {
                entity: "SensorModel",
                id: model_name.to_string(),
            }
            .into());
        }
        let sensor = Sensor::new(device_id, model_name);
        self.sensors.save(sensor).await
    }

    /// Look a sensor up by id.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn get_sensor(&self, id: SensorId) -> Result<Option<Sensor>, DomoError> {
        self.sensors.find_by_identity(&id).await
    }

    /// All sensors installed on a device.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn sensors_of_device(&self, device_id: DeviceId) -> Result<Vec<Sensor>, DomoError> {
        self.sensors.find_sensors_by_device_id(device_id).await
    }
}
