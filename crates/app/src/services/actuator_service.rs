//! Actuator service — installing actuators on devices and moving them around.

use domo_domain::actuator::{Actuator, DecimalLimits, IntLimits};
use domo_domain::error::{DomoError, NotFoundError};
use domo_domain::id::{ActuatorId, ActuatorModelName, DeviceId};

use crate::ports::{ActuatorModelRepository, ActuatorRepository, DeviceRepository, Repository};

/// Application service for actuator installation and relocation.
pub struct ActuatorService<A, D, M> {
    actuators: A,
    devices: D,
    models: M,
}

impl<A, D, M> ActuatorService<A, D, M>
where
    A: ActuatorRepository,
    D: DeviceRepository,
    M: ActuatorModelRepository,
{
    /// Create a new service backed by the given repositories.
    pub fn new(actuators: A, devices: D, models: M) -> Self {
        Self {
            actuators,
            devices,
            models,
        }
    }

    /// Install an actuator of a cataloged model on an existing device.
    ///
    /// Limits are optional and depend on the actuator kind: a blind roller
    /// carries integer limits, a precision setter carries decimal limits,
    /// an on/off switch carries neither.
    ///
    /// # Errors
    ///
    /// Returns [`DomoError::NotFound`] when the device or the actuator model
    /// does not exist, or a storage error from the repository.
    #[tracing::instrument(skip(self, int_limits, decimal_limits), fields(device = %device_id, model = %model_name))]
    pub async fn add_actuator(
        &self,
        device_id: DeviceId,
        model_name: ActuatorModelName,
        int_limits: Option<IntLimits>,
        decimal_limits: Option<DecimalLimits>,
    ) -> Result<Actuator, DomoError> {
        if !self.devices.exists_by_identity(&device_id).await? {
            return Err(NotFoundError {
                entity: "Device",
                id: device_id.to_string(),
            }
            .into());
        }
        if !self.models.exists_by_identity(&model_name).await? {
            return Err(NotFoundError {
                entity: "ActuatorModel",
                id: model_name.to_string(),
            }
            .into());
        }
        let actuator = Actuator::new(device_id, model_name, int_limits, decimal_limits);
        self.actuators.save(actuator).await
    }

    /// Look an actuator up by id.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn get_actuator(&self, id: ActuatorId) -> Result<Option<Actuator>, DomoError> {
        self.actuators.find_by_identity(&id).await
    }

    /// All actuators installed on a device.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn actuators_of_device(
        &self,
        device_id: DeviceId,
    ) -> Result<Vec<Actuator>, DomoError> {
        self.actuators.find_actuators_by_device_id(device_id).await
    }

    /// Move an actuator to another existing device.
    ///
    /// # Errors
    ///
    /// Returns [`DomoError::NotFound`] when the actuator or the target device
    /// does not exist, or a storage error from the repository.
    #[tracing::instrument(skip(self), fields(actuator = %id, device = %device_id))]
    pub async fn relocate_actuator(
        &self,
        id: ActuatorId,
        device_id: DeviceId,
    ) -> Result<Actuator, DomoError> {
        if !self.devices.exists_by_identity(&device_id).await? {
            return Err(NotFoundError {
                entity: "Device",
                id: device_id.to_string(),
            }
            .into());
        }
        let mut actuator =
            self.actuators
                .find_by_identity(&id)
                .await?
                .ok_or_else(|| NotFoundError {
                    entity: "Actuator",
                    id: id.to_string(),
                })?;
        actuator.relocate(device_id);
        self.actuators.save(actuator).await
    }
}
