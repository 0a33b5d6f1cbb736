//! Actuator repository port.

use std::future::Future;

use domo_domain::actuator::Actuator;
use domo_domain::error::DomoError;
use domo_domain::id::{ActuatorId, DeviceId};

use super::repository::Repository;

/// Repository for [`Actuator`] aggregates.
pub trait ActuatorRepository: Repository<ActuatorId, Actuator> {
    /// All actuators installed on a device.
    fn find_actuators_by_device_id(
        &self,
        device_id: DeviceId,
    ) -> impl Future<Output = Result<Vec<Actuator>, DomoError>> + Send;

    /// Identity-only projection of [`Self::find_actuators_by_device_id`].
    fn find_actuator_ids_by_device_id(
        &self,
        device_id: DeviceId,
    ) -> impl Future<Output = Result<Vec<ActuatorId>, DomoError>> + Send;
}
