//! Device repository port.

use std::future::Future;

use domo_domain::device::Device;
use domo_domain::error::DomoError;
use domo_domain::id::{DeviceId, DeviceTypeName, RoomId};

use super::repository::Repository;

/// Repository for [`Device`] aggregates.
pub trait DeviceRepository: Repository<DeviceId, Device> {
    /// All devices installed in a room.
    fn find_devices_by_room_id(
        &self,
        room_id: RoomId,
    ) -> impl Future<Output = Result<Vec<Device>, DomoError>> + Send;

    /// Identity-only projection of the devices of a given type. Avoids
    /// materializing full aggregates when only keys are needed.
    fn find_device_ids_by_device_type(
        &self,
        type_name: &DeviceTypeName,
    ) -> impl Future<Output = Result<Vec<DeviceId>, DomoError>> + Send;

    /// Identity-only projection of every stored device.
    fn find_device_ids(&self) -> impl Future<Output = Result<Vec<DeviceId>, DomoError>> + Send;
}
