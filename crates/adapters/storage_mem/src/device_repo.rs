//! In-memory implementation of [`DeviceRepository`].

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, RwLock};

use domo_app::ports::{DeviceRepository, Repository};
use domo_domain::device::Device;
use domo_domain::error::DomoError;
use domo_domain::id::{DeviceId, DeviceTypeName, RoomId};

use crate::lock;

/// In-memory device store keyed by generated device id.
#[derive(Clone, Default)]
pub struct InMemoryDeviceRepository {
    store: Arc<RwLock<HashMap<DeviceId, Device>>>,
}

impl InMemoryDeviceRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Repository<DeviceId, Device> for InMemoryDeviceRepository {
    fn save(&self, device: Device) -> impl Future<Output = Result<Device, DomoError>> + Send {
        let result = lock::write(&self.store).map(|mut store| {
            store.insert(device.identity(), device.clone());
            device
        });
        async { result }
    }

    fn find_by_identity(
        &self,
        id: &DeviceId,
    ) -> impl Future<Output = Result<Option<Device>, DomoError>> + Send {
        let result = lock::read(&self.store).map(|store| store.get(id).cloned());
        async { result }
    }

    fn find_all(&self) -> impl Future<Output = Result<Vec<Device>, DomoError>> + Send {
        let result = lock::read(&self.store).map(|store| store.values().cloned().collect());
        async { result }
    }

    fn exists_by_identity(
        &self,
        id: &DeviceId,
    ) -> impl Future<Output = Result<bool, DomoError>> + Send {
        let result = lock::read(&self.store).map(|store| store.contains_key(id));
        async { result }
    }
}

impl DeviceRepository for InMemoryDeviceRepository {
    fn find_devices_by_room_id(
        &self,
        room_id: RoomId,
    ) -> impl Future<Output = Result<Vec<Device>, DomoError>> + Send {
        let result = lock::read(&self.store).map(|store| {
            store
                .values()
                .filter(|device| device.room_id() == room_id)
                .cloned()
                .collect()
        });
        async { result }
    }

    fn find_device_ids_by_device_type(
        &self,
        type_name: &DeviceTypeName,
    ) -> impl Future<Output = Result<Vec<DeviceId>, DomoError>> + Send {
        let result = lock::read(&self.store).map(|store| {
            store
                .values()
                .filter(|device| device.type_name() == type_name)
                .map(Device::identity)
                .collect()
        });
        async { result }
    }

    fn find_device_ids(&self) -> impl Future<Output = Result<Vec<DeviceId>, DomoError>> + Send {
        let result = lock::read(&self.store).map(|store| store.keys().copied().collect());
        async { result }
    }
}
