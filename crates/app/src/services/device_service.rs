//! Device service — use-cases for managing devices, including the one
//! domain state transition (deactivation).

use domo_domain::device::Device;
use domo_domain::error::{DomoError, NotFoundError};
use domo_domain::id::{DeviceId, DeviceName, DeviceTypeName, RoomId};

use crate::ports::{DeviceRepository, DeviceTypeRepository, Repository, RoomRepository};

/// Application service for device management.
pub struct DeviceService<D, R, T> {
    devices: D,
    rooms: R,
    device_types: T,
}

impl<D, R, T> DeviceService<D, R, T>
where
    D: DeviceRepository,
    R: RoomRepository,
    T: DeviceTypeRepository,
{
    /// Create a new service backed by the given repositories.
    pub fn new(devices: D, rooms: R, device_types: T) -> Self {
        Self {
            devices,
            rooms,
            device_types,
        }
    }

    /// Install a device in an existing room. The device type must be part
    /// of the seeded catalog.
    ///
    /// # Errors
    ///
    /// Returns [`DomoError::NotFound`] when the room or the device type does
    /// not exist, or a storage error from the repository.
    #[tracing::instrument(skip(self), fields(device = %name, room = %room_id))]
    pub async fn add_device(
        &self,
        name: DeviceName,
        type_name: DeviceTypeName,
        room_id: RoomId,
    ) -> Result<Device, DomoError> {
        if !self.rooms.exists_by_identity(&room_id).await? {
            return Err(NotFoundError {
                entity: "Room",
                id: room_id.to_string(),
            }
            .into());
        }
        if !self.device_types.exists_by_identity(&type_name).await? {
            return Err(NotFoundError {
                entity: "DeviceType",
                id: type_name.to_string(),
            }
            .into());
        }
        let device = Device::new(name, type_name, room_id);
        self.devices.save(device).await
    }

    /// Look a device up by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`DomoError::NotFound`] when no device with `id` exists.
    pub async fn get_device(&self, id: DeviceId) -> Result<Device, DomoError> {
        self.devices.find_by_identity(&id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Device",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// List all devices.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_devices(&self) -> Result<Vec<Device>, DomoError> {
        self.devices.find_all().await
    }

    /// All devices installed in a room.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn devices_in_room(&self, room_id: RoomId) -> Result<Vec<Device>, DomoError> {
        self.devices.find_devices_by_room_id(room_id).await
    }

    /// Identity-only projection of the devices of a given type.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn device_ids_by_type(
        &self,
        type_name: &DeviceTypeName,
    ) -> Result<Vec<DeviceId>, DomoError> {
        self.devices.find_device_ids_by_device_type(type_name).await
    }

    /// Deactivate a device and persist the transition.
    ///
    /// # Errors
    ///
    /// Returns [`DomoError::NotFound`] when the device does not exist, and
    /// [`DomoError::Rule`] when it is already inactive — the repeat call is
    /// a caller-logic error, not a no-op.
    #[tracing::instrument(skip(self))]
    pub async fn deactivate_device(&self, id: DeviceId) -> Result<Device, DomoError> {
        let mut device = self.get_device(id).await?;
        device.deactivate()?;
        self.devices.save(device).await
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::future::Future;
    use std::sync::Mutex;

    use domo_domain::device::DeviceType;
    use domo_domain::id::{HouseName, RoomName};
    use domo_domain::room::{Dimensions, Floor, Room};

    use super::*;

    #[derive(Default)]
    struct InMemoryDeviceRepo {
        store: Mutex<HashMap<DeviceId, Device>>,
    }

    impl Repository<DeviceId, Device> for InMemoryDeviceRepo {
        fn save(&self, device: Device) -> impl Future<Output = Result<Device, DomoError>> + Send {
            let mut store = self.store.lock().unwrap();
            store.insert(device.identity(), device.clone());
            async { Ok(device) }
        }

        fn find_by_identity(
            &self,
            id: &DeviceId,
        ) -> impl Future<Output = Result<Option<Device>, DomoError>> + Send {
            let store = self.store.lock().unwrap();
            let result = store.get(id).cloned();
            async { Ok(result) }
        }

        fn find_all(&self) -> impl Future<Output = Result<Vec<Device>, DomoError>> + Send {
            let store = self.store.lock().unwrap();
            let result: Vec<Device> = store.values().cloned().collect();
            async { Ok(result) }
        }

        fn exists_by_identity(
            &self,
            id: &DeviceId,
        ) -> impl Future<Output = Result<bool, DomoError>> + Send {
            let store = self.store.lock().unwrap();
            let result = store.contains_key(id);
            async move { Ok(result) }
        }
    }

    impl DeviceRepository for InMemoryDeviceRepo {
        fn find_devices_by_room_id(
            &self,
            room_id: RoomId,
        ) -> impl Future<Output = Result<Vec<Device>, DomoError>> + Send {
            let store = self.store.lock().unwrap();
            let result: Vec<Device> = store
                .values()
                .filter(|device| device.room_id() == room_id)
                .cloned()
                .collect();
            async { Ok(result) }
        }

        fn find_device_ids_by_device_type(
            &self,
            type_name: &DeviceTypeName,
        ) -> impl Future<Output = Result<Vec<DeviceId>, DomoError>> + Send {
            let store = self.store.lock().unwrap();
            let result: Vec<DeviceId> = store
                .values()
                .filter(|device| device.type_name() == type_name)
                .map(Device::identity)
                .collect();
            async { Ok(result) }
        }

        fn find_device_ids(&self) -> impl Future<Output = Result<Vec<DeviceId>, DomoError>> + Send {
            let store = self.store.lock().unwrap();
            let result: Vec<DeviceId> = store.keys().copied().collect();
            async { Ok(result) }
        }
    }

    #[derive(Default)]
    struct InMemoryRoomRepo {
        store: Mutex<HashMap<RoomId, Room>>,
    }

    impl Repository<RoomId, Room> for InMemoryRoomRepo {
        fn save(&self, room: Room) -> impl Future<Output = Result<Room, DomoError>> + Send {
            let mut store = self.store.lock().unwrap();
            store.insert(room.identity(), room.clone());
            async { Ok(room) }
        }

        fn find_by_identity(
            &self,
            id: &RoomId,
        ) -> impl Future<Output = Result<Option<Room>, DomoError>> + Send {
            let store = self.store.lock().unwrap();
            let result = store.get(id).cloned();
            async { Ok(result) }
        }

        fn find_all(&self) -> impl Future<Output = Result<Vec<Room>, DomoError>> + Send {
            let store = self.store.lock().unwrap();
            let result: Vec<Room> = store.values().cloned().collect();
            async { Ok(result) }
        }

        fn exists_by_identity(
            &self,
            id: &RoomId,
        ) -> impl Future<Output = Result<bool, DomoError>> + Send {
            let store = self.store.lock().unwrap();
            let result = store.contains_key(id);
            async move { Ok(result) }
        }
    }

    impl RoomRepository for InMemoryRoomRepo {
        fn find_rooms_by_house_name(
            &self,
            house_name: &HouseName,
        ) -> impl Future<Output = Result<Vec<Room>, DomoError>> + Send {
            let store = self.store.lock().unwrap();
            let result: Vec<Room> = store
                .values()
                .filter(|room| room.house_name() == house_name)
                .cloned()
                .collect();
            async { Ok(result) }
        }
    }

    #[derive(Default)]
    struct InMemoryDeviceTypeRepo {
        store: Mutex<HashMap<String, DeviceType>>,
    }

    impl Repository<DeviceTypeName, DeviceType> for InMemoryDeviceTypeRepo {
        fn save(
            &self,
            device_type: DeviceType,
        ) -> impl Future<Output = Result<DeviceType, DomoError>> + Send {
            let mut store = self.store.lock().unwrap();
            store.insert(device_type.identity().to_string(), device_type.clone());
            async { Ok(device_type) }
        }

        fn find_by_identity(
            &self,
            name: &DeviceTypeName,
        ) -> impl Future<Output = Result<Option<DeviceType>, DomoError>> + Send {
            let store = self.store.lock().unwrap();
            let result = store.get(name.as_str()).cloned();
            async { Ok(result) }
        }

        fn find_all(&self) -> impl Future<Output = Result<Vec<DeviceType>, DomoError>> + Send {
            let store = self.store.lock().unwrap();
            let result: Vec<DeviceType> = store.values().cloned().collect();
            async { Ok(result) }
        }

        fn exists_by_identity(
            &self,
            name: &DeviceTypeName,
        ) -> impl Future<Output = Result<bool, DomoError>> + Send {
            let store = self.store.lock().unwrap();
            let result = store.contains_key(name.as_str());
            async move { Ok(result) }
        }
    }

    impl DeviceTypeRepository for InMemoryDeviceTypeRepo {}

    async fn make_service() -> (
        DeviceService<InMemoryDeviceRepo, InMemoryRoomRepo, InMemoryDeviceTypeRepo>,
        RoomId,
    ) {
        let rooms = InMemoryRoomRepo::default();
        let room = Room::new(
            RoomName::new("Kitchen").unwrap(),
            HouseName::new("Main House").unwrap(),
            Floor::new(0),
            Dimensions::new(4.0, 2.6, 5.0).unwrap(),
        );
        let room_id = room.identity();
        rooms.save(room).await.unwrap();

        let device_types = InMemoryDeviceTypeRepo::default();
        for name in ["Thermostat", "GridPowerMeter"] {
            device_types
                .save(DeviceType::new(DeviceTypeName::new(name).unwrap()))
                .await
                .unwrap();
        }

        (
            DeviceService::new(InMemoryDeviceRepo::default(), rooms, device_types),
            room_id,
        )
    }

    #[tokio::test]
    async fn should_add_device_to_existing_room() {
        let (svc, room_id) = make_service().await;
        let device = svc
            .add_device(
                DeviceName::new("Living Room Thermostat").unwrap(),
                DeviceTypeName::new("Thermostat").unwrap(),
                room_id,
            )
            .await
            .unwrap();

        let fetched = svc.get_device(device.identity()).await.unwrap();
        assert_eq!(fetched, device);
        assert!(fetched.status().is_active());
    }

    #[tokio::test]
    async fn should_reject_device_for_unknown_room() {
        let (svc, _) = make_service().await;
        let result = svc
            .add_device(
                DeviceName::new("Thermostat").unwrap(),
                DeviceTypeName::new("Thermostat").unwrap(),
                RoomId::new(),
            )
            .await;
        assert!(matches!(result, Err(DomoError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_reject_device_of_unseeded_type() {
        let (svc, room_id) = make_service().await;
        let result = svc
            .add_device(
                DeviceName::new("Mystery Box").unwrap(),
                DeviceTypeName::new("UnknownType").unwrap(),
                room_id,
            )
            .await;
        assert!(matches!(result, Err(DomoError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_deactivate_device_once_and_fail_on_repeat() {
        let (svc, room_id) = make_service().await;
        let device = svc
            .add_device(
                DeviceName::new("Thermostat").unwrap(),
                DeviceTypeName::new("Thermostat").unwrap(),
                room_id,
            )
            .await
            .unwrap();

        let deactivated = svc.deactivate_device(device.identity()).await.unwrap();
        assert!(!deactivated.status().is_active());

        let result = svc.deactivate_device(device.identity()).await;
        assert!(matches!(result, Err(DomoError::Rule(_))));
    }

    #[tokio::test]
    async fn should_filter_devices_by_room_and_type() {
        let (svc, room_id) = make_service().await;
        let thermostat = svc
            .add_device(
                DeviceName::new("Thermostat").unwrap(),
                DeviceTypeName::new("Thermostat").unwrap(),
                room_id,
            )
            .await
            .unwrap();
        let meter = svc
            .add_device(
                DeviceName::new("Meter").unwrap(),
                DeviceTypeName::new("GridPowerMeter").unwrap(),
                room_id,
            )
            .await
            .unwrap();

        let in_room = svc.devices_in_room(room_id).await.unwrap();
        assert_eq!(in_room.len(), 2);

        let meters = svc
            .device_ids_by_type(&DeviceTypeName::new("GridPowerMeter").unwrap())
            .await
            .unwrap();
        assert_eq!(meters, vec![meter.identity()]);
        assert_ne!(meters[0], thermostat.identity());
    }
}
