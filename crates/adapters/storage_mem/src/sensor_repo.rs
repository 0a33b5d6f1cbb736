//! In-memory implementation of [`SensorRepository`].

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, RwLock};

use domo_app::ports::{Repository, SensorRepository};
use domo_domain::error::DomoError;
use domo_domain::id::{DeviceId, SensorId, SensorModelName};
use domo_domain::sensor::Sensor;

use crate::lock;

/// In-memory sensor store keyed by generated sensor id.
#[derive(Clone, Default)]
pub struct InMemorySensorRepository {
    store: Arc<RwLock<HashMap<SensorId, Sensor>>>,
}

impl InMemorySensorRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Repository<SensorId, Sensor> for InMemorySensorRepository {
    fn save(&self, sensor: Sensor) -> impl Future<Output = Result<Sensor, DomoError>> + Send {
        let result = lock::write(&self.store).map(|mut store| {
            store.insert(sensor.identity(), sensor.clone());
            sensor
        });
        async { result }
    }

    fn find_by_identity(
        &self,
        id: &SensorId,
    ) -> impl Future<Output = Result<Option<Sensor>, DomoError>> + Send {
        let result = lock::read(&self.store).map(|store| store.get(id).cloned());
        async { result }
    }

    fn find_all(&self) -> impl Future<Output = Result<Vec<Sensor>, DomoError>> + Send {
        let result = lock::read(&self.store).map(|store| store.values().cloned().collect());
        async { result }
    }

    fn exists_by_identity(
        &self,
        id: &SensorId,
    ) -> impl Future<Output = Result<bool, DomoError>> + Send {
        let result = lock::read(&self.store).map(|store| store.contains_key(id));
        async { result }
    }
}

impl SensorRepository for InMemorySensorRepository {
    fn find_sensors_by_device_id(
        &self,
        device_id: DeviceId,
    ) -> impl Future<Output = Result<Vec<Sensor>, DomoError>> + Send {
        let result = lock::read(&self.store).map(|store| {
            store
                .values()
                .filter(|sensor| sensor.device_id() == device_id)
                .cloned()
                .collect()
        });
        async { result }
    }

    fn find_sensors_by_device_id_and_model(
        &self,
        device_id: DeviceId,
        model_name: &SensorModelName,
    ) -> impl Future<Output = Result<Vec<Sensor>, DomoError>> + Send {
        let result = lock::read(&self.store).map(|store| {
            store
                .values()
                .filter(|sensor| {
                    sensor.device_id() == device_id && sensor.model_name() == model_name
                })
                .cloned()
                .collect()
        });
        async { result }
    }

    fn find_sensor_ids_by_device_id_and_model(
        &self,
        device_id: DeviceId,
        model_name: &SensorModelName,
    ) -> impl Future<Output = Result<Vec<SensorId>, DomoError>> + Send {
        let result = lock::read(&self.store).map(|store| {
            store
                .values()
                .filter(|sensor| {
                    sensor.device_id() == device_id && sensor.model_name() == model_name
                })
                .map(Sensor::identity)
                .collect()
        });
        async { result }
    }
}
