//! In-memory implementations of the five catalog repositories.
//!
//! Catalog aggregates are natural-keyed and tiny; each store is a plain map
//! from the name (or derived id) to the aggregate.

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, RwLock};

use domo_app::ports::{
    ActuatorModelRepository, ActuatorTypeRepository, DeviceTypeRepository, Repository,
    SensorModelRepository, SensorTypeRepository,
};
use domo_domain::actuator::{ActuatorModel, ActuatorType};
use domo_domain::device::DeviceType;
use domo_domain::error::DomoError;
use domo_domain::id::{
    ActuatorModelName, ActuatorTypeName, DeviceTypeName, SensorModelName, SensorTypeId,
};
use domo_domain::sensor::{SensorModel, SensorType};

use crate::lock;

macro_rules! natural_key_repository {
    ($(#[$meta:meta])* $repo:ident, $id:ty, $aggregate:ty) => {
        $(#[$meta])*
        #[derive(Clone, Default)]
        pub struct $repo {
            store: Arc<RwLock<HashMap<$id, $aggregate>>>,
        }

        impl $repo {
            /// Create an empty repository.
            #[must_use]
            pub fn new() -> Self {
                Self::default()
            }
        }

        impl Repository<$id, $aggregate> for $repo {
            fn save(
                &self,
                aggregate: $aggregate,
            ) -> impl Future<Output = Result<$aggregate, DomoError>> + Send {
                let result = lock::write(&self.store).map(|mut store| {
                    store.insert(aggregate.identity().clone(), aggregate.clone());
                    aggregate
                });
                async { result }
            }

            fn find_by_identity(
                &self,
                id: &$id,
            ) -> impl Future<Output = Result<Option<$aggregate>, DomoError>> + Send {
                let result = lock::read(&self.store).map(|store| store.get(id).cloned());
                async { result }
            }

            fn find_all(
                &self,
            ) -> impl Future<Output = Result<Vec<$aggregate>, DomoError>> + Send {
                let result =
                    lock::read(&self.store).map(|store| store.values().cloned().collect());
                async { result }
            }

            fn exists_by_identity(
                &self,
                id: &$id,
            ) -> impl Future<Output = Result<bool, DomoError>> + Send {
                let result = lock::read(&self.store).map(|store| store.contains_key(id));
                async { result }
            }
        }
    };
}

natural_key_repository!(
    /// In-memory sensor type catalog, keyed by derived sensor type id.
    InMemorySensorTypeRepository,
    SensorTypeId,
    SensorType
);
natural_key_repository!(
    /// In-memory sensor model catalog.
    InMemorySensorModelRepository,
    SensorModelName,
    SensorModel
);
natural_key_repository!(
    /// In-memory actuator type catalog.
    InMemoryActuatorTypeRepository,
    ActuatorTypeName,
    ActuatorType
);
natural_key_repository!(
    /// In-memory actuator model catalog.
    InMemoryActuatorModelRepository,
    ActuatorModelName,
    ActuatorModel
);
natural_key_repository!(
    /// In-memory device type catalog.
    InMemoryDeviceTypeRepository,
    DeviceTypeName,
    DeviceType
);

impl SensorTypeRepository for InMemorySensorTypeRepository {}
impl SensorModelRepository for InMemorySensorModelRepository {}
impl ActuatorTypeRepository for InMemoryActuatorTypeRepository {}
impl ActuatorModelRepository for InMemoryActuatorModelRepository {}
impl DeviceTypeRepository for InMemoryDeviceTypeRepository {}
