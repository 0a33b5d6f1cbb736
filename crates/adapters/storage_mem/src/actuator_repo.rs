//! In-memory implementation of [`ActuatorRepository`].

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, RwLock};

use domo_app::ports::{ActuatorRepository, Repository};
use domo_domain::actuator::Actuator;
use domo_domain::error::DomoError;
use domo_domain::id::{ActuatorId, DeviceId};

use crate::lock;

/// In-memory actuator store keyed by generated actuator id.
#[derive(Clone, Default)]
pub struct InMemoryActuatorRepository {
    store: Arc<RwLock<HashMap<ActuatorId, Actuator>>>,
}

impl InMemoryActuatorRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Repository<ActuatorId, Actuator> for InMemoryActuatorRepository {
    fn save(&self, actuator: Actuator) -> impl Future<Output = Result<Actuator, DomoError>> + Send {
        let result = lock::write(&self.store).map(|mut store| {
            store.insert(actuator.identity(), actuator.clone());
            actuator
        });
        async { result }
    }

    fn find_by_identity(
        &self,
        id: &ActuatorId,
    ) -> impl Future<Output = Result<Option<Actuator>, DomoError>> + Send {
        let result = lock::read(&self.store).map(|store| store.get(id).cloned());
        async { result }
    }

    fn find_all(&self) -> impl Future<Output = Result<Vec<Actuator>, DomoError>> + Send {
        let result = lock::read(&self.store).map(|store| store.values().cloned().collect());
        async { result }
    }

    fn exists_by_identity(
        &self,
        id: &ActuatorId,
    ) -> impl Future<Output = Result<bool, DomoError>> + Send {
        let result = lock::read(&self.store).map(|store| store.contains_key(id));
        async { result }
    }
}

impl ActuatorRepository for InMemoryActuatorRepository {
    fn find_actuators_by_device_id(
        &self,
        device_id: DeviceId,
    ) -> impl Future<Output = Result<Vec<Actuator>, DomoError>> + Send {
        let result = lock::read(&self.store).map(|store| {
            store
                .values()
                .filter(|actuator| actuator.device_id() == device_id)
                .cloned()
                .collect()
        });
        async { result }
    }

    fn find_actuator_ids_by_device_id(
        &self,
        device_id: DeviceId,
    ) -> impl Future<Output = Result<Vec<ActuatorId>, DomoError>> + Send {
        let result = lock::read(&self.store).map(|store| {
            store
                .values()
                .filter(|actuator| actuator.device_id() == device_id)
                .map(Actuator::identity)
                .collect()
        });
        async { result }
    }
}
