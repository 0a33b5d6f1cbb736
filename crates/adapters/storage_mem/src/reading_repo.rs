//! In-memory implementation of [`ReadingRepository`].
//!
//! Readings are insert-only: saving an identity that already exists is a
//! duplicate-identity storage error, never an overwrite.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::future::Future;
use std::sync::{Arc, RwLock};

use domo_app::ports::{ReadingRepository, Repository};
use domo_domain::error::{DomoError, StorageError};
use domo_domain::id::{ReadingId, SensorId};
use domo_domain::reading::Reading;
use domo_domain::time::Period;

use crate::lock;

/// In-memory reading store keyed by generated reading id.
#[derive(Clone, Default)]
pub struct InMemoryReadingRepository {
    store: Arc<RwLock<HashMap<ReadingId, Reading>>>,
}

impl InMemoryReadingRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Repository<ReadingId, Reading> for InMemoryReadingRepository {
    fn save(&self, reading: Reading) -> impl Future<Output = Result<Reading, DomoError>> + Send {
        let result = lock::write(&self.store).and_then(|mut store| {
            match store.entry(reading.identity()) {
                Entry::Occupied(_) => Err(StorageError::DuplicateIdentity {
                    entity: "Reading",
                    id: reading.identity().to_string(),
                }
                .into()),
                Entry::Vacant(slot) => {
                    slot.insert(reading.clone());
                    Ok(reading)
                }
            }
        });
        async { result }
    }

    fn find_by_identity(
        &self,
        id: &ReadingId,
    ) -> impl Future<Output = Result<Option<Reading>, DomoError>> + Send {
        let result = lock::read(&self.store).map(|store| store.get(id).cloned());
        async { result }
    }

    fn find_all(&self) -> impl Future<Output = Result<Vec<Reading>, DomoError>> + Send {
        let result = lock::read(&self.store).map(|store| store.values().cloned().collect());
        async { result }
    }

    fn exists_by_identity(
        &self,
        id: &ReadingId,
    ) -> impl Future<Output = Result<bool, DomoError>> + Send {
        let result = lock::read(&self.store).map(|store| store.contains_key(id));
        async { result }
    }
}

impl ReadingRepository for InMemoryReadingRepository {
    fn find_readings_by_sensor_id_in_period(
        &self,
        sensor_id: SensorId,
        period: &Period,
    ) -> impl Future<Output = Result<Vec<Reading>, DomoError>> + Send {
        let result = lock::read(&self.store).map(|store| {
            store
                .values()
                .filter(|reading| {
                    reading.sensor_id() == sensor_id && period.contains(reading.timestamp())
                })
                .cloned()
                .collect()
        });
        async { result }
    }

    fn find_reading_ids_by_sensor_id_in_period(
        &self,
        sensor_id: SensorId,
        period: &Period,
    ) -> impl Future<Output = Result<Vec<ReadingId>, DomoError>> + Send {
        let result = lock::read(&self.store).map(|store| {
            store
                .values()
                .filter(|reading| {
                    reading.sensor_id() == sensor_id && period.contains(reading.timestamp())
                })
                .map(Reading::identity)
                .collect()
        });
        async { result }
    }

    fn find_latest_reading_by_sensor_id(
        &self,
        sensor_id: SensorId,
    ) -> impl Future<Output = Result<Option<Reading>, DomoError>> + Send {
        let result = lock::read(&self.store).map(|store| {
            store
                .values()
                .filter(|reading| reading.sensor_id() == sensor_id)
                .max_by_key(|reading| reading.timestamp())
                .cloned()
        });
        async { result }
    }
}
