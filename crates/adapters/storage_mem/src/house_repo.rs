//! In-memory implementation of [`HouseRepository`].

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, RwLock};

use domo_app::ports::{HouseRepository, Repository};
use domo_domain::error::DomoError;
use domo_domain::house::House;
use domo_domain::id::HouseName;

use crate::lock;

/// In-memory house store keyed by the house's natural identity.
#[derive(Clone, Default)]
pub struct InMemoryHouseRepository {
    store: Arc<RwLock<HashMap<HouseName, House>>>,
}

impl InMemoryHouseRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Repository<HouseName, House> for InMemoryHouseRepository {
    fn save(&self, house: House) -> impl Future<Output = Result<House, DomoError>> + Send {
        let result = lock::write(&self.store).map(|mut store| {
            store.insert(house.identity().clone(), house.clone());
            house
        });
        async { result }
    }

    fn find_by_identity(
        &self,
        name: &HouseName,
    ) -> impl Future<Output = Result<Option<House>, DomoError>> + Send {
        let result = lock::read(&self.store).map(|store| store.get(name).cloned());
        async { result }
    }

    fn find_all(&self) -> impl Future<Output = Result<Vec<House>, DomoError>> + Send {
        let result = lock::read(&self.store).map(|store| store.values().cloned().collect());
        async { result }
    }

    fn exists_by_identity(
        &self,
        name: &HouseName,
    ) -> impl Future<Output = Result<bool, DomoError>> + Send {
        let result = lock::read(&self.store).map(|store| store.contains_key(name));
        async { result }
    }
}

impl HouseRepository for InMemoryHouseRepository {}
