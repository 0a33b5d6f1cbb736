//! In-memory implementation of [`RoomRepository`].

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, RwLock};

use domo_app::ports::{Repository, RoomRepository};
use domo_domain::error::DomoError;
use domo_domain::id::{HouseName, RoomId};
use domo_domain::room::Room;

use crate::lock;

/// In-memory room store keyed by generated room id.
#[derive(Clone, Default)]
pub struct InMemoryRoomRepository {
    store: Arc<RwLock<HashMap<RoomId, Room>>>,
}

impl InMemoryRoomRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Repository<RoomId, Room> for InMemoryRoomRepository {
    fn save(&self, room: Room) -> impl Future<Output = Result<Room, DomoError>> + Send {
        let result = lock::write(&self.store).map(|mut store| {
            store.insert(room.identity(), room.clone());
            room
        });
        async { result }
    }

    fn find_by_identity(
        &self,
        id: &RoomId,
    ) -> impl Future<Output = Result<Option<Room>, DomoError>> + Send {
        let result = lock::read(&self.store).map(|store| store.get(id).cloned());
        async { result }
    }

    fn find_all(&self) -> impl Future<Output = Result<Vec<Room>, DomoError>> + Send {
        let result = lock::read(&self.store).map(|store| store.values().cloned().collect());
        async { result }
    }

    fn exists_by_identity(
        &self,
        id: &RoomId,
    ) -> impl Future<Output = Result<bool, DomoError>> + Send {
        let result = lock::read(&self.store).map(|store| store.contains_key(id));
        async { result }
    }
}

impl RoomRepository for InMemoryRoomRepository {
    fn find_rooms_by_house_name(
        &self,
        house_name: &HouseName,
    ) -> impl Future<Output = Result<Vec<Room>, DomoError>> + Send {
        let result = lock::read(&self.store).map(|store| {
            store
                .values()
                .filter(|room| room.house_name() == house_name)
                .cloned()
                .collect()
        });
        async { result }
    }
}
