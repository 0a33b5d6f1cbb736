//! Room service — use-cases for managing rooms within a house.

use domo_domain::error::{DomoError, NotFoundError};
use domo_domain::id::{HouseName, RoomId, RoomName};
use domo_domain::room::{Dimensions, Floor, Room};

use crate::ports::{HouseRepository, Repository, RoomRepository};

/// Application service for room management.
pub struct RoomService<R, H> {
    rooms: R,
    houses: H,
}

impl<R: RoomRepository, H: HouseRepository> RoomService<R, H> {
    /// Create a new service backed by the given repositories.
    pub fn new(rooms: R, houses: H) -> Self {
        Self { rooms, houses }
    }

    /// Add a room to an existing house.
    ///
    /// # Errors
    ///
    /// Returns [`DomoError::NotFound`] when the house does not exist, or a
    /// storage error from the repository.
    #[tracing::instrument(skip(self, dimensions), fields(room = %name, house = %house_name))]
    pub async fn add_room(
        &self,
        name: RoomName,
        house_name: HouseName,
        floor: Floor,
        dimensions: Dimensions,
    ) -> Result<Room, DomoError> {
        if !self.houses.exists_by_identity(&house_name).await? {
            return Err(NotFoundError {
                entity: "House",
                id: house_name.to_string(),
            }
            .into());
        }
        let room = Room::new(name, house_name, floor, dimensions);
        self.rooms.save(room).await
    }

    /// Look a room up by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`DomoError::NotFound`] when no room with `id` exists.
    pub async fn get_room(&self, id: RoomId) -> Result<Room, DomoError> {
        self.rooms.find_by_identity(&id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Room",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// All rooms of a house.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn rooms_in_house(&self, house_name: &HouseName) -> Result<Vec<Room>, DomoError> {
        self.rooms.find_rooms_by_house_name(house_name).await
    }

    /// List all rooms.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_rooms(&self) -> Result<Vec<Room>, DomoError> {
        self.rooms.find_all().await
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::future::Future;
    use std::sync::Mutex;

    use domo_domain::house::{Address, Gps, House, Location};

    use super::*;

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
    struct InMemoryHouseRepo {
        store: Mutex<HashMap<String, House>>,
    }

    impl Repository<HouseName, House> for InMemoryHouseRepo {
        fn save(&self, house: House) -> impl Future<Output = Result<House, DomoError>> + Send {
            let mut store = self.store.lock().unwrap();
            store.insert(house.identity().to_string(), house.clone());
            async { Ok(house) }
        }

        fn find_by_identity(
            &self,
            name: &HouseName,
        ) -> impl Future<Output = Result<Option<House>, DomoError>> + Send {
            let store = self.store.lock().unwrap();
            let result = store.get(name.as_str()).cloned();
            async { Ok(result) }
        }

        fn find_all(&self) -> impl Future<Output = Result<Vec<House>, DomoError>> + Send {
            let store = self.store.lock().unwrap();
            let result: Vec<House> = store.values().cloned().collect();
            async { Ok(result) }
        }

        fn exists_by_identity(
            &self,
            name: &HouseName,
        ) -> impl Future<Output = Result<bool, DomoError>> + Send {
            let store = self.store.lock().unwrap();
            let result = store.contains_key(name.as_str());
            async move { Ok(result) }
        }
    }

    impl HouseRepository for InMemoryHouseRepo {}

    async fn service_with_house(name: &str) -> RoomService<InMemoryRoomRepo, InMemoryHouseRepo> {
        let houses = InMemoryHouseRepo::default();
        let address = Address::new("Rua de Cedofeita", "120", "4050-180", "Portugal").unwrap();
        let location = Location::new(address, Gps::new(41.15, -8.62).unwrap());
        houses
            .save(House::new(HouseName::new(name).unwrap(), location))
            .await
            .unwrap();
        RoomService::new(InMemoryRoomRepo::default(), houses)
    }

    fn dims() -> Dimensions {
        Dimensions::new(4.0, 2.6, 5.0).unwrap()
    }

    #[tokio::test]
    async fn should_add_room_to_existing_house() {
        let svc = service_with_house("Main House").await;
        let room = svc
            .add_room(
                RoomName::new("Kitchen").unwrap(),
                HouseName::new("Main House").unwrap(),
                Floor::new(0),
                dims(),
            )
            .await
            .unwrap();

        let fetched = svc.get_room(room.identity()).await.unwrap();
        assert_eq!(fetched, room);
        assert_eq!(fetched.name().as_str(), "Kitchen");
    }

    #[tokio::test]
    async fn should_reject_room_for_unknown_house() {
        let svc = service_with_house("Main House").await;
        let result = svc
            .add_room(
                RoomName::new("Kitchen").unwrap(),
                HouseName::new("Other House").unwrap(),
                Floor::new(0),
                dims(),
            )
            .await;
        assert!(matches!(result, Err(DomoError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_list_only_rooms_of_requested_house() {
        let svc = service_with_house("Main House").await;
        svc.houses
            .save(House::new(
                HouseName::new("Beach House").unwrap(),
                Location::new(
                    Address::new("Gran Via", "1", "28013", "Spain").unwrap(),
                    Gps::new(40.42, -3.70).unwrap(),
                ),
            ))
            .await
            .unwrap();

        svc.add_room(
            RoomName::new("Kitchen").unwrap(),
            HouseName::new("Main House").unwrap(),
            Floor::new(0),
            dims(),
        )
        .await
        .unwrap();
        svc.add_room(
            RoomName::new("Bedroom").unwrap(),
            HouseName::new("Beach House").unwrap(),
            Floor::new(1),
            dims(),
        )
        .await
        .unwrap();

        let rooms = svc
            .rooms_in_house(&HouseName::new("Main House").unwrap())
            .await
            .unwrap();
        assert_eq!(rooms.len(), 1);
        assert_eq!(rooms[0].name().as_str(), "Kitchen");
    }
}
