//! Room repository port.

use std::future::Future;

use domo_domain::error::DomoError;
use domo_domain::id::{HouseName, RoomId};
use domo_domain::room::Room;

use super::repository::Repository;

/// Repository for [`Room`] aggregates.
pub trait RoomRepository: Repository<RoomId, Room> {
    /// All rooms belonging to a house.
    fn find_rooms_by_house_name(
        &self,
        house_name: &HouseName,
    ) -> impl Future<Output = Result<Vec<Room>, DomoError>> + Send;
}
