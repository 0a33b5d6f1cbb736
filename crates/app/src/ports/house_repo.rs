//! House repository port.

use domo_domain::house::House;
use domo_domain::id::HouseName;

use super::repository::Repository;

/// Repository for [`House`] aggregates. The generic contract is sufficient;
/// houses have no specialized finders.
pub trait HouseRepository: Repository<HouseName, House> {}
