//! # domo-adapter-storage-mem
//!
//! In-memory persistence adapter backed by `Arc<RwLock<HashMap>>` stores.
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `domo-app::ports`
//! - Enforce storage-level rules the ports demand (readings are insert-only)
//! - Keep every query a consistent snapshot of a single store
//!
//! Repositories are cheap-to-clone handles: clones share the same store, so
//! several services can be wired over one set of aggregates.
//!
//! ## Dependency rule
//! Depends on `domo-app` (for port traits) and `domo-domain` (for domain
//! types). The `app` and `domain` crates must never reference this adapter.

pub mod actuator_repo;
pub mod catalog_repo;
pub mod device_repo;
pub mod house_repo;
mod lock;
pub mod reading_repo;
pub mod room_repo;
pub mod sensor_repo;

pub use actuator_repo::InMemoryActuatorRepository;
pub use catalog_repo::{
    InMemoryActuatorModelRepository, InMemoryActuatorTypeRepository,
    InMemoryDeviceTypeRepository, InMemorySensorModelRepository, InMemorySensorTypeRepository,
};
pub use device_repo::InMemoryDeviceRepository;
pub use house_repo::InMemoryHouseRepository;
pub use reading_repo::InMemoryReadingRepository;
pub use room_repo::InMemoryRoomRepository;
pub use sensor_repo::InMemorySensorRepository;
