//! Port definitions — traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the outside
//! world. They are defined here (in `app`) so that both the use-case layer
//! and the adapter layer can depend on them without creating circular
//! dependencies.

pub mod actuator_repo;
pub mod catalog_repo;
pub mod device_repo;
pub mod house_repo;
pub mod reading_repo;
pub mod repository;
pub mod room_repo;
pub mod sensor_repo;

pub use actuator_repo::ActuatorRepository;
pub use catalog_repo::{
    ActuatorModelRepository, ActuatorTypeRepository, DeviceTypeRepository, SensorModelRepository,
    SensorTypeRepository,
};
pub use device_repo::DeviceRepository;
pub use house_repo::HouseRepository;
pub use reading_repo::ReadingRepository;
pub use repository::Repository;
pub use room_repo::RoomRepository;
pub use sensor_repo::SensorRepository;
