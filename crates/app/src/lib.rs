//! # domo-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `Repository<Id, A>` — the generic persistence contract
//!   - `HouseRepository`, `RoomRepository`, `DeviceRepository`,
//!     `SensorRepository`, `ActuatorRepository`, `ReadingRepository` —
//!     aggregate repositories with their query extensions
//!   - catalog repositories for sensor/actuator types and models
//! - Define **driving/inbound ports** as use-case structs:
//!   - `HouseService`, `RoomService`, `DeviceService` — structure setup
//!   - `SensorService`, `ActuatorService` — hardware installation
//!   - `ReadingService` — ingestion and the aggregation queries
//! - Parse configuration and seed the catalog from it
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `domo-domain` only (plus `serde`/`toml` for configuration).
//! Never imports adapter crates. Adapters depend on *this* crate, not the
//! reverse.

pub mod config;
pub mod ports;
pub mod services;
