//! # domo-domain
//!
//! Pure domain model for the domo smart-home system.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//!   and periods
//! - Define the **aggregates** (House, Room, Device, Sensor, Actuator,
//!   Reading) and their catalogs (sensor/actuator types and models, device
//!   types)
//! - Enforce every construction invariant: no partially-constructed
//!   aggregate is observable
//! - Identity semantics: aggregates compare and hash by identity only;
//!   value objects compare by all fields and are immutable
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO
//! crates. All IO boundaries are expressed as traits in the `app` crate
//! (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod actuator;
pub mod device;
pub mod house;
pub mod reading;
pub mod room;
pub mod sensor;
