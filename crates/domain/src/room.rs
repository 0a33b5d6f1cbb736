//! Room — a floor-level space inside a house.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::id::{HouseName, RoomId, RoomName};

/// The floor a room sits on. Negative floors are basements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Floor(i16);

impl Floor {
    #[must_use]
    pub fn new(level: i16) -> Self {
        Self(level)
    }

    #[must_use]
    pub fn level(self) -> i16 {
        self.0
    }
}

/// Room dimensions in meters. All three must be strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    width: f64,
    height: f64,
    length: f64,
}

impl Dimensions {
    /// Validate and build dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NonPositiveDimension`] when any side is
    /// zero or negative.
    pub fn new(width: f64, height: f64, length: f64) -> Result<Self, ValidationError> {
        for (what, value) in [("width", width), ("height", height), ("length", length)] {
            if value <= 0.0 {
                return Err(ValidationError::NonPositiveDimension { what, value });
            }
        }
        Ok(Self {
            width,
            height,
            length,
        })
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        self.length
    }
}

/// The room aggregate. Holds its parent [`HouseName`] by identifier only, so
/// no cyclic object graph can form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    id: RoomId,
    name: RoomName,
    house_name: HouseName,
    floor: Floor,
    dimensions: Dimensions,
}

impl Room {
    /// Create a fresh room, generating its identity.
    #[must_use]
    pub fn new(name: RoomName, house_name: HouseName, floor: Floor, dimensions: Dimensions) -> Self {
        Self::restore(RoomId::new(), name, house_name, floor, dimensions)
    }

    /// Reconstruct a room from storage with a known identity.
    #[must_use]
    pub fn restore(
        id: RoomId,
        name: RoomName,
        house_name: HouseName,
        floor: Floor,
        dimensions: Dimensions,
    ) -> Self {
        Self {
            id,
            name,
            house_name,
            floor,
            dimensions,
        }
    }

    /// The generated identity, immutable once set.
    #[must_use]
    pub fn identity(&self) -> RoomId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &RoomName {
        &self.name
    }

    #[must_use]
    pub fn house_name(&self) -> &HouseName {
        &self.house_name
    }

    #[must_use]
    pub fn floor(&self) -> Floor {
        self.floor
    }

    #[must_use]
    pub fn dimensions(&self) -> &Dimensions {
        &self.dimensions
    }
}

impl PartialEq for Room {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Room {}

impl std::hash::Hash for Room {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
