//! Actuators and their catalog: actuator types, actuator models, and the
//! actuator aggregate installed on a device.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::id::{ActuatorId, ActuatorModelName, ActuatorTypeName, DeviceId};

/// A kind of actuation, e.g. a blind roller or an on/off switch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActuatorType {
    name: ActuatorTypeName,
}

impl ActuatorType {
    #[must_use]
    pub fn new(name: ActuatorTypeName) -> Self {
        Self { name }
    }

    #[must_use]
    pub fn identity(&self) -> &ActuatorTypeName {
        &self.name
    }
}

impl PartialEq for ActuatorType {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for ActuatorType {}

impl std::hash::Hash for ActuatorType {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

/// A concrete actuator product implementing one actuator type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActuatorModel {
    name: ActuatorModelName,
    actuator_type_name: ActuatorTypeName,
}

impl ActuatorModel {
    #[must_use]
    pub fn new(name: ActuatorModelName, actuator_type_name: ActuatorTypeName) -> Self {
        Self {
            name,
            actuator_type_name,
        }
    }

    #[must_use]
    pub fn identity(&self) -> &ActuatorModelName {
        &self.name
    }

    #[must_use]
    pub fn actuator_type_name(&self) -> &ActuatorTypeName {
        &self.actuator_type_name
    }
}

impl PartialEq for ActuatorModel {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for ActuatorModel {}

impl std::hash::Hash for ActuatorModel {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

/// Integer actuation range, lower and upper inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IntLimits {
    lower: i32,
    upper: i32,
}

impl IntLimits {
    /// # Errors
    ///
    /// Returns [`ValidationError::InvertedLimits`] when `lower > upper`.
    pub fn new(lower: i32, upper: i32) -> Result<Self, ValidationError> {
        if lower > upper {
            return Err(ValidationError::InvertedLimits("integer"));
        }
        Ok(Self { lower, upper })
    }

    #[must_use]
    pub fn lower(self) -> i32 {
        self.lower
    }

    #[must_use]
    pub fn upper(self) -> i32 {
        self.upper
    }
}

/// Decimal actuation range with a precision (number of decimal places).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DecimalLimits {
    lower: f64,
    upper: f64,
    precision: u8,
}

impl DecimalLimits {
    /// # Errors
    ///
    /// Returns [`ValidationError::InvertedLimits`] when `lower > upper`.
    pub fn new(lower: f64, upper: f64, precision: u8) -> Result<Self, ValidationError> {
        if lower > upper {
            return Err(ValidationError::InvertedLimits("decimal"));
        }
        Ok(Self {
            lower,
            upper,
            precision,
        })
    }

    #[must_use]
    pub fn lower(self) -> f64 {
        self.lower
    }

    #[must_use]
    pub fn upper(self) -> f64 {
        self.upper
    }

    #[must_use]
    pub fn precision(self) -> u8 {
        self.precision
    }
}

/// The actuator aggregate. Limits are optional: on/off models carry none,
/// limiter models carry one of the two ranges.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Actuator {
    id: ActuatorId,
    device_id: DeviceId,
    model_name: ActuatorModelName,
    int_limits: Option<IntLimits>,
    decimal_limits: Option<DecimalLimits>,
}

impl Actuator {
    /// Install a fresh actuator, generating its identity.
    #[must_use]
    pub fn new(
        device_id: DeviceId,
        model_name: ActuatorModelName,
        int_limits: Option<IntLimits>,
        decimal_limits: Option<DecimalLimits>,
    ) -> Self {
        Self::restore(
            ActuatorId::new(),
            device_id,
            model_name,
            int_limits,
            decimal_limits,
        )
    }

    /// Reconstruct an actuator from storage with a known identity.
    #[must_use]
    pub fn restore(
        id: ActuatorId,
        device_id: DeviceId,
        model_name: ActuatorModelName,
        int_limits: Option<IntLimits>,
        decimal_limits: Option<DecimalLimits>,
    ) -> Self {
        Self {
            id,
            device_id,
            model_name,
            int_limits,
            decimal_limits,
        }
    }

    #[must_use]
    pub fn identity(&self) -> ActuatorId {
        self.id
    }

    #[must_use]
    pub fn device_id(&self) -> DeviceId {
        self.device_id
    }

    #[must_use]
    pub fn model_name(&self) -> &ActuatorModelName {
        &self.model_name
    }

    #[must_use]
    pub fn int_limits(&self) -> Option<IntLimits> {
        self.int_limits
    }

    #[must_use]
    pub fn decimal_limits(&self) -> Option<DecimalLimits> {
        self.decimal_limits
    }

    /// Move the actuator to another device. The one allowed reconfiguration,
    /// used at install time.
    pub fn relocate(&mut self, device_id: DeviceId) {
        self.device_id = device_id;
    }
}

impl PartialEq for Actuator {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Actuator {}

impl std::hash::Hash for Actuator {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
