//! Reading — an immutable measurement taken by a sensor at an instant.
//!
//! Readings are create-and-query only: no update operation exists anywhere
//! in the model. Values are stored string-encoded and parsed to `f64` at
//! aggregation time; a value that fails to parse is a data-integrity error,
//! never silently skipped.

use serde::{Deserialize, Serialize};

use crate::error::{DataIntegrityError, ValidationError};
use crate::id::{ReadingId, SensorId};
use crate::time::Timestamp;

/// String-encoded measurement value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReadingValue(String);

impl ReadingValue {
    /// Wrap a raw encoded value.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Blank`] when the string is empty or
    /// whitespace-only. The content is otherwise uninterpreted here; decoding
    /// happens at aggregation time.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Blank("reading value"));
        }
        Ok(Self(value))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse the encoded value as a decimal.
    pub(crate) fn parse_decimal(&self) -> Result<f64, std::num::ParseFloatError> {
        self.0.trim().parse()
    }
}

impl std::fmt::Display for ReadingValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A decimal result produced by the aggregation operations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DecimalValue(f64);

impl DecimalValue {
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl std::fmt::Display for DecimalValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// The reading aggregate. Identity-based equality: two readings with
/// identical value, sensor, and timestamp but different generated ids are
/// distinct measurements.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reading {
    id: ReadingId,
    value: ReadingValue,
    sensor_id: SensorId,
    timestamp: Timestamp,
}

impl Reading {
    /// Record a fresh reading, generating its identity.
    #[must_use]
    pub fn new(value: ReadingValue, sensor_id: SensorId, timestamp: Timestamp) -> Self {
        Self::restore(ReadingId::new(), value, sensor_id, timestamp)
    }

    /// Reconstruct a reading from storage with a known identity.
    #[must_use]
    pub fn restore(
        id: ReadingId,
        value: ReadingValue,
        sensor_id: SensorId,
        timestamp: Timestamp,
    ) -> Self {
        Self {
            id,
            value,
            sensor_id,
            timestamp,
        }
    }

    /// The generated identity, immutable once set.
    #[must_use]
    pub fn identity(&self) -> ReadingId {
        self.id
    }

    #[must_use]
    pub fn value(&self) -> &ReadingValue {
        &self.value
    }

    #[must_use]
    pub fn sensor_id(&self) -> SensorId {
        self.sensor_id
    }

    #[must_use]
    pub fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    /// Decode the stored value as a decimal.
    ///
    /// # Errors
    ///
    /// Returns [`DataIntegrityError`] when the stored string is not a valid
    /// decimal. This is fatal by contract: a corrupt reading indicates
    /// upstream corruption that aggregation must not mask.
    pub fn decimal_value(&self) -> Result<f64, DataIntegrityError> {
        self.value.parse_decimal().map_err(|_| DataIntegrityError {
            reading: self.id.to_string(),
            value: self.value.as_str().to_owned(),
        })
    }
}

impl PartialEq for Reading {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Reading {}

impl std::hash::Hash for Reading {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
