//! Common error types used across the workspace.
//!
//! Each failure class gets its own typed error, folded into [`DomoError`]
//! via `#[from]`. Absence on a single-aggregate lookup is *not* an error:
//! repositories return `Option` and only services promote absence to
//! [`NotFoundError`] when a use-case requires the aggregate to exist.

/// Top-level error for domain and application operations.
#[derive(Debug, thiserror::Error)]
pub enum DomoError {
    /// A required field was blank, missing, or out of range at construction
    /// time. Always a caller bug.
    #[error("Validation error")]
    Validation(#[from] ValidationError),

    /// A use-case required an aggregate that does not exist.
    #[error("Not found")]
    NotFound(#[from] NotFoundError),

    /// A domain state transition was rejected.
    #[error("Domain rule violation")]
    Rule(#[from] RuleViolation),

    /// An aggregation window produced zero eligible readings. Distinct from
    /// not-found and never conflated with a legitimate zero result.
    #[error("No data")]
    NoData(#[from] NoDataError),

    /// A stored reading could not be interpreted. Always fatal: it signals
    /// upstream corruption that aggregation must not mask.
    #[error("Data integrity error")]
    Integrity(#[from] DataIntegrityError),

    /// The backing store failed.
    #[error("Storage error")]
    Storage(#[from] StorageError),
}

/// Construction-time validation failures.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// A string-backed value object was given a blank or empty string.
    #[error("{0} must not be blank")]
    Blank(&'static str),

    /// A period was constructed with `start > end`.
    #[error("period start {start} is after end {end}")]
    PeriodStartAfterEnd {
        start: chrono::DateTime<chrono::Utc>,
        end: chrono::DateTime<chrono::Utc>,
    },

    /// Latitude outside `[-90, 90]`.
    #[error("latitude {0} is out of range")]
    LatitudeOutOfRange(f64),

    /// Longitude outside `[-180, 180]`.
    #[error("longitude {0} is out of range")]
    LongitudeOutOfRange(f64),

    /// A room dimension must be strictly positive.
    #[error("{what} must be positive, got {value}")]
    NonPositiveDimension { what: &'static str, value: f64 },

    /// The country is not in the supported-country table.
    #[error("country {0:?} is not supported")]
    UnsupportedCountry(String),

    /// The zip code does not match the country's format.
    #[error("zip code {zip:?} is not valid for {country}")]
    InvalidZipCode { country: &'static str, zip: String },

    /// An actuator limit pair with lower above upper.
    #[error("{0} lower limit is above the upper limit")]
    InvertedLimits(&'static str),
}

/// A use-case looked up an aggregate by identity and found nothing.
#[derive(Debug, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    /// The aggregate kind, e.g. `"Device"`.
    pub entity: &'static str,
    /// The identity that was looked up.
    pub id: String,
}

/// A domain state transition was rejected by the aggregate itself.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum RuleViolation {
    /// `deactivate` was called on a device that is already inactive.
    /// Deliberately not idempotent: a second call signals a caller-logic
    /// error instead of silently no-op-ing.
    #[error("device {0} is already inactive")]
    DeviceAlreadyInactive(String),
}

/// An analytic query over a time window found nothing to aggregate.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum NoDataError {
    /// The device has no sensor of the required model.
    #[error("device {device} has no sensor of model {model}")]
    NoMatchingSensors { device: String, model: String },

    /// The device's sensors produced no readings inside the window.
    #[error("device {device} has no readings in the requested period")]
    NoReadingsInPeriod { device: String },

    /// Both devices had readings, but no pair of timestamps fell within the
    /// pairing tolerance.
    #[error("no reading pair within {delta_seconds}s of each other")]
    NoAlignedReadings { delta_seconds: i64 },

    /// No power-meter reading exists anywhere in the window.
    #[error("no power readings in the requested period")]
    NoPowerReadings,
}

/// A stored reading value failed to parse as a decimal.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("reading {reading} holds unparseable value {value:?}")]
pub struct DataIntegrityError {
    /// Identity of the corrupt reading.
    pub reading: String,
    /// The raw stored value.
    pub value: String,
}

/// Failures raised by a repository implementation.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Insert-only storage refused to overwrite an existing identity.
    #[error("{entity} {id} already exists")]
    DuplicateIdentity { entity: &'static str, id: String },

    /// The backend itself failed.
    #[error("storage backend error: {0}")]
    Backend(String),
}
