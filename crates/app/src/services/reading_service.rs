//! Reading service — recording measurements and running the aggregation
//! queries over them.
//!
//! Values are decoded from their stored string form eagerly, before any
//! pairing or comparison: a corrupt value aborts the whole query with an
//! integrity error instead of being skipped. "No data" outcomes are typed
//! errors, never a zero result.

use domo_domain::error::{DomoError, NoDataError, NotFoundError};
use domo_domain::id::{DeviceId, ReadingId, SensorId};
use domo_domain::reading::{DecimalValue, Reading, ReadingValue};
use domo_domain::time::{Period, Timestamp};

use crate::config::AnalyticsSettings;
use crate::ports::{DeviceRepository, ReadingRepository, Repository, SensorRepository};

/// A reading decoded to its decimal value, keyed by instant.
struct Sample {
    timestamp: Timestamp,
    value: f64,
}

/// Application service for reading ingestion and analytics.
pub struct ReadingService<R, S, D> {
    readings: R,
    sensors: S,
    devices: D,
    settings: AnalyticsSettings,
}

impl<R, S, D> ReadingService<R, S, D>
where
    R: ReadingRepository,
    S: SensorRepository,
    D: DeviceRepository,
{
    /// Create a new service backed by the given repositories.
    pub fn new(readings: R, sensors: S, devices: D, settings: AnalyticsSettings) -> Self {
        Self {
            readings,
            sensors,
            devices,
            settings,
        }
    }

    /// Record a measurement taken by an existing sensor.
    ///
    /// # Errors
    ///
    /// Returns [`DomoError::NotFound`] when the sensor does not exist, or a
    /// storage error from the repository.
    #[tracing::instrument(skip(self, value, timestamp), fields(sensor = %sensor_id))]
    pub async fn record_reading(
        &self,
        value: ReadingValue,
        sensor_id: SensorId,
        timestamp: Timestamp,
    ) -> Result<Reading, DomoError> {
        if !self.sensors.exists_by_identity(&sensor_id).await? {
            return Err(NotFoundError {
                entity: "Sensor",
                id: sensor_id.to_string(),
            }
            .into());
        }
        self.readings
            .save(Reading::new(value, sensor_id, timestamp))
            .await
    }

    /// Look a reading up by id.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn get_reading(&self, id: ReadingId) -> Result<Option<Reading>, DomoError> {
        self.readings.find_by_identity(&id).await
    }

    /// The most recent reading of a sensor, if any.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn latest_reading(&self, sensor_id: SensorId) -> Result<Option<Reading>, DomoError> {
        self.readings.find_latest_reading_by_sensor_id(sensor_id).await
    }

    /// All readings produced by any sensor of a device inside the period,
    /// inclusive on both bounds.
    ///
    /// # Errors
    ///
    /// Returns [`DomoError::NotFound`] when the device does not exist, or a
    /// storage error from the repository.
    pub async fn readings_from_device_in_period(
        &self,
        device_id: DeviceId,
        period: &Period,
    ) -> Result<Vec<Reading>, DomoError> {
        self.require_device(device_id).await?;
        let sensors = self.sensors.find_sensors_by_device_id(device_id).await?;
        let mut readings = Vec::new();
        for sensor in sensors {
            let mut batch = self
                .readings
                .find_readings_by_sensor_id_in_period(sensor.identity(), period)
                .await?;
            readings.append(&mut batch);
        }
        Ok(readings)
    }

    /// Identity-only projection of [`Self::readings_from_device_in_period`].
    ///
    /// # Errors
    ///
    /// Returns [`DomoError::NotFound`] when the device does not exist, or a
    /// storage error from the repository.
    pub async fn reading_ids_from_device_in_period(
        &self,
        device_id: DeviceId,
        period: &Period,
    ) -> Result<Vec<ReadingId>, DomoError> {
        self.require_device(device_id).await?;
        let sensors = self.sensors.find_sensors_by_device_id(device_id).await?;
        let mut ids = Vec::new();
        for sensor in sensors {
            let mut batch = self
                .readings
                .find_reading_ids_by_sensor_id_in_period(sensor.identity(), period)
                .await?;
            ids.append(&mut batch);
        }
        Ok(ids)
    }

    /// The largest instantaneous temperature difference between two devices
    /// inside the period.
    ///
    /// Two readings form a pair when their timestamps differ by at most the
    /// configured tolerance in whole seconds. The result is the maximum
    /// absolute value difference over all pairs.
    ///
    /// # Errors
    ///
    /// Returns [`DomoError::NotFound`] when a device does not exist,
    /// [`DomoError::NoData`] when either device lacks temperature sensors or
    /// readings, or when no pair falls within the tolerance, and
    /// [`DomoError::Integrity`] when any stored value fails to decode.
    #[tracing::instrument(skip(self, period), fields(device_a = %device_a, device_b = %device_b))]
    pub async fn max_instant_temperature_difference(
        &self,
        device_a: DeviceId,
        device_b: DeviceId,
        period: &Period,
    ) -> Result<DecimalValue, DomoError> {
        let series_a = self.temperature_series(device_a, period).await?;
        let series_b = self.temperature_series(device_b, period).await?;

        let delta = self.settings.delta_seconds;
        let mut max_diff: Option<f64> = None;
        for a in &series_a {
            for b in &series_b {
                let gap = (a.timestamp - b.timestamp).num_seconds().abs();
                if gap <= delta {
                    let diff = (a.value - b.value).abs();
                    max_diff = Some(max_diff.map_or(diff, |m| m.max(diff)));
                }
            }
        }
        max_diff
            .map(DecimalValue::new)
            .ok_or_else(|| NoDataError::NoAlignedReadings { delta_seconds: delta }.into())
    }

    /// The single highest power reading across every configured power-meter
    /// device inside the period.
    ///
    /// # Errors
    ///
    /// Returns [`DomoError::NoData`] when no power reading exists in the
    /// window, and [`DomoError::Integrity`] when any stored value fails to
    /// decode.
    #[tracing::instrument(skip(self, period))]
    pub async fn peak_power_in_period(&self, period: &Period) -> Result<DecimalValue, DomoError> {
        let mut peak: Option<f64> = None;
        for type_name in &self.settings.power_meter_types {
            let device_ids = self
                .devices
                .find_device_ids_by_device_type(type_name)
                .await?;
            for device_id in device_ids {
                let sensor_ids = self
                    .sensors
                    .find_sensor_ids_by_device_id_and_model(device_id, &self.settings.power_model)
                    .await?;
                for sensor_id in sensor_ids {
                    let readings = self
                        .readings
                        .find_readings_by_sensor_id_in_period(sensor_id, period)
                        .await?;
                    for reading in readings {
                        let value = reading.decimal_value()?;
                        peak = Some(peak.map_or(value, |m| m.max(value)));
                    }
                }
            }
        }
        peak.map(DecimalValue::new)
            .ok_or_else(|| NoDataError::NoPowerReadings.into())
    }

    async fn require_device(&self, device_id: DeviceId) -> Result<(), DomoError> {
        if self.devices.exists_by_identity(&device_id).await? {
            Ok(())
        } else {
            Err(NotFoundError {
                entity: "Device",
                id: device_id.to_string(),
            }
            .into())
        }
    }

    /// Decode every temperature reading of a device inside the period.
    ///
    /// Fails with `NoMatchingSensors` when the device has no sensor of the
    /// configured temperature model, and `NoReadingsInPeriod` when its
    /// sensors produced nothing inside the window.
    async fn temperature_series(
        &self,
        device_id: DeviceId,
        period: &Period,
    ) -> Result<Vec<Sample>, DomoError> {
        self.require_device(device_id).await?;
        let sensor_ids = self
            .sensors
            .find_sensor_ids_by_device_id_and_model(device_id, &self.settings.temperature_model)
            .await?;
        if sensor_ids.is_empty() {
            return Err(NoDataError::NoMatchingSensors {
                device: device_id.to_string(),
                model: self.settings.temperature_model.to_string(),
            }
            .into());
        }
        let mut series = Vec::new();
        for sensor_id in sensor_ids {
            let readings = self
                .readings
                .find_readings_by_sensor_id_in_period(sensor_id, period)
                .await?;
            for reading in readings {
                series.push(Sample {
                    timestamp: reading.timestamp(),
                    value: reading.decimal_value()?,
                });
            }
        }
        if series.is_empty() {
            return Err(NoDataError::NoReadingsInPeriod {
                device: device_id.to_string(),
            }
            .into());
        }
        Ok(series)
    }
}
