//! Configuration — analytics tuning and the catalog seed.
//!
//! The raw structs mirror the TOML file shape; every field has a default so
//! the file is optional. The app crate performs no file IO: callers hand the
//! file contents to [`Config::from_toml_str`]. Validated counterparts
//! ([`AnalyticsSettings`]) are built from the raw values at wiring time so
//! that services only ever see well-formed names.

use serde::Deserialize;

use domo_domain::actuator::{ActuatorModel, ActuatorType};
use domo_domain::device::DeviceType;
use domo_domain::error::{DomoError, ValidationError};
use domo_domain::id::{
    ActuatorModelName, ActuatorTypeName, DeviceTypeName, SensorModelName, SensorTypeId,
    SensorTypeName, SensorTypeUnit,
};
use domo_domain::sensor::{SensorModel, SensorType};

use crate::ports::{
    ActuatorModelRepository, ActuatorTypeRepository, DeviceTypeRepository, SensorModelRepository,
    SensorTypeRepository,
};

/// Top-level configuration file shape.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Analytics tuning.
    pub analytics: AnalyticsConfig,
    /// Catalog seed applied at startup.
    pub catalog: CatalogConfig,
}

impl Config {
    /// Parse a TOML document.
    ///
    /// # Errors
    ///
    /// Returns the underlying TOML error on malformed input.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

/// Raw analytics settings as they appear in the TOML file.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// Pairing tolerance in seconds for the instant-difference query.
    pub delta_seconds: i64,
    /// Sensor model whose readings are temperatures.
    pub temperature_model: String,
    /// Sensor model whose readings are power consumption.
    pub power_model: String,
    /// Device types that count as power meters.
    pub power_meter_device_types: Vec<String>,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            delta_seconds: 60,
            temperature_model: "SensorOfTemperature".to_owned(),
            power_model: "SensorOfPowerConsumption".to_owned(),
            power_meter_device_types: vec![
                "GridPowerMeter".to_owned(),
                "PowerSourcePowerMeter".to_owned(),
            ],
        }
    }
}

/// Validated analytics settings consumed by the reading service.
#[derive(Debug, Clone)]
pub struct AnalyticsSettings {
    /// Two readings pair when their timestamps differ by at most this many
    /// seconds.
    pub delta_seconds: i64,
    /// Sensor model identifying temperature streams.
    pub temperature_model: SensorModelName,
    /// Sensor model identifying power-consumption streams.
    pub power_model: SensorModelName,
    /// Device types whose sensors feed the peak-power query.
    pub power_meter_types: Vec<DeviceTypeName>,
}

impl TryFrom<AnalyticsConfig> for AnalyticsSettings {
    type Error = ValidationError;

    fn try_from(raw: AnalyticsConfig) -> Result<Self, Self::Error> {
        Ok(Self {
            delta_seconds: raw.delta_seconds,
            temperature_model: SensorModelName::new(raw.temperature_model)?,
            power_model: SensorModelName::new(raw.power_model)?,
            power_meter_types: raw
                .power_meter_device_types
                .into_iter()
                .map(DeviceTypeName::new)
                .collect::<Result<_, _>>()?,
        })
    }
}

/// A sensor type entry in the catalog seed.
#[derive(Debug, Clone, Deserialize)]
pub struct SensorTypeEntry {
    pub name: String,
    pub unit: String,
}

/// A sensor model entry in the catalog seed.
#[derive(Debug, Clone, Deserialize)]
pub struct SensorModelEntry {
    pub name: String,
    pub sensor_type_id: String,
}

/// An actuator model entry in the catalog seed.
#[derive(Debug, Clone, Deserialize)]
pub struct ActuatorModelEntry {
    pub name: String,
    pub actuator_type: String,
}

/// The startup catalog seed: types and models the aggregation queries rely
/// on. Must be applied before any analytic query runs.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub sensor_types: Vec<SensorTypeEntry>,
    pub sensor_models: Vec<SensorModelEntry>,
    pub actuator_types: Vec<String>,
    pub actuator_models: Vec<ActuatorModelEntry>,
    pub device_types: Vec<String>,
}

/// Populate the five catalog repositories from the seed.
///
/// # Errors
///
/// Returns a validation error on a malformed entry or a storage error from
/// any repository.
pub async fn seed_catalog<ST, SM, AT, AM, DT>(
    catalog: &CatalogConfig,
    sensor_types: &ST,
    sensor_models: &SM,
    actuator_types: &AT,
    actuator_models: &AM,
    device_types: &DT,
) -> Result<(), DomoError>
where
    ST: SensorTypeRepository,
    SM: SensorModelRepository,
    AT: ActuatorTypeRepository,
    AM: ActuatorModelRepository,
    DT: DeviceTypeRepository,
{
    for entry in &catalog.sensor_types {
        let sensor_type = SensorType::new(
            SensorTypeName::new(entry.name.clone())?,
            SensorTypeUnit::new(entry.unit.clone())?,
        );
        sensor_types.save(sensor_type).await?;
    }
    for entry in &catalog.sensor_models {
        let model = SensorModel::new(
            SensorModelName::new(entry.name.clone())?,
            SensorTypeId::new(entry.sensor_type_id.clone())?,
        );
        sensor_models.save(model).await?;
    }
    for name in &catalog.actuator_types {
        let actuator_type = ActuatorType::new(ActuatorTypeName::new(name.clone())?);
        actuator_types.save(actuator_type).await?;
    }
    for entry in &catalog.actuator_models {
        let model = ActuatorModel::new(
            ActuatorModelName::new(entry.name.clone())?,
            ActuatorTypeName::new(entry.actuator_type.clone())?,
        );
        actuator_models.save(model).await?;
    }
    for name in &catalog.device_types {
        let device_type = DeviceType::new(DeviceTypeName::new(name.clone())?);
        device_types.save(device_type).await?;
    }
    tracing::debug!(
        sensor_types = catalog.sensor_types.len(),
        sensor_models = catalog.sensor_models.len(),
        device_types = catalog.device_types.len(),
        "catalog seeded"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_apply_defaults_when_file_is_empty() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config.analytics.delta_seconds, 60);
        assert_eq!(config.analytics.temperature_model, "SensorOfTemperature");
        assert!(config.catalog.sensor_types.is_empty());
    }

    #[test]
    fn should_parse_analytics_overrides() {
        let config = Config::from_toml_str(
            r#"
            [analytics]
            delta_seconds = 120
            power_meter_device_types = ["GridPowerMeter"]
            "#,
        )
        .unwrap();
        assert_eq!(config.analytics.delta_seconds, 120);
        assert_eq!(
            config.analytics.power_meter_device_types,
            vec!["GridPowerMeter"]
        );
        // untouched fields keep their defaults
        assert_eq!(config.analytics.power_model, "SensorOfPowerConsumption");
    }

    #[test]
    fn should_parse_catalog_entries() {
        let config = Config::from_toml_str(
            r#"
            [catalog]
            device_types = ["GridPowerMeter", "Thermostat"]

            [[catalog.sensor_types]]
            name = "Temperature"
            unit = "Celsius"

            [[catalog.sensor_models]]
            name = "SensorOfTemperature"
            sensor_type_id = "TemperatureCelsius"
            "#,
        )
        .unwrap();
        assert_eq!(config.catalog.device_types.len(), 2);
        assert_eq!(config.catalog.sensor_types[0].unit, "Celsius");
        assert_eq!(
            config.catalog.sensor_models[0].sensor_type_id,
            "TemperatureCelsius"
        );
    }

    #[test]
    fn should_validate_settings_from_raw_config() {
        let settings = AnalyticsSettings::try_from(AnalyticsConfig::default()).unwrap();
        assert_eq!(settings.delta_seconds, 60);
        assert_eq!(settings.temperature_model.as_str(), "SensorOfTemperature");
        assert_eq!(settings.power_meter_types.len(), 2);
    }

    #[test]
    fn should_reject_blank_model_name_in_config() {
        let raw = AnalyticsConfig {
            temperature_model: String::new(),
            ..AnalyticsConfig::default()
        };
        assert!(AnalyticsSettings::try_from(raw).is_err());
    }
}
