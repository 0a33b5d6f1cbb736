//! Reading repository port — the query surface of the aggregation engine.

use std::future::Future;

use domo_domain::error::DomoError;
use domo_domain::id::{ReadingId, SensorId};
use domo_domain::reading::Reading;
use domo_domain::time::Period;

use super::repository::Repository;

/// Repository for [`Reading`] aggregates. Readings are insert-only: `save`
/// on an existing identity is a storage error, and no update method exists.
pub trait ReadingRepository: Repository<ReadingId, Reading> {
    /// All readings of a sensor whose timestamp falls inside the period,
    /// inclusive on both bounds.
    fn find_readings_by_sensor_id_in_period(
        &self,
        sensor_id: SensorId,
        period: &Period,
    ) -> impl Future<Output = Result<Vec<Reading>, DomoError>> + Send;

    /// Identity-only projection of
    /// [`Self::find_readings_by_sensor_id_in_period`], for callers that do
    /// not need the full aggregates of a large reading set.
    fn find_reading_ids_by_sensor_id_in_period(
        &self,
        sensor_id: SensorId,
        period: &Period,
    ) -> impl Future<Output = Result<Vec<ReadingId>, DomoError>> + Send;

    /// The most recent reading of a sensor, if any.
    fn find_latest_reading_by_sensor_id(
        &self,
        sensor_id: SensorId,
    ) -> impl Future<Output = Result<Option<Reading>, DomoError>> + Send;
}
