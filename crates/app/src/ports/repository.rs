//! The generic persistence contract every aggregate repository satisfies.

use std::future::Future;

use domo_domain::error::DomoError;

/// Generic repository over an identifier type `Id` and aggregate type `A`.
///
/// Contract:
/// - `save` upserts; for aggregates with natural keys this overwrites, for
///   generated-id aggregates the call site only ever inserts.
/// - Single-aggregate lookups never fail on absence: they return `None`.
///   Malformed identifiers cannot reach a repository because identifier
///   construction is validated.
/// - Each call must reflect one consistent snapshot of the store. No
///   ordering guarantee is made across calls that race with writes.
pub trait Repository<Id, A> {
    /// Persist the aggregate, returning the stored value.
    fn save(&self, aggregate: A) -> impl Future<Output = Result<A, DomoError>> + Send;

    /// Look an aggregate up by identity.
    fn find_by_identity(
        &self,
        id: &Id,
    ) -> impl Future<Output = Result<Option<A>, DomoError>> + Send;

    /// All stored aggregates, in no particular order.
    fn find_all(&self) -> impl Future<Output = Result<Vec<A>, DomoError>> + Send;

    /// Whether an aggregate with this identity exists.
    fn exists_by_identity(&self, id: &Id)
    -> impl Future<Output = Result<bool, DomoError>> + Send;
}
