use crate::category::Category;
use crate::errors::EconResult;
use crate::models::ReferencePayload;

/// Supplier of reference snapshots.
///
/// Production implementations call live APIs and may fail on network or
/// auth errors; the snapshot store absorbs those failures.
pub trait ReferenceDataSource: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &str;

    /// Fetch the current payload for a category.
    fn fetch(&self, category: Category) -> EconResult<ReferencePayload>;
}
