//! Persistence capability for insight reports.

use async_trait::async_trait;

use crate::error::StoreError;
use crate::types::InsightReport;

/// Save/load-latest persistence capability.
///
/// The storage mechanism is opaque; the only contract is that whatever is
/// saved is exactly what `load_latest` returns, field-for-field, for the
/// "latest" slot. Concurrent writers are last-write-wins; no locking is
/// promised. Save failure is fatal to a pipeline run.
#[async_trait]
pub trait InsightStore: Send + Sync {
    /// Overwrite the latest slot with this report.
    async fn save(&self, report: &InsightReport) -> Result<(), StoreError>;

    /// Load the latest report, or `None` if nothing was ever saved.
    async fn load_latest(&self) -> Result<Option<InsightReport>, StoreError>;
}
