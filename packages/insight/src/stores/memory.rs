//! In-memory insight store for testing and development.

use async_trait::async_trait;
use std::sync::RwLock;

use crate::error::StoreError;
use crate::traits::InsightStore;
use crate::types::InsightReport;

/// In-memory "latest" slot.
///
/// Useful for tests and development; data is lost on drop.
#[derive(Default)]
pub struct MemoryStore {
    latest: RwLock<Option<InsightReport>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear the latest slot.
    pub fn clear(&self) {
        *self.latest.write().unwrap() = None;
    }
}

#[async_trait]
impl InsightStore for MemoryStore {
    async fn save(&self, report: &InsightReport) -> Result<(), StoreError> {
        *self.latest.write().unwrap() = Some(report.clone());
        Ok(())
    }

    async fn load_latest(&self) -> Result<Option<InsightReport>, StoreError> {
        Ok(self.latest.read().unwrap().clone())
    }
}
